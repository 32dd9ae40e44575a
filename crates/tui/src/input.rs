use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use rssmon_core::Message;

/// Map a terminal event to an application message. Only quit keys matter:
/// `q`, `Q`, and `Ctrl-C` (raw mode swallows SIGINT).
pub fn translate(event: &Event) -> Option<Message> {
    let Event::Key(key) = event else {
        return None;
    };
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Message::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Message::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn quit_keys() {
        assert!(matches!(translate(&key(KeyCode::Char('q'), KeyModifiers::NONE)), Some(Message::Quit)));
        assert!(matches!(translate(&key(KeyCode::Char('Q'), KeyModifiers::SHIFT)), Some(Message::Quit)));
        assert!(matches!(translate(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(Message::Quit)));
    }

    #[test]
    fn other_events_are_ignored() {
        assert!(translate(&key(KeyCode::Char('c'), KeyModifiers::NONE)).is_none());
        assert!(translate(&key(KeyCode::Esc, KeyModifiers::NONE)).is_none());
        assert!(translate(&Event::Resize(80, 24)).is_none());

        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(translate(&Event::Key(release)).is_none());
    }
}
