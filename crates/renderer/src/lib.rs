//! Chart layout for the memory window.
//!
//! Turns a [`WindowSnapshot`] into plot-ready data: points, axis bounds and
//! a thinned set of tick labels. Pure data; drawing lives in `rssmon-widgets`.

use rssmon_core::WindowSnapshot;

/// Most X-axis labels drawn at once; the rest are skipped.
pub const MAX_X_TICKS: usize = 5;
/// Number of Y-axis labels.
pub const Y_TICKS: usize = 3;
/// Smallest upper Y bound, so an idle process still gets a readable scale.
pub const MIN_Y_CEILING: f64 = 1.0;

/// Plot-ready view of one snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub series:   String,
    /// `(position, megabytes)`.
    pub points:   Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
}

impl ChartData {
    pub fn from_snapshot(snapshot: &WindowSnapshot) -> Self {
        let points: Vec<(f64, f64)> = snapshot
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v))
            .collect();

        let last = snapshot.len().saturating_sub(1) as f64;
        let ceiling = nice_ceiling(snapshot.peak());

        Self {
            series: snapshot.series.clone(),
            points,
            x_bounds: [0.0, last.max(1.0)],
            y_bounds: [0.0, ceiling],
            x_labels: tick_positions(snapshot.len(), MAX_X_TICKS)
                .into_iter()
                .map(|i| snapshot.labels.get(&i).cloned().unwrap_or_default())
                .collect(),
            y_labels: (0..Y_TICKS)
                .map(|i| format_axis_value(ceiling * i as f64 / (Y_TICKS - 1) as f64))
                .collect(),
        }
    }
}

/// Round `peak` up to 1, 2 or 5 times a power of ten, with headroom.
pub fn nice_ceiling(peak: f64) -> f64 {
    if !peak.is_finite() || peak <= 0.0 {
        return MIN_Y_CEILING;
    }

    let target = peak * 1.1;
    let magnitude = 10f64.powf(target.log10().floor());
    let ceiling = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|c| *c >= target)
        .unwrap_or(10.0 * magnitude);

    ceiling.max(MIN_Y_CEILING)
}

/// Evenly spaced indices into `len` items, always including both ends.
pub fn tick_positions(len: usize, max_ticks: usize) -> Vec<usize> {
    match (len, max_ticks) {
        (0, _) | (_, 0) => Vec::new(),
        (1, _) | (_, 1) => vec![0],
        _ if len <= max_ticks => (0..len).collect(),
        _ => {
            let span = (len - 1) as f64;
            let steps = (max_ticks - 1) as f64;
            (0..max_ticks)
                .map(|i| (span * i as f64 / steps).round() as usize)
                .collect()
        }
    }
}

fn format_axis_value(mb: f64) -> String {
    if mb >= 100.0 || mb.fract() == 0.0 {
        format!("{mb:.0}")
    } else {
        format!("{mb:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rssmon_core::Sample;

    #[test]
    fn ceiling_rounds_up_with_headroom() {
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(0.3), 1.0);
        assert_eq!(nice_ceiling(1.0), 2.0);
        assert_eq!(nice_ceiling(42.0), 50.0);
        assert_eq!(nice_ceiling(95.0), 200.0);
        assert_eq!(nice_ceiling(f64::NAN), 1.0);
    }

    #[test]
    fn ticks_cover_both_ends() {
        assert_eq!(tick_positions(0, 5), Vec::<usize>::new());
        assert_eq!(tick_positions(1, 5), vec![0]);
        assert_eq!(tick_positions(3, 5), vec![0, 1, 2]);
        assert_eq!(tick_positions(101, 5), vec![0, 25, 50, 75, 100]);
    }

    #[test]
    fn chart_data_from_window() {
        let samples: Vec<Sample> = (0..11)
            .map(|i| Sample::new(i as f64, format!("00:{i:02}")))
            .collect();
        let snap = WindowSnapshot::from_samples("rss", &samples);
        let data = ChartData::from_snapshot(&snap);

        assert_eq!(data.series, "rss");
        assert_eq!(data.points.len(), 11);
        assert_eq!(data.points[3], (3.0, 3.0));
        assert_eq!(data.x_bounds, [0.0, 10.0]);
        assert_eq!(data.y_bounds, [0.0, 20.0]);
        assert_eq!(data.x_labels, vec!["00:00", "00:03", "00:05", "00:08", "00:10"]);
        assert_eq!(data.y_labels, vec!["0", "10", "20"]);
    }

    #[test]
    fn empty_window_still_has_bounds() {
        let data = ChartData::from_snapshot(&WindowSnapshot::default());
        assert!(data.points.is_empty());
        assert_eq!(data.x_bounds, [0.0, 1.0]);
        assert_eq!(data.y_bounds, [0.0, 1.0]);
        assert_eq!(data.y_labels, vec!["0", "0.5", "1"]);
    }
}
