use rssmon_core::{MonitorError, Result};
use std::io::BufRead;

/// Key of the resident-set-size line in `/proc/<pid>/status`.
pub const RSS_KEY: &[u8] = b"VmRSS:";
/// Key of the command-name line in `/proc/<pid>/status`.
pub const NAME_KEY: &[u8] = b"Name:";

/// Kilobytes to megabytes, plain `f64` division.
#[inline]
pub fn kib_to_mib(kib: u64) -> f64 {
    kib as f64 / 1024.0
}

/// Scan a status listing for the `VmRSS:` value in kilobytes.
///
/// Lines are matched as raw bytes: `Name:` may hold any bytes a process set
/// with `PR_SET_NAME`, and must not stop the scan. A `VmRSS:` line with
/// fewer than two fields is skipped.
pub fn parse_rss_kib(reader: impl BufRead, pid: u32) -> Result<u64> {
    for line in reader.split(b'\n') {
        let line = line?;
        if !line.starts_with(RSS_KEY) {
            continue;
        }

        let Some(field) = line
            .split(|b| b.is_ascii_whitespace())
            .filter(|f| !f.is_empty())
            .nth(1)
        else {
            continue;
        };

        let value = String::from_utf8_lossy(field);
        return value.parse::<u64>().map_err(|source| MonitorError::Parse {
            pid,
            value: value.into_owned(),
            source,
        });
    }

    Err(MonitorError::MissingMetric { pid })
}

/// Command name from a status listing, if present. Invalid UTF-8 is
/// replaced rather than rejected.
pub fn parse_name(reader: impl BufRead) -> Option<String> {
    reader
        .split(b'\n')
        .map_while(|line| line.ok())
        .find_map(|line| {
            line.strip_prefix(NAME_KEY)
                .map(|rest| String::from_utf8_lossy(rest).trim().to_string())
        })
        .filter(|name| !name.is_empty())
}

/// Format a megabyte value for labels (e.g. `"7.3 GB"`).
pub fn format_megabytes(mb: f64) -> String {
    const GB: f64 = 1024.0;

    if mb >= GB {
        format!("{:.1} GB", mb / GB)
    } else if mb >= 10.0 {
        format!("{mb:.0} MB")
    } else {
        format!("{mb:.1} MB")
    }
}
