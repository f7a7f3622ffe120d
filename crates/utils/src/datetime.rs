use std::fs::Metadata;
use std::time::SystemTime;

use chrono::{DateTime, Local};

#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub fn system_time_to_datetime(time: std::io::Result<SystemTime>) -> Option<DateTime<Local>> {
    time.ok().and_then(|t| {
        t.duration_since(SystemTime::UNIX_EPOCH)
            .ok()
            .and_then(|d| DateTime::from_timestamp(d.as_secs() as i64, d.subsec_nanos()))
            .map(|utc| utc.with_timezone(&Local))
    })
}

/// When a file was added to the library: creation time, else modification time.
#[must_use]
pub fn added_time(metadata: &Metadata) -> Option<DateTime<Local>> {
    system_time_to_datetime(metadata.created()).or_else(|| system_time_to_datetime(metadata.modified()))
}

#[must_use]
pub fn format_added(time: &DateTime<Local>) -> String {
    time.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    use super::*;
    use std::io;
    use std::time::Duration;

    #[test]
    fn test_system_time_to_datetime_valid_time() {
        let system_time = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000_000);
        let datetime = system_time_to_datetime(Ok(system_time)).unwrap();
        assert_eq!(datetime.timestamp(), 1_000_000_000);
    }

    #[test]
    fn test_system_time_to_datetime_error() {
        let result = system_time_to_datetime(Err(io::Error::other("unsupported")));
        assert!(result.is_none());
    }

    #[test]
    fn test_system_time_before_epoch() {
        let before = SystemTime::UNIX_EPOCH - Duration::from_secs(10);
        assert!(system_time_to_datetime(Ok(before)).is_none());
    }

    #[test]
    fn test_added_time_for_real_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.jpg");
        std::fs::write(&path, b"x").unwrap();
        let metadata = std::fs::metadata(&path).unwrap();
        let added = added_time(&metadata).expect("platform reports mtime at least");
        let age = Local::now().signed_duration_since(added);
        assert!(age.num_seconds().abs() < 60);
    }

    #[test]
    fn test_format_added() {
        use chrono::TimeZone;
        let t = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 0).unwrap();
        assert_eq!(format_added(&t), "2024-03-09 07:05");
    }
}
