use chrono::{DateTime, Datelike};

/// Track length as m:ss.
pub fn format_duration(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{mins}:{secs:02}")
}

/// Release timestamps arrive as epoch seconds; views show only the year.
pub fn release_year(epoch_seconds: i64) -> i32 {
    DateTime::from_timestamp(epoch_seconds, 0)
        .map(|date| date.year())
        .unwrap_or(1970)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_pad_seconds() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(215), "3:35");
        assert_eq!(format_duration(600), "10:00");
    }

    #[test]
    fn release_years_from_epoch_seconds() {
        assert_eq!(release_year(0), 1970);
        // 2023-06-15
        assert_eq!(release_year(1_686_800_000), 2023);
        // 1969-12-31
        assert_eq!(release_year(-86_400), 1969);
        // 2000-01-01
        assert_eq!(release_year(946_684_800), 2000);
    }

    #[test]
    fn out_of_range_timestamps_fall_back() {
        assert_eq!(release_year(i64::MAX), 1970);
    }
}
