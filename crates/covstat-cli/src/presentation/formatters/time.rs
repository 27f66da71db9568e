use chrono::{DateTime, Local, TimeZone};
use std::time::Duration;

/// Wall-clock `HH:MM` for the live stream's time column
pub fn clock_time() -> String {
    format_clock(&Local::now())
}

pub fn format_clock<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%H:%M").to_string()
}

/// Human wording for a retry delay: `1 minute`, `2 minutes`, `45 seconds`
pub fn format_delay(delay: Duration) -> String {
    let secs = delay.as_secs();

    if secs >= 60 && secs % 60 == 0 {
        let minutes = secs / 60;
        if minutes == 1 {
            "1 minute".to_string()
        } else {
            format!("{} minutes", minutes)
        }
    } else if secs == 1 {
        "1 second".to_string()
    } else {
        format!("{} seconds", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_clock_pads_fields() {
        let time = Utc.with_ymd_and_hms(2021, 3, 4, 7, 5, 59).unwrap();
        assert_eq!(format_clock(&time), "07:05");
    }

    #[test]
    fn test_format_delay() {
        assert_eq!(format_delay(Duration::from_secs(60)), "1 minute");
        assert_eq!(format_delay(Duration::from_secs(180)), "3 minutes");
        assert_eq!(format_delay(Duration::from_secs(90)), "90 seconds");
        assert_eq!(format_delay(Duration::from_secs(1)), "1 second");
    }
}
