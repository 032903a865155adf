use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::utils::constants::TIMESTAMP_FORMAT;

pub fn format_timestamp(now: DateTime<Utc>, tz: Tz) -> String {
    now.with_timezone(&tz).format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_in_central_standard_time() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 21, 4, 5).unwrap();
        assert_eq!(
            format_timestamp(now, chrono_tz::America::Chicago),
            "2024-01-02 15:04:05 CST"
        );
    }

    #[test]
    fn follows_daylight_saving() {
        let now = Utc.with_ymd_and_hms(2024, 7, 4, 17, 0, 0).unwrap();
        assert_eq!(
            format_timestamp(now, chrono_tz::America::Chicago),
            "2024-07-04 12:00:00 CDT"
        );
    }

    #[test]
    fn utc_zone_is_supported() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 21, 4, 5).unwrap();
        assert_eq!(format_timestamp(now, chrono_tz::UTC), "2024-01-02 21:04:05 UTC");
    }
}
