//! Domain → DTO conversions. Dates go on the wire as `YYYY-MM-DD`,
//! timestamps as RFC 3339 in UTC with a `Z` suffix.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

pub mod user_mapper;
pub mod child_mapper;
pub mod milestone_mapper;
pub mod postcard_mapper;
pub mod timeline_mapper;
pub mod dashboard_mapper;
pub mod page_mapper;

pub(crate) fn date_to_wire(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub(crate) fn timestamp_to_wire(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_wire_formats() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(date_to_wire(date), "2024-02-01");

        let timestamp = Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap();
        assert_eq!(timestamp_to_wire(timestamp), "2024-01-15T08:30:00Z");
    }
}
