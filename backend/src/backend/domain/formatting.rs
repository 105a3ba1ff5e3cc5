//! German date captions used on the dashboard and profile pages.

use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni",
    "Juli", "August", "September", "Oktober", "November", "Dezember",
];

/// `01.02.2024`
pub fn format_date_short(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// `1. Februar 2024`
pub fn format_date_long(date: NaiveDate) -> String {
    format!("{}. {} {}", date.day(), MONTHS[date.month0() as usize], date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_format() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(format_date_short(date), "01.02.2024");
    }

    #[test]
    fn test_long_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date_long(date), "15. März 2024");
        let date = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        assert_eq!(format_date_long(date), "1. Dezember 2023");
    }
}
