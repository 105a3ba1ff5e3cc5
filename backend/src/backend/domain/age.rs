//! Human-readable age of a child, in German.
//!
//! Ages are counted in calendar months: `(years * 12) + months`, without
//! looking at the day of month. A child born on the 31st is one month older
//! on the 1st of the next month. The header has always shown ages this way.

use chrono::{Datelike, NaiveDate};

use super::errors::ValidationErrors;

/// Whole calendar months between the birth date and `today`.
/// Birth dates in the future count as zero.
pub fn age_in_months(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    let years = today.year() - birth_date.year();
    let months = today.month() as i32 - birth_date.month() as i32;
    (years * 12 + months).max(0) as u32
}

/// "N Monate" below one year, otherwise "Y Jahre" with ", M Monate" when M > 0.
pub fn calculate_age(birth_date: NaiveDate, today: NaiveDate) -> String {
    let months = age_in_months(birth_date, today);
    if months < 12 {
        return format!("{} Monate", months);
    }

    let years = months / 12;
    let rest = months % 12;
    if rest > 0 {
        format!("{} Jahre, {} Monate", years, rest)
    } else {
        format!("{} Jahre", years)
    }
}

/// Same as [`calculate_age`] for an ISO `YYYY-MM-DD` string.
pub fn calculate_age_str(birth_date: &str, today: NaiveDate) -> Result<String, ValidationErrors> {
    let birth_date = NaiveDate::parse_from_str(birth_date.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationErrors::single("birthDate", "Ungültiges Geburtsdatum"))?;
    Ok(calculate_age(birth_date, today))
}
