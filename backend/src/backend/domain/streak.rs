//! Current streak: consecutive calendar days with at least one timeline entry.
//!
//! Counting starts at `today`. When today has no entry yet the streak is
//! still alive if yesterday has one, so counting starts there instead.

use chrono::{Days, NaiveDate};
use std::collections::HashSet;

use super::models::timeline::TimelineEntry;

pub fn current_streak(entries: &[TimelineEntry], today: NaiveDate) -> u32 {
    let active_days: HashSet<NaiveDate> = entries.iter().map(|e| e.date.date_naive()).collect();

    let mut day = if active_days.contains(&today) {
        today
    } else {
        match today.checked_sub_days(Days::new(1)) {
            Some(yesterday) if active_days.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 0;
    while active_days.contains(&day) {
        streak += 1;
        match day.checked_sub_days(Days::new(1)) {
            Some(previous) => day = previous,
            None => break,
        }
    }
    streak
}
