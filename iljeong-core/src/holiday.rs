//! Korean public holiday table.
//!
//! A fixed record keyed by "YYYY-MM-DD" so calendar rendering can join
//! holidays against grid days directly.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

static HOLIDAY_RECORD: &[(&str, &str)] = &[
    ("2024-01-01", "신정"),
    ("2024-02-09", "설날"),
    ("2024-02-10", "설날"),
    ("2024-02-11", "설날"),
    ("2024-03-01", "삼일절"),
    ("2024-05-05", "어린이날"),
    ("2024-06-06", "현충일"),
    ("2024-08-15", "광복절"),
    ("2024-09-16", "추석"),
    ("2024-09-17", "추석"),
    ("2024-09-18", "추석"),
    ("2024-10-03", "개천절"),
    ("2024-10-09", "한글날"),
    ("2024-12-25", "크리스마스"),
];

/// Holidays in the month containing `date`, keyed by "YYYY-MM-DD".
/// Months without holidays yield an empty map.
pub fn holidays_for_month(date: NaiveDate) -> HashMap<String, String> {
    let prefix = format!("{}-{:02}", date.year(), date.month());

    HOLIDAY_RECORD
        .iter()
        .filter(|(day, _)| day.starts_with(&prefix))
        .map(|(day, name)| (day.to_string(), name.to_string()))
        .collect()
}
