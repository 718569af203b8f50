//! Calendar date math.
//!
//! All week handling is Sunday-first, matching the grid the CLI renders.
//! Week labels follow the convention that a week belongs to the month
//! containing its Thursday, so boundary weeks label under the neighboring
//! month (2024-11-01 falls in "2024년 10월 5주").

use chrono::{Datelike, Duration, NaiveDate};

use crate::event::Event;

/// Number of days in a month. `month` is 1-based but may lie outside
/// 1..=12; overflow carries into the year, so (2024, 13) is January 2025.
pub fn days_in_month(year: i32, month: i32) -> u32 {
    let months_from_january = month - 1;
    let year = year + months_from_january.div_euclid(12);
    let month = months_from_january.rem_euclid(12) + 1;

    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// The seven dates of the week containing `date`, Sunday first.
pub fn week_dates(date: NaiveDate) -> Vec<NaiveDate> {
    let sunday = date - Duration::days(date.weekday().num_days_from_sunday() as i64);
    (0..7).map(|offset| sunday + Duration::days(offset)).collect()
}

/// Day-of-month grid for the month containing `date`: one row per week,
/// Sunday first, with `None` in the slots outside the month.
pub fn weeks_of_month(date: NaiveDate) -> Vec<[Option<u32>; 7]> {
    let first = date.with_day(1).unwrap();
    let leading = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(date.year(), date.month() as i32);

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = leading;

    for day in 1..=days {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if week.iter().any(Option::is_some) {
        weeks.push(week);
    }

    weeks
}

/// Events whose date falls on the given day of the month. Day numbers no
/// calendar has (0, 32, ...) match nothing, as do malformed event dates.
pub fn events_for_day(events: &[Event], day: u32) -> Vec<Event> {
    events
        .iter()
        .filter(|event| {
            NaiveDate::parse_from_str(&event.date, "%Y-%m-%d")
                .map(|date| date.day() == day)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Week label like "2024년 11월 2주". The week belongs to the month
/// containing its Thursday, and the week number counts from that month's
/// first Thursday.
pub fn format_week(date: NaiveDate) -> String {
    let thursday = date + Duration::days(4 - date.weekday().num_days_from_sunday() as i64);

    let first_of_month = thursday.with_day(1).unwrap();
    let first_thursday = first_of_month
        + Duration::days((4 + 7 - first_of_month.weekday().num_days_from_sunday() as i64) % 7);

    let week_number = (thursday - first_thursday).num_days() / 7 + 1;

    format!("{}년 {}월 {}주", thursday.year(), thursday.month(), week_number)
}

/// Month label like "2024년 7월".
pub fn format_month(date: NaiveDate) -> String {
    format!("{}년 {}월", date.year(), date.month())
}

/// Both bounds inclusive; an inverted range contains nothing.
pub fn is_date_in_range(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= date && date <= end
}

/// "YYYY-MM-DD" for `date`, with the day overridden when `day` is given.
pub fn format_date(date: NaiveDate, day: Option<u32>) -> String {
    let day = day.unwrap_or_else(|| date.day());
    format!(
        "{}-{}-{}",
        date.year(),
        fill_zero(date.month(), 2),
        fill_zero(day, 2)
    )
}

/// Left-pad the display form of `value` with zeros to `size` characters.
/// Values already that long come back unchanged.
pub fn fill_zero<T: std::fmt::Display>(value: T, size: usize) -> String {
    let text = value.to_string();
    if text.len() >= size {
        text
    } else {
        format!("{}{}", "0".repeat(size - text.len()), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RepeatInfo;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn event_on(id: &str, date: &str) -> Event {
        Event {
            id: id.to_string(),
            title: format!("이벤트 {id}"),
            date: date.to_string(),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            description: String::new(),
            location: String::new(),
            category: "업무".to_string(),
            repeat: RepeatInfo::default(),
            notification_time: 10,
        }
    }

    // --- days_in_month ---

    #[test]
    fn days_in_month_regular_months() {
        assert_eq!(days_in_month(2024, 1), 31);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn days_in_month_february_leap_rules() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2100, 2), 28);
    }

    #[test]
    fn days_in_month_overflow_carries_into_year() {
        // month 13 is January of the following year
        assert_eq!(days_in_month(2024, 13), 31);
        // month 14 of 2023 is February 2024, a leap year
        assert_eq!(days_in_month(2023, 14), 29);
        // month 0 is December of the previous year
        assert_eq!(days_in_month(2024, 0), 31);
        assert_eq!(days_in_month(2025, -10), 29);
    }

    // --- week_dates ---

    #[test]
    fn week_dates_starts_on_sunday() {
        let week = week_dates(d(2024, 11, 6));
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], d(2024, 11, 3));
        assert_eq!(week[6], d(2024, 11, 9));
    }

    #[test]
    fn week_dates_crosses_year_boundary() {
        let week = week_dates(d(2024, 12, 31));
        assert_eq!(week[0], d(2024, 12, 29));
        assert_eq!(week[6], d(2025, 1, 4));

        let week = week_dates(d(2024, 1, 1));
        assert_eq!(week[0], d(2023, 12, 31));
        assert_eq!(week[6], d(2024, 1, 6));
    }

    #[test]
    fn week_dates_crosses_month_boundary() {
        let week = week_dates(d(2024, 2, 29));
        assert_eq!(week[0], d(2024, 2, 25));
        assert_eq!(week[6], d(2024, 3, 2));

        // a Sunday anchors its own week
        let week = week_dates(d(2024, 3, 31));
        assert_eq!(week[0], d(2024, 3, 31));
        assert_eq!(week[6], d(2024, 4, 6));
    }

    // --- weeks_of_month ---

    #[test]
    fn weeks_of_month_pads_partial_weeks() {
        let weeks = weeks_of_month(d(2024, 7, 1));

        assert_eq!(weeks.len(), 5);
        assert_eq!(
            weeks[0],
            [None, Some(1), Some(2), Some(3), Some(4), Some(5), Some(6)]
        );
        assert_eq!(
            weeks[1],
            [Some(7), Some(8), Some(9), Some(10), Some(11), Some(12), Some(13)]
        );
        assert_eq!(
            weeks[4],
            [Some(28), Some(29), Some(30), Some(31), None, None, None]
        );
    }

    #[test]
    fn weeks_of_month_when_first_is_sunday() {
        let weeks = weeks_of_month(d(2024, 12, 25));
        assert_eq!(weeks[0][0], Some(1));
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[4], [Some(29), Some(30), Some(31), None, None, None, None]);
    }

    // --- events_for_day ---

    #[test]
    fn events_for_day_matches_day_of_month() {
        let events = vec![
            event_on("1", "2024-07-01"),
            event_on("2", "2024-07-01"),
            event_on("3", "2024-07-02"),
        ];

        let found = events_for_day(&events, 1);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, "1");
        assert_eq!(found[1].id, "2");
    }

    #[test]
    fn events_for_day_out_of_range_days_are_empty() {
        let events = vec![event_on("1", "2024-07-01")];
        assert!(events_for_day(&events, 0).is_empty());
        assert!(events_for_day(&events, 32).is_empty());
    }

    #[test]
    fn events_for_day_skips_malformed_dates() {
        let events = vec![event_on("1", "not-a-date")];
        assert!(events_for_day(&events, 1).is_empty());
    }

    // --- format_week ---

    #[test]
    fn format_week_mid_month() {
        assert_eq!(format_week(d(2024, 11, 15)), "2024년 11월 2주");
        assert_eq!(format_week(d(2024, 11, 30)), "2024년 11월 4주");
    }

    #[test]
    fn format_week_belongs_to_thursdays_month() {
        // 2024-11-01 is a Friday; its Thursday is October 31
        assert_eq!(format_week(d(2024, 11, 1)), "2024년 10월 5주");
        // 2024-12-31 is a Tuesday; its Thursday is 2025-01-02
        assert_eq!(format_week(d(2024, 12, 31)), "2025년 1월 1주");
        // 2023-02-28 is a Tuesday; its Thursday is March 2
        assert_eq!(format_week(d(2023, 2, 28)), "2023년 3월 1주");
    }

    #[test]
    fn format_week_leap_day() {
        assert_eq!(format_week(d(2024, 2, 29)), "2024년 2월 5주");
    }

    // --- format_month / format_date ---

    #[test]
    fn format_month_labels_year_and_month() {
        assert_eq!(format_month(d(2024, 7, 10)), "2024년 7월");
        assert_eq!(format_month(d(2024, 12, 31)), "2024년 12월");
    }

    #[test]
    fn format_date_zero_pads() {
        assert_eq!(format_date(d(2024, 7, 5), None), "2024-07-05");
        assert_eq!(format_date(d(2024, 11, 20), None), "2024-11-20");
    }

    #[test]
    fn format_date_with_day_override() {
        assert_eq!(format_date(d(2024, 7, 15), Some(1)), "2024-07-01");
        assert_eq!(format_date(d(2024, 7, 15), Some(31)), "2024-07-31");
    }

    // --- is_date_in_range ---

    #[test]
    fn is_date_in_range_is_inclusive() {
        let start = d(2024, 7, 1);
        let end = d(2024, 7, 31);

        assert!(is_date_in_range(d(2024, 7, 10), start, end));
        assert!(is_date_in_range(start, start, end));
        assert!(is_date_in_range(end, start, end));
        assert!(!is_date_in_range(d(2024, 6, 30), start, end));
        assert!(!is_date_in_range(d(2024, 8, 1), start, end));
    }

    #[test]
    fn is_date_in_range_inverted_range_contains_nothing() {
        assert!(!is_date_in_range(d(2024, 7, 10), d(2024, 7, 31), d(2024, 7, 1)));
    }

    // --- fill_zero ---

    #[test]
    fn fill_zero_pads_to_size() {
        assert_eq!(fill_zero(5, 2), "05");
        assert_eq!(fill_zero(10, 2), "10");
        assert_eq!(fill_zero(3, 3), "003");
        assert_eq!(fill_zero(0, 2), "00");
        assert_eq!(fill_zero(1, 5), "00001");
    }

    #[test]
    fn fill_zero_leaves_long_values_alone() {
        assert_eq!(fill_zero(100, 2), "100");
        assert_eq!(fill_zero(12345, 2), "12345");
    }

    #[test]
    fn fill_zero_pads_decimal_display() {
        assert_eq!(fill_zero(3.14, 5), "03.14");
    }
}
