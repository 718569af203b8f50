//! Terminal rendering for iljeong types.
//!
//! Extension traits add colored one-line rendering to core types, and
//! the grid functions lay out whole month and week views.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use iljeong_core::dates::{events_for_day, format_date, format_month, format_week, week_dates, weeks_of_month};
use iljeong_core::{Event, Notification, RepeatType};

/// Weekday column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let time = format!("{}-{}", self.start_time, self.end_time);
        let mut line = format!("  {} {}", time.dimmed(), self.title);

        if !self.category.is_empty() {
            line.push_str(&format!(" {}", format!("[{}]", self.category).dimmed()));
        }

        if !self.location.is_empty() {
            line.push_str(&format!(" {}", format!("@{}", self.location).cyan()));
        }

        if let Some(label) = repeat_label(self) {
            line.push_str(&format!(" {}", format!("({})", label).dimmed()));
        }

        line
    }
}

impl Render for Notification {
    fn render(&self) -> String {
        format!("🔔 {}", self.message)
    }
}

/// Human label for an event's repeat rule, `None` when it does not
/// repeat.
pub fn repeat_label(event: &Event) -> Option<String> {
    let (every, unit) = match event.repeat.repeat_type {
        RepeatType::None => return None,
        RepeatType::Daily => ("매일", "일"),
        RepeatType::Weekly => ("매주", "주"),
        RepeatType::Monthly => ("매월", "개월"),
        RepeatType::Yearly => ("매년", "년"),
    };

    let mut label = if event.repeat.interval <= 1 {
        format!("{every} 반복")
    } else {
        format!("{}{unit}마다 반복", event.repeat.interval)
    };

    if let Some(end) = &event.repeat.end_date {
        label.push_str(&format!(", {end}까지"));
    }

    Some(label)
}

/// Render the month holding `date` as a calendar grid. Holidays color
/// their day red, days with events cyan. A legend of the month's
/// holidays follows the grid.
pub fn render_month(
    date: NaiveDate,
    events: &[Event],
    holidays: &HashMap<String, String>,
) -> String {
    let mut lines = Vec::new();

    lines.push(format_month(date).bold().to_string());
    lines.push(
        WEEKDAY_LABELS
            .iter()
            .map(|label| format!("{label:>4}"))
            .collect::<String>(),
    );

    for week in weeks_of_month(date) {
        let mut row = String::new();
        for slot in week {
            match slot {
                Some(day) => {
                    let cell = format!("{day:>4}");
                    if holidays.contains_key(&format_date(date, Some(day))) {
                        row.push_str(&cell.red().to_string());
                    } else if !events_for_day(events, day).is_empty() {
                        row.push_str(&cell.cyan().to_string());
                    } else {
                        row.push_str(&cell);
                    }
                }
                None => row.push_str("    "),
            }
        }
        lines.push(row);
    }

    let mut named: Vec<(&String, &String)> = holidays.iter().collect();
    named.sort();
    for (day, name) in named {
        lines.push(format!("  {} {}", day.red(), name));
    }

    lines.join("\n")
}

/// Render the week holding `date` as one block per day. Holidays show
/// next to the day heading; days without events get a placeholder line.
pub fn render_week(
    date: NaiveDate,
    events: &[Event],
    holidays: &HashMap<String, String>,
) -> String {
    let mut lines = Vec::new();

    lines.push(format_week(date).bold().to_string());

    for day in week_dates(date) {
        let weekday = WEEKDAY_LABELS[day.weekday().num_days_from_sunday() as usize];
        let heading = format!("{} ({})", format_date(day, None), weekday);

        lines.push(String::new());
        match holidays.get(&format_date(day, None)) {
            Some(name) => lines.push(format!("{} {}", heading.bold(), name.red())),
            None => lines.push(heading.bold().to_string()),
        }

        let todays = events_for_day(events, day.day());
        if todays.is_empty() {
            lines.push("  -".dimmed().to_string());
        } else {
            for event in &todays {
                lines.push(event.render());
            }
        }
    }

    lines.join("\n")
}

/// Failure toast: the message in red, each underlying cause dimmed
/// beneath it.
pub fn render_failure(err: &anyhow::Error) -> String {
    let mut lines = vec![err.to_string().red().to_string()];
    for cause in err.chain().skip(1) {
        lines.push(format!("  {}", cause.to_string().dimmed()));
    }
    lines.join("\n")
}

/// Spinner shown while talking to the server.
pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("{msg} {spinner}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;
    use iljeong_core::RepeatInfo;
    use iljeong_core::holiday::holidays_for_month;

    use crate::store::StoreError;

    fn event(title: &str, date: &str) -> Event {
        Event {
            id: "1".to_string(),
            title: title.to_string(),
            date: date.to_string(),
            start_time: "10:00".to_string(),
            end_time: "11:00".to_string(),
            description: String::new(),
            location: String::new(),
            category: "업무".to_string(),
            repeat: RepeatInfo::default(),
            notification_time: 10,
        }
    }

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    // --- repeat_label ---

    #[test]
    fn no_repeat_has_no_label() {
        assert_eq!(repeat_label(&event("팀 미팅", "2024-07-01")), None);
    }

    #[test]
    fn unit_intervals_use_the_every_form() {
        let cases = [
            (RepeatType::Daily, "매일 반복"),
            (RepeatType::Weekly, "매주 반복"),
            (RepeatType::Monthly, "매월 반복"),
            (RepeatType::Yearly, "매년 반복"),
        ];
        for (repeat_type, expected) in cases {
            let mut e = event("팀 미팅", "2024-07-01");
            e.repeat.repeat_type = repeat_type;
            assert_eq!(repeat_label(&e).as_deref(), Some(expected));
        }
    }

    #[test]
    fn wider_intervals_spell_out_the_step() {
        let cases = [
            (RepeatType::Daily, 3, "3일마다 반복"),
            (RepeatType::Weekly, 2, "2주마다 반복"),
            (RepeatType::Monthly, 6, "6개월마다 반복"),
            (RepeatType::Yearly, 2, "2년마다 반복"),
        ];
        for (repeat_type, interval, expected) in cases {
            let mut e = event("팀 미팅", "2024-07-01");
            e.repeat.repeat_type = repeat_type;
            e.repeat.interval = interval;
            assert_eq!(repeat_label(&e).as_deref(), Some(expected));
        }
    }

    #[test]
    fn end_date_appends_to_the_label() {
        let mut e = event("팀 미팅", "2024-07-01");
        e.repeat = RepeatInfo {
            repeat_type: RepeatType::Weekly,
            interval: 1,
            end_date: Some("2024-12-31".to_string()),
        };
        assert_eq!(
            repeat_label(&e).as_deref(),
            Some("매주 반복, 2024-12-31까지")
        );
    }

    // --- Render ---

    #[test]
    fn event_line_carries_time_title_and_category() {
        let line = event("팀 미팅", "2024-07-01").render();
        assert!(line.contains("10:00-11:00"));
        assert!(line.contains("팀 미팅"));
        assert!(line.contains("[업무]"));
        assert!(!line.contains('@'));
    }

    #[test]
    fn event_line_shows_location_when_present() {
        let mut e = event("점심 약속", "2024-07-01");
        e.location = "카페".to_string();
        assert!(e.render().contains("@카페"));
    }

    #[test]
    fn notification_line_carries_the_message() {
        let notification = Notification {
            id: "1".to_string(),
            message: "10분 후 팀 미팅 일정이 시작됩니다.".to_string(),
        };
        let line = notification.render();
        assert!(line.contains("🔔"));
        assert!(line.contains("10분 후 팀 미팅 일정이 시작됩니다."));
    }

    // --- render_failure ---

    #[test]
    fn failure_toast_shows_message_then_causes() {
        let err = anyhow::Error::from(StoreError::Load(anyhow::anyhow!("connection refused")));
        let toast = render_failure(&err);

        let mut lines = toast.lines();
        assert!(lines.next().unwrap().contains("이벤트 로딩 실패"));
        assert!(lines.next().unwrap().contains("connection refused"));
        assert!(lines.next().is_none());
    }

    // --- render_month ---

    #[test]
    fn month_grid_has_title_headers_and_every_day() {
        let grid = render_month(d(2024, 7, 1), &[], &HashMap::new());
        assert!(grid.contains("2024년 7월"));
        for label in WEEKDAY_LABELS {
            assert!(grid.contains(label));
        }
        assert!(grid.contains("31"));
    }

    #[test]
    fn month_grid_lists_holidays_below() {
        let holidays = holidays_for_month(d(2024, 10, 1));
        let grid = render_month(d(2024, 10, 1), &[], &holidays);
        assert!(grid.contains("개천절"));
        assert!(grid.contains("한글날"));
        assert!(grid.contains("2024-10-03"));
    }

    // --- render_week ---

    #[test]
    fn week_view_headings_cover_sunday_through_saturday() {
        let week = render_week(d(2024, 7, 3), &[], &HashMap::new());
        assert!(week.contains("2024년 7월 1주"));
        assert!(week.contains("2024-06-30 (일)"));
        assert!(week.contains("2024-07-06 (토)"));
    }

    #[test]
    fn week_view_places_events_under_their_day() {
        let events = vec![event("팀 미팅", "2024-07-03")];
        let week = render_week(d(2024, 7, 3), &events, &HashMap::new());
        assert!(week.contains("팀 미팅"));
    }
}
