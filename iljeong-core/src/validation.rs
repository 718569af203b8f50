//! Draft validation before an event is saved.

use chrono::NaiveTime;
use thiserror::Error;

use crate::event::EventDraft;

/// Per-field error text for an inconsistent start/end time pair. Both
/// fields carry a message or neither does.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TimeErrorMessages {
    pub start_time_error: Option<&'static str>,
    pub end_time_error: Option<&'static str>,
}

/// Messages for a time pair where the start does not precede the end.
/// Unparseable times produce no messages; the missing-field check covers
/// those.
pub fn time_error_messages(start_time: &str, end_time: &str) -> TimeErrorMessages {
    let start = NaiveTime::parse_from_str(start_time, "%H:%M").ok();
    let end = NaiveTime::parse_from_str(end_time, "%H:%M").ok();

    match (start, end) {
        (Some(start), Some(end)) if start >= end => TimeErrorMessages {
            start_time_error: Some("시작 시간은 종료 시간보다 빨라야 합니다."),
            end_time_error: Some("종료 시간은 시작 시간보다 늦어야 합니다."),
        },
        _ => TimeErrorMessages::default(),
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("필수 정보를 모두 입력해주세요.")]
    MissingField,
    #[error("시간 설정을 확인해주세요.")]
    InvalidTimeRange,
}

/// Check that a draft carries every required field and a consistent time
/// range. Description, location, and the rest stay optional.
pub fn validate_draft(draft: &EventDraft) -> Result<(), ValidationError> {
    if draft.title.is_empty()
        || draft.date.is_empty()
        || draft.start_time.is_empty()
        || draft.end_time.is_empty()
    {
        return Err(ValidationError::MissingField);
    }

    let errors = time_error_messages(&draft.start_time, &draft.end_time);
    if errors.start_time_error.is_some() || errors.end_time_error.is_some() {
        return Err(ValidationError::InvalidTimeRange);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, date: &str, start: &str, end: &str) -> EventDraft {
        EventDraft {
            id: None,
            title: title.to_string(),
            date: date.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            description: String::new(),
            location: String::new(),
            category: "업무".to_string(),
            repeat: Default::default(),
            notification_time: 10,
        }
    }

    // --- time_error_messages ---

    #[test]
    fn inverted_times_set_both_messages() {
        let errors = time_error_messages("14:00", "13:00");
        assert_eq!(
            errors.start_time_error,
            Some("시작 시간은 종료 시간보다 빨라야 합니다.")
        );
        assert_eq!(
            errors.end_time_error,
            Some("종료 시간은 시작 시간보다 늦어야 합니다.")
        );
    }

    #[test]
    fn equal_times_set_both_messages() {
        let errors = time_error_messages("13:00", "13:00");
        assert!(errors.start_time_error.is_some());
        assert!(errors.end_time_error.is_some());
    }

    #[test]
    fn same_hour_minute_inversion_sets_both_messages() {
        let errors = time_error_messages("09:30", "09:15");
        assert!(errors.start_time_error.is_some());
        assert!(errors.end_time_error.is_some());
    }

    #[test]
    fn ordered_times_set_no_messages() {
        assert_eq!(time_error_messages("13:00", "14:00"), TimeErrorMessages::default());
        assert_eq!(time_error_messages("09:15", "09:30"), TimeErrorMessages::default());
    }

    #[test]
    fn missing_or_unparseable_times_set_no_messages() {
        assert_eq!(time_error_messages("", "14:00"), TimeErrorMessages::default());
        assert_eq!(time_error_messages("13:00", ""), TimeErrorMessages::default());
        assert_eq!(time_error_messages("25:70", "14:00"), TimeErrorMessages::default());
    }

    // --- validate_draft ---

    #[test]
    fn complete_draft_passes() {
        assert_eq!(validate_draft(&draft("팀 미팅", "2024-07-01", "10:00", "11:00")), Ok(()));
    }

    #[test]
    fn missing_required_fields_fail() {
        let cases = [
            draft("", "2024-07-01", "10:00", "11:00"),
            draft("팀 미팅", "", "10:00", "11:00"),
            draft("팀 미팅", "2024-07-01", "", "11:00"),
            draft("팀 미팅", "2024-07-01", "10:00", ""),
        ];
        for case in cases {
            assert_eq!(validate_draft(&case), Err(ValidationError::MissingField));
        }
    }

    #[test]
    fn inverted_time_range_fails() {
        assert_eq!(
            validate_draft(&draft("팀 미팅", "2024-07-01", "11:00", "10:00")),
            Err(ValidationError::InvalidTimeRange)
        );
    }

    #[test]
    fn error_display_is_user_facing_text() {
        assert_eq!(
            ValidationError::MissingField.to_string(),
            "필수 정보를 모두 입력해주세요."
        );
        assert_eq!(
            ValidationError::InvalidTimeRange.to_string(),
            "시간 설정을 확인해주세요."
        );
    }
}
