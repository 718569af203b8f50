//! Overlap detection between events.
//!
//! Date and time strings parse lazily here; any malformed boundary makes
//! the comparison come out false instead of failing. Ranges are half-open,
//! so back-to-back events sharing an endpoint do not overlap.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::event::{Event, EventDraft};

/// Parse "YYYY-MM-DD" plus "HH:MM" into a date-time. Empty or malformed
/// parts yield `None`.
pub fn parse_date_time(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
    Some(NaiveDateTime::new(date, time))
}

/// Start and end instants of an event. A boundary is `None` when its
/// date/time strings do not form a valid instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventRange {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

/// The instants a stored event occupies.
pub fn event_range(event: &Event) -> EventRange {
    EventRange {
        start: parse_date_time(&event.date, &event.start_time),
        end: parse_date_time(&event.date, &event.end_time),
    }
}

fn draft_range(draft: &EventDraft) -> EventRange {
    EventRange {
        start: parse_date_time(&draft.date, &draft.start_time),
        end: parse_date_time(&draft.date, &draft.end_time),
    }
}

fn ranges_overlap(a: EventRange, b: EventRange) -> bool {
    match (a.start, a.end, b.start, b.end) {
        (Some(a_start), Some(a_end), Some(b_start), Some(b_end)) => {
            a_start < b_end && b_start < a_end
        }
        _ => false,
    }
}

/// Whether two events occupy overlapping time. Touching endpoints, where
/// one ends exactly as the other starts, do not count.
pub fn is_overlapping(a: &Event, b: &Event) -> bool {
    ranges_overlap(event_range(a), event_range(b))
}

/// Existing events the draft would overlap, in their stored order. A
/// draft carrying an id (an edit) never conflicts with its own event.
pub fn find_overlapping_events(draft: &EventDraft, events: &[Event]) -> Vec<Event> {
    let candidate = draft_range(draft);

    events
        .iter()
        .filter(|event| draft.id.as_deref() != Some(event.id.as_str()))
        .filter(|event| ranges_overlap(candidate, event_range(event)))
        .cloned()
        .collect()
}
