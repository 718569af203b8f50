//! Search and view filtering over event lists.

use chrono::{Datelike, NaiveDate};

use crate::dates::{is_date_in_range, week_dates};
use crate::event::{Event, View};

fn contains_term(text: &str, term: &str) -> bool {
    text.to_lowercase().contains(&term.to_lowercase())
}

/// Whether the event's title, description, or location contains the term,
/// ignoring case. An empty term matches everything.
pub fn matches_search(event: &Event, term: &str) -> bool {
    contains_term(&event.title, term)
        || contains_term(&event.description, term)
        || contains_term(&event.location, term)
}

fn event_date(event: &Event) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&event.date, "%Y-%m-%d").ok()
}

/// Events matching the search term that fall inside the week or month
/// holding `date`, in their stored order. Events with malformed dates
/// never match a view.
pub fn filter_events(events: &[Event], term: &str, date: NaiveDate, view: View) -> Vec<Event> {
    let searched = events.iter().filter(|event| matches_search(event, term));

    match view {
        View::Week => {
            let week = week_dates(date);
            let first = week[0];
            let last = week[6];
            searched
                .filter(|event| {
                    event_date(event).is_some_and(|d| is_date_in_range(d, first, last))
                })
                .cloned()
                .collect()
        }
        View::Month => searched
            .filter(|event| {
                event_date(event)
                    .is_some_and(|d| d.year() == date.year() && d.month() == date.month())
            })
            .cloned()
            .collect(),
    }
}
