//! Notification scheduling for upcoming events.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime};

use crate::event::{Event, Notification};
use crate::overlap::parse_date_time;

/// Events whose start lies strictly in the future but within their own
/// notification lead time, skipping ids already notified.
pub fn upcoming_events(events: &[Event], now: NaiveDateTime, notified: &HashSet<String>) -> Vec<Event> {
    events
        .iter()
        .filter(|event| !notified.contains(&event.id))
        .filter(|event| {
            parse_date_time(&event.date, &event.start_time).is_some_and(|start| {
                let lead = start - now;
                lead > Duration::zero() && lead <= Duration::minutes(event.notification_time)
            })
        })
        .cloned()
        .collect()
}

/// The user-facing reminder line for an event.
pub fn notification_message(event: &Event) -> String {
    format!(
        "{}분 후 {} 일정이 시작됩니다.",
        event.notification_time, event.title
    )
}

/// Tracks which events have fired and holds the notifications not yet
/// dismissed. Dismissing a notification never re-arms its event.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
    notified: HashSet<String>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire notifications for events now inside their lead window and
    /// return the newly created ones.
    pub fn check(&mut self, events: &[Event], now: NaiveDateTime) -> Vec<Notification> {
        let fresh: Vec<Notification> = upcoming_events(events, now, &self.notified)
            .into_iter()
            .map(|event| {
                let message = notification_message(&event);
                self.notified.insert(event.id.clone());
                Notification {
                    id: event.id,
                    message,
                }
            })
            .collect();

        self.notifications.extend(fresh.iter().cloned());
        fresh
    }

    /// Remove the notification at `index`. Out-of-range indices are
    /// ignored. The event stays marked as notified.
    pub fn dismiss(&mut self, index: usize) {
        if index < self.notifications.len() {
            self.notifications.remove(index);
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn notified_ids(&self) -> &HashSet<String> {
        &self.notified
    }
}
