//! Event types shared by the server and the CLI.
//!
//! These mirror the JSON wire format of the event API: field names are
//! camelCase on the wire, and date/time fields stay plain strings
//! ("YYYY-MM-DD", "HH:MM") so malformed values round-trip instead of
//! failing at the serde boundary. Parsing happens lazily in `overlap`
//! and the other calendar modules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category labels offered when creating an event.
pub const CATEGORIES: [&str; 4] = ["업무", "개인", "가족", "기타"];

/// A calendar event as stored by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    /// "YYYY-MM-DD"
    pub date: String,
    /// "HH:MM"
    pub start_time: String,
    /// "HH:MM"
    pub end_time: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub repeat: RepeatInfo,
    /// Minutes of notice before the event starts
    pub notification_time: i64,
}

/// Recurrence settings, stored and round-tripped as-is. iljeong never
/// expands repeats into instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatInfo {
    #[serde(rename = "type")]
    pub repeat_type: RepeatType,
    pub interval: i64,
    /// "YYYY-MM-DD", last date the repeat applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl Default for RepeatInfo {
    fn default() -> Self {
        RepeatInfo {
            repeat_type: RepeatType::None,
            interval: 1,
            end_date: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl FromStr for RepeatType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(RepeatType::None),
            "daily" => Ok(RepeatType::Daily),
            "weekly" => Ok(RepeatType::Weekly),
            "monthly" => Ok(RepeatType::Monthly),
            "yearly" => Ok(RepeatType::Yearly),
            other => Err(format!(
                "unknown repeat type '{other}' (expected none, daily, weekly, monthly or yearly)"
            )),
        }
    }
}

/// An event as submitted by a client: no id for creation, the existing
/// id for an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub repeat: RepeatInfo,
    pub notification_time: i64,
}

impl Default for EventDraft {
    /// An empty draft with the usual ten minutes of notice.
    fn default() -> Self {
        EventDraft {
            id: None,
            title: String::new(),
            date: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            description: String::new(),
            location: String::new(),
            category: String::new(),
            repeat: RepeatInfo::default(),
            notification_time: 10,
        }
    }
}

impl EventDraft {
    /// Finalize the draft into a stored event under the given id.
    pub fn into_event(self, id: String) -> Event {
        Event {
            id,
            title: self.title,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            description: self.description,
            location: self.location,
            category: self.category,
            repeat: self.repeat,
            notification_time: self.notification_time,
        }
    }
}

impl From<Event> for EventDraft {
    fn from(event: Event) -> Self {
        EventDraft {
            id: Some(event.id),
            title: event.title,
            date: event.date,
            start_time: event.start_time,
            end_time: event.end_time,
            description: event.description,
            location: event.location,
            category: event.category,
            repeat: event.repeat,
            notification_time: event.notification_time,
        }
    }
}

/// A pending notification shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Id of the event the notification is for
    pub id: String,
    pub message: String,
}

/// Calendar view span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Week,
    #[default]
    Month,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Week => write!(f, "week"),
            View::Month => write!(f, "month"),
        }
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(View::Week),
            "month" => Ok(View::Month),
            other => Err(format!("unknown view '{other}' (expected week or month)")),
        }
    }
}
