pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod watch;

use anyhow::Result;
use clap::Args;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use iljeong_core::validation::{time_error_messages, validate_draft};
use iljeong_core::{Event, EventDraft, RepeatType};

use crate::render::Render;

/// Event fields shared by `add` and `edit`.
#[derive(Args)]
pub struct EventArgs {
    /// Event title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Start time (HH:MM)
    #[arg(short, long)]
    pub start: Option<String>,

    /// End time (HH:MM)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Description
    #[arg(long)]
    pub description: Option<String>,

    /// Location
    #[arg(short, long)]
    pub location: Option<String>,

    /// Category (업무, 개인, 가족, 기타)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Repeat rule (none, daily, weekly, monthly, yearly)
    #[arg(long)]
    pub repeat: Option<RepeatType>,

    /// Repeat every this many units
    #[arg(long)]
    pub interval: Option<i64>,

    /// Last date the repeat applies to (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,

    /// Minutes of notice before the event starts
    #[arg(short, long)]
    pub notify: Option<i64>,
}

impl EventArgs {
    /// True when prompts are needed to finish a draft.
    pub fn needs_prompting(&self) -> bool {
        self.title.is_none() || self.date.is_none() || self.start.is_none() || self.end.is_none()
    }

    /// Overlay the provided fields onto a draft, leaving the rest as-is.
    pub fn apply(&self, draft: &mut EventDraft) {
        if let Some(title) = &self.title {
            draft.title = title.clone();
        }
        if let Some(date) = &self.date {
            draft.date = date.clone();
        }
        if let Some(start) = &self.start {
            draft.start_time = start.clone();
        }
        if let Some(end) = &self.end {
            draft.end_time = end.clone();
        }
        if let Some(description) = &self.description {
            draft.description = description.clone();
        }
        if let Some(location) = &self.location {
            draft.location = location.clone();
        }
        if let Some(category) = &self.category {
            draft.category = category.clone();
        }
        if let Some(repeat) = self.repeat {
            draft.repeat.repeat_type = repeat;
        }
        if let Some(interval) = self.interval {
            draft.repeat.interval = interval;
        }
        if let Some(until) = &self.until {
            draft.repeat.end_date = Some(until.clone());
        }
        if let Some(notify) = self.notify {
            draft.notification_time = notify;
        }
    }
}

/// Validate a draft, printing the per-field time errors before failing.
pub fn check_draft(draft: &EventDraft) -> Result<()> {
    if let Err(err) = validate_draft(draft) {
        let times = time_error_messages(&draft.start_time, &draft.end_time);
        if let Some(message) = times.start_time_error {
            eprintln!("  {}", message.red());
        }
        if let Some(message) = times.end_time_error {
            eprintln!("  {}", message.red());
        }
        return Err(err.into());
    }

    Ok(())
}

/// Show conflicting events and ask whether to save anyway. `force`
/// skips the prompt.
pub fn confirm_overlap(overlapping: &[Event], force: bool) -> Result<bool> {
    if overlapping.is_empty() || force {
        return Ok(true);
    }

    println!("{}", "일정 겹침".yellow().bold());
    println!("  {}", "다음 일정과 겹칩니다:".yellow());
    for event in overlapping {
        println!("{}", event.render());
    }

    Ok(Confirm::new()
        .with_prompt("  계속 진행하시겠습니까?")
        .default(false)
        .interact()?)
}
