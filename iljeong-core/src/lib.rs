//! Core types and calendar math for the iljeong ecosystem.
//!
//! This crate holds everything the server and CLI share: the `Event` wire
//! model, calendar grid math, the holiday table, overlap detection, search
//! filtering, notification selection and draft validation. All of it is
//! pure and synchronous; HTTP and terminal concerns live in iljeong-server
//! and iljeong-cli.

pub mod dates;
pub mod event;
pub mod holiday;
pub mod notification;
pub mod overlap;
pub mod search;
pub mod validation;

// Event types are used everywhere, so they live at the crate root too
pub use event::*;
