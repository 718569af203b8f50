use std::path::Path;
use std::sync::{Arc, RwLock};

use anyhow::{Context, Result};
use serde::Deserialize;

use iljeong_core::Event;

/// Shared application state. Events live in memory for the lifetime of
/// the server process; a seed file can pre-populate them at startup.
#[derive(Clone, Default)]
pub struct AppState {
    pub events: Arc<RwLock<Vec<Event>>>,
}

/// Wire shape of a seed file: `{"events": [...]}`.
#[derive(Deserialize)]
struct SeedFile {
    events: Vec<Event>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        AppState {
            events: Arc::new(RwLock::new(events)),
        }
    }

    /// Load initial events from a JSON seed file.
    pub fn from_seed_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read seed file: {}", path.display()))?;

        let seed: SeedFile = serde_json::from_str(&contents)
            .with_context(|| format!("Could not parse seed file: {}", path.display()))?;

        Ok(Self::with_events(seed.events))
    }
}
