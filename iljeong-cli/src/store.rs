//! Local snapshot of the server's event list.

use thiserror::Error;

use iljeong_core::{Event, EventDraft};

use crate::client::ApiClient;

/// Store failures surface these as user-facing messages; the underlying
/// cause stays attached for the error chain.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("이벤트 로딩 실패")]
    Load(#[source] anyhow::Error),
    #[error("일정 저장 실패")]
    Save(#[source] anyhow::Error),
    #[error("일정 삭제 실패")]
    Delete(#[source] anyhow::Error),
}

/// Event list mirrored from the server. Mutations go to the server
/// first; the local copy changes only after the server confirms.
pub struct EventStore {
    client: ApiClient,
    events: Vec<Event>,
}

impl EventStore {
    pub fn new(client: ApiClient) -> Self {
        EventStore {
            client,
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Replace the snapshot with the server's event list. On failure the
    /// previous snapshot stays untouched.
    pub async fn fetch(&mut self) -> Result<(), StoreError> {
        let events = self.client.list_events().await.map_err(StoreError::Load)?;
        self.events = events;
        Ok(())
    }

    /// Create or update depending on whether the draft carries an id.
    /// Returns the event as the server recorded it.
    pub async fn save(&mut self, draft: &EventDraft) -> Result<Event, StoreError> {
        let saved = match &draft.id {
            Some(id) => self.client.update_event(id, draft).await,
            None => self.client.create_event(draft).await,
        }
        .map_err(StoreError::Save)?;

        match self.events.iter_mut().find(|event| event.id == saved.id) {
            Some(stored) => *stored = saved.clone(),
            None => self.events.push(saved.clone()),
        }

        Ok(saved)
    }

    /// Delete by id, dropping the local copy once the server confirms.
    pub async fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        self.client
            .delete_event(id)
            .await
            .map_err(StoreError::Delete)?;
        self.events.retain(|event| event.id != id);
        Ok(())
    }
}
