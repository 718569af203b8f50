//! HTTP client for communicating with iljeong-server

use anyhow::{Context, Result};
use serde::Deserialize;
use std::process::Command;
use std::time::Duration;

use iljeong_core::{Event, EventDraft};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5174";
const MAX_RETRIES: u32 = 10;
const RETRY_DELAY_MS: u64 = 200;

/// HTTP client for iljeong-server
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

// Response types matching server API

#[derive(Deserialize)]
struct EventsResponse {
    events: Vec<Event>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Connect to a running server, or start one when the default local
    /// address has nothing listening.
    pub async fn connect(base_url: &str) -> Result<Self> {
        let client = Self::new(base_url);

        // Try to connect to an existing server
        if client.health_check().await.is_ok() {
            return Ok(client);
        }

        // A remote server is not ours to start
        if base_url != DEFAULT_SERVER_URL {
            anyhow::bail!("Failed to connect to iljeong-server at {}", base_url);
        }

        start_server()?;

        // Wait for the server to be ready
        for _ in 0..MAX_RETRIES {
            tokio::time::sleep(Duration::from_millis(RETRY_DELAY_MS)).await;
            if client.health_check().await.is_ok() {
                return Ok(client);
            }
        }

        anyhow::bail!("Failed to connect to iljeong-server after starting it")
    }

    async fn health_check(&self) -> Result<()> {
        self.http
            .get(format!("{}/api/events", self.base_url))
            .timeout(Duration::from_secs(2))
            .send()
            .await?;
        Ok(())
    }

    /// GET /api/events
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let resp = self
            .http
            .get(format!("{}/api/events", self.base_url))
            .send()
            .await
            .context("Failed to connect to server")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        let body: EventsResponse = resp.json().await?;
        Ok(body.events)
    }

    /// POST /api/events
    pub async fn create_event(&self, draft: &EventDraft) -> Result<Event> {
        let resp = self
            .http
            .post(format!("{}/api/events", self.base_url))
            .json(draft)
            .send()
            .await
            .context("Failed to connect to server")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        Ok(resp.json().await?)
    }

    /// PUT /api/events/:id
    pub async fn update_event(&self, id: &str, draft: &EventDraft) -> Result<Event> {
        let resp = self
            .http
            .put(format!("{}/api/events/{}", self.base_url, id))
            .json(draft)
            .send()
            .await
            .context("Failed to connect to server")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        Ok(resp.json().await?)
    }

    /// DELETE /api/events/:id
    pub async fn delete_event(&self, id: &str) -> Result<()> {
        let resp = self
            .http
            .delete(format!("{}/api/events/{}", self.base_url, id))
            .send()
            .await
            .context("Failed to connect to server")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        Ok(())
    }
}

/// Start the iljeong-server process
fn start_server() -> Result<()> {
    Command::new("iljeong-server")
        .spawn()
        .context("Failed to start iljeong-server. Is it installed?")?;
    Ok(())
}
