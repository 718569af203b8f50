use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;

use iljeong_core::notification::NotificationCenter;

use crate::render::{self, Render};
use crate::store::EventStore;

/// Keep running, printing a reminder once per event as its start draws
/// near. The event list refreshes from the server in the background.
pub async fn run(store: &mut EventStore, interval_secs: u64, refresh_secs: u64) -> Result<()> {
    store.fetch().await?;

    println!(
        "{}",
        format!("{}개 일정 감시 중 (Ctrl-C로 종료)", store.events().len()).dimmed()
    );

    let mut center = NotificationCenter::new();
    let mut tick = tokio::time::interval(Duration::from_secs(interval_secs));
    let mut refresh = tokio::time::interval(Duration::from_secs(refresh_secs));

    // The first tick of a tokio interval fires immediately
    tick.tick().await;
    refresh.tick().await;

    loop {
        tokio::select! {
            _ = tick.tick() => {
                let now = Local::now().naive_local();
                for notification in center.check(store.events(), now) {
                    println!("{}", notification.render().red().bold());
                }
            }
            _ = refresh.tick() => {
                if let Err(err) = store.fetch().await {
                    eprintln!("{}", render::render_failure(&err.into()));
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!("{}", "감시를 종료합니다.".dimmed());
                break;
            }
        }
    }

    Ok(())
}
