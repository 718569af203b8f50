use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::store::EventStore;

pub async fn run(store: &mut EventStore, id: &str, yes: bool) -> Result<()> {
    store.fetch().await?;

    let Some(event) = store.events().iter().find(|event| event.id == id) else {
        anyhow::bail!("일정을 찾을 수 없습니다: {id}");
    };

    println!("{}", event.render());

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("  정말 삭제하시겠습니까?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "삭제를 취소했습니다.".dimmed());
            return Ok(());
        }
    }

    store.delete(id).await?;
    println!("{}", "일정이 삭제되었습니다.".dimmed());

    Ok(())
}
