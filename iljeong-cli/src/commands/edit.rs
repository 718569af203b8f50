use anyhow::Result;
use owo_colors::OwoColorize;

use iljeong_core::EventDraft;
use iljeong_core::overlap::find_overlapping_events;

use crate::commands::{EventArgs, check_draft, confirm_overlap};
use crate::render::Render;
use crate::store::EventStore;

pub async fn run(store: &mut EventStore, id: &str, args: EventArgs, force: bool) -> Result<()> {
    store.fetch().await?;

    let Some(existing) = store.events().iter().find(|event| event.id == id) else {
        anyhow::bail!("일정을 찾을 수 없습니다: {id}");
    };

    let mut draft = EventDraft::from(existing.clone());
    args.apply(&mut draft);

    check_draft(&draft)?;

    let overlapping = find_overlapping_events(&draft, store.events());
    if !confirm_overlap(&overlapping, force)? {
        println!("{}", "저장을 취소했습니다.".dimmed());
        return Ok(());
    }

    let saved = store.save(&draft).await?;

    println!("{}", "일정이 수정되었습니다.".green());
    println!("{}", saved.render());

    Ok(())
}
