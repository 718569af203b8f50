use anyhow::Result;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use iljeong_core::overlap::find_overlapping_events;
use iljeong_core::{CATEGORIES, EventDraft};

use crate::commands::{EventArgs, check_draft, confirm_overlap};
use crate::render::Render;
use crate::store::EventStore;

pub async fn run(store: &mut EventStore, args: EventArgs, force: bool) -> Result<()> {
    let interactive = args.needs_prompting();

    let mut draft = EventDraft::default();
    args.apply(&mut draft);

    if interactive {
        if draft.title.is_empty() {
            draft.title = Input::<String>::new()
                .with_prompt("  제목")
                .interact_text()?;
        }
        if draft.date.is_empty() {
            draft.date = Input::<String>::new()
                .with_prompt("  날짜 (YYYY-MM-DD)")
                .interact_text()?;
        }
        if draft.start_time.is_empty() {
            draft.start_time = Input::<String>::new()
                .with_prompt("  시작 시간 (HH:MM)")
                .interact_text()?;
        }
        if draft.end_time.is_empty() {
            draft.end_time = Input::<String>::new()
                .with_prompt("  종료 시간 (HH:MM)")
                .interact_text()?;
        }
        if draft.description.is_empty() {
            draft.description = optional_field("  설명 (건너뛰려면 엔터)")?;
        }
        if draft.location.is_empty() {
            draft.location = optional_field("  위치 (건너뛰려면 엔터)")?;
        }
        if draft.category.is_empty() {
            let selection = Select::new()
                .with_prompt("  분류")
                .items(&CATEGORIES)
                .default(0)
                .interact()?;
            draft.category = CATEGORIES[selection].to_string();
        }
    }

    check_draft(&draft)?;

    store.fetch().await?;
    let overlapping = find_overlapping_events(&draft, store.events());
    if !confirm_overlap(&overlapping, force)? {
        println!("{}", "저장을 취소했습니다.".dimmed());
        return Ok(());
    }

    let saved = store.save(&draft).await?;

    if interactive {
        println!();
    }
    println!("{}", "일정이 추가되었습니다.".green());
    println!("{}", saved.render());

    Ok(())
}

fn optional_field(prompt: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(prompt)
        .default(String::new())
        .show_default(false)
        .interact_text()?)
}
