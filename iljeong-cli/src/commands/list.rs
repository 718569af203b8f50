use anyhow::Result;
use chrono::{Local, NaiveDate};
use owo_colors::OwoColorize;

use iljeong_core::View;
use iljeong_core::holiday::holidays_for_month;
use iljeong_core::search::filter_events;

use crate::render::{self, Render, create_spinner};
use crate::store::EventStore;

pub async fn run(
    store: &mut EventStore,
    view: View,
    date: Option<NaiveDate>,
    search: Option<String>,
) -> Result<()> {
    let spinner = create_spinner("일정을 불러오는 중".to_string());
    let fetched = store.fetch().await;
    spinner.finish_and_clear();
    fetched?;
    println!("{}", "일정 로딩 완료!".dimmed());

    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let term = search.unwrap_or_default();

    let events = filter_events(store.events(), &term, date, view);
    let holidays = holidays_for_month(date);

    match view {
        View::Month => {
            println!("{}", render::render_month(date, &events, &holidays));

            if events.is_empty() {
                println!("{}", "검색 결과가 없습니다.".dimmed());
                return Ok(());
            }

            // Matching events grouped by date under the grid
            let mut sorted = events;
            sorted.sort_by(|a, b| (&a.date, &a.start_time).cmp(&(&b.date, &b.start_time)));

            let mut current_date: Option<&str> = None;
            for event in &sorted {
                if current_date != Some(event.date.as_str()) {
                    println!();
                    println!("{}", event.date.bold());
                    current_date = Some(event.date.as_str());
                }
                println!("{}", event.render());
            }
        }
        View::Week => {
            println!("{}", render::render_week(date, &events, &holidays));

            if events.is_empty() {
                println!("{}", "검색 결과가 없습니다.".dimmed());
            }
        }
    }

    Ok(())
}
