mod client;
mod commands;
mod config;
mod render;
mod store;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use iljeong_core::View;

use crate::client::ApiClient;
use crate::commands::EventArgs;
use crate::config::CliConfig;
use crate::store::EventStore;

#[derive(Parser)]
#[command(name = "iljeong")]
#[command(about = "Manage your iljeong calendar from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the calendar and its events
    List {
        /// View to render (week or month)
        #[arg(short, long)]
        view: Option<View>,

        /// Anchor date (YYYY-MM-DD), today when omitted
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Only show events whose title, description, or location match
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Add an event
    Add {
        #[command(flatten)]
        fields: EventArgs,

        /// Save even when the event overlaps existing ones
        #[arg(short, long)]
        force: bool,
    },
    /// Edit an event by id
    Edit {
        id: String,

        #[command(flatten)]
        fields: EventArgs,

        /// Save even when the event overlaps existing ones
        #[arg(short, long)]
        force: bool,
    },
    /// Delete an event by id
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Stay running and print reminders as events come up
    Watch {
        /// Seconds between reminder checks
        #[arg(long, default_value_t = 1)]
        interval_secs: u64,

        /// Seconds between refreshes of the event list
        #[arg(long, default_value_t = 60)]
        refresh_secs: u64,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{}", render::render_failure(&err));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load()?;
    let client = ApiClient::connect(&config.server_url).await?;
    let mut store = EventStore::new(client);

    match cli.command {
        Commands::List { view, date, search } => {
            let view = view.unwrap_or(config.default_view);
            commands::list::run(&mut store, view, date, search).await
        }
        Commands::Add { fields, force } => commands::add::run(&mut store, fields, force).await,
        Commands::Edit { id, fields, force } => {
            commands::edit::run(&mut store, &id, fields, force).await
        }
        Commands::Delete { id, yes } => commands::delete::run(&mut store, &id, yes).await,
        Commands::Watch {
            interval_secs,
            refresh_secs,
        } => commands::watch::run(&mut store, interval_secs, refresh_secs).await,
    }
}
