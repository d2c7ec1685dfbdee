use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fest_client::ApiClient;
use fest_core::config::FestConfig;

mod commands;
mod terminal;

#[derive(Parser)]
#[command(name = "fest")]
#[command(about = "FEST CLI - wedding planner client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Guest list and RSVP state
    Guests {
        #[command(subcommand)]
        action: Option<GuestsAction>,
    },
    /// Uploaded photos and videos
    Gallery {
        /// Filter by media kind (image / video)
        #[arg(long)]
        kind: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// The gift registry
    Gifts {
        #[command(subcommand)]
        action: Option<GiftsAction>,
    },
    /// Planning notes
    Notes {
        #[command(subcommand)]
        action: Option<NotesAction>,
    },
    /// Vendor and helper contacts
    Contacts {
        #[arg(long)]
        search: Option<String>,
    },
    /// The table-seating board
    Seating {
        #[command(subcommand)]
        action: Option<SeatingAction>,
    },
    /// The event schedule
    Schedule {
        #[arg(long)]
        search: Option<String>,
    },
    /// Push-notification plumbing
    Push {
        #[command(subcommand)]
        action: PushAction,
    },
}

#[derive(Subcommand)]
enum GuestsAction {
    /// List guests
    List {
        #[arg(long)]
        search: Option<String>,
        /// Filter by RSVP state (pending / attending / declined)
        #[arg(long)]
        status: Option<String>,
    },
    /// Update one guest's RSVP state
    Rsvp { guest: i64, status: String },
}

#[derive(Subcommand)]
enum GiftsAction {
    /// List gifts
    List {
        #[arg(long)]
        category: Option<String>,
        /// Filter by reservation state (available / reserved / purchased)
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Reserve a gift
    Reserve { gift: i64, name: String },
}

#[derive(Subcommand)]
enum NotesAction {
    /// List notes
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Add a note
    Add { title: String, body: Option<String> },
    /// Replace a note's title and body
    Edit {
        note: i64,
        title: String,
        body: Option<String>,
    },
    /// Delete a note
    Delete { note: i64 },
}

#[derive(Subcommand)]
enum SeatingAction {
    /// Show tables with their guests
    Show,
    /// Seat a guest at a table
    Assign { guest: i64, table: i64 },
    /// Move a guest back to the unassigned pool
    Unassign { guest: i64 },
}

#[derive(Subcommand)]
enum PushAction {
    /// Show the server's VAPID key
    Key,
    /// Remove a push subscription by endpoint URL
    Unregister { endpoint: String },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = FestConfig::load()?;
    let client = Arc::new(ApiClient::new(&config)?);
    let ctx = commands::AppContext::new(client);

    // Flush even when the command failed, so an error block still prints.
    let outcome = run(cli.command, &ctx).await;
    ctx.flush();
    outcome
}

async fn run(command: Commands, ctx: &commands::AppContext) -> Result<()> {
    match command {
        Commands::Guests { action } => match action.unwrap_or(GuestsAction::List {
            search: None,
            status: None,
        }) {
            GuestsAction::List { search, status } => commands::guests(ctx, search, status).await?,
            GuestsAction::Rsvp { guest, status } => commands::rsvp(ctx, guest, status).await?,
        },
        Commands::Gallery { kind, search } => commands::gallery(ctx, kind, search).await?,
        Commands::Gifts { action } => match action.unwrap_or(GiftsAction::List {
            category: None,
            status: None,
            search: None,
        }) {
            GiftsAction::List {
                category,
                status,
                search,
            } => commands::gifts(ctx, category, status, search).await?,
            GiftsAction::Reserve { gift, name } => commands::reserve_gift(ctx, gift, name).await?,
        },
        Commands::Notes { action } => match action.unwrap_or(NotesAction::List { search: None }) {
            NotesAction::List { search } => commands::notes(ctx, search).await?,
            NotesAction::Add { title, body } => commands::add_note(ctx, title, body).await?,
            NotesAction::Edit { note, title, body } => {
                commands::edit_note(ctx, note, title, body).await?
            }
            NotesAction::Delete { note } => commands::delete_note(ctx, note).await?,
        },
        Commands::Contacts { search } => commands::contacts(ctx, search).await?,
        Commands::Seating { action } => match action.unwrap_or(SeatingAction::Show) {
            SeatingAction::Show => commands::seating(ctx).await?,
            SeatingAction::Assign { guest, table } => commands::assign(ctx, guest, table).await?,
            SeatingAction::Unassign { guest } => commands::unassign(ctx, guest).await?,
        },
        Commands::Schedule { search } => commands::schedule(ctx, search).await?,
        Commands::Push { action } => match action {
            PushAction::Key => commands::push_key(ctx).await?,
            PushAction::Unregister { endpoint } => commands::push_unregister(ctx, endpoint).await?,
        },
    }

    Ok(())
}
