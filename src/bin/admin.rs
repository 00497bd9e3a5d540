//! CLI administration tool for shortlink.
//!
//! Registers and inspects links directly against the PostgreSQL store,
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Register a link
//! cargo run --bin admin -- link create https://example.com/a
//!
//! # Show a link with its visit history
//! cargo run --bin admin -- link show aZ3kP9qx
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`).

use shortlink::config::{self, StoreBackend};
use shortlink::domain::repositories::LinkRepository;
use shortlink::infrastructure::persistence::PgLinkRepository;
use shortlink::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Register a long URL under a new short identifier
    Create {
        /// Absolute HTTP(S) URL to redirect to
        url: String,
    },

    /// Show a link and its visits
    Show {
        /// Short identifier
        id: String,

        /// Print every visit timestamp instead of only the most recent
        #[arg(short, long)]
        all: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    if config.store_backend != StoreBackend::Postgres {
        anyhow::bail!("admin requires STORE_BACKEND=postgres");
    }
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set")?;

    let repository = Arc::new(
        PgLinkRepository::open(database_url, &config.pool_settings())
            .await
            .context("Failed to connect to database")?,
    );

    let outcome = match cli.command {
        Commands::Link { action } => {
            let state = AppState::from_config(repository.clone(), &config);
            handle_link_action(action, &state).await
        }
        Commands::Db { action } => handle_db_action(action, repository.as_ref()).await,
    };

    repository.close().await;
    outcome
}

/// Dispatches link commands.
///
/// Uses the same identifier length, retry bound and store timeout as the server.
async fn handle_link_action(action: LinkAction, state: &AppState) -> Result<()> {
    match action {
        LinkAction::Create { url } => {
            let link = state.link_service.register(&url).await?;

            println!("{}", "✔ Link created".green().bold());
            println!("  {} {}", "Short URL:".bold(), link.id.bright_cyan());
            println!("  {} {}", "Target:   ".bold(), link.target);
        }
        LinkAction::Show { id, all } => {
            let analytics = state.analytics_service.get_analytics(&id).await?;
            let link = &analytics.link;

            println!("{}", format!("🔗 {}", link.id).bright_blue().bold());
            println!("  {} {}", "Target: ".bold(), link.target);
            println!(
                "  {} {}",
                "Created:".bold(),
                link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            println!(
                "  {} {}",
                "Clicks: ".bold(),
                analytics.total_clicks.to_string().bright_green()
            );

            if all {
                for visit in &link.visits {
                    println!("    {}", visit.timestamp.format("%Y-%m-%d %H:%M:%S%.3f UTC"));
                }
            } else if let Some(last) = link.last_visit() {
                println!(
                    "  {} {}",
                    "Last visit:".bold(),
                    last.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
                );
            }
        }
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, repository: &PgLinkRepository) -> Result<()> {
    match action {
        DbAction::Check => {
            repository.ping().await?;

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(repository.pool())
                .await?;
            let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(repository.pool())
                .await?;

            println!("{}", "✔ Database connection OK".green().bold());
            println!("  {} {}", "Server:".bold(), version.dimmed());
            println!("  {} {}", "Links: ".bold(), links);
        }
    }

    Ok(())
}
