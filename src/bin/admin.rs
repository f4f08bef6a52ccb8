//! CLI administration tool for symbol-eye-api.
//!
//! Mints admin tokens and inspects the catalog database without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Issue a token for the configured administrator
//! cargo run --bin admin -- token
//!
//! # Issue a token for another identity, valid for 7 days
//! cargo run --bin admin -- token --email editor@example.com --days 7
//!
//! # View collection counts
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see `symbol_eye_api::config`); `.env` is loaded if present.

use symbol_eye_api::application::services::auth_service::MAX_TOKEN_TTL_DAYS;
use symbol_eye_api::application::services::{AuthService, StatsService};
use symbol_eye_api::config::{self, Config, mask_connection_string};
use symbol_eye_api::domain::entities::{Collection, Document};
use symbol_eye_api::domain::repositories::DocumentRepository;
use symbol_eye_api::infrastructure::persistence::MongoDocumentRepository;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::sync::Arc;

/// CLI tool for managing symbol-eye-api.
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
    /// Issue a signed bearer token
    Token {
        /// Email claim (defaults to ADMIN_EMAIL)
        #[arg(short, long)]
        email: Option<String>,

        /// Token lifetime in days (defaults to JWT_TTL_DAYS)
        #[arg(short, long)]
        days: Option<i64>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show collection counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Token { email, days, yes } => issue_token(&config, email, days, yes)?,
        Commands::Stats => handle_stats(&config).await?,
        Commands::Db { action } => handle_db_action(action, &config).await?,
    }

    Ok(())
}

async fn connect(config: &Config) -> Result<Arc<MongoDocumentRepository>> {
    let repository = MongoDocumentRepository::connect(
        &config.database_uri,
        &config.database_name,
        config.db_connect_timeout(),
    )
    .await
    .map_err(|e| anyhow::anyhow!("Failed to configure database client: {}", e))?;

    Ok(Arc::new(repository))
}

/// Issues a token with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for the email claim (or use provided / `ADMIN_EMAIL`)
/// 2. Warn when the identity is not the administrator
/// 3. Confirm (unless `--yes` flag)
/// 4. Sign and print the token with usage instructions
fn issue_token(
    config: &Config,
    email: Option<String>,
    days: Option<i64>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔑 Issue Token".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new()
            .with_prompt("Email claim")
            .with_initial_text(config.admin_email.clone())
            .interact_text()?,
    };

    let ttl_days = days.unwrap_or(config.jwt_ttl_days);
    if !(1..=MAX_TOKEN_TTL_DAYS).contains(&ttl_days) {
        anyhow::bail!("--days must be between 1 and {}", MAX_TOKEN_TTL_DAYS);
    }

    println!("  Email:    {}", email.cyan());
    println!("  Lifetime: {} days", ttl_days.to_string().cyan());
    if email != config.admin_email {
        println!(
            "{}",
            "⚠️  This identity is not ADMIN_EMAIL; admin routes will answer 403".yellow()
        );
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Issue this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let auth = AuthService::new(
        &config.jwt_secret,
        config.admin_email.clone(),
        chrono::Duration::days(ttl_days),
    );

    let mut claims = Document::new();
    claims.insert("email".to_string(), email.into());

    let token = auth
        .issue_token(claims)
        .map_err(|e| anyhow::anyhow!("Failed to sign token: {}", e))?;

    println!("{}", "✅ Token issued".green().bold());
    println!();
    println!("{}", "Add this to your requests:".bright_white());
    println!(
        "  {}: Bearer {}",
        "Authorization".bright_cyan(),
        token.bright_yellow()
    );
    println!();

    Ok(())
}

/// Displays the dashboard counts.
async fn handle_stats(config: &Config) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let repository = connect(config).await?;
    let stats = StatsService::new(repository)
        .catalog_stats()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!(
        "  Products:   {}",
        stats.products.to_string().bright_white().bold()
    );
    println!(
        "  Categories: {}",
        stats.categories.to_string().bright_white().bold()
    );
    println!(
        "  Services:   {}",
        stats.services.to_string().bright_white().bold()
    );
    println!("  FAQ:        {}", stats.faq.to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, config: &Config) -> Result<()> {
    let repository = connect(config).await?;

    match action {
        DbAction::Check => {
            print!("Checking database connection... ");

            match repository.ping().await {
                Ok(()) => println!("{}", "✅ OK".green().bold()),
                Err(e) => {
                    println!("{}", "❌ FAILED".red().bold());
                    anyhow::bail!("Database ping failed: {}", e);
                }
            }
        }
        DbAction::Info => {
            println!("{}", "🗄️  Database Info".bright_blue().bold());
            println!();
            println!(
                "  Server:   {}",
                mask_connection_string(&config.database_uri).bright_black()
            );
            println!("  Database: {}", config.database_name.cyan());
            println!();

            for collection in Collection::ALL {
                let count = repository
                    .estimated_count(collection)
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to count {}: {}", collection, e))?;

                println!(
                    "  {:<12} {}",
                    collection.name(),
                    count.to_string().bright_white()
                );
            }
            println!();
        }
    }

    Ok(())
}
