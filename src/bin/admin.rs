//! CLI administration tool for dashboard-templates.
//!
//! Inspects base templates and user templates and performs database
//! operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Show the base templates the service would serve
//! cargo run --bin admin -- base list
//!
//! # List a user's templates
//! cargo run --bin admin -- templates list 12345
//!
//! # Delete all of a user's templates (they are re-created on next access)
//! cargo run --bin admin -- templates reset 12345
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required for `templates` and `db`): PostgreSQL connection string
//! - `BASE_TEMPLATES_PATH` (optional): JSON file replacing the built-in base templates

use dashboard_templates::domain::entities::BaseTemplateRegistry;
use dashboard_templates::domain::repositories::TemplateRepository;
use dashboard_templates::infrastructure::base_templates;
use dashboard_templates::infrastructure::persistence::PgTemplateRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing dashboard-templates.
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
    /// Inspect base templates
    Base {
        #[command(subcommand)]
        action: BaseAction,
    },

    /// Manage user templates
    Templates {
        #[command(subcommand)]
        action: TemplateAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum BaseAction {
    /// List base templates with their widget counts
    List,
}

#[derive(Subcommand)]
enum TemplateAction {
    /// List a user's templates
    List {
        /// User ID from the identity header
        user_id: String,
    },

    /// Delete all templates of a user
    Reset {
        /// User ID from the identity header
        user_id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Base { action } => handle_base_action(action)?,
        Commands::Templates { action } => {
            handle_template_action(action, &connect().await?).await?
        }
        Commands::Db { action } => handle_db_action(action, &connect().await?).await?,
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

/// Prints the base template registry the server would load.
fn handle_base_action(action: BaseAction) -> Result<()> {
    match action {
        BaseAction::List => {
            let (registry, source) = match std::env::var("BASE_TEMPLATES_PATH") {
                Ok(path) if !path.trim().is_empty() => {
                    (base_templates::load_from_file(&path)?, path)
                }
                _ => (BaseTemplateRegistry::builtin(), "built-in".to_string()),
            };

            println!("{}", "📐 Base Templates".bright_blue().bold());
            println!("  Source: {}", source.bright_black());
            println!();

            println!(
                "  {:<16} {:<24} {:<6} {:<6} {:<6} {:<6}",
                "Name".bright_white().bold(),
                "Display name".bright_white().bold(),
                "sm".bright_white().bold(),
                "md".bright_white().bold(),
                "lg".bright_white().bold(),
                "xl".bright_white().bold()
            );
            println!("  {}", "─".repeat(70).bright_black());

            for base in registry.all() {
                let config = &base.template_config;
                println!(
                    "  {:<16} {:<24} {:<6} {:<6} {:<6} {:<6}",
                    base.name.as_str().cyan(),
                    base.display_name,
                    config.sm.len(),
                    config.md.len(),
                    config.lg.len(),
                    config.xl.len()
                );
            }
            println!();
        }
    }

    Ok(())
}

/// Dispatches user template commands.
async fn handle_template_action(action: TemplateAction, pool: &PgPool) -> Result<()> {
    let repo = PgTemplateRepository::new(Arc::new(pool.clone()));

    match action {
        TemplateAction::List { user_id } => list_templates(&repo, &user_id).await?,
        TemplateAction::Reset { user_id, yes } => reset_templates(&repo, &user_id, yes).await?,
    }

    Ok(())
}

/// Lists a user's templates, marking defaults.
///
/// # Output Format
///
/// ```text
/// 📋 Templates of 12345
///
///   ID    Category         Display name                   Updated            Default
///   ──────────────────────────────────────────────────────────────────────────────────
///   17    landingPage      Landing Page                   2026-01-15 10:30   ★
/// ```
async fn list_templates(repo: &PgTemplateRepository, user_id: &str) -> Result<()> {
    println!(
        "{} {}",
        "📋 Templates of".bright_blue().bold(),
        user_id.bright_blue().bold()
    );
    println!();

    let templates = repo
        .list_for_user(user_id, None)
        .await
        .context("Failed to list templates")?;

    if templates.is_empty() {
        println!("{}", "  No templates found".yellow());
        println!("  They are created from base templates on the user's next request.");
        return Ok(());
    }

    println!(
        "  {:<5} {:<16} {:<30} {:<18} {}",
        "ID".bright_white().bold(),
        "Category".bright_white().bold(),
        "Display name".bright_white().bold(),
        "Updated".bright_white().bold(),
        "Default".bright_white().bold()
    );
    println!("  {}", "─".repeat(82).bright_black());

    for template in &templates {
        let default = if template.default {
            "★".yellow()
        } else {
            "".normal()
        };

        println!(
            "  {:<5} {:<16} {:<30} {:<18} {}",
            template.id.to_string().bright_black(),
            template.category.as_str().cyan(),
            template.display_name,
            template
                .updated_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            default
        );
    }

    println!();
    println!(
        "  Total: {}",
        templates.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes every template of a user after confirmation.
async fn reset_templates(repo: &PgTemplateRepository, user_id: &str, yes: bool) -> Result<()> {
    println!("{}", "🧹 Reset User Templates".bright_blue().bold());
    println!();
    println!("  User: {}", user_id.cyan());
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete all templates of this user?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = repo
        .delete_for_user(user_id)
        .await
        .context("Failed to delete templates")?;

    println!(
        "{} {}",
        "✅ Deleted templates:".green().bold(),
        deleted.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let templates: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM dashboard_templates")
                .fetch_one(pool)
                .await
                .context("dashboard_templates table is not available, run the server once to migrate")?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!(
                "  Stored templates: {}",
                templates.to_string().bright_green().bold()
            );
        }
    }

    Ok(())
}
