//! CLI administration tool for blog-api.
//!
//! Provides commands for managing user roles, viewing content statistics,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # List registered users
//! cargo run --bin admin -- user list
//!
//! # Grant or revoke the admin role
//! cargo run --bin admin -- user promote ervin
//! cargo run --bin admin -- user demote ervin
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use blog_api::domain::entities::{RoleName, User};
use blog_api::domain::pagination::PageRequest;
use blog_api::domain::repositories::UserRepository;
use blog_api::infrastructure::persistence::PgUserRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing blog-api.
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
    /// Manage users and their roles
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// List users, newest first
    List {
        /// Zero-based page number
        #[arg(short, long, default_value_t = 0)]
        page: i64,
    },

    /// Grant ROLE_ADMIN to a user
    Promote {
        username: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Reduce a user to ROLE_USER
    Demote {
        username: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));

    match action {
        UserAction::List { page } => list_users(&repo, page).await?,
        UserAction::Promote { username, yes } => {
            set_admin(&repo, &username, true, yes).await?;
        }
        UserAction::Demote { username, yes } => {
            set_admin(&repo, &username, false, yes).await?;
        }
    }

    Ok(())
}

/// Lists one page of users with their roles.
///
/// # Output Format
///
/// ```text
/// Users
///
///   ID  Username             Email                          Roles
///   ───────────────────────────────────────────────────────────────────
///   1   leanne               leanne@example.com             USER, ADMIN
///   2   ervin                ervin@example.com              USER
/// ```
async fn list_users(repo: &PgUserRepository, page: i64) -> Result<()> {
    println!("{}", "Users".bright_blue().bold());
    println!();

    let request = PageRequest::new(page, 30).map_err(|e| anyhow::anyhow!("{}", e))?;
    let users = repo
        .list(request)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.content.is_empty() {
        println!("{}", "  No users found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<20} {:<30} {}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Email".bright_white().bold(),
        "Roles".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for user in &users.content {
        let roles = if user.is_admin() {
            "USER, ADMIN".green()
        } else {
            "USER".normal()
        };

        println!(
            "  {:<4} {:<20} {:<30} {}",
            user.id.to_string().bright_black(),
            user.username.cyan(),
            user.email,
            roles
        );
    }

    println!();
    println!(
        "  Page {} of {}, {} users in total",
        (users.page + 1).to_string().bright_white().bold(),
        users.total_pages.max(1),
        users.total_elements.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Grants or revokes `ROLE_ADMIN` after confirmation.
async fn set_admin(
    repo: &PgUserRepository,
    username: &str,
    admin: bool,
    skip_confirm: bool,
) -> Result<()> {
    let user: User = repo
        .find_by_username(username)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("User not found")?;

    if user.is_admin() == admin {
        let state = if admin { "already an admin" } else { "not an admin" };
        println!("{}", format!("  {} is {}", user.username, state).yellow());
        return Ok(());
    }

    let prompt = if admin {
        format!("Grant ADMIN role to {}?", user.username)
    } else {
        format!("Revoke ADMIN role from {}?", user.username)
    };

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let roles = if admin {
        vec![RoleName::User, RoleName::Admin]
    } else {
        vec![RoleName::User]
    };

    repo.set_roles(user.id, roles)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to update roles: {}", e))?;

    println!();
    println!("{}", "Roles updated successfully".green().bold());
    println!();

    Ok(())
}

/// Displays row counts for every content table.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    for (label, table) in [
        ("Users", "users"),
        ("Posts", "posts"),
        ("Comments", "comments"),
        ("Albums", "albums"),
        ("Photos", "photos"),
        ("Todos", "todos"),
        ("Categories", "categories"),
        ("Tags", "tags"),
    ] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await?;

        println!(
            "  {:<12} {}",
            format!("{label}:"),
            count.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
