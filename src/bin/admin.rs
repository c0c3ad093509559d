//! CLI administration tool for blog-api.
//!
//! Seeds, lists and removes blog posts and checks the database without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Add a post (prompts for missing fields)
//! cargo run --bin admin -- blog add --title "Hello"
//!
//! # List posts
//! cargo run --bin admin -- blog list
//!
//! # Remove a post
//! cargo run --bin admin -- blog remove 3
//!
//! # Check the storage backend / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! Uses the same environment variables as the server (`STORAGE_BACKEND`,
//! `DATABASE_URL`, ...).

use blog_api::config::Config;
use blog_api::domain::entities::NewBlog;
use blog_api::domain::repositories::BlogRepository;
use blog_api::infrastructure::data_context::{
    DataContext, PgDataContext, PostgresOptions, StorageBackend, open_data_context,
};
use blog_api::infrastructure::persistence::ContextBlogRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
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
    /// Manage blog posts
    Blog {
        #[command(subcommand)]
        action: BlogAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Blog post subcommands.
#[derive(Subcommand)]
enum BlogAction {
    /// Add a blog post
    Add {
        /// Post title
        #[arg(short, long)]
        title: Option<String>,

        /// Post content
        #[arg(short, long)]
        content: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all blog posts
    List,

    /// Remove a blog post
    Remove {
        /// Post ID
        id: i64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check that the storage backend answers
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;

    match cli.command {
        Commands::Blog { action } => {
            let context = open_data_context(config.data_context_options()?)
                .await
                .context("Failed to open data context")?;
            let result = handle_blog_action(action, context.clone()).await;
            context.close().await;
            result?;
        }
        Commands::Db { action } => handle_db_action(action, &config).await?,
    }

    Ok(())
}

/// Dispatches blog commands.
async fn handle_blog_action(action: BlogAction, context: Arc<dyn DataContext>) -> Result<()> {
    match action {
        BlogAction::Add {
            title,
            content,
            yes,
        } => add_blog(context, title, content, yes).await,
        BlogAction::List => list_blogs(context).await,
        BlogAction::Remove { id } => remove_blog(context, id).await,
    }
}

/// Adds a post, prompting for fields that were not passed on the command line.
///
/// Empty answers leave the field unset.
async fn add_blog(
    context: Arc<dyn DataContext>,
    title: Option<String>,
    content: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "📝 Add Blog Post".bright_blue().bold());
    println!();

    let title = match title {
        Some(t) => t,
        None => Input::new()
            .with_prompt("Title")
            .allow_empty(true)
            .interact_text()?,
    };

    let content = match content {
        Some(c) => c,
        None => Input::new()
            .with_prompt("Content")
            .allow_empty(true)
            .interact_text()?,
    };

    let new_blog = NewBlog {
        title: Some(title).filter(|t| !t.is_empty()),
        content: Some(content).filter(|c| !c.is_empty()),
    };

    println!();
    println!("{}", "Post details:".bright_white().bold());
    println!("  Title:   {}", display_field(&new_blog.title).cyan());
    println!("  Content: {}", display_field(&new_blog.content).cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Save this post?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    context.add(new_blog).await;
    context
        .save_changes()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to save post: {}", e))?;

    println!("{}", "✅ Post saved".green().bold());
    println!();

    Ok(())
}

/// Lists all posts.
///
/// # Output Format
///
/// ```text
/// 📋 Blog Posts
///
///   ID    Title                          Content
///   ───────────────────────────────────────────────────────────────
///   1     Hello                          First post
/// ```
async fn list_blogs(context: Arc<dyn DataContext>) -> Result<()> {
    println!("{}", "📋 Blog Posts".bright_blue().bold());
    println!();

    let repo = ContextBlogRepository::new(Some(context))?;
    let blogs = repo
        .get_all_entries()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list posts: {}", e))?;

    if blogs.is_empty() {
        println!("{}", "  No posts found".yellow());
        println!();
        println!(
            "  Create one with: {} admin blog add",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<30} {}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Content".bright_white().bold()
    );
    println!("  {}", "─".repeat(65).bright_black());

    for blog in &blogs {
        println!(
            "  {:<5} {:<30} {}",
            blog.id.to_string().bright_black(),
            truncate(display_field(&blog.title), 30).cyan(),
            truncate(display_field(&blog.content), 40)
        );
    }

    println!();
    println!("  Total: {}", blogs.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Removes a post after confirmation (default: No).
async fn remove_blog(context: Arc<dyn DataContext>, id: i64) -> Result<()> {
    println!("{}", "🗑️  Remove Blog Post".bright_blue().bold());
    println!();

    let blog = context
        .blogs()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .into_iter()
        .find(|b| b.id == id)
        .context("Post not found")?;

    println!("  ID:    {}", blog.id.to_string().bright_black());
    println!("  Title: {}", display_field(&blog.title).cyan());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Remove this post?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    context.remove(id).await;
    context
        .save_changes()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to remove post: {}", e))?;

    println!("{}", "✅ Post removed".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking storage backend...".bright_blue());

            let context = open_data_context(config.data_context_options()?).await?;
            let healthy = context.health_check().await;
            context.close().await;

            if !healthy {
                anyhow::bail!("Storage backend did not answer");
            }

            println!("{}", "✅ Storage backend OK".green().bold());
        }
        DbAction::Migrate => {
            let options = match config.data_context_options()?.backend {
                StorageBackend::Postgres(pg) => PostgresOptions {
                    run_migrations: true,
                    ..pg
                },
                StorageBackend::InMemory { .. } => {
                    println!(
                        "{}",
                        "⚠️  Migrations only apply to the postgres backend".yellow()
                    );
                    return Ok(());
                }
            };

            println!("{}", "🛠️  Applying migrations...".bright_blue());

            let context = PgDataContext::connect(&options).await?;
            context.close().await;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}

fn display_field(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("-")
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let cut: String = value.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
