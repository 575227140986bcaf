//! CLI for applying and inspecting schema migrations
//!
//! Uses the same migrations the server embeds. Outputs JSON for scripting.

use std::collections::HashSet;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use service_areas_core::config::Config;
use sqlx::migrate::{Migrate, Migrator};
use sqlx::PgPool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Parser)]
#[command(name = "migrate_cli")]
#[command(about = "Schema migration CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply all pending migrations
    Run,

    /// List embedded migrations and whether each is applied
    List,
}

#[derive(Serialize)]
struct Response {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    migrations: Option<Vec<MigrationInfo>>,
}

#[derive(Serialize)]
struct MigrationInfo {
    version: i64,
    description: String,
    applied: bool,
}

fn output(resp: Response) -> Result<()> {
    println!("{}", serde_json::to_string(&resp)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the JSON response
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,service_areas_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => cmd_run().await,
        Commands::List => cmd_list().await,
    }
}

async fn get_pool() -> Result<PgPool> {
    let config = Config::from_env()?;
    PgPool::connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

async fn cmd_run() -> Result<()> {
    let pool = get_pool().await?;

    tracing::info!("Running database migrations...");
    match MIGRATOR.run(&pool).await {
        Ok(()) => output(Response {
            success: true,
            message: Some(format!("{} migrations up to date", MIGRATOR.iter().count())),
            migrations: None,
        }),
        Err(e) => {
            tracing::error!(error = %e, "Migrations failed");
            output(Response {
                success: false,
                message: Some(format!("Failed to run migrations: {}", e)),
                migrations: None,
            })
        }
    }
}

async fn cmd_list() -> Result<()> {
    let pool = get_pool().await?;
    let mut conn = pool.acquire().await?;

    conn.ensure_migrations_table()
        .await
        .context("Failed to ensure migrations table")?;
    let applied: HashSet<i64> = conn
        .list_applied_migrations()
        .await
        .context("Failed to list applied migrations")?
        .into_iter()
        .map(|m| m.version)
        .collect();

    let migrations = MIGRATOR
        .iter()
        .map(|m| MigrationInfo {
            version: m.version,
            description: m.description.to_string(),
            applied: applied.contains(&m.version),
        })
        .collect();

    output(Response {
        success: true,
        message: None,
        migrations: Some(migrations),
    })
}
