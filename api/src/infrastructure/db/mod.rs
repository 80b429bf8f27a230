use std::time::Duration;

use anyhow::Context;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use crate::bootstrap::config::Config;

pub const DEFAULT_DATABASE: &str = "fiber-hrms";
pub const EMPLOYEES_COLLECTION: &str = "employees";

/// Connects to the store and waits (bounded) until it answers a ping.
pub async fn connect_database(cfg: &Config) -> anyhow::Result<Database> {
    let timeout = Duration::from_secs(cfg.mongodb_connect_timeout_secs);
    let mut options = ClientOptions::parse(cfg.mongodb_uri.as_str())
        .await
        .context("invalid MONGODB_URI")?;
    options.app_name = Some("hrms-api".into());
    options.connect_timeout = Some(timeout);
    options.server_selection_timeout = Some(timeout);

    let db_name = resolve_database_name(cfg.mongodb_database.as_deref(), &options);
    let client = Client::with_options(options)?;
    let db = client.database(&db_name);

    tokio::time::timeout(timeout, db.run_command(doc! { "ping": 1 }))
        .await
        .with_context(|| format!("mongodb did not answer within {}s", timeout.as_secs()))?
        .context("mongodb ping failed")?;
    tracing::info!(database = %db_name, "mongodb_connected");
    Ok(db)
}

fn resolve_database_name(explicit: Option<&str>, options: &ClientOptions) -> String {
    explicit
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
        .or_else(|| options.default_database.clone())
        .unwrap_or_else(|| DEFAULT_DATABASE.to_string())
}

pub mod repositories;
