//! Database Config

use clap::Args;

/// Product database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string; pending migrations are applied on startup
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
}
