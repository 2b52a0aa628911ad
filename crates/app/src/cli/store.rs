use catalog_app::context::AppContext;
use clap::Args;

/// Where products are read from and written to.
#[derive(Debug, Args)]
pub(crate) struct StoreArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true, global = true)]
    database_url: Option<String>,

    /// Base URL of a catalog-json server; takes precedence over --database-url
    #[arg(long, env = "CATALOG_REMOTE_URL", global = true)]
    remote_url: Option<String>,
}

impl StoreArgs {
    pub(crate) async fn connect(&self) -> Result<AppContext, String> {
        if let Some(url) = &self.remote_url {
            return Ok(AppContext::from_remote_url(url));
        }

        let Some(url) = &self.database_url else {
            return Err("either --database-url or --remote-url is required".to_string());
        };

        AppContext::from_database_url(url)
            .await
            .map_err(|error| format!("{error}: {}", error_source(&error)))
    }
}

fn error_source(error: &dyn std::error::Error) -> String {
    error
        .source()
        .map_or_else(String::new, ToString::to_string)
}
