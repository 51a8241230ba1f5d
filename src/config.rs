use std::env;

use crate::error::SeedError;

const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
}

impl Config {
    /// Reads `DATABASE_URL`. `main` loads `.env` before this runs.
    pub fn from_env() -> Result<Self, SeedError> {
        Self::from_url(env::var("DATABASE_URL").ok())
    }

    fn from_url(url: Option<String>) -> Result<Self, SeedError> {
        let database_url = url.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        if !database_url.starts_with("mongodb://") && !database_url.starts_with("mongodb+srv://") {
            return Err(SeedError::Config(format!(
                "DATABASE_URL must be a mongodb:// or mongodb+srv:// connection string, got `{database_url}`"
            )));
        }
        Ok(Config { database_url })
    }
}
