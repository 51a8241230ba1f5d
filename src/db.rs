use log::{debug, info};
use mongodb::bson::doc;
use mongodb::{options::ClientOptions, Client};

use crate::config::Config;
use crate::error::SeedError;

const APP_NAME: &str = "ecommerce-seed";

/// Builds a client and pings the server so an unreachable or unauthorized
/// deployment fails before any seeding step runs.
pub async fn connect(config: &Config) -> Result<Client, SeedError> {
    let mut client_options = ClientOptions::parse(&config.database_url)
        .await
        .map_err(SeedError::Connect)?;
    client_options.app_name = Some(APP_NAME.to_string());

    let client = Client::with_options(client_options).map_err(SeedError::Connect)?;

    debug!("pinging MongoDB deployment");
    if let Err(e) = client
        .database("admin")
        .run_command(doc! { "ping": 1 }, None)
        .await
    {
        client.shutdown().await;
        return Err(SeedError::Connect(e));
    }
    info!("connected to MongoDB");

    Ok(client)
}
