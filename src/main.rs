use std::process::ExitCode;

use ecommerce_seed::{config::Config, db, schema, seeder, SeedError, SeedReport};
use log::error;

async fn seed() -> Result<SeedReport, SeedError> {
    let config = Config::from_env()?;
    let client = db::connect(&config).await?;

    // Release the connection whether or not seeding succeeded.
    let result = seeder::run(&client, schema::DATABASE_NAME).await;
    client.shutdown().await;
    result
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok(); // Load environment variables from .env file
    env_logger::init();

    match seed().await {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("seeding aborted: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
