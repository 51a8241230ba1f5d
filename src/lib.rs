//! Initializes the `ecommerce_db` MongoDB database with its collections,
//! sample catalog and indexes, and provides the typed access the storefront
//! uses on top of them.

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod schema;
pub mod seeder;
pub mod store;

pub use error::SeedError;
pub use seeder::SeedReport;
