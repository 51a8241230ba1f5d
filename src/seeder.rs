//! The one-shot initialization pipeline.
//!
//! [`run`] is the only entry point and executes the steps strictly in order:
//! select the database, create collections, insert the sample catalog,
//! create indexes, then read the resulting state back into a [`SeedReport`].
//! The first failing step aborts the run; nothing is retried or rolled back.
//!
//! Re-running against a seeded database is safe: existing collections are
//! accepted, catalog products already present (matched by name) are not
//! inserted again, and identical index definitions are no-ops on the server.

use std::fmt;

use log::{debug, info};
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::InsertManyOptions;
use mongodb::{Client, Database};

use crate::catalog;
use crate::error::{is_namespace_exists, SeedError};
use crate::models::Product;
use crate::schema::{self, PRODUCTS};

pub const COMPLETION_MESSAGE: &str = "Database initialized with sample data!";

/// Post-run state, read from the server after all writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub database: String,
    /// Products written by this run; zero on a re-run.
    pub inserted: usize,
    pub product_count: u64,
    /// Sorted collection names present in the database.
    pub collections: Vec<String>,
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{COMPLETION_MESSAGE}")?;
        writeln!(f, "Products inserted: {}", self.product_count)?;
        write!(f, "Collections created: [{}]", self.collections.join(", "))
    }
}

pub async fn run(client: &Client, database_name: &str) -> Result<SeedReport, SeedError> {
    let db = select_database(client, database_name);
    create_collections(&db, &schema::COLLECTIONS).await?;
    let inserted = insert_products(&db, &catalog::sample_products()).await?;
    create_indexes(&db).await?;
    report(&db, inserted).await
}

fn select_database(client: &Client, name: &str) -> Database {
    info!("seeding database `{name}`");
    client.database(name)
}

/// Creates each collection in order. An existing collection is kept; any
/// other failure stops before the remaining names.
pub(crate) async fn create_collections(db: &Database, names: &[&str]) -> Result<(), SeedError> {
    for &name in names {
        match db.create_collection(name, None).await {
            Ok(()) => info!("created collection `{name}`"),
            Err(e) if is_namespace_exists(&e) => {
                info!("collection `{name}` already exists, keeping it");
            }
            Err(source) => {
                return Err(SeedError::CreateCollection {
                    name: name.to_string(),
                    source,
                })
            }
        }
    }
    Ok(())
}

/// Inserts the catalog products missing from the collection as one ordered
/// batch, so the server stops at the first failing document.
pub(crate) async fn insert_products(db: &Database, products: &[Product]) -> Result<usize, SeedError> {
    for product in products {
        product
            .validate()
            .map_err(|reason| SeedError::InvalidProduct {
                name: product.name.clone(),
                reason,
            })?;
    }

    let collection = db.collection::<Product>(PRODUCTS);
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    let existing = collection
        .distinct("name", doc! { "name": { "$in": names } }, None)
        .await
        .map_err(SeedError::InsertProducts)?;

    let missing: Vec<&Product> = products
        .iter()
        .filter(|p| !existing.contains(&Bson::String(p.name.clone())))
        .collect();
    if missing.is_empty() {
        info!("all {} sample products already present", products.len());
        return Ok(0);
    }
    debug!(
        "{} of {} sample products already present",
        existing.len(),
        products.len()
    );

    let options = InsertManyOptions::builder().ordered(true).build();
    let result = collection
        .insert_many(missing, options)
        .await
        .map_err(SeedError::InsertProducts)?;
    info!("inserted {} products", result.inserted_ids.len());
    Ok(result.inserted_ids.len())
}

async fn create_indexes(db: &Database) -> Result<(), SeedError> {
    for spec in schema::indexes() {
        let keys = spec.model.keys.clone();
        let created = db
            .collection::<Document>(spec.collection)
            .create_index(spec.model, None)
            .await
            .map_err(|source| SeedError::CreateIndex {
                collection: spec.collection.to_string(),
                source,
            })?;
        debug!(
            "index `{}` on `{}` ({keys})",
            created.index_name, spec.collection
        );
    }
    info!("indexes ready");
    Ok(())
}

async fn report(db: &Database, inserted: usize) -> Result<SeedReport, SeedError> {
    let product_count = db
        .collection::<Document>(PRODUCTS)
        .count_documents(None, None)
        .await
        .map_err(SeedError::Report)?;
    let mut collections = db
        .list_collection_names(None)
        .await
        .map_err(SeedError::Report)?;
    collections.sort();

    Ok(SeedReport {
        database: db.name().to_string(),
        inserted,
        product_count,
        collections,
    })
}
