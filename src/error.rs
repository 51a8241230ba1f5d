use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use thiserror::Error;

/// Server code for `NamespaceExists`, returned by `create` on an existing collection.
const NAMESPACE_EXISTS: i32 = 48;
/// Server code for `DuplicateKey`.
const DUPLICATE_KEY: i32 = 11000;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to connect to MongoDB: {0}")]
    Connect(#[source] MongoError),

    #[error("failed to create collection `{name}`: {source}")]
    CreateCollection {
        name: String,
        #[source]
        source: MongoError,
    },

    #[error("sample product `{name}` is invalid: {reason}")]
    InvalidProduct { name: String, reason: String },

    #[error("failed to insert products: {0}")]
    InsertProducts(#[source] MongoError),

    #[error("failed to create index on `{collection}`: {source}")]
    CreateIndex {
        collection: String,
        #[source]
        source: MongoError,
    },

    #[error("failed to read back seeded state: {0}")]
    Report(#[source] MongoError),

    #[error("a user with email `{0}` already exists")]
    DuplicateEmail(String),

    #[error("password hashing failed: {0}")]
    PasswordHash(#[from] argon2::Error),

    #[error("{0} must not be empty")]
    MissingCredential(&'static str),

    #[error("an order needs at least one product")]
    EmptyOrder,

    #[error("shipping field `{0}` must not be empty")]
    MissingShippingField(&'static str),

    #[error("unknown product ids: {}", .0.join(", "))]
    UnknownProducts(Vec<String>),

    #[error(transparent)]
    Database(#[from] MongoError),
}

/// True when the server refused to create a collection because it already exists.
pub fn is_namespace_exists(err: &MongoError) -> bool {
    matches!(&*err.kind, ErrorKind::Command(cmd) if cmd.code == NAMESPACE_EXISTS)
}

/// True when a single or bulk write hit a unique index.
pub fn is_duplicate_key(err: &MongoError) -> bool {
    match &*err.kind {
        ErrorKind::Write(WriteFailure::WriteError(write)) => write.code == DUPLICATE_KEY,
        ErrorKind::BulkWrite(bulk) => bulk
            .write_errors
            .as_ref()
            .is_some_and(|errors| errors.iter().any(|e| e.code == DUPLICATE_KEY)),
        ErrorKind::Command(cmd) => cmd.code == DUPLICATE_KEY,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_errors_are_not_classified_as_server_conflicts() {
        let err = MongoError::from(io::Error::new(io::ErrorKind::ConnectionRefused, "refused"));
        assert!(!is_namespace_exists(&err));
        assert!(!is_duplicate_key(&err));
    }

    #[test]
    fn messages_name_the_failing_resource() {
        let err = SeedError::InvalidProduct {
            name: "4K Webcam".to_string(),
            reason: "price must be positive".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "sample product `4K Webcam` is invalid: price must be positive"
        );

        let err = SeedError::UnknownProducts(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.to_string(), "unknown product ids: a, b");
    }
}
