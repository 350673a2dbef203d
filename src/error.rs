use std::path::PathBuf;

use thiserror::Error;

use crate::store::CollectionKind;

/// Failure reading or parsing a store configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("seed source \"file\" requires a path")]
    MissingSeedPath,
}

/// Failure loading seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate id {id} in seed collection {collection}")]
    DuplicateId { collection: CollectionKind, id: u32 },
    #[error("id {id} in seed collection {collection} is out of range")]
    IdOutOfRange { collection: CollectionKind, id: u32 },
}

/// Failure building a store from configuration.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Seed(#[from] SeedError),
}
