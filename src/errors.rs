use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating the Pokédex dataset.
#[derive(Debug, Error)]
pub enum DataError {
    /// The dataset file could not be read
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The dataset is not valid RON for `PokedexData`
    #[error("malformed dataset: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// Two records of the same kind share an id
    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },
    /// A record points at an id that does not exist
    #[error("{kind} {id} references unknown {target} {target_id}")]
    DanglingReference {
        kind: &'static str,
        id: u32,
        target: &'static str,
        target_id: u32,
    },
}

/// Errors raised while assembling the runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("invalid configuration: {0}")]
    Extract(#[from] Box<figment::Error>),
    #[error("max_query_length must be at least 1")]
    ZeroQueryLength,
}

/// Type alias for Results using DataError
pub type DataResult<T> = Result<T, DataError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
