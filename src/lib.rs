//! # storeloc - Store location descriptors
//!
//! Describes where a persistence layer should keep its data.
//!
//! storeloc provides:
//! - `StoreLocation`: SQLite or binary store in a directory, or in memory
//! - `StoreKind`: the storage mechanism and its backend token
//! - A `kind:directory` locator string form for CLIs and config files
//! - TOML configuration carrying a store location

pub mod kind;
pub mod location;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use kind::StoreKind;
pub use location::StoreLocation;
pub use config::StoreConfig;

/// Result type alias for storeloc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for storeloc operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid locator: {0}")]
    InvalidLocator(String),

    #[error("Unknown store kind: {0}")]
    UnknownKind(String),
}
