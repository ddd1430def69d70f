//! Store kinds - the storage mechanisms a location can select
//!
//! Every store location maps to exactly one of three kinds:
//! - `Sqlite`: SQLite database on disk
//! - `Binary`: legacy binary-serialized file on disk
//! - `InMemory`: process memory only

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Backend token for SQLite-backed stores.
pub const SQLITE_STORE_TYPE: &str = "SQLite";
/// Backend token for binary stores.
pub const BINARY_STORE_TYPE: &str = "Binary";
/// Backend token for in-memory stores.
pub const IN_MEMORY_STORE_TYPE: &str = "InMemory";

/// The storage mechanism behind a [`StoreLocation`](crate::StoreLocation),
/// without the directory it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// SQLite database in a directory on disk
    Sqlite,
    /// Binary-serialized store in a directory on disk
    Binary,
    /// Store held entirely in memory
    #[serde(rename = "memory")]
    InMemory,
}

impl StoreKind {
    /// Get the short name used in locators and config files
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Sqlite => "sqlite",
            StoreKind::Binary => "binary",
            StoreKind::InMemory => "memory",
        }
    }

    /// Get the backend token the persistence framework keys its store types on
    pub fn type_identifier(&self) -> &'static str {
        match self {
            StoreKind::Sqlite => SQLITE_STORE_TYPE,
            StoreKind::Binary => BINARY_STORE_TYPE,
            StoreKind::InMemory => IN_MEMORY_STORE_TYPE,
        }
    }

    /// Whether stores of this kind live in a directory on disk
    pub fn is_persistent(&self) -> bool {
        !matches!(self, StoreKind::InMemory)
    }

    /// Get all store kinds
    pub fn all() -> &'static [StoreKind] {
        &[StoreKind::Sqlite, StoreKind::Binary, StoreKind::InMemory]
    }
}

impl FromStr for StoreKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" | "sqlite3" | "db" => Ok(StoreKind::Sqlite),
            "binary" | "bin" => Ok(StoreKind::Binary),
            "memory" | "inmemory" | "in-memory" | "mem" => Ok(StoreKind::InMemory),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
