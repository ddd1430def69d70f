//! Store location - where a persistence layer keeps its data
//!
//! Locator format: `<kind>:<directory>` for on-disk stores, `memory` otherwise.
//!
//! Examples:
//! - `sqlite:/var/lib/app/store`
//! - `binary:./data`
//! - `memory`

use crate::kind::StoreKind;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Describes the store a persistence framework should set up.
///
/// The directory carried by the on-disk variants is taken as given: it is
/// not checked for existence and nothing is created here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum StoreLocation {
    /// SQLite database store. The path is the directory holding the store.
    Sqlite(PathBuf),
    /// Binary store. The path is the directory holding the store.
    Binary(PathBuf),
    /// In-memory store.
    #[default]
    InMemory,
}

impl StoreLocation {
    /// Create a SQLite store location in the given directory
    pub fn sqlite(directory: impl Into<PathBuf>) -> Self {
        StoreLocation::Sqlite(directory.into())
    }

    /// Create a binary store location in the given directory
    pub fn binary(directory: impl Into<PathBuf>) -> Self {
        StoreLocation::Binary(directory.into())
    }

    /// Create an in-memory store location
    pub fn in_memory() -> Self {
        StoreLocation::InMemory
    }

    /// The kind of store, without its directory
    pub fn kind(&self) -> StoreKind {
        match self {
            StoreLocation::Sqlite(_) => StoreKind::Sqlite,
            StoreLocation::Binary(_) => StoreKind::Binary,
            StoreLocation::InMemory => StoreKind::InMemory,
        }
    }

    /// Backend token used to pick the storage implementation
    pub fn type_identifier(&self) -> &'static str {
        self.kind().type_identifier()
    }

    /// Directory in which the store is located; `None` for in-memory stores
    pub fn directory(&self) -> Option<&Path> {
        match self {
            StoreLocation::Sqlite(dir) | StoreLocation::Binary(dir) => Some(dir),
            StoreLocation::InMemory => None,
        }
    }

    /// Consume the location, returning its directory if it has one
    pub fn into_directory(self) -> Option<PathBuf> {
        match self {
            StoreLocation::Sqlite(dir) | StoreLocation::Binary(dir) => Some(dir),
            StoreLocation::InMemory => None,
        }
    }

    /// Whether the store lives on disk
    pub fn is_persistent(&self) -> bool {
        self.kind().is_persistent()
    }

    /// Parse a locator string into a StoreLocation
    ///
    /// Expected format: `<kind>:<directory>` or `memory`.
    /// The directory is kept exactly as written, surrounding whitespace included.
    pub fn parse(locator: &str) -> Result<Self> {
        let (scheme, rest) = match locator.split_once(':') {
            Some((scheme, rest)) => (scheme, Some(rest)),
            None => (locator, None),
        };

        let kind = StoreKind::from_str(scheme.trim())?;
        match (kind, rest) {
            (StoreKind::InMemory, None) => Ok(StoreLocation::InMemory),
            (StoreKind::InMemory, Some(rest)) if rest.is_empty() => Ok(StoreLocation::InMemory),
            (StoreKind::InMemory, Some(rest)) => Err(Error::InvalidLocator(format!(
                "in-memory store takes no directory, got {}",
                rest
            ))),
            (_, None) => Err(Error::InvalidLocator(format!(
                "{} store requires a directory ({}:<dir>)",
                kind, kind
            ))),
            (_, Some("")) => Err(Error::InvalidLocator(format!(
                "{} store directory is empty",
                kind
            ))),
            (StoreKind::Sqlite, Some(dir)) => Ok(StoreLocation::Sqlite(PathBuf::from(dir))),
            (StoreKind::Binary, Some(dir)) => Ok(StoreLocation::Binary(PathBuf::from(dir))),
        }
    }

    /// Convert to locator string for display.
    ///
    /// Lossy for non-UTF-8 directories; use [`Self::try_to_locator_string`]
    /// when the result has to parse back to the same location.
    pub fn to_locator_string(&self) -> String {
        match self.directory() {
            Some(dir) => format!("{}:{}", self.kind(), dir.display()),
            None => self.kind().to_string(),
        }
    }

    /// Convert to a locator string that [`Self::parse`] maps back to `self`.
    ///
    /// Fails for empty and non-UTF-8 directories, which have no such form.
    pub fn try_to_locator_string(&self) -> Result<String> {
        let Some(dir) = self.directory() else {
            return Ok(self.kind().to_string());
        };
        let dir = dir.to_str().ok_or_else(|| {
            Error::InvalidLocator(format!(
                "{} store directory is not valid UTF-8: {}",
                self.kind(),
                dir.display()
            ))
        })?;
        if dir.is_empty() {
            return Err(Error::InvalidLocator(format!(
                "{} store directory is empty",
                self.kind()
            )));
        }
        Ok(format!("{}:{}", self.kind(), dir))
    }
}

impl fmt::Display for StoreLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_locator_string())
    }
}

impl FromStr for StoreLocation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for StoreLocation {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let locator = self
            .try_to_locator_string()
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&locator)
    }
}

impl<'de> Deserialize<'de> for StoreLocation {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        StoreLocation::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_location() {
        let location = StoreLocation::sqlite("/data/store");
        assert_eq!(location.type_identifier(), "SQLite");
        assert_eq!(location.directory(), Some(Path::new("/data/store")));
        assert!(location.is_persistent());
    }

    #[test]
    fn test_binary_location() {
        let location = StoreLocation::binary("/data/store");
        assert_eq!(location.type_identifier(), "Binary");
        assert_eq!(location.kind(), StoreKind::Binary);
        assert_eq!(location.into_directory(), Some(PathBuf::from("/data/store")));
    }

    #[test]
    fn test_in_memory_location() {
        let location = StoreLocation::in_memory();
        assert_eq!(location.directory(), None);
        assert_eq!(location.type_identifier(), "InMemory");
        assert!(!location.is_persistent());
        assert_eq!(StoreLocation::default(), location);
    }

    #[test]
    fn test_equality() {
        assert_eq!(StoreLocation::sqlite("/a"), StoreLocation::sqlite("/a"));
        assert_ne!(StoreLocation::sqlite("/a"), StoreLocation::sqlite("/b"));
        assert_eq!(StoreLocation::binary("/a"), StoreLocation::binary("/a"));
        assert_ne!(StoreLocation::binary("/a"), StoreLocation::binary("/b"));
        assert_eq!(StoreLocation::InMemory, StoreLocation::InMemory);
    }

    #[test]
    fn test_cross_variant_never_equal() {
        assert_ne!(StoreLocation::sqlite("/a"), StoreLocation::binary("/a"));
        assert_ne!(StoreLocation::sqlite("/a"), StoreLocation::InMemory);
        assert_ne!(StoreLocation::binary("/a"), StoreLocation::InMemory);
    }

    #[test]
    fn test_locator_parse() {
        assert_eq!(
            StoreLocation::parse("sqlite:/data/store").unwrap(),
            StoreLocation::sqlite("/data/store")
        );
        assert_eq!(
            StoreLocation::parse("bin:./data").unwrap(),
            StoreLocation::binary("./data")
        );
        assert_eq!(StoreLocation::parse("memory").unwrap(), StoreLocation::InMemory);
        assert_eq!(StoreLocation::parse("in-memory:").unwrap(), StoreLocation::InMemory);
        // only the first colon separates the kind
        assert_eq!(
            StoreLocation::parse(r"sqlite:C:\data").unwrap(),
            StoreLocation::sqlite(r"C:\data")
        );
    }

    #[test]
    fn test_locator_roundtrip() {
        let location = StoreLocation::binary("/var/lib/app");
        let locator = location.to_locator_string();
        assert_eq!(locator, "binary:/var/lib/app");
        assert_eq!(locator.parse::<StoreLocation>().unwrap(), location);
        assert_eq!(StoreLocation::InMemory.to_string(), "memory");
    }

    #[test]
    fn test_locator_keeps_directory_whitespace() {
        let location = StoreLocation::sqlite("/data/store ");
        let locator = location.try_to_locator_string().unwrap();
        assert_eq!(locator, "sqlite:/data/store ");
        assert_eq!(StoreLocation::parse(&locator).unwrap(), location);
        assert_eq!(
            StoreLocation::parse(" binary: /data").unwrap(),
            StoreLocation::binary(" /data")
        );
        assert_eq!(StoreLocation::parse(" memory ").unwrap(), StoreLocation::InMemory);
    }

    #[test]
    fn test_locator_roundtrip_paths() {
        let dirs = [
            "/var/lib/app",
            r"C:\data\store",
            "/data/with:colon",
            "./dir with spaces",
            "/trailing space ",
            " leading",
        ];
        for dir in dirs {
            for location in [StoreLocation::sqlite(dir), StoreLocation::binary(dir)] {
                let locator = location.try_to_locator_string().unwrap();
                assert_eq!(locator, location.to_locator_string());
                assert_eq!(StoreLocation::parse(&locator).unwrap(), location);

                let json = serde_json::to_string(&location).unwrap();
                assert_eq!(serde_json::from_str::<StoreLocation>(&json).unwrap(), location);
            }
        }

        let json = serde_json::to_string(&StoreLocation::InMemory).unwrap();
        assert_eq!(serde_json::from_str::<StoreLocation>(&json).unwrap(), StoreLocation::InMemory);
    }

    #[test]
    fn test_empty_directory_not_serialized() {
        for location in [StoreLocation::sqlite(""), StoreLocation::binary("")] {
            assert!(matches!(location.try_to_locator_string(), Err(Error::InvalidLocator(_))));
            assert!(serde_json::to_string(&location).is_err());
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_directory_not_serialized() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let location = StoreLocation::sqlite(OsStr::from_bytes(b"/data/\xff"));
        assert!(matches!(location.try_to_locator_string(), Err(Error::InvalidLocator(_))));
        assert!(serde_json::to_string(&location).is_err());
    }

    #[test]
    fn test_invalid_locator() {
        assert!(matches!(StoreLocation::parse("sqlite"), Err(Error::InvalidLocator(_))));
        assert!(matches!(StoreLocation::parse("binary:"), Err(Error::InvalidLocator(_))));
        assert!(matches!(StoreLocation::parse("memory:/tmp"), Err(Error::InvalidLocator(_))));
        assert!(matches!(StoreLocation::parse("redis:/tmp"), Err(Error::UnknownKind(_))));
    }

    #[test]
    fn test_serde_as_locator_string() {
        let json = serde_json::to_string(&StoreLocation::sqlite("/data")).unwrap();
        assert_eq!(json, "\"sqlite:/data\"");
        let parsed: StoreLocation = serde_json::from_str("\"memory\"").unwrap();
        assert_eq!(parsed, StoreLocation::InMemory);
        assert!(serde_json::from_str::<StoreLocation>("\"sqlite:\"").is_err());
    }
}
