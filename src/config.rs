use crate::location::StoreLocation;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StoreConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<StoreLocation>,
}

impl StoreConfig {
    pub fn new(location: StoreLocation) -> Self {
        Self {
            location: Some(location),
        }
    }

    /// An explicit override wins over the configured location; with neither,
    /// the store is kept in memory.
    pub fn resolve_location(&self, override_location: Option<StoreLocation>) -> StoreLocation {
        let location = override_location
            .or_else(|| self.location.clone())
            .unwrap_or_default();
        tracing::debug!("Resolved store location: {}", location);
        location
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("storeloc.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<StoreConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        tracing::debug!("No config at {}", path.display());
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: StoreConfig = toml::from_str(&contents)
        .with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!(location = ?config.location, "Loaded config from {}", path.display());
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &StoreConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    // Encode first: a location with no locator form must not clobber the file.
    let contents = toml::to_string_pretty(config)
        .with_context(|| format!("encoding config for {}", path.display()))?;
    std::fs::write(path, contents)
        .with_context(|| format!("writing config {}", path.display()))?;
    tracing::debug!(location = ?config.location, "Wrote config to {}", path.display());
    Ok(())
}
