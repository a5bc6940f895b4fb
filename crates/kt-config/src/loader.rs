//! JSON configuration store.
//!
//! The store is read once at startup.  It is only ever written on first run,
//! when no file exists yet, so the operator has a complete file to edit.

use std::io::{ErrorKind, Read};
use std::path::Path;

use tracing::{info, warn};

use crate::{ConfigError, ConfigResult, TemplarConfig};

/// Load and validate the configuration at `path`.
///
/// A missing file is reported as [`ConfigError::Unavailable`].
pub fn load(path: &Path) -> ConfigResult<TemplarConfig> {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::Unavailable(path.to_path_buf()));
        }
        Err(e) => return Err(ConfigError::Io(e)),
    };
    load_reader(file)
}

/// Like [`load`] but accepts any `Read` source.
///
/// A document consisting of `null` yields the default record.
pub fn load_reader<R: Read>(reader: R) -> ConfigResult<TemplarConfig> {
    let config: Option<TemplarConfig> = serde_json::from_reader(reader)?;
    let config = config.unwrap_or_default();
    config.validate()?;
    Ok(config)
}

/// Load `path`, or materialise and persist the defaults if it doesn't exist.
///
/// Any other failure (unreadable, malformed, invalid) is returned unchanged
/// and the file on disk is left alone.
pub fn load_or_init(path: &Path) -> ConfigResult<TemplarConfig> {
    match load(path) {
        Err(ConfigError::Unavailable(_)) => {
            warn!(path = %path.display(), "no configuration found, writing defaults");
            let config = TemplarConfig::default();
            save(path, &config)?;
            Ok(config)
        }
        Ok(config) => {
            info!(path = %path.display(), "configuration loaded");
            Ok(config)
        }
        Err(e) => Err(e),
    }
}

/// Write `config` to `path` as indented JSON, creating parent directories.
pub fn save(path: &Path, config: &TemplarConfig) -> ConfigResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;
    Ok(())
}
