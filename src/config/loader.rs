// src/config/loader.rs

use std::path::{Path, PathBuf};

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};

/// Parse TOML text into a `RawConfigFile` without semantic validation.
pub fn parse_str(contents: &str) -> Result<RawConfigFile> {
    let config: RawConfigFile = toml::from_str(contents)?;
    Ok(config)
}

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization. Use [`load_and_validate`] for
/// the checked form.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    parse_str(&contents)
}

/// Load a configuration file from path and run validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks tracking scalars, the plan definition and column names.
/// - Resolves relative file paths against the config's directory.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    load_with_fs(&RealFileSystem, path.as_ref())
}

/// Same as [`load_and_validate`], reading through `fs`.
pub fn load_with_fs(fs: &dyn FileSystem, path: &Path) -> Result<ConfigFile> {
    let contents = fs.read_to_string(path)?;
    let raw = parse_str(&contents)?;
    let mut config = ConfigFile::try_from(raw)?;
    config.resolve_paths(&config_root_dir(path));
    Ok(config)
}

/// Directory that relative paths in the config are resolved against.
///
/// A bare filename like `Pacetrack.toml` (empty parent) resolves against the
/// current directory, kept relative as `.`.
pub fn config_root_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Default config path: `Pacetrack.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Pacetrack.toml")
}
