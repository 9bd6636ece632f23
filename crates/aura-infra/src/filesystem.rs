//! Data directory layout for Aura.

use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "AURA_DATA_DIR";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `AURA_DATA_DIR` environment variable
/// 2. `~/.aura`
/// 3. `./.aura`
pub fn resolve_data_dir() -> PathBuf {
    resolve_data_dir_from(std::env::var(DATA_DIR_ENV).ok())
}

fn resolve_data_dir_from(override_dir: Option<String>) -> PathBuf {
    if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".aura");
    }

    PathBuf::from(".aura")
}
