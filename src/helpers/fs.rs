//! File System Utilities
//!
//! Configuration and data directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("ar", "pyme", "pyme-dashboard").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/pyme-dashboard/` or `$XDG_CONFIG_HOME/pyme-dashboard/`
/// - **macOS**: `~/Library/Application Support/ar.pyme.pyme-dashboard/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\pyme\pyme-dashboard\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Get or create the data directory (log files)
///
/// - **Linux**: `~/.local/share/pyme-dashboard/`
/// - **macOS**: `~/Library/Application Support/ar.pyme.pyme-dashboard/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\pyme\pyme-dashboard\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let data_dir = project_dirs.data_dir();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directories_are_scoped_to_the_app() {
        let dirs = project_dirs().expect("home directory available");
        assert!(dirs.config_dir().to_string_lossy().contains("pyme-dashboard"));
        assert!(dirs.data_dir().to_string_lossy().contains("pyme-dashboard"));
    }
}
