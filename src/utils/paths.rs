//! Per-user directories for the config file and the log file.

use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "museum-heist.log";

fn project_dirs() -> io::Result<ProjectDirs> {
    ProjectDirs::from("", "", "museum-heist").ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })
}

/// Default config file location. The directory is not created.
pub fn default_config_path() -> io::Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE_NAME))
}

/// Log file location, creating its directory if needed.
pub fn log_file_path() -> io::Result<PathBuf> {
    let dirs = project_dirs()?;
    let dir = dirs.data_dir();
    fs::create_dir_all(dir)?;
    Ok(dir.join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_format() {
        if let Ok(path) = default_config_path() {
            assert!(path.ends_with(CONFIG_FILE_NAME));
            assert!(path.to_string_lossy().contains("museum-heist"));
        }
    }

    #[test]
    fn test_log_path_parent_exists() {
        if let Ok(path) = log_file_path() {
            assert!(path.ends_with(LOG_FILE_NAME));
            assert!(path.parent().is_some_and(|p| p.exists()));
        }
    }
}
