//! XDG Base Directory Support
//!
//! Resolves where context42 looks for its configuration file. Nothing
//! is persisted, so only the config location matters.

use std::env;
use std::path::PathBuf;

/// XDG directory structure for context42
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl XdgDirs {
    /// Resolve directories
    ///
    /// Priority order (highest to lowest):
    /// 1. CONTEXT42_CONFIG_DIR
    /// 2. XDG_CONFIG_HOME
    /// 3. ~/.config
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(dir) = env::var("CONTEXT42_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("context42");
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("context42")
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        // CONTEXT42_CONFIG_FILE wins over the directory
        if let Ok(file) = env::var("CONTEXT42_CONFIG_FILE") {
            return PathBuf::from(file);
        }

        self.config_dir.join("config.toml")
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
