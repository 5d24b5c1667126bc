use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_columns() -> Vec<String> {
    vec![
        "To-Do".to_string(),
        "Doing".to_string(),
        "Done".to_string(),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path of the snapshot file. Defaults to the platform data directory.
    #[serde(default)]
    pub data_path: Option<PathBuf>,
    /// Fixed column names, in board order. Columns are static configuration;
    /// the board never creates or destroys them at runtime.
    #[serde(default = "default_columns")]
    pub columns: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            columns: default_columns(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/corkboard/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("corkboard/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("corkboard\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the config file, falling back to defaults when the file is
    /// missing or unparsable. Configuration problems never abort startup.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    match toml::from_str(&content) {
                        Ok(config) => return config,
                        Err(e) => {
                            tracing::warn!(
                                "Ignoring unparsable config at {}: {}",
                                config_path.display(),
                                e
                            );
                        }
                    }
                }
            }
        }
        Self::default()
    }

    pub fn effective_data_path(&self) -> PathBuf {
        if let Some(path) = &self.data_path {
            return path.clone();
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("corkboard/board.json")
    }
}
