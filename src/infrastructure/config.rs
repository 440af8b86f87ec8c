use crate::domain::{
    config::SerTermConfig,
    error::{SerTermError, SerTermResult},
};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration manager.
///
/// Settings come from two TOML files: a global one under the user's config
/// directory and an optional per-project one found by walking up from the
/// working directory. Project port settings override the global ones.
pub struct ConfigManager {
    global_config_path: PathBuf,
    project_config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create new configuration manager
    pub fn new() -> SerTermResult<Self> {
        let global_config_path = Self::get_global_config_path()?;
        let project_config_path = Self::find_project_config_path();

        Ok(Self {
            global_config_path,
            project_config_path,
        })
    }

    /// Load configuration from files
    pub fn load_config(&self) -> SerTermResult<SerTermConfig> {
        let mut config = SerTermConfig::default();

        if self.global_config_path.exists() {
            config = self.load_config_from_path(&self.global_config_path)?;
        }

        if let Some(project_path) = &self.project_config_path {
            if project_path.exists() {
                let project_config = self.load_config_from_path(project_path)?;
                config.port = project_config.port;
            }
        }

        Ok(config)
    }

    /// Get global configuration path
    fn get_global_config_path() -> SerTermResult<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| SerTermError::Config {
            message: "Could not determine home directory".to_string(),
        })?;

        Ok(home.join(".config").join("serterm").join("config.toml"))
    }

    /// Find project configuration path by walking up the directory tree
    fn find_project_config_path() -> Option<PathBuf> {
        let current_dir = std::env::current_dir().ok()?;
        let mut path = current_dir.as_path();

        loop {
            let config_path = path.join(".serterm").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }

            path = path.parent()?;
        }
    }

    /// Load configuration from a specific path
    pub fn load_config_from_path(&self, path: &Path) -> SerTermResult<SerTermConfig> {
        let content = fs::read_to_string(path).map_err(|e| SerTermError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        toml::from_str(&content).map_err(|e| SerTermError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })
    }

    /// Save configuration to a specific path
    pub fn save_config_to_path(&self, path: &Path, config: &SerTermConfig) -> SerTermResult<()> {
        let content = toml::to_string_pretty(config).map_err(|e| SerTermError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SerTermError::Config {
                message: format!("Failed to create config directory: {}", e),
            })?;
        }

        fs::write(path, content).map_err(|e| SerTermError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })
    }

    /// Write a default configuration file at the global path
    pub fn init_global_config(&self) -> SerTermResult<PathBuf> {
        if self.global_config_path.exists() {
            return Err(SerTermError::Config {
                message: format!(
                    "Configuration already exists at {}",
                    self.global_config_path.display()
                ),
            });
        }

        self.save_config_to_path(&self.global_config_path, &SerTermConfig::default())?;
        Ok(self.global_config_path.clone())
    }

    /// Get the current project config path (if any)
    pub fn get_project_config_path(&self) -> Option<&PathBuf> {
        self.project_config_path.as_ref()
    }

    /// Get the global config path
    pub fn get_global_config_path_ref(&self) -> &PathBuf {
        &self.global_config_path
    }
}
