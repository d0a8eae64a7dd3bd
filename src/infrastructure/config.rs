use crate::domain::{
    config::ChromactlConfig,
    error::{ChromactlError, ChromactlResult},
};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration manager
///
/// Layers a per-user global file under a project-local file found by
/// walking up from the current directory.
pub struct ConfigManager {
    global_config_path: PathBuf,
    project_config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create new configuration manager
    pub fn new() -> ChromactlResult<Self> {
        let global_config_path = Self::get_global_config_path()?;
        let project_config_path = Self::find_project_config_path();

        Ok(Self {
            global_config_path,
            project_config_path,
        })
    }

    /// Load configuration from files
    ///
    /// Defaults apply first, then the global file, then the project file.
    pub fn load_config(&self) -> ChromactlResult<ChromactlConfig> {
        let mut config = ChromactlConfig::default();

        if self.global_config_path.exists() {
            config = self.load_config_from_path(&self.global_config_path)?;
        }

        if let Some(project_path) = &self.project_config_path {
            if project_path.exists() {
                config = self.load_config_from_path(project_path)?;
            }
        }

        Ok(config)
    }

    /// Get global configuration path
    fn get_global_config_path() -> ChromactlResult<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| ChromactlError::Config {
            message: "Could not determine home directory".to_string(),
        })?;

        Ok(home.join(".config").join("chromactl").join("config.toml"))
    }

    /// Find project configuration path by walking up directory tree
    fn find_project_config_path() -> Option<PathBuf> {
        let current_dir = std::env::current_dir().ok()?;
        let mut path = current_dir.as_path();

        loop {
            let config_path = path.join(".chromactl").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }

            path = path.parent()?;
        }
    }

    /// Load configuration from specific path
    pub fn load_config_from_path(&self, path: &Path) -> ChromactlResult<ChromactlConfig> {
        let content = fs::read_to_string(path).map_err(|e| ChromactlError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        toml::from_str(&content).map_err(|e| ChromactlError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })
    }

    /// Save configuration to specific path
    pub fn save_config_to_path(&self, path: &Path, config: &ChromactlConfig) -> ChromactlResult<()> {
        let content = toml::to_string_pretty(config).map_err(|e| ChromactlError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ChromactlError::Config {
                message: format!("Failed to create config directory: {}", e),
            })?;
        }

        fs::write(path, content).map_err(|e| ChromactlError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })
    }

    /// Create default project configuration under `path/.chromactl/`
    pub fn init_project_config(&self, path: &Path) -> ChromactlResult<()> {
        let config_file = path.join(".chromactl").join("config.toml");

        if config_file.exists() {
            return Err(ChromactlError::Config {
                message: "Project configuration already exists".to_string(),
            });
        }

        self.save_config_to_path(&config_file, &ChromactlConfig::default())
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
