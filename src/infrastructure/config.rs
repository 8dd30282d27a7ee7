use crate::domain::{config::IntrospectConfig, error::{IntrospectError, IntrospectResult}};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "introspect-cli";
const PROJECT_DIR: &str = ".introspect-cli";
const CONFIG_FILE: &str = "config.toml";

/// Configuration manager
pub struct ConfigManager {
    global_config_path: PathBuf,
    project_config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create new configuration manager
    pub fn new() -> IntrospectResult<Self> {
        let global_config_path = Self::get_global_config_path()?;
        let project_config_path = Self::find_project_config_path();

        Ok(Self {
            global_config_path,
            project_config_path,
        })
    }

    /// Configuration manager rooted at explicit paths
    pub fn with_paths(global_config_path: PathBuf, project_config_path: Option<PathBuf>) -> Self {
        Self {
            global_config_path,
            project_config_path,
        }
    }

    /// Load configuration from files
    pub fn load_config(&self) -> IntrospectResult<IntrospectConfig> {
        // Start with default configuration
        let mut config = IntrospectConfig::default();

        if self.global_config_path.exists() {
            config = self.load_config_from_path(&self.global_config_path)?;
        }

        // Project sections override global ones
        if let Some(project_path) = &self.project_config_path {
            if project_path.exists() {
                let content = self.read(project_path)?;
                let table: toml::Table = toml::from_str(&content).map_err(|e| IntrospectError::Config {
                    message: format!("Failed to parse config file {}: {}", project_path.display(), e),
                })?;
                let project = self.parse(project_path, &content)?;
                if table.contains_key("global") {
                    config.global = project.global;
                }
                if table.contains_key("ports") {
                    config.ports = project.ports;
                }
            }
        }

        Ok(config)
    }

    /// Get global configuration path
    fn get_global_config_path() -> IntrospectResult<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| IntrospectError::Config {
            message: "Could not determine home directory".to_string(),
        })?;

        Ok(home.join(".config").join(APP_DIR).join(CONFIG_FILE))
    }

    /// Find project configuration path by walking up directory tree
    fn find_project_config_path() -> Option<PathBuf> {
        let current_dir = std::env::current_dir().ok()?;
        let mut path = current_dir.as_path();

        loop {
            let config_path = path.join(PROJECT_DIR).join(CONFIG_FILE);
            if config_path.exists() {
                return Some(config_path);
            }

            path = path.parent()?;
        }
    }

    fn read(&self, path: &Path) -> IntrospectResult<String> {
        fs::read_to_string(path).map_err(|e| IntrospectError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })
    }

    fn parse(&self, path: &Path, content: &str) -> IntrospectResult<IntrospectConfig> {
        toml::from_str(content).map_err(|e| IntrospectError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })
    }

    /// Load configuration from specific path
    pub fn load_config_from_path(&self, path: &Path) -> IntrospectResult<IntrospectConfig> {
        let content = self.read(path)?;
        self.parse(path, &content)
    }

    /// Save configuration to specific path
    pub fn save_config_to_path(&self, path: &Path, config: &IntrospectConfig) -> IntrospectResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| IntrospectError::Config {
                message: format!("Failed to create config directory: {}", e),
            })?;
        }

        let content = toml::to_string_pretty(config).map_err(|e| IntrospectError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(path, content).map_err(|e| IntrospectError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })
    }

    /// Create default project configuration under `path`
    pub fn init_project_config(&self, path: &Path) -> IntrospectResult<PathBuf> {
        let config_file = path.join(PROJECT_DIR).join(CONFIG_FILE);

        if config_file.exists() {
            return Err(IntrospectError::Config {
                message: "Project configuration already exists".to_string(),
            });
        }

        self.save_config_to_path(&config_file, &IntrospectConfig::default())?;
        Ok(config_file)
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
