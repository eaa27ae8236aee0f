//! Main configuration structure and implementation

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use geekblog_ueditor::EditorHandle;

use super::{CommandConfig, EditorConfig, EventConfig, SitemapConfig};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Editor instance settings
    #[serde(default)]
    pub editor: EditorConfig,

    /// Toolbar commands, rendered in order
    #[serde(default)]
    pub commands: Vec<CommandConfig>,

    /// Event listeners, rendered in order after the commands
    #[serde(default)]
    pub events: Vec<EventConfig>,

    /// Sitemap feed settings
    #[serde(default)]
    pub sitemap: SitemapConfig,

    /// Directory of the file this configuration was loaded from
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Resolve a relative path against the configuration file's directory
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// The configured article data file, resolved like [`Config::resolve_path`]
    pub fn articles_path(&self) -> Option<PathBuf> {
        self.sitemap
            .articles
            .as_deref()
            .map(|path| self.resolve_path(path))
    }

    /// Save configuration to a YAML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.version != "1.0" {
            return Err(anyhow!(
                "Unsupported configuration version: {}",
                self.version
            ));
        }

        self.editor.validate()?;

        let mut names = HashSet::new();
        for command in &self.commands {
            command.validate()?;
            if !names.insert(command.ui_name()) {
                return Err(anyhow!("Duplicate command ui_name: {}", command.ui_name()));
            }
        }

        for event in &self.events {
            if event.event.trim().is_empty() {
                return Err(anyhow!("Event listener has an empty event name"));
            }
        }

        // Listeners reference the handle as a bare identifier
        if self.events.iter().any(|event| !event.script.is_empty()) {
            let handle = EditorHandle::new(self.editor.handle.as_str())?;
            if !handle.is_identifier() {
                return Err(anyhow!(
                    "Editor handle '{}' must be a JavaScript identifier when event listeners are configured",
                    handle
                ));
            }
        }

        self.sitemap.validate()?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            editor: EditorConfig::default(),
            commands: Vec::new(),
            events: Vec::new(),
            sitemap: SitemapConfig::default(),
            base_dir: None,
        }
    }
}
