//! Geekblog generator library
//!
//! Renders the UEditor extension script (toolbar commands and event
//! listeners) described by a configuration file, and builds the article
//! sitemap feed from article data.

pub mod cli;
pub mod config;
pub mod utils;

pub use config::{CommandConfig, Config, EditorConfig, EventConfig, SitemapConfig};
pub use geekblog_sitemap::{
    Article, ArticleSitemap, ChangeFrequency, InMemoryArticleRepository, Sitemap, SitemapEntry,
    SyncStatus,
};
pub use geekblog_ueditor::{
    ButtonCommand, ComboCommand, Command, DialogCommand, EditorHandle, EventHandler,
    ExtensionRegistry, RenderContext, RenderError,
};

use std::path::Path;
use tracing::{debug, info};

/// Main application context
pub struct GeekblogGen {
    config: Config,
}

impl GeekblogGen {
    /// Create a new instance from a validated configuration
    pub fn new(config: Config) -> GeekblogGenResult<Self> {
        config
            .validate()
            .map_err(|e| GeekblogGenError::Config(e.to_string()))?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The configured editor handle, or `handle` when given
    pub fn editor_handle(&self, handle: Option<&str>) -> GeekblogGenResult<EditorHandle> {
        let handle = handle.unwrap_or(self.config.editor.handle.as_str());
        Ok(EditorHandle::new(handle)?)
    }

    /// Registry holding every configured command and event listener
    pub fn build_registry(&self) -> GeekblogGenResult<ExtensionRegistry> {
        let mut registry = ExtensionRegistry::new();

        for command in &self.config.commands {
            debug!(ui_name = command.ui_name(), kind = command.kind(), "loading command");
            registry.register(command.clone().into_command())?;
        }
        registry.set_events(config::build_event_handler(&self.config.events));

        Ok(registry)
    }

    /// Render the full extension script
    pub fn render_script(&self, handle: Option<&str>) -> GeekblogGenResult<String> {
        let editor = self.editor_handle(handle)?;
        let ctx = self.config.editor.render_context();
        let registry = self.build_registry()?;

        info!(
            "Rendering {} commands for editor {}",
            registry.len(),
            editor
        );
        Ok(registry.render(&editor, &ctx)?)
    }

    /// Load articles from `path`, falling back to the configured data file
    ///
    /// A configured relative path is taken relative to the configuration
    /// file; `path` is used as given.
    pub fn load_articles(&self, path: Option<&Path>) -> GeekblogGenResult<InMemoryArticleRepository> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| self.config.articles_path())
            .ok_or_else(|| {
                GeekblogGenError::Config("No article data file configured".to_string())
            })?;

        info!("Loading articles from {:?}", path);
        Ok(InMemoryArticleRepository::from_file(&path)?)
    }

    /// Sitemap entries for the publishable articles in `repo`
    pub fn sitemap_entries(
        &self,
        repo: InMemoryArticleRepository,
    ) -> GeekblogGenResult<Vec<SitemapEntry>> {
        let sitemap = ArticleSitemap::new(repo);
        Ok(sitemap.entries(&self.config.sitemap.site())?)
    }

    /// Render the sitemap for `repo` in the requested format
    pub fn render_sitemap(
        &self,
        repo: InMemoryArticleRepository,
        format: SitemapFormat,
    ) -> GeekblogGenResult<String> {
        let entries = self.sitemap_entries(repo)?;
        info!("Rendering sitemap with {} entries", entries.len());

        match format {
            SitemapFormat::Json => Ok(serde_json::to_string_pretty(&entries)?),
            SitemapFormat::Xml => Ok(geekblog_sitemap::render_urlset(&entries)),
        }
    }
}

/// Output format of the sitemap feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SitemapFormat {
    Json,
    Xml,
}

impl std::str::FromStr for SitemapFormat {
    type Err = GeekblogGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(SitemapFormat::Json),
            "xml" => Ok(SitemapFormat::Xml),
            other => Err(GeekblogGenError::Config(format!(
                "Unknown sitemap format: {other}"
            ))),
        }
    }
}

/// Application error types
#[derive(thiserror::Error, Debug)]
pub enum GeekblogGenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render failed: {0}")]
    Render(#[from] RenderError),

    #[error("Registry error: {0}")]
    Registry(#[from] geekblog_ueditor::DuplicateCommand),

    #[error("Article repository error: {0}")]
    Repository(#[from] geekblog_sitemap::RepoError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for the main application
pub type GeekblogGenResult<T> = Result<T, GeekblogGenError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        serde_yaml::from_str(
            r#"
version: "1.0"
editor:
  handle: ue
  media_url: /media/
commands:
  - type: button
    ui_name: insertcode
    icon: code.png
events:
  - event: selectionchange
    script: "{editor}.sync();"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = Config::default();
        config.version = "0.1".to_string();
        assert!(matches!(
            GeekblogGen::new(config),
            Err(GeekblogGenError::Config(_))
        ));
    }

    #[test]
    fn test_render_script() {
        let app = GeekblogGen::new(config()).unwrap();
        let script = app.render_script(None).unwrap();

        assert!(script.contains("UE.registerUI(\"insertcode\""));
        assert!(script.contains("},0,\"ue\");"));
        assert!(script.contains("url('/media/code.png')"));
        assert!(script.contains("ue.addListener('selectionchange', function () {"));
        assert!(script.contains("ue.sync();"));
    }

    #[test]
    fn test_render_script_with_handle_override() {
        let app = GeekblogGen::new(config()).unwrap();
        let script = app.render_script(Some("other")).unwrap();
        assert!(script.contains("},0,\"other\");"));

        assert!(matches!(
            app.render_script(Some("not valid")),
            Err(GeekblogGenError::Render(RenderError::InvalidEditorHandle(_)))
        ));
    }

    #[test]
    fn test_render_sitemap_formats() {
        use chrono::TimeZone;

        let app = GeekblogGen::new(config()).unwrap();
        let articles = vec![Article {
            slug: "hello".to_string(),
            title: None,
            hidden: false,
            published: true,
            sync_status: SyncStatus::Synced,
            modified_time: chrono::Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        }];

        let repo = InMemoryArticleRepository::new(articles.clone()).unwrap();
        let json = app.render_sitemap(repo, SitemapFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["location"], "https://localhost/article/hello/");
        assert_eq!(parsed[0]["changefreq"], "monthly");
        assert_eq!(parsed[0]["priority"], 0.5);

        let repo = InMemoryArticleRepository::new(articles).unwrap();
        let xml = app.render_sitemap(repo, SitemapFormat::Xml).unwrap();
        assert!(xml.contains("<loc>https://localhost/article/hello/</loc>"));
    }

    #[test]
    fn test_sitemap_format_from_str() {
        assert_eq!("xml".parse::<SitemapFormat>().unwrap(), SitemapFormat::Xml);
        assert!("csv".parse::<SitemapFormat>().is_err());
    }

    #[test]
    fn test_load_articles_requires_a_path() {
        let app = GeekblogGen::new(config()).unwrap();
        assert!(matches!(
            app.load_articles(None),
            Err(GeekblogGenError::Config(_))
        ));
    }
}
