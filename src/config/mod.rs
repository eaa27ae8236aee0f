//! Configuration management for geekblog-gen

pub mod config;
pub mod editor;
pub mod sitemap;


// Re-export main types for convenience
pub use config::Config;
pub use editor::{build_event_handler, CommandConfig, EditorConfig, EventConfig};
pub use sitemap::SitemapConfig;
