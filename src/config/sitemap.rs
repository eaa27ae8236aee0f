//! Sitemap feed configuration

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use geekblog_sitemap::Site;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitemapConfig {
    /// `http` or `https`
    #[serde(default = "default_protocol")]
    pub protocol: String,

    /// Host the articles are served from
    pub domain: String,

    /// Article data file (YAML or JSON)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub articles: Option<PathBuf>,
}

fn default_protocol() -> String {
    "https".to_string()
}

impl SitemapConfig {
    pub fn validate(&self) -> Result<()> {
        if self.protocol != "http" && self.protocol != "https" {
            return Err(anyhow!(
                "Unsupported sitemap protocol: {} (expected http or https)",
                self.protocol
            ));
        }

        if self.domain.trim().is_empty() {
            return Err(anyhow!("Sitemap domain cannot be empty"));
        }

        Ok(())
    }

    pub fn site(&self) -> Site {
        Site::new(self.protocol.as_str(), self.domain.as_str())
    }
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            protocol: default_protocol(),
            domain: "localhost".to_string(),
            articles: None,
        }
    }
}
