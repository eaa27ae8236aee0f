//! Sitemap contract and the article sitemap

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::article::Article;
use crate::repo::{ArticleFilter, ArticleRepository, RepoResult};

/// How often crawlers should expect a page to change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the site is served from; locations are relative to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub protocol: String,
    pub domain: String,
}

impl Site {
    pub fn new(protocol: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            domain: domain.into(),
        }
    }

    pub fn url(&self, location: &str) -> String {
        format!(
            "{}://{}{}",
            self.protocol,
            self.domain.trim_end_matches('/'),
            location
        )
    }
}

/// One `<url>` of the feed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<ChangeFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<f32>,
}

/// A source of sitemap entries
pub trait Sitemap {
    type Item;

    fn items(&self) -> RepoResult<Vec<Self::Item>>;

    fn location(&self, item: &Self::Item) -> String;

    fn lastmod(&self, _item: &Self::Item) -> Option<DateTime<Utc>> {
        None
    }

    fn changefreq(&self, _item: &Self::Item) -> Option<ChangeFrequency> {
        None
    }

    fn priority(&self, _item: &Self::Item) -> Option<f32> {
        None
    }

    /// Absolute entries for every item
    fn entries(&self, site: &Site) -> RepoResult<Vec<SitemapEntry>> {
        let entries: Vec<SitemapEntry> = self
            .items()?
            .iter()
            .map(|item| SitemapEntry {
                location: site.url(&self.location(item)),
                lastmod: self.lastmod(item),
                changefreq: self.changefreq(item),
                priority: self.priority(item),
            })
            .collect();

        debug!(count = entries.len(), domain = %site.domain, "built sitemap entries");
        Ok(entries)
    }
}

/// Published, visible, synced articles
#[derive(Debug, Clone)]
pub struct ArticleSitemap<R> {
    repo: R,
}

impl<R: ArticleRepository> ArticleSitemap<R> {
    pub const CHANGEFREQ: ChangeFrequency = ChangeFrequency::Monthly;
    pub const PRIORITY: f32 = 0.5;

    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: ArticleRepository> Sitemap for ArticleSitemap<R> {
    type Item = Article;

    fn items(&self) -> RepoResult<Vec<Article>> {
        self.repo.filter(&ArticleFilter::publishable())
    }

    fn location(&self, article: &Article) -> String {
        format!("/article/{}/", article.slug)
    }

    fn lastmod(&self, article: &Article) -> Option<DateTime<Utc>> {
        Some(article.modified_time)
    }

    fn changefreq(&self, _article: &Article) -> Option<ChangeFrequency> {
        Some(Self::CHANGEFREQ)
    }

    fn priority(&self, _article: &Article) -> Option<f32> {
        Some(Self::PRIORITY)
    }
}
