//! Article repository contract and an in-memory implementation

use std::path::Path;

use tracing::debug;

use crate::article::{Article, SyncStatus};

pub type RepoResult<T> = Result<T, RepoError>;

/// Failure while loading or querying articles
#[derive(thiserror::Error, Debug)]
pub enum RepoError {
    #[error("failed to read article data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse article data: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse article data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate article slug: {0}")]
    DuplicateSlug(String),
}

/// Field filter for article queries; `None` matches anything
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleFilter {
    pub hidden: Option<bool>,
    pub published: Option<bool>,
    pub sync_status: Option<SyncStatus>,
}

impl ArticleFilter {
    /// Articles eligible for the public feed
    pub fn publishable() -> Self {
        Self {
            hidden: Some(false),
            published: Some(true),
            sync_status: Some(SyncStatus::Synced),
        }
    }

    pub fn matches(&self, article: &Article) -> bool {
        self.hidden.map_or(true, |hidden| article.hidden == hidden)
            && self
                .published
                .map_or(true, |published| article.published == published)
            && self
                .sync_status
                .map_or(true, |status| article.sync_status == status)
    }
}

/// Read access to stored articles
pub trait ArticleRepository {
    /// Articles matching `filter`, in storage order
    fn filter(&self, filter: &ArticleFilter) -> RepoResult<Vec<Article>>;
}

/// Articles held in memory, in insertion order
#[derive(Debug, Clone, Default)]
pub struct InMemoryArticleRepository {
    articles: Vec<Article>,
}

impl InMemoryArticleRepository {
    pub fn new(articles: Vec<Article>) -> RepoResult<Self> {
        let mut repo = Self::default();
        for article in articles {
            repo.insert(article)?;
        }
        Ok(repo)
    }

    /// Load a YAML or JSON list of articles; `.json` files are read as JSON
    pub fn from_file(path: &Path) -> RepoResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let articles: Vec<Article> = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };

        debug!(path = ?path, count = articles.len(), "loaded articles");
        Self::new(articles)
    }

    pub fn insert(&mut self, article: Article) -> RepoResult<()> {
        if self.articles.iter().any(|a| a.slug == article.slug) {
            return Err(RepoError::DuplicateSlug(article.slug));
        }
        self.articles.push(article);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

impl ArticleRepository for InMemoryArticleRepository {
    fn filter(&self, filter: &ArticleFilter) -> RepoResult<Vec<Article>> {
        Ok(self
            .articles
            .iter()
            .filter(|article| filter.matches(article))
            .cloned()
            .collect())
    }
}
