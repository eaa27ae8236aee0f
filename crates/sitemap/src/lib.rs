//! Sitemap feed over published blog articles

pub mod article;
pub mod repo;
pub mod sitemap;
pub mod xml;

pub use article::{Article, SyncStatus};
pub use repo::{ArticleFilter, ArticleRepository, InMemoryArticleRepository, RepoError, RepoResult};
pub use sitemap::{ArticleSitemap, ChangeFrequency, Site, Sitemap, SitemapEntry};
pub use xml::render_urlset;
