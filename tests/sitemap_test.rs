use chrono::{TimeZone, Utc};
use geekblog_gen::{Config, GeekblogGen, SitemapFormat};
use geekblog_sitemap::{
    Article, ArticleSitemap, ChangeFrequency, InMemoryArticleRepository, Sitemap, SyncStatus,
};
use tempfile::TempDir;

fn article(slug: &str, hidden: bool, published: bool, sync_status: SyncStatus) -> Article {
    Article {
        slug: slug.to_string(),
        title: Some(slug.to_uppercase()),
        hidden,
        published,
        sync_status,
        modified_time: Utc.with_ymd_and_hms(2024, 7, 1, 9, 30, 0).unwrap(),
    }
}

#[test]
fn test_only_synced_articles_are_listed() {
    let repo = InMemoryArticleRepository::new(vec![
        article("hello", false, true, SyncStatus::Synced),
        article("syncing", false, true, SyncStatus::Syncing),
        article("hidden", true, true, SyncStatus::Synced),
        article("draft", false, false, SyncStatus::Synced),
    ])
    .unwrap();
    let sitemap = ArticleSitemap::new(repo);

    let items = sitemap.items().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(sitemap.location(&items[0]), "/article/hello/");
    assert_eq!(
        sitemap.lastmod(&items[0]),
        Some(Utc.with_ymd_and_hms(2024, 7, 1, 9, 30, 0).unwrap())
    );
}

#[test]
fn test_constant_priority_and_changefreq() {
    let sitemap = ArticleSitemap::new(InMemoryArticleRepository::default());

    for item in [
        article("a", false, true, SyncStatus::Synced),
        article("b", true, false, SyncStatus::Failed),
    ] {
        assert_eq!(sitemap.priority(&item), Some(0.5));
        assert_eq!(sitemap.changefreq(&item), Some(ChangeFrequency::Monthly));
    }
}

#[test]
fn test_sitemap_from_article_file() {
    let temp_dir = TempDir::new().unwrap();
    let articles_path = temp_dir.path().join("articles.yaml");
    std::fs::write(
        &articles_path,
        r#"
- slug: hello
  published: true
  sync_status: synced
  modified_time: 2024-07-01T09:30:00Z
- slug: queued
  published: true
  sync_status: pending
  modified_time: 2024-07-02T09:30:00Z
"#,
    )
    .unwrap();

    let mut config = Config::default();
    config.sitemap.domain = "blog.example.com".to_string();
    config.sitemap.articles = Some(articles_path);

    let app = GeekblogGen::new(config).unwrap();
    let repo = app.load_articles(None).unwrap();
    let xml = app.render_sitemap(repo, SitemapFormat::Xml).unwrap();

    assert_eq!(xml.matches("<url>").count(), 1);
    assert!(xml.contains("<loc>https://blog.example.com/article/hello/</loc>"));
    assert!(xml.contains("<lastmod>2024-07-01</lastmod>"));
    assert!(xml.contains("<changefreq>monthly</changefreq>"));
    assert!(xml.contains("<priority>0.5</priority>"));
    assert!(!xml.contains("queued"));
}

#[test]
fn test_relative_article_file_resolves_against_config_dir() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join("data")).unwrap();
    std::fs::write(
        temp_dir.path().join("data/articles.yaml"),
        "- slug: hello\n  published: true\n  sync_status: synced\n  modified_time: 2024-07-01T09:30:00Z\n",
    )
    .unwrap();
    let config_path = temp_dir.path().join("geekblog-gen.yaml");
    std::fs::write(
        &config_path,
        "version: \"1.0\"\nsitemap:\n  domain: blog.example.com\n  articles: data/articles.yaml\n",
    )
    .unwrap();

    let app = GeekblogGen::new(Config::from_file(&config_path).unwrap()).unwrap();
    let repo = app.load_articles(None).unwrap();
    let json = app.render_sitemap(repo, SitemapFormat::Json).unwrap();

    assert!(json.contains("https://blog.example.com/article/hello/"));
}
