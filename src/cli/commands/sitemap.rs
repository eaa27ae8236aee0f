//! Sitemap command implementation

use crate::cli::utils;
use crate::utils::write_output;
use crate::SitemapFormat;
use anyhow::{Context, Result};
use clap::{ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

pub fn command() -> Command {
    Command::new("sitemap")
        .about("Build the article sitemap feed")
        .arg(utils::config_arg())
        .arg(
            clap::Arg::new("articles")
                .short('a')
                .long("articles")
                .help("Article data file (overrides the configuration)")
                .value_name("FILE"),
        )
        .arg(
            clap::Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format")
                .value_parser(["json", "xml"])
                .default_value("xml"),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Write the sitemap to FILE instead of stdout")
                .value_name("FILE"),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    info!("Building article sitemap");

    let config = utils::load_config(matches)?;
    let app = utils::create_app(config)?;

    let articles = matches.get_one::<String>("articles").map(PathBuf::from);
    let repo = app
        .load_articles(articles.as_deref())
        .context("Failed to load articles")?;

    let format: SitemapFormat = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("xml")
        .parse()?;
    let sitemap = app.render_sitemap(repo, format)?;

    let output = matches.get_one::<String>("output").map(PathBuf::from);
    write_output(output.as_deref(), &sitemap).await?;

    if let Some(path) = output {
        println!("Sitemap written to {path:?}");
    }

    Ok(())
}
