//! Validate command implementation

use crate::cli::utils;
use anyhow::Result;
use clap::{ArgMatches, Command};
use tracing::info;

pub fn command() -> Command {
    Command::new("validate")
        .about("Validate configuration file")
        .arg(utils::config_arg())
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    info!("Validating configuration file");

    let config = utils::load_config(matches)?;

    println!("Configuration file is valid!");
    println!("Version: {}", config.version);
    println!("Editor: {}", config.editor.handle);
    println!("Media URL: {}", config.editor.media_url);
    println!("Commands: {}", config.commands.len());

    for command in &config.commands {
        println!("  - {} ({})", command.ui_name(), command.kind());
    }

    println!("Event listeners: {}", config.events.len());
    for event in &config.events {
        println!("  - {}", event.event);
    }

    println!(
        "Sitemap: {}://{}",
        config.sitemap.protocol, config.sitemap.domain
    );

    Ok(())
}
