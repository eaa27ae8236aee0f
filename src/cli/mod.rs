//! CLI command implementations

use anyhow::Result;
use clap::{ArgMatches, Command};

pub mod commands;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Create the CLI application
    pub fn app() -> Command {
        Command::new("geekblog-gen")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Render UEditor extension scripts and article sitemaps")
            .subcommand_negates_reqs(true)
            .subcommand(commands::init::command())
            .subcommand(commands::validate::command())
            .subcommand(commands::render::command())
            .subcommand(commands::sitemap::command())
    }

    /// Run the CLI application
    pub async fn run(matches: &ArgMatches) -> Result<()> {
        match matches.subcommand() {
            Some(("init", sub_matches)) => commands::init::run(sub_matches).await,
            Some(("validate", sub_matches)) => commands::validate::run(sub_matches).await,
            Some(("render", sub_matches)) => commands::render::run(sub_matches).await,
            Some(("sitemap", sub_matches)) => commands::sitemap::run(sub_matches).await,
            _ => {
                // No subcommand provided, show help
                let _ = Self::app().print_help();
                Ok(())
            }
        }
    }
}

/// Common CLI utilities
pub mod utils {
    use anyhow::{anyhow, Result};
    use std::path::PathBuf;

    /// Names looked up in the working directory when `--config` is absent
    pub const DEFAULT_CONFIG_PATHS: [&str; 4] = [
        ".geekblog-gen.yaml",
        ".geekblog-gen.yml",
        "geekblog-gen.yaml",
        "geekblog-gen.yml",
    ];

    /// `--config` argument shared by the subcommands
    pub fn config_arg() -> clap::Arg {
        clap::Arg::new("config")
            .short('c')
            .long("config")
            .help("Configuration file path")
            .value_name("FILE")
    }

    /// Get configuration file path from arguments or use default
    pub fn get_config_path(matches: &clap::ArgMatches) -> Result<PathBuf> {
        if let Some(config_path) = matches.get_one::<String>("config") {
            return Ok(PathBuf::from(config_path));
        }

        DEFAULT_CONFIG_PATHS
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
            .ok_or_else(|| anyhow!("No configuration file found. Use --config to specify a file or create one with 'geekblog-gen init'"))
    }

    /// Load configuration from file
    pub fn load_config(matches: &clap::ArgMatches) -> Result<crate::Config> {
        let config_path = get_config_path(matches)?;
        crate::Config::from_file(&config_path)
    }

    /// Create GeekblogGen instance
    pub fn create_app(config: crate::Config) -> Result<crate::GeekblogGen> {
        Ok(crate::GeekblogGen::new(config)?)
    }
}
