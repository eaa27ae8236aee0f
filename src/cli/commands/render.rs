//! Render command implementation

use crate::cli::utils;
use crate::utils::{format_bytes, write_output};
use anyhow::{Context, Result};
use clap::{ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

pub fn command() -> Command {
    Command::new("render")
        .about("Render the editor extension script for the configured commands")
        .arg(utils::config_arg())
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Write the script to FILE instead of stdout")
                .value_name("FILE"),
        )
        .arg(
            clap::Arg::new("editor")
                .short('e')
                .long("editor")
                .help("Editor handle to render for (overrides the configuration)")
                .value_name("HANDLE"),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    info!("Rendering editor extension script");

    let config = utils::load_config(matches)?;
    let app = utils::create_app(config)?;

    let editor = matches.get_one::<String>("editor").map(String::as_str);
    let script = app
        .render_script(editor)
        .context("Failed to render editor extensions")?;

    let output = matches.get_one::<String>("output").map(PathBuf::from);
    write_output(output.as_deref(), &script).await?;

    if let Some(path) = output {
        println!(
            "Rendered {} commands to {:?} ({})",
            app.config().commands.len(),
            path,
            format_bytes(script.len() as u64)
        );
    }

    Ok(())
}
