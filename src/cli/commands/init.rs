//! Init command implementation

use crate::config::{CommandConfig, EventConfig};
use crate::Config;
use anyhow::Result;
use clap::{ArgMatches, Command};
use geekblog_ueditor::{ButtonCommand, ComboCommand, CommandOptions, CommandScripts};
use std::path::PathBuf;
use tracing::info;

pub fn command() -> Command {
    Command::new("init")
        .about("Initialize a new configuration file")
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file path")
                .value_name("FILE")
                .default_value("geekblog-gen.yaml"),
        )
        .arg(
            clap::Arg::new("example")
                .short('e')
                .long("example")
                .help("Create example configuration")
                .action(clap::ArgAction::SetTrue),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let output_path = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("geekblog-gen.yaml"));
    let example = matches.get_flag("example");

    info!("Initializing configuration file: {:?}", output_path);

    let config = if example {
        create_example_config()
    } else {
        Config::default()
    };

    config.save_to_file(&output_path)?;

    info!("Configuration file created: {:?}", output_path);

    if example {
        println!("Example configuration created with sample toolbar commands.");
        println!("Edit the file to customize your commands and settings.");
    } else {
        println!("Empty configuration file created.");
        println!("Add commands and settings to get started.");
    }

    Ok(())
}

pub(crate) fn create_example_config() -> Config {
    let mut config = Config::default();

    // Button that posts to the server and inserts the response
    config.commands.push(CommandConfig::Button(ButtonCommand::new(
        CommandOptions::new("insertcode")
            .with_title("Insert code")
            .with_ajax_url("/api/ueditor/code/")
            .with_scripts(CommandScripts {
                ajax_success: "editor.execCommand('inserthtml', xhr.responseText);".to_string(),
                ajax_error: "alert('Failed to insert code');".to_string(),
                ..CommandScripts::default()
            }),
        "ueditor/icons/code.png",
    )));

    // Combo that picks a highlight language
    config.commands.push(CommandConfig::Combo(
        ComboCommand::new(
            CommandOptions::new("language").with_title("Language").with_index(1),
            vec![
                serde_json::json!({"label": "Rust", "value": "rust"}),
                serde_json::json!({"label": "Python", "value": "python"}),
            ],
            "Language",
        )
        .with_on_select("editor.execCommand('language', t.items[index].value);"),
    ));

    config.events.push(EventConfig {
        event: "contentchange".to_string(),
        script: "localStorage.setItem('draft', {editor}.getContent());".to_string(),
    });

    config.sitemap.domain = "blog.example.com".to_string();
    config.sitemap.articles = Some(PathBuf::from("articles.yaml"));

    config
}
