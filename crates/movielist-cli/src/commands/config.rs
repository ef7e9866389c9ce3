use super::Session;
use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use comfy_table::{Cell, Table};
use movielist_models::Locale;
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::PathBuf;

pub fn run_config(cmd: crate::ConfigCommands, session: Session, output: &Output) -> Result<()> {
    match cmd {
        crate::ConfigCommands::Show => show_config(&session, output),
        crate::ConfigCommands::Path => show_path(&session, output),
        crate::ConfigCommands::SetLocale { locale } => set_locale(session, locale, output),
        crate::ConfigCommands::SetDataFile { path } => set_data_file(session, path, output),
    }
}

fn show_config(session: &Session, output: &Output) -> Result<()> {
    let config_file = session.paths.config_file();

    match output.format() {
        OutputFormat::Human => {
            if !config_file.exists() {
                output.warn(format!("Configuration file not found at: {} (using defaults)", config_file.display()));
            }

            let mut table = Table::new();
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            table.set_header(vec![
                Cell::new("Setting").add_attribute(comfy_table::Attribute::Bold),
                Cell::new("Value").add_attribute(comfy_table::Attribute::Bold),
            ]);
            table.add_row(vec![Cell::new("Config File"), Cell::new(config_file.display())]);
            table.add_row(vec![Cell::new("Movie File"), Cell::new(session.movies_file.display())]);
            table.add_row(vec![Cell::new("Locale"), Cell::new(session.config.locale)]);

            output.info(format!("\n{}", "Configuration".bright_cyan().bold()));
            output.info(table.to_string());
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&config_summary(session));
        }
    }

    Ok(())
}

fn config_summary(session: &Session) -> serde_json::Value {
    let config_file = session.paths.config_file();
    json!({
        "config_file": config_file,
        "config_file_exists": config_file.exists(),
        "data_file": session.movies_file,
        "locale": session.config.locale,
    })
}

fn show_path(session: &Session, output: &Output) -> Result<()> {
    match output.format() {
        OutputFormat::Human => output.info(session.movies_file.display().to_string()),
        OutputFormat::Json | OutputFormat::JsonPretty => output.json(&json!({ "data_file": session.movies_file })),
    }
    Ok(())
}

fn set_locale(session: Session, locale: Locale, output: &Output) -> Result<()> {
    let Session { paths, mut config, .. } = session;
    config.locale = locale;
    save_config(&paths, &config)?;
    output.success(format!("Locale set to {}", locale));
    Ok(())
}

fn set_data_file(session: Session, path: PathBuf, output: &Output) -> Result<()> {
    let Session { paths, mut config, .. } = session;
    // Store absolute paths so the setting doesn't depend on the working directory
    let path = if path.is_relative() {
        std::env::current_dir()?.join(path)
    } else {
        path
    };
    config.data_file = Some(path.clone());
    config.validate().map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    save_config(&paths, &config)?;
    output.success(format!("Movie file set to {}", path.display()));
    Ok(())
}

fn save_config(paths: &movielist_config::PathManager, config: &movielist_config::Config) -> Result<()> {
    let config_file = paths.config_file();
    config
        .save_to_file(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save config to {}: {}", config_file.display(), e))
}
