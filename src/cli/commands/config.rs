use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::break_window::BreakSchedule;
use crate::ui::messages::{error, info, success, warning};

use crate::cli::parser::Commands;
use std::fs;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            info("Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            check_config(cfg, &path)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(&path, editor.as_deref());
        }
    }

    Ok(())
}

fn check_config(cfg: &Config, path: &std::path::Path) -> AppResult<()> {
    if path.exists() {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let missing = Config::missing_keys(&content)?;
        if missing.is_empty() {
            success("All configuration keys are present.");
        } else {
            warning(format!(
                "Missing keys (defaults in use): {}",
                missing.join(", ")
            ));
        }
    } else {
        warning(format!(
            "No configuration file at {}; defaults in use.",
            path.display()
        ));
    }

    let schedule = BreakSchedule::from_config(cfg)?;
    success(format!("Break windows: {} | {}", schedule.lunch, schedule.dinner));
    Ok(())
}

fn edit(path: &std::path::Path, requested: Option<&str>) {
    // Platform default editor
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.map(str::to_string).unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
        }
        Ok(_) | Err(_) => {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            ));

            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using fallback '{}'",
                        default_editor
                    ));
                }
                Ok(_) | Err(_) => {
                    error(format!(
                        "Failed to edit configuration file using fallback '{}'",
                        default_editor
                    ));
                }
            }
        }
    }
}
