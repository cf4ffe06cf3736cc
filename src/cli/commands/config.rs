use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::process::Command as Proc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(format!("serialization: {e}")))?;
            println!("{yaml}");
        }

        if *check {
            let missing = cfg.missing_fields();
            if missing.is_empty() {
                success("Configuration is complete.");
            } else {
                for field in &missing {
                    warning(format!("Missing field: {field}"));
                }
                return Err(AppError::Config(format!(
                    "{} field(s) missing",
                    missing.len()
                )));
            }
        }

        if *edit_config {
            edit(editor.as_deref())?;
        }
    }
    Ok(())
}

fn edit(editor: Option<&str>) -> AppResult<()> {
    let path = Config::config_file();
    if !path.exists() {
        return Err(AppError::Config(
            "no configuration file yet; run `tutorbill init` first".into(),
        ));
    }

    let chosen = editor
        .map(str::to_string)
        .or_else(|| std::env::var("EDITOR").ok())
        .unwrap_or_else(|| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    info(format!("Opening {} with {chosen}", path.display()));
    let status = Proc::new(&chosen).arg(&path).status()?;
    if !status.success() {
        return Err(AppError::Config(format!("editor '{chosen}' exited with an error")));
    }
    Ok(())
}
