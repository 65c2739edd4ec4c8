use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        info("Current configuration:");
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Open the configuration file in an editor.
    ///
    /// Tries `editor` first, then `$EDITOR`/`$VISUAL`, then the platform default.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist, run `rplanner init` first",
                path.display()
            )));
        }

        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        if run_editor(&editor_to_use, path) {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
            return Ok(());
        }

        warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            editor_to_use, default_editor
        ));

        if run_editor(&default_editor, path) {
            success(format!(
                "Configuration file edited successfully using fallback '{}'",
                default_editor
            ));
            Ok(())
        } else {
            error(format!(
                "Failed to edit configuration file using fallback '{}'",
                default_editor
            ));
            Err(AppError::Config(format!("no usable editor for {}", path.display())))
        }
    }
}

fn run_editor(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}
