use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path) -> AppResult<()> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        println!("{}", content);
        Ok(())
    }

    /// Open the config file in `editor`, `$EDITOR`/`$VISUAL`, or the
    /// platform default, falling back to the default if the first one fails.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        if matches!(Command::new(&editor_to_use).arg(path).status(), Ok(s) if s.success()) {
            success(format!("Configuration edited with '{}'", editor_to_use));
            return Ok(());
        }

        warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            editor_to_use, default_editor
        ));

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration edited with '{}'", default_editor));
                Ok(())
            }
            _ => Err(AppError::Config(format!(
                "failed to edit configuration with '{}'",
                default_editor
            ))),
        }
    }
}
