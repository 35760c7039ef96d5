use anyhow::{Result, bail};
use std::{fs, path::Path, process::Command};

pub fn resolve_editor(editor: &Option<String>) -> String {
    editor
        .as_deref()
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .unwrap_or_else(|| "vim".into())
}

/// Opens `initial` in the editor through a temporary file and returns what was saved.
pub fn edit_in_buffer(editor_cmd: &str, initial: &str) -> Result<String> {
    let file = tempfile::Builder::new()
        .prefix("sprout")
        .suffix(".txt")
        .tempfile()?;
    fs::write(file.path(), initial)?;

    open_file_in_editor(editor_cmd, file.path())?;
    Ok(fs::read_to_string(file.path())?)
}

fn open_file_in_editor(editor_cmd: &str, path: &Path) -> Result<()> {
    let status = Command::new(editor_cmd).arg(path).status()?;
    if !status.success() {
        bail!("Editor exited with status {}", status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_editor_wins() {
        assert_eq!(resolve_editor(&Some("nano".to_string())), "nano");
    }

    #[cfg(unix)]
    #[test]
    fn buffer_round_trips_through_editor() {
        // `true` leaves the file untouched
        let text = edit_in_buffer("true", "keep away from the radiator").unwrap();
        assert_eq!(text, "keep away from the radiator");
    }

    #[cfg(unix)]
    #[test]
    fn failing_editor_is_an_error() {
        assert!(edit_in_buffer("false", "").is_err());
    }
}
