//! Input handling helpers for paste bodies, form fields and ciphertext.

use std::io::{self, IsTerminal, Read};

use dialoguer::Editor;

use crate::errors::CliError;

/// Read the paste body from --body, --file, stdin, or $EDITOR.
pub fn read_paste_body(
    body: Option<String>,
    file: Option<&str>,
    no_input: bool,
) -> anyhow::Result<String> {
    if let Some(value) = body {
        return Ok(value);
    }

    if let Some(path) = file {
        return read_file(path);
    }

    if !io::stdin().is_terminal() {
        let buffer = read_stdin()?;
        if buffer.is_empty() {
            return Err(CliError::invalid_input("No input provided on stdin").into());
        }
        return Ok(buffer);
    }

    if no_input {
        return Err(CliError::invalid_input_with_hint(
            "No paste body provided",
            "Use --body, --file, or pipe the paste on stdin.",
        )
        .into());
    }

    match Editor::new()
        .extension(".txt")
        .edit("")
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?
    {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(CliError::invalid_input("Paste body is empty; nothing submitted").into()),
    }
}

/// Read ciphertext from a path, with "-" meaning stdin.
pub fn read_ciphertext(path: &str) -> anyhow::Result<String> {
    let text = if path == "-" {
        read_stdin()?
    } else {
        read_file(path)?
    };
    Ok(text.trim().to_string())
}

/// Parse a `NAME=VALUE` form field argument.
pub fn parse_field(raw: &str) -> anyhow::Result<(String, String)> {
    let (name, value) = raw.split_once('=').ok_or_else(|| {
        CliError::invalid_input_with_hint(
            format!("Invalid field \"{}\"", raw),
            "Fields are written as NAME=VALUE, e.g. --field title=notes",
        )
    })?;
    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::invalid_input(format!("Field name is empty in \"{}\"", raw)).into());
    }
    Ok((name.to_string(), value.to_string()))
}

fn read_file(path: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            CliError::not_found(
                format!("File not found: {}", path),
                "Check the path and try again.",
            )
            .into()
        } else {
            anyhow::anyhow!("Failed to read {}: {}", path, e)
        }
    })
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("title=build log").unwrap(),
            ("title".to_string(), "build log".to_string())
        );
        assert_eq!(
            parse_field("expr=a=b").unwrap(),
            ("expr".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_field("empty=").unwrap(),
            ("empty".to_string(), String::new())
        );
    }

    #[test]
    fn test_parse_field_rejects_malformed() {
        assert!(parse_field("no-equals").is_err());
        assert!(parse_field("=value").is_err());
    }

    #[test]
    fn test_read_ciphertext_from_file_trims() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.json");
        std::fs::write(&path, "  {\"ct\":\"x\"}\n").unwrap();

        let text = read_ciphertext(path.to_str().unwrap()).unwrap();
        assert_eq!(text, "{\"ct\":\"x\"}");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = read_ciphertext("/definitely/not/here.json").unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
