//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use super::context::UiContext;
use super::theme::{dim, Badge};

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let styled = kind.styled(ctx.color);
    if message.is_empty() {
        styled
    } else {
        format!("{} {}", styled, message)
    }
}

/// Render a key-value line.
///
/// Pretty mode: "Key: value" with dimmed key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", dim(&format!("{}:", key), ctx.color), value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", dim("Hint:", ctx.color), text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a two-column table of parameters.
///
/// Pretty mode: bordered table
/// Plain mode: key=value lines
pub fn kv_table(ctx: &UiContext, rows: &[(&str, String)]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Parameter", "Value"]);
        for (key, value) in rows {
            table.add_row(vec![key.to_string(), value.clone()]);
        }
        table.to_string()
    } else {
        rows.iter()
            .map(|(key, value)| kv(ctx, key, value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

/// Print a warning to stderr unless quiet.
pub fn print_warning(ctx: &UiContext, message: &str) {
    if !ctx.quiet {
        eprintln!("{}", badge(ctx, Badge::Warn, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mode::OutputMode;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            animate: false,
            quiet: false,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            mode: OutputMode::Pretty,
            ..plain_ctx()
        }
    }

    #[test]
    fn test_kv_plain_and_pretty() {
        assert_eq!(kv(&plain_ctx(), "Key Size", "256"), "key_size=256");
        assert_eq!(kv(&pretty_ctx(), "Key Size", "256"), "Key Size: 256");
    }

    #[test]
    fn test_error_message_plain() {
        let msg = error_message(&plain_ctx(), "boom", Some("try again"));
        assert_eq!(msg, "error=boom\nhint=try again");
    }

    #[test]
    fn test_error_message_pretty() {
        let msg = error_message(&pretty_ctx(), "boom", None);
        assert_eq!(msg, "[ERR] boom");
    }

    #[test]
    fn test_kv_table_plain() {
        let rows = [("Mode", "gcm".to_string()), ("Version", "1".to_string())];
        assert_eq!(kv_table(&plain_ctx(), &rows), "mode=gcm\nversion=1");
    }

    #[test]
    fn test_kv_table_pretty_has_header() {
        let rows = [("Mode", "gcm".to_string())];
        let table = kv_table(&pretty_ctx(), &rows);
        assert!(table.contains("Parameter"));
        assert!(table.contains("gcm"));
    }
}
