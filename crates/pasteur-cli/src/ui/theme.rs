//! Badges and text styling.

use owo_colors::OwoColorize;

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
}

impl Badge {
    /// Get badge text (e.g., "[OK]")
    pub fn text(&self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Warn => "[WARN]",
            Self::Err => "[ERR]",
        }
    }

    /// Badge text, colored when `color` is set.
    pub fn styled(&self, color: bool) -> String {
        if !color {
            return self.text().to_string();
        }
        match self {
            Self::Ok => self.text().green().to_string(),
            Self::Warn => self.text().yellow().to_string(),
            Self::Err => self.text().red().to_string(),
        }
    }
}

/// Dim text for labels.
pub fn dim(text: &str, color: bool) -> String {
    if color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

/// Bold text for values worth noticing.
pub fn bold(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_text() {
        assert_eq!(Badge::Ok.text(), "[OK]");
        assert_eq!(Badge::Warn.text(), "[WARN]");
        assert_eq!(Badge::Err.text(), "[ERR]");
    }

    #[test]
    fn test_uncolored_styles_are_plain() {
        assert_eq!(Badge::Err.styled(false), "[ERR]");
        assert_eq!(dim("Link:", false), "Link:");
        assert_eq!(bold("value", false), "value");
    }

    #[test]
    fn test_colored_badge_wraps_text() {
        let styled = Badge::Ok.styled(true);
        assert!(styled.contains("[OK]"));
        assert_ne!(styled, "[OK]");
    }
}
