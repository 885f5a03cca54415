//! Visual theme and styling.

use console::Style;

/// Paramkit's visual theme.
#[derive(Debug, Clone)]
pub struct ToolkitTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
}

impl Default for ToolkitTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolkitTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            key: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("◆"),
            self.highlight.apply_to(title)
        )
    }

    /// Format a key-value line.
    pub fn format_kv(&self, key: &str, value: &str) -> String {
        format!("{} {}", self.key.apply_to(format!("{}:", key)), value)
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = ToolkitTheme::plain();
        let msg = theme.format_success("Toolkit initialised");
        assert!(msg.contains("✓"));
        assert!(msg.contains("Toolkit initialised"));
    }

    #[test]
    fn theme_formats_warning() {
        let theme = ToolkitTheme::plain();
        let msg = theme.format_warning("Caution");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Caution"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = ToolkitTheme::plain();
        let msg = theme.format_error("Failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Failed"));
    }

    #[test]
    fn theme_formats_header() {
        let theme = ToolkitTheme::plain();
        let msg = theme.format_header("Paramkit");
        assert!(msg.contains("◆"));
        assert!(msg.contains("Paramkit"));
    }

    #[test]
    fn theme_formats_key_value() {
        let theme = ToolkitTheme::plain();
        let msg = theme.format_kv("Toolkit root", "/toolkit");
        assert!(msg.contains("Toolkit root:"));
        assert!(msg.contains("/toolkit"));
    }

    #[test]
    fn default_impl_matches_new() {
        let default = ToolkitTheme::default();
        let new = ToolkitTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
