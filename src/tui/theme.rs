//! TUI theming and colors.

use ratatui::style::{Color, Modifier, Style};

/// Picker theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Name of the theme.
    pub name: String,
    /// Default foreground color.
    pub foreground: Color,
    /// Primary accent color (team rows, titles).
    pub primary: Color,
    /// Border color (unfocused).
    pub border: Color,
    /// Border color (focused).
    pub border_focused: Color,
    /// Cursor row background.
    pub cursor_bg: Color,
    /// Cursor row foreground.
    pub cursor_fg: Color,
    /// Matched-span highlight color.
    pub highlight: Color,
    /// Secondary/muted text (placeholders, hints).
    pub muted: Color,
    /// Error text color.
    pub error: Color,
    /// Chosen-pair text color.
    pub selection: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create the default dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            foreground: Color::White,
            primary: Color::Cyan,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            cursor_bg: Color::DarkGray,
            cursor_fg: Color::White,
            highlight: Color::Yellow,
            muted: Color::DarkGray,
            error: Color::Red,
            selection: Color::Green,
        }
    }

    /// Create a light theme.
    #[must_use]
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            foreground: Color::Black,
            primary: Color::Blue,
            border: Color::Gray,
            border_focused: Color::Blue,
            cursor_bg: Color::Gray,
            cursor_fg: Color::Black,
            highlight: Color::Magenta,
            muted: Color::Gray,
            error: Color::Red,
            selection: Color::Green,
        }
    }

    /// Create a high-contrast theme.
    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast".to_string(),
            foreground: Color::White,
            primary: Color::Yellow,
            border: Color::White,
            border_focused: Color::Yellow,
            cursor_bg: Color::White,
            cursor_fg: Color::Black,
            highlight: Color::Yellow,
            muted: Color::Gray,
            error: Color::LightRed,
            selection: Color::LightGreen,
        }
    }

    /// Look up a theme by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "high-contrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }

    /// Style for the cursor row.
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default().bg(self.cursor_bg).fg(self.cursor_fg)
    }

    /// Style for matched search spans.
    #[must_use]
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }
}

/// Names of the available themes.
#[must_use]
pub fn available_themes() -> Vec<&'static str> {
    vec!["dark", "light", "high-contrast"]
}
