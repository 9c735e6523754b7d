//! Centralized theme and styling for the TUI
//!
//! Single source of truth for all colors and styles used throughout the
//! application, keeping the views visually consistent.

#![allow(dead_code)]

use ratatui::style::{Color, Modifier, Style};

use crate::types::LogLevel;

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Primary dark background
    pub const BG_PRIMARY: Color = Color::Rgb(10, 10, 10);

    /// Panel background for sidebars and dialogs
    pub const BG_PANEL: Color = Color::Rgb(23, 23, 23);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Rgb(163, 163, 163);

    /// Primary accent - borders, titles, selection
    pub const ACCENT: Color = Color::Rgb(59, 130, 246);

    /// Success/applied indicator
    pub const SUCCESS: Color = Color::Rgb(16, 185, 129);

    /// Warning indicator
    pub const WARNING: Color = Color::Rgb(245, 158, 11);

    /// Failure/danger indicator
    pub const DANGER: Color = Color::Rgb(239, 68, 68);
}

/// Pre-built styles for common elements
pub struct Styles;

impl Styles {
    /// Panel/section title style
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the row under the cursor
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .bg(Colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Category heading rows in the catalog list
    pub fn category_heading() -> Style {
        Style::default()
            .fg(Colors::FG_SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Muted hint/instruction text
    pub fn hint() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }
}

/// Semantic styling helpers
pub struct Theme;

impl Theme {
    /// Style for an audit log line, by the level it carries.
    pub fn log_style(level: LogLevel) -> Style {
        match level {
            LogLevel::Info => Style::default().fg(Colors::FG_PRIMARY),
            LogLevel::CmdOut => Style::default().fg(Colors::FG_SECONDARY),
            LogLevel::Registry => Style::default().fg(Colors::SUCCESS),
            LogLevel::CmdErr | LogLevel::Error => Style::default().fg(Colors::DANGER),
        }
    }
}
