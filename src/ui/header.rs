//! Banner and common widget rendering
//!
//! Contains the ASCII art banner, title rendering, and the batch progress
//! gauge shared by the run views.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::theme::{Colors, Styles};

/// Banner renderer containing the ASCII art header
pub struct BannerRenderer {
    banner_lines: Vec<Line<'static>>,
}

impl Default for BannerRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl BannerRenderer {
    /// Create a new banner renderer
    pub fn new() -> Self {
        Self {
            banner_lines: Self::create_banner(),
        }
    }

    /// Render the ASCII art banner
    pub fn render_banner(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let banner = Paragraph::new(self.banner_lines.clone())
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center);
        f.render_widget(banner, area);
    }

    /// Render a title section
    pub fn render_title(&self, f: &mut Frame, area: Rect, title: &str) {
        let title_widget = Paragraph::new(title)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(Styles::title());
        f.render_widget(title_widget, area);
    }

    /// Create the ASCII art banner
    fn create_banner() -> Vec<Line<'static>> {
        [
            " ████████ ██      ██ ████████  ████  ██  ██ ████████ ██    ██ ██",
            "    ██    ██      ██ ██       ██  ██ ██ ██     ██    ██    ██ ██",
            "    ██    ██  ██  ██ ██████   ██████ ████      ██    ██    ██ ██",
            "    ██    ██ ████ ██ ██       ██  ██ ██ ██     ██    ██    ██ ██",
            "    ██     ███  ███  ████████ ██  ██ ██  ██    ██     ██████  ██",
        ]
        .iter()
        .map(|line| Line::from(Span::styled(*line, Style::default().fg(Colors::ACCENT))))
        .collect()
    }
}

/// Render instruction text
pub fn render_instructions(f: &mut Frame, area: Rect, text: &str) {
    let instructions = Paragraph::new(text)
        .block(Block::default().borders(Borders::NONE))
        .alignment(Alignment::Center)
        .style(Styles::hint());
    f.render_widget(instructions, area);
}

/// Render the batch progress gauge
pub fn render_progress_bar(f: &mut Frame, area: Rect, completed: usize, total: usize) {
    let percent = if total == 0 {
        0
    } else {
        (completed * 100 / total) as u16
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Batch Progress ({}/{})", completed, total)),
        )
        .gauge_style(Style::default().fg(Colors::SUCCESS))
        .percent(percent.min(100));
    f.render_widget(gauge, area);
}
