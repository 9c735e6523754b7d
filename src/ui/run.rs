//! Batch run and log views
//!
//! `render_run` covers both the in-flight batch (gauge plus live log tail)
//! and the completion summary; `render_log_view` is the full-screen audit
//! log reader.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::header::{render_instructions, render_progress_bar, BannerRenderer};
use crate::app::{AppMode, AppState};
use crate::theme::{Colors, Theme};
use crate::types::LogLevel;

/// Render the running/complete screen
pub fn render_run(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Banner
            Constraint::Length(3), // Progress gauge
            Constraint::Min(8),    // Log tail
            Constraint::Length(2), // Status + hints
        ])
        .split(f.area());

    let banner = BannerRenderer::new();
    banner.render_banner(f, chunks[0]);

    let (completed, total) = state.progress.unwrap_or((0, 0));
    render_progress_bar(f, chunks[1], completed, total);

    render_log_tail(f, state, chunks[2]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(chunks[3]);

    let status =
        Paragraph::new(state.status_message.as_str()).style(Style::default().fg(Colors::FG_PRIMARY));
    f.render_widget(status, rows[0]);

    let hint = if state.mode == AppMode::Complete {
        "Enter: back to catalog   L: full log   Q: quit"
    } else {
        "Applying selected tweaks - please wait"
    };
    render_instructions(f, rows[1], hint);
}

/// The last log lines that fit the area, styled by level.
fn render_log_tail(f: &mut Frame, state: &AppState, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let start = state.log_lines.len().saturating_sub(visible);

    let lines: Vec<Line> = state.log_lines[start..]
        .iter()
        .map(|line| styled_log_line(line))
        .collect();

    let log = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Log "));
    f.render_widget(log, area);
}

/// Render the full-screen audit log view
pub fn render_log_view(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(f.area());

    let visible = chunks[0].height.saturating_sub(2) as usize;
    // Keep the scroll anchor inside the window so the cursor line stays visible
    let start = state
        .log_scroll
        .saturating_sub(visible.saturating_sub(1))
        .min(state.log_lines.len().saturating_sub(visible.min(state.log_lines.len())));

    let lines: Vec<Line> = state
        .log_lines
        .iter()
        .skip(start)
        .take(visible)
        .map(|line| styled_log_line(line))
        .collect();

    let log = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Audit Log - {} ", state.log_path)),
    );
    f.render_widget(log, chunks[0]);

    render_instructions(f, chunks[1], "Up/Down: scroll   PgUp/PgDn: page   Esc: back");
}

/// Color a formatted audit entry line by the level tag it carries.
fn styled_log_line(line: &str) -> Line<'_> {
    let level = [
        LogLevel::Error,
        LogLevel::CmdErr,
        LogLevel::CmdOut,
        LogLevel::Registry,
        LogLevel::Info,
    ]
    .into_iter()
    .find(|level| line.contains(&format!("[{}]", level)));

    match level {
        Some(level) => Line::styled(line, Theme::log_style(level)),
        None => Line::styled(line, Style::default().fg(Colors::FG_SECONDARY)),
    }
}
