//! Confirmation dialog rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::theme::{Colors, Styles};

/// Render the apply-confirmation dialog over the browse view
pub fn render_confirm(f: &mut Frame, state: &AppState) {
    let area = centered_rect(52, 9, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Confirm ")
        .style(Style::default().bg(Colors::BG_PANEL));
    f.render_widget(block, area);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(area);

    let question = Paragraph::new(format!(
        "Apply {} selected tweaks to this system?",
        state.selected.len()
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Colors::FG_PRIMARY));
    f.render_widget(question, inner[0]);

    let note = Paragraph::new("A restore point is created first.")
        .alignment(Alignment::Center)
        .style(Styles::hint());
    f.render_widget(note, inner[1]);

    let cancel_style = if state.confirm_selection == 0 {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .bg(Colors::DANGER)
            .add_modifier(Modifier::BOLD)
    } else {
        Styles::hint()
    };
    let apply_style = if state.confirm_selection == 1 {
        Style::default()
            .fg(Colors::BG_PRIMARY)
            .bg(Colors::SUCCESS)
            .add_modifier(Modifier::BOLD)
    } else {
        Styles::hint()
    };

    let buttons = Paragraph::new(Line::from(vec![
        Span::styled("  Cancel  ", cancel_style),
        Span::raw("      "),
        Span::styled("  Apply  ", apply_style),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(buttons, inner[2]);
}

/// Center a fixed-size rect within `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
