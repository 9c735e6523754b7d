//! Catalog browsing view
//!
//! Renders the selectable tweak list on the left (catalog order, with a
//! category tag per row) and a detail sidebar on the right for the tweak
//! under the cursor.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::header::{render_instructions, BannerRenderer};
use crate::app::AppState;
use crate::catalog::{Catalog, Tweak};
use crate::theme::{Colors, Styles};
use crate::types::TweakKind;

/// Render the browse screen
pub fn render_browse(f: &mut Frame, state: &AppState, catalog: &Catalog) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Banner
            Constraint::Min(10),   // Content
            Constraint::Length(2), // Status + hints
        ])
        .split(f.area());

    let banner = BannerRenderer::new();
    banner.render_banner(f, chunks[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(chunks[1]);

    render_tweak_list(f, state, catalog, content[0]);
    render_sidebar(f, state, catalog, content[1]);

    render_status(f, state, chunks[2]);
}

fn render_tweak_list(f: &mut Frame, state: &AppState, catalog: &Catalog, area: Rect) {
    let items: Vec<ListItem> = catalog
        .all()
        .iter()
        .map(|tweak| ListItem::new(tweak_row(state, tweak, area.width)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Tweaks ({} selected) ", state.selected.len())),
        )
        .highlight_style(Styles::selected())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}

/// One catalog row: selection marker, name, right-padded category tag.
fn tweak_row<'a>(state: &AppState, tweak: &'a Tweak, width: u16) -> Line<'a> {
    let marker = if state.selected.contains(&tweak.id) {
        Span::styled("[x] ", Style::default().fg(Colors::SUCCESS))
    } else {
        Span::styled("[ ] ", Style::default().fg(Colors::FG_SECONDARY))
    };

    let tag = tweak.category.heading();
    // 4 marker + name + gap + tag + borders/highlight margin
    let pad = (width as usize)
        .saturating_sub(4 + tweak.name.len() + tag.len() + 5)
        .max(1);

    Line::from(vec![
        marker,
        Span::raw(tweak.name),
        Span::raw(" ".repeat(pad)),
        Span::styled(tag, Styles::category_heading()),
    ])
}

fn render_sidebar(f: &mut Frame, state: &AppState, catalog: &Catalog, area: Rect) {
    let Some(tweak) = catalog.all().get(state.cursor) else {
        return;
    };

    let presets = if tweak.presets.is_empty() {
        "none".to_string()
    } else {
        tweak
            .presets
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let kind = match tweak.kind {
        TweakKind::Toggle => "toggle (safe to re-apply)",
        TweakKind::OneShot => "one-shot action",
    };

    let lines = vec![
        Line::from(Span::styled(tweak.name, Styles::title())),
        Line::default(),
        Line::from(tweak.description),
        Line::default(),
        Line::from(vec![
            Span::styled("Category: ", Styles::hint()),
            Span::raw(tweak.category.heading()),
        ]),
        Line::from(vec![Span::styled("Kind: ", Styles::hint()), Span::raw(kind)]),
        Line::from(vec![
            Span::styled("Presets: ", Styles::hint()),
            Span::raw(presets),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("Technical: ", Styles::hint()),
            Span::styled(tweak.technical, Style::default().fg(Colors::ACCENT)),
        ]),
    ];

    let detail = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Details "))
        .wrap(Wrap { trim: true });
    f.render_widget(detail, area);
}

fn render_status(f: &mut Frame, state: &AppState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let status = Paragraph::new(state.status_message.as_str())
        .style(Style::default().fg(Colors::FG_PRIMARY));
    f.render_widget(status, rows[0]);

    render_instructions(
        f,
        rows[1],
        "Space: toggle   S: standard   M: minimal   C: clear   A: apply   L: log   Q: quit",
    );
}
