//! Top-level UI layout — one panel at a time plus a status bar.

pub mod chart_panel;
pub mod help_panel;
pub mod overlays;
pub mod report_panel;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use valulens_core::report;
use valulens_core::report::Section;

use crate::app::{AppState, Overlay, Panel};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    draw_panel(f, main_area, app);
    status_bar::render(f, status_area, app);

    match &app.overlay {
        Overlay::Welcome => overlays::render_welcome(f, main_area),
        Overlay::TickerPrompt => overlays::render_prompt(f, main_area, &app.ticker_input),
        Overlay::None => {}
    }
}

/// Sections shown by one report panel, built fresh from the current result.
pub fn panel_sections(app: &AppState, panel: Panel) -> Option<Vec<Section>> {
    let result = app.result.as_ref()?;
    let sections = match panel {
        Panel::Snapshot => report::snapshot_sections(result),
        Panel::Financials => report::financial_sections(result),
        Panel::Metrics => report::metric_sections(result),
        Panel::Valuation => report::valuation_sections(result),
        Panel::History => report::history_sections(result),
        Panel::Notes => report::notes_sections(result),
        Panel::Chart | Panel::Help => Vec::new(),
    };
    Some(sections)
}

fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.active_panel;

    let mut title = format!(" {} [{}] ", panel.label(), panel.index() + 1);
    if let Some(ticker) = app.result.as_ref().and_then(|r| r.ticker.as_deref()) {
        title = format!(" {} | {} [{}] ", ticker, panel.label(), panel.index() + 1);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(title)
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Chart => chart_panel::render(f, inner, app),
        Panel::Help => help_panel::render(f, inner),
        _ => match panel_sections(app, panel) {
            Some(sections) => report_panel::render(f, inner, &sections, app.scroll),
            None => report_panel::render_empty(f, inner),
        },
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
