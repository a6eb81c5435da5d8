//! Bottom status bar — key hints plus the current status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " 1-8:panels Tab:cycle s:ticker j/k:scroll q:quit",
        theme::muted(),
    ));
    spans.push(Span::raw(" | "));

    let (msg, level) = &app.status_message;
    let style = match level {
        StatusLevel::Info => theme::accent(),
        StatusLevel::Warning => theme::warning(),
        StatusLevel::Error => theme::negative(),
    };
    spans.push(Span::styled(msg.as_str(), style));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
