//! Help panel — keyboard reference and panel map.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled("Panels", theme::accent_bold())));
    for (key, name, what) in [
        ("1", "Snapshot", "price, market cap, SEC filing links, upside vs intrinsic"),
        ("2", "Financials", "FY income statement, balance sheet, cash flow, TTM"),
        ("3", "Metrics", "valuation, profitability, leverage, liquidity, FCF"),
        ("4", "Valuation", "WACC build, DCF summary, sensitivity grid"),
        ("5", "History", "five-year statement history"),
        ("6", "Notes", "assumptions, sources, investor conclusion"),
        ("7", "Chart", "daily closing-price line chart"),
        ("8", "Help", "this screen"),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key}  "), theme::accent()),
            Span::styled(format!("{name:<12}"), theme::neutral()),
            Span::styled(what, theme::muted()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Keys", theme::accent_bold())));
    for (key, what) in [
        ("s or /", "open the ticker prompt"),
        ("Enter", "submit the ticker (refused while a request is running)"),
        ("Esc", "cancel the prompt"),
        ("Tab / Shift-Tab", "next / previous panel"),
        ("j / k", "scroll down / up"),
        ("g", "jump to top"),
        ("q", "quit"),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<16}"), theme::accent()),
            Span::styled(what, theme::muted()),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}
