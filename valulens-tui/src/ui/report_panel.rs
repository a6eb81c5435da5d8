//! Report panel — renders a slice of the display document as text lines.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use valulens_core::report::{Cell, Section};

use crate::theme;

const LABEL_WIDTH: usize = 34;

pub fn render(f: &mut Frame, area: Rect, sections: &[Section], scroll: u16) {
    let mut lines: Vec<Line> = Vec::new();
    for section in sections {
        push_section(&mut lines, section);
    }

    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(para, area);
}

pub fn render_empty(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No analysis yet. Press s, enter a ticker, and hit Enter.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn push_section(lines: &mut Vec<Line>, section: &Section) {
    lines.push(Line::from(Span::styled(
        section.title().to_string(),
        theme::accent_bold(),
    )));

    match section {
        Section::KeyValue { rows, .. } => {
            for (label, cell) in rows {
                lines.push(key_value_line(label, cell));
            }
        }
        Section::Grid { columns, rows, .. } => {
            push_grid(lines, columns, rows);
        }
        Section::List { items, .. } => {
            for (i, item) in items.iter().enumerate() {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {}. ", i + 1), theme::muted()),
                    Span::styled(item.clone(), theme::neutral()),
                ]));
            }
        }
        Section::Placeholder { message, .. } => {
            lines.push(Line::from(Span::styled(
                format!("  {message}"),
                theme::muted(),
            )));
        }
        Section::Paragraph { text, .. } => {
            lines.push(Line::from(Span::styled(text.clone(), theme::neutral())));
        }
    }

    lines.push(Line::from(""));
}

fn key_value_line(label: &str, cell: &Cell) -> Line<'static> {
    let width = LABEL_WIDTH;
    let mut spans = vec![Span::styled(
        format!("  {label:<width$}"),
        theme::muted(),
    )];
    match cell {
        Cell::Text(text) => {
            let style = if text.starts_with('-') {
                theme::negative()
            } else {
                theme::accent()
            };
            spans.push(Span::styled(text.clone(), style));
        }
        Cell::Link { label, href } => {
            spans.push(Span::styled(label.clone(), theme::link()));
            spans.push(Span::styled(format!("  {href}"), theme::muted()));
        }
    }
    Line::from(spans)
}

fn push_grid(lines: &mut Vec<Line>, columns: &[String], rows: &[Vec<String>]) {
    // Width per column: widest of header and cells, capped to keep long
    // labels from swallowing the panel.
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(String::len)
                .chain(std::iter::once(col.len()))
                .max()
                .unwrap_or(0)
                .min(18)
        })
        .collect();

    let header: String = columns
        .iter()
        .zip(&widths)
        .map(|(col, &w)| format!("{:>w$}  ", truncate(col, w)))
        .collect();
    lines.push(Line::from(Span::styled(
        format!("  {header}"),
        theme::accent_bold(),
    )));

    for row in rows {
        let text: String = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:>w$}  ", truncate(cell, w)))
            .collect();
        lines.push(Line::from(Span::styled(format!("  {text}"), theme::muted())));
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}.")
    }
}
