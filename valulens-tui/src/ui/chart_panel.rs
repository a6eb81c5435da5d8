//! Chart panel — daily closing-price line chart.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chart = app.result.as_ref().and_then(|r| r.chart.as_ref());

    match chart {
        Some(series) if series.points().next().is_some() => {
            let ticker = app
                .result
                .as_ref()
                .and_then(|r| r.ticker.as_deref())
                .unwrap_or("price");
            render_chart(f, area, series, ticker);
        }
        _ => render_empty(f, area),
    }
}

fn render_empty(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No price series to display. Run an analysis first.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_chart(
    f: &mut Frame,
    area: Rect,
    series: &valulens_core::model::ChartSeries,
    ticker: &str,
) {
    // Points in supplied order, no resampling or smoothing.
    let data: Vec<(f64, f64)> = series
        .points()
        .enumerate()
        .map(|(i, (_, close))| (i as f64, close))
        .collect();

    let min_y = data.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let max_y = data.iter().map(|(_, y)| *y).fold(f64::NEG_INFINITY, f64::max);
    let padding = (max_y - min_y).abs() * 0.05;
    let y_min = min_y - padding;
    let y_max = max_y + padding;
    let x_max = (data.len().saturating_sub(1)) as f64;

    let first_date = series.dates.first().cloned().unwrap_or_default();
    let last_date = series
        .dates
        .get(data.len().saturating_sub(1))
        .cloned()
        .unwrap_or_default();

    let dataset = Dataset::default()
        .name(ticker.to_string())
        .marker(symbols::Marker::Braille)
        .style(Style::default().fg(theme::ACCENT))
        .graph_type(GraphType::Line)
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .x_axis(
            Axis::default()
                .title(Span::styled("Date", theme::muted()))
                .style(theme::muted())
                .bounds([0.0, x_max.max(1.0)])
                .labels(vec![
                    Span::styled(first_date, theme::muted()),
                    Span::styled(last_date, theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Close", theme::muted()))
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(format!("{y_min:.2}"), theme::muted()),
                    Span::styled(format!("{y_max:.2}"), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}
