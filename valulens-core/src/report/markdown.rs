//! Markdown sink for a rendered report.

use super::{Cell, Report, Section};

/// Render the full document as markdown, one `##` heading per section.
pub fn render(report: &Report, ticker: Option<&str>) -> String {
    let mut out = match ticker {
        Some(t) => format!("# {t} — Filing-First Analysis\n"),
        None => "# Filing-First Analysis\n".to_string(),
    };

    for section in &report.sections {
        out.push('\n');
        render_section(&mut out, section);
    }

    out
}

fn render_section(out: &mut String, section: &Section) {
    out.push_str(&format!("## {}\n\n", section.title()));

    match section {
        Section::KeyValue { rows, .. } => {
            out.push_str("| | |\n|---|---|\n");
            for (label, cell) in rows {
                out.push_str(&format!("| {} | {} |\n", escape(label), cell_md(cell)));
            }
        }
        Section::Grid { columns, rows, .. } => {
            out.push('|');
            for col in columns {
                out.push_str(&format!(" {} |", escape(col)));
            }
            out.push('\n');
            out.push('|');
            for _ in columns {
                out.push_str("---|");
            }
            out.push('\n');
            for row in rows {
                out.push('|');
                for value in row {
                    out.push_str(&format!(" {} |", escape(value)));
                }
                out.push('\n');
            }
        }
        Section::List { items, .. } => {
            for (i, item) in items.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", i + 1, item));
            }
        }
        Section::Placeholder { message, .. } => {
            out.push_str(&format!("{message}\n"));
        }
        Section::Paragraph { text, .. } => {
            out.push_str(&format!("{text}\n"));
        }
    }
}

fn cell_md(cell: &Cell) -> String {
    match cell {
        Cell::Text(s) => escape(s),
        Cell::Link { label, href } => format!("[{}]({href})", escape(label)),
    }
}

// Pipe is the only character that breaks table syntax here.
fn escape(s: &str) -> String {
    s.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value_renders_pipe_table() {
        let report = Report {
            sections: vec![Section::KeyValue {
                title: "Snapshot".into(),
                rows: vec![
                    ("Current price".into(), Cell::text("195.5")),
                    (
                        "Latest 10-K".into(),
                        Cell::Link { label: "2024-01-01".into(), href: "https://x".into() },
                    ),
                ],
            }],
        };
        let md = render(&report, Some("AAPL"));
        assert!(md.starts_with("# AAPL — Filing-First Analysis\n"));
        assert!(md.contains("## Snapshot"));
        assert!(md.contains("| Current price | 195.5 |"));
        assert!(md.contains("| Latest 10-K | [2024-01-01](https://x) |"));
    }

    #[test]
    fn pipes_in_labels_are_escaped() {
        let report = Report {
            sections: vec![Section::KeyValue {
                title: "Metrics".into(),
                rows: vec![("Debt | Equity".into(), Cell::text("1.2"))],
            }],
        };
        let md = render(&report, None);
        assert!(md.contains("| Debt \\| Equity | 1.2 |"));
    }

    #[test]
    fn lists_are_ordered_and_placeholders_plain() {
        let report = Report {
            sections: vec![
                Section::List {
                    title: "Sources".into(),
                    items: vec!["SEC EDGAR".into(), "Yahoo Finance".into()],
                },
                Section::Placeholder { title: "DCF Valuation".into(), message: "N/M".into() },
            ],
        };
        let md = render(&report, None);
        assert!(md.contains("1. SEC EDGAR\n2. Yahoo Finance\n"));
        assert!(md.contains("## DCF Valuation\n\nN/M\n"));
    }
}
