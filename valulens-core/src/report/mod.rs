//! The Result Renderer — pure transformation of one analysis payload
//! into an ordered display document.
//!
//! `build_report` never touches the network and never mutates its input.
//! Each section group also has its own builder so a front-end can render
//! a subset (the TUI shows one group per panel); the full document is
//! always the groups concatenated in the fixed composition order.

pub mod markdown;
mod tables;

use crate::format::{self, NOT_MEANINGFUL};
use crate::model::{AnalysisResult, DcfValuation, Filing, PriceSnapshot, WaccBuild};

pub use tables::{historical_table, key_value_table, sensitivity_grid};

/// Static closing paragraph, not derived from payload data.
pub const INVESTOR_CONCLUSION: &str = "This report is assembled from public filings, \
market data, and a mechanical DCF model. Intrinsic value estimates are highly \
sensitive to the growth, discount-rate, and terminal assumptions shown above; \
small changes move the result materially. Treat every figure as a starting point \
for your own diligence, not as investment advice.";

/// One rendered table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Link { label: String, href: String },
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    /// The visible text, ignoring any link target.
    pub fn label(&self) -> &str {
        match self {
            Cell::Text(s) => s,
            Cell::Link { label, .. } => label,
        }
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            Cell::Text(_) => None,
            Cell::Link { href, .. } => Some(href),
        }
    }
}

/// One titled block of the display document.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    /// Two-column table: label left, formatted value right, insertion order.
    KeyValue { title: String, rows: Vec<(String, Cell)> },
    /// Header row plus data rows.
    Grid { title: String, columns: Vec<String>, rows: Vec<Vec<String>> },
    /// Ordered list of verbatim strings. May be empty.
    List { title: String, items: Vec<String> },
    /// Stand-in when a block has nothing to show.
    Placeholder { title: String, message: String },
    /// Static prose.
    Paragraph { title: String, text: String },
}

impl Section {
    pub fn title(&self) -> &str {
        match self {
            Section::KeyValue { title, .. }
            | Section::Grid { title, .. }
            | Section::List { title, .. }
            | Section::Placeholder { title, .. }
            | Section::Paragraph { title, .. } => title,
        }
    }
}

/// The fully rendered display document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub sections: Vec<Section>,
}

/// Build the whole document in the fixed composition order.
pub fn build_report(result: &AnalysisResult) -> Report {
    let mut sections = Vec::new();
    sections.extend(snapshot_sections(result));
    sections.extend(financial_sections(result));
    sections.extend(metric_sections(result));
    sections.extend(valuation_sections(result));
    sections.extend(history_sections(result));
    sections.extend(notes_sections(result));
    Report { sections }
}

/// Price & filing snapshot.
pub fn snapshot_sections(result: &AnalysisResult) -> Vec<Section> {
    let empty = PriceSnapshot::default();
    let snap = result.price_snapshot.as_ref().unwrap_or(&empty);

    let fiscal_year_end = snap
        .fiscal_year_end
        .as_ref()
        .map(|v| format::format_cell("Fiscal year end", v))
        .unwrap_or_else(|| NOT_MEANINGFUL.to_string());

    let rows = vec![
        row_opt("Current price", snap.current_price),
        row_opt("Market cap", snap.market_cap),
        row_opt("Shares outstanding", snap.shares_outstanding),
        ("Fiscal year end".into(), Cell::Text(fiscal_year_end)),
        ("Latest 10-K".into(), filing_cell(snap.latest_10k.as_ref())),
        ("Latest 10-Q".into(), filing_cell(snap.latest_10q.as_ref())),
        row_opt("Upside/downside vs intrinsic", snap.upside_downside_vs_intrinsic),
    ];

    vec![Section::KeyValue { title: "Price & Filing Snapshot".into(), rows }]
}

/// Core financial statements: income, balance sheet, cash flow, TTM.
pub fn financial_sections(result: &AnalysisResult) -> Vec<Section> {
    let Some(fin) = result.core_financials.as_ref() else {
        return vec![
            key_value_table("Income Statement (FY)", &Default::default()),
            key_value_table("Balance Sheet (FY)", &Default::default()),
            key_value_table("Cash Flow (FY)", &Default::default()),
            key_value_table("TTM", &Default::default()),
        ];
    };
    vec![
        key_value_table("Income Statement (FY)", &fin.income_statement_fy),
        key_value_table("Balance Sheet (FY)", &fin.balance_sheet_fy),
        key_value_table("Cash Flow (FY)", &fin.cash_flow_fy),
        key_value_table("TTM", &fin.ttm),
    ]
}

/// The five metric groups, in order.
pub fn metric_sections(result: &AnalysisResult) -> Vec<Section> {
    let empty = Default::default();
    let m = result.metrics.as_ref();
    vec![
        key_value_table("Valuation", m.map_or(&empty, |m| &m.valuation)),
        key_value_table("Profitability", m.map_or(&empty, |m| &m.profitability)),
        key_value_table("Leverage", m.map_or(&empty, |m| &m.leverage)),
        key_value_table("Liquidity & Efficiency", m.map_or(&empty, |m| &m.liquidity_efficiency)),
        key_value_table("Free Cash Flow", m.map_or(&empty, |m| &m.free_cash_flow)),
    ]
}

/// WACC build followed by the DCF summary and sensitivity grid.
pub fn valuation_sections(result: &AnalysisResult) -> Vec<Section> {
    let mut sections = vec![wacc_section(result.wacc.as_ref())];
    sections.extend(dcf_sections(result.dcf.as_ref()));
    sections
}

/// Five-year historical table, or its placeholder when empty.
pub fn history_sections(result: &AnalysisResult) -> Vec<Section> {
    vec![historical_table("Five-Year History", &result.historical_5y)]
}

/// Assumptions, sources, and the closing advisory.
pub fn notes_sections(result: &AnalysisResult) -> Vec<Section> {
    vec![
        Section::List { title: "Assumptions".into(), items: result.assumptions.clone() },
        Section::List { title: "Sources".into(), items: result.sources.clone() },
        Section::Paragraph {
            title: "Investor Conclusion".into(),
            text: INVESTOR_CONCLUSION.into(),
        },
    ]
}

fn wacc_section(wacc: Option<&WaccBuild>) -> Section {
    let empty = WaccBuild::default();
    let w = wacc.unwrap_or(&empty);

    let mut rows = vec![
        row_opt("Risk-free rate (10Y)", w.risk_free_rate_10y),
        row_opt("Equity risk premium (Kroll)", w.equity_risk_premium_kroll),
    ];
    let erp_source = match &w.kroll_source {
        Some(href) => Cell::Link {
            label: "Cost of Capital Navigator".into(),
            href: href.clone(),
        },
        None => Cell::text(NOT_MEANINGFUL),
    };
    rows.push(("ERP source".into(), erp_source));
    rows.push(row_opt("Beta (5Y monthly)", w.beta_5y_monthly));
    rows.push(row_opt("Cost of equity (CAPM)", w.cost_of_equity_capm));
    rows.push(row_opt("Cost of debt", w.cost_of_debt));
    rows.push(row_opt("Tax rate", w.tax_rate));
    rows.push(row_opt("Equity weight", w.equity_weight));
    rows.push(row_opt("Debt weight", w.debt_weight));
    rows.push(row_opt("WACC", w.wacc));
    // Formula is display text, never reformatted.
    let formula = w.formula.clone().unwrap_or_else(|| NOT_MEANINGFUL.to_string());
    rows.push(("Formula".into(), Cell::Text(formula)));

    Section::KeyValue { title: "WACC Build".into(), rows }
}

fn dcf_sections(dcf: Option<&DcfValuation>) -> Vec<Section> {
    let Some(dcf) = dcf else {
        return vec![Section::Placeholder {
            title: "DCF Valuation".into(),
            message: "Insufficient data for a DCF valuation.".into(),
        }];
    };

    let summary = Section::KeyValue {
        title: "DCF Summary".into(),
        rows: vec![
            row_opt("Base FCF (TTM)", dcf.base_fcf_ttm),
            row_opt("Growth rate (yrs 1-5)", dcf.growth_assumption),
            row_opt("Terminal growth rate", dcf.terminal_growth),
            row_opt("Enterprise value", dcf.enterprise_value),
            row_opt("Equity value", dcf.equity_value),
            row_opt("Intrinsic value per share", dcf.intrinsic_value_per_share),
        ],
    };

    vec![summary, sensitivity_grid("DCF Sensitivity (intrinsic value per share)", &dcf.sensitivity)]
}

fn row_opt(label: &str, value: Option<f64>) -> (String, Cell) {
    (label.to_string(), Cell::Text(format::format_opt(label, value)))
}

fn filing_cell(filing: Option<&Filing>) -> Cell {
    match filing {
        Some(Filing { url: Some(url), filing_date: Some(date) }) => Cell::Link {
            label: date.clone(),
            href: url.clone(),
        },
        Some(Filing { url: Some(url), filing_date: None }) => Cell::Link {
            label: url.clone(),
            href: url.clone(),
        },
        Some(Filing { url: None, filing_date: Some(date) }) => Cell::text(date.clone()),
        _ => Cell::text(NOT_MEANINGFUL),
    }
}
