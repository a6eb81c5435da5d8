//! Analysis payload model.
//!
//! Deserialized whole from the analysis endpoint's response body and held
//! read-only for one render pass. Every field is optional or defaults to
//! empty: a payload with missing or oddly shaped fields must still
//! deserialize, so the renderer can degrade cell-by-cell instead of
//! rejecting the whole response.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A name → value mapping whose insertion order is the display order.
///
/// Values stay as raw JSON because the service mixes numbers with
/// pre-stringified "N/M" markers in the same mapping.
pub type LineItems = Map<String, Value>;

/// Accept the field if it has the expected shape, otherwise fall back
/// to the field's default. A wrong-typed field degrades exactly like a
/// missing one; it never rejects the whole payload.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// The whole analysis result for one ticker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    #[serde(deserialize_with = "lenient")]
    pub ticker: Option<String>,
    /// RFC 3339 completion timestamp, rendered in local time.
    #[serde(deserialize_with = "lenient")]
    pub as_of: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub chart: Option<ChartSeries>,
    #[serde(deserialize_with = "lenient")]
    pub price_snapshot: Option<PriceSnapshot>,
    #[serde(deserialize_with = "lenient")]
    pub core_financials: Option<CoreFinancials>,
    #[serde(deserialize_with = "lenient")]
    pub metrics: Option<MetricGroups>,
    #[serde(deserialize_with = "lenient")]
    pub wacc: Option<WaccBuild>,
    /// Absent when the service had insufficient data for a valuation.
    #[serde(deserialize_with = "lenient")]
    pub dcf: Option<DcfValuation>,
    #[serde(deserialize_with = "lenient")]
    pub historical_5y: Vec<LineItems>,
    #[serde(deserialize_with = "lenient")]
    pub assumptions: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub sources: Vec<String>,
}

/// Daily closing-price series. `dates` and `close` are parallel arrays.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSeries {
    #[serde(deserialize_with = "lenient")]
    pub dates: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub close: Vec<f64>,
}

impl ChartSeries {
    /// Paired (date, close) points, truncated to the shorter array if the
    /// service ever sends mismatched lengths.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.dates
            .iter()
            .map(String::as_str)
            .zip(self.close.iter().copied())
    }
}

/// One SEC filing reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Filing {
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub filing_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceSnapshot {
    #[serde(deserialize_with = "lenient")]
    pub current_price: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub market_cap: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub shares_outstanding: Option<f64>,
    /// Free-form: EDGAR reports it as a string like "0930".
    pub fiscal_year_end: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub latest_10k: Option<Filing>,
    #[serde(deserialize_with = "lenient")]
    pub latest_10q: Option<Filing>,
    #[serde(deserialize_with = "lenient")]
    pub upside_downside_vs_intrinsic: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreFinancials {
    #[serde(deserialize_with = "lenient")]
    pub income_statement_fy: LineItems,
    #[serde(deserialize_with = "lenient")]
    pub balance_sheet_fy: LineItems,
    #[serde(deserialize_with = "lenient")]
    pub cash_flow_fy: LineItems,
    #[serde(deserialize_with = "lenient")]
    pub ttm: LineItems,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricGroups {
    #[serde(deserialize_with = "lenient")]
    pub valuation: LineItems,
    #[serde(deserialize_with = "lenient")]
    pub profitability: LineItems,
    #[serde(deserialize_with = "lenient")]
    pub leverage: LineItems,
    #[serde(deserialize_with = "lenient")]
    pub liquidity_efficiency: LineItems,
    #[serde(deserialize_with = "lenient")]
    pub free_cash_flow: LineItems,
}

/// Weighted-average cost of capital build, inputs and outputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WaccBuild {
    #[serde(deserialize_with = "lenient")]
    pub risk_free_rate_10y: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub equity_risk_premium_kroll: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub kroll_source: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub beta_5y_monthly: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub cost_of_equity_capm: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub cost_of_debt: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub tax_rate: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub equity_weight: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub debt_weight: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub wacc: Option<f64>,
    /// Rendered verbatim, never reformatted.
    #[serde(deserialize_with = "lenient")]
    pub formula: Option<String>,
}

/// Discounted-cash-flow valuation with its sensitivity scenarios.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DcfValuation {
    #[serde(deserialize_with = "lenient")]
    pub base_fcf_ttm: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub growth_assumption: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub terminal_growth: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub enterprise_value: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub equity_value: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub intrinsic_value_per_share: Option<f64>,
    /// One row per WACC scenario; the service's wire name is
    /// historical (`sensitivity_2x3`) but both spellings are accepted.
    #[serde(alias = "sensitivity_2x3", deserialize_with = "lenient")]
    pub sensitivity: Vec<SensitivityRow>,
}

/// Intrinsic value per share under one WACC scenario, across the three
/// fixed terminal-growth scenarios (low / base / high).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SensitivityRow {
    #[serde(deserialize_with = "lenient")]
    pub wacc: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub values: Vec<Option<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_deserializes() {
        let result: AnalysisResult = serde_json::from_str("{}").unwrap();
        assert!(result.ticker.is_none());
        assert!(result.dcf.is_none());
        assert!(result.historical_5y.is_empty());
        assert!(result.assumptions.is_empty());
    }

    #[test]
    fn wrong_typed_fields_degrade_instead_of_failing() {
        let json = r#"{
            "ticker": "ACME",
            "price_snapshot": {"current_price": "oops", "market_cap": 5.0},
            "wacc": {"tax_rate": [1, 2], "beta_5y_monthly": 1.1},
            "chart": {"dates": ["2024-01-02"], "close": "not an array"},
            "historical_5y": "nope"
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();

        let snap = result.price_snapshot.unwrap();
        assert_eq!(snap.current_price, None);
        assert_eq!(snap.market_cap, Some(5.0));

        let wacc = result.wacc.unwrap();
        assert_eq!(wacc.tax_rate, None);
        assert_eq!(wacc.beta_5y_monthly, Some(1.1));

        assert!(result.chart.unwrap().points().next().is_none());
        assert!(result.historical_5y.is_empty());
        assert_eq!(result.ticker.as_deref(), Some("ACME"));
    }

    #[test]
    fn sensitivity_wire_alias_accepted() {
        let json = r#"{
            "dcf": {
                "base_fcf_ttm": 1000.0,
                "sensitivity_2x3": [
                    {"wacc": 0.08, "values": [100.0, 110.0, 120.0]},
                    {"wacc": 0.10, "values": [90.0, null, 100.0]}
                ]
            }
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        let dcf = result.dcf.unwrap();
        assert_eq!(dcf.sensitivity.len(), 2);
        assert_eq!(dcf.sensitivity[0].values, vec![Some(100.0), Some(110.0), Some(120.0)]);
        assert_eq!(dcf.sensitivity[1].values[1], None);
    }

    #[test]
    fn line_items_keep_insertion_order() {
        let json = r#"{"core_financials": {"income_statement_fy": {
            "Revenue": 10.0, "COGS": 4.0, "Gross profit": 6.0, "EBIT": 2.0
        }}}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        let core_financials = result.core_financials.unwrap();
        let keys: Vec<&str> = core_financials
            .income_statement_fy
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["Revenue", "COGS", "Gross profit", "EBIT"]);
    }

    #[test]
    fn chart_points_truncate_to_shorter_side() {
        let chart = ChartSeries {
            dates: vec!["2024-01-02".into(), "2024-01-03".into(), "2024-01-04".into()],
            close: vec![101.0, 102.5],
        };
        let points: Vec<_> = chart.points().collect();
        assert_eq!(points, vec![("2024-01-02", 101.0), ("2024-01-03", 102.5)]);
    }
}
