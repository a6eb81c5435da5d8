//! Bundled sample payload.
//!
//! A representative analysis result for offline rendering: the CLI's
//! `sample` command and the render tests use it so neither needs a live
//! analysis service. Values are plausible, not real.

use crate::model::AnalysisResult;

/// Build the sample result. Panics only on a malformed literal, which
/// the tests would catch immediately.
pub fn sample_result() -> AnalysisResult {
    serde_json::from_value(serde_json::json!({
        "ticker": "ACME",
        "as_of": "2026-08-28T14:30:00Z",
        "chart": {
            "dates": ["2026-08-21", "2026-08-24", "2026-08-25", "2026-08-26", "2026-08-27"],
            "close": [182.4, 185.1, 183.9, 187.6, 190.2]
        },
        "price_snapshot": {
            "current_price": 190.2,
            "market_cap": 2_950_000_000_000.0,
            "shares_outstanding": 15_510_000_000.0,
            "fiscal_year_end": "0930",
            "latest_10k": {
                "filing_date": "2025-11-01",
                "url": "https://www.sec.gov/Archives/edgar/data/320193/000032019325000123/acme-10k.htm"
            },
            "latest_10q": {
                "filing_date": "2026-05-02",
                "url": "https://www.sec.gov/Archives/edgar/data/320193/000032019326000045/acme-10q.htm"
            },
            "upside_downside_vs_intrinsic": -0.082
        },
        "core_financials": {
            "income_statement_fy": {
                "Revenue": 391_035_000_000.0,
                "COGS": 210_352_000_000.0,
                "Gross profit": 180_683_000_000.0,
                "SG&A": 26_097_000_000.0,
                "R&D": 31_370_000_000.0,
                "D&A": 11_445_000_000.0,
                "EBIT": 123_216_000_000.0,
                "Interest expense": 3_933_000_000.0,
                "Taxes": 29_749_000_000.0,
                "Net income": 93_736_000_000.0
            },
            "balance_sheet_fy": {
                "Cash & short-term investments": 65_171_000_000.0,
                "Accounts receivable": 33_410_000_000.0,
                "Inventory": 7_286_000_000.0,
                "Current liabilities": 176_392_000_000.0,
                "Long-term debt": 85_750_000_000.0,
                "Total assets": 364_980_000_000.0,
                "Total equity": 56_950_000_000.0
            },
            "cash_flow_fy": {
                "Operating cash flow": 118_254_000_000.0,
                "Capex": 9_447_000_000.0,
                "Free cash flow": 108_807_000_000.0
            },
            "ttm": {
                "Revenue": 400_366_000_000.0,
                "Net income": 96_995_000_000.0,
                "Operating cash flow": 121_100_000_000.0,
                "Capex": 9_900_000_000.0,
                "Free cash flow": 111_200_000_000.0
            }
        },
        "metrics": {
            "valuation": {
                "P/E (TTM)": 30.4,
                "P/B (FY)": 51.8,
                "P/S (TTM)": 7.4,
                "PEG": "N/M",
                "EV/EBITDA (TTM)": 22.1
            },
            "profitability": {
                "Gross margin (FY)": 0.4621,
                "Operating margin (FY)": 0.3151,
                "Net margin (FY)": 0.2397,
                "ROE (FY)": 1.646,
                "ROA (FY)": 0.2568
            },
            "leverage": {
                "Debt / Equity (FY)": 1.87,
                "Debt / EBITDA (TTM proxy)": 0.79,
                "Interest coverage (EBIT/Interest)": 31.3
            },
            "liquidity_efficiency": {
                "Current ratio (FY)": 0.87,
                "Quick ratio (FY)": 0.56,
                "Asset turnover (FY)": 1.07
            },
            "free_cash_flow": {
                "FCF (TTM)": 111_200_000_000.0,
                "FCF yield (TTM)": 0.0377,
                "FCF margin (TTM)": 0.2778
            }
        },
        "wacc": {
            "risk_free_rate_10y": 0.0428,
            "equity_risk_premium_kroll": 0.055,
            "kroll_source": "https://www.kroll.com/en/insights/publications/cost-of-capital-navigator",
            "beta_5y_monthly": 1.18,
            "cost_of_equity_capm": 0.1077,
            "cost_of_debt": 0.0412,
            "tax_rate": 0.21,
            "equity_weight": 0.972,
            "debt_weight": 0.028,
            "wacc": 0.1056,
            "formula": "WACC = E/(D+E) * Re + D/(D+E) * Rd * (1-tax)"
        },
        "dcf": {
            "base_fcf_ttm": 111_200_000_000.0,
            "growth_assumption": 0.04,
            "terminal_growth": 0.02,
            "enterprise_value": 2_706_000_000_000.0,
            "equity_value": 2_685_000_000_000.0,
            "intrinsic_value_per_share": 174.6,
            "sensitivity_2x3": [
                { "wacc": 0.0956, "values": [182.1, 191.4, 202.3] },
                { "wacc": 0.1156, "values": [151.9, 158.2, 165.4] }
            ]
        },
        "historical_5y": [
            {
                "FY": "2025", "Revenue": 391_035_000_000.0, "Gross margin": 0.4621,
                "Operating margin": 0.3151, "Net margin": 0.2397,
                "EBITDA": 134_661_000_000.0, "FCF": 108_807_000_000.0,
                "Cash": 65_171_000_000.0, "Debt": 106_629_000_000.0, "Current ratio": 0.87
            },
            {
                "FY": "2024", "Revenue": 383_285_000_000.0, "Gross margin": 0.4413,
                "Operating margin": 0.2982, "Net margin": 0.2531,
                "EBITDA": 125_820_000_000.0, "FCF": 99_584_000_000.0,
                "Cash": 61_555_000_000.0, "Debt": 111_088_000_000.0, "Current ratio": 0.99
            },
            {
                "FY": "2023", "Revenue": 394_328_000_000.0, "Gross margin": 0.4331,
                "Operating margin": 0.3029, "Net margin": 0.2531,
                "EBITDA": 130_541_000_000.0, "FCF": 111_443_000_000.0,
                "Cash": 48_304_000_000.0, "Debt": 120_069_000_000.0, "Current ratio": 0.88
            },
            {
                "FY": "2022", "Revenue": 365_817_000_000.0, "Gross margin": 0.4178,
                "Operating margin": 0.2978, "Net margin": 0.2588,
                "EBITDA": 120_233_000_000.0, "FCF": 92_953_000_000.0,
                "Cash": 62_639_000_000.0, "Debt": 124_719_000_000.0, "Current ratio": 1.07
            },
            {
                "FY": "2021", "Revenue": 274_515_000_000.0, "Gross margin": 0.3823,
                "Operating margin": 0.2415, "Net margin": 0.2091,
                "EBITDA": 77_344_000_000.0, "FCF": 73_365_000_000.0,
                "Cash": 90_943_000_000.0, "Debt": 112_436_000_000.0, "Current ratio": 1.36
            }
        ],
        "assumptions": [
            "Baseline uses latest FY plus prior FY, with TTM for valuation/DCF inputs.",
            "Tax rate fixed at 21% unless company-specific rate is available.",
            "Terminal growth base case is 2% for U.S. issuers.",
            "N/M means non-meaningful (missing or invalid denominator/sign)."
        ],
        "sources": [
            "SEC EDGAR submissions API",
            "Yahoo Finance price history and statements",
            "Kroll Cost of Capital Navigator"
        ]
    }))
    .expect("sample payload is well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_deserializes_fully() {
        let result = sample_result();
        assert_eq!(result.ticker.as_deref(), Some("ACME"));
        assert!(result.dcf.is_some());
        assert_eq!(result.historical_5y.len(), 5);
        assert_eq!(result.chart.as_ref().unwrap().points().count(), 5);
    }
}
