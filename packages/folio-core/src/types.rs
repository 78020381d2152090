//! Core data types for the folio portfolio report.

use serde::{Deserialize, Serialize};

/// Return `numerator / denominator * 100`, or zero when the denominator is zero.
pub fn percent_of(numerator: f64, denominator: f64) -> f64 {
    if denominator != 0.0 {
        (numerator / denominator) * 100.0
    } else {
        0.0
    }
}

/// One row of an uploaded holdings table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Holding {
    /// Ticker symbol as written in the table (not normalised, may repeat)
    pub ticker: String,
    /// Number of shares held
    pub shares: f64,
    /// Price per share at acquisition
    pub purchase_price: f64,
    /// Price per share now
    pub current_price: f64,
}

impl Holding {
    /// Create a new holding.
    pub fn new(ticker: &str, shares: f64, purchase_price: f64, current_price: f64) -> Self {
        Self {
            ticker: ticker.to_string(),
            shares,
            purchase_price,
            current_price,
        }
    }

    /// Cost basis of the holding.
    pub fn investment_value(&self) -> f64 {
        self.shares * self.purchase_price
    }

    /// Mark-to-market value of the holding.
    pub fn current_value(&self) -> f64 {
        self.shares * self.current_price
    }

    /// Attach the derived metrics, keeping the row's raw cells for display.
    pub fn annotate(self, cells: Vec<String>) -> AnnotatedHolding {
        let investment_value = self.investment_value();
        let current_value = self.current_value();
        let profit_loss = current_value - investment_value;
        let return_pct = percent_of(profit_loss, investment_value);

        AnnotatedHolding {
            holding: self,
            investment_value,
            current_value,
            profit_loss,
            return_pct,
            cells,
        }
    }
}

/// A holding with its derived metrics populated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnnotatedHolding {
    #[serde(flatten)]
    pub holding: Holding,
    /// shares * purchase_price
    pub investment_value: f64,
    /// shares * current_price
    pub current_value: f64,
    /// current_value - investment_value
    pub profit_loss: f64,
    /// profit_loss as a percentage of investment_value, zero when nothing was invested
    pub return_pct: f64,
    /// Raw cells of the source row, aligned with `PortfolioReport::columns`
    pub cells: Vec<String>,
}

/// Aggregate totals over every holding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PortfolioSummary {
    pub total_investment: f64,
    pub total_value: f64,
    pub total_profit: f64,
    /// Return on the summed totals, weighted by investment size
    pub total_return_pct: f64,
    pub holding_count: usize,
}

impl PortfolioSummary {
    /// Sum the derived metrics of annotated rows.
    pub fn from_rows(rows: &[AnnotatedHolding]) -> Self {
        let total_investment: f64 = rows.iter().map(|r| r.investment_value).sum();
        let total_value: f64 = rows.iter().map(|r| r.current_value).sum();
        let total_profit: f64 = rows.iter().map(|r| r.profit_loss).sum();

        Self {
            total_investment,
            total_value,
            total_profit,
            total_return_pct: percent_of(total_profit, total_investment),
            holding_count: rows.len(),
        }
    }
}

/// Current value merged across all rows sharing a ticker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllocationEntry {
    pub ticker: String,
    pub current_value: f64,
}

/// Return percentage of a single row, keyed by its ticker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReturnEntry {
    pub ticker: String,
    pub return_pct: f64,
}

/// Everything a renderer needs for one run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PortfolioReport {
    /// Original header row, in input order
    pub columns: Vec<String>,
    /// One entry per input row, in input order
    pub rows: Vec<AnnotatedHolding>,
    pub summary: PortfolioSummary,
    /// Current value by ticker, sorted by ticker
    pub allocation: Vec<AllocationEntry>,
    /// Return per row, in input order
    pub returns: Vec<ReturnEntry>,
}

impl PortfolioReport {
    /// Whether the report has any rows to show.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// API response wrapper for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response.
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_holding_keeps_ticker_verbatim() {
        let holding = Holding::new("brk.b", 1.0, 2.0, 3.0);
        assert_eq!(holding.ticker, "brk.b");
    }

    #[test]
    fn test_annotate_gain() {
        let row = Holding::new("AAPL", 10.0, 150.0, 170.0).annotate(Vec::new());

        assert_eq!(row.investment_value, 1500.0);
        assert_eq!(row.current_value, 1700.0);
        assert_eq!(row.profit_loss, 200.0);
        // 200 / 1500 = 13.33%
        assert_relative_eq!(row.return_pct, 200.0 / 1500.0 * 100.0);
    }

    #[test]
    fn test_annotate_loss_is_negative() {
        let row = Holding::new("TSLA", 4.0, 250.0, 200.0).annotate(Vec::new());

        assert_eq!(row.profit_loss, -200.0);
        assert_relative_eq!(row.return_pct, -20.0);
    }

    #[test]
    fn test_annotate_zero_investment() {
        let zero_shares = Holding::new("AAPL", 0.0, 150.0, 170.0).annotate(Vec::new());
        assert_eq!(zero_shares.return_pct, 0.0);

        let free_shares = Holding::new("GIFT", 10.0, 0.0, 5.0).annotate(Vec::new());
        assert_eq!(free_shares.profit_loss, 50.0);
        assert_eq!(free_shares.return_pct, 0.0);
        assert!(!free_shares.return_pct.is_nan());
    }

    #[test]
    fn test_summary_empty() {
        let summary = PortfolioSummary::from_rows(&[]);
        assert_eq!(summary, PortfolioSummary::default());
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(1.0, 4.0), 25.0);
        assert_eq!(percent_of(5.0, 0.0), 0.0);
        assert_eq!(percent_of(-1.0, 2.0), -50.0);
    }

    #[test]
    fn test_api_response() {
        let response: ApiResponse<String> = ApiResponse::ok("test".to_string());
        assert!(response.ok);
        assert_eq!(response.data, Some("test".to_string()));

        let err_response: ApiResponse<String> = ApiResponse::err("error");
        assert!(!err_response.ok);
        assert_eq!(err_response.error, Some("error".to_string()));
    }
}
