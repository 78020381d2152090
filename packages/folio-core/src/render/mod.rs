//! Report rendering.
//!
//! Renderers turn a computed [`PortfolioReport`] into output text. The text
//! renderer targets terminals; the JSON renderer wraps the report in an
//! [`ApiResponse`] for scripts.

mod chart;
mod format;
mod text;

pub use chart::{bar_chart, bar_length, Bar};
pub use format::{format_currency, format_grouped, format_percent};
pub use text::{TextRenderer, DERIVED_COLUMNS};

use crate::config::{OutputFormat, Settings};
use crate::portfolio::compute_report;
use crate::table::Table;
use crate::types::{ApiResponse, PortfolioReport};
use crate::Result;

/// Shown in place of a text report when there are no holdings.
pub const UPLOAD_HINT: &str =
    "Please upload your portfolio CSV file to begin (folio upload <FILE>).";

/// What a run prints for a loaded or uploaded table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// No data rows in text mode
    UploadHint,
    /// Rendered report output
    Report(String),
}

impl Presentation {
    /// Text to write to stdout.
    pub fn output(&self) -> &str {
        match self {
            Presentation::UploadHint => UPLOAD_HINT,
            Presentation::Report(output) => output,
        }
    }
}

/// Turns a report into displayable output.
pub trait Renderer {
    fn render(&self, report: &PortfolioReport) -> Result<String>;
}

/// Pretty-printed JSON envelope around the report.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, report: &PortfolioReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(&ApiResponse::ok(report))?)
    }
}

/// Pick the renderer for the configured output format.
pub fn renderer_for(settings: &Settings) -> Box<dyn Renderer> {
    match settings.format {
        OutputFormat::Text => Box::new(TextRenderer::new(settings.chart_width)),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// Decide what to show for `table` and render it.
///
/// A table without data rows is never validated: text output gets the upload
/// hint, JSON output gets an empty report. Otherwise a schema or number error
/// is returned and nothing is rendered.
pub fn present(table: &Table, settings: &Settings) -> Result<Presentation> {
    let report = if table.is_empty() {
        if settings.format == OutputFormat::Text {
            return Ok(Presentation::UploadHint);
        }
        PortfolioReport::default()
    } else {
        compute_report(table)?
    };

    let output = renderer_for(settings).render(&report)?;
    Ok(Presentation::Report(output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn json_settings() -> Settings {
        Settings {
            format: OutputFormat::Json,
            ..Settings::default()
        }
    }

    #[test]
    fn test_json_renderer() {
        let csv = "Ticker,Shares,Purchase_Price,Current_Price\nAAPL,10,150,170\n";
        let report = compute_report(&Table::from_reader(csv.as_bytes()).unwrap()).unwrap();

        let json = JsonRenderer.render(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["ok"], true);
        assert_eq!(value["data"]["summary"]["total_investment"], 1500.0);
        assert_eq!(value["data"]["rows"][0]["ticker"], "AAPL");
        assert_eq!(value["data"]["rows"][0]["profit_loss"], 200.0);
        assert_eq!(value["data"]["allocation"][0]["current_value"], 1700.0);
    }

    #[test]
    fn test_renderer_for_format() {
        let mut settings = Settings::default();
        let report = PortfolioReport::default();

        let text = renderer_for(&settings).render(&report).unwrap();
        assert!(text.starts_with("Portfolio Summary"));

        settings.format = OutputFormat::Json;
        let json = renderer_for(&settings).render(&report).unwrap();
        assert!(json.trim_start().starts_with('{'));
    }

    #[test]
    fn test_present_empty_table_text_hint() {
        let header_only =
            Table::from_reader("Ticker,Shares,Purchase_Price,Current_Price\n".as_bytes()).unwrap();

        for table in [Table::default(), header_only] {
            let shown = present(&table, &Settings::default()).unwrap();
            assert_eq!(shown, Presentation::UploadHint);
            assert_eq!(shown.output(), UPLOAD_HINT);
        }
    }

    #[test]
    fn test_present_empty_table_json_report() {
        let shown = present(&Table::default(), &json_settings()).unwrap();

        let json = match shown {
            Presentation::Report(json) => json,
            other => panic!("expected a rendered report, got {:?}", other),
        };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(value["data"]["rows"], serde_json::json!([]));
        assert_eq!(value["data"]["summary"]["total_investment"], 0.0);
        assert_eq!(value["data"]["summary"]["total_return_pct"], 0.0);
    }

    #[test]
    fn test_present_rejects_missing_column() {
        let table = Table::from_reader("Ticker,Shares,Purchase_Price\nAAPL,10,150\n".as_bytes())
            .unwrap();

        assert!(matches!(
            present(&table, &Settings::default()),
            Err(Error::Schema { .. })
        ));
        assert!(matches!(
            present(&table, &json_settings()),
            Err(Error::Schema { .. })
        ));
    }

    #[test]
    fn test_present_rejects_invalid_number() {
        let csv = "Ticker,Shares,Purchase_Price,Current_Price\nAAPL,ten,150,170\n";
        let table = Table::from_reader(csv.as_bytes()).unwrap();

        assert!(matches!(
            present(&table, &Settings::default()),
            Err(Error::InvalidNumber { row: 1, .. })
        ));
    }

    #[test]
    fn test_present_renders_report() {
        let table = Table::from_reader(crate::table::EXAMPLE_CSV.as_bytes()).unwrap();
        let shown = present(&table, &Settings::default()).unwrap();

        assert!(shown.output().starts_with("Portfolio Summary"));
        assert!(shown.output().contains("$2,750.00"));
        assert!(shown.output().contains("16.36%"));
    }
}
