//! Plain text report: summary metrics, detailed table and bar charts.

use super::chart::{bar_chart, Bar};
use super::format::{format_currency, format_percent};
use super::Renderer;
use crate::config::{DEFAULT_CHART_WIDTH, MAX_CHART_WIDTH};
use crate::types::{AnnotatedHolding, PortfolioReport};
use crate::Result;

/// Derived columns appended to the detailed table.
pub const DERIVED_COLUMNS: [&str; 4] = ["Investment_Value", "Current_Value", "Profit/Loss", "Return_%"];

/// Renders a report for a terminal.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    chart_width: usize,
}

impl TextRenderer {
    pub fn new(chart_width: usize) -> Self {
        Self {
            chart_width: chart_width.clamp(1, MAX_CHART_WIDTH),
        }
    }

    fn summary(&self, report: &PortfolioReport, out: &mut String) {
        let summary = &report.summary;
        let metrics = [
            ("Total Investment", format_currency(summary.total_investment)),
            ("Current Value", format_currency(summary.total_value)),
            ("Profit/Loss", format_currency(summary.total_profit)),
            ("Total Return", format_percent(summary.total_return_pct)),
        ];

        out.push_str("Portfolio Summary\n");
        for (label, value) in metrics {
            out.push_str(&format!("  {:<18}{:>16}\n", label, value));
        }
    }

    fn table(&self, report: &PortfolioReport, out: &mut String) {
        let headers: Vec<&str> = report
            .columns
            .iter()
            .map(String::as_str)
            .chain(DERIVED_COLUMNS)
            .collect();
        let rows: Vec<Vec<String>> = report
            .rows
            .iter()
            .map(|row| table_cells(&report.columns, row))
            .collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        let right_aligned: Vec<bool> = headers.iter().map(|h| is_numeric_column(h)).collect();

        out.push_str("Detailed Portfolio Table\n");
        out.push_str(&format_line(
            headers.iter().map(|h| h.to_string()),
            &widths,
            &right_aligned,
        ));
        let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
        out.push_str(&format!("  {}\n", rule.join("  ")));
        for row in rows {
            out.push_str(&format_line(row.into_iter(), &widths, &right_aligned));
        }
    }

    fn charts(&self, report: &PortfolioReport, out: &mut String) {
        let allocation: Vec<Bar> = report
            .allocation
            .iter()
            .map(|a| Bar::new(a.ticker.as_str(), a.current_value))
            .collect();
        let returns: Vec<Bar> = report
            .returns
            .iter()
            .map(|r| Bar::new(r.ticker.as_str(), r.return_pct))
            .collect();

        out.push_str("Portfolio Allocation\n");
        out.push_str(&bar_chart(&allocation, self.chart_width, format_currency));
        out.push('\n');
        out.push_str("Distribution of Returns\n");
        out.push_str(&bar_chart(&returns, self.chart_width, format_percent));
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_CHART_WIDTH)
    }
}

impl Renderer for TextRenderer {
    fn render(&self, report: &PortfolioReport) -> Result<String> {
        let mut out = String::new();
        self.summary(report, &mut out);
        out.push('\n');
        self.table(report, &mut out);
        out.push('\n');
        self.charts(report, &mut out);
        Ok(out)
    }
}

fn is_numeric_column(name: &str) -> bool {
    matches!(name, "Shares" | "Purchase_Price" | "Current_Price") || DERIVED_COLUMNS.contains(&name)
}

/// Original cells with prices formatted, followed by the derived metrics.
fn table_cells(columns: &[String], row: &AnnotatedHolding) -> Vec<String> {
    let mut cells: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(idx, column)| match column.as_str() {
            "Purchase_Price" => format_currency(row.holding.purchase_price),
            "Current_Price" => format_currency(row.holding.current_price),
            _ => row.cells.get(idx).cloned().unwrap_or_default(),
        })
        .collect();

    cells.push(format_currency(row.investment_value));
    cells.push(format_currency(row.current_value));
    cells.push(format_currency(row.profit_loss));
    cells.push(format_percent(row.return_pct));
    cells
}

fn format_line(
    cells: impl Iterator<Item = String>,
    widths: &[usize],
    right_aligned: &[bool],
) -> String {
    let padded: Vec<String> = cells
        .zip(widths.iter().zip(right_aligned))
        .map(|(cell, (width, right))| {
            if *right {
                format!("{:>width$}", cell, width = width)
            } else {
                format!("{:<width$}", cell, width = width)
            }
        })
        .collect();
    format!("  {}\n", padded.join("  ").trim_end())
}
