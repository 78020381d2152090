//! Derived holding metrics and portfolio aggregates.

use crate::table::Table;
use crate::types::{
    AllocationEntry, AnnotatedHolding, PortfolioReport, PortfolioSummary, ReturnEntry,
};
use crate::Result;
use std::collections::BTreeMap;

/// Build the full report for a holdings table.
///
/// Rejects the whole table if a required column is missing or a numeric cell
/// does not parse; otherwise every row is annotated before anything is summed.
pub fn compute_report(table: &Table) -> Result<PortfolioReport> {
    let holdings = table.holdings()?;

    let rows: Vec<AnnotatedHolding> = holdings
        .into_iter()
        .zip(table.records())
        .map(|(holding, record)| holding.annotate(record.clone()))
        .collect();

    let summary = PortfolioSummary::from_rows(&rows);
    let allocation = allocation_by_ticker(&rows);
    let returns = returns_by_row(&rows);

    tracing::debug!(
        rows = rows.len(),
        tickers = allocation.len(),
        total_value = summary.total_value,
        "Computed portfolio report"
    );

    Ok(PortfolioReport {
        columns: table.headers().to_vec(),
        rows,
        summary,
        allocation,
        returns,
    })
}

/// Sum current value per ticker, ordered by ticker.
///
/// Rows with a blank ticker have no group and are left out.
pub fn allocation_by_ticker(rows: &[AnnotatedHolding]) -> Vec<AllocationEntry> {
    let mut grouped: BTreeMap<&str, f64> = BTreeMap::new();
    for row in rows {
        if row.holding.ticker.trim().is_empty() {
            continue;
        }
        *grouped.entry(row.holding.ticker.as_str()).or_insert(0.0) += row.current_value;
    }

    grouped
        .into_iter()
        .map(|(ticker, current_value)| AllocationEntry {
            ticker: ticker.to_string(),
            current_value,
        })
        .collect()
}

/// Return percentage of every row, in input order.
pub fn returns_by_row(rows: &[AnnotatedHolding]) -> Vec<ReturnEntry> {
    rows.iter()
        .map(|row| ReturnEntry {
            ticker: row.holding.ticker.clone(),
            return_pct: row.return_pct,
        })
        .collect()
}
