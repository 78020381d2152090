//! Folio Core - Portfolio holdings analysis library.
//!
//! This crate provides the core functionality behind the `folio` tool:
//!
//! - **Tables**: CSV holdings tables with required-column validation
//! - **Metrics**: Investment value, current value, profit/loss and return per holding
//! - **Persistence**: A single saved portfolio file that uploads overwrite
//! - **Rendering**: Summary metrics, a formatted table and bar charts
//!
//! # Example
//!
//! ```rust
//! use folio_core::{portfolio::compute_report, Table};
//!
//! let csv = "Ticker,Shares,Purchase_Price,Current_Price\nAAPL,10,150,170\nMSFT,5,250,300\n";
//! let table = Table::from_reader(csv.as_bytes()).unwrap();
//!
//! let report = compute_report(&table).unwrap();
//! assert_eq!(report.summary.total_investment, 2750.0);
//! assert_eq!(report.summary.total_value, 3200.0);
//! ```

pub mod config;
pub mod portfolio;
pub mod render;
pub mod table;
pub mod types;

// Re-export commonly used types
pub use config::{OutputFormat, Settings};
pub use table::{Table, EXAMPLE_CSV, REQUIRED_COLUMNS};
pub use types::{
    AllocationEntry, AnnotatedHolding, ApiResponse, Holding, PortfolioReport, PortfolioSummary,
    ReturnEntry,
};

// Re-export main functionality
pub use portfolio::{compute_report, ClearOutcome, PortfolioStore, StoreStatus};
pub use render::{present, JsonRenderer, Presentation, Renderer, TextRenderer};

/// Error types for folio-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(
        "CSV must contain these columns: {}; missing: {}",
        .required.join(", "),
        .missing.join(", ")
    )]
    Schema {
        missing: Vec<String>,
        required: Vec<String>,
    },

    #[error("Invalid number in row {row}, column {column}: {value:?}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
}

/// Result type for folio-core operations.
pub type Result<T> = std::result::Result<T, Error>;
