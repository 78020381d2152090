//! Portfolio module.
//!
//! Provides the metrics calculator and the saved portfolio file.

mod metrics;
mod store;

pub use metrics::{allocation_by_ticker, compute_report, returns_by_row};
pub use store::{ClearOutcome, PortfolioStore, StoreStatus};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Table;
    use crate::Error;
    use tempfile::tempdir;

    #[test]
    fn test_saved_table_is_recomputed_on_load() {
        let dir = tempdir().unwrap();
        let store = PortfolioStore::new(dir.path().join("portfolio_data.csv"));
        let uploaded = Table::from_reader(crate::table::EXAMPLE_CSV.as_bytes()).unwrap();

        store.save(&uploaded).unwrap();
        let loaded = store.load().unwrap().unwrap();

        assert_eq!(compute_report(&loaded).unwrap(), compute_report(&uploaded).unwrap());
    }

    #[test]
    fn test_invalid_upload_is_still_saved() {
        let dir = tempdir().unwrap();
        let store = PortfolioStore::new(dir.path().join("portfolio_data.csv"));
        let uploaded = Table::from_reader("Ticker,Shares\nAAPL,10\n".as_bytes()).unwrap();

        store.save(&uploaded).unwrap();
        let loaded = store.load().unwrap().unwrap();

        assert!(matches!(compute_report(&loaded), Err(Error::Schema { .. })));
    }
}
