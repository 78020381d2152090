//! Folio CLI - Upload, analyse and clear a saved stock portfolio.
//!
//! Every run recomputes the report from the saved CSV. Reports go to stdout,
//! logs go to stderr (`RUST_LOG` controls the level).

use anyhow::Context;
use clap::{Parser, Subcommand};
use folio_core::{
    portfolio::ClearOutcome, render, ApiResponse, OutputFormat, Settings, Table, EXAMPLE_CSV,
};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio analysis - upload holdings, see returns and allocation")]
#[command(version)]
struct Cli {
    /// Saved portfolio file (defaults to $FOLIO_DATA_FILE or ./portfolio_data.csv)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Width of the longest chart bar
    #[arg(long, global = true)]
    chart_width: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse the saved portfolio
    Show,
    /// Save a portfolio CSV, replacing any saved one, then analyse it
    Upload {
        /// CSV with Ticker, Shares, Purchase_Price and Current_Price columns
        file: PathBuf,
    },
    /// Delete the saved portfolio
    Clear,
    /// Describe the saved portfolio file
    Status,
    /// Print an example portfolio CSV
    Example,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings = Settings::resolve(cli.data_file, cli.chart_width, cli.json);
    tracing::debug!(data_file = %settings.data_file.display(), "Resolved settings");

    let result = match cli.command {
        Commands::Show => handle_show(&settings),
        Commands::Upload { file } => handle_upload(&settings, file),
        Commands::Clear => handle_clear(&settings),
        Commands::Status => handle_status(&settings),
        Commands::Example => {
            print!("{}", EXAMPLE_CSV);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match settings.format {
                OutputFormat::Text => eprintln!("error: {:#}", e),
                OutputFormat::Json => print_json(&ApiResponse::<()>::err(format!("{:#}", e))),
            }
            ExitCode::FAILURE
        }
    }
}

fn handle_show(settings: &Settings) -> anyhow::Result<()> {
    let store = settings.store();
    let table = store
        .load()
        .with_context(|| format!("failed to read {}", store.path().display()))?;

    match table {
        Some(table) => {
            notice(
                settings,
                &format!(
                    "Loaded saved portfolio data from '{}'.",
                    store.path().display()
                ),
            );
            present(settings, &table)
        }
        None => present(settings, &Table::default()),
    }
}

fn handle_upload(settings: &Settings, file: PathBuf) -> anyhow::Result<()> {
    let table = Table::from_path(&file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let store = settings.store();
    store
        .save(&table)
        .with_context(|| format!("failed to save {}", store.path().display()))?;
    notice(
        settings,
        &format!(
            "Portfolio data saved locally as '{}'.",
            store.path().display()
        ),
    );

    present(settings, &table)
}

fn handle_clear(settings: &Settings) -> anyhow::Result<()> {
    let store = settings.store();
    let outcome = store
        .clear()
        .with_context(|| format!("failed to delete {}", store.path().display()))?;

    match settings.format {
        OutputFormat::Text => match outcome {
            ClearOutcome::Removed => println!("Portfolio data cleared."),
            ClearOutcome::NotPresent => println!("No saved portfolio to clear."),
        },
        OutputFormat::Json => print_json(&ApiResponse::ok(json!({
            "path": store.path(),
            "outcome": outcome,
        }))),
    }
    Ok(())
}

fn handle_status(settings: &Settings) -> anyhow::Result<()> {
    let status = settings.store().status()?;

    match settings.format {
        OutputFormat::Text => {
            println!("Data file: {}", status.path.display());
            match status.modified_at {
                Some(modified) => println!("Last saved: {}", modified.to_rfc3339()),
                None => println!("No saved portfolio."),
            }
        }
        OutputFormat::Json => print_json(&ApiResponse::ok(status)),
    }
    Ok(())
}

/// Print the report, or the upload hint when there are no rows.
fn present(settings: &Settings, table: &Table) -> anyhow::Result<()> {
    let shown = render::present(table, settings)?;
    println!("{}", shown.output().trim_end());
    Ok(())
}

fn notice(settings: &Settings, message: &str) {
    tracing::info!("{}", message);
    if settings.format == OutputFormat::Text {
        println!("{}\n", message);
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("error: {}", e),
    }
}
