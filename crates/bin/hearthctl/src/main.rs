//! # hearthctl — household report
//!
//! Composition root that wires the demo home to the query layer and prints
//! the result.
//!
//! ## Responsibilities
//! - Parse configuration (`hearth.toml`, env vars)
//! - Initialise logging on stderr
//! - Build the device catalog from the virtual integration
//! - Run the report and print it on stdout as text or JSON
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod report;

use std::io::Write;

use anyhow::Context;
use hearth_adapter_virtual::VirtualHome;
use tracing_subscriber::EnvFilter;

use config::{Config, OutputFormat};
use report::Report;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .with_context(|| format!("invalid log filter {:?}", config.logging.filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let home = VirtualHome::default();
    let catalog = home.catalog().context("failed to build the demo home")?;
    let report = Report::build(&catalog, &config.report);

    let mut out = std::io::stdout().lock();
    match config.report.format {
        OutputFormat::Text => report.write_text(&mut out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    tracing::debug!(format = ?config.report.format, "report written");
    Ok(())
}
