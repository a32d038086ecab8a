use anyhow::{Context, Result};
use console::style;
use pagefollow_core::TargetList;
use serde::Serialize;
use std::path::Path;

use crate::OutputFormat;

/// What `check` learned about a target file.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub targets: usize,
    pub duplicates_removed: usize,
    pub blank_rows_skipped: usize,
    pub urls: Vec<String>,
}

/// Load and summarize a target file without opening a browser.
pub fn inspect(file: &Path) -> Result<CheckReport> {
    let targets = TargetList::from_path(file)
        .with_context(|| format!("Could not load targets from {}", file.display()))?;

    Ok(CheckReport {
        targets: targets.len(),
        duplicates_removed: targets.duplicates_removed(),
        blank_rows_skipped: targets.blank_rows_skipped(),
        urls: targets.iter().map(str::to_string).collect(),
    })
}

pub fn execute(file: &Path, format: OutputFormat) -> Result<()> {
    let report = inspect(file)?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} target(s) in {}",
        style("Targets:").bold(),
        report.targets,
        file.display()
    );
    if report.duplicates_removed > 0 {
        println!("  {} duplicate row(s) removed", report.duplicates_removed);
    }
    if report.blank_rows_skipped > 0 {
        println!("  {} blank row(s) skipped", report.blank_rows_skipped);
    }
    for url in &report.urls {
        println!("  {}", url);
    }

    Ok(())
}
