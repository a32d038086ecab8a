use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Password};
use pagefollow_browser::{BrowserLauncher, BrowserSession, ChromeFinder, ProfileDir, SiteConfig};
use pagefollow_core::{
    BatchRunner, Credentials, Error as CoreError, FollowOutcome, RunReport, TargetList,
};
use std::path::PathBuf;
use std::sync::Arc;

use crate::OutputFormat;
use crate::progress::BarProgress;
use crate::prompt::TerminalGate;

pub struct RunArgs {
    pub file: PathBuf,
    pub username: Option<String>,
    pub two_factor: bool,
    pub chrome_path: Option<PathBuf>,
    pub port: u16,
    pub profile: Option<PathBuf>,
    pub format: OutputFormat,
}

pub fn execute(args: RunArgs) -> Result<()> {
    // Target file problems and missing credentials must surface before
    // any browser process exists.
    let targets = TargetList::from_path(&args.file)
        .with_context(|| format!("Could not load targets from {}", args.file.display()))?;

    if args.format == OutputFormat::Pretty {
        println!(
            "📋 Loaded {} target(s) from {}",
            targets.len(),
            args.file.display()
        );
        if targets.duplicates_removed() > 0 {
            println!(
                "   {} duplicate row(s) removed",
                targets.duplicates_removed()
            );
        }
    }

    let credentials = collect_credentials(args.username, args.two_factor)?;
    let runner = BatchRunner::new(credentials, targets)?;

    let chrome_path = ChromeFinder::new(args.chrome_path)
        .find()
        .map_err(|e| CoreError::SessionInit(e.to_string()))?;
    tracing::debug!("Using Chrome at {}", chrome_path.display());
    let profile = match args.profile {
        Some(dir) => ProfileDir::persistent(dir),
        None => ProfileDir::temporary(),
    }
    .map_err(|e| CoreError::SessionInit(e.to_string()))?;

    let launcher =
        BrowserLauncher::new(chrome_path, profile.path().to_path_buf()).with_port(args.port);

    let runtime = tokio::runtime::Runtime::new()?;
    let report: RunReport = runtime.block_on(async {
        let chrome = launcher
            .launch()
            .map_err(|e| CoreError::SessionInit(e.to_string()))?;
        let session = BrowserSession::connect(
            chrome,
            launcher.debugging_port(),
            SiteConfig::default(),
            Arc::new(TerminalGate),
        )
        .await
        .map_err(|e| CoreError::SessionInit(e.to_string()))?;

        let bar = BarProgress::new(runner.targets().len() as u64);
        let report = runner.run(session, &bar).await;
        bar.finish();
        Ok::<_, anyhow::Error>(report?)
    })?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Pretty => print_summary(&report),
    }

    Ok(())
}

fn collect_credentials(username: Option<String>, two_factor: bool) -> Result<Credentials> {
    let username = match username {
        Some(username) => username,
        None => Input::new().with_prompt("Username").interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;
    Ok(Credentials::new(username, password, two_factor))
}

fn print_summary(report: &RunReport) {
    println!();
    println!(
        "{} {} followed, {} already following, {} failed",
        style("Done:").green().bold(),
        report.followed(),
        report.already_following(),
        report.failed()
    );

    for item in &report.items {
        if let FollowOutcome::Failed(reason) = &item.outcome {
            println!("  {} {}: {}", style("✗").red(), item.url, reason);
        }
    }

    if report.success() {
        println!("✅ Process completed successfully!");
    }
}
