use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use pagefollow_cli::{OutputFormat, commands};

#[derive(Parser)]
#[command(name = "pagefollow")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Batch-follow career pages from a target list in a logged-in browser session",
    long_about = "Pagefollow logs into your professional-network account in a visible \
                  Chrome window, then visits every career page URL from a target file \
                  and activates the Follow control on each page not already followed."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and follow every page in the target file
    Run {
        /// Target file: single-column CSV of career page URLs, no header
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,

        /// Account username (prompted when omitted)
        #[arg(short, long)]
        username: Option<String>,

        /// Pause for a manual two-factor verification step after login
        #[arg(long)]
        two_factor: bool,

        /// Chrome binary to use instead of auto-detection
        #[arg(long, value_name = "PATH")]
        chrome_path: Option<PathBuf>,

        /// Chrome remote debugging port
        #[arg(long, default_value_t = pagefollow_browser::BrowserLauncher::DEFAULT_PORT)]
        port: u16,

        /// Persistent Chrome profile directory (temporary when omitted)
        #[arg(long, value_name = "DIR")]
        profile: Option<PathBuf>,
    },

    /// Validate a target file and report its contents, no browser needed
    Check {
        /// Path to the target file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Show which Chrome binary would be used
    Chrome {
        /// Chrome binary to check instead of auto-detection
        #[arg(long, value_name = "PATH")]
        chrome_path: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            file,
            username,
            two_factor,
            chrome_path,
            port,
            profile,
        } => commands::run::execute(commands::run::RunArgs {
            file,
            username,
            two_factor,
            chrome_path,
            port,
            profile,
            format: cli.format,
        }),
        Commands::Check { file } => commands::check::execute(&file, cli.format),
        Commands::Chrome { chrome_path } => commands::chrome::execute(chrome_path),
        Commands::Completion { shell } => commands::completion::execute(shell, &mut Cli::command()),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("pagefollow_cli=debug,pagefollow_core=debug,pagefollow_browser=debug")
    } else {
        EnvFilter::new("pagefollow_cli=info,pagefollow_core=info,pagefollow_browser=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
