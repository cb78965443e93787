use std::io;
use std::sync::Once;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod render;
mod session;

pub use render::*;
pub use session::{MenuChoice, Session};

static TRACING_INIT: Once = Once::new();

/// Tally - in-memory personal finance ledger
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Track expenses, incomes and progress toward a savings goal")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format for listings and reports
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_tracing(self.verbose);

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = Session::new(stdin.lock(), stdout.lock(), self.format);

        if !self.no_banner {
            session.print_banner()?;
        }

        session.run()
    }
}

/// Initializes the global tracing subscriber once, writing to stderr so that
/// log lines never interleave with menu output on stdout.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let default_level = if verbose { "tally=debug" } else { "tally=error" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init();
    });
}
