//! ABG interpretation command line binary.

use std::process::ExitCode;

use abg_cli::{App, Cli, DraftStore};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Logs go to stderr so report output stays clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let draft_dir = cli.draft_dir.clone().unwrap_or_else(DraftStore::default_dir);
    tracing::debug!("Locale {}, draft directory {}", cli.locale, draft_dir.display());

    let app = App::new(cli.locale, draft_dir);
    let mut out = std::io::stdout().lock();
    match app.run(&cli.command, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
