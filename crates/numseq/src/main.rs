//! numseq: Fibonacci and perfect-number calculator.

use std::process::ExitCode;

use numseq_cli::CliPresenter;
use numseq_lib::{app, config, errors};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    // Initialize tracing; stdout is reserved for results.
    // RUST_LOG wins when set, otherwise the level follows --verbose.
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            CliPresenter::new(config.verbose, config.quiet).present_error(&format!("{err:#}"));
            let code = errors::exit_code(&err);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
