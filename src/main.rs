//! relsign - Resolve release signing credentials for a build.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use relsign::cli::output;
use relsign::cli::{execute, Cli};
use relsign::core::constants;
use relsign::error::{ConfigError, Error, SecretsError, SigningError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("relsign=debug")
        } else {
            EnvFilter::new("relsign=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, &cli.project) {
        let suggestion = match &e {
            Error::Signing(SigningError::MissingReleaseSecrets { .. }) => Some("run: relsign init"),
            Error::Signing(SigningError::IncompleteSigningConfig { .. }) => {
                Some("run: relsign check")
            }
            Error::Secrets(SecretsError::Malformed { .. }) => {
                Some("each line must be key=value or a # comment")
            }
            Error::Config(ConfigError::Parse(_)) => Some("check .relsign.toml"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
