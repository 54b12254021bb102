//! dash - admin dashboard client
//!
//! # Examples
//!
//! ```bash
//! # Sign in, then pull the user list
//! dash login --email admin@example.com --password secret
//! dash refresh --pretty
//!
//! # Add a user and view the analytics built from the cached list
//! dash add-user --name Ada --email ada@example.com --region EU
//! dash analytics --months 12
//! ```

use dash_cli::{App, Cli, logger};
use dash_config::Config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(server) = cli.server {
        config.api.base_url = Some(server);
    }

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    ) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    config.log_summary();

    let app = match App::from_config(&config).await {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    match app.execute(cli.command).await {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
