//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `whoip` library that handles:
//! - Environment variable loading (.env file)
//! - Logger and color initialization
//! - Reporting errors and choosing the exit code
//!
//! All core functionality is implemented in the library crate.

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};

use whoip::app::write_error;
use whoip::error_handling::{EXIT_FAILURE, EXIT_SUCCESS};
use whoip::initialization::{init_color, init_logger_with};
use whoip::{execute, Config};

/// Loads `.env`, reads the configuration and sets up logging and color.
fn initialize() -> Result<Config> {
    // A missing .env file is normal; only the process environment is used then
    let _ = dotenvy::dotenv();

    let config = Config::from_env().context("Invalid configuration")?;
    init_logger_with(config.log_level.into(), config.log_format)
        .context("Failed to initialize logger")?;
    init_color(config.color);

    Ok(config)
}

#[tokio::main]
async fn main() {
    let mut stdout = io::stdout().lock();

    let config = match initialize() {
        Ok(config) => config,
        Err(e) => {
            let _ = write_error(&mut stdout, format!("{e:#}"), None);
            process::exit(EXIT_FAILURE);
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = match execute(&args, &config, &mut stdout).await {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            log::debug!("Exiting after error: {e:?}");
            let detail = e.detail();
            let _ = write_error(&mut stdout, &e, detail.as_deref());
            e.exit_code()
        }
    };

    let _ = stdout.flush();
    process::exit(code);
}
