//! qrstamp CLI entrypoint
//!
//! Owns process-exit policy: directory-creation failure is fatal (exit 1),
//! everything else is logged and the process exits normally.

use clap::Parser;
use qrstamp::{Config, Error, RenderOptions, generate, logging, output};
use std::env;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "qrstamp", version, about = "Generate a QR code from a URL")]
struct Cli {
    /// The URL to encode to QR
    #[arg(long, value_name = "STRING", default_value = "https://google.com")]
    url: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_env();
    logging::init(&config.logging);

    let out_dir = match env::current_dir() {
        Ok(cwd) => cwd.join(&config.qr_dir),
        Err(err) => {
            error!("Failed to resolve working directory: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Without an output location no further work is meaningful.
    if let Err(err) = output::ensure_dir(&out_dir) {
        error!("Failed to create directory {}: {err}", out_dir.display());
        return ExitCode::FAILURE;
    }

    let path = output::timestamped_path(&out_dir);
    let options = RenderOptions::with_colors(&config.fill_color, &config.back_color);

    match generate(&cli.url, &path, &options) {
        Ok(()) => info!("QR code saved successfully at {}", path.display()),
        Err(Error::InvalidUrl(url)) => error!("Invalid URL provided: {url}"),
        Err(err) => error!("An error has occurred while creating QR code: {err}"),
    }

    ExitCode::SUCCESS
}
