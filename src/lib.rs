#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::struct_excessive_bools)]

use anyhow::Result;
use std::process::ExitCode;

// Declare library modules
mod app;
mod cli;
pub mod providers;
mod results;
mod steps;
mod user_config;

/// Runs the main application logic.
///
/// This function parses command-line arguments, scans the target phone
/// number through the metadata provider, optionally enriches the report
/// with public-IP geolocation, and prints (and optionally persists) the
/// results.
///
/// # Errors
///
/// Returns an error if initialization fails (e.g., building the HTTP
/// client) or if printing the final results in JSON format fails.
pub async fn run() -> Result<ExitCode> {
  let mut app = app::App::new()?;

  app.run().await
}
