#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::struct_excessive_bools)]

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
  // Install the default crypto provider for rustls
  let _ = rustls::crypto::ring::default_provider().install_default();

  match dialscope::run().await {
    Ok(code) => code,
    Err(e) => {
      // The original tool reports unexpected failures on stdout.
      println!("Error: {e}");
      ExitCode::FAILURE
    }
  }
}
