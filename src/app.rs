use crate::cli::Cli;
use crate::providers::{ip, phone};
use crate::results::{self, Report};
use crate::steps;
use crate::user_config::{self, UserConfig};
use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::ProgressBar;
use reqwest::Client;
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

// The source script had no timeout at all; a bounded one keeps a dead
// geolocation endpoint from hanging the run.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct App {
  cli: Cli,
  config: UserConfig,
  client: Client,
  results: Report,
}

impl App {
  pub fn new() -> Result<Self> {
    Self::with_cli(Cli::parse())
  }

  pub fn with_cli(cli: Cli) -> Result<Self> {
    let client = Client::builder()
      .user_agent(format!("dialscope/{}", env!("CARGO_PKG_VERSION")))
      .timeout(REQUEST_TIMEOUT)
      .build()?;

    let mut config = user_config::load();
    if cli.lang.is_some() {
      config.lang = cli.lang.clone();
    }
    if cli.geo_url.is_some() {
      config.geo_url = cli.geo_url.clone();
    }
    if cli.save_config {
      user_config::store(&config)?;
    }

    let results = Report {
      number: cli.number.clone(),
      ..Default::default()
    };

    Ok(Self {
      cli,
      config,
      client,
      results,
    })
  }

  fn lang(&self) -> &str {
    self
      .config
      .lang
      .as_deref()
      .unwrap_or(user_config::DEFAULT_LANG)
  }

  fn geo_url(&self) -> &str {
    self.config.geo_url.as_deref().unwrap_or(ip::DEFAULT_URL)
  }

  pub async fn run(&mut self) -> Result<ExitCode> {
    if self.cli.config_show {
      println!("lang = {}", self.lang());
      println!("geo_url = {}", self.geo_url());
      return Ok(ExitCode::SUCCESS);
    }

    // Unparseable and parsed-but-invalid inputs end the run the same way,
    // before any further lookups or file output happen.
    if !self.run_number_scan() {
      self.results.errors.push("Invalid phone number.".to_string());
      if self.cli.json {
        results::print_json(&self.results)?;
      } else {
        println!("{}", style("[!] Invalid phone number.").red().bold());
      }
      return Ok(ExitCode::FAILURE);
    }

    self.run_ip_lookup().await;
    self.print_results()?;
    self.persist_results()?;

    Ok(ExitCode::SUCCESS)
  }

  /// Returns whether the target number parsed and is valid; the metadata
  /// is stored in the report on success.
  fn run_number_scan(&mut self) -> bool {
    match steps::scan_number_step(
      &phone::Libphonenumber,
      &self.cli.number,
      self.lang(),
    ) {
      Ok(info) if info.is_valid => {
        self.results.number_info = Some(info);
        true
      }
      Ok(_) | Err(_) => false,
    }
  }

  async fn run_ip_lookup(&mut self) {
    if self.cli.no_ip {
      self
        .results
        .skipped_steps
        .push("IP geolocation (skipped by --no-ip flag)".to_string());
      return;
    }

    let spinner = if self.cli.json {
      None
    } else {
      let pb = ProgressBar::new_spinner();
      pb.set_message("Fetching IP geolocation info...");
      pb.enable_steady_tick(Duration::from_millis(80));
      Some(pb)
    };

    let outcome = steps::fetch_ip_step(self.geo_url(), &self.client).await;

    if let Some(pb) = spinner {
      pb.finish_and_clear();
    }

    match outcome {
      Ok(info) => self.results.ip_info = Some(info),
      Err(e) => self.results.errors.push(e),
    }
  }

  fn print_results(&self) -> Result<()> {
    if self.cli.json {
      results::print_json(&self.results)
    } else {
      results::print_human_readable(&self.results);
      Ok(())
    }
  }

  fn persist_results(&self) -> Result<()> {
    if !self.cli.output {
      return Ok(());
    }
    let Some(info) = &self.results.number_info else {
      return Ok(());
    };

    let path =
      results::write_metadata_file(Path::new("."), &self.cli.number, info)?;
    if !self.cli.json {
      println!(
        "\n{}",
        style(format!("Saved metadata to {}", path.display())).dim()
      );
    }
    Ok(())
  }
}
