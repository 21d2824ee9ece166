use crate::providers::{ip, phone};
use anyhow::{Context, Result};
use console::{style, Style};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Default)]
pub struct Report {
  pub number: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub number_info: Option<phone::Info>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ip_info: Option<ip::Info>,

  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub skipped_steps: Vec<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub errors: Vec<String>,
}

/// Helper: coloured keys so the summary is easy to scan.
fn key(s: &str) -> console::StyledObject<&str> {
  style(s).bold().cyan()
}

/// Helper: print a section header ("📞 Phone Number") once.
fn header(title: &str, emoji: &str) {
  println!(
    "\n{} {}",
    style(emoji).bold(),
    Style::new().bold().underlined().apply_to(title)
  );
}

/// Renders the metadata section as plain lines, one field per line.
///
/// This is the exact content the `-o` file sink persists; the styled
/// console output mirrors it. The timezone line is omitted entirely when
/// the provider reported no timezones, and only the first entry is shown
/// otherwise.
#[must_use]
pub fn metadata_lines(info: &phone::Info) -> Vec<String> {
  let mut lines = vec![
    format!("Parsed: {}", info.formatted),
    format!("Country Code: {}", info.country_code),
    format!("National Number: {}", info.national_number),
    format!("Valid: {}", info.is_valid),
    format!("Possible: {}", info.is_possible),
    format!("Type: {}", info.number_type),
    format!("Carrier: {}", info.carrier),
    format!("Region: {}", info.region),
  ];
  if let Some(zone) = info.time_zones.first() {
    lines.push(format!("Time Zone: {zone}"));
  }
  lines
}

fn print_number_info(info: Option<&phone::Info>) {
  header("Phone Number", "📞");
  match info {
    Some(i) => {
      println!("  {} {}", key("Parsed:"), i.formatted);
      println!("  {} {}", key("Country Code:"), i.country_code);
      println!("  {} {}", key("National Number:"), i.national_number);
      println!("  {} {}", key("Valid:"), i.is_valid);
      println!("  {} {}", key("Possible:"), i.is_possible);
      println!("  {} {}", key("Type:"), i.number_type);
      println!("  {} {}", key("Carrier:"), i.carrier);
      println!("  {} {}", key("Region:"), i.region);
      if let Some(zone) = i.time_zones.first() {
        println!("  {} {zone}", key("Time Zone:"));
      }
    }
    None => println!("  {}", style("Not available").dim()),
  }
}

fn print_ip_info(info: &ip::Info) {
  header("IP Geolocation", "🌐");
  println!("  {} {}", key("IP:"), info.ip);
  println!("  {} {}", key("City:"), info.city);
  println!("  {} {}", key("Region:"), info.region);
  println!("  {} {}", key("Country:"), info.country);
  if let Some((lat, lon)) = info.coordinates() {
    println!("  {} {lat}", key("Latitude:"));
    println!("  {} {lon}", key("Longitude:"));
  }
}

pub fn print_human_readable(results: &Report) {
  println!(
    "{} {}",
    style("•").magenta(),
    Style::new()
      .bold()
      .magenta()
      .apply_to(format!("Scan Results for: {}", &results.number))
  );

  print_number_info(results.number_info.as_ref());

  // IP geolocation is best-effort: when the lookup failed or was skipped,
  // the section is not printed at all.
  if let Some(ip) = &results.ip_info {
    print_ip_info(ip);
  }

  if !results.skipped_steps.is_empty() {
    header("Skipped Steps", "⚠");
    for s in &results.skipped_steps {
      println!("  {}", style(s).yellow());
    }
  }

  // Same stream as the header, so a redirected stdout keeps the section
  // intact.
  if !results.errors.is_empty() {
    header("Warnings", "❌");
    for e in &results.errors {
      println!("  {}", style(e).red().bold());
    }
  }
}

pub fn print_json(results: &Report) -> Result<()> {
  serde_json::to_string_pretty(results)
    .map(|s| println!("{s}"))
    .context("Failed to serialize results to JSON")
}

/// Writes the metadata section to `<number>.txt` under `dir`, truncating
/// any existing file.
///
/// The raw input string is used as the filename stem without sanitization.
///
/// # Errors
///
/// Returns an error when the file cannot be written.
pub fn write_metadata_file(
  dir: &Path,
  number: &str,
  info: &phone::Info,
) -> Result<PathBuf> {
  let path = dir.join(format!("{number}.txt"));
  let mut content = metadata_lines(info).join("\n");
  content.push('\n');
  fs::write(&path, content)
    .with_context(|| format!("Failed to write {}", path.display()))?;
  Ok(path)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_info() -> phone::Info {
    phone::Info {
      country_code: 1,
      national_number: 6_502_530_000,
      formatted: "+1 650-253-0000".to_string(),
      is_valid: true,
      is_possible: true,
      number_type: "FixedLineOrMobile".to_string(),
      carrier: String::new(),
      region: "US".to_string(),
      time_zones: Vec::new(),
    }
  }

  #[test]
  fn metadata_lines_contain_parsed_and_validity() {
    let lines = metadata_lines(&sample_info());
    assert!(lines.contains(&"Parsed: +1 650-253-0000".to_string()));
    assert!(lines.contains(&"Valid: true".to_string()));
    assert!(lines.contains(&"Possible: true".to_string()));
  }

  #[test]
  fn metadata_lines_omit_timezone_when_empty() {
    let lines = metadata_lines(&sample_info());
    assert!(!lines.iter().any(|l| l.starts_with("Time Zone:")));
  }

  #[test]
  fn metadata_lines_show_only_first_timezone() {
    let mut info = sample_info();
    info.time_zones =
      vec!["America/Los_Angeles".to_string(), "America/Denver".to_string()];
    let lines = metadata_lines(&info);
    assert_eq!(
      lines.last().map(String::as_str),
      Some("Time Zone: America/Los_Angeles")
    );
    assert_eq!(
      lines.iter().filter(|l| l.starts_with("Time Zone:")).count(),
      1
    );
  }

  #[test]
  fn metadata_lines_keep_empty_carrier_as_blank() {
    let lines = metadata_lines(&sample_info());
    assert!(lines.contains(&"Carrier: ".to_string()));
  }

  #[test]
  fn write_metadata_file_persists_metadata_section() {
    let dir = tempfile::tempdir().expect("tempdir");
    let info = sample_info();
    let path = write_metadata_file(dir.path(), "16502530000", &info)
      .expect("should write");

    assert_eq!(path, dir.path().join("16502530000.txt"));
    let content = fs::read_to_string(&path).expect("should read back");
    let mut expected = metadata_lines(&info).join("\n");
    expected.push('\n');
    assert_eq!(content, expected);
  }

  #[test]
  fn write_metadata_file_truncates_existing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("123.txt");
    fs::write(&path, "stale content that is much longer than the report")
      .expect("seed file");

    let written = write_metadata_file(dir.path(), "123", &sample_info())
      .expect("should overwrite");
    assert_eq!(written, path);
    let content = fs::read_to_string(&path).expect("should read back");
    assert!(!content.contains("stale"));
    assert!(content.starts_with("Parsed: "));
  }

  #[test]
  fn human_readable_report_renders_warning_sections() {
    let report = Report {
      number: "16502530000".to_string(),
      number_info: Some(sample_info()),
      skipped_steps: vec!["IP geolocation (skipped by --no-ip flag)".into()],
      errors: vec!["IP geolocation lookup failed: refused".into()],
      ..Default::default()
    };
    // All sections, warnings included, go to stdout.
    print_human_readable(&report);
  }

  #[test]
  fn report_serializes_without_empty_sections() {
    let report = Report {
      number: "16502530000".to_string(),
      number_info: Some(sample_info()),
      ..Default::default()
    };
    let json = serde_json::to_value(&report).expect("should serialize");
    assert!(json.get("ip_info").is_none());
    assert!(json.get("errors").is_none());
    assert_eq!(json["number_info"]["is_valid"], true);
  }
}
