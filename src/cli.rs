use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "dialscope", version)]
#[command(
  about = "Look up phone number metadata (validity, type, carrier, region) and optional IP geolocation.",
  long_about = "A command-line utility that validates a phone number and prints metadata derived \
from the libphonenumber dataset (validity, possibility, number type, carrier, region, timezones), \
optionally enriched with a best-effort geolocation of the caller's public IP address."
)]
pub struct Cli {
  /// Target phone number with country calling code, digits only (no `+`).
  pub number: String,

  /// Save the metadata section to `<number>.txt` in the current directory.
  #[arg(short = 'o', long)]
  pub output: bool,

  /// Skip the public-IP geolocation stage.
  #[arg(long = "no-ip")]
  pub no_ip: bool,

  /// Output results in JSON format instead of human-readable text.
  #[arg(long)]
  pub json: bool,

  /// Language for metadata descriptions.
  /// Overrides the `lang` entry of the user config file if both are set.
  #[arg(long, value_name = "LANG")]
  pub lang: Option<String>,

  /// Geolocation endpoint to query instead of the default ipinfo-style URL.
  /// Overrides the `geo_url` entry of the user config file if both are set.
  #[arg(long = "geo-url", value_name = "URL")]
  pub geo_url: Option<String>,

  /// Persist --lang/--geo-url values that are present into the user config file.
  #[arg(long)]
  pub save_config: bool,

  /// Print the current merged configuration and exit.
  #[arg(long)]
  pub config_show: bool,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn make_args(args: &[&str]) -> Vec<String> {
    std::iter::once("dialscope".to_string())
      .chain(args.iter().map(std::string::ToString::to_string))
      .collect()
  }

  #[test]
  fn test_basic_number() {
    let args = make_args(&["14155550123"]);
    let cli = Cli::try_parse_from(args).expect("Should parse basic number");
    assert_eq!(cli.number, "14155550123");
    assert!(!cli.output);
    assert!(!cli.no_ip);
    assert!(!cli.json);
    assert!(cli.lang.is_none());
    assert!(cli.geo_url.is_none());
  }

  #[test]
  fn test_output_short_flag() {
    let args = make_args(&["14155550123", "-o"]);
    let cli = Cli::try_parse_from(args).expect("Should parse -o flag");
    assert!(cli.output);
  }

  #[test]
  fn test_output_long_flag() {
    let args = make_args(&["14155550123", "--output"]);
    let cli = Cli::try_parse_from(args).expect("Should parse --output flag");
    assert!(cli.output);
  }

  #[test]
  fn test_no_ip_flag() {
    let args = make_args(&["14155550123", "--no-ip"]);
    let cli = Cli::try_parse_from(args).expect("Should parse --no-ip flag");
    assert!(cli.no_ip);
    assert!(!cli.output);
  }

  #[test]
  fn test_lang_and_geo_url() {
    let args = make_args(&[
      "4915112345678",
      "--lang",
      "de",
      "--geo-url",
      "https://example.test/json",
    ]);
    let cli = Cli::try_parse_from(args).expect("Should parse value options");
    assert_eq!(cli.lang.as_deref(), Some("de"));
    assert_eq!(cli.geo_url.as_deref(), Some("https://example.test/json"));
  }

  #[test]
  fn test_combination_flags() {
    let args = make_args(&["442071838750", "--json", "--no-ip", "-o"]);
    let cli =
      Cli::try_parse_from(args).expect("Should parse combination of flags");
    assert_eq!(cli.number, "442071838750");
    assert!(cli.json);
    assert!(cli.no_ip);
    assert!(cli.output);
    assert!(!cli.save_config);
  }

  #[test]
  fn test_missing_number_arg_fails() {
    let args = make_args(&[]);
    let result = Cli::try_parse_from(args);
    assert!(
      result.is_err(),
      "Parsing should fail if the number argument is missing"
    );
    assert!(
      matches!(
        result.unwrap_err().kind(),
        clap::error::ErrorKind::MissingRequiredArgument
      ),
      "Error kind should be MissingRequiredArgument"
    );
  }

  #[test]
  fn test_unknown_flag_fails() {
    let args = make_args(&["14155550123", "--frobnicate"]);
    assert!(Cli::try_parse_from(args).is_err());
  }
}
