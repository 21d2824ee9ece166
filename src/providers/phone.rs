//! Phone number metadata backed by the `phonenumber` crate.
//!
//! All numbering-plan intelligence is delegated to the library; this module
//! only adapts it behind the [`MetadataProvider`] trait so the pipeline can
//! run against any equivalent metadata source (including test stubs).

use phonenumber::metadata::DATABASE;
use phonenumber::{Mode, PhoneNumber};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by a metadata provider.
///
/// A parse failure is an ordinary outcome for user-supplied input and is
/// modelled as a value instead of a panic or a swallowed boolean.
#[derive(Debug, Error)]
pub enum LookupError {
  /// The library could not make sense of the input at all.
  #[error("unparseable phone number: {0}")]
  Unparseable(String),
}

/// Metadata collected for a single phone number.
///
/// Produced fresh per invocation and discarded after printing; `carrier`,
/// `region` and `time_zones` may be empty when the provider has no data for
/// the number range.
#[derive(Debug, Serialize, Clone, Default)]
pub struct Info {
  /// Country calling code (e.g. 1, 44, 49).
  pub country_code: u16,
  /// National significant number.
  pub national_number: u64,
  /// International representation of the parsed number.
  pub formatted: String,
  pub is_valid: bool,
  pub is_possible: bool,
  /// Number-type classification label (e.g. "Mobile", "FixedLine").
  pub number_type: String,
  /// Carrier name, empty when unknown.
  pub carrier: String,
  /// Geographic area associated with the number range, empty when unknown.
  pub region: String,
  /// Timezones associated with the number range, possibly empty.
  pub time_zones: Vec<String>,
}

/// The pluggable phone-number metadata capability.
///
/// The default implementation is [`Libphonenumber`]; substituting another
/// provider must not require touching the pipeline.
pub trait MetadataProvider {
  /// Opaque parsed-number handle the remaining operations work on.
  type Number;

  /// Parses a digit string (country calling code first, no `+` prefix).
  ///
  /// # Errors
  ///
  /// Returns [`LookupError::Unparseable`] when the input cannot be parsed
  /// as a phone number at all.
  fn parse(&self, digits: &str) -> Result<Self::Number, LookupError>;

  fn is_valid(&self, number: &Self::Number) -> bool;
  fn is_possible(&self, number: &Self::Number) -> bool;
  fn country_code(&self, number: &Self::Number) -> u16;
  fn national_number(&self, number: &Self::Number) -> u64;
  fn formatted(&self, number: &Self::Number) -> String;
  fn number_type(&self, number: &Self::Number) -> String;
  fn carrier_name(&self, number: &Self::Number, lang: &str) -> String;
  fn region_description(&self, number: &Self::Number, lang: &str) -> String;
  fn time_zones(&self, number: &Self::Number) -> Vec<String>;
}

/// Runs the metadata pipeline for a raw digit string.
///
/// `Ok` with `is_valid == false` means the input parsed but fails the
/// numbering plan; `Err` means it did not parse at all. Both are treated
/// as an invalid number by the caller.
pub fn scan<P: MetadataProvider>(
  provider: &P,
  digits: &str,
  lang: &str,
) -> Result<Info, LookupError> {
  let number = provider.parse(digits)?;

  Ok(Info {
    country_code: provider.country_code(&number),
    national_number: provider.national_number(&number),
    formatted: provider.formatted(&number),
    is_valid: provider.is_valid(&number),
    is_possible: provider.is_possible(&number),
    number_type: provider.number_type(&number),
    carrier: provider.carrier_name(&number, lang),
    region: provider.region_description(&number, lang),
    time_zones: provider.time_zones(&number),
  })
}

/// Default provider backed by the `phonenumber` crate.
///
/// The crate ships the libphonenumber numbering-plan metadata but not the
/// separate carrier, geocoder, or timezone data sets, so those operations
/// report empty values here. The formatter renders empty values as absent.
pub struct Libphonenumber;

/// Parsed handle pairing the library number with the viability of the raw
/// input, captured once at parse time.
pub struct Parsed {
  number: PhoneNumber,
  possible: bool,
}

impl MetadataProvider for Libphonenumber {
  type Number = Parsed;

  fn parse(&self, digits: &str) -> Result<Parsed, LookupError> {
    let international = format!("+{digits}");
    let number = phonenumber::parse(None, &international)
      .map_err(|e| LookupError::Unparseable(e.to_string()))?;
    let possible = phonenumber::is_viable(&international);
    Ok(Parsed { number, possible })
  }

  fn is_valid(&self, parsed: &Parsed) -> bool {
    phonenumber::is_valid(&parsed.number)
  }

  fn is_possible(&self, parsed: &Parsed) -> bool {
    parsed.possible
  }

  fn country_code(&self, parsed: &Parsed) -> u16 {
    parsed.number.country().code()
  }

  fn national_number(&self, parsed: &Parsed) -> u64 {
    parsed.number.national().value()
  }

  fn formatted(&self, parsed: &Parsed) -> String {
    phonenumber::format(&parsed.number)
      .mode(Mode::International)
      .to_string()
  }

  fn number_type(&self, parsed: &Parsed) -> String {
    format!("{:?}", parsed.number.number_type(&DATABASE))
  }

  fn carrier_name(&self, _parsed: &Parsed, _lang: &str) -> String {
    // No carrier tables in the library; unknown renders as empty.
    String::new()
  }

  fn region_description(&self, parsed: &Parsed, _lang: &str) -> String {
    parsed
      .number
      .country()
      .id()
      .map(|id| format!("{id:?}"))
      .unwrap_or_default()
  }

  fn time_zones(&self, _parsed: &Parsed) -> Vec<String> {
    Vec::new()
  }
}
