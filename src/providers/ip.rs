//! Best-effort public-IP geolocation using an ipinfo-style JSON endpoint.

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Default endpoint; answers for the caller's own public IP.
pub const DEFAULT_URL: &str = "https://ipinfo.io/json";

/// Geolocation data for the caller's public IP address.
///
/// Fields are based on the ipinfo.io JSON response structure. This is about
/// the machine running the lookup, not the phone number being scanned.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Info {
  /// The public IP address the service saw.
  #[serde(default)]
  pub ip: String,

  #[serde(default)]
  pub city: String,

  #[serde(default)]
  pub region: String,

  #[serde(default)]
  pub country: String,

  /// Coordinates as `"<lat>,<lon>"`, when the service provides them.
  pub loc: Option<String>,
}

impl Info {
  /// Parses `loc` into `(latitude, longitude)`.
  ///
  /// Splits strictly on the first comma; `None` when the field is absent
  /// or either half fails to parse as a float.
  #[must_use]
  pub fn coordinates(&self) -> Option<(f64, f64)> {
    let (lat, lon) = self.loc.as_deref()?.split_once(',')?;
    Some((lat.trim().parse().ok()?, lon.trim().parse().ok()?))
  }
}

/// Fetches geolocation info for the caller's public IP.
///
/// # Errors
/// - Failed HTTP request
/// - Non-success status code
/// - Deserialization error
pub async fn fetch_ip_info(url: &str, http_client: &Client) -> Result<Info> {
  let response = http_client
    .get(url)
    .send()
    .await
    .with_context(|| format!("Failed to send request to {url}"))?;

  if !response.status().is_success() {
    bail!(
      "IP geolocation request failed with status: {}",
      response.status()
    );
  }

  response
    .json::<Info>()
    .await
    .context("Failed to deserialize IP geolocation response")
}
