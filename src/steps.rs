use crate::providers::{ip, phone};
use reqwest::Client;

/// Runs the phone-number metadata lookup.
pub fn scan_number_step<P: phone::MetadataProvider>(
  provider: &P,
  digits: &str,
  lang: &str,
) -> Result<phone::Info, String> {
  phone::scan(provider, digits, lang)
    .map_err(|e| format!("Phone number lookup failed: {e}"))
}

/// Fetches geolocation info for the caller's public IP.
pub async fn fetch_ip_step(
  url: &str,
  client: &Client,
) -> Result<ip::Info, String> {
  ip::fetch_ip_info(url, client)
    .await
    .map_err(|e| format!("IP geolocation lookup failed: {e}"))
}
