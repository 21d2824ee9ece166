use serde::{Deserialize, Serialize};

const APP_NAME: &str = "dialscope";
const FILE_NAME: Option<&str> = None;

/// Fallback language for metadata descriptions.
pub const DEFAULT_LANG: &str = "en";

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct UserConfig {
  /// Language for metadata descriptions (defaults to "en").
  pub lang: Option<String>,
  /// Geolocation endpoint override (defaults to the ipinfo.io JSON URL).
  pub geo_url: Option<String>,
}

/// Read ~/.config/rs.dialscope/default-config.toml (or OS equivalent).
pub fn load() -> UserConfig {
  confy::load(APP_NAME, FILE_NAME).unwrap_or_default()
}

pub fn store(cfg: &UserConfig) -> anyhow::Result<()> {
  confy::store(APP_NAME, FILE_NAME, cfg).map_err(Into::into)
}
