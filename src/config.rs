/// Base URL of the production Hacker News API.
pub const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

/// Immutable client configuration.
///
/// `version` is the API version tag the base URL points at. It is carried
/// for documentation purposes only; no request embeds it separately.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
  pub base_url: String,
  pub version: String,
}

impl Config {
  /// Build a config for `base_url`, trimming a trailing slash so paths can
  /// be appended verbatim.
  pub fn new(base_url: &str, version: &str) -> Self {
    Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      version: version.to_string(),
    }
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::new(DEFAULT_BASE_URL, "v0")
  }
}
