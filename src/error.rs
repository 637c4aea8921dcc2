use super::*;

/// Errors surfaced by every client operation.
///
/// Errors propagate to the caller unchanged: no retries, no fallback, and no
/// local recovery. Aggregate operations fail atomically, so a single failing
/// request aborts the whole call.
#[derive(Debug)]
pub enum Error {
  /// The response body was not parseable as the expected JSON shape.
  Decode(serde_json::Error),

  /// The server answered with a non-2xx status. The raw body is preserved
  /// rather than being treated as empty data.
  Status { body: String, status: StatusCode },

  /// Connection, DNS, timeout, or body-read failure, surfaced as the
  /// transport reported it.
  Transport(reqwest::Error),
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Decode(err) => write!(f, "failed to decode response body: {err}"),
      Self::Status { body, status } => {
        write!(f, "request failed with status {status}: {body}")
      }
      Self::Transport(err) => write!(f, "transport error: {err}"),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Decode(err) => Some(err),
      Self::Status { .. } => None,
      Self::Transport(err) => Some(err),
    }
  }
}

impl From<reqwest::Error> for Error {
  fn from(err: reqwest::Error) -> Self {
    Self::Transport(err)
  }
}

impl From<serde_json::Error> for Error {
  fn from(err: serde_json::Error) -> Self {
    Self::Decode(err)
  }
}
