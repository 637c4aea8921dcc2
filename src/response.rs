use super::*;

/// Envelope around every decoded payload: the HTTP status, status text, and
/// headers of the exchange that produced it.
///
/// A `Response` exists only for a successful transport exchange whose body
/// decoded cleanly; failures surface as [`Error`](crate::Error) instead,
/// never as an envelope with error contents.
#[derive(Clone, Debug)]
pub struct Response<T> {
  pub data: T,
  pub headers: HeaderMap,
  pub status: StatusCode,
  pub status_text: String,
}
