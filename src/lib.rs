//! Client library for the Hacker News API.
//!
//! [`Client`] issues GET requests against the public read-only JSON API and
//! wraps every decoded payload in a [`Response`] envelope carrying the HTTP
//! status, status text, and headers of the exchange. Transport failures,
//! non-success statuses, and undecodable bodies surface as [`Error`]; the
//! client performs no retries, no caching, and no authentication.
//!
//! ```no_run
//! # async fn run() -> libhn::Result<()> {
//! let client = libhn::Client::new();
//!
//! let top = client.top_stories(10).await?;
//!
//! for item in &top.data {
//!   println!("{}", item.title.as_deref().unwrap_or("(untitled)"));
//! }
//! # Ok(())
//! # }
//! ```

use {
  reqwest::{StatusCode, header::HeaderMap},
  serde::{Deserialize, de::DeserializeOwned},
  std::fmt,
};

mod client;
mod config;
mod error;
mod item;
mod response;
mod story_list;
mod update;

pub use {
  client::Client,
  config::{Config, DEFAULT_BASE_URL},
  error::Error,
  item::{Item, ItemType},
  response::Response,
  story_list::StoryList,
  update::Update,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;
