use super::*;

/// A single content unit from the API: story, comment, job, poll, or poll
/// option.
///
/// The upstream returns a sparse, variably-shaped object per type, so every
/// attribute except `id` is optional. Values are decoded exactly as
/// received; nothing is defaulted or filled in.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Item {
  pub by: Option<String>,
  pub dead: Option<bool>,
  pub deleted: Option<bool>,
  pub id: u64,
  pub kids: Option<Vec<u64>>,
  pub parent: Option<u64>,
  pub score: Option<u64>,
  pub text: Option<String>,
  pub time: Option<u64>,
  pub title: Option<String>,
  pub r#type: Option<ItemType>,
  pub url: Option<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
  Comment,
  Job,
  Poll,
  PollOpt,
  Story,
}
