use super::*;

/// Recently changed item ids and user profile ids, as reported by the
/// `/updates` endpoint. Upstream documents no ordering for either list.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Update {
  pub items: Vec<u64>,
  pub profiles: Vec<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_items_and_profiles() {
    let update = serde_json::from_str::<Update>(
      r#"{"items":[8863,8952,9224],"profiles":["pg","dang"]}"#,
    )
    .unwrap();

    assert_eq!(update.items, vec![8863, 8952, 9224]);
    assert_eq!(update.profiles, vec!["pg", "dang"]);
  }

  #[test]
  fn deserializes_empty_lists() {
    let update =
      serde_json::from_str::<Update>(r#"{"items":[],"profiles":[]}"#).unwrap();

    assert!(update.items.is_empty());
    assert!(update.profiles.is_empty());
  }
}
