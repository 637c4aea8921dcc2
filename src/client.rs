use super::*;

/// Client for the Hacker News API.
///
/// Holds only an immutable [`Config`] and a transport handle, so a single
/// instance is safely shared across concurrent calls; every operation is an
/// independent request/response exchange with no state between calls.
#[derive(Clone, Debug)]
pub struct Client {
  config: Config,
  http: reqwest::Client,
}

impl Default for Client {
  fn default() -> Self {
    Self::new()
  }
}

impl Client {
  /// The number of items the original API docs use as the default page size.
  pub const DEFAULT_STORY_COUNT: usize = 10;

  /// Ask Stories as an array of resolved items (default count: 10; upstream
  /// documents at most 200 ids).
  pub async fn ask_stories(&self, count: usize) -> Result<Response<Vec<Item>>> {
    self.stories(StoryList::Ask, count).await
  }

  /// Best Stories as an array of resolved items (default count: 10; upstream
  /// documents at most 500 ids).
  pub async fn best_stories(
    &self,
    count: usize,
  ) -> Result<Response<Vec<Item>>> {
    self.stories(StoryList::Best, count).await
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  async fn fetch_item(&self, id: u64) -> Result<Item> {
    Ok(self.get_json(&format!("/item/{id}.json")).await?.data)
  }

  async fn get_json<T: DeserializeOwned>(
    &self,
    path: &str,
  ) -> Result<Response<T>> {
    let url = format!("{}{path}", self.config.base_url);

    tracing::debug!(%url, "sending GET request");

    let response = self.http.get(&url).send().await?;

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.text().await?;

    if !status.is_success() {
      return Err(Error::Status { body, status });
    }

    Ok(Response {
      data: serde_json::from_str(&body)?,
      headers,
      status,
      status_text: status.canonical_reason().unwrap_or_default().to_string(),
    })
  }

  /// The item with the given id, or `None` when the API answers `null` for
  /// an id that does not exist. The `null` is propagated as received, never
  /// substituted with a default item.
  pub async fn item(&self, id: u64) -> Result<Response<Option<Item>>> {
    self.get_json(&format!("/item/{id}.json")).await
  }

  /// Job Stories as an array of resolved items (default count: 10; upstream
  /// documents at most 200 ids).
  pub async fn job_stories(&self, count: usize) -> Result<Response<Vec<Item>>> {
    self.stories(StoryList::Job, count).await
  }

  pub fn new() -> Self {
    Self::with_config(Config::default())
  }

  /// New Stories as an array of resolved items (default count: 10; upstream
  /// documents at most 500 ids).
  pub async fn new_stories(&self, count: usize) -> Result<Response<Vec<Item>>> {
    self.stories(StoryList::New, count).await
  }

  /// Show Stories as an array of resolved items (default count: 10; upstream
  /// documents at most 200 ids).
  pub async fn show_stories(
    &self,
    count: usize,
  ) -> Result<Response<Vec<Item>>> {
    self.stories(StoryList::Show, count).await
  }

  /// Up to `count` resolved items from the given story list, in the order
  /// the list endpoint returned their ids.
  ///
  /// Issues one request for the id list, then one request per id, each
  /// issued only after the previous completed, stopping once `count` items
  /// are collected or the list is exhausted. The envelope's status, status
  /// text, and headers come from the list request. Any failing request
  /// aborts the whole call; partial results are never returned.
  pub async fn stories(
    &self,
    list: StoryList,
    count: usize,
  ) -> Result<Response<Vec<Item>>> {
    let ids = self.story_ids(list).await?;

    let mut items = Vec::with_capacity(count.min(ids.data.len()));

    for &id in ids.data.iter().take(count) {
      items.push(self.fetch_item(id).await?);
    }

    Ok(Response {
      data: items,
      headers: ids.headers,
      status: ids.status,
      status_text: ids.status_text,
    })
  }

  /// The raw ordered id list for the given story list, exactly as received,
  /// with no truncation.
  pub async fn story_ids(
    &self,
    list: StoryList,
  ) -> Result<Response<Vec<u64>>> {
    self.get_json(&format!("/{}.json", list.endpoint())).await
  }

  /// Top Stories as an array of resolved items (default count: 10; upstream
  /// documents at most 500 ids).
  pub async fn top_stories(&self, count: usize) -> Result<Response<Vec<Item>>> {
    self.stories(StoryList::Top, count).await
  }

  /// The raw ordered Top Stories id list.
  pub async fn top_story_ids(&self) -> Result<Response<Vec<u64>>> {
    self.story_ids(StoryList::Top).await
  }

  /// Recently changed item and profile ids.
  pub async fn updates(&self) -> Result<Response<Update>> {
    self.get_json("/updates").await
  }

  pub fn with_base_url(base_url: &str) -> Self {
    Self::with_config(Config::new(base_url, "v0"))
  }

  pub fn with_config(config: Config) -> Self {
    Self::with_http_client(reqwest::Client::new(), config)
  }

  /// Build a client around an externally configured transport. Timeout and
  /// proxy behavior of `http` are inherited unchanged.
  pub fn with_http_client(http: reqwest::Client, config: Config) -> Self {
    Self { config, http }
  }
}
