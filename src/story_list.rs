/// The story list endpoints exposed by the Hacker News API.
///
/// The upstream documentation caps top/new/best at 500 ids and
/// ask/show/job at 200; those maxima are advisory and not enforced here.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StoryList {
  Ask,
  Best,
  Job,
  New,
  Show,
  Top,
}

impl StoryList {
  pub(crate) fn endpoint(self) -> &'static str {
    match self {
      Self::Ask => "askstories",
      Self::Best => "beststories",
      Self::Job => "jobstories",
      Self::New => "newstories",
      Self::Show => "showstories",
      Self::Top => "topstories",
    }
  }
}
