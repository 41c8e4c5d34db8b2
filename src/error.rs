use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("No browser window available")]
    NoWindow,
    #[error("Session storage unavailable: {0}")]
    Storage(String),
    #[error("Couldn't replace history entry: {0}")]
    History(String),
    #[error("Couldn't assign location: {0}")]
    Location(String),
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Undecodable redirect route: {0}")]
    Decode(String),
    #[error("Client router unavailable")]
    RouterUnavailable,
    #[error("Client router failed: {0}")]
    Router(String),
    #[error("Couldn't install click listener: {0}")]
    Listener(String),
    #[error("Unknown build mode: {0}")]
    BuildMode(String),
    #[error("Safety timeout ({safety_ms}ms) must exceed the minimum display time ({min_display_ms}ms)")]
    Timings { min_display_ms: u64, safety_ms: u64 },
}
