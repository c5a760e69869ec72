use tracing::instrument;

use crate::error::Result;
use crate::ipl_api;
use crate::model::{Team, TeamMatchesView};

/// The main entry point for the ccbp.in IPL API.
///
/// `IplClient` wraps a [`reqwest::Client`] and exposes typed methods for the
/// franchise index and per-team match feeds.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> ipl_stats::Result<()> {
/// use ipl_stats::IplClient;
///
/// let client = IplClient::new();
/// let view = client.get_team_matches("RCB").await?;
/// let tally = view.result_tally();
/// println!("{} won, {} lost, {} drawn", tally.won, tally.lost, tally.drawn);
/// # Ok(())
/// # }
/// ```
pub struct IplClient {
    http: reqwest::Client,
    base_url: String,
}

impl IplClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    /// The upstream enforces no timeout of its own, so bounding a hung
    /// request is the caller's job.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            http: client,
            base_url: ipl_api::BASE_URL.to_string(),
        }
    }

    /// Point the client at a different base endpoint (mock servers,
    /// mirrors). The default is `https://apis.ccbp.in/ipl`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Fetch the franchise index.
    #[instrument(skip(self))]
    pub async fn get_teams(&self) -> Result<Vec<Team>> {
        ipl_api::teams::get_teams(&self.http, &self.base_url).await
    }

    /// Fetch the banner, latest match, and recent match history for a team.
    ///
    /// `team_id` is appended to the base endpoint verbatim; unknown codes
    /// are not rejected here and surface as whatever the upstream answers
    /// for them (typically a shape failure).
    #[instrument(skip(self))]
    pub async fn get_team_matches(&self, team_id: &str) -> Result<TeamMatchesView> {
        ipl_api::team_matches::get_team_matches(&self.http, &self.base_url, team_id).await
    }
}

impl Default for IplClient {
    fn default() -> Self {
        Self::new()
    }
}
