use serde::Serialize;
use serde_json::Value;

/// Everything the team page of the upstream service shows: the banner, the
/// latest result, and the recent match history in upstream order.
#[derive(Debug, Clone, Serialize)]
pub struct TeamMatchesView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_banner_url: Option<String>,
    pub latest_match: MatchRecord,
    pub recent_matches: Vec<MatchRecord>,
}

/// A single normalized match.
///
/// Fields mirror the upstream payload one to one; the only rename is
/// `competing_team_logo` to `competing_team_logo_url`. An upstream field
/// that was absent stays `None` here and is skipped when serializing, so a
/// record never carries keys its source payload did not.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub umpires: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub man_of_the_match: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competing_team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competing_team_logo_url: Option<String>,
    /// Innings breakdowns are carried through untyped and unmodified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_innings: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_innings: Option<Value>,
    /// `"Won"`, `"Lost"` or `"Drawn"` by upstream convention, but carried
    /// verbatim; any other value simply lands in no tally bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_status: Option<String>,
}
