use itertools::Itertools;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::ipl_api;
use crate::model::{MatchRecord, TeamMatchesView};

#[instrument(skip(client, base_url))]
pub(crate) async fn get_team_matches(
    client: &reqwest::Client,
    base_url: &str,
    team_id: &str,
) -> Result<TeamMatchesView> {
    let url = format!("{base_url}/{team_id}");
    let dto: TeamMatchesDto = ipl_api::get_json(client, &url).await?;
    let view = TeamMatchesView::from(dto);
    debug!(
        team_id,
        recent = view.recent_matches.len(),
        "decoded team matches"
    );
    Ok(view)
}

/// Wire envelope of the team matches endpoint. `latest_match_details` and
/// `recent_matches` are required: a payload without them (an upstream error
/// body, say) fails the decode instead of producing a half-empty view.
#[derive(Debug, Deserialize)]
pub(crate) struct TeamMatchesDto {
    team_banner_url: Option<String>,
    latest_match_details: MatchDto,
    recent_matches: Vec<MatchDto>,
}

/// Wire shape of a single match. Every field is optional so that an absent
/// upstream field stays absent through normalization instead of failing the
/// decode.
#[derive(Debug, Deserialize)]
pub(crate) struct MatchDto {
    umpires: Option<Vec<String>>,
    result: Option<String>,
    man_of_the_match: Option<String>,
    id: Option<String>,
    date: Option<String>,
    venue: Option<String>,
    competing_team: Option<String>,
    competing_team_logo: Option<String>,
    first_innings: Option<Value>,
    second_innings: Option<Value>,
    match_status: Option<String>,
}

impl From<MatchDto> for MatchRecord {
    fn from(value: MatchDto) -> Self {
        Self {
            umpires: value.umpires,
            result: value.result,
            man_of_the_match: value.man_of_the_match,
            id: value.id,
            date: value.date,
            venue: value.venue,
            competing_team: value.competing_team,
            competing_team_logo_url: value.competing_team_logo,
            first_innings: value.first_innings,
            second_innings: value.second_innings,
            match_status: value.match_status,
        }
    }
}

impl From<TeamMatchesDto> for TeamMatchesView {
    fn from(value: TeamMatchesDto) -> Self {
        Self {
            team_banner_url: value.team_banner_url,
            latest_match: value.latest_match_details.into(),
            recent_matches: value
                .recent_matches
                .into_iter()
                .map(MatchRecord::from)
                .collect_vec(),
        }
    }
}
