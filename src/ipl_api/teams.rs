use itertools::Itertools;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::ipl_api;
use crate::model::Team;

#[instrument(skip(client, base_url))]
pub(crate) async fn get_teams(client: &reqwest::Client, base_url: &str) -> Result<Vec<Team>> {
    let list: TeamListDto = ipl_api::get_json(client, base_url).await?;
    let teams = list.teams.into_iter().map(Team::from).collect_vec();
    debug!(count = teams.len(), "decoded team index");
    Ok(teams)
}

/// Wire envelope of the team index endpoint.
#[derive(Debug, Deserialize)]
struct TeamListDto {
    teams: Vec<TeamDto>,
}

#[derive(Debug, Deserialize)]
struct TeamDto {
    id: String,
    name: String,
    team_image_url: String,
}

impl From<TeamDto> for Team {
    fn from(value: TeamDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            image_url: value.team_image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_the_index_envelope() {
        let list: TeamListDto = serde_json::from_value(json!({
            "teams": [
                {"name": "Royal Challengers Bangalore", "id": "RCB",
                 "team_image_url": "https://assets.ccbp.in/rcb.png"},
                {"name": "Mumbai Indians", "id": "MI",
                 "team_image_url": "https://assets.ccbp.in/mi.png"}
            ]
        }))
        .unwrap();

        let teams = list.teams.into_iter().map(Team::from).collect_vec();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].id, "RCB");
        assert_eq!(teams[1].image_url, "https://assets.ccbp.in/mi.png");
    }

    #[test]
    fn index_without_teams_does_not_decode() {
        let result = serde_json::from_value::<TeamListDto>(json!({"franchises": []}));
        assert!(result.is_err());
    }
}
