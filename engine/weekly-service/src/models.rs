use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current league state from the league-state provider
#[derive(Debug, Clone, Deserialize)]
pub struct NflState {
    pub season: String,
    pub week: u32,
}

/// A scheduled NFL game from the data API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NflGame {
    pub id: String,
}

/// Search body for the data API's nflGames search action
#[derive(Debug, Clone, Serialize)]
pub struct GameSearchRequest {
    pub seasons: Vec<String>,
    pub weeks: Vec<String>,
}

/// Search body for the data API's playerGames search action
#[derive(Debug, Clone, Serialize)]
pub struct PlayerGameSearchRequest {
    pub seasons: Vec<String>,
    pub weeks: Vec<String>,
    #[serde(rename = "nflTeams")]
    pub nfl_teams: Vec<String>,
    #[serde(rename = "playerIDs")]
    pub player_ids: Vec<String>,
}

impl PlayerGameSearchRequest {
    /// Search one week of one season across all teams and players
    pub fn for_week(season: &str, week: &str) -> Self {
        Self {
            seasons: vec![season.to_string()],
            weeks: vec![week.to_string()],
            nfl_teams: Vec::new(),
            player_ids: Vec::new(),
        }
    }
}

/// Events emitted by the weekly pipelines
#[derive(Debug, Clone, Serialize)]
pub enum PipelineEvent {
    /// Game records loaded into the data API
    PlayerGamesLoaded {
        count: usize,
        season: String,
        week: String,
        timestamp: DateTime<Utc>,
    },

    /// Roster season totals updated
    PlayersUpdated {
        count: usize,
        timestamp: DateTime<Utc>,
    },

    /// A pipeline stage failed
    StageFailed {
        stage: String,
        error: String,
        timestamp: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_game_search_request_shape() {
        let request = PlayerGameSearchRequest::for_week("2025", "7");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["seasons"][0], "2025");
        assert_eq!(json["weeks"][0], "7");
        assert!(json["nflTeams"].as_array().unwrap().is_empty());
        assert!(json["playerIDs"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_nfl_state_deserializes_provider_shape() {
        let state: NflState =
            serde_json::from_str(r#"{"season":"2025","week":3,"season_type":"regular"}"#).unwrap();
        assert_eq!(state.season, "2025");
        assert_eq!(state.week, 3);
    }
}
