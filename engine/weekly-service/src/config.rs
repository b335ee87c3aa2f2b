use serde::{Deserialize, Serialize};

/// Configuration for the weekly pipeline service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyConfig {
    /// Data API (roster, teams, schedules, persisted game records)
    pub data_api: DataApiConfig,

    /// Box-score provider configuration
    pub box_scores: BoxScoreProviderConfig,

    /// League-state provider (current season and week)
    pub league_state: LeagueStateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataApiConfig {
    /// Base URL of the data API
    pub url: String,

    /// Page size when listing the full roster
    pub player_page_size: u32,

    /// Page size when listing NFL teams (there are 32)
    pub team_page_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxScoreProviderConfig {
    /// Base URL of the box-score API
    pub base_url: String,

    /// Environment variable holding the API key
    pub api_key_env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueStateConfig {
    /// Base URL of the league-state API
    pub base_url: String,
}

impl Default for WeeklyConfig {
    fn default() -> Self {
        Self {
            data_api: DataApiConfig {
                url: "http://localhost:8080".to_string(),
                player_page_size: 10000,
                team_page_size: 32,
            },
            box_scores: BoxScoreProviderConfig {
                base_url: "https://api.tank01.example/nfl".to_string(),
                api_key_env: "BOX_SCORE_API_KEY".to_string(),
            },
            league_state: LeagueStateConfig {
                base_url: "https://api.sleeper.app/v1".to_string(),
            },
        }
    }
}

impl WeeklyConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("DATA_API_URL") {
            config.data_api.url = url;
        }

        if let Ok(url) = std::env::var("BOX_SCORE_API_URL") {
            config.box_scores.base_url = url;
        }

        if let Ok(url) = std::env::var("LEAGUE_STATE_API_URL") {
            config.league_state.base_url = url;
        }

        Ok(config)
    }

    /// Get the box-score provider API key from the environment
    pub fn get_box_score_api_key(&self) -> anyhow::Result<String> {
        std::env::var(&self.box_scores.api_key_env)
            .map_err(|_| anyhow::anyhow!("box score API key not found in environment"))
    }
}
