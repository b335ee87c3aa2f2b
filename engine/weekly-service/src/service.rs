use crate::client::{BoxScoreClient, DataApiClient, LeagueStateClient};
use crate::config::WeeklyConfig;
use crate::loader::Loader;
use crate::models::{NflGame, PipelineEvent};
use anyhow::{Context, Result};
use chrono::Utc;
use reqwest::Client;
use stat_engine::{
    add_scores_to_player_games, add_stats_to_players, add_weekly_rankings_to_player_games,
    map_box_scores_to_player_games, BoxScore,
};
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{error, info};

/// Orchestrates the weekly pipelines around the stat engine
pub struct WeeklyService {
    config: WeeklyConfig,
    data_api: DataApiClient,
    box_scores: BoxScoreClient,
    league_state: LeagueStateClient,
    loader: Loader,
}

impl WeeklyService {
    /// Create a new service instance from configuration
    pub fn new(config: WeeklyConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        let data_api = DataApiClient::new(client.clone(), config.data_api.url.clone());
        let box_scores = BoxScoreClient::new(
            client.clone(),
            config.box_scores.base_url.clone(),
            config.get_box_score_api_key()?,
        );
        let league_state =
            LeagueStateClient::new(client, config.league_state.base_url.clone());
        let loader = Loader::new(data_api.clone());

        Ok(Self { config, data_api, box_scores, league_state, loader })
    }

    /// Post-game pipeline: score last week's game records and fold them into
    /// every player's season totals.
    pub async fn run_post_game(&self) -> Result<PipelineEvent> {
        let state = self.league_state.get_nfl_state().await?;
        let week = state.week.to_string();
        info!("running post-game pipeline for week {} of {}", week, state.season);

        let players =
            self.data_api.get_players(self.config.data_api.player_page_size).await?;
        let player_games = self.data_api.search_player_games(&state.season, &week).await?;
        let teams = self.data_api.get_nfl_teams(self.config.data_api.team_page_size).await?;
        let games = self.data_api.search_nfl_games(&state.season, &week).await?;
        let box_scores = self.fetch_box_scores(&games).await?;

        let scored = add_scores_to_player_games(&box_scores, player_games, &players, &teams);
        let updated_players = add_stats_to_players(players, &scored);

        info!(
            "attempting to load {} player games from week {} of {}",
            scored.len(),
            week,
            state.season
        );
        let loaded = match self.loader.load_player_games(&scored).await {
            Ok(count) => count,
            Err(e) => {
                error!("failed to load player games: {e:#}");
                return Ok(PipelineEvent::StageFailed {
                    stage: "load_player_games".to_string(),
                    error: e.to_string(),
                    timestamp: Utc::now(),
                });
            }
        };
        info!("loaded {} player games from week {} of {}", loaded, week, state.season);

        match self.loader.update_players(&updated_players).await {
            Ok(count) => {
                info!("updated season stats for {} players", count);
                Ok(PipelineEvent::PlayersUpdated { count, timestamp: Utc::now() })
            }
            Err(e) => {
                error!("failed to update players: {e:#}");
                Ok(PipelineEvent::StageFailed {
                    stage: "update_players".to_string(),
                    error: e.to_string(),
                    timestamp: Utc::now(),
                })
            }
        }
    }

    /// Pre-game pipeline: build the coming week's game records and stamp
    /// them with rankings computed from season totals.
    pub async fn run_pre_game(&self) -> Result<PipelineEvent> {
        let state = self.league_state.get_nfl_state().await?;
        let week = state.week.to_string();
        info!("running pre-game pipeline for week {} of {}", week, state.season);

        let players =
            self.data_api.get_players(self.config.data_api.player_page_size).await?;
        let teams = self.data_api.get_nfl_teams(self.config.data_api.team_page_size).await?;
        let games = self.data_api.search_nfl_games(&state.season, &week).await?;
        let box_scores = self.fetch_box_scores(&games).await?;

        let drafts = map_box_scores_to_player_games(
            &box_scores,
            &players,
            &teams,
            &state.season,
            &week,
        );
        let ranked = add_weekly_rankings_to_player_games(drafts, &players);

        info!(
            "attempting to load {} player games from week {} of {}",
            ranked.len(),
            week,
            state.season
        );
        match self.loader.load_player_games(&ranked).await {
            Ok(count) => {
                info!("loaded {} player games from week {} of {}", count, week, state.season);
                Ok(PipelineEvent::PlayerGamesLoaded {
                    count,
                    season: state.season,
                    week,
                    timestamp: Utc::now(),
                })
            }
            Err(e) => {
                error!("failed to load player games: {e:#}");
                Ok(PipelineEvent::StageFailed {
                    stage: "load_player_games".to_string(),
                    error: e.to_string(),
                    timestamp: Utc::now(),
                })
            }
        }
    }

    /// Fetch every game's box score concurrently, one request per game.
    /// All results are materialized before the engine runs, because ranking
    /// reads global season totals.
    async fn fetch_box_scores(&self, games: &[NflGame]) -> Result<Vec<BoxScore>> {
        let mut requests = JoinSet::new();
        for game in games {
            let client = self.box_scores.clone();
            let game_id = game.id.clone();
            requests.spawn(async move { client.get_box_score(&game_id).await });
        }

        let mut box_scores = Vec::with_capacity(games.len());
        while let Some(result) = requests.join_next().await {
            box_scores.push(result.context("box score fetch task panicked")??);
        }

        info!("fetched {} box scores", box_scores.len());
        Ok(box_scores)
    }
}
