use crate::models::{GameSearchRequest, NflGame, NflState, PlayerGameSearchRequest};
use anyhow::{Context, Result};
use reqwest::Client;
use stat_engine::{BoxScore, NflTeam, Player, PlayerGame};
use tracing::info;

/// Client for the data API holding the roster, team directory, schedule,
/// and persisted game records
#[derive(Debug, Clone)]
pub struct DataApiClient {
    client: Client,
    base_url: String,
}

impl DataApiClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Fetch the full roster
    pub async fn get_players(&self, limit: u32) -> Result<Vec<Player>> {
        let url = format!("{}/players?limit={}", self.base_url, limit);

        let response = self.client.get(&url).send().await.context("Failed to fetch players")?;
        if !response.status().is_success() {
            anyhow::bail!("players request failed with status: {}", response.status());
        }

        let players: Vec<Player> =
            response.json().await.context("Failed to parse players JSON")?;
        info!("fetched {} players", players.len());
        Ok(players)
    }

    /// Fetch the NFL team directory
    pub async fn get_nfl_teams(&self, limit: u32) -> Result<Vec<NflTeam>> {
        let url = format!("{}/nflTeams?limit={}", self.base_url, limit);

        let response = self.client.get(&url).send().await.context("Failed to fetch NFL teams")?;
        if !response.status().is_success() {
            anyhow::bail!("nflTeams request failed with status: {}", response.status());
        }

        let teams: Vec<NflTeam> =
            response.json().await.context("Failed to parse NFL teams JSON")?;
        info!("fetched {} NFL teams", teams.len());
        Ok(teams)
    }

    /// Search the schedule for one week's games
    pub async fn search_nfl_games(&self, season: &str, week: &str) -> Result<Vec<NflGame>> {
        let url = format!("{}/nflGames/search", self.base_url);
        let body = GameSearchRequest {
            seasons: vec![season.to_string()],
            weeks: vec![week.to_string()],
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("Failed to search NFL games")?;
        if !response.status().is_success() {
            anyhow::bail!("nflGames search failed with status: {}", response.status());
        }

        let games: Vec<NflGame> =
            response.json().await.context("Failed to parse NFL games JSON")?;
        info!("found {} games for week {} of {}", games.len(), week, season);
        Ok(games)
    }

    /// Search persisted game records for one week
    pub async fn search_player_games(&self, season: &str, week: &str) -> Result<Vec<PlayerGame>> {
        let url = format!("{}/players/playerGames/search", self.base_url);
        let body = PlayerGameSearchRequest::for_week(season, week);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("Failed to search player games")?;
        if !response.status().is_success() {
            anyhow::bail!("playerGames search failed with status: {}", response.status());
        }

        let games: Vec<PlayerGame> =
            response.json().await.context("Failed to parse player games JSON")?;
        info!("found {} player games for week {} of {}", games.len(), week, season);
        Ok(games)
    }

    /// Create one game record under its owning player
    pub async fn create_player_game(&self, record: &PlayerGame) -> Result<()> {
        let url = format!("{}/players/{}/playerGames", self.base_url, record.player_id);

        let response = self
            .client
            .post(&url)
            .json(record)
            .send()
            .await
            .with_context(|| format!("Failed to create player game for {}", record.player_id))?;
        if !response.status().is_success() {
            anyhow::bail!(
                "player game create for {} failed with status: {}",
                record.player_id,
                response.status()
            );
        }

        Ok(())
    }

    /// Bulk-update roster players (season totals)
    pub async fn bulk_update_players(&self, players: &[Player]) -> Result<()> {
        let url = format!("{}/players/bulk", self.base_url);

        let response = self
            .client
            .put(&url)
            .json(players)
            .send()
            .await
            .context("Failed to bulk update players")?;
        if !response.status().is_success() {
            anyhow::bail!("player bulk update failed with status: {}", response.status());
        }

        Ok(())
    }
}

/// Client for the box-score provider
#[derive(Debug, Clone)]
pub struct BoxScoreClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl BoxScoreClient {
    pub fn new(client: Client, base_url: String, api_key: String) -> Self {
        Self { client, base_url, api_key }
    }

    /// Fetch one game's box score with precomputed fantasy points
    pub async fn get_box_score(&self, game_id: &str) -> Result<BoxScore> {
        let url =
            format!("{}/getNFLBoxScore?gameID={}&fantasyPoints=true", self.base_url, game_id);

        let response = self
            .client
            .get(&url)
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .with_context(|| format!("Failed to fetch box score for game {game_id}"))?;
        if !response.status().is_success() {
            anyhow::bail!(
                "box score request for {} failed with status: {}",
                game_id,
                response.status()
            );
        }

        response.json().await.with_context(|| format!("Failed to parse box score for {game_id}"))
    }
}

/// Client for the league-state provider
#[derive(Debug, Clone)]
pub struct LeagueStateClient {
    client: Client,
    base_url: String,
}

impl LeagueStateClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Fetch the current NFL season and week
    pub async fn get_nfl_state(&self) -> Result<NflState> {
        let url = format!("{}/state/nfl", self.base_url);

        let response =
            self.client.get(&url).send().await.context("Failed to fetch NFL state")?;
        if !response.status().is_success() {
            anyhow::bail!("NFL state request failed with status: {}", response.status());
        }

        response.json().await.context("Failed to parse NFL state JSON")
    }
}
