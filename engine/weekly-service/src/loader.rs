use crate::client::DataApiClient;
use anyhow::Result;
use stat_engine::{Player, PlayerGame};
use tracing::warn;

/// Persists engine output back into the data API
#[derive(Debug, Clone)]
pub struct Loader {
    data_api: DataApiClient,
}

impl Loader {
    pub fn new(data_api: DataApiClient) -> Self {
        Self { data_api }
    }

    /// Create one record per (player, game) under the owning player.
    /// A failed record is logged and skipped; the rest of the batch loads.
    pub async fn load_player_games(&self, player_games: &[PlayerGame]) -> Result<usize> {
        let mut loaded = 0;

        for record in player_games {
            match self.data_api.create_player_game(record).await {
                Ok(()) => loaded += 1,
                Err(e) => {
                    warn!(
                        "failed to load game {} for player {}: {e:#}",
                        record.game_id, record.player_id
                    );
                }
            }
        }

        Ok(loaded)
    }

    /// Push updated season totals for the whole roster
    pub async fn update_players(&self, players: &[Player]) -> Result<usize> {
        self.data_api.bulk_update_players(players).await?;
        Ok(players.len())
    }
}
