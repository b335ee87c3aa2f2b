use crate::boxscore::BoxScore;
use crate::models::{NflTeam, Player, PlayerGame, StatLines};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Map deduplicated box scores onto the roster, producing one draft
/// `PlayerGame` per mapped (player, game) pair.
///
/// Lines whose provider ID has no roster match are skipped; unmapped
/// provider-side entities (practice-squad players, long snappers, ...) are
/// expected and not an error. Team defense lines map through the defense
/// unit's provider ID, which is the provider's team ID.
///
/// `season` and `week` apply to every record in the batch.
pub fn map_box_scores_to_player_games(
    box_scores: &[BoxScore],
    players: &[Player],
    teams: &[NflTeam],
    season: &str,
    week: &str,
) -> Vec<PlayerGame> {
    // Per-batch indexes so every lookup is O(1)
    let players_by_provider_id: HashMap<&str, &Player> =
        players.iter().map(|p| (p.provider_id.as_str(), p)).collect();
    let teams_by_id: HashMap<&str, &NflTeam> =
        teams.iter().map(|t| (t.id.as_str(), t)).collect();

    let mut seen_games: HashSet<&str> = HashSet::new();
    let mut player_games = Vec::new();

    for game in box_scores {
        // first-seen-wins per game ID
        if !seen_games.insert(game.game_id.as_str()) {
            continue;
        }

        for line in game.player_stats.values() {
            let Some(player) = players_by_provider_id.get(line.player_id.as_str()) else {
                continue;
            };

            let Some(draft) = build_draft(
                game,
                player,
                &line.team_id,
                line.to_stat_lines(),
                &teams_by_id,
                season,
                week,
            ) else {
                continue;
            };
            player_games.push(draft);
        }

        for dst in [&game.dst.home, &game.dst.away] {
            let Some(player) = players_by_provider_id.get(dst.team_id.as_str()) else {
                continue;
            };

            let stats = StatLines { defense: Some(dst.to_defense_stats()), ..Default::default() };
            let Some(draft) =
                build_draft(game, player, &dst.team_id, stats, &teams_by_id, season, week)
            else {
                continue;
            };
            player_games.push(draft);
        }
    }

    player_games
}

fn build_draft(
    game: &BoxScore,
    player: &Player,
    line_team_id: &str,
    stats: StatLines,
    teams_by_id: &HashMap<&str, &NflTeam>,
    season: &str,
    week: &str,
) -> Option<PlayerGame> {
    let is_home = game.team_id_home == line_team_id;
    let opponent_id = if is_home { &game.team_id_away } else { &game.team_id_home };

    let Some(opponent) = teams_by_id.get(opponent_id.as_str()) else {
        warn!(
            "could not resolve opponent team {} for player {} in game {}",
            opponent_id, player.id, game.game_id
        );
        return None;
    };

    Some(PlayerGame {
        player_id: player.id.clone(),
        game_id: game.game_id.clone(),
        season: season.to_string(),
        week: week.to_string(),
        // roster team, not the box score's, so mid-season trades stay current
        team: player.team.clone(),
        opponent: opponent.team_name.clone(),
        is_home,
        points: String::new(),
        stats,
        stat_rankings: None,
    })
}
