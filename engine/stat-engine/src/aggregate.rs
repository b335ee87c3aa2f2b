use crate::models::{
    DefenseStats, KickingStats, PassingStats, Player, PlayerGame, PositionGroup, ReceivingStats,
    RushingStats, StatLines,
};
use std::collections::HashMap;
use tracing::warn;

/// Fold one game's stat lines into season totals, returning an updated copy.
///
/// Which sub-lines participate depends on the position group: defenses add
/// defense counters, kickers add kicking counters, and skill players add
/// passing, rushing, and receiving independently (a rushing quarterback
/// contributes to two). A category only accumulates when the season side
/// already carries that sub-line; for skill categories the game side must
/// carry it too. Missing game counters contribute zero.
pub fn accumulate_game(
    season: &StatLines,
    game: &StatLines,
    group: PositionGroup,
) -> StatLines {
    let mut updated = season.clone();

    match group {
        PositionGroup::Defense => {
            if let Some(totals) = &season.defense {
                let line = game.defense.unwrap_or_default();
                updated.defense = Some(DefenseStats {
                    def_td: totals.def_td + line.def_td,
                    defensive_interceptions: totals.defensive_interceptions
                        + line.defensive_interceptions,
                    fg_allowed: totals.fg_allowed + line.fg_allowed,
                    fumbles_recovered: totals.fumbles_recovered + line.fumbles_recovered,
                    pass_tds_allowed: totals.pass_tds_allowed + line.pass_tds_allowed,
                    pass_yds_allowed: totals.pass_yds_allowed + line.pass_yds_allowed,
                    pts_allowed: totals.pts_allowed + line.pts_allowed,
                    rush_tds_allowed: totals.rush_tds_allowed + line.rush_tds_allowed,
                    rush_yds_allowed: totals.rush_yds_allowed + line.rush_yds_allowed,
                    sacks: totals.sacks + line.sacks,
                    xp_allowed: totals.xp_allowed + line.xp_allowed,
                    yds_allowed: totals.yds_allowed + line.yds_allowed,
                });
            }
        }
        PositionGroup::Kicking => {
            if let Some(totals) = &season.kicking {
                let line = game.kicking.unwrap_or_default();
                updated.kicking = Some(KickingStats {
                    fg_attempts: totals.fg_attempts + line.fg_attempts,
                    fg_long: totals.fg_long + line.fg_long,
                    fg_made: totals.fg_made + line.fg_made,
                    // summed raw per accepted behavior, not recomputed
                    fg_pct: totals.fg_pct + line.fg_pct,
                    xp_attempts: totals.xp_attempts + line.xp_attempts,
                    xp_made: totals.xp_made + line.xp_made,
                });
            }
        }
        PositionGroup::Skill => {
            if let (Some(totals), Some(line)) = (&season.passing, &game.passing) {
                updated.passing = Some(PassingStats {
                    int: totals.int + line.int,
                    pass_attempts: totals.pass_attempts + line.pass_attempts,
                    pass_completions: totals.pass_completions + line.pass_completions,
                    pass_td: totals.pass_td + line.pass_td,
                    pass_yds: totals.pass_yds + line.pass_yds,
                    qbr: totals.qbr + line.qbr,
                    rtg: totals.rtg + line.rtg,
                    sacked: totals.sacked + line.sacked,
                });
            }

            if let (Some(totals), Some(line)) = (&season.rushing, &game.rushing) {
                updated.rushing = Some(RushingStats {
                    carries: totals.carries + line.carries,
                    long_rush: totals.long_rush + line.long_rush,
                    rush_avg: totals.rush_avg + line.rush_avg,
                    rush_td: totals.rush_td + line.rush_td,
                    rush_yds: totals.rush_yds + line.rush_yds,
                });
            }

            if let (Some(totals), Some(line)) = (&season.receiving, &game.receiving) {
                updated.receiving = Some(ReceivingStats {
                    long_rec: totals.long_rec + line.long_rec,
                    rec_avg: totals.rec_avg + line.rec_avg,
                    rec_td: totals.rec_td + line.rec_td,
                    rec_yds: totals.rec_yds + line.rec_yds,
                    receptions: totals.receptions + line.receptions,
                    targets: totals.targets + line.targets,
                });
            }
        }
    }

    updated
}

/// Fold this batch's game records into every player's season totals.
///
/// Players are independent of each other; each player's own games are folded
/// sequentially, so season totals are complete before ranking reads them.
/// A player with no game record this batch is skipped with a diagnostic.
pub fn add_stats_to_players(players: Vec<Player>, player_games: &[PlayerGame]) -> Vec<Player> {
    let mut games_by_player: HashMap<&str, Vec<&PlayerGame>> = HashMap::new();
    for game in player_games {
        games_by_player.entry(game.player_id.as_str()).or_default().push(game);
    }

    players
        .into_iter()
        .map(|mut player| {
            let Some(games) = games_by_player.get(player.id.as_str()) else {
                warn!("could not find game record for player {}", player.id);
                return player;
            };

            let group = PositionGroup::for_player(&player);
            for game in games {
                player.season_stats = accumulate_game(&player.season_stats, &game.stats, group);
            }
            player
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_player(id: &str, positions: &[&str], season_stats: StatLines) -> Player {
        Player {
            id: id.to_string(),
            provider_id: format!("prov-{id}"),
            positions: positions.iter().map(|p| p.to_string()).collect(),
            team: "Ravens".to_string(),
            season_stats,
        }
    }

    fn create_test_game(player_id: &str, stats: StatLines) -> PlayerGame {
        PlayerGame {
            player_id: player_id.to_string(),
            game_id: format!("g-{player_id}"),
            season: "2025".to_string(),
            week: "2".to_string(),
            team: "Ravens".to_string(),
            opponent: "Chiefs".to_string(),
            is_home: true,
            points: "0".to_string(),
            stats,
            stat_rankings: None,
        }
    }

    fn rushing(carries: f64, yds: f64, td: f64) -> StatLines {
        StatLines {
            rushing: Some(RushingStats {
                carries,
                rush_yds: yds,
                rush_td: td,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_skill_accumulation_is_additive() {
        let season = StatLines {
            passing: Some(PassingStats { pass_yds: 300.0, pass_td: 2.0, ..Default::default() }),
            rushing: Some(RushingStats { carries: 10.0, rush_yds: 45.0, ..Default::default() }),
            ..Default::default()
        };
        let game = StatLines {
            passing: Some(PassingStats {
                pass_yds: 250.0,
                pass_td: 1.0,
                int: 1.0,
                ..Default::default()
            }),
            rushing: Some(RushingStats { carries: 6.0, rush_yds: 38.0, ..Default::default() }),
            ..Default::default()
        };

        let updated = accumulate_game(&season, &game, PositionGroup::Skill);

        let passing = updated.passing.unwrap();
        assert_eq!(passing.pass_yds, 550.0);
        assert_eq!(passing.pass_td, 3.0);
        assert_eq!(passing.int, 1.0);
        let rushing = updated.rushing.unwrap();
        assert_eq!(rushing.carries, 16.0);
        assert_eq!(rushing.rush_yds, 83.0);
        // no receiving data on either side
        assert!(updated.receiving.is_none());
    }

    #[test]
    fn test_skill_category_requires_both_sides() {
        // season has receiving totals but the game line has none
        let season = StatLines {
            receiving: Some(ReceivingStats { receptions: 20.0, ..Default::default() }),
            ..Default::default()
        };
        let game = rushing(5.0, 22.0, 0.0);

        let updated = accumulate_game(&season, &game, PositionGroup::Skill);
        assert_eq!(updated.receiving.unwrap().receptions, 20.0);
        // rushing missing on the season side stays missing
        assert!(updated.rushing.is_none());
    }

    #[test]
    fn test_defense_accumulation_with_missing_game_line() {
        let season = StatLines {
            defense: Some(DefenseStats { yds_allowed: 640.0, sacks: 5.0, ..Default::default() }),
            ..Default::default()
        };

        let updated = accumulate_game(&season, &StatLines::default(), PositionGroup::Defense);
        let defense = updated.defense.unwrap();
        assert_eq!(defense.yds_allowed, 640.0);
        assert_eq!(defense.sacks, 5.0);
    }

    #[test]
    fn test_kicking_fg_pct_summed_raw() {
        let season = StatLines {
            kicking: Some(KickingStats { fg_made: 4.0, fg_pct: 180.0, ..Default::default() }),
            ..Default::default()
        };
        let game = StatLines {
            kicking: Some(KickingStats { fg_made: 2.0, fg_pct: 100.0, ..Default::default() }),
            ..Default::default()
        };

        let updated = accumulate_game(&season, &game, PositionGroup::Kicking);
        let kicking = updated.kicking.unwrap();
        assert_eq!(kicking.fg_made, 6.0);
        assert_eq!(kicking.fg_pct, 280.0);
    }

    #[test]
    fn test_per_player_order_independence() {
        let start = StatLines {
            rushing: Some(RushingStats::default()),
            ..Default::default()
        };
        let game_a = rushing(10.0, 55.0, 1.0);
        let game_b = rushing(20.0, 80.0, 0.0);

        let ab = accumulate_game(
            &accumulate_game(&start, &game_a, PositionGroup::Skill),
            &game_b,
            PositionGroup::Skill,
        );
        let ba = accumulate_game(
            &accumulate_game(&start, &game_b, PositionGroup::Skill),
            &game_a,
            PositionGroup::Skill,
        );

        assert_eq!(ab.rushing.unwrap(), ba.rushing.unwrap());
    }

    #[test]
    fn test_player_without_game_is_skipped_not_fatal() {
        let start = StatLines {
            rushing: Some(RushingStats::default()),
            ..Default::default()
        };
        let players = vec![
            create_test_player("p1", &["RB"], start.clone()),
            create_test_player("p2", &["RB"], start),
        ];
        let games = vec![create_test_game("p1", rushing(12.0, 60.0, 1.0))];

        let updated = add_stats_to_players(players, &games);

        assert_eq!(updated.len(), 2);
        assert_eq!(updated[0].season_stats.rushing.unwrap().rush_yds, 60.0);
        // p2 untouched, batch not aborted
        assert_eq!(updated[1].season_stats.rushing.unwrap().rush_yds, 0.0);
    }

    #[test]
    fn test_multiple_games_fold_sequentially() {
        let start = StatLines {
            rushing: Some(RushingStats::default()),
            ..Default::default()
        };
        let players = vec![create_test_player("p1", &["RB"], start)];
        let mut game_one = create_test_game("p1", rushing(10.0, 40.0, 0.0));
        game_one.game_id = "g1".to_string();
        let mut game_two = create_test_game("p1", rushing(15.0, 70.0, 2.0));
        game_two.game_id = "g2".to_string();

        let updated = add_stats_to_players(players, &[game_one, game_two]);
        let rushing = updated[0].season_stats.rushing.unwrap();
        assert_eq!(rushing.carries, 25.0);
        assert_eq!(rushing.rush_yds, 110.0);
        assert_eq!(rushing.rush_td, 2.0);
    }
}
