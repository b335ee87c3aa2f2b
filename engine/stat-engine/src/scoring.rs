use crate::boxscore::{parse_stat, BoxScore};
use crate::models::{NflTeam, Player, PlayerGame, PositionGroup};
use std::collections::HashMap;
use tracing::warn;

/// Defense/special-teams scoring settings for a half-PPR league.
///
/// Bracket values are point magnitudes; the yards-allowed brackets from 350
/// up are subtracted, everything else is added. Per-event values multiply
/// raw counts. Read-only and versioned: a league settings change is a new
/// constant, never an edit.
#[derive(Debug, Clone, Copy)]
pub struct ScoringTable {
    pub version: &'static str,

    // yards allowed, ascending thresholds, first match wins
    pub yds_allow_0_100: f64,
    pub yds_allow_100_199: f64,
    pub yds_allow_200_299: f64,
    pub yds_allow_300_349: f64,
    pub yds_allow_350_399: f64,
    pub yds_allow_400_449: f64,
    pub yds_allow_450_499: f64,
    pub yds_allow_500_549: f64,
    pub yds_allow_550p: f64,

    // points allowed, ascending thresholds, first match wins
    pub pts_allow_0: f64,
    pub pts_allow_1_6: f64,
    pub pts_allow_7_13: f64,
    pub pts_allow_14_20: f64,
    pub pts_allow_21_27: f64,
    pub pts_allow_28_34: f64,
    pub pts_allow_35p: f64,

    // per-event values
    pub def_td: f64,
    pub sack: f64,
    pub int: f64,
    pub fum_rec: f64,
    pub safe: f64,
    pub ff: f64,
}

/// Active scoring settings, process-wide
pub const SCORING_TABLE: ScoringTable = ScoringTable {
    version: "half-ppr-2023.1",

    yds_allow_0_100: 5.0,
    yds_allow_100_199: 3.0,
    yds_allow_200_299: 2.0,
    yds_allow_300_349: 0.0,
    yds_allow_350_399: 1.0,
    yds_allow_400_449: 3.0,
    yds_allow_450_499: 5.0,
    yds_allow_500_549: 6.0,
    yds_allow_550p: 7.0,

    pts_allow_0: 10.0,
    pts_allow_1_6: 7.0,
    pts_allow_7_13: 4.0,
    pts_allow_14_20: 3.0,
    pts_allow_21_27: 2.0,
    pts_allow_28_34: 1.0,
    pts_allow_35p: 0.0,

    def_td: 6.0,
    sack: 1.0,
    int: 2.0,
    fum_rec: 2.0,
    safe: 2.0,
    ff: 1.0,
};

/// Compute fantasy points for the defense of `team_id` in one game.
///
/// Pure and deterministic: one yards-allowed bracket, one points-allowed
/// bracket, additive per-event terms, plus one forced-fumble value for every
/// opposing player line that records a forced fumble.
pub fn calculate_dst_points(game: &BoxScore, team_id: &str, table: &ScoringTable) -> f64 {
    let dst =
        if game.dst.home.team_id == team_id { &game.dst.home } else { &game.dst.away };
    let stats = dst.to_defense_stats();

    let mut points = 0.0;

    let yds_allowed = stats.yds_allowed;
    if yds_allowed < 100.0 {
        points += table.yds_allow_0_100;
    } else if yds_allowed < 200.0 {
        points += table.yds_allow_100_199;
    } else if yds_allowed < 300.0 {
        points += table.yds_allow_200_299;
    } else if yds_allowed < 350.0 {
        points += table.yds_allow_300_349;
    } else if yds_allowed < 400.0 {
        points -= table.yds_allow_350_399;
    } else if yds_allowed < 450.0 {
        points -= table.yds_allow_400_449;
    } else if yds_allowed < 500.0 {
        points -= table.yds_allow_450_499;
    } else if yds_allowed < 550.0 {
        points -= table.yds_allow_500_549;
    } else {
        points -= table.yds_allow_550p;
    }

    let pts_allowed = stats.pts_allowed;
    if pts_allowed < 1.0 {
        points += table.pts_allow_0;
    } else if pts_allowed < 7.0 {
        points += table.pts_allow_1_6;
    } else if pts_allowed < 14.0 {
        points += table.pts_allow_7_13;
    } else if pts_allowed < 21.0 {
        points += table.pts_allow_14_20;
    } else if pts_allowed < 28.0 {
        points += table.pts_allow_21_27;
    } else if pts_allowed < 35.0 {
        points += table.pts_allow_28_34;
    } else {
        points += table.pts_allow_35p;
    }

    points += stats.def_td * table.def_td;
    points += stats.sacks * table.sack;
    points += stats.defensive_interceptions * table.int;
    points += stats.fumbles_recovered * table.fum_rec;
    // safeties do not survive into season defense stats, so read them raw
    points += parse_stat(&dst.safeties) * table.safe;

    // forced fumbles live on the opposing players' lines, so scan them all
    for line in game.player_stats.values() {
        if line.team_id != team_id && line.has_forced_fumble() {
            points += table.ff;
        }
    }

    points
}

/// Stamp fantasy points onto each record: defenses go through the bracketed
/// calculator, everyone else takes the provider's precomputed half-PPR value.
///
/// Per-record failures (missing player, game, or line) leave that record
/// unscored and never abort the batch.
pub fn add_scores_to_player_games(
    box_scores: &[BoxScore],
    mut player_games: Vec<PlayerGame>,
    players: &[Player],
    teams: &[NflTeam],
) -> Vec<PlayerGame> {
    let players_by_id: HashMap<&str, &Player> =
        players.iter().map(|p| (p.id.as_str(), p)).collect();
    let teams_by_name: HashMap<&str, &NflTeam> =
        teams.iter().map(|t| (t.team_name.as_str(), t)).collect();

    // first-seen-wins, matching the deduplicator
    let mut games_by_id: HashMap<&str, &BoxScore> = HashMap::new();
    for game in box_scores {
        games_by_id.entry(game.game_id.as_str()).or_insert(game);
    }

    for record in player_games.iter_mut() {
        let Some(player) = players_by_id.get(record.player_id.as_str()) else {
            warn!("could not find player {} for game record", record.player_id);
            continue;
        };

        let Some(game) = games_by_id.get(record.game_id.as_str()) else {
            warn!(
                "could not find box score {} for player {}",
                record.game_id, record.player_id
            );
            continue;
        };

        if PositionGroup::for_player(player) != PositionGroup::Defense {
            let Some(line) = game.player_stats.get(player.provider_id.as_str()) else {
                warn!(
                    "could not find box score line for player {} (provider {}) in game {}",
                    record.player_id, player.provider_id, record.game_id
                );
                continue;
            };

            record.points = line
                .fantasy_points_default
                .as_ref()
                .and_then(|fp| fp.half_ppr.clone())
                .unwrap_or_else(|| "0".to_string());
        } else {
            let Some(team) = teams_by_name.get(player.team.as_str()) else {
                warn!(
                    "could not find team {} for defense record {}",
                    player.team, record.player_id
                );
                continue;
            };

            record.points =
                format_points(calculate_dst_points(game, &team.id, &SCORING_TABLE));
        }
    }

    player_games
}

/// Render a point total the way skill-position points arrive: "18", "18.5"
pub fn format_points(points: f64) -> String {
    points.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxscore::{
        DstLines, FantasyPointsDefault, PlayerBoxScoreLine, RawDefenseLine, TeamDefenseLine,
    };
    use crate::models::StatLines;

    fn create_test_dst(team_id: &str, yds: &str, pts: &str) -> TeamDefenseLine {
        TeamDefenseLine {
            team_id: team_id.to_string(),
            yds_allowed: Some(yds.to_string()),
            pts_allowed: Some(pts.to_string()),
            ..Default::default()
        }
    }

    fn create_test_box_score() -> BoxScore {
        BoxScore {
            game_id: "g1".to_string(),
            team_id_home: "1".to_string(),
            team_id_away: "2".to_string(),
            player_stats: HashMap::new(),
            dst: DstLines {
                home: create_test_dst("1", "150", "0"),
                away: create_test_dst("2", "380", "24"),
            },
        }
    }

    #[test]
    fn test_dst_points_bracket_sums() {
        let game = create_test_box_score();

        // home: 150 yds -> 100-199 bracket, 0 pts -> shutout bracket
        let home = calculate_dst_points(&game, "1", &SCORING_TABLE);
        assert_eq!(home, SCORING_TABLE.yds_allow_100_199 + SCORING_TABLE.pts_allow_0);

        // away: 380 yds -> subtract 350-399 bracket, 24 pts -> 21-27 bracket
        let away = calculate_dst_points(&game, "2", &SCORING_TABLE);
        assert_eq!(away, -SCORING_TABLE.yds_allow_350_399 + SCORING_TABLE.pts_allow_21_27);
    }

    #[test]
    fn test_dst_bracket_boundaries_exact() {
        let mut game = create_test_box_score();

        game.dst.home = create_test_dst("1", "99", "0");
        let at_99 = calculate_dst_points(&game, "1", &SCORING_TABLE);
        game.dst.home = create_test_dst("1", "100", "0");
        let at_100 = calculate_dst_points(&game, "1", &SCORING_TABLE);
        assert_eq!(at_99 - at_100, SCORING_TABLE.yds_allow_0_100 - SCORING_TABLE.yds_allow_100_199);

        game.dst.home = create_test_dst("1", "150", "0");
        let shutout = calculate_dst_points(&game, "1", &SCORING_TABLE);
        game.dst.home = create_test_dst("1", "150", "1");
        let one_point = calculate_dst_points(&game, "1", &SCORING_TABLE);
        assert_eq!(shutout - one_point, SCORING_TABLE.pts_allow_0 - SCORING_TABLE.pts_allow_1_6);
    }

    #[test]
    fn test_dst_event_terms_and_forced_fumbles() {
        let mut game = create_test_box_score();
        game.dst.home = TeamDefenseLine {
            team_id: "1".to_string(),
            yds_allowed: Some("150".to_string()),
            pts_allowed: Some("0".to_string()),
            sacks: Some("2".to_string()),
            defensive_interceptions: Some("1".to_string()),
            ..Default::default()
        };

        // one opposing player with a forced fumble, one teammate (ignored)
        game.player_stats.insert(
            "2001".to_string(),
            PlayerBoxScoreLine {
                player_id: "2001".to_string(),
                team_id: "2".to_string(),
                defense: Some(RawDefenseLine {
                    fumbles: Some("1".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            },
        );
        game.player_stats.insert(
            "1001".to_string(),
            PlayerBoxScoreLine {
                player_id: "1001".to_string(),
                team_id: "1".to_string(),
                defense: Some(RawDefenseLine {
                    fumbles: Some("1".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            },
        );

        let expected = SCORING_TABLE.yds_allow_100_199
            + SCORING_TABLE.pts_allow_0
            + 2.0 * SCORING_TABLE.sack
            + SCORING_TABLE.int
            + SCORING_TABLE.ff;
        assert_eq!(calculate_dst_points(&game, "1", &SCORING_TABLE), expected);
    }

    #[test]
    fn test_dst_missing_fields_are_zero() {
        let mut game = create_test_box_score();
        game.dst.home = TeamDefenseLine { team_id: "1".to_string(), ..Default::default() };

        // 0 yds allowed and 0 pts allowed brackets, nothing else
        let points = calculate_dst_points(&game, "1", &SCORING_TABLE);
        assert_eq!(points, SCORING_TABLE.yds_allow_0_100 + SCORING_TABLE.pts_allow_0);
    }

    #[test]
    fn test_dst_scoring_is_deterministic() {
        let game = create_test_box_score();
        let first = calculate_dst_points(&game, "2", &SCORING_TABLE);
        let second = calculate_dst_points(&game, "2", &SCORING_TABLE);
        assert_eq!(first, second);
    }

    fn create_test_record(player_id: &str) -> PlayerGame {
        PlayerGame {
            player_id: player_id.to_string(),
            game_id: "g1".to_string(),
            season: "2025".to_string(),
            week: "1".to_string(),
            team: "Ravens".to_string(),
            opponent: "Chiefs".to_string(),
            is_home: true,
            points: String::new(),
            stats: StatLines::default(),
            stat_rankings: None,
        }
    }

    #[test]
    fn test_skill_score_taken_from_half_ppr() {
        let mut game = create_test_box_score();
        game.player_stats.insert(
            "1001".to_string(),
            PlayerBoxScoreLine {
                player_id: "1001".to_string(),
                team_id: "1".to_string(),
                fantasy_points_default: Some(FantasyPointsDefault {
                    half_ppr: Some("21.3".to_string()),
                }),
                ..Default::default()
            },
        );

        let players = vec![Player {
            id: "p1".to_string(),
            provider_id: "1001".to_string(),
            positions: vec!["WR".to_string()],
            team: "Ravens".to_string(),
            season_stats: StatLines::default(),
        }];
        let teams = vec![NflTeam { id: "1".to_string(), team_name: "Ravens".to_string() }];

        let scored = add_scores_to_player_games(
            &[game],
            vec![create_test_record("p1")],
            &players,
            &teams,
        );
        assert_eq!(scored[0].points, "21.3");
    }

    #[test]
    fn test_skill_score_defaults_to_zero() {
        let mut game = create_test_box_score();
        game.player_stats.insert(
            "1001".to_string(),
            PlayerBoxScoreLine {
                player_id: "1001".to_string(),
                team_id: "1".to_string(),
                ..Default::default()
            },
        );

        let players = vec![Player {
            id: "p1".to_string(),
            provider_id: "1001".to_string(),
            positions: vec!["TE".to_string()],
            team: "Ravens".to_string(),
            season_stats: StatLines::default(),
        }];

        let scored =
            add_scores_to_player_games(&[game], vec![create_test_record("p1")], &players, &[]);
        assert_eq!(scored[0].points, "0");
    }

    #[test]
    fn test_defense_record_scored_through_brackets() {
        let game = create_test_box_score();
        let players = vec![Player {
            id: "Ravens".to_string(),
            provider_id: "1".to_string(),
            positions: vec!["DEF".to_string()],
            team: "Ravens".to_string(),
            season_stats: StatLines::default(),
        }];
        let teams = vec![NflTeam { id: "1".to_string(), team_name: "Ravens".to_string() }];

        let scored = add_scores_to_player_games(
            &[game],
            vec![create_test_record("Ravens")],
            &players,
            &teams,
        );

        let expected =
            format_points(SCORING_TABLE.yds_allow_100_199 + SCORING_TABLE.pts_allow_0);
        assert_eq!(scored[0].points, expected);
    }

    #[test]
    fn test_unknown_player_leaves_record_unscored() {
        let game = create_test_box_score();
        let scored =
            add_scores_to_player_games(&[game], vec![create_test_record("ghost")], &[], &[]);
        assert_eq!(scored.len(), 1);
        assert!(scored[0].points.is_empty());
    }

    #[test]
    fn test_format_points_decimal_string() {
        assert_eq!(format_points(18.0), "18");
        assert_eq!(format_points(18.5), "18.5");
        assert_eq!(format_points(-4.0), "-4");
        assert_eq!(format_points(0.0), "0");
    }
}
