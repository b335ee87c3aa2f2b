use crate::error::{EngineError, Result};
use crate::models::{
    DefenseRanks, KickingRanks, PassingRanks, Player, PlayerGame, PositionGroup, ReceivingRanks,
    RushingRanks, StatRanking,
};
use crate::teams::is_defense_player_game;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::warn;

/// Bucket game records by week token.
///
/// The week must be a base-10 integer in [1, 18]; anything else rejects the
/// whole arrangement, never a silent default.
pub fn arrange_player_games_by_week(
    player_games: Vec<PlayerGame>,
) -> Result<HashMap<String, Vec<PlayerGame>>> {
    let mut by_week: HashMap<String, Vec<PlayerGame>> = HashMap::new();

    for game in player_games {
        let week: u32 = game
            .week
            .parse()
            .map_err(|_| EngineError::InvalidWeek(game.week.clone()))?;
        if !(1..=18).contains(&week) {
            return Err(EngineError::InvalidWeek(game.week.clone()));
        }

        by_week.entry(game.week.clone()).or_default().push(game);
    }

    Ok(by_week)
}

enum SortDirection {
    /// More is better (yards, touchdowns, takeaways, ...)
    Descending,
    /// Fewer is better (interceptions thrown, anything allowed)
    Ascending,
}

/// One category's standing: player ID -> 0-based position in the sorted
/// pool, computed once up front so every lookup is O(1).
struct CategoryRanking {
    order: HashMap<String, usize>,
    len: usize,
}

impl CategoryRanking {
    /// Sort the pool by one season-cumulative value. Players whose season
    /// stats carry no data for the category are left out of the list
    /// entirely. The sort is stable, so ties keep roster iteration order.
    fn build<F>(pool: &[&Player], direction: SortDirection, key: F) -> Self
    where
        F: Fn(&Player) -> Option<f64>,
    {
        let mut entries: Vec<(&str, f64)> = pool
            .iter()
            .filter_map(|p| key(p).map(|value| (p.id.as_str(), value)))
            .collect();

        match direction {
            SortDirection::Descending => {
                entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal))
            }
            SortDirection::Ascending => {
                entries.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
            }
        }

        let len = entries.len();
        let order = entries
            .into_iter()
            .enumerate()
            .map(|(index, (id, _))| (id.to_string(), index))
            .collect();

        CategoryRanking { order, len }
    }

    /// 1-based rank, with the week-1 sentinel for players missing from the
    /// list and last-plus-one for a data gap on any later week.
    fn rank(&self, player_id: &str, week: &str) -> i32 {
        match self.order.get(player_id) {
            Some(index) => (*index + 1) as i32,
            None if week == "1" => -1,
            None => (self.len + 1) as i32,
        }
    }
}

struct SkillRankings {
    carries: CategoryRanking,
    rush_yds: CategoryRanking,
    rush_td: CategoryRanking,
    pass_attempts: CategoryRanking,
    pass_yds: CategoryRanking,
    pass_td: CategoryRanking,
    int: CategoryRanking,
    receptions: CategoryRanking,
    rec_yds: CategoryRanking,
    rec_td: CategoryRanking,
    targets: CategoryRanking,
}

fn rank_skill_pool(pool: &[&Player]) -> SkillRankings {
    use SortDirection::{Ascending, Descending};

    SkillRankings {
        carries: CategoryRanking::build(pool, Descending, |p| {
            p.season_stats.rushing.as_ref().map(|r| r.carries)
        }),
        rush_yds: CategoryRanking::build(pool, Descending, |p| {
            p.season_stats.rushing.as_ref().map(|r| r.rush_yds)
        }),
        rush_td: CategoryRanking::build(pool, Descending, |p| {
            p.season_stats.rushing.as_ref().map(|r| r.rush_td)
        }),
        pass_attempts: CategoryRanking::build(pool, Descending, |p| {
            p.season_stats.passing.as_ref().map(|s| s.pass_attempts)
        }),
        pass_yds: CategoryRanking::build(pool, Descending, |p| {
            p.season_stats.passing.as_ref().map(|s| s.pass_yds)
        }),
        pass_td: CategoryRanking::build(pool, Descending, |p| {
            p.season_stats.passing.as_ref().map(|s| s.pass_td)
        }),
        int: CategoryRanking::build(pool, Ascending, |p| {
            p.season_stats.passing.as_ref().map(|s| s.int)
        }),
        receptions: CategoryRanking::build(pool, Descending, |p| {
            p.season_stats.receiving.as_ref().map(|r| r.receptions)
        }),
        rec_yds: CategoryRanking::build(pool, Descending, |p| {
            p.season_stats.receiving.as_ref().map(|r| r.rec_yds)
        }),
        rec_td: CategoryRanking::build(pool, Descending, |p| {
            p.season_stats.receiving.as_ref().map(|r| r.rec_td)
        }),
        targets: CategoryRanking::build(pool, Descending, |p| {
            p.season_stats.receiving.as_ref().map(|r| r.targets)
        }),
    }
}

struct KickerRankings {
    fg_made: CategoryRanking,
    xp_made: CategoryRanking,
}

fn rank_kicker_pool(pool: &[&Player]) -> KickerRankings {
    KickerRankings {
        fg_made: CategoryRanking::build(pool, SortDirection::Descending, |p| {
            p.season_stats.kicking.as_ref().map(|k| k.fg_made)
        }),
        xp_made: CategoryRanking::build(pool, SortDirection::Descending, |p| {
            p.season_stats.kicking.as_ref().map(|k| k.xp_made)
        }),
    }
}

struct DefenseRankings {
    yds_allowed: CategoryRanking,
    pts_allowed: CategoryRanking,
    takeaways: CategoryRanking,
    pass_yds_allowed: CategoryRanking,
    pass_tds_allowed: CategoryRanking,
    rush_yds_allowed: CategoryRanking,
    rush_tds_allowed: CategoryRanking,
    fg_allowed: CategoryRanking,
    xp_allowed: CategoryRanking,
}

fn rank_defense_pool(pool: &[&Player]) -> DefenseRankings {
    use SortDirection::{Ascending, Descending};

    DefenseRankings {
        yds_allowed: CategoryRanking::build(pool, Ascending, |p| {
            p.season_stats.defense.as_ref().map(|d| d.yds_allowed)
        }),
        pts_allowed: CategoryRanking::build(pool, Ascending, |p| {
            p.season_stats.defense.as_ref().map(|d| d.pts_allowed)
        }),
        takeaways: CategoryRanking::build(pool, Descending, |p| {
            p.season_stats
                .defense
                .as_ref()
                .map(|d| d.defensive_interceptions + d.fumbles_recovered)
        }),
        pass_yds_allowed: CategoryRanking::build(pool, Ascending, |p| {
            p.season_stats.defense.as_ref().map(|d| d.pass_yds_allowed)
        }),
        pass_tds_allowed: CategoryRanking::build(pool, Ascending, |p| {
            p.season_stats.defense.as_ref().map(|d| d.pass_tds_allowed)
        }),
        rush_yds_allowed: CategoryRanking::build(pool, Ascending, |p| {
            p.season_stats.defense.as_ref().map(|d| d.rush_yds_allowed)
        }),
        rush_tds_allowed: CategoryRanking::build(pool, Ascending, |p| {
            p.season_stats.defense.as_ref().map(|d| d.rush_tds_allowed)
        }),
        fg_allowed: CategoryRanking::build(pool, Ascending, |p| {
            p.season_stats.defense.as_ref().map(|d| d.fg_allowed)
        }),
        xp_allowed: CategoryRanking::build(pool, Ascending, |p| {
            p.season_stats.defense.as_ref().map(|d| d.xp_allowed)
        }),
    }
}

/// Stamp every game record with its position group's category rankings,
/// computed from season-cumulative totals across the whole roster.
///
/// Defense records are recognized by their team-name player ID, not by the
/// roster player's position tags; records whose player cannot be resolved
/// are dropped with a diagnostic.
pub fn add_weekly_rankings_to_player_games(
    player_games: Vec<PlayerGame>,
    players: &[Player],
) -> Vec<PlayerGame> {
    let skill_pool: Vec<&Player> = players
        .iter()
        .filter(|p| PositionGroup::for_player(p) == PositionGroup::Skill)
        .collect();
    let kicker_pool: Vec<&Player> = players
        .iter()
        .filter(|p| PositionGroup::for_player(p) == PositionGroup::Kicking)
        .collect();
    let defense_pool: Vec<&Player> = players
        .iter()
        .filter(|p| PositionGroup::for_player(p) == PositionGroup::Defense)
        .collect();

    let skill = rank_skill_pool(&skill_pool);
    let kickers = rank_kicker_pool(&kicker_pool);
    let defenses = rank_defense_pool(&defense_pool);

    let players_by_id: HashMap<&str, &Player> =
        players.iter().map(|p| (p.id.as_str(), p)).collect();

    let mut ranked_games = Vec::with_capacity(player_games.len());

    for mut game in player_games {
        let Some(player) = players_by_id.get(game.player_id.as_str()) else {
            warn!("could not find player with id {}", game.player_id);
            continue;
        };

        let id = game.player_id.as_str();
        let week = game.week.as_str();
        let mut rankings = StatRanking::default();

        if is_defense_player_game(&game) {
            rankings.defense = Some(DefenseRanks {
                yds_allowed: defenses.yds_allowed.rank(id, week),
                pts_allowed: defenses.pts_allowed.rank(id, week),
                takeaways: defenses.takeaways.rank(id, week),
                pass_yds_allowed: defenses.pass_yds_allowed.rank(id, week),
                pass_tds_allowed: defenses.pass_tds_allowed.rank(id, week),
                rush_yds_allowed: defenses.rush_yds_allowed.rank(id, week),
                rush_tds_allowed: defenses.rush_tds_allowed.rank(id, week),
                fg_allowed: defenses.fg_allowed.rank(id, week),
                xp_allowed: defenses.xp_allowed.rank(id, week),
            });
        } else if PositionGroup::for_player(player) == PositionGroup::Kicking {
            rankings.kicking = Some(KickingRanks {
                fg_made: kickers.fg_made.rank(id, week),
                xp_made: kickers.xp_made.rank(id, week),
            });
        } else {
            rankings.rushing = Some(RushingRanks {
                carries: skill.carries.rank(id, week),
                rush_yds: skill.rush_yds.rank(id, week),
                rush_td: skill.rush_td.rank(id, week),
            });
            rankings.passing = Some(PassingRanks {
                pass_attempts: skill.pass_attempts.rank(id, week),
                pass_yds: skill.pass_yds.rank(id, week),
                pass_td: skill.pass_td.rank(id, week),
                int: skill.int.rank(id, week),
            });
            rankings.receiving = Some(ReceivingRanks {
                receptions: skill.receptions.rank(id, week),
                rec_yds: skill.rec_yds.rank(id, week),
                rec_td: skill.rec_td.rank(id, week),
                targets: skill.targets.rank(id, week),
            });
        }

        game.stat_rankings = Some(rankings);
        ranked_games.push(game);
    }

    ranked_games
}
