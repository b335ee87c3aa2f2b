use serde::{Deserialize, Serialize};

/// A roster player as stored in the data API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Internal player ID (team-name token for defenses)
    pub id: String,

    /// Box-score provider's player ID
    #[serde(rename = "providerID")]
    pub provider_id: String,

    /// Position tags (e.g., ["QB"], ["RB", "WR"], ["DEF"])
    pub positions: Vec<String>,

    /// Current team name (kept current across trades)
    pub team: String,

    /// Season-cumulative stat counters
    #[serde(rename = "seasonStats", default)]
    pub season_stats: StatLines,
}

/// Position group a player falls into for aggregation and ranking purposes.
///
/// Resolved once per player instead of re-testing tag membership at every
/// branch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionGroup {
    Defense,
    Kicking,
    Skill,
}

impl PositionGroup {
    /// Classify a player by its position tags: DEF wins over K, everyone
    /// else is a skill position.
    pub fn for_player(player: &Player) -> Self {
        if player.positions.iter().any(|p| p == "DEF") {
            PositionGroup::Defense
        } else if player.positions.iter().any(|p| p == "K") {
            PositionGroup::Kicking
        } else {
            PositionGroup::Skill
        }
    }
}

/// An NFL team record from the team directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NflTeam {
    pub id: String,

    #[serde(rename = "teamName")]
    pub team_name: String,
}

/// The per-(player, game) output record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerGame {
    #[serde(rename = "playerID")]
    pub player_id: String,

    #[serde(rename = "gameID")]
    pub game_id: String,

    pub season: String,

    pub week: String,

    /// Player's current team name
    pub team: String,

    /// Opposing team name
    pub opponent: String,

    pub is_home: bool,

    /// Fantasy points as a decimal-valued string (e.g., "18.5")
    #[serde(default)]
    pub points: String,

    /// Raw per-category stat lines for this game
    #[serde(default)]
    pub stats: StatLines,

    /// Rankings stamped by the ranking engine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stat_rankings: Option<StatRanking>,
}

/// Per-category stat lines. Used both for a single game and for
/// season-cumulative totals; a `None` sub-line means no data for that
/// category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatLines {
    #[serde(rename = "Passing", skip_serializing_if = "Option::is_none")]
    pub passing: Option<PassingStats>,

    #[serde(rename = "Rushing", skip_serializing_if = "Option::is_none")]
    pub rushing: Option<RushingStats>,

    #[serde(rename = "Receiving", skip_serializing_if = "Option::is_none")]
    pub receiving: Option<ReceivingStats>,

    #[serde(rename = "Kicking", skip_serializing_if = "Option::is_none")]
    pub kicking: Option<KickingStats>,

    #[serde(rename = "Defense", skip_serializing_if = "Option::is_none")]
    pub defense: Option<DefenseStats>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassingStats {
    pub int: f64,
    pub pass_attempts: f64,
    pub pass_completions: f64,
    #[serde(rename = "passTD")]
    pub pass_td: f64,
    pub pass_yds: f64,
    pub qbr: f64,
    pub rtg: f64,
    pub sacked: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RushingStats {
    pub carries: f64,
    pub long_rush: f64,
    pub rush_avg: f64,
    #[serde(rename = "rushTD")]
    pub rush_td: f64,
    pub rush_yds: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivingStats {
    pub long_rec: f64,
    pub rec_avg: f64,
    #[serde(rename = "recTD")]
    pub rec_td: f64,
    pub rec_yds: f64,
    pub receptions: f64,
    pub targets: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KickingStats {
    pub fg_attempts: f64,
    pub fg_long: f64,
    pub fg_made: f64,
    /// Running sum of per-game percentages, not a recomputed ratio
    pub fg_pct: f64,
    pub xp_attempts: f64,
    pub xp_made: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefenseStats {
    #[serde(rename = "defTD")]
    pub def_td: f64,
    pub defensive_interceptions: f64,
    pub fg_allowed: f64,
    pub fumbles_recovered: f64,
    #[serde(rename = "passTDsAllowed")]
    pub pass_tds_allowed: f64,
    pub pass_yds_allowed: f64,
    pub pts_allowed: f64,
    #[serde(rename = "rushTDsAllowed")]
    pub rush_tds_allowed: f64,
    pub rush_yds_allowed: f64,
    pub sacks: f64,
    pub xp_allowed: f64,
    pub yds_allowed: f64,
}

/// Per-category ranks for the record's position group. 1 = best standing;
/// -1 is the week-1 "not yet ranked" sentinel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatRanking {
    #[serde(rename = "Passing", skip_serializing_if = "Option::is_none")]
    pub passing: Option<PassingRanks>,

    #[serde(rename = "Rushing", skip_serializing_if = "Option::is_none")]
    pub rushing: Option<RushingRanks>,

    #[serde(rename = "Receiving", skip_serializing_if = "Option::is_none")]
    pub receiving: Option<ReceivingRanks>,

    #[serde(rename = "Kicking", skip_serializing_if = "Option::is_none")]
    pub kicking: Option<KickingRanks>,

    #[serde(rename = "Defense", skip_serializing_if = "Option::is_none")]
    pub defense: Option<DefenseRanks>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassingRanks {
    pub pass_attempts: i32,
    pub pass_yds: i32,
    #[serde(rename = "passTD")]
    pub pass_td: i32,
    pub int: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RushingRanks {
    pub carries: i32,
    pub rush_yds: i32,
    #[serde(rename = "rushTD")]
    pub rush_td: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivingRanks {
    pub receptions: i32,
    pub rec_yds: i32,
    #[serde(rename = "recTD")]
    pub rec_td: i32,
    pub targets: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KickingRanks {
    pub fg_made: i32,
    pub xp_made: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefenseRanks {
    pub yds_allowed: i32,
    pub pts_allowed: i32,
    pub takeaways: i32,
    pub pass_yds_allowed: i32,
    #[serde(rename = "passTDsAllowed")]
    pub pass_tds_allowed: i32,
    pub rush_yds_allowed: i32,
    #[serde(rename = "rushTDsAllowed")]
    pub rush_tds_allowed: i32,
    pub fg_allowed: i32,
    pub xp_allowed: i32,
}
