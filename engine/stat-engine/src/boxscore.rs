use crate::models::{
    DefenseStats, KickingStats, PassingStats, ReceivingStats, RushingStats, StatLines,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Raw box score for one physical game, as returned by the provider.
///
/// All numeric stats arrive as strings; missing or unparseable values are
/// treated as zero downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxScore {
    #[serde(rename = "gameID")]
    pub game_id: String,

    #[serde(rename = "teamIDHome")]
    pub team_id_home: String,

    #[serde(rename = "teamIDAway")]
    pub team_id_away: String,

    /// Provider player ID -> that player's stat line
    #[serde(rename = "playerStats", default)]
    pub player_stats: HashMap<String, PlayerBoxScoreLine>,

    /// Team defense / special teams lines for both sides
    #[serde(rename = "DST")]
    pub dst: DstLines,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DstLines {
    pub home: TeamDefenseLine,
    pub away: TeamDefenseLine,
}

/// One side's defense/special-teams totals
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDefenseLine {
    #[serde(rename = "teamID", default)]
    pub team_id: String,

    pub yds_allowed: Option<String>,
    pub pts_allowed: Option<String>,
    #[serde(rename = "defTD")]
    pub def_td: Option<String>,
    pub sacks: Option<String>,
    pub defensive_interceptions: Option<String>,
    pub fumbles_recovered: Option<String>,
    pub safeties: Option<String>,
}

/// One player's raw line within a box score
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerBoxScoreLine {
    #[serde(rename = "playerID", default)]
    pub player_id: String,

    #[serde(rename = "teamID", default)]
    pub team_id: String,

    /// Provider-precomputed fantasy values for skill positions
    #[serde(rename = "fantasyPointsDefault", skip_serializing_if = "Option::is_none")]
    pub fantasy_points_default: Option<FantasyPointsDefault>,

    #[serde(rename = "Passing", skip_serializing_if = "Option::is_none")]
    pub passing: Option<RawPassingLine>,

    #[serde(rename = "Rushing", skip_serializing_if = "Option::is_none")]
    pub rushing: Option<RawRushingLine>,

    #[serde(rename = "Receiving", skip_serializing_if = "Option::is_none")]
    pub receiving: Option<RawReceivingLine>,

    #[serde(rename = "Kicking", skip_serializing_if = "Option::is_none")]
    pub kicking: Option<RawKickingLine>,

    #[serde(rename = "Defense", skip_serializing_if = "Option::is_none")]
    pub defense: Option<RawDefenseLine>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FantasyPointsDefault {
    #[serde(rename = "halfPPR")]
    pub half_ppr: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPassingLine {
    pub int: Option<String>,
    pub pass_attempts: Option<String>,
    pub pass_completions: Option<String>,
    #[serde(rename = "passTD")]
    pub pass_td: Option<String>,
    pub pass_yds: Option<String>,
    pub qbr: Option<String>,
    pub rtg: Option<String>,
    pub sacked: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRushingLine {
    pub carries: Option<String>,
    pub long_rush: Option<String>,
    pub rush_avg: Option<String>,
    #[serde(rename = "rushTD")]
    pub rush_td: Option<String>,
    pub rush_yds: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReceivingLine {
    pub long_rec: Option<String>,
    pub rec_avg: Option<String>,
    #[serde(rename = "recTD")]
    pub rec_td: Option<String>,
    pub rec_yds: Option<String>,
    pub receptions: Option<String>,
    pub targets: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawKickingLine {
    pub fg_attempts: Option<String>,
    pub fg_long: Option<String>,
    pub fg_made: Option<String>,
    pub fg_pct: Option<String>,
    pub xp_attempts: Option<String>,
    pub xp_made: Option<String>,
}

/// Defensive counters on an individual player's line. `fumbles` here are
/// fumbles forced by that player, which feed the opposing defense's score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDefenseLine {
    pub fumbles: Option<String>,
    pub sacks: Option<String>,
    pub defensive_interceptions: Option<String>,
    pub total_tackles: Option<String>,
}

/// Lenient numeric parse: missing or unparseable values count as zero.
pub(crate) fn parse_stat(raw: &Option<String>) -> f64 {
    raw.as_deref()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

impl PlayerBoxScoreLine {
    /// Whether this line records at least one forced fumble
    pub fn has_forced_fumble(&self) -> bool {
        self.defense
            .as_ref()
            .map(|d| parse_stat(&d.fumbles) > 0.0)
            .unwrap_or(false)
    }

    /// Convert raw string counters into numeric per-game stat lines
    pub fn to_stat_lines(&self) -> StatLines {
        StatLines {
            passing: self.passing.as_ref().map(|p| PassingStats {
                int: parse_stat(&p.int),
                pass_attempts: parse_stat(&p.pass_attempts),
                pass_completions: parse_stat(&p.pass_completions),
                pass_td: parse_stat(&p.pass_td),
                pass_yds: parse_stat(&p.pass_yds),
                qbr: parse_stat(&p.qbr),
                rtg: parse_stat(&p.rtg),
                sacked: parse_stat(&p.sacked),
            }),
            rushing: self.rushing.as_ref().map(|r| RushingStats {
                carries: parse_stat(&r.carries),
                long_rush: parse_stat(&r.long_rush),
                rush_avg: parse_stat(&r.rush_avg),
                rush_td: parse_stat(&r.rush_td),
                rush_yds: parse_stat(&r.rush_yds),
            }),
            receiving: self.receiving.as_ref().map(|r| ReceivingStats {
                long_rec: parse_stat(&r.long_rec),
                rec_avg: parse_stat(&r.rec_avg),
                rec_td: parse_stat(&r.rec_td),
                rec_yds: parse_stat(&r.rec_yds),
                receptions: parse_stat(&r.receptions),
                targets: parse_stat(&r.targets),
            }),
            kicking: self.kicking.as_ref().map(|k| KickingStats {
                fg_attempts: parse_stat(&k.fg_attempts),
                fg_long: parse_stat(&k.fg_long),
                fg_made: parse_stat(&k.fg_made),
                fg_pct: parse_stat(&k.fg_pct),
                xp_attempts: parse_stat(&k.xp_attempts),
                xp_made: parse_stat(&k.xp_made),
            }),
            defense: None,
        }
    }
}

impl TeamDefenseLine {
    /// Convert a team defense line into numeric defense stats
    pub fn to_defense_stats(&self) -> DefenseStats {
        DefenseStats {
            def_td: parse_stat(&self.def_td),
            defensive_interceptions: parse_stat(&self.defensive_interceptions),
            fumbles_recovered: parse_stat(&self.fumbles_recovered),
            pts_allowed: parse_stat(&self.pts_allowed),
            sacks: parse_stat(&self.sacks),
            yds_allowed: parse_stat(&self.yds_allowed),
            ..Default::default()
        }
    }
}

/// Drop duplicate box scores, keeping the first occurrence of each game ID.
/// Upstream can return the same game more than once.
pub fn dedup_box_scores(box_scores: Vec<BoxScore>) -> Vec<BoxScore> {
    let mut seen: HashSet<String> = HashSet::new();
    box_scores
        .into_iter()
        .filter(|game| seen.insert(game.game_id.clone()))
        .collect()
}
