//! # Stat Engine
//!
//! Pure stat aggregation and ranking engine for weekly NFL fantasy data.
//!
//! The engine turns raw box scores and a roster into scored, ranked per-game
//! records: deduplicate box scores, map lines onto roster players, score
//! defenses via the bracketed scoring table, fold game stats into season
//! totals, and stamp every record with per-category rankings. No I/O happens
//! here; fetching and persistence belong to the weekly service.

pub mod aggregate;
pub mod boxscore;
pub mod error;
pub mod mapper;
pub mod models;
pub mod ranking;
pub mod scoring;
pub mod teams;


pub use aggregate::{accumulate_game, add_stats_to_players};
pub use boxscore::{dedup_box_scores, BoxScore, PlayerBoxScoreLine, TeamDefenseLine};
pub use error::{EngineError, Result};
pub use mapper::map_box_scores_to_player_games;
pub use models::{NflTeam, Player, PlayerGame, PositionGroup, StatLines, StatRanking};
pub use ranking::{add_weekly_rankings_to_player_games, arrange_player_games_by_week};
pub use scoring::{add_scores_to_player_games, calculate_dst_points, ScoringTable, SCORING_TABLE};

/// Current version of the engine
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
