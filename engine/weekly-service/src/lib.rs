//! Weekly Pipeline Service
//!
//! Orchestrates the two weekly runs around the stat engine: the post-game
//! pipeline scores last week's games and folds them into season totals, and
//! the pre-game pipeline builds the coming week's game records with fresh
//! rankings. All fetching and persistence lives here; the engine itself
//! stays pure.

pub mod client;
pub mod config;
pub mod loader;
pub mod models;
pub mod service;

pub use client::{BoxScoreClient, DataApiClient, LeagueStateClient};
pub use config::WeeklyConfig;
pub use loader::Loader;
pub use models::{NflGame, NflState, PipelineEvent};
pub use service::WeeklyService;
