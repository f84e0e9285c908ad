//! # cricket_core - Cricket Player and Team Model
//!
//! Player records with derived statistics, equipment with composable
//! capabilities, and an append-only roster sized for a playing XI.
//!
//! ## Features
//! - Batting and bowling records built on a shared participant profile
//! - Process-wide creation counters per record kind
//! - Bat/ball equipment with stroke, swing and bounce capabilities
//! - Fixed-capacity generic roster with typed errors
//! - JSON API for assembling a squad

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod roster;

pub use api::{build_squad_json, SquadRequest, SquadResponse};
pub use config::ModelConfig;
pub use error::{ConfigError, CoreError, Result, RosterError, ValidationError};
pub use models::{
    Ball, Bat, BattingRecord, Bounceable, BowlingRecord, Capability, Equipment, EquipmentItem,
    KitBag, Participant, PlayerProfile, RecordValidator, Strokeable, Swingable,
};
pub use roster::{FixedRoster, TEAM_SIZE};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
