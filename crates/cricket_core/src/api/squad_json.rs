//! JSON API for assembling a squad
//!
//! Takes a list of batting and bowling entries, builds the records through
//! their constructors (so the creation counters stay exact), optionally
//! validates them, and seats them in a fixed-size roster.

use crate::config::ModelConfig;
use crate::error::Result;
use crate::models::{BattingRecord, BowlingRecord, PlayerProfile, RecordValidator};
use crate::roster::FixedRoster;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub const SQUAD_SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquadRequest {
    #[serde(default)]
    pub schema_version: Option<u8>,
    pub entries: Vec<SquadEntryRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum SquadEntryRequest {
    Batting {
        identity: String,
        age: u32,
        #[serde(default)]
        matches: u32,
        #[serde(default)]
        runs: u32,
    },
    Bowling {
        identity: String,
        age: u32,
        #[serde(default)]
        matches: u32,
        #[serde(default)]
        overs: f32,
        #[serde(default)]
        runs_conceded: u32,
        #[serde(default)]
        wickets: u32,
    },
}

/// A seated player of either role.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum SquadMember {
    Batting(BattingRecord),
    Bowling(BowlingRecord),
}

impl SquadMember {
    pub fn role(&self) -> &'static str {
        match self {
            Self::Batting(_) => "batting",
            Self::Bowling(_) => "bowling",
        }
    }

    fn profile(&self) -> &dyn PlayerProfile {
        match self {
            Self::Batting(record) => record,
            Self::Bowling(record) => record,
        }
    }

    fn validate(&self, config: &ModelConfig) -> Result<()> {
        match self {
            Self::Batting(record) => {
                RecordValidator::validate_batting(record, config.float_tolerance)?
            }
            Self::Bowling(record) => {
                RecordValidator::validate_bowling(record, config.float_tolerance)?
            }
        }
        Ok(())
    }
}

impl PlayerProfile for SquadMember {
    fn identity(&self) -> &str {
        self.profile().identity()
    }

    fn matches_played(&self) -> u32 {
        self.profile().matches_played()
    }

    fn describe(&self) -> String {
        self.profile().describe()
    }
}

impl From<&SquadEntryRequest> for SquadMember {
    fn from(entry: &SquadEntryRequest) -> Self {
        match entry {
            SquadEntryRequest::Batting { identity, age, matches, runs } => {
                Self::Batting(BattingRecord::with_runs(identity.as_str(), *age, *matches, *runs))
            }
            SquadEntryRequest::Bowling { identity, age, matches, overs, runs_conceded, wickets } => {
                Self::Bowling(BowlingRecord::with_figures(
                    identity.as_str(),
                    *age,
                    *matches,
                    *overs,
                    *runs_conceded,
                    *wickets,
                ))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SquadResponse {
    pub schema_version: u8,
    pub roster_size: usize,
    pub capacity: usize,
    pub lines: Vec<String>,
    pub entries: Vec<EntrySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntrySummary {
    pub identity: String,
    pub role: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batting_average: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike_rate: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub economy_rate: Option<f32>,
}

impl From<&SquadMember> for EntrySummary {
    fn from(member: &SquadMember) -> Self {
        let (batting_average, strike_rate, economy_rate) = match member {
            SquadMember::Batting(b) => (Some(b.batting_average()), Some(b.strike_rate()), None),
            SquadMember::Bowling(b) => (None, None, Some(b.economy_rate())),
        };
        Self {
            identity: member.identity().to_string(),
            role: member.role().to_string(),
            description: member.describe(),
            batting_average,
            strike_rate,
            economy_rate,
        }
    }
}

/// Build a roster from a parsed request.
pub fn build_squad(
    request: &SquadRequest,
    config: &ModelConfig,
) -> Result<FixedRoster<SquadMember>> {
    if let Some(version) = request.schema_version {
        if version != SQUAD_SCHEMA_VERSION {
            warn!(
                "Squad request schema version {} differs from {}",
                version, SQUAD_SCHEMA_VERSION
            );
        }
    }

    let mut roster = FixedRoster::from_config(config);
    for entry in &request.entries {
        let member = SquadMember::from(entry);
        if config.strict_validation {
            member.validate(config)?;
        }
        debug!("Seating {} ({})", member.identity(), member.role());
        roster.add(member)?;
    }

    info!("Squad assembled: {}/{} slots", roster.len(), roster.capacity());
    Ok(roster)
}

/// Summarize a built roster.
pub fn summarize(roster: &FixedRoster<SquadMember>) -> SquadResponse {
    SquadResponse {
        schema_version: SQUAD_SCHEMA_VERSION,
        roster_size: roster.len(),
        capacity: roster.capacity(),
        lines: roster.iter().map(|m| m.describe()).collect(),
        entries: roster.iter().map(EntrySummary::from).collect(),
    }
}

/// JSON in, JSON out.
pub fn build_squad_json(request_json: &str, config: &ModelConfig) -> Result<String> {
    let request: SquadRequest = serde_json::from_str(request_json)?;
    let roster = build_squad(&request, config)?;
    Ok(serde_json::to_string(&summarize(&roster))?)
}

/// [`build_squad_json`] with the configuration named by `CRICKET_CONFIG_PATH`.
pub fn build_squad_json_default(request_json: &str) -> Result<String> {
    let config = ModelConfig::from_env()?;
    build_squad_json(request_json, &config)
}
