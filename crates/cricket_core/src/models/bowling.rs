//! Bowling record
//!
//! Same shape as the batting record: a [`Participant`] plus bowling figures,
//! with economy derived at construction. `describe()` is not overridden, so a
//! bowler prints with the generic participant line.

use super::participant::{Participant, PlayerProfile};
use super::stats;
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Independent of the batting counter.
static BOWLERS_CREATED: AtomicU64 = AtomicU64::new(0);

fn register_bowler() {
    let total = BOWLERS_CREATED.fetch_add(1, Ordering::Relaxed) + 1;
    log::trace!("BowlingRecord #{} created", total);
}

#[derive(Debug, PartialEq, Serialize)]
pub struct BowlingRecord {
    #[serde(flatten)]
    participant: Participant,
    age: Option<u32>,
    overs_bowled: f32,
    runs_conceded: u32,
    wickets_taken: u32,
    economy_rate: f32,
}

impl BowlingRecord {
    pub fn new(identity: impl Into<String>, age: u32) -> Self {
        register_bowler();
        Self {
            participant: Participant::new(identity),
            age: Some(age),
            overs_bowled: 0.0,
            runs_conceded: 0,
            wickets_taken: 0,
            economy_rate: 0.0,
        }
    }

    /// Overs only. No runs are known yet, so economy starts at `0.0`.
    pub fn with_overs(identity: impl Into<String>, age: u32, matches: u32, overs: f32) -> Self {
        Self::with_figures(identity, age, matches, overs, 0, 0)
    }

    /// Overs, runs and wickets; economy is derived.
    pub fn with_figures(
        identity: impl Into<String>,
        age: u32,
        matches: u32,
        overs: f32,
        runs_conceded: u32,
        wickets_taken: u32,
    ) -> Self {
        register_bowler();
        Self {
            participant: Participant::with_matches(identity, matches),
            age: Some(age),
            overs_bowled: overs,
            runs_conceded,
            wickets_taken,
            economy_rate: stats::economy_rate(runs_conceded, overs),
        }
    }

    /// Every figure supplied by the caller. Nothing is recomputed.
    pub fn with_stats(
        identity: impl Into<String>,
        age: u32,
        matches: u32,
        overs: f32,
        runs_conceded: u32,
        wickets_taken: u32,
        economy_rate: f32,
    ) -> Self {
        register_bowler();
        Self {
            participant: Participant::with_matches(identity, matches),
            age: Some(age),
            overs_bowled: overs,
            runs_conceded,
            wickets_taken,
            economy_rate,
        }
    }

    pub fn total_created() -> u64 {
        BOWLERS_CREATED.load(Ordering::Relaxed)
    }

    /// Re-derive economy from the current runs and overs.
    pub fn recalculate(&mut self) {
        self.economy_rate = stats::economy_rate(self.runs_conceded, self.overs_bowled);
    }

    pub fn participant(&self) -> &Participant {
        &self.participant
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn overs_bowled(&self) -> f32 {
        self.overs_bowled
    }

    pub fn runs_conceded(&self) -> u32 {
        self.runs_conceded
    }

    pub fn wickets_taken(&self) -> u32 {
        self.wickets_taken
    }

    pub fn economy_rate(&self) -> f32 {
        self.economy_rate
    }

    pub fn set_identity(&mut self, identity: impl Into<String>) {
        self.participant.set_identity(identity);
    }

    pub fn set_matches_played(&mut self, matches: u32) {
        self.participant.set_matches_played(matches);
    }

    pub fn set_age(&mut self, age: Option<u32>) {
        self.age = age;
    }

    pub fn set_overs_bowled(&mut self, overs: f32) {
        self.overs_bowled = overs;
    }

    pub fn set_runs_conceded(&mut self, runs: u32) {
        self.runs_conceded = runs;
    }

    pub fn set_wickets_taken(&mut self, wickets: u32) {
        self.wickets_taken = wickets;
    }

    pub fn set_economy_rate(&mut self, economy: f32) {
        self.economy_rate = economy;
    }
}

/// Field-wise copy, identity included. Counts as a new record.
impl Clone for BowlingRecord {
    fn clone(&self) -> Self {
        register_bowler();
        Self {
            participant: self.participant.clone(),
            age: self.age,
            overs_bowled: self.overs_bowled,
            runs_conceded: self.runs_conceded,
            wickets_taken: self.wickets_taken,
            economy_rate: self.economy_rate,
        }
    }
}

impl PlayerProfile for BowlingRecord {
    fn identity(&self) -> &str {
        self.participant.identity()
    }

    fn matches_played(&self) -> u32 {
        self.participant.matches_played()
    }
}

impl fmt::Display for BowlingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
