//! Batting record
//!
//! Wraps a [`Participant`] and adds runs plus the two derived figures.
//! Derived values are computed once, when the record is built; setters leave
//! them alone until [`BattingRecord::recalculate`] is called.

use super::participant::{Participant, PlayerProfile};
use super::stats;
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Every `BattingRecord` ever built in this process, copies included.
static BATSMEN_CREATED: AtomicU64 = AtomicU64::new(0);

fn register_batsman() {
    let total = BATSMEN_CREATED.fetch_add(1, Ordering::Relaxed) + 1;
    log::trace!("BattingRecord #{} created", total);
}

#[derive(Debug, PartialEq, Serialize)]
pub struct BattingRecord {
    #[serde(flatten)]
    participant: Participant,
    age: Option<u32>,
    runs_scored: u32,
    batting_average: f32,
    strike_rate: f32,
}

impl BattingRecord {
    /// Fresh record with no matches and no runs.
    pub fn new(identity: impl Into<String>, age: u32) -> Self {
        register_batsman();
        Self {
            participant: Participant::new(identity),
            age: Some(age),
            runs_scored: 0,
            batting_average: 0.0,
            strike_rate: 0.0,
        }
    }

    /// Record with career totals; average and strike rate are derived here.
    pub fn with_runs(identity: impl Into<String>, age: u32, matches: u32, runs: u32) -> Self {
        register_batsman();
        Self {
            participant: Participant::with_matches(identity, matches),
            age: Some(age),
            runs_scored: runs,
            batting_average: stats::batting_average(runs, matches),
            strike_rate: stats::strike_rate(runs, matches),
        }
    }

    /// Record with every figure supplied by the caller. Nothing is recomputed.
    pub fn with_stats(
        identity: impl Into<String>,
        age: u32,
        matches: u32,
        runs: u32,
        batting_average: f32,
        strike_rate: f32,
    ) -> Self {
        register_batsman();
        Self {
            participant: Participant::with_matches(identity, matches),
            age: Some(age),
            runs_scored: runs,
            batting_average,
            strike_rate,
        }
    }

    /// Placeholder batsman used when a slot has no real player yet.
    pub fn default_batsman() -> Self {
        Self::with_stats("Default Batsman", 25, 0, 0, 0.0, 0.0)
    }

    /// Number of records constructed so far, copies included.
    pub fn total_created() -> u64 {
        BATSMEN_CREATED.load(Ordering::Relaxed)
    }

    /// Re-derive average and strike rate from the current runs and matches.
    pub fn recalculate(&mut self) {
        let matches = self.participant.matches_played();
        self.batting_average = stats::batting_average(self.runs_scored, matches);
        self.strike_rate = stats::strike_rate(self.runs_scored, matches);
    }

    pub fn participant(&self) -> &Participant {
        &self.participant
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn runs_scored(&self) -> u32 {
        self.runs_scored
    }

    pub fn batting_average(&self) -> f32 {
        self.batting_average
    }

    pub fn strike_rate(&self) -> f32 {
        self.strike_rate
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

    pub fn set_runs_scored(&mut self, runs: u32) {
        self.runs_scored = runs;
    }

    pub fn set_batting_average(&mut self, average: f32) {
        self.batting_average = average;
    }

    pub fn set_strike_rate(&mut self, strike_rate: f32) {
        self.strike_rate = strike_rate;
    }
}

/// Copying a record counts as creating one.
impl Clone for BattingRecord {
    fn clone(&self) -> Self {
        register_batsman();
        Self {
            participant: self.participant.clone(),
            age: self.age,
            runs_scored: self.runs_scored,
            batting_average: self.batting_average,
            strike_rate: self.strike_rate,
        }
    }
}

impl PlayerProfile for BattingRecord {
    fn identity(&self) -> &str {
        self.participant.identity()
    }

    fn matches_played(&self) -> u32 {
        self.participant.matches_played()
    }

    fn describe(&self) -> String {
        format!("Batsman: {}, Runs: {}", self.identity(), self.runs_scored)
    }
}

impl fmt::Display for BattingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_overrides_participant_format() {
        let batsman = BattingRecord::with_runs("Virat Kohli", 32, 100, 12000);
        assert_eq!(batsman.describe(), "Batsman: Virat Kohli, Runs: 12000");
        assert_eq!(batsman.to_string(), "Batsman: Virat Kohli, Runs: 12000");
    }

    #[test]
    fn test_with_runs_derives_average_and_strike_rate() {
        let batsman = BattingRecord::with_runs("Virat Kohli", 32, 100, 12000);
        assert_eq!(batsman.batting_average(), 120.0);
        assert_eq!(batsman.strike_rate(), 120.0);
        assert_eq!(batsman.matches_played(), 100);
        assert_eq!(batsman.age(), Some(32));
    }

    #[test]
    fn test_zero_matches_gives_zero_average() {
        let batsman = BattingRecord::with_runs("Debutant", 19, 0, 50);
        assert_eq!(batsman.batting_average(), 0.0);
        assert_eq!(batsman.strike_rate(), 0.0);
    }

    #[test]
    fn test_new_zero_initializes() {
        let batsman = BattingRecord::new("Shubman Gill", 24);
        assert_eq!(batsman.runs_scored(), 0);
        assert_eq!(batsman.matches_played(), 0);
        assert_eq!(batsman.batting_average(), 0.0);
        assert_eq!(batsman.strike_rate(), 0.0);
    }

    #[test]
    fn test_with_stats_keeps_supplied_values() {
        let batsman = BattingRecord::with_stats("Rohit Sharma", 36, 10, 100, 55.5, 140.0);
        assert_eq!(batsman.batting_average(), 55.5);
        assert_eq!(batsman.strike_rate(), 140.0);
    }

    #[test]
    fn test_default_batsman() {
        let batsman = BattingRecord::default_batsman();
        assert_eq!(batsman.identity(), "Default Batsman");
        assert_eq!(batsman.age(), Some(25));
        assert_eq!(batsman.describe(), "Batsman: Default Batsman, Runs: 0");
    }

    #[test]
    fn test_setters_leave_derived_values_stale() {
        let mut batsman = BattingRecord::with_runs("Player 1", 20, 5, 10);
        assert_eq!(batsman.batting_average(), 2.0);

        batsman.set_runs_scored(50);
        assert_eq!(batsman.batting_average(), 2.0, "setters do not recompute");

        batsman.recalculate();
        assert_eq!(batsman.batting_average(), 10.0);
        assert_eq!(batsman.strike_rate(), 10.0);
    }

    #[test]
    fn test_clone_is_field_wise_and_independent() {
        let original = BattingRecord::with_runs("Virat Kohli", 32, 100, 12000);
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.set_identity("KL Rahul");
        copy.set_age(None);
        assert_eq!(original.identity(), "Virat Kohli");
        assert_eq!(original.age(), Some(32));
        assert_eq!(copy.describe(), "Batsman: KL Rahul, Runs: 12000");
    }

    #[test]
    fn test_serializes_flat() {
        let batsman = BattingRecord::with_runs("Virat Kohli", 32, 100, 12000);
        let value = serde_json::to_value(&batsman).unwrap();
        assert_eq!(value["identity"], "Virat Kohli");
        assert_eq!(value["matches_played"], 100);
        assert_eq!(value["runs_scored"], 12000);
        assert_eq!(value["batting_average"], 120.0);
    }
}
