//! Opt-in record validation
//!
//! Record constructors accept whatever they are given. These checks are for
//! callers that want to reject empty identities, broken floats or derived
//! figures that no longer match their inputs after setters were used.

use super::batting::BattingRecord;
use super::bowling::BowlingRecord;
use super::participant::PlayerProfile;
use super::stats;
use crate::error::ValidationError;

pub struct RecordValidator;

impl RecordValidator {
    pub fn validate_identity(identity: &str) -> Result<(), ValidationError> {
        if identity.trim().is_empty() {
            return Err(ValidationError::EmptyIdentity);
        }
        Ok(())
    }

    /// Finite and non-negative.
    pub fn validate_measure(field: &'static str, value: f32) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteValue { field, value });
        }
        if value < 0.0 {
            return Err(ValidationError::NegativeValue { field, value });
        }
        Ok(())
    }

    pub fn validate_participant<P: PlayerProfile + ?Sized>(
        player: &P,
    ) -> Result<(), ValidationError> {
        Self::validate_identity(player.identity())
    }

    pub fn validate_batting(
        record: &BattingRecord,
        tolerance: f32,
    ) -> Result<(), ValidationError> {
        Self::validate_participant(record)?;
        Self::validate_measure("batting_average", record.batting_average())?;
        Self::validate_measure("strike_rate", record.strike_rate())?;

        let matches = record.matches_played();
        Self::check_derived(
            "batting_average",
            record.batting_average(),
            stats::batting_average(record.runs_scored(), matches),
            tolerance,
        )?;
        Self::check_derived(
            "strike_rate",
            record.strike_rate(),
            stats::strike_rate(record.runs_scored(), matches),
            tolerance,
        )
    }

    pub fn validate_bowling(
        record: &BowlingRecord,
        tolerance: f32,
    ) -> Result<(), ValidationError> {
        Self::validate_participant(record)?;
        Self::validate_measure("overs_bowled", record.overs_bowled())?;
        Self::validate_measure("economy_rate", record.economy_rate())?;
        Self::check_derived(
            "economy_rate",
            record.economy_rate(),
            stats::economy_rate(record.runs_conceded(), record.overs_bowled()),
            tolerance,
        )
    }

    fn check_derived(
        field: &'static str,
        stored: f32,
        expected: f32,
        tolerance: f32,
    ) -> Result<(), ValidationError> {
        if !stats::approx_eq(stored, expected, tolerance) {
            return Err(ValidationError::StaleDerivedValue { field, stored, expected });
        }
        Ok(())
    }
}
