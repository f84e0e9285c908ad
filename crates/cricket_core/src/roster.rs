//! Fixed-capacity team roster
//!
//! Append-only and ordered. Holds anything: player names, jersey numbers,
//! full records.

use crate::config::ModelConfig;
use crate::error::RosterError;
use serde::Serialize;

/// Players in a playing XI.
pub const TEAM_SIZE: usize = 11;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixedRoster<T> {
    entries: Vec<T>,
    capacity: usize,
}

impl<T> FixedRoster<T> {
    /// Empty roster sized for one playing XI.
    pub fn new() -> Self {
        Self::with_capacity(TEAM_SIZE)
    }

    /// `capacity` is a logical limit; storage grows as entries are added.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity.min(TEAM_SIZE)), capacity }
    }

    pub fn from_config(config: &ModelConfig) -> Self {
        Self::with_capacity(config.roster_capacity)
    }

    /// Append to the end. Fails once `len() == capacity()`.
    pub fn add(&mut self, item: T) -> Result<(), RosterError> {
        if self.entries.len() >= self.capacity {
            return Err(RosterError::CapacityExceeded {
                size: self.entries.len(),
                capacity: self.capacity,
            });
        }
        self.entries.push(item);
        log::debug!("Roster: slot {}/{} filled", self.entries.len(), self.capacity);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&T, RosterError> {
        self.entries
            .get(index)
            .ok_or(RosterError::IndexOutOfRange { index, size: self.entries.len() })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }
}

impl<T> Default for FixedRoster<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a FixedRoster<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
