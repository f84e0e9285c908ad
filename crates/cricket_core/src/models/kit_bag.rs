use super::equipment::{Bat, Equipment};
use serde::Serialize;

/// A player's bag of bats, optionally tagged with its owner.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct KitBag {
    owner: Option<String>,
    bats: Vec<Bat>,
}

impl KitBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_owner(owner: impl Into<String>) -> Self {
        Self { owner: Some(owner.into()), bats: Vec::new() }
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn add_bat(&mut self, bat: Bat) {
        log::debug!("KitBag: packed {}", bat.describe());
        self.bats.push(bat);
    }

    pub fn bats(&self) -> &[Bat] {
        &self.bats
    }

    pub fn len(&self) -> usize {
        self.bats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bats.is_empty()
    }

    /// Build a new bag whose bats are freshly constructed from this one's.
    pub fn deep_copy(&self) -> Self {
        let mut bats = Vec::with_capacity(self.bats.len());
        for bat in &self.bats {
            bats.push(Bat::new(bat.brand(), bat.weight_grams()));
        }
        Self { owner: self.owner.clone(), bats }
    }
}

impl Clone for KitBag {
    fn clone(&self) -> Self {
        self.deep_copy()
    }
}
