use serde::{Deserialize, Serialize};
use std::fmt;

/// Read access shared by every kind of player record.
///
/// `describe()` defaults to the generic participant line; role records that
/// want a more specific line override it.
pub trait PlayerProfile {
    fn identity(&self) -> &str;

    fn matches_played(&self) -> u32;

    fn describe(&self) -> String {
        format!("Player: {}, Matches: {}", self.identity(), self.matches_played())
    }
}

/// A generic player: identity plus matches played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    identity: String,
    #[serde(default)]
    matches_played: u32,
}

impl Participant {
    /// Create a participant with no matches played.
    pub fn new(identity: impl Into<String>) -> Self {
        Self::with_matches(identity, 0)
    }

    pub fn with_matches(identity: impl Into<String>, matches_played: u32) -> Self {
        Self { identity: identity.into(), matches_played }
    }

    pub fn set_identity(&mut self, identity: impl Into<String>) {
        self.identity = identity.into();
    }

    pub fn set_matches_played(&mut self, matches_played: u32) {
        self.matches_played = matches_played;
    }
}

impl PlayerProfile for Participant {
    fn identity(&self) -> &str {
        &self.identity
    }

    fn matches_played(&self) -> u32 {
        self.matches_played
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_zero_matches() {
        let player = Participant::new("Generic Cricketer");
        assert_eq!(player.identity(), "Generic Cricketer");
        assert_eq!(player.matches_played(), 0);
    }

    #[test]
    fn test_describe_format() {
        let player = Participant::with_matches("Generic Cricketer", 10);
        assert_eq!(player.describe(), "Player: Generic Cricketer, Matches: 10");
        assert_eq!(player.to_string(), player.describe());
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Participant::with_matches("Rohit", 5);
        let mut copy = original.clone();
        copy.set_identity("Shubman");
        copy.set_matches_played(6);

        assert_eq!(original.identity(), "Rohit");
        assert_eq!(original.matches_played(), 5);
        assert_eq!(copy.describe(), "Player: Shubman, Matches: 6");
    }

    #[test]
    fn test_deserialize_defaults_matches() {
        let player: Participant = serde_json::from_str(r#"{"identity":"Rahul"}"#).unwrap();
        assert_eq!(player, Participant::new("Rahul"));
    }
}
