//! Attractor Registry: Short Keys to Attractor Variants
//!
//! The registry is a compiled-in, read-only table. Lookups by key never
//! construct anything for an unknown key.

use std::fmt;
use std::str::FromStr;

use crate::error::ChaosError;
use crate::oscillator::ChaoticOscillator;

use super::traits::Attractor;
use super::{Aizawa, Bouali, Rucklidge, Sprott};

/// Registered keys, sorted
pub const KINDS: [&str; 4] = ["aiza", "boul", "ruck", "sprot"];

/// Identifier of a registered attractor variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttractorKind {
    Aizawa,
    Bouali,
    Rucklidge,
    Sprott,
}

impl AttractorKind {
    /// All kinds, in the same order as [`KINDS`]
    pub const ALL: [AttractorKind; 4] = [
        AttractorKind::Aizawa,
        AttractorKind::Bouali,
        AttractorKind::Rucklidge,
        AttractorKind::Sprott,
    ];

    pub fn key(self) -> &'static str {
        match self {
            AttractorKind::Aizawa => "aiza",
            AttractorKind::Bouali => "boul",
            AttractorKind::Rucklidge => "ruck",
            AttractorKind::Sprott => "sprot",
        }
    }

    /// Display name of the attractor this kind builds
    pub fn name(self) -> &'static str {
        match self {
            AttractorKind::Aizawa => "Aizawa",
            AttractorKind::Bouali => "Bouali",
            AttractorKind::Rucklidge => "Rucklidge",
            AttractorKind::Sprott => "Sprott",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// Construct a fresh attractor of this kind
    pub fn build(self) -> Box<dyn Attractor> {
        match self {
            AttractorKind::Aizawa => Box::new(Aizawa::new()),
            AttractorKind::Bouali => Box::new(Bouali::new()),
            AttractorKind::Rucklidge => Box::new(Rucklidge::new()),
            AttractorKind::Sprott => Box::new(Sprott::new()),
        }
    }

    /// Construct a fresh oscillator driving an attractor of this kind
    pub fn oscillator(self) -> ChaoticOscillator {
        ChaoticOscillator::from_boxed(self.build())
    }
}

impl fmt::Display for AttractorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AttractorKind {
    type Err = ChaosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| ChaosError::UnknownKind(s.to_string()))
    }
}

/// Look up an attractor by key; `None` for unknown keys.
pub fn make_attractor(kind: &str) -> Option<Box<dyn Attractor>> {
    AttractorKind::from_key(kind).map(AttractorKind::build)
}

/// Look up an attractor by key and wrap it in an oscillator.
pub fn make_oscillator(kind: &str) -> Option<ChaoticOscillator> {
    AttractorKind::from_key(kind).map(AttractorKind::oscillator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_match_all() {
        let keys: Vec<&str> = AttractorKind::ALL.iter().map(|k| k.key()).collect();
        assert_eq!(keys, KINDS.to_vec());
    }

    #[test]
    fn test_kinds_sorted_and_unique() {
        let mut sorted = KINDS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, KINDS.to_vec());
    }

    #[test]
    fn test_from_key_roundtrip() {
        for key in KINDS {
            let kind = AttractorKind::from_key(key).unwrap();
            assert_eq!(kind.key(), key);
            assert_eq!(kind.to_string(), key);
        }
    }

    #[test]
    fn test_unknown_key() {
        assert!(make_attractor("nonexistent").is_none());
        assert!(make_attractor("").is_none());
        assert!(make_attractor("RUCK").is_none());
        assert!(make_oscillator("nonexistent").is_none());

        match "lorenz".parse::<AttractorKind>() {
            Err(ChaosError::UnknownKind(k)) => assert_eq!(k, "lorenz"),
            other => panic!("Expected UnknownKind, got {:?}", other),
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(make_attractor("aiza").unwrap().name(), "Aizawa");
        assert_eq!(make_attractor("boul").unwrap().name(), "Bouali");
        assert_eq!(make_attractor("ruck").unwrap().name(), "Rucklidge");
        assert_eq!(make_attractor("sprot").unwrap().name(), "Sprott");
    }

    #[test]
    fn test_kind_name_matches_built_attractor() {
        for kind in AttractorKind::ALL {
            assert_eq!(kind.name(), kind.build().name(), "{}", kind);
        }
    }
}
