//! Core data models for the allocation engine
//!
//! This module contains the fundamental data structures used throughout the
//! crate: treasures, the pirates that hold them, and the result shape of the
//! balanced-split engine.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Name of the remainder agent: keeps whatever the split cannot balance.
pub const CAPTAIN: &str = "Captain";
/// Name of the first balanced agent.
pub const FIRST_MATE: &str = "First Mate";
/// Name of the second balanced agent.
pub const QUARTERMASTER: &str = "Quartermaster";

/// An immutable named unit of value.
///
/// Identity is structural: two treasures are the same treasure exactly when
/// both name and value match. The engine repeatedly tests membership of
/// treasures in sets, so `Eq` and `Hash` are derived over both fields.
///
/// Values are unsigned by policy; a hoard with debts in it is not a hoard
/// this engine splits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Treasure {
    /// Display name, part of the identity
    pub name: String,
    /// Worth in whole units
    pub value: u64,
}

impl Treasure {
    /// Create a new treasure
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A named holder of treasures.
///
/// Equality and hashing use the name ONLY: callers look up a crew member by
/// constructing a fresh, empty `Pirate` with the same name, so two pirates
/// with the same name but different holdings compare equal. Holdings keep
/// insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct Pirate {
    name: String,
    treasures: Vec<Treasure>,
}

impl Pirate {
    /// Create a pirate with no holdings
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            treasures: Vec::new(),
        }
    }

    /// The pirate's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a treasure to this pirate's holdings
    pub fn add_treasure(&mut self, treasure: Treasure) {
        self.treasures.push(treasure);
    }

    /// Current holdings, in the order they were added
    pub fn treasures(&self) -> &[Treasure] {
        &self.treasures
    }

    /// Combined value of the holdings
    pub fn total_value(&self) -> u64 {
        self.treasures.iter().map(|t| t.value).sum()
    }
}

impl PartialEq for Pirate {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Pirate {}

impl Hash for Pirate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Result of a balanced three-way split.
///
/// `first_mate` and `quartermaster` hold exactly equal total value;
/// everything the search could not balance stays with the `captain`.
#[derive(Debug, Clone, Serialize)]
pub struct BalancedSplit {
    /// The remainder agent
    pub captain: Pirate,
    /// First balanced agent
    pub first_mate: Pirate,
    /// Second balanced agent
    pub quartermaster: Pirate,
}

impl BalancedSplit {
    /// Flatten into a crew list, captain first.
    ///
    /// The members keep their canonical names, so name-equality lookups
    /// (`crew.contains(&Pirate::new(FIRST_MATE))`) work on the result.
    pub fn into_crew(self) -> Vec<Pirate> {
        vec![self.captain, self.first_mate, self.quartermaster]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_treasure_structural_equality() {
        assert_eq!(Treasure::new("Ruby", 7), Treasure::new("Ruby", 7));
        assert_ne!(Treasure::new("Ruby", 7), Treasure::new("Ruby", 8));
        assert_ne!(Treasure::new("Ruby", 7), Treasure::new("Pearl", 7));
    }

    #[test]
    fn test_treasure_set_membership_is_structural() {
        let mut held = HashSet::new();
        held.insert(Treasure::new("Ruby", 7));
        // A freshly built treasure with the same fields is the same treasure
        assert!(held.contains(&Treasure::new("Ruby", 7)));
        assert!(!held.contains(&Treasure::new("Ruby", 9)));
    }

    #[test]
    fn test_pirate_equality_by_name_only() {
        let mut rich = Pirate::new("Anne Bonny");
        rich.add_treasure(Treasure::new("Chest", 100));
        let poor = Pirate::new("Anne Bonny");

        assert_eq!(rich, poor);
        assert_ne!(rich, Pirate::new("Mary Read"));

        // The lookup idiom the equality exists for
        let crew = vec![rich];
        assert!(crew.contains(&Pirate::new("Anne Bonny")));
    }

    #[test]
    fn test_pirate_hash_matches_equality() {
        let mut rich = Pirate::new("Anne Bonny");
        rich.add_treasure(Treasure::new("Chest", 100));

        let mut seen = HashSet::new();
        seen.insert(rich);
        assert!(seen.contains(&Pirate::new("Anne Bonny")));
    }

    #[test]
    fn test_pirate_holdings_keep_insertion_order() {
        let mut pirate = Pirate::new("Calico Jack");
        pirate.add_treasure(Treasure::new("Second", 2));
        pirate.add_treasure(Treasure::new("First", 1));

        let names: Vec<&str> = pirate.treasures().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[test]
    fn test_pirate_total_value() {
        let mut pirate = Pirate::new("Calico Jack");
        assert_eq!(pirate.total_value(), 0);
        pirate.add_treasure(Treasure::new("A", 4));
        pirate.add_treasure(Treasure::new("B", 9));
        assert_eq!(pirate.total_value(), 13);
    }

    #[test]
    fn test_into_crew_order_and_names() {
        let split = BalancedSplit {
            captain: Pirate::new(CAPTAIN),
            first_mate: Pirate::new(FIRST_MATE),
            quartermaster: Pirate::new(QUARTERMASTER),
        };
        let crew = split.into_crew();
        let names: Vec<&str> = crew.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec![CAPTAIN, FIRST_MATE, QUARTERMASTER]);
    }
}
