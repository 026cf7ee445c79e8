//! Manual crew assembly from an explicit owner mapping

use crate::error::{AllocationError, Result};
use crate::models::{Pirate, Treasure};

/// Group treasures into pirates using a positional owner mapping.
///
/// `owners[i]` names the pirate that receives `treasures[i]`. Pirates are
/// created the first time a name appears and the crew keeps that first-seen
/// order. Lookup is by name equality, so repeated names accumulate onto the
/// same pirate.
///
/// # Errors
///
/// Returns [`AllocationError::OwnerCountMismatch`] when the two slices have
/// different lengths.
pub fn crew_from_mapping(treasures: &[Treasure], owners: &[&str]) -> Result<Vec<Pirate>> {
    if treasures.len() != owners.len() {
        return Err(AllocationError::OwnerCountMismatch {
            treasures: treasures.len(),
            owners: owners.len(),
        });
    }

    let mut crew: Vec<Pirate> = Vec::new();
    for (treasure, owner) in treasures.iter().zip(owners) {
        let idx = match crew.iter().position(|p| p.name() == *owner) {
            Some(existing) => existing,
            None => {
                crew.push(Pirate::new(*owner));
                crew.len() - 1
            }
        };
        crew[idx].add_treasure(treasure.clone());
    }

    Ok(crew)
}
