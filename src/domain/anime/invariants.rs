use super::entity::{Anime, NewAnime};
use crate::domain::{DomainError, DomainResult};

/// Validates all Anime invariants
/// These are the absolute rules that must hold for an entry to be valid
pub fn validate_anime(anime: &Anime) -> DomainResult<()> {
    validate_name(&anime.name)
}

/// Same rules, for a not-yet-persisted payload
pub fn validate_new_anime(new: &NewAnime) -> DomainResult<()> {
    validate_name(&new.name)
}

/// Name cannot be empty
fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Anime name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for the anime domain:
///
/// 1. Identity is storage-assigned and immutable
/// 2. Name cannot be empty
/// 3. Release day, note and link are optional
/// 4. An empty season list is a valid state (nothing tracked yet)
