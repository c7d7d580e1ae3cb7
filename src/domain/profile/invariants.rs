use super::entity::UserProfile;
use crate::domain::favorite::validate_unique_ids;
use crate::domain::{DomainError, DomainResult};

/// Validates all UserProfile invariants
pub fn validate_profile(profile: &UserProfile) -> DomainResult<()> {
    if profile.user_id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Profile must belong to a user".to_string(),
        ));
    }
    validate_unique_ids(&profile.favorites)?;
    Ok(())
}

/// Invariants that must hold true for UserProfile:
///
/// 1. The document id is the identity provider's user id
/// 2. Favorite identifiers are unique within the list
/// 3. Favorites keep insertion order
