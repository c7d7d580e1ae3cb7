use std::collections::HashSet;

use super::entity::FavoriteEntry;
use crate::domain::{DomainError, DomainResult};

/// Validates a single entry before it is written
pub fn validate_favorite_entry(entry: &FavoriteEntry) -> DomainResult<()> {
    if entry.external_id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Favorite external identifier cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// External identifiers must be unique within one user's list
pub fn validate_unique_ids(entries: &[FavoriteEntry]) -> DomainResult<()> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.external_id.as_str()) {
            return Err(DomainError::InvariantViolation(format!(
                "Duplicate favorite identifier {}",
                entry.external_id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_identifier_fails() {
        assert!(validate_favorite_entry(&FavoriteEntry::new("  ", "A")).is_err());
        assert!(validate_favorite_entry(&FavoriteEntry::new("tt001", "A")).is_ok());
    }

    #[test]
    fn test_duplicate_identifiers_fail() {
        let entries = vec![
            FavoriteEntry::new("tt001", "A"),
            FavoriteEntry::new("tt002", "B"),
            FavoriteEntry::new("tt001", "A"),
        ];
        assert!(validate_unique_ids(&entries).is_err());
        assert!(validate_unique_ids(&entries[..2]).is_ok());
    }
}
