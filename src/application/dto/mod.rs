// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities and provider records only

use serde::{Deserialize, Serialize};

use crate::domain::{FavoriteEntry, Session};
use crate::integrations::TitleSummary;
use crate::services::AddOutcome;

// ============================================================================
// TITLE DTOs
// ============================================================================

/// One card in a horizontal listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleDto {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
    pub kind: String,
}

impl From<&TitleSummary> for TitleDto {
    fn from(summary: &TitleSummary) -> Self {
        Self {
            id: summary.external_id.clone(),
            title: summary.title.clone(),
            year: summary.year.clone(),
            poster: summary.poster.clone(),
            kind: summary.title_type.to_string(),
        }
    }
}

impl From<&FavoriteEntry> for TitleDto {
    fn from(entry: &FavoriteEntry) -> Self {
        Self {
            id: entry.external_id.clone(),
            title: entry.title.clone(),
            year: entry.year.clone(),
            poster: entry.poster.clone(),
            kind: entry.title_type.to_string(),
        }
    }
}

// ============================================================================
// FAVORITE DTOs
// ============================================================================

/// Contents of the favorites detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteDetailDto {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
    pub director: Option<String>,
    pub cast: Option<String>,
    pub country: Option<String>,
}

impl From<&FavoriteEntry> for FavoriteDetailDto {
    fn from(entry: &FavoriteEntry) -> Self {
        Self {
            id: entry.external_id.clone(),
            title: entry.title.clone(),
            year: entry.year.clone(),
            poster: entry.poster.clone(),
            director: entry.director.clone(),
            cast: entry.cast.clone(),
            country: entry.country.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddFavoriteResultDto {
    pub added: bool,
    pub favorite_count: usize,
}

impl From<&AddOutcome> for AddFavoriteResultDto {
    fn from(outcome: &AddOutcome) -> Self {
        Self {
            added: outcome.added,
            favorite_count: outcome.favorites.len(),
        }
    }
}

// ============================================================================
// SESSION DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDto {
    pub user_id: String,
    pub email: String,
    pub signed_in_at: String,
}

impl From<&Session> for SessionDto {
    fn from(session: &Session) -> Self {
        Self {
            user_id: session.user_id.clone(),
            email: session.email.clone(),
            signed_in_at: session.signed_in_at.to_rfc3339(),
        }
    }
}
