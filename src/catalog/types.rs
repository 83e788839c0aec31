//! Typed documents returned by the Codewars API.
//!
//! Fields the rest of the system does not need are left out; serde ignores
//! unknown keys. Fields the materializer requires (`name`, `url`,
//! `description`) are optional at the decode layer so their absence surfaces
//! as a missing-field error instead of a decode failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user profile as returned by `GET /users/{username}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    /// Codewars username.
    pub username: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Honor points.
    #[serde(default)]
    pub honor: Option<i64>,
    /// Rank information.
    #[serde(default)]
    pub ranks: Option<ProfileRanks>,
}

/// Rank block of a user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRanks {
    /// Overall rank across languages.
    #[serde(default)]
    pub overall: Option<RankInfo>,
}

/// Rank descriptor (`{id, name, color}`), shared by profiles and kata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankInfo {
    /// Numeric rank id (negative for kyu).
    #[serde(default)]
    pub id: Option<i64>,
    /// Human-readable rank name, e.g. `"6 kyu"`.
    #[serde(default)]
    pub name: Option<String>,
    /// Display color.
    #[serde(default)]
    pub color: Option<String>,
}

/// One entry of the user's completed-kata history.
///
/// Only `id` is used downstream; the remaining fields are kept so the
/// history snapshot round-trips what the API returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedRecord {
    /// Kata id (24-char hex).
    pub id: String,
    /// Kata name.
    #[serde(default)]
    pub name: String,
    /// URL slug.
    #[serde(default)]
    pub slug: String,
    /// Completion timestamp.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Languages the kata was completed in.
    #[serde(default)]
    pub completed_languages: Vec<String>,
}

/// One page of completed-kata history, as returned by
/// `GET /users/{username}/code-challenges/completed?page={n}`.
///
/// The API pages at a fixed size (200 entries); the totals are carried so a
/// caller could page further, though this system only ever reads page 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedPage {
    /// Records on this page.
    pub data: Vec<CompletedRecord>,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of completed kata.
    #[serde(default)]
    pub total_items: u32,
}

/// Full kata details as returned by `GET /code-challenges/{id_or_slug}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseDetails {
    /// Kata id.
    pub id: String,
    /// Kata title.
    #[serde(default)]
    pub name: Option<String>,
    /// URL slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Canonical kata URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Kata category.
    #[serde(default)]
    pub category: Option<String>,
    /// Full markdown description.
    #[serde(default)]
    pub description: Option<String>,
    /// Topic tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Difficulty rank.
    #[serde(default)]
    pub rank: Option<RankInfo>,
}
