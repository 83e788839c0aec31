//! Schemas of the persisted JSON documents.

use serde::{Deserialize, Serialize};

use crate::catalog::RankInfo;

/// One entry of the kata index (`katas_index.json`).
///
/// Built by the external indexer; identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSummary {
    /// Kata id (24-char hex).
    pub id: String,
    /// Kata title.
    pub name: String,
    /// Difficulty rank, if the indexer recorded it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<RankInfo>,
}

/// The single-user configuration (`config.json`).
///
/// Written once by the setup wizard. The username is optional so a config
/// file that exists without the field is distinguishable from an absent
/// config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Codewars username to sync history for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codewars_username: Option<String>,
}
