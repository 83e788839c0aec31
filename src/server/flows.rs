//! Tool flows.
//!
//! Each public function here is the logic behind one MCP tool. Flows return
//! `Result<String, ToolError>`: the `Ok` string is the final message for
//! expected outcomes (including "all done" and per-item fetch failures,
//! which are outcomes, not faults), and [`render_tool_error`] turns the
//! `Err` side into its message. Together with the tool layer this is the
//! only place errors become user-facing text.

use std::collections::HashSet;

use rand::Rng;

use crate::catalog::extract_challenge_id;
use crate::error::ToolError;
use crate::exercise::MaterializedExercise;
use crate::selection::{select_candidate, Selection};
use crate::store::INDEX_FILE;

use super::types::AppState;

/// Origin label for exercises set up via `import_kata`.
pub const ORIGIN_MANUAL: &str = "manual import";
/// Origin label for exercises set up via `practice_python`.
pub const ORIGIN_AUTOMATIC: &str = "automatic recommendation";

/// Refresh the local history snapshot from the Codewars API.
///
/// Resolves the username from the explicit argument, falling back to the
/// configured user. The fetch error, if any, is surfaced verbatim — this is
/// the user-triggered sync, unlike the best-effort refresh inside
/// [`practice_python`].
///
/// # Errors
///
/// Returns [`ToolError::MissingConfig`]/[`ToolError::MissingUsername`] when
/// no username can be resolved, or the catalog/store error otherwise.
pub async fn update_progress(
    state: &AppState,
    username: Option<&str>,
) -> Result<String, ToolError> {
    let username = resolve_username(state, username)?;

    let page = state.catalog.fetch_completed(&username, 0).await?;
    state.store.write_history(&page.data)?;

    tracing::info!(username = %username, count = page.data.len(), "History synced");
    Ok(format!(
        "Sync complete: local history updated with {} recently completed exercises.",
        page.data.len()
    ))
}

/// Set up a specific kata by URL or id.
///
/// Any fetch failure is reported as a could-not-find message — from the
/// user's point of view the kata they pointed at was not retrievable, and
/// which way it failed is secondary.
///
/// # Errors
///
/// Returns [`ToolError::Exercise`] if materialization fails.
pub async fn import_kata(state: &AppState, url_or_id: &str) -> Result<String, ToolError> {
    let id = extract_challenge_id(url_or_id);

    let details = match state.catalog.fetch_details(&id).await {
        Ok(details) => details,
        Err(e) => {
            tracing::warn!(kata = %id, error = %e, "Import fetch failed");
            return Ok(format!(
                "Could not find exercise '{id}'. Check the ID or URL."
            ));
        }
    };

    let exercise = state.materializer.materialize(&details, ORIGIN_MANUAL)?;
    Ok(render_exercise_ready(&exercise))
}

/// Pick a random uncompleted kata and set up a practice folder for it.
///
/// The completed-id set is refreshed from the API first; if that fetch
/// fails the cached snapshot stands in (a corrupt cache is an error, an
/// absent one means an empty set). Exactly one detail fetch is made, for
/// the selected kata — a failure there names the kata rather than silently
/// retrying with a different pick.
///
/// # Errors
///
/// Returns the missing-state, store, or materialization error that aborted
/// the flow.
pub async fn practice_python<R: Rng + ?Sized>(
    state: &AppState,
    rng: &mut R,
) -> Result<String, ToolError> {
    let config = state.store.read_config()?.ok_or(ToolError::MissingConfig)?;
    let username = config
        .codewars_username
        .filter(|name| !name.is_empty())
        .ok_or(ToolError::MissingUsername)?;

    let completed_ids = completed_id_set(state, &username).await?;

    let index = state.store.read_index()?.ok_or(ToolError::MissingIndex)?;

    let summary = match select_candidate(&index, &completed_ids, rng) {
        Selection::Exhausted => {
            return Ok(format!(
                "Congratulations, every indexed exercise is completed. \
                 Regenerate '{INDEX_FILE}' with the catalog indexer to discover more kata, \
                 or import a specific one with import_kata."
            ));
        }
        Selection::Chosen(summary) => summary,
    };

    tracing::debug!(kata = %summary.id, name = %summary.name, "Candidate selected");

    let details = match state.catalog.fetch_details(&summary.id).await {
        Ok(details) => details,
        Err(e) => {
            return Ok(format!(
                "Failed to download the exercise '{}': {e}",
                summary.name
            ));
        }
    };

    let exercise = state.materializer.materialize(&details, ORIGIN_AUTOMATIC)?;
    Ok(render_exercise_ready(&exercise))
}

/// Render a flow error into its user-facing message.
#[must_use]
pub fn render_tool_error(err: &ToolError) -> String {
    match err {
        ToolError::MissingConfig => {
            "No user configuration found. Run the setup wizard first.".to_string()
        }
        ToolError::MissingUsername => {
            "No username found in the configuration. Run the setup wizard first.".to_string()
        }
        ToolError::MissingIndex => format!(
            "Exercise index '{INDEX_FILE}' not found. Run the catalog indexer to generate it."
        ),
        ToolError::Catalog(e) => format!("Error contacting Codewars: {e}"),
        ToolError::Store(e) => format!("Local data error: {e}"),
        ToolError::Exercise(e) => format!("Failed to set up the exercise: {e}"),
    }
}

/// Resolve the username for the sync tool: explicit argument, else config.
fn resolve_username(state: &AppState, explicit: Option<&str>) -> Result<String, ToolError> {
    if let Some(name) = explicit {
        let trimmed = name.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    let config = state.store.read_config()?.ok_or(ToolError::MissingConfig)?;
    config
        .codewars_username
        .filter(|name| !name.is_empty())
        .ok_or(ToolError::MissingUsername)
}

/// Build the completed-id set, preferring a fresh sync.
///
/// On a successful fetch the snapshot is rewritten (best effort — a cache
/// write failure is logged, not fatal, since the fresh ids are already in
/// hand). On a fetch failure the cached snapshot stands in; no cache means
/// an empty set.
async fn completed_id_set(
    state: &AppState,
    username: &str,
) -> Result<HashSet<String>, ToolError> {
    match state.catalog.fetch_completed(username, 0).await {
        Ok(page) => {
            if let Err(e) = state.store.write_history(&page.data) {
                tracing::warn!(error = %e, "Failed to cache history snapshot");
            }
            Ok(page.data.into_iter().map(|record| record.id).collect())
        }
        Err(e) => {
            tracing::warn!(
                username = %username,
                error = %e,
                "History sync failed; falling back to cached snapshot"
            );
            let cached = state.store.read_history()?.unwrap_or_default();
            Ok(cached.into_iter().map(|record| record.id).collect())
        }
    }
}

fn render_exercise_ready(exercise: &MaterializedExercise) -> String {
    let stub_note = if exercise.stub_written {
        "created"
    } else {
        "already existed, left untouched"
    };

    format!(
        "Exercise ready ({origin}): {title}\n\n\
         Folder: {folder}\n\
         Stub: {stub_file} ({stub_note}) defining `def {function_name}(...)`\n\n\
         Tell the user to open the folder and start with README.md.",
        origin = exercise.origin,
        title = exercise.title,
        folder = exercise.folder.display(),
        stub_file = exercise.stub_file,
        function_name = exercise.function_name,
    )
}
