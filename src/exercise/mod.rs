//! Exercise materialization.
//!
//! This module turns fetched kata details into a local practice folder:
//!
//! - a folder named `{rank_tag}_python_{slug}` under the exercises root
//! - `README.md` with the kata description (always rewritten)
//! - `solution.py` with a function skeleton (written once, never clobbered
//!   so in-progress user work survives re-materialization)

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::ExerciseDetails;
use crate::error::ExerciseError;

/// File name of the description file inside an exercise folder.
pub const DESCRIPTION_FILE: &str = "README.md";
/// File name of the code stub inside an exercise folder.
pub const STUB_FILE: &str = "solution.py";

/// Rank tag used when the kata carries no rank.
const UNRANKED_TAG: &str = "N/A";

/// Derive the folder slug from a kata title.
///
/// Retains alphanumerics, spaces, hyphens, and underscores; drops everything
/// else; trims; replaces spaces with underscores; lowercases. Deterministic:
/// the same title always yields the same slug.
#[must_use]
pub fn folder_slug(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    cleaned.trim().replace(' ', "_").to_lowercase()
}

/// Derive a Python function name from a kata title.
///
/// Splits on runs of non-alphanumeric characters, lowercases, joins with
/// underscores. Identifiers cannot start with a digit, so those titles get
/// a `kata_` prefix.
#[must_use]
pub fn function_name(name: &str) -> String {
    let joined = name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_");

    if joined.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        format!("kata_{joined}")
    } else {
        joined
    }
}

/// Result of materializing one exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedExercise {
    /// Provenance label for the result message.
    pub origin: String,
    /// Kata title.
    pub title: String,
    /// Rank tag, whitespace stripped (e.g. `6kyu`).
    pub rank_tag: String,
    /// Absolute or relative path of the exercise folder.
    pub folder: PathBuf,
    /// File name of the code stub.
    pub stub_file: String,
    /// Function name the stub defines.
    pub function_name: String,
    /// Whether the stub was freshly written (false = existing stub kept).
    pub stub_written: bool,
}

/// Materializer rooted at a fixed exercises directory.
#[derive(Debug, Clone)]
pub struct Materializer {
    exercises_dir: PathBuf,
}

impl Materializer {
    /// Create a materializer writing under `exercises_dir`.
    #[must_use]
    pub fn new(exercises_dir: impl Into<PathBuf>) -> Self {
        Self {
            exercises_dir: exercises_dir.into(),
        }
    }

    /// The directory exercises are materialized into.
    #[must_use]
    pub fn exercises_dir(&self) -> &Path {
        &self.exercises_dir
    }

    /// Create the practice folder and files for one kata.
    ///
    /// Folder creation is idempotent. The description file is always
    /// rewritten (it is derived content); the stub is written only if no
    /// stub exists at that path.
    ///
    /// # Errors
    ///
    /// Returns [`ExerciseError::MissingField`] if `name`, `url`, or
    /// `description` is absent from `details`, or [`ExerciseError::Io`] if
    /// the folder or files cannot be created.
    pub fn materialize(
        &self,
        details: &ExerciseDetails,
        origin: &str,
    ) -> Result<MaterializedExercise, ExerciseError> {
        let name = required_field(details.name.as_deref(), "name")?;
        let url = required_field(details.url.as_deref(), "url")?;
        let description = required_field(details.description.as_deref(), "description")?;

        let rank_tag: String = details
            .rank
            .as_ref()
            .and_then(|rank| rank.name.as_deref())
            .unwrap_or(UNRANKED_TAG)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        let folder_name = format!("{rank_tag}_python_{}", folder_slug(name));
        let folder = self.exercises_dir.join(&folder_name);
        fs::create_dir_all(&folder).map_err(|e| ExerciseError::Io {
            message: format!("{}: {e}", folder.display()),
        })?;

        let function_name = function_name(name);

        let readme = format!(
            "# {name} [{rank_tag}]\n\n**URL:** {url}\n\n## Description\n\n{description}\n"
        );
        let readme_path = folder.join(DESCRIPTION_FILE);
        fs::write(&readme_path, readme).map_err(|e| ExerciseError::Io {
            message: format!("{}: {e}", readme_path.display()),
        })?;

        let stub_path = folder.join(STUB_FILE);
        let stub_written = if stub_path.exists() {
            tracing::debug!(path = %stub_path.display(), "Existing stub preserved");
            false
        } else {
            let stub = stub_template(name, &rank_tag, url, &function_name);
            fs::write(&stub_path, stub).map_err(|e| ExerciseError::Io {
                message: format!("{}: {e}", stub_path.display()),
            })?;
            true
        };

        tracing::info!(
            kata = %name,
            folder = %folder.display(),
            stub_written,
            "Exercise materialized"
        );

        Ok(MaterializedExercise {
            origin: origin.to_string(),
            title: name.to_string(),
            rank_tag,
            folder,
            stub_file: STUB_FILE.to_string(),
            function_name,
            stub_written,
        })
    }
}

fn required_field<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, ExerciseError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ExerciseError::MissingField {
            field: field.to_string(),
        }),
    }
}

fn stub_template(name: &str, rank_tag: &str, url: &str, function_name: &str) -> String {
    format!(
        r#""""
Kata: {name}
Rank: {rank_tag}
URL: {url}
"""


def {function_name}(args):
    """Solve the kata here.

    Note: check on Codewars whether '{function_name}' is the expected
    function name (the platform sometimes uses camelCase instead of
    snake_case).

    Args:
        args: Replace with the real parameters.

    Returns:
        Replace with the real return value.
    """
    pass
"#
    )
}
