// src/manifest/validate.rs

use std::collections::HashSet;

use crate::errors::{Result, TasksortError};
use crate::manifest::model::{Manifest, RawManifest};

impl TryFrom<RawManifest> for Manifest {
    type Error = crate::errors::TasksortError;

    fn try_from(raw: RawManifest) -> std::result::Result<Self, Self::Error> {
        validate_raw_manifest(&raw)?;
        Ok(Manifest::new_unchecked(raw.tasks))
    }
}

/// Check the fields the resolver relies on: every task has a name and no
/// name is used twice.
///
/// Unknown `requires` entries and cycles are left to the resolver, which
/// reports them as [`TasksortError::TaskNotFound`] and
/// [`TasksortError::CircularDependency`] at the point they are reached.
pub fn validate_raw_manifest(raw: &RawManifest) -> Result<()> {
    ensure_names_present(raw)?;
    ensure_names_unique(raw)?;
    Ok(())
}

fn ensure_names_present(raw: &RawManifest) -> Result<()> {
    for (idx, task) in raw.tasks.iter().enumerate() {
        if task.name.is_empty() {
            return Err(TasksortError::ManifestError(format!(
                "task at position {} has an empty `name`",
                idx
            )));
        }
    }
    Ok(())
}

fn ensure_names_unique(raw: &RawManifest) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    for task in raw.tasks.iter() {
        if !seen.insert(task.name.as_str()) {
            return Err(TasksortError::ManifestError(format!(
                "task '{}' is defined more than once",
                task.name
            )));
        }
    }
    Ok(())
}
