// src/manifest/model.rs

use serde::{Deserialize, Deserializer};

/// Top-level manifest as read from disk, before validation.
///
/// JSON form:
///
/// ```json
/// {
///   "tasks": [
///     { "name": "build", "command": "make", "requires": ["fetch"] },
///     { "name": "fetch", "command": "git pull" }
///   ]
/// }
/// ```
///
/// TOML form:
///
/// ```toml
/// [[tasks]]
/// name = "build"
/// command = "make"
/// requires = ["fetch"]
///
/// [[tasks]]
/// name = "fetch"
/// command = "git pull"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawManifest {
    /// Task definitions in the order they appear in the file.
    ///
    /// The key is required; `"tasks": []` is the way to spell an empty
    /// manifest.
    pub tasks: Vec<TaskRecord>,
}

/// A single named task: a shell command plus the tasks that must run first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskRecord {
    /// Unique name within the manifest. Lookups are exact and case-sensitive.
    pub name: String,

    /// Opaque shell command text, written to the script verbatim.
    pub command: String,

    /// Names of prerequisite tasks, in the order they should be resolved.
    ///
    /// Absent and `null` both mean "no prerequisites".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub requires: Vec<String>,
}

impl TaskRecord {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            requires: Vec::new(),
        }
    }

    pub fn with_requires<I, S>(mut self, requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires = requires.into_iter().map(Into::into).collect();
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Validated manifest.
///
/// Task names are non-empty and unique. Dangling `requires` entries and
/// cycles are *not* checked here; those surface during resolution.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    tasks: Vec<TaskRecord>,
}

impl Manifest {
    /// Wrap tasks without validation. Use `Manifest::try_from(RawManifest)`
    /// outside of this module.
    pub(crate) fn new_unchecked(tasks: Vec<TaskRecord>) -> Self {
        Self { tasks }
    }

    /// Tasks in manifest order.
    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    pub fn get(&self, name: &str) -> Option<&TaskRecord> {
        self.tasks.iter().find(|t| t.name == name)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
