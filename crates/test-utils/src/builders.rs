#![allow(dead_code)]

use serde_json::json;
use tasksort::errors::Result;
use tasksort::manifest::{Manifest, RawManifest, TaskRecord};

/// Builder for `Manifest` to simplify test setup.
pub struct ManifestBuilder {
    manifest: RawManifest,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self {
            manifest: RawManifest::default(),
        }
    }

    pub fn with_task(mut self, task: TaskRecord) -> Self {
        self.manifest.tasks.push(task);
        self
    }

    /// Shorthand for a task whose command is `cmd-<name>`.
    pub fn task(self, name: &str, requires: &[&str]) -> Self {
        self.with_task(
            TaskRecordBuilder::new(name, &format!("cmd-{name}"))
                .requires_all(requires)
                .build(),
        )
    }

    /// Render as the JSON manifest format.
    pub fn to_json(&self) -> String {
        let tasks: Vec<_> = self
            .manifest
            .tasks
            .iter()
            .map(|t| {
                json!({
                    "name": t.name,
                    "command": t.command,
                    "requires": t.requires,
                })
            })
            .collect();
        json!({ "tasks": tasks }).to_string()
    }

    pub fn try_build(self) -> Result<Manifest> {
        Manifest::try_from(self.manifest)
    }

    pub fn build(self) -> Manifest {
        self.try_build()
            .expect("Failed to build valid manifest from builder")
    }
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskRecord`.
pub struct TaskRecordBuilder {
    task: TaskRecord,
}

impl TaskRecordBuilder {
    pub fn new(name: &str, command: &str) -> Self {
        Self {
            task: TaskRecord::new(name, command),
        }
    }

    pub fn requires(mut self, dep: &str) -> Self {
        self.task.requires.push(dep.to_string());
        self
    }

    pub fn requires_all(mut self, deps: &[&str]) -> Self {
        self.task
            .requires
            .extend(deps.iter().map(|d| d.to_string()));
        self
    }

    pub fn build(self) -> TaskRecord {
        self.task
    }
}
