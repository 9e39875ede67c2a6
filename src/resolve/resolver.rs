// src/resolve/resolver.rs

//! Depth-first dependency resolution.
//!
//! Each task is visited prerequisites-first. A task's command is emitted
//! once all of its `requires` have been emitted, and never twice. Revisiting
//! a task that is still on the active path is a cycle.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::errors::{Result, TasksortError};
use crate::manifest::{Manifest, TaskRecord};
use crate::resolve::state::{ResolutionState, TaskResolveState};
use crate::script::CommandSink;

/// Resolves a manifest into a dependency-respecting command sequence.
///
/// State is owned by the instance and lives for one run. Use a new
/// `Resolver` for every independent resolution. After an error the instance
/// should be discarded: names on the failed path stay in progress.
pub struct Resolver<'m, S: CommandSink> {
    manifest: &'m Manifest,
    by_name: HashMap<&'m str, &'m TaskRecord>,
    state: ResolutionState<'m>,
    sink: S,
}

impl<'m, S: CommandSink> Resolver<'m, S> {
    pub fn new(manifest: &'m Manifest, sink: S) -> Self {
        let mut by_name = HashMap::with_capacity(manifest.len());
        for task in manifest.tasks() {
            by_name.entry(task.name.as_str()).or_insert(task);
        }

        Self {
            manifest,
            by_name,
            state: ResolutionState::new(),
            sink,
        }
    }

    /// Resolve every task in manifest order.
    ///
    /// A task lands in the output the first time any path reaches it, which
    /// is not necessarily its position in the manifest.
    pub fn resolve_all(&mut self) -> Result<()> {
        let manifest = self.manifest;
        for task in manifest.tasks() {
            self.resolve(task)?;
        }
        info!(
            tasks = manifest.len(),
            emitted = self.state.finished_count(),
            "resolved manifest"
        );
        Ok(())
    }

    /// Make sure `task` and all of its transitive prerequisites are finished.
    ///
    /// Errors with [`TasksortError::CircularDependency`] naming the task
    /// that was revisited, or [`TasksortError::TaskNotFound`] naming a
    /// `requires` entry with no matching task.
    pub fn resolve(&mut self, task: &'m TaskRecord) -> Result<()> {
        let name = task.name.as_str();

        if self.state.is_finished(name) {
            debug!(task = name, "already finished");
            return Ok(());
        }

        if !self.state.begin(name) {
            debug!(task = name, "task revisited while in progress");
            return Err(TasksortError::CircularDependency(name.to_string()));
        }

        for dep_name in &task.requires {
            let dep = self.lookup(dep_name)?;
            debug!(task = name, dep = dep_name.as_str(), "resolving prerequisite");
            self.resolve(dep)?;
        }

        self.state.finish(name);
        debug!(task = name, "emitting command");
        self.sink.emit(&task.command)
    }

    /// Resolve only the named task and what it requires.
    pub fn resolve_named(&mut self, name: &str) -> Result<()> {
        let task = self.lookup(name)?;
        self.resolve(task)
    }

    pub fn state_of(&self, name: &str) -> TaskResolveState {
        self.state.state_of(name)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn lookup(&self, name: &str) -> Result<&'m TaskRecord> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| TasksortError::TaskNotFound(name.to_string()))
    }
}

/// Convenience: resolve a whole manifest into an in-memory command list.
pub fn resolve_to_vec(manifest: &Manifest) -> Result<Vec<String>> {
    let mut resolver = Resolver::new(manifest, Vec::new());
    resolver.resolve_all()?;
    Ok(resolver.into_sink())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::RawManifest;
    use crate::script::ScriptWriter;

    fn manifest(tasks: Vec<TaskRecord>) -> Manifest {
        Manifest::try_from(RawManifest { tasks }).unwrap()
    }

    fn task(n: u32) -> TaskRecord {
        TaskRecord::new(format!("task-{n}"), format!("command{n}"))
    }

    fn task_requiring(n: u32, dep: u32) -> TaskRecord {
        task(n).with_requires([format!("task-{dep}")])
    }

    fn position(out: &[String], cmd: &str) -> usize {
        out.iter()
            .position(|c| c == cmd)
            .unwrap_or_else(|| panic!("{cmd} missing from {out:?}"))
    }

    #[test]
    fn single_task() {
        let m = manifest(vec![TaskRecord::new("a", "cmd-a")]);
        assert_eq!(resolve_to_vec(&m).unwrap(), vec!["cmd-a"]);
    }

    #[test]
    fn prerequisite_comes_first() {
        let m = manifest(vec![
            TaskRecord::new("a", "cmd-a").with_requires(["b"]),
            TaskRecord::new("b", "cmd-b"),
        ]);

        let mut r = Resolver::new(&m, Vec::<String>::new());
        r.resolve_named("a").unwrap();
        assert_eq!(r.into_sink(), vec!["cmd-b", "cmd-a"]);
    }

    #[test]
    fn resolving_twice_emits_once() {
        let m = manifest(vec![task(1), task(2)]);
        let t2 = &m.tasks()[1];

        let mut r = Resolver::new(&m, Vec::<String>::new());
        r.resolve(t2).unwrap();
        r.resolve(t2).unwrap();

        let out = r.into_sink();
        assert_eq!(out, vec!["command2"]);
    }

    #[test]
    fn shared_prerequisite_emitted_once_before_both_dependents() {
        let m = manifest(vec![
            TaskRecord::new("p", "cmd-p").with_requires(["x"]),
            TaskRecord::new("q", "cmd-q").with_requires(["x"]),
            TaskRecord::new("x", "cmd-x"),
        ]);

        let out = resolve_to_vec(&m).unwrap();
        assert_eq!(out, vec!["cmd-x", "cmd-p", "cmd-q"]);
    }

    #[test]
    fn diamond() {
        let m = manifest(vec![
            TaskRecord::new("d", "cmd-d").with_requires(["b", "c"]),
            TaskRecord::new("b", "cmd-b").with_requires(["a"]),
            TaskRecord::new("c", "cmd-c").with_requires(["a"]),
            TaskRecord::new("a", "cmd-a"),
        ]);

        let out = resolve_to_vec(&m).unwrap();
        assert_eq!(out.len(), 4);
        assert_eq!(out.iter().filter(|c| *c == "cmd-a").count(), 1);
        assert!(position(&out, "cmd-a") < position(&out, "cmd-b"));
        assert!(position(&out, "cmd-a") < position(&out, "cmd-c"));
        assert!(position(&out, "cmd-b") < position(&out, "cmd-d"));
        assert!(position(&out, "cmd-c") < position(&out, "cmd-d"));
    }

    #[test]
    fn requires_are_resolved_in_listed_order() {
        let m = manifest(vec![
            TaskRecord::new("top", "cmd-top").with_requires(["z", "y", "x"]),
            TaskRecord::new("x", "cmd-x"),
            TaskRecord::new("y", "cmd-y"),
            TaskRecord::new("z", "cmd-z"),
        ]);

        let out = resolve_to_vec(&m).unwrap();
        assert_eq!(out, vec!["cmd-z", "cmd-y", "cmd-x", "cmd-top"]);
    }

    #[test]
    fn mutual_cycle_is_detected_from_either_entry() {
        let m = manifest(vec![task_requiring(5, 6), task_requiring(6, 5)]);

        for entry in ["task-5", "task-6"] {
            let mut r = Resolver::new(&m, Vec::<String>::new());
            let err = r.resolve_named(entry).unwrap_err();
            assert!(
                matches!(err, TasksortError::CircularDependency(ref n) if n == entry),
                "unexpected error: {err:?}"
            );
            assert!(r.sink().is_empty());
        }
    }

    #[test]
    fn self_cycle_is_detected() {
        let m = manifest(vec![TaskRecord::new("a", "cmd-a").with_requires(["a"])]);
        let err = resolve_to_vec(&m).unwrap_err();
        assert!(matches!(err, TasksortError::CircularDependency(n) if n == "a"));
    }

    #[test]
    fn missing_prerequisite_is_reported_by_name() {
        let m = manifest(vec![task_requiring(3, 4)]);
        let err = resolve_to_vec(&m).unwrap_err();
        assert!(matches!(err, TasksortError::TaskNotFound(n) if n == "task-4"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let m = manifest(vec![
            TaskRecord::new("a", "cmd-a").with_requires(["B"]),
            TaskRecord::new("b", "cmd-b"),
        ]);
        let err = resolve_to_vec(&m).unwrap_err();
        assert!(matches!(err, TasksortError::TaskNotFound(n) if n == "B"));
    }

    #[test]
    fn commands_finished_before_a_cycle_are_kept() {
        let m = manifest(vec![
            TaskRecord::new("ok", "cmd-ok"),
            TaskRecord::new("a", "cmd-a").with_requires(["b"]),
            TaskRecord::new("b", "cmd-b").with_requires(["a"]),
        ]);

        let mut r = Resolver::new(&m, Vec::<String>::new());
        assert!(r.resolve_all().is_err());
        assert_eq!(r.sink(), &vec!["cmd-ok".to_string()]);
        assert_eq!(r.state_of("ok"), TaskResolveState::Finished);
        assert_eq!(r.state_of("a"), TaskResolveState::InProgress);
    }

    #[test]
    fn states_progress_during_resolution() {
        let m = manifest(vec![task_requiring(3, 4), task(4), task(9)]);

        let mut r = Resolver::new(&m, Vec::<String>::new());
        r.resolve_named("task-3").unwrap();

        assert_eq!(r.state_of("task-3"), TaskResolveState::Finished);
        assert_eq!(r.state_of("task-4"), TaskResolveState::Finished);
        assert_eq!(r.state_of("task-9"), TaskResolveState::Unseen);
    }

    #[test]
    fn separate_resolvers_do_not_share_state() {
        let m = manifest(vec![task(1)]);

        let first = resolve_to_vec(&m).unwrap();
        let second = resolve_to_vec(&m).unwrap();
        assert_eq!(first, second);
        assert_eq!(second, vec!["command1"]);
    }

    #[test]
    fn cycle_leaves_only_the_script_header() {
        let m = manifest(vec![task_requiring(5, 6), task_requiring(6, 5)]);
        let writer = ScriptWriter::with_default_interpreter(Vec::new()).unwrap();

        let mut r = Resolver::new(&m, writer);
        assert!(r.resolve_all().is_err());

        let script = String::from_utf8(r.into_sink().into_inner()).unwrap();
        assert_eq!(script, "#!/usr/bin/env bash\n\n");
    }
}
