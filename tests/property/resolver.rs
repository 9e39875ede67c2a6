use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;
use tasksort::errors::TasksortError;
use tasksort::manifest::Manifest;
use tasksort::resolve::resolve_to_vec;
use tasksort_test_utils::builders::{ManifestBuilder, TaskRecordBuilder};

// Acyclic manifests: task N may only require tasks 0..N. The listing order
// is shuffled so that prerequisites often appear after their dependents.
fn acyclic_manifest_strategy(max_tasks: usize) -> impl Strategy<Value = Manifest> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        let deps_strat = proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..num_tasks),
            num_tasks,
        );
        let order_strat = Just((0..num_tasks).collect::<Vec<_>>()).prop_shuffle();

        (deps_strat, order_strat).prop_map(move |(raw_deps, order)| {
            let mut tasks = Vec::with_capacity(num_tasks);
            for (i, potential_deps) in raw_deps.into_iter().enumerate() {
                let mut builder =
                    TaskRecordBuilder::new(&format!("task_{i}"), &format!("run {i}"));

                let valid: BTreeSet<usize> = potential_deps
                    .into_iter()
                    .filter(|_| i > 0)
                    .map(|d| d % i)
                    .collect();
                for dep in valid {
                    builder = builder.requires(&format!("task_{dep}"));
                }
                tasks.push(builder.build());
            }

            order
                .into_iter()
                .fold(ManifestBuilder::new(), |m, idx| m.with_task(tasks[idx].clone()))
                .build()
        })
    })
}

proptest! {
    #[test]
    fn every_task_emitted_once_after_its_prerequisites(manifest in acyclic_manifest_strategy(12)) {
        let out = resolve_to_vec(&manifest).unwrap();

        prop_assert_eq!(out.len(), manifest.len());

        let positions: HashMap<&str, usize> = out
            .iter()
            .enumerate()
            .map(|(pos, cmd)| (cmd.as_str(), pos))
            .collect();
        prop_assert_eq!(positions.len(), out.len(), "duplicate command in {:?}", out);

        for task in manifest.tasks() {
            let own = positions[task.command.as_str()];
            for dep in &task.requires {
                let dep_cmd = &manifest.get(dep).unwrap().command;
                prop_assert!(
                    positions[dep_cmd.as_str()] < own,
                    "{} emitted before its prerequisite {}", task.name, dep
                );
            }
        }
    }

    #[test]
    fn closing_any_chain_into_a_loop_is_rejected(len in 1usize..8) {
        // task_0 -> task_1 -> ... -> task_{len-1} -> task_0
        let manifest = (0..len)
            .fold(ManifestBuilder::new(), |m, i| {
                m.with_task(
                    TaskRecordBuilder::new(&format!("task_{i}"), &format!("run {i}"))
                        .requires(&format!("task_{}", (i + 1) % len))
                        .build(),
                )
            })
            .build();

        let err = resolve_to_vec(&manifest).unwrap_err();
        prop_assert!(
            matches!(err, TasksortError::CircularDependency(ref n) if n == "task_0"),
            "unexpected error {:?}", err
        );
    }
}
