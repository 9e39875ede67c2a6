// src/resolve/graph.rs

use petgraph::algo::is_cyclic_directed;
use petgraph::dot::{Config, Dot};
use petgraph::graphmap::DiGraphMap;

use crate::manifest::Manifest;

/// Read-only dependency graph over a manifest, for diagnostics.
///
/// Edge direction: prerequisite -> dependent. For
///
/// ```json
/// { "name": "b", "command": "...", "requires": ["a"] }
/// ```
///
/// we add edge `a -> b`. Names in `requires` that match no task still get a
/// node so dangling references show up in the rendered graph.
#[derive(Debug, Clone)]
pub struct DependencyGraph<'m> {
    graph: DiGraphMap<&'m str, &'static str>,
}

impl<'m> DependencyGraph<'m> {
    pub fn from_manifest(manifest: &'m Manifest) -> Self {
        let mut graph: DiGraphMap<&'m str, &'static str> = DiGraphMap::new();

        for task in manifest.tasks() {
            graph.add_node(task.name.as_str());
        }

        for task in manifest.tasks() {
            for dep in task.requires.iter() {
                graph.add_edge(dep.as_str(), task.name.as_str(), "");
            }
        }

        Self { graph }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether any set of tasks requires itself, directly or transitively.
    pub fn has_cycle(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Render as Graphviz DOT.
    pub fn to_dot(&self) -> String {
        Dot::with_config(&self.graph, &[Config::EdgeNoLabel]).to_string()
    }
}
