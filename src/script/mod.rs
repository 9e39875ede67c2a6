// src/script/mod.rs

//! Output side of resolution.
//!
//! - [`sink`] defines the [`CommandSink`] seam the resolver emits into.
//! - [`writer`] persists emitted commands as a script behind a `#!` header.

pub mod sink;
pub mod writer;

pub use sink::CommandSink;
pub use writer::{ScriptWriter, DEFAULT_INTERPRETER, DEFAULT_SCRIPT_PATH};
