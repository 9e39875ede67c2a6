// src/manifest/mod.rs

//! Task manifest loading and validation.
//!
//! Responsibilities:
//! - Define the serde-backed data model (`model.rs`).
//! - Load a manifest from disk in JSON or TOML (`loader.rs`).
//! - Validate task names before resolution (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, parse_str, DEFAULT_MANIFEST_PATH};
pub use model::{Manifest, RawManifest, TaskRecord};
pub use validate::validate_raw_manifest;
