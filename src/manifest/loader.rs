// src/manifest/loader.rs

use std::path::Path;

use tracing::debug;

use crate::errors::{Result, TasksortError};
use crate::fs::FileSystem;
use crate::manifest::model::{Manifest, RawManifest};
use crate::types::ManifestFormat;

/// Manifest location used when none is given: `tasks.json` in the current
/// directory.
pub const DEFAULT_MANIFEST_PATH: &str = "tasks.json";

/// Parse manifest text in the given format.
pub fn parse_str(contents: &str, format: ManifestFormat) -> Result<RawManifest> {
    let raw: RawManifest = match format {
        ManifestFormat::Json => serde_json::from_str(contents)?,
        ManifestFormat::Toml => toml::from_str(contents)?,
    };
    Ok(raw)
}

/// Load a manifest from a given path and return the raw `RawManifest`.
///
/// This only performs deserialization. Use [`load_and_validate`] to also
/// check task names.
///
/// When `format` is `None` it is inferred from the file extension.
pub fn load_from_path(
    fs: &dyn FileSystem,
    path: impl AsRef<Path>,
    format: Option<ManifestFormat>,
) -> Result<RawManifest> {
    let path = path.as_ref();
    let format = format.unwrap_or_else(|| ManifestFormat::from_path(path));
    debug!(path = %path.display(), ?format, "loading manifest");

    if !fs.exists(path) {
        return Err(TasksortError::ManifestError(format!(
            "manifest file {} not found",
            path.display()
        )));
    }

    let contents = fs.read_to_string(path)?;
    parse_str(&contents, format)
}

/// Load a manifest from path and validate it.
///
/// This is the entry point the rest of the application uses; the resolver
/// never sees a partially-loaded manifest.
pub fn load_and_validate(
    fs: &dyn FileSystem,
    path: impl AsRef<Path>,
    format: Option<ManifestFormat>,
) -> Result<Manifest> {
    let raw = load_from_path(fs, &path, format)?;
    let manifest = Manifest::try_from(raw)?;
    debug!(tasks = manifest.len(), "manifest loaded");
    Ok(manifest)
}
