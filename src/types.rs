use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;

/// Serialization format of a task manifest on disk.
///
/// - `Json`: `{ "tasks": [ { "name": ..., "command": ..., "requires": [...] } ] }`
///   (default when the format cannot be inferred).
/// - `Toml`: the same shape written as `[[tasks]]` tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ManifestFormat {
    Json,
    Toml,
}

impl Default for ManifestFormat {
    fn default() -> Self {
        ManifestFormat::Json
    }
}

impl ManifestFormat {
    /// Pick a format from the file extension, falling back to the default.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for ManifestFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ManifestFormat::Json),
            "toml" => Ok(ManifestFormat::Toml),
            other => Err(format!(
                "invalid manifest format: {other} (expected \"json\" or \"toml\")"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_is_inferred_from_extension() {
        assert_eq!(ManifestFormat::from_path(Path::new("tasks.toml")), ManifestFormat::Toml);
        assert_eq!(ManifestFormat::from_path(Path::new("a/b/TASKS.JSON")), ManifestFormat::Json);
    }

    #[test]
    fn unknown_extension_falls_back_to_json() {
        assert_eq!(ManifestFormat::from_path(Path::new("tasks.yaml")), ManifestFormat::Json);
        assert_eq!(ManifestFormat::from_path(Path::new("tasks")), ManifestFormat::Json);
    }

    #[test]
    fn from_str_rejects_unknown_formats() {
        let err = "yaml".parse::<ManifestFormat>().unwrap_err();
        assert!(err.contains("yaml"));
    }
}
