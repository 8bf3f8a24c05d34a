//! Format enum for the two textual representations of a document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// The textual form a document takes on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Selects the format for a path by extension.
    ///
    /// `.yaml` and `.yml` (any case) mean YAML; everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Format::Yaml
            }
            _ => Format::Json,
        }
    }

    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Yaml => "yaml",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_path_selects_yaml_for_yaml_extensions() {
        assert_eq!(Format::from_path(Path::new("decision.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("decision.yml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("records/db.YAML")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("records/db.Yml")), Format::Yaml);
    }

    #[test]
    fn from_path_defaults_to_json() {
        assert_eq!(Format::from_path(Path::new("decision.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("decision.txt")), Format::Json);
        assert_eq!(Format::from_path(Path::new("decision")), Format::Json);
    }

    #[test]
    fn display_uses_lowercase_name() {
        assert_eq!(format!("{}", Format::Yaml), "yaml");
        assert_eq!(format!("{}", Format::Json), "json");
    }

    #[test]
    fn serializes_to_snake_case_json() {
        let json = serde_json::to_string(&Format::Yaml).unwrap();
        assert_eq!(json, "\"yaml\"");
    }
}
