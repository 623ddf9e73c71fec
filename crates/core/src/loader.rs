//! OpenAPI document loading.
//!
//! The decoder is chosen by file extension; in-memory text can be decoded
//! directly with [`parse_yaml`] or [`parse_json`].

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{GenerateError, GenerateResult};
use crate::spec::OpenApiDocument;

/// Input encodings understood by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl DocumentFormat {
    /// Detect the format from a path's extension, ignoring case.
    pub fn from_path(path: &Path) -> GenerateResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(GenerateError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Decode `text` in this format.
    pub fn parse(self, text: &str) -> GenerateResult<OpenApiDocument> {
        match self {
            Self::Yaml => parse_yaml(text),
            Self::Json => parse_json(text),
        }
    }
}

/// Read and decode the document at `path`.
pub fn load_document(path: &Path) -> GenerateResult<OpenApiDocument> {
    let format = DocumentFormat::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|e| GenerateError::io(path, e))?;
    debug!(path = %path.display(), ?format, "Loaded OpenAPI document.");
    format.parse(&text)
}

/// Decode a YAML document.
pub fn parse_yaml(text: &str) -> GenerateResult<OpenApiDocument> {
    Ok(serde_yaml::from_str(text)?)
}

/// Decode a JSON document.
pub fn parse_json(text: &str) -> GenerateResult<OpenApiDocument> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection_ignores_case() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("api.YAML")).unwrap(),
            DocumentFormat::Yaml
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("api.yml")).unwrap(),
            DocumentFormat::Yaml
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("dir/api.Json")).unwrap(),
            DocumentFormat::Json
        );
    }

    #[test]
    fn test_unsupported_extension() {
        for path in ["api.txt", "api"] {
            let err = DocumentFormat::from_path(Path::new(path)).unwrap_err();
            assert!(matches!(err, GenerateError::UnsupportedFormat(_)), "{path}");
        }
    }

    #[test]
    fn test_load_document_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openapi.json");
        fs::write(
            &path,
            r#"{ "openapi": "3.1.0", "paths": { "/ping": { "get": { "operationId": "ping", "responses": {} } } } }"#,
        )
        .unwrap();

        let document = load_document(&path).unwrap();
        assert!(document.paths.contains_key("/ping"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, GenerateError::Io { .. }));
        assert!(err.to_string().contains("missing.yaml"));
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(parse_yaml("paths: [1, 2"), Err(GenerateError::Yaml(_))));
        assert!(matches!(parse_json("{"), Err(GenerateError::Json(_))));
    }
}
