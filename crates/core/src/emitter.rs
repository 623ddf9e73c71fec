//! TypeScript client emitter for OpenAPI documents.
//!
//! This module is a thin wrapper around the IR pipeline:
//! 1. Parse: YAML/JSON -> OpenApiDocument
//! 2. Resolve: OpenApiDocument -> ApiModel (all OpenAPI logic resolved)
//! 3. Render: ApiModel -> String

use std::path::Path;

use crate::error::GenerateResult;
use crate::ir::{Diagnostics, RenderOptions, Resolution, build_model, render_module};
use crate::loader::{DocumentFormat, load_document};
use crate::spec::OpenApiDocument;

/// Generated module text with the diagnostics found while resolving it.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    /// TypeScript source
    pub code: String,
    /// Skipped or tolerated defects
    pub diagnostics: Diagnostics,
}

/// Generate TypeScript code from OpenAPI text in the given format.
pub fn generate(
    text: &str,
    format: DocumentFormat,
    options: &RenderOptions,
) -> GenerateResult<String> {
    let document = format.parse(text)?;
    Ok(generate_document(&document, options).code)
}

/// Generate TypeScript code from an OpenAPI file on disk.
pub fn generate_file(input: &Path, options: &RenderOptions) -> GenerateResult<Generated> {
    let document = load_document(input)?;
    Ok(generate_document(&document, options))
}

/// Generate TypeScript code from an already decoded document.
pub fn generate_document(document: &OpenApiDocument, options: &RenderOptions) -> Generated {
    let Resolution { model, diagnostics } = build_model(document);
    Generated {
        code: render_module(&model, options),
        diagnostics,
    }
}
