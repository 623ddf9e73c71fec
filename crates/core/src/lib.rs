//! OpenAPI to TypeScript fetch-client generator.
//!
//! This crate decodes OpenAPI 3.0/3.1 documents and produces:
//! - TypeScript declarations for every component schema
//! - A `createAdapter(client)` factory with one typed method per operation
//!
//! The resolved [`ir::ApiModel`] is deterministic: identical documents
//! always produce byte-identical output regardless of map ordering.

mod emitter;
pub mod error;
pub mod ir;
pub mod loader;
pub mod spec;

pub use emitter::{Generated, generate, generate_document, generate_file};
pub use error::{GenerateError, GenerateResult};
pub use ir::{ApiModel, Diagnostic, Diagnostics, RenderOptions, Resolution, build_model, render_module};
pub use loader::{DocumentFormat, load_document, parse_json, parse_yaml};
pub use spec::OpenApiDocument;
