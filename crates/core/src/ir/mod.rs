//! Intermediate Representation for OpenAPI to TypeScript client generation.
//!
//! The pipeline has three layers:
//! 1. Type resolution: OpenAPI schema fragments -> `TsType`
//! 2. API model: operations and named schemas, ordered canonically
//! 3. Emission: `TsType` and declarations -> code strings (via `Emit`)
//!
//! ## Module Structure
//!
//! - `types`: TypeScript type IR (TsType, TsPrimitive, TsLiteral, TsProp)
//! - `resolve`: schema -> TsType resolution rules
//! - `api`: API-level IR (OperationIR, ParamIR, NamedSchemaIR, ApiModel)
//! - `operations`: path items -> OperationIR extraction
//! - `ordering`: canonical ordering of properties, schemas and operations
//! - `model`: document -> ApiModel assembly
//! - `diagnostics`: skipped or tolerated defects
//! - `emit`: TsType -> code strings (via Emit trait)
//! - `render`: ApiModel -> TypeScript module
//! - `utils`: Common utilities shared across modules

mod api;
mod diagnostics;
mod emit;
mod model;
mod operations;
mod ordering;
mod render;
mod resolve;
mod types;
pub mod utils;

pub use api::{
    ApiModel, Declaration, HttpMethod, NamedSchemaIR, OperationIR, ParamIR, ParamLocation,
    PropertyIR,
};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use emit::Emit;
pub use model::{Resolution, assemble, build_model, resolve_named_schemas};
pub use operations::{build_display_path, extract_operations, resolve_response};
pub use ordering::{sort_operations, sorted_property_names, sorted_schemas};
pub use render::{DEFAULT_INSTANCE, RenderOptions, arg_list, client_call, render_module};
pub use resolve::{resolve_optional, resolve_properties, resolve_schema};
pub use types::{TsLiteral, TsPrimitive, TsProp, TsType};
