//! Model assembly.
//!
//! Resolves the component schemas, orders everything canonically and joins
//! the result with the extracted operations into an `ApiModel`.

use std::collections::HashMap;

use tracing::debug;

use crate::spec::{OpenApiDocument, Schema};

use super::api::{ApiModel, Declaration, NamedSchemaIR, OperationIR, PropertyIR};
use super::diagnostics::Diagnostics;
use super::operations::extract_operations;
use super::ordering::{sort_operations, sorted_property_names, sorted_schemas};
use super::resolve::resolve_schema;

/// A resolved model together with the diagnostics found on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    /// Assembled model
    pub model: ApiModel,
    /// Skipped or tolerated defects
    pub diagnostics: Diagnostics,
}

/// Resolve a whole document into an `ApiModel`.
///
/// Never fails: defects are reported through `Resolution::diagnostics`.
pub fn build_model(spec: &OpenApiDocument) -> Resolution {
    let mut diagnostics = Diagnostics::new();

    let mut operations = extract_operations(spec, &mut diagnostics);
    sort_operations(&mut operations);

    let schemas = spec
        .components
        .as_ref()
        .map(|components| resolve_named_schemas(&components.schemas))
        .unwrap_or_default();

    debug!(
        operations = operations.len(),
        schemas = schemas.len(),
        diagnostics = diagnostics.len(),
        "Assembled API model."
    );

    Resolution {
        model: assemble(operations, schemas),
        diagnostics,
    }
}

/// Join ordered operations and ordered schemas.
pub fn assemble(operations: Vec<OperationIR>, schemas: Vec<NamedSchemaIR>) -> ApiModel {
    ApiModel {
        operations,
        schemas,
    }
}

/// Resolve component schemas, sorted by name.
pub fn resolve_named_schemas(schemas: &HashMap<String, Schema>) -> Vec<NamedSchemaIR> {
    sorted_schemas(schemas)
        .into_iter()
        .map(|(name, schema)| resolve_named_schema(name, schema))
        .collect()
}

fn resolve_named_schema(name: &str, schema: &Schema) -> NamedSchemaIR {
    let properties = sorted_property_names(schema)
        .into_iter()
        .filter_map(|prop| {
            let prop_schema = schema.properties.get(prop)?;
            Some(PropertyIR {
                name: prop.clone(),
                ty: resolve_schema(prop_schema),
                required: schema.required.contains(prop),
                description: non_empty(prop_schema.description.as_ref()),
            })
        })
        .collect();

    NamedSchemaIR {
        name: name.to_string(),
        description: non_empty(schema.description.as_ref()),
        ty: resolve_schema(schema),
        properties,
        declaration: declaration_for(schema),
    }
}

/// Decide between `export type` and `export interface`.
///
/// Only a plain object with declared properties and no open-map keyword
/// becomes an interface; everything else is an alias of its resolved type.
fn declaration_for(schema: &Schema) -> Declaration {
    if schema.ref_path.is_some()
        || !schema.enum_values.is_empty()
        || schema.is_composite()
        || schema.is_nullable()
    {
        return Declaration::Alias;
    }

    let tags = &schema.schema_type;
    let is_object = tags.has("object")
        || (tags.is_empty()
            && (!schema.properties.is_empty() || schema.additional_properties.is_present()));

    if is_object
        && tags.values().len() <= 1
        && !schema.additional_properties.is_present()
        && !schema.properties.is_empty()
    {
        Declaration::Interface
    } else {
        Declaration::Alias
    }
}

fn non_empty(text: Option<&String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty()).cloned()
}
