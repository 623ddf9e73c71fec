//! Schema → TypeScript type resolution.
//!
//! `resolve_schema` is total: shapes it cannot express degrade to `any`.
//! Keywords are checked in a fixed precedence and the first match wins:
//! `$ref`, `enum`, `allOf`, `oneOf`/`anyOf`, then the `type` tags.
//! References are emitted by name and never followed, so cyclic schemas
//! resolve in one pass.

use crate::spec::{AdditionalProperties, EnumValue, Schema};

use super::ordering::sorted_property_names;
use super::types::{TsPrimitive, TsProp, TsType};
use super::utils::{enum_value_to_literal, ref_to_type_name};

/// Resolve an optional schema; a missing schema is `any`.
pub fn resolve_optional(schema: Option<&Schema>) -> TsType {
    schema.map_or_else(TsType::any, resolve_schema)
}

/// Convert a Schema to TsType
pub fn resolve_schema(schema: &Schema) -> TsType {
    if let Some(ref_path) = &schema.ref_path {
        return TsType::Ref(ref_to_type_name(ref_path));
    }

    if !schema.enum_values.is_empty() {
        return enum_to_union_type(&schema.enum_values);
    }

    if !schema.all_of.is_empty() {
        return TsType::Intersection(schema.all_of.iter().map(resolve_schema).collect());
    }

    // oneOf wins when both are present
    let union = if schema.one_of.is_empty() {
        &schema.any_of
    } else {
        &schema.one_of
    };
    if !union.is_empty() {
        return TsType::Union(union.iter().map(resolve_schema).collect());
    }

    resolve_type_tags(schema)
}

/// Convert enum values to a union of literal types, in declaration order.
fn enum_to_union_type(values: &[EnumValue]) -> TsType {
    TsType::Union(
        values
            .iter()
            .map(|v| TsType::Literal(enum_value_to_literal(v)))
            .collect(),
    )
}

/// Map the `type` tag set, reconciling the legacy `nullable` flag.
fn resolve_type_tags(schema: &Schema) -> TsType {
    let implicit_object = schema.schema_type.is_empty()
        && (!schema.properties.is_empty() || schema.additional_properties.is_present());

    let mut parts: Vec<TsType> = if implicit_object {
        vec![resolve_object(schema)]
    } else {
        schema
            .schema_type
            .values()
            .iter()
            .map(|tag| resolve_tag(tag, schema))
            .collect()
    };

    if parts.is_empty() {
        return TsType::any();
    }

    if schema.is_nullable_flag() && !parts.iter().any(TsType::is_null) {
        parts.push(TsType::null());
    }

    if parts.len() == 1 {
        parts.pop().unwrap_or_else(TsType::any)
    } else {
        TsType::Union(parts)
    }
}

/// Convert a single type tag to TsType
fn resolve_tag(tag: &str, schema: &Schema) -> TsType {
    match tag {
        "string" => TsType::Primitive(TsPrimitive::String),
        "number" | "integer" => TsType::Primitive(TsPrimitive::Number),
        "boolean" => TsType::Primitive(TsPrimitive::Boolean),
        "null" => TsType::null(),
        "array" => TsType::Array(Box::new(resolve_optional(schema.items.as_deref()))),
        "object" => resolve_object(schema),
        _ => TsType::any(),
    }
}

/// Resolve an object schema.
///
/// An `additionalProperties` schema turns the object into an open map even
/// when properties are declared; the properties are not merged in.
fn resolve_object(schema: &Schema) -> TsType {
    match &schema.additional_properties {
        AdditionalProperties::Bool(true) => return TsType::open_record(),
        AdditionalProperties::Bool(false) if schema.properties.is_empty() => {
            return TsType::empty_record();
        }
        AdditionalProperties::Schema(value) => {
            return TsType::string_record(resolve_schema(value));
        }
        AdditionalProperties::Bool(false) | AdditionalProperties::Absent => {}
    }

    if schema.properties.is_empty() {
        return TsType::open_record();
    }

    TsType::Object(resolve_properties(schema))
}

/// Resolve declared properties, sorted by name.
pub fn resolve_properties(schema: &Schema) -> Vec<TsProp> {
    sorted_property_names(schema)
        .into_iter()
        .filter_map(|name| {
            let property = schema.properties.get(name)?;
            Some(TsProp {
                name: name.clone(),
                ty: resolve_schema(property),
                optional: !schema.required.contains(name),
            })
        })
        .collect()
}
