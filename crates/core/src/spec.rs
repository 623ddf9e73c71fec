//! OpenAPI document structs for serde deserialization.
//!
//! Only the subset of OpenAPI 3.0/3.1 that feeds type resolution is modeled.
//! Unknown keys are ignored, and shapes that vary between spec versions
//! (`type`, `additionalProperties`, `enum` members) decode into small tagged
//! values so downstream code never sees the ambiguity.

use serde::Deserialize;
use std::collections::HashMap;

/// Root OpenAPI document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenApiDocument {
    /// Path template → path item.
    #[serde(default)]
    pub paths: HashMap<String, PathItem>,
    /// Reusable components.
    #[serde(default)]
    pub components: Option<Components>,
}

/// Components section containing reusable schemas.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    /// Named schema table; `$ref`s resolve into it by name.
    #[serde(default)]
    pub schemas: HashMap<String, Schema>,
}

/// A path item containing operations for different HTTP methods.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    /// `GET` operation.
    pub get: Option<Operation>,
    /// `PUT` operation.
    pub put: Option<Operation>,
    /// `POST` operation.
    pub post: Option<Operation>,
    /// `DELETE` operation.
    pub delete: Option<Operation>,
    /// `OPTIONS` operation.
    pub options: Option<Operation>,
    /// `HEAD` operation.
    pub head: Option<Operation>,
    /// `PATCH` operation.
    pub patch: Option<Operation>,
    /// `TRACE` operation.
    pub trace: Option<Operation>,
    /// Path-level parameters shared by all operations.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

/// An API operation (endpoint).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Identifier used as the generated method name.
    pub operation_id: Option<String>,
    /// Short summary, preferred over `description` for docs.
    pub summary: Option<String>,
    /// Long description.
    pub description: Option<String>,
    /// Operation-level parameters.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Request body, if any.
    pub request_body: Option<RequestBody>,
    /// Status code (or `default`) → response.
    #[serde(default)]
    pub responses: HashMap<String, Response>,
}

/// A parameter (path, query, header or cookie).
#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    /// Parameter name as it appears in the path or query string.
    pub name: String,
    /// Raw location string (`path`, `query`, `header`, `cookie`).
    #[serde(rename = "in")]
    pub location: String,
    /// Whether the parameter is mandatory.
    #[serde(default)]
    pub required: bool,
    /// Parameter schema.
    pub schema: Option<Schema>,
    /// Human description.
    pub description: Option<String>,
}

/// A request body definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestBody {
    /// Media type → payload description.
    #[serde(default)]
    pub content: HashMap<String, MediaType>,
}

/// A response definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    /// Human description.
    pub description: Option<String>,
    /// Media type → payload description.
    #[serde(default)]
    pub content: HashMap<String, MediaType>,
}

/// Media type content (e.g., application/json).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaType {
    /// Payload schema.
    pub schema: Option<Schema>,
}

/// JSON Schema node used in OpenAPI.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Primitive type tags (`string`, `["string", "null"]`, ...).
    #[serde(rename = "type", default)]
    pub schema_type: SchemaType,

    /// Reference to a named schema.
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,

    /// Properties for object types.
    #[serde(default)]
    pub properties: HashMap<String, Schema>,

    /// Required property names for object types.
    #[serde(default)]
    pub required: Vec<String>,

    /// Item schema for array types.
    pub items: Option<Box<Schema>>,

    /// Enum values, in declaration order.
    #[serde(rename = "enum", default)]
    pub enum_values: Vec<EnumValue>,

    /// Intersection (all of these schemas combined).
    #[serde(default)]
    pub all_of: Vec<Schema>,

    /// Exclusive union.
    #[serde(default)]
    pub one_of: Vec<Schema>,

    /// Inclusive union.
    #[serde(default)]
    pub any_of: Vec<Schema>,

    /// Open-map typing for object schemas.
    #[serde(default)]
    pub additional_properties: AdditionalProperties,

    /// OpenAPI 3.0 nullable flag (3.1 uses type arrays instead).
    pub nullable: Option<bool>,

    /// Human description, rendered as a doc comment.
    pub description: Option<String>,
}

/// Ordered set of type tags.
///
/// `type` may be a single string or a list of strings. Any other shape
/// (including `null` and the empty string) decodes as the empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawSchemaType")]
pub struct SchemaType {
    values: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSchemaType {
    Single(String),
    Multiple(Vec<String>),
    Other(serde::de::IgnoredAny),
}

impl From<RawSchemaType> for SchemaType {
    fn from(raw: RawSchemaType) -> Self {
        let values = match raw {
            RawSchemaType::Single(s) if s.is_empty() => Vec::new(),
            RawSchemaType::Single(s) => vec![s],
            RawSchemaType::Multiple(list) => {
                let mut values: Vec<String> = Vec::with_capacity(list.len());
                for tag in list {
                    if !values.contains(&tag) {
                        values.push(tag);
                    }
                }
                values
            }
            RawSchemaType::Other(_) => Vec::new(),
        };
        Self { values }
    }
}

impl SchemaType {
    /// Build a tag set from string slices, dropping duplicates.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RawSchemaType::Multiple(tags.into_iter().map(Into::into).collect()).into()
    }

    /// Tags in declaration order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Whether `tag` is present.
    pub fn has(&self, tag: &str) -> bool {
        self.values.iter().any(|v| v == tag)
    }

    /// Whether no tag is present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Enum value can be string, integer, float, boolean, null, or anything else.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    /// String literal.
    String(String),
    /// Integer literal.
    Integer(i64),
    /// Floating-point literal.
    Float(f64),
    /// Boolean literal.
    Bool(bool),
    /// Explicit `null`.
    Null,
    /// Objects, arrays and other shapes.
    Other(serde_json::Value),
}

/// `additionalProperties`: absent, a boolean, or a schema.
#[derive(Debug, Clone, Default)]
pub enum AdditionalProperties {
    /// Keyword not present.
    #[default]
    Absent,
    /// `true` or `false`.
    Bool(bool),
    /// Value schema for the open map.
    Schema(Box<Schema>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAdditionalProperties {
    Bool(bool),
    Schema(Box<Schema>),
    Other(serde::de::IgnoredAny),
}

impl<'de> Deserialize<'de> for AdditionalProperties {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match RawAdditionalProperties::deserialize(deserializer)? {
            RawAdditionalProperties::Bool(b) => Self::Bool(b),
            RawAdditionalProperties::Schema(s) => Self::Schema(s),
            RawAdditionalProperties::Other(_) => Self::Absent,
        })
    }
}

impl AdditionalProperties {
    /// Whether the keyword was present at all.
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }
}

impl Schema {
    /// A schema that only carries a `$ref`.
    pub fn reference(ref_path: impl Into<String>) -> Self {
        Self {
            ref_path: Some(ref_path.into()),
            ..Self::default()
        }
    }

    /// A schema with the given type tags and nothing else.
    pub fn typed<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            schema_type: SchemaType::new(tags),
            ..Self::default()
        }
    }

    /// Whether the OpenAPI 3.0 `nullable` flag is set.
    pub fn is_nullable_flag(&self) -> bool {
        self.nullable == Some(true)
    }

    /// Whether the schema admits `null` through either the flag or a type tag.
    pub fn is_nullable(&self) -> bool {
        self.is_nullable_flag() || self.schema_type.has("null")
    }

    /// Whether any of `allOf`/`oneOf`/`anyOf` is non-empty.
    pub fn is_composite(&self) -> bool {
        !self.all_of.is_empty() || !self.one_of.is_empty() || !self.any_of.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn schema_from_json(json: &str) -> Schema {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_type_single_string() {
        let s = schema_from_json(r#"{ "type": "string" }"#);
        assert_eq!(s.schema_type.values(), ["string"]);
    }

    #[test]
    fn test_type_list() {
        let s = schema_from_json(r#"{ "type": ["string", "null"] }"#);
        assert_eq!(s.schema_type.values(), ["string", "null"]);
        assert!(s.is_nullable());
    }

    #[test]
    fn test_type_unknown_shapes_are_empty() {
        assert!(schema_from_json(r#"{ "type": "" }"#).schema_type.is_empty());
        assert!(schema_from_json(r#"{ "type": null }"#).schema_type.is_empty());
        assert!(schema_from_json(r#"{ "type": 42 }"#).schema_type.is_empty());
        assert!(schema_from_json(r#"{}"#).schema_type.is_empty());
    }

    #[test]
    fn test_type_from_yaml() {
        let s: Schema = serde_yaml::from_str("type: [integer, \"null\"]").unwrap();
        assert_eq!(s.schema_type.values(), ["integer", "null"]);
    }

    #[test]
    fn test_additional_properties_variants() {
        let absent = schema_from_json(r#"{ "type": "object" }"#);
        assert!(!absent.additional_properties.is_present());

        let open = schema_from_json(r#"{ "additionalProperties": true }"#);
        assert!(matches!(
            open.additional_properties,
            AdditionalProperties::Bool(true)
        ));

        let closed = schema_from_json(r#"{ "additionalProperties": false }"#);
        assert!(matches!(
            closed.additional_properties,
            AdditionalProperties::Bool(false)
        ));

        let typed = schema_from_json(r#"{ "additionalProperties": { "type": "string" } }"#);
        match typed.additional_properties {
            AdditionalProperties::Schema(inner) => assert!(inner.schema_type.has("string")),
            other => panic!("expected schema, got {other:?}"),
        }
    }

    #[test]
    fn test_enum_value_kinds() {
        let s = schema_from_json(r#"{ "enum": ["a", 1, 1.5, true, null, {"k": 1}] }"#);
        assert_eq!(s.enum_values.len(), 6);
        assert_eq!(s.enum_values[0], EnumValue::String("a".into()));
        assert_eq!(s.enum_values[1], EnumValue::Integer(1));
        assert_eq!(s.enum_values[2], EnumValue::Float(1.5));
        assert_eq!(s.enum_values[3], EnumValue::Bool(true));
        assert_eq!(s.enum_values[4], EnumValue::Null);
        assert!(matches!(s.enum_values[5], EnumValue::Other(_)));
    }

    #[test]
    fn test_path_item_parses_non_operation_keys() {
        let item: PathItem = serde_json::from_str(
            r#"{
                "summary": "ignored",
                "parameters": [{ "name": "id", "in": "path", "required": true }],
                "get": { "operationId": "getThing" }
            }"#,
        )
        .unwrap();
        assert_eq!(item.parameters.len(), 1);
        assert_eq!(
            item.get.and_then(|op| op.operation_id).as_deref(),
            Some("getThing")
        );
    }
}
