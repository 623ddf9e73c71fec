//! API-level IR for resolved operations and named schemas.
//!
//! - `OperationIR`: one resolved HTTP operation
//! - `ParamIR`: a path or query parameter
//! - `NamedSchemaIR`: a component schema with its resolved type
//! - `ApiModel`: everything the renderer consumes

use std::fmt;

use super::types::TsType;

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `PUT`
    Put,
    /// `POST`
    Post,
    /// `DELETE`
    Delete,
    /// `OPTIONS`
    Options,
    /// `HEAD`
    Head,
    /// `PATCH`
    Patch,
    /// `TRACE`
    Trace,
}

impl HttpMethod {
    /// Uppercase verb, as written in HTTP.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Trace => "TRACE",
        }
    }

    /// Name of the fetch client method for this verb.
    ///
    /// `delete` is a reserved word in TypeScript, so the client exposes it as `del`.
    pub fn client_method(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "del",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Trace => "trace",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameter location. Header and cookie parameters never reach the IR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    /// Interpolated into the path template.
    Path,
    /// Appended to the query string.
    Query,
}

impl ParamLocation {
    /// Parse the raw `in` value; `None` for locations the IR ignores.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "path" => Some(Self::Path),
            "query" => Some(Self::Query),
            _ => None,
        }
    }
}

/// Single parameter definition
#[derive(Debug, Clone, PartialEq)]
pub struct ParamIR {
    /// Original name from the document (query-string key, path placeholder).
    pub name: String,
    /// TypeScript-safe identifier used for arguments and interpolation.
    pub ident: String,
    /// Parameter type
    pub ty: TsType,
    /// Whether the parameter is required
    pub required: bool,
    /// Human description
    pub description: Option<String>,
}

/// Resolved API operation
#[derive(Debug, Clone, PartialEq)]
pub struct OperationIR {
    /// `operationId` as declared
    pub id: String,
    /// HTTP method
    pub method: HttpMethod,
    /// URL path as declared (e.g., "/items/{itemId}")
    pub path: String,
    /// Path with declared placeholders rewritten to `${ident}`
    pub display_path: String,
    /// Path parameters, in declaration order
    pub path_params: Vec<ParamIR>,
    /// Query parameters, in declaration order
    pub query_params: Vec<ParamIR>,
    /// Whether a request body is declared at all
    pub has_body: bool,
    /// Request body type (only `application/json` bodies resolve)
    pub request_type: Option<TsType>,
    /// Response type
    pub response_type: TsType,
    /// Summary, falling back to the long description
    pub description: Option<String>,
}

impl OperationIR {
    /// Fetch client method name for this operation.
    pub fn client_method(&self) -> &'static str {
        self.method.client_method()
    }
}

/// How a named schema is declared in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration {
    /// `export type Name = ...;`
    Alias,
    /// `export interface Name { ... }`
    Interface,
}

/// A declared property of a named schema.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyIR {
    /// Property name
    pub name: String,
    /// Resolved type
    pub ty: TsType,
    /// Whether the name is listed in `required`
    pub required: bool,
    /// Human description
    pub description: Option<String>,
}

/// Component schema with its resolved type
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSchemaIR {
    /// Component name
    pub name: String,
    /// Human description
    pub description: Option<String>,
    /// Fully resolved type expression
    pub ty: TsType,
    /// Declared properties, sorted by name
    pub properties: Vec<PropertyIR>,
    /// Alias or interface
    pub declaration: Declaration,
}

impl NamedSchemaIR {
    /// Property names in canonical order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|p| p.name.as_str())
    }
}

/// Assembled model handed to the renderer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiModel {
    /// Operations in canonical order
    pub operations: Vec<OperationIR>,
    /// Named schemas in canonical order
    pub schemas: Vec<NamedSchemaIR>,
}

impl ApiModel {
    /// Look up a resolved operation by id.
    pub fn operation(&self, id: &str) -> Option<&OperationIR> {
        self.operations.iter().find(|op| op.id == id)
    }

    /// Look up a named schema by name.
    pub fn schema(&self, name: &str) -> Option<&NamedSchemaIR> {
        self.schemas.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_maps_to_del() {
        assert_eq!(HttpMethod::Delete.client_method(), "del");
        assert_eq!(HttpMethod::Get.client_method(), "get");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_param_location_parse() {
        assert_eq!(ParamLocation::parse("path"), Some(ParamLocation::Path));
        assert_eq!(ParamLocation::parse("query"), Some(ParamLocation::Query));
        assert_eq!(ParamLocation::parse("header"), None);
        assert_eq!(ParamLocation::parse("cookie"), None);
    }
}
