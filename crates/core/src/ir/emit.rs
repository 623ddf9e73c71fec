//! TypeScript code emission via the Emit trait.
//!
//! Each type-level IR node implements `Emit`, so the renderer only has to
//! stitch strings together.

use super::types::{TsLiteral, TsPrimitive, TsProp, TsType};
use super::utils::{format_float, js_string_literal, quote_if_needed};

/// Trait for emitting TypeScript code from IR nodes.
pub trait Emit {
    /// Convert the node to its TypeScript string representation.
    fn emit(&self) -> String;
}

impl Emit for TsPrimitive {
    fn emit(&self) -> String {
        match self {
            TsPrimitive::String => "string",
            TsPrimitive::Number => "number",
            TsPrimitive::Boolean => "boolean",
            TsPrimitive::Null => "null",
            TsPrimitive::Any => "any",
            TsPrimitive::Never => "never",
        }
        .to_string()
    }
}

impl Emit for TsLiteral {
    fn emit(&self) -> String {
        match self {
            TsLiteral::String(s) | TsLiteral::Opaque(s) => js_string_literal(s),
            TsLiteral::Number(n) => format_float(*n),
            TsLiteral::Int(i) => i.to_string(),
            TsLiteral::Bool(b) => b.to_string(),
            TsLiteral::Null => "null".to_string(),
        }
    }
}

impl Emit for TsType {
    fn emit(&self) -> String {
        match self {
            TsType::Primitive(p) => p.emit(),
            TsType::Array(inner) => format!("Array<{}>", inner.emit()),
            TsType::Union(types) => types.iter().map(Emit::emit).collect::<Vec<_>>().join(" | "),
            TsType::Intersection(types) => types
                .iter()
                .map(|t| {
                    let s = t.emit();
                    if matches!(t, TsType::Union(members) if members.len() > 1) {
                        format!("({s})")
                    } else {
                        s
                    }
                })
                .collect::<Vec<_>>()
                .join(" & "),
            TsType::Object(props) => {
                if props.is_empty() {
                    "{}".to_string()
                } else {
                    let parts: Vec<_> = props.iter().map(Emit::emit).collect();
                    format!("{{ {} }}", parts.join("; "))
                }
            }
            TsType::Record { key, value } => {
                format!("Record<{}, {}>", key.emit(), value.emit())
            }
            TsType::Literal(lit) => lit.emit(),
            TsType::Ref(name) => name.clone(),
        }
    }
}

impl Emit for TsProp {
    fn emit(&self) -> String {
        let key = quote_if_needed(&self.name);
        let opt = if self.optional { "?" } else { "" };
        format!("{key}{opt}: {}", self.ty.emit())
    }
}
