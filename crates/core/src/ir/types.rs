//! TypeScript type expressions produced by the resolver.
//!
//! - `TsType`: types (primitives, arrays, unions, records, literals, refs)
//! - `TsProp`: a member of an inline record type
//! - `TsLiteral`: literal members of enum unions

/// TypeScript type representation
#[derive(Debug, Clone, PartialEq)]
pub enum TsType {
    /// Primitive types: string, number, boolean, null, any, never
    Primitive(TsPrimitive),
    /// Array type: `Array<T>`
    Array(Box<TsType>),
    /// Union type: A | B | C
    Union(Vec<TsType>),
    /// Intersection type: A & B & C
    Intersection(Vec<TsType>),
    /// Object type: { bar?: number; foo: string }
    Object(Vec<TsProp>),
    /// Record type: `Record<K, V>`
    Record {
        /// Key type, always `string` for OpenAPI maps.
        key: Box<TsType>,
        /// Value type.
        value: Box<TsType>,
    },
    /// Literal type: "foo", 42, true
    Literal(TsLiteral),
    /// Named type reference
    Ref(String),
}

/// TypeScript primitive types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsPrimitive {
    /// `string`
    String,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `null`
    Null,
    /// `any`, the fallback for shapes that cannot be resolved.
    Any,
    /// `never`
    Never,
}

/// Object property definition
#[derive(Debug, Clone, PartialEq)]
pub struct TsProp {
    /// Property name as declared.
    pub name: String,
    /// Resolved property type.
    pub ty: TsType,
    /// Whether the property may be omitted.
    pub optional: bool,
}

/// TypeScript literal values
#[derive(Debug, Clone, PartialEq)]
pub enum TsLiteral {
    /// String literal (unescaped).
    String(String),
    /// Floating-point literal.
    Number(f64),
    /// Integer literal.
    Int(i64),
    /// `true` / `false`.
    Bool(bool),
    /// `null`.
    Null,
    /// Values with no literal form, rendered as a quoted string.
    Opaque(String),
}

impl TsType {
    /// The `any` fallback.
    pub const fn any() -> Self {
        Self::Primitive(TsPrimitive::Any)
    }

    /// `boolean`, used for bodiless responses.
    pub const fn boolean() -> Self {
        Self::Primitive(TsPrimitive::Boolean)
    }

    /// `null`.
    pub const fn null() -> Self {
        Self::Primitive(TsPrimitive::Null)
    }

    /// Create a `Record<string, T>` type.
    pub fn string_record(value: TsType) -> Self {
        Self::Record {
            key: Box::new(Self::Primitive(TsPrimitive::String)),
            value: Box::new(value),
        }
    }

    /// `Record<string, any>`: the permissive open map.
    pub fn open_record() -> Self {
        Self::string_record(Self::any())
    }

    /// `Record<string, never>`: a map that cannot hold any key.
    pub fn empty_record() -> Self {
        Self::string_record(Self::Primitive(TsPrimitive::Never))
    }

    /// Whether this is exactly the `null` primitive.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Primitive(TsPrimitive::Null))
    }

    /// Members of a union, or the type itself as a single member.
    pub fn union_members(&self) -> &[TsType] {
        match self {
            Self::Union(members) => members,
            other => std::slice::from_ref(other),
        }
    }
}
