//! Canonical ordering.
//!
//! Sorting is the only thing that makes output reproducible: paths, schemas
//! and properties all arrive as unordered maps.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::spec::Schema;

use super::api::OperationIR;

/// Property names of `schema`, ascending.
pub fn sorted_property_names(schema: &Schema) -> Vec<&String> {
    let mut names: Vec<_> = schema.properties.keys().collect();
    names.sort();
    names
}

/// Named schemas ascending by name.
pub fn sorted_schemas(schemas: &HashMap<String, Schema>) -> Vec<(&String, &Schema)> {
    let mut entries: Vec<_> = schemas.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

/// Sort operations by display path, then operation id.
///
/// The HTTP method breaks the remaining ties so duplicate ids on one path
/// still order the same way on every run.
pub fn sort_operations(operations: &mut [OperationIR]) {
    operations.sort_by(compare_operations);
}

fn compare_operations(a: &OperationIR, b: &OperationIR) -> Ordering {
    a.display_path
        .cmp(&b.display_path)
        .then_with(|| a.id.cmp(&b.id))
        .then_with(|| a.method.cmp(&b.method))
}
