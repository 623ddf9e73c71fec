//! Operation extraction.
//!
//! Walks every (path, method) pair of the document and produces one
//! `OperationIR` per operation that carries an `operationId`. Operations
//! without one are dropped and reported through `Diagnostics`.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::spec::{OpenApiDocument, Operation, Parameter, PathItem, Response, Schema};

use super::api::{HttpMethod, OperationIR, ParamIR, ParamLocation};
use super::diagnostics::{Diagnostic, Diagnostics};
use super::resolve::{resolve_optional, resolve_schema};
use super::types::TsType;
use super::utils::sanitize_param_identifier;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Success statuses, in order of preference.
const SUCCESS_STATUSES: [&str; 7] = ["200", "201", "202", "203", "204", "206", "default"];

/// Redirect statuses, consulted only when no success status matched.
const REDIRECT_STATUSES: [&str; 7] = ["300", "301", "302", "303", "304", "307", "308"];

/// Status that never carries a body.
const NO_CONTENT_STATUS: &str = "204";

/// Extract every operation of the document, in path order.
///
/// The result is not yet in canonical order; see `ordering::sort_operations`.
pub fn extract_operations(spec: &OpenApiDocument, diagnostics: &mut Diagnostics) -> Vec<OperationIR> {
    let mut operations = Vec::new();
    let mut seen_ids = HashSet::new();

    // Sort paths so diagnostics come out in a stable order
    let mut paths: Vec<_> = spec.paths.iter().collect();
    paths.sort_by_key(|(path, _)| *path);

    for (path, item) in paths {
        for (method, op) in path_item_operations(item) {
            let Some(op) = op else {
                continue;
            };
            let Some(id) = op.operation_id.as_deref().filter(|id| !id.is_empty()) else {
                diagnostics.push(Diagnostic::MissingOperationId {
                    method,
                    path: path.clone(),
                });
                continue;
            };
            if !seen_ids.insert(id) {
                diagnostics.push(Diagnostic::DuplicateOperationId {
                    id: id.to_string(),
                    method,
                    path: path.clone(),
                });
            }
            operations.push(extract_operation(path, method, id, op, &item.parameters));
        }
    }

    operations
}

/// The operations of a path item in a fixed method order.
fn path_item_operations(item: &PathItem) -> [(HttpMethod, Option<&Operation>); 8] {
    [
        (HttpMethod::Get, item.get.as_ref()),
        (HttpMethod::Put, item.put.as_ref()),
        (HttpMethod::Post, item.post.as_ref()),
        (HttpMethod::Delete, item.delete.as_ref()),
        (HttpMethod::Options, item.options.as_ref()),
        (HttpMethod::Head, item.head.as_ref()),
        (HttpMethod::Patch, item.patch.as_ref()),
        (HttpMethod::Trace, item.trace.as_ref()),
    ]
}

/// Resolve a single operation.
fn extract_operation(
    path: &str,
    method: HttpMethod,
    id: &str,
    op: &Operation,
    shared_params: &[Parameter],
) -> OperationIR {
    let mut path_params = Vec::new();
    let mut query_params = Vec::new();
    for param in effective_parameters(shared_params, &op.parameters) {
        match ParamLocation::parse(&param.location) {
            Some(ParamLocation::Path) => path_params.push(resolve_param(param)),
            Some(ParamLocation::Query) => query_params.push(resolve_param(param)),
            None => {}
        }
    }

    dedupe_idents(&mut path_params);
    let display_path = build_display_path(path, &path_params);
    let request_type = resolve_request(op);
    let response_type = resolve_response(&op.responses);

    debug!(
        operation_id = id,
        method = %method,
        path,
        "Resolved operation."
    );

    OperationIR {
        id: id.to_string(),
        method,
        path: path.to_string(),
        display_path,
        path_params,
        query_params,
        has_body: op.request_body.is_some(),
        request_type,
        response_type,
        description: operation_description(op),
    }
}

/// Merge path-level and operation-level parameters.
///
/// An operation-level parameter replaces a path-level one with the same name
/// and location. Path-level parameters come first.
fn effective_parameters<'a>(shared: &'a [Parameter], own: &'a [Parameter]) -> Vec<&'a Parameter> {
    shared
        .iter()
        .filter(|p| {
            !own.iter()
                .any(|o| o.name == p.name && o.location == p.location)
        })
        .chain(own)
        .collect()
}

/// Resolve a single parameter
fn resolve_param(p: &Parameter) -> ParamIR {
    ParamIR {
        name: p.name.clone(),
        ident: sanitize_param_identifier(&p.name),
        ty: resolve_optional(p.schema.as_ref()),
        required: p.required,
        description: p.description.clone().filter(|d| !d.is_empty()),
    }
}

/// Suffix repeated argument identifiers (`orgId`, `orgId2`, ...).
///
/// Distinct names such as `org-id` and `orgId` sanitize to the same
/// identifier and would otherwise declare one argument twice.
fn dedupe_idents(params: &mut [ParamIR]) {
    let mut used = HashSet::new();
    for param in params {
        let mut ident = param.ident.clone();
        let mut n = 2;
        while used.contains(&ident) {
            ident = format!("{}{n}", param.ident);
            n += 1;
        }
        used.insert(ident.clone());
        param.ident = ident;
    }
}

/// Rewrite `{name}` placeholders into `${ident}` for declared path parameters.
///
/// Placeholders without a declared parameter are left as they are.
pub fn build_display_path(path: &str, path_params: &[ParamIR]) -> String {
    let mut display = String::with_capacity(path.len());
    let mut rest = path;
    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|i| open + i) else {
            break;
        };
        display.push_str(&rest[..open]);
        let name = &rest[open + 1..close];
        match path_params.iter().find(|p| p.name == name) {
            Some(p) => display.push_str(&format!("${{{}}}", p.ident)),
            None => display.push_str(&rest[open..=close]),
        }
        rest = &rest[close + 1..];
    }
    display.push_str(rest);
    display
}

/// Request body type; only `application/json` is considered.
fn resolve_request(op: &Operation) -> Option<TsType> {
    op.request_body
        .as_ref()
        .and_then(|body| body.content.get(JSON_MEDIA_TYPE))
        .map(|media| resolve_optional(media.schema.as_ref()))
}

/// Pick the response type from the declared statuses.
///
/// Success statuses are scanned first; `204` always means `boolean`. A
/// success status only matches when it carries a JSON schema. Redirects are
/// consulted when nothing matched: without content, or with non-JSON content
/// only, they resolve to `boolean`.
pub fn resolve_response(responses: &HashMap<String, Response>) -> TsType {
    for status in SUCCESS_STATUSES {
        let Some(response) = responses.get(status) else {
            continue;
        };
        if status == NO_CONTENT_STATUS {
            return TsType::boolean();
        }
        if let Some(schema) = json_schema(response) {
            return resolve_schema(schema);
        }
    }

    for status in REDIRECT_STATUSES {
        let Some(response) = responses.get(status) else {
            continue;
        };
        if response.content.is_empty() {
            return TsType::boolean();
        }
        match response.content.get(JSON_MEDIA_TYPE) {
            Some(media) => {
                if let Some(schema) = &media.schema {
                    return resolve_schema(schema);
                }
            }
            None => return TsType::boolean(),
        }
    }

    TsType::any()
}

fn json_schema(response: &Response) -> Option<&Schema> {
    response
        .content
        .get(JSON_MEDIA_TYPE)
        .and_then(|media| media.schema.as_ref())
}

/// Summary if present, otherwise the long description.
fn operation_description(op: &Operation) -> Option<String> {
    [&op.summary, &op.description]
        .into_iter()
        .flatten()
        .find(|text| !text.is_empty())
        .cloned()
}
