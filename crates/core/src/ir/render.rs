//! Rendering of the assembled model into a TypeScript module.
//!
//! The module exposes a single `createAdapter(client)` factory whose methods
//! wrap a `@fgrzl/fetch`-style client, followed by one declaration per
//! component schema.

use super::api::{ApiModel, Declaration, NamedSchemaIR, OperationIR};
use super::emit::Emit;
use super::types::TsType;
use super::utils::quote_if_needed;

/// Default module the generated code imports the fetch client from.
pub const DEFAULT_INSTANCE: &str = "@fgrzl/fetch";

const OPTIONS_ARG: &str =
    "options?: { signal?: AbortSignal; timeout?: number; operationId?: string }";

/// Renderer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Module specifier for `FetchClient`, `FetchResponse` and `buildQueryParams`.
    pub instance: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(DEFAULT_INSTANCE)
    }
}

impl RenderOptions {
    /// Options importing from `instance`; a trailing `.ts` is dropped.
    pub fn new(instance: impl Into<String>) -> Self {
        let instance = instance.into();
        let instance = instance
            .strip_suffix(".ts")
            .map_or_else(|| instance.clone(), str::to_string);
        Self { instance }
    }
}

/// Render the complete module.
pub fn render_module(model: &ApiModel, options: &RenderOptions) -> String {
    let mut output = String::new();
    output.push_str("// Auto-generated by fetch-gen\n");
    output.push_str(&format!(
        "import type {{ FetchClient, FetchResponse }} from '{}';\n",
        options.instance
    ));
    output.push_str(&format!(
        "import {{ buildQueryParams }} from '{}';\n\n",
        options.instance
    ));

    output.push_str(&render_adapter(&model.operations, &options.instance));

    for schema in &model.schemas {
        output.push('\n');
        output.push_str(&schema.emit());
    }

    output
}

fn render_adapter(operations: &[OperationIR], instance: &str) -> String {
    let mut output = String::new();
    output.push_str(concat!(
        "/**\n",
        " * Creates an API adapter with typed methods for all OpenAPI operations.\n",
        " *\n",
        " * @param client - The FetchClient instance to use for HTTP requests\n",
        " * @returns An object with typed methods for each API operation\n",
        " *\n",
        " * @example\n",
        " * ```typescript\n",
        " * import { createAdapter } from './generated';\n",
    ));
    output.push_str(&format!(" * import client from '{instance}';\n"));
    output.push_str(concat!(
        " *\n",
        " * client.setBaseUrl('https://api.example.com');\n",
        " * const api = createAdapter(client);\n",
        " *\n",
        " * const response = await api.getUsers();\n",
        " * if (response.ok) {\n",
        " *   console.log(response.data);\n",
        " * }\n",
        " * ```\n",
        " */\n",
    ));
    output.push_str("export function createAdapter(client: FetchClient): {\n");
    for op in operations {
        output.push_str(&render_signature_doc(op));
        output.push_str(&format!(
            "  {}: ({}) => Promise<FetchResponse<{}>>;\n",
            quote_if_needed(&op.id),
            arg_list(op),
            op.response_type.emit()
        ));
    }
    output.push_str("} {\n  return {\n");

    let bodies: Vec<_> = operations.iter().map(render_implementation).collect();
    output.push_str(&bodies.join(",\n"));
    if !bodies.is_empty() {
        output.push('\n');
    }

    output.push_str("  };\n}\n");
    output
}

fn render_signature_doc(op: &OperationIR) -> String {
    let mut lines = Vec::new();
    match &op.description {
        Some(description) => lines.extend(description.lines().map(sanitize_doc_line)),
        None => lines.push(format!("{} {}", op.method, op.display_path)),
    }
    lines.push(String::new());
    for param in &op.path_params {
        let text = param
            .description
            .as_deref()
            .map_or_else(|| format!("{} parameter", param.ident), sanitize_doc_line);
        lines.push(format!("@param {} - {text}", param.ident));
    }
    if !op.query_params.is_empty() {
        lines.push("@param query - Query parameters".to_string());
    }
    if op.has_body {
        lines.push("@param body - Request body".to_string());
    }
    lines.push("@param options - Request options (signal, timeout, operationId)".to_string());
    lines.push(format!(
        "@returns Promise resolving to FetchResponse<{}>",
        op.response_type.emit()
    ));

    let mut output = String::from("  /**\n");
    for line in lines {
        if line.is_empty() {
            output.push_str("   *\n");
        } else {
            output.push_str(&format!("   * {line}\n"));
        }
    }
    output.push_str("   */\n");
    output
}

fn render_implementation(op: &OperationIR) -> String {
    let mut output = format!(
        "    {}: ({}): Promise<FetchResponse<{}>> => {{\n",
        quote_if_needed(&op.id),
        arg_list(op),
        op.response_type.emit()
    );
    let template = format!("`{}`", op.display_path);
    if op.query_params.is_empty() {
        output.push_str(&format!("      {}\n", client_call(op, &template)));
    } else {
        output.push_str("      const queryString = query ? buildQueryParams(query) : '';\n");
        output.push_str(&format!(
            "      const url = {template} + (queryString ? '?' + queryString : '');\n"
        ));
        output.push_str(&format!("      {}\n", client_call(op, "url")));
    }
    output.push_str("    }");
    output
}

/// Function arguments: path params, `query`, `body`, then `options`.
pub fn arg_list(op: &OperationIR) -> String {
    let mut args = Vec::new();
    for p in &op.path_params {
        let optional = if p.required { "" } else { " | undefined" };
        args.push(format!("{}: {}{optional}", p.ident, p.ty.emit()));
    }
    if !op.query_params.is_empty() {
        let props: Vec<_> = op
            .query_params
            .iter()
            .map(|p| {
                let optional = if p.required { "" } else { "?" };
                format!("{}{optional}: {}", quote_if_needed(&p.name), p.ty.emit())
            })
            .collect();
        args.push(format!("query?: {{ {} }}", props.join("; ")));
    }
    if op.has_body {
        let body = op.request_type.as_ref().map_or_else(|| TsType::any().emit(), Emit::emit);
        args.push(format!("body: {body}"));
    }
    args.push(OPTIONS_ARG.to_string());
    args.join(", ")
}

/// The client invocation, following the `@fgrzl/fetch` method signatures:
/// - get/del/head: (url, params?, options?)
/// - post/put/patch: (url, body?, headers?, options?)
pub fn client_call(op: &OperationIR, url: &str) -> String {
    let method = op.client_method();
    let body = if op.has_body { "body" } else { "undefined" };
    match method {
        "get" | "del" | "head" => {
            format!("return client.{method}({url}, undefined, options);")
        }
        "post" | "put" | "patch" => {
            format!("return client.{method}({url}, {body}, undefined, options);")
        }
        _ => format!("return client.{method}({url}, {body}, options);"),
    }
}

fn sanitize_doc_line(line: &str) -> String {
    line.trim().replace("*/", "*\\/")
}

impl Emit for NamedSchemaIR {
    fn emit(&self) -> String {
        let mut output = match &self.description {
            Some(description) => format!("/** {} */\n", sanitize_doc_line(description)),
            None => format!("/** {} schema */\n", self.name),
        };
        match self.declaration {
            Declaration::Alias => {
                output.push_str(&format!("export type {} = {};\n", self.name, self.ty.emit()));
            }
            Declaration::Interface => {
                output.push_str(&format!("export interface {} {{\n", self.name));
                for prop in &self.properties {
                    if let Some(description) = &prop.description {
                        output.push_str(&format!("  /** {} */\n", sanitize_doc_line(description)));
                    }
                    let opt = if prop.required { "" } else { "?" };
                    output.push_str(&format!(
                        "  {}{opt}: {};\n",
                        quote_if_needed(&prop.name),
                        prop.ty.emit()
                    ));
                }
                output.push_str("}\n");
            }
        }
        output
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::ir::api::{HttpMethod, ParamIR, PropertyIR};
    use crate::ir::types::TsPrimitive;

    fn string() -> TsType {
        TsType::Primitive(TsPrimitive::String)
    }

    fn param(name: &str, required: bool) -> ParamIR {
        ParamIR {
            name: name.to_string(),
            ident: name.to_string(),
            ty: string(),
            required,
            description: None,
        }
    }

    fn op(id: &str, method: HttpMethod) -> OperationIR {
        OperationIR {
            id: id.to_string(),
            method,
            path: "/users".to_string(),
            display_path: "/users".to_string(),
            path_params: Vec::new(),
            query_params: Vec::new(),
            has_body: false,
            request_type: None,
            response_type: TsType::any(),
            description: None,
        }
    }

    #[test]
    fn test_render_options_strip_ts_suffix() {
        assert_eq!(RenderOptions::new("./client.ts").instance, "./client");
        assert_eq!(RenderOptions::default().instance, "@fgrzl/fetch");
    }

    #[test]
    fn test_arg_list() {
        let mut update = op("updateUser", HttpMethod::Put);
        update.path_params = vec![param("id", true), param("rev", false)];
        update.query_params = vec![param("dry-run", false), param("force", true)];
        update.has_body = true;
        update.request_type = Some(TsType::Ref("User".into()));
        assert_eq!(
            arg_list(&update),
            format!(
                "id: string, rev: string | undefined, query?: {{ \"dry-run\"?: string; force: string }}, body: User, {OPTIONS_ARG}"
            )
        );
    }

    #[test]
    fn test_body_without_json_type_is_any() {
        let mut upload = op("upload", HttpMethod::Post);
        upload.has_body = true;
        assert_eq!(arg_list(&upload), format!("body: any, {OPTIONS_ARG}"));
    }

    #[test]
    fn test_client_calls() {
        assert_eq!(
            client_call(&op("a", HttpMethod::Get), "url"),
            "return client.get(url, undefined, options);"
        );
        assert_eq!(
            client_call(&op("a", HttpMethod::Delete), "url"),
            "return client.del(url, undefined, options);"
        );
        let mut post = op("a", HttpMethod::Post);
        assert_eq!(
            client_call(&post, "url"),
            "return client.post(url, undefined, undefined, options);"
        );
        post.has_body = true;
        assert_eq!(
            client_call(&post, "url"),
            "return client.post(url, body, undefined, options);"
        );
        assert_eq!(
            client_call(&op("a", HttpMethod::Options), "url"),
            "return client.options(url, undefined, options);"
        );
    }

    #[test]
    fn test_adapter_doc_has_usage_example() {
        let rendered = render_module(&ApiModel::default(), &RenderOptions::new("./client"));
        assert!(rendered.contains(" * @example\n * ```typescript\n"));
        assert!(rendered.contains(" * import client from './client';\n"));
        assert!(rendered.contains(" * const api = createAdapter(client);\n"));
        assert!(rendered.contains(" * ```\n */\nexport function createAdapter"));
    }

    #[test]
    fn test_path_params_never_shadow_adapter_bindings() {
        let document: crate::spec::OpenApiDocument = serde_yaml::from_str(
            r"
paths:
  /tenants/{client}/items/{options}/{org-id}/{orgId}:
    get:
      operationId: getItem
      parameters:
        - { name: client, in: path, required: true, schema: { type: string } }
        - { name: options, in: path, required: true, schema: { type: string } }
        - { name: org-id, in: path, required: true, schema: { type: string } }
        - { name: orgId, in: path, required: true, schema: { type: string } }
",
        )
        .unwrap();
        let model = crate::ir::build_model(&document).model;
        let get_item = model.operation("getItem").unwrap();

        assert_eq!(
            arg_list(get_item),
            format!("_client: string, _options: string, orgId: string, orgId2: string, {OPTIONS_ARG}")
        );
        assert!(render_implementation(get_item).contains(
            "return client.get(`/tenants/${_client}/items/${_options}/${orgId}/${orgId2}`, undefined, options);"
        ));
    }

    #[test]
    fn test_query_operation_builds_url() {
        let mut list = op("listUsers", HttpMethod::Get);
        list.query_params = vec![param("page", false)];
        let rendered = render_implementation(&list);
        assert!(rendered.contains("const queryString = query ? buildQueryParams(query) : '';"));
        assert!(rendered.contains("const url = `/users` + (queryString ? '?' + queryString : '');"));
        assert!(rendered.contains("return client.get(url, undefined, options);"));
    }

    #[test]
    fn test_doc_falls_back_to_method_and_path() {
        let doc = render_signature_doc(&op("listUsers", HttpMethod::Get));
        assert!(doc.contains("   * GET /users\n"));
        assert!(doc.contains("@returns Promise resolving to FetchResponse<any>"));
    }

    #[test]
    fn test_interface_declaration() {
        let schema = NamedSchemaIR {
            name: "User".into(),
            description: None,
            ty: TsType::any(),
            properties: vec![
                PropertyIR {
                    name: "id".into(),
                    ty: string(),
                    required: true,
                    description: Some("Identifier".into()),
                },
                PropertyIR {
                    name: "name".into(),
                    ty: string(),
                    required: false,
                    description: None,
                },
            ],
            declaration: Declaration::Interface,
        };
        assert_eq!(
            schema.emit(),
            "/** User schema */\nexport interface User {\n  /** Identifier */\n  id: string;\n  name?: string;\n}\n"
        );
    }

    #[test]
    fn test_alias_declaration() {
        let schema = NamedSchemaIR {
            name: "Status".into(),
            description: Some("Account status".into()),
            ty: TsType::Union(vec![string(), TsType::null()]),
            properties: Vec::new(),
            declaration: Declaration::Alias,
        };
        assert_eq!(
            schema.emit(),
            "/** Account status */\nexport type Status = string | null;\n"
        );
    }

    #[test]
    fn test_empty_model() {
        let rendered = render_module(&ApiModel::default(), &RenderOptions::default());
        assert!(rendered.starts_with("// Auto-generated by fetch-gen\n"));
        assert!(rendered.contains("import { buildQueryParams } from '@fgrzl/fetch';"));
        assert!(rendered.contains("export function createAdapter(client: FetchClient): {\n} {\n  return {\n  };\n}\n"));
    }
}
