//! Operation records: one per tool, carrying everything needed to turn
//! invocation arguments into an [`ApiRequest`].

use std::borrow::Cow;
use std::sync::Arc;

use http::Method;
use rmcp::model::{JsonObject, Tool as McpTool};
use serde_json::{Map, Value, json};

use crate::client::{ApiRequest, js_string};

/// JSON type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    StringArray,
}

/// One field of a tool's input schema.
#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
    pub description: &'static str,
    pub allowed: &'static [&'static str],
    pub required: bool,
}

impl Param {
    pub const fn string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::String,
            description,
            allowed: &[],
            required: false,
        }
    }

    pub const fn number(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Number,
            description,
            allowed: &[],
            required: false,
        }
    }

    pub const fn string_array(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::StringArray,
            description,
            allowed: &[],
            required: false,
        }
    }

    pub const fn one_of(mut self, allowed: &'static [&'static str]) -> Self {
        self.allowed = allowed;
        self
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn to_schema(self) -> Value {
        let mut property = match self.kind {
            ParamKind::String => json!({ "type": "string" }),
            ParamKind::Number => json!({ "type": "number" }),
            ParamKind::StringArray => json!({ "type": "array", "items": { "type": "string" } }),
        };
        if !self.allowed.is_empty() {
            property["enum"] = json!(self.allowed);
        }
        property["description"] = json!(self.description);
        property
    }
}

/// How the request body is derived from the arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyShape {
    /// No body at all (reads, deletes, cancel/deactivate transitions).
    Empty,
    /// Copy the listed fields, in order, skipping absent ones.
    Pick(&'static [&'static str]),
    /// Charge creation: customer fields regrouped under `customer`.
    Charge,
    /// Payout creation: PIX key or bank account under `destination`.
    Payout,
    /// Updates: every argument except `id`, passed through verbatim.
    WithoutId,
}

impl BodyShape {
    /// Build the body for `args`, or `None` when the operation sends none.
    pub fn build(self, args: &JsonObject) -> Option<Value> {
        match self {
            Self::Empty => None,
            Self::Pick(fields) => Some(Value::Object(pick(args, fields))),
            Self::Charge => Some(charge_body(args)),
            Self::Payout => Some(payout_body(args)),
            Self::WithoutId => {
                let mut body = args.clone();
                body.remove(ID_FIELD);
                Some(Value::Object(body))
            }
        }
    }
}

/// Argument interpolated into `{id}` path templates.
pub const ID_FIELD: &str = "id";

/// A query parameter whose value is replaced when the argument is falsy.
#[derive(Debug, Clone, Copy)]
pub struct QueryDefault {
    pub name: &'static str,
    pub value: &'static str,
}

/// A single tool: its descriptor plus the request it maps to.
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    pub name: &'static str,
    pub description: &'static str,
    pub method: OpMethod,
    /// Path template; `{id}` is replaced with the `id` argument.
    pub path: &'static str,
    pub params: &'static [Param],
    /// Fields copied into the query string (GET only).
    pub query: &'static [&'static str],
    pub query_defaults: &'static [QueryDefault],
    pub body: BodyShape,
}

/// HTTP verb of an operation. Kept `Copy` so the table can live in a `static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<OpMethod> for Method {
    fn from(method: OpMethod) -> Self {
        match method {
            OpMethod::Get => Method::GET,
            OpMethod::Post => Method::POST,
            OpMethod::Put => Method::PUT,
            OpMethod::Delete => Method::DELETE,
        }
    }
}

impl Operation {
    /// JSON Schema describing the accepted arguments.
    pub fn input_schema(&self) -> JsonObject {
        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), json!("object"));

        let mut properties = Map::new();
        for param in self.params {
            properties.insert(param.name.to_string(), param.to_schema());
        }
        schema.insert("properties".to_string(), Value::Object(properties));

        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();
        if !required.is_empty() {
            schema.insert("required".to_string(), json!(required));
        }

        schema
    }

    /// Converts this operation to an `McpTool` for use in `list_tools`.
    pub fn to_mcp_tool(&self) -> McpTool {
        McpTool::new(
            Cow::Borrowed(self.name),
            Cow::Borrowed(self.description),
            Arc::new(self.input_schema()),
        )
    }

    /// Translate invocation arguments into the request this operation sends.
    ///
    /// Arguments are not validated here; a missing `id` still produces a
    /// request and the remote API decides what to answer.
    pub fn build_request(&self, args: &JsonObject) -> ApiRequest {
        let path = self.render_path(args);

        let params = if self.query.is_empty() {
            None
        } else {
            let mut params = pick(args, self.query);
            for default in self.query_defaults {
                if !params.get(default.name).is_some_and(is_truthy) {
                    params.insert(default.name.to_string(), json!(default.value));
                }
            }
            Some(params)
        };

        ApiRequest {
            method: self.method.into(),
            path,
            params,
            body: self.body.build(args),
        }
    }

    fn render_path(&self, args: &JsonObject) -> String {
        if !self.path.contains("{id}") {
            return self.path.to_string();
        }

        // An absent id renders as `undefined`, like a template literal would.
        let id = args
            .get(ID_FIELD)
            .map_or_else(|| "undefined".to_string(), js_string);
        self.path.replace("{id}", &id)
    }
}

/// Copy `fields` from `args` in the given order. Absent fields are skipped;
/// explicit `null`s are kept.
fn pick(args: &JsonObject, fields: &[&str]) -> JsonObject {
    let mut out = JsonObject::new();
    for field in fields {
        if let Some(value) = args.get(*field) {
            out.insert((*field).to_string(), value.clone());
        }
    }
    out
}

/// Copy `from` in `args` to `to` in `out`, if present.
fn copy_as(out: &mut JsonObject, args: &JsonObject, from: &str, to: &str) {
    if let Some(value) = args.get(from) {
        out.insert(to.to_string(), value.clone());
    }
}

/// JavaScript-style truthiness of an argument.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn charge_body(args: &JsonObject) -> Value {
    let mut body = pick(args, &["amount", "payment_method", "description"]);

    let mut customer = JsonObject::new();
    copy_as(&mut customer, args, "customer_name", "name");
    copy_as(&mut customer, args, "customer_email", "email");
    copy_as(&mut customer, args, "customer_document", "document");
    body.insert("customer".to_string(), Value::Object(customer));

    Value::Object(body)
}

fn payout_body(args: &JsonObject) -> Value {
    let mut destination = JsonObject::new();
    // A PIX key wins; bank fields are dropped even when supplied.
    if args.get("pix_key").is_some_and(is_truthy) {
        copy_as(&mut destination, args, "pix_key", "pix_key");
    } else {
        for field in ["bank_code", "branch", "account", "account_type"] {
            copy_as(&mut destination, args, field, field);
        }
    }
    copy_as(&mut destination, args, "holder_name", "holder_name");
    copy_as(&mut destination, args, "holder_document", "holder_document");

    let mut body = pick(args, &["amount"]);
    body.insert("destination".to_string(), Value::Object(destination));
    copy_as(&mut body, args, "description", "description");

    Value::Object(body)
}
