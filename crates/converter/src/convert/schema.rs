//! JSON Schema inference from example payloads

use crate::openapi::Schema;
use indexmap::IndexMap;
use serde_json::Value;

/// Derive a schema from an example JSON value.
///
/// Total over any value. Arrays are described by their first element
/// only; an empty array gets the unconstrained item schema `{}`.
pub fn infer(value: &Value) -> Schema {
    match value {
        Value::Object(map) => {
            let properties: IndexMap<String, Schema> =
                map.iter().map(|(k, v)| (k.clone(), infer(v))).collect();
            Schema {
                schema_type: Some("object".to_string()),
                properties: Some(properties),
                ..Schema::default()
            }
        }
        Value::Array(items) => {
            let item_schema = match items.first() {
                Some(first) => infer(first),
                None => Schema::unconstrained(),
            };
            Schema {
                schema_type: Some("array".to_string()),
                items: Some(Box::new(item_schema)),
                ..Schema::default()
            }
        }
        Value::String(_) => Schema::typed("string"),
        Value::Bool(_) => Schema::typed("boolean"),
        Value::Number(n) if n.is_i64() || n.is_u64() => Schema::typed("integer"),
        Value::Number(_) => Schema::typed("number"),
        Value::Null => Schema::typed("null"),
    }
}
