//! Request body mapping

use super::schema;
use crate::openapi::{MediaType, RequestBody, Schema};
use crate::postman::{BodyKind, BodySpec, FormField};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//.*?(\n|$)").unwrap());

/// Convert a Postman body definition into an OpenAPI request body.
///
/// Unknown modes and whitespace-only raw bodies produce no body at all.
pub fn request_body(body: &BodySpec) -> Option<RequestBody> {
    match body.kind() {
        BodyKind::Raw(raw) => raw_body(raw),
        BodyKind::FormData(fields) => Some(formdata_body(fields)),
        BodyKind::Unsupported => None,
    }
}

/// Raw text body: infer a JSON schema, or fall back to plain text when
/// the payload is not valid JSON.
fn raw_body(raw: &str) -> Option<RequestBody> {
    // Postman examples often carry // annotations that break JSON parsing
    let stripped = LINE_COMMENT.replace_all(raw, "");
    if stripped.trim().is_empty() {
        return None;
    }

    let (media_type, schema) = match serde_json::from_str::<serde_json::Value>(&stripped) {
        Ok(value) => ("application/json", schema::infer(&value)),
        Err(_) => ("text/plain", Schema::typed("string")),
    };

    Some(single_content(media_type, schema))
}

/// Multipart form body: string fields with example values, binary-string
/// schemas for file fields, required names collected into the object
/// schema.
fn formdata_body(fields: &[FormField]) -> RequestBody {
    let mut properties = IndexMap::new();
    let mut required = Vec::new();

    for field in fields {
        let field_schema = if field.field_type.as_deref() == Some("file") {
            Schema {
                schema_type: Some("string".to_string()),
                format: Some("binary".to_string()),
                ..Schema::default()
            }
        } else {
            Schema {
                schema_type: Some("string".to_string()),
                example: Some(serde_json::Value::String(field.value.clone())),
                ..Schema::default()
            }
        };
        properties.insert(field.key.clone(), field_schema);

        if field.required {
            required.push(field.key.clone());
        }
    }

    let object_schema = Schema {
        schema_type: Some("object".to_string()),
        properties: Some(properties),
        required,
        ..Schema::default()
    };

    single_content("multipart/form-data", object_schema)
}

fn single_content(media_type: &str, schema: Schema) -> RequestBody {
    RequestBody {
        content: IndexMap::from([(media_type.to_string(), MediaType { schema })]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn body_json(body: &BodySpec) -> serde_json::Value {
        serde_json::to_value(request_body(body).expect("body expected")).unwrap()
    }

    fn raw_spec(raw: &str) -> BodySpec {
        serde_json::from_value(json!({ "mode": "raw", "raw": raw })).unwrap()
    }

    #[test]
    fn test_raw_json_body_infers_schema() {
        let body = raw_spec(r#"{"email": "a@b.c", "age": 30}"#);
        assert_eq!(
            body_json(&body),
            json!({
                "content": {
                    "application/json": {
                        "schema": {
                            "type": "object",
                            "properties": {
                                "email": {"type": "string"},
                                "age": {"type": "integer"}
                            }
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn test_raw_body_strips_line_comments() {
        let body = raw_spec("{\n  \"name\": \"a\" // display name\n}");
        let value = body_json(&body);
        assert!(value["content"]["application/json"]["schema"]["properties"]["name"].is_object());
    }

    #[test]
    fn test_raw_non_json_falls_back_to_text() {
        let body = raw_spec("plain text payload");
        assert_eq!(
            body_json(&body),
            json!({
                "content": {
                    "text/plain": {
                        "schema": {"type": "string"}
                    }
                }
            })
        );
    }

    #[test]
    fn test_whitespace_only_raw_body_is_absent() {
        assert!(request_body(&raw_spec("   \n  ")).is_none());
    }

    #[test]
    fn test_missing_raw_payload_reads_as_empty_object() {
        let body: BodySpec = serde_json::from_value(json!({ "mode": "raw" })).unwrap();
        assert_eq!(
            body_json(&body),
            json!({
                "content": {
                    "application/json": {
                        "schema": {"type": "object", "properties": {}}
                    }
                }
            })
        );
    }

    #[test]
    fn test_formdata_fields_and_required_list() {
        let body: BodySpec = serde_json::from_value(json!({
            "mode": "formdata",
            "formdata": [
                { "key": "avatar", "type": "file", "required": true },
                { "key": "caption", "value": "hello" }
            ]
        }))
        .unwrap();

        assert_eq!(
            body_json(&body),
            json!({
                "content": {
                    "multipart/form-data": {
                        "schema": {
                            "type": "object",
                            "properties": {
                                "avatar": {"type": "string", "format": "binary"},
                                "caption": {"type": "string", "example": "hello"}
                            },
                            "required": ["avatar"]
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn test_formdata_without_required_fields_omits_list() {
        let body: BodySpec = serde_json::from_value(json!({
            "mode": "formdata",
            "formdata": [{ "key": "caption", "value": "" }]
        }))
        .unwrap();

        let value = body_json(&body);
        let schema = &value["content"]["multipart/form-data"]["schema"];
        assert!(schema.get("required").is_none());
    }

    #[test]
    fn test_unknown_mode_produces_no_body() {
        let body: BodySpec =
            serde_json::from_value(json!({ "mode": "urlencoded", "urlencoded": [] })).unwrap();
        assert!(request_body(&body).is_none());
    }
}
