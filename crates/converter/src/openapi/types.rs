//! OpenAPI 3.0 output document types
//!
//! Keys the format treats as optional (`parameters`, `requestBody`,
//! `security`) are skipped entirely when absent rather than serialized
//! as nulls or empty lists. All maps are insertion-ordered so the same
//! input always serializes to the same bytes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Operations for one path, keyed by lowercase HTTP method
pub type PathOperations = IndexMap<String, Operation>;

/// A single security requirement, e.g. `{"bearerAuth": []}`
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// OpenAPI document root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// OpenAPI version (always "3.0.0")
    pub openapi: String,

    /// API metadata
    pub info: Info,

    /// API servers
    pub servers: Vec<Server>,

    /// Paths and their operations
    pub paths: IndexMap<String, PathOperations>,

    /// Reusable components
    pub components: Components,
}

/// API metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Info {
    /// API title
    pub title: String,

    /// API description
    pub description: String,

    /// API version
    pub version: String,
}

/// Server entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    /// Server base URL
    pub url: String,

    /// Server description
    pub description: String,
}

/// HTTP operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    /// Grouping tags
    pub tags: Vec<String>,

    /// Short summary (the request's display name)
    pub summary: String,

    /// Longer description
    pub description: String,

    /// Operation identifier
    #[serde(rename = "operationId")]
    pub operation_id: String,

    /// Path and query parameters
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    /// Request body
    #[serde(rename = "requestBody")]
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    /// Responses keyed by status code
    pub responses: IndexMap<String, Response>,

    /// Security requirements
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,
}

/// Operation parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,

    /// Location: "path" or "query"
    #[serde(rename = "in")]
    pub location: String,

    /// Required flag
    pub required: bool,

    /// Parameter schema
    pub schema: Schema,
}

/// Response entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// Response description
    pub description: String,
}

/// Request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestBody {
    /// Content keyed by media type
    pub content: IndexMap<String, MediaType>,
}

/// Media type entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaType {
    /// Payload schema
    pub schema: Schema,
}

/// JSON Schema subset emitted by the converter
///
/// Every field is optional; the unconstrained schema serializes as `{}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    /// Type: string, number, integer, boolean, array, object, null
    #[serde(rename = "type")]
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    /// Format (e.g., "binary" for file uploads)
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Example value
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,

    /// Properties (object type)
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Schema>>,

    /// Item schema (array type)
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    /// Required property names
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

/// Reusable components
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Components {
    /// Named schemas (always empty; the converter inlines everything)
    pub schemas: IndexMap<String, Schema>,

    /// Security schemes
    #[serde(rename = "securitySchemes")]
    pub security_schemes: IndexMap<String, SecurityScheme>,
}

/// Security scheme descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityScheme {
    /// Scheme type (e.g., "http")
    #[serde(rename = "type")]
    pub scheme_type: String,

    /// HTTP auth scheme (e.g., "bearer")
    pub scheme: String,

    /// Bearer token format (e.g., "JWT")
    #[serde(rename = "bearerFormat")]
    pub bearer_format: String,
}

impl Schema {
    /// Schema with only a `type` key
    pub fn typed(schema_type: &str) -> Self {
        Self {
            schema_type: Some(schema_type.to_string()),
            ..Self::default()
        }
    }

    /// Empty schema (`{}`) that accepts any value
    pub fn unconstrained() -> Self {
        Self::default()
    }
}

/// The fixed response set attached to every operation
pub fn default_responses() -> IndexMap<String, Response> {
    let mut responses = IndexMap::new();
    for (status, description) in [
        ("200", "Successful operation"),
        ("400", "Bad request"),
        ("401", "Unauthorized"),
        ("404", "Not found"),
        ("500", "Internal server error"),
    ] {
        responses.insert(
            status.to_string(),
            Response {
                description: description.to_string(),
            },
        );
    }
    responses
}

/// The `[{"bearerAuth": []}]` requirement attached to protected operations
pub fn bearer_requirement() -> Vec<SecurityRequirement> {
    vec![IndexMap::from([("bearerAuth".to_string(), Vec::new())])]
}
