//! Postman Collection v2 type definitions
//!
//! Loose representation of the `item`/`request` tree. Every optional or
//! variant shape in the export format is resolved here, at the serde
//! boundary, so the conversion code never re-checks field presence.

use serde::Deserialize;

/// Collection document root
#[derive(Debug, Clone, Deserialize)]
pub struct Collection {
    /// Collection metadata
    #[serde(default)]
    pub info: Option<CollectionInfo>,

    /// Top-level items (folders and requests)
    #[serde(default)]
    pub item: Vec<Item>,

    /// Collection-level variables
    #[serde(default)]
    pub variable: Vec<Variable>,
}

/// Collection metadata
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionInfo {
    /// Collection name
    #[serde(default)]
    pub name: Option<String>,
}

/// Collection-level variable (key/value pair)
#[derive(Debug, Clone, Deserialize)]
pub struct Variable {
    /// Variable key
    #[serde(default)]
    pub key: String,

    /// Variable value
    #[serde(default)]
    pub value: Option<String>,
}

/// A node in the collection tree: a folder of nested items, or a leaf
/// request. A node carrying both `item` and `request` counts as a
/// folder, so the folder variant is listed first.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Item {
    /// Folder with nested children
    Folder(Folder),

    /// Leaf request
    Request(RequestItem),
}

/// Folder node
#[derive(Debug, Clone, Deserialize)]
pub struct Folder {
    /// Folder name (becomes a tag path segment)
    pub name: String,

    /// Nested items
    pub item: Vec<Item>,
}

/// Leaf request node
#[derive(Debug, Clone, Deserialize)]
pub struct RequestItem {
    /// Display name (becomes the operation summary)
    pub name: String,

    /// Request description
    #[serde(default)]
    pub description: Option<String>,

    /// The request definition
    pub request: RequestSpec,
}

/// Request definition
#[derive(Debug, Clone, Deserialize)]
pub struct RequestSpec {
    /// HTTP method (e.g., "GET", "POST")
    pub method: String,

    /// Request URL, raw or structured
    pub url: Url,

    /// Request body
    #[serde(default)]
    pub body: Option<BodySpec>,
}

/// Request URL: Postman exports either a plain string or a structured
/// object with `raw`, `host`, `path` and `query` parts.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Url {
    /// Plain URL string
    Raw(String),

    /// Structured URL object
    Detailed(UrlObject),
}

/// Structured URL object
#[derive(Debug, Clone, Deserialize)]
pub struct UrlObject {
    /// Full URL string, if present
    #[serde(default)]
    pub raw: Option<String>,

    /// Host segments
    #[serde(default)]
    pub host: Vec<String>,

    /// Path segments
    #[serde(default)]
    pub path: Vec<String>,

    /// Query parameters
    #[serde(default)]
    pub query: Vec<QueryParam>,
}

/// Query parameter on a structured URL
#[derive(Debug, Clone, Deserialize)]
pub struct QueryParam {
    /// Parameter name
    pub key: String,

    /// Parameter value
    #[serde(default)]
    pub value: Option<String>,

    /// Disabled parameters are skipped
    #[serde(default)]
    pub disabled: bool,
}

/// Request body definition
#[derive(Debug, Clone, Deserialize)]
pub struct BodySpec {
    /// Body mode: "raw", "formdata", or others (treated as absent)
    #[serde(default)]
    pub mode: Option<String>,

    /// Raw body text (raw mode)
    #[serde(default)]
    pub raw: Option<String>,

    /// Form fields (formdata mode)
    #[serde(default)]
    pub formdata: Vec<FormField>,
}

/// Resolved body shape
#[derive(Debug, Clone, Copy)]
pub enum BodyKind<'a> {
    /// Raw text body; a missing `raw` field reads as `"{}"`
    Raw(&'a str),

    /// Multipart form data fields
    FormData(&'a [FormField]),

    /// Unknown or absent mode
    Unsupported,
}

impl BodySpec {
    /// Resolve the body's mode and payload in one place.
    pub fn kind(&self) -> BodyKind<'_> {
        match self.mode.as_deref() {
            Some("raw") => BodyKind::Raw(self.raw.as_deref().unwrap_or("{}")),
            Some("formdata") => BodyKind::FormData(&self.formdata),
            _ => BodyKind::Unsupported,
        }
    }
}

/// Multipart form field
#[derive(Debug, Clone, Deserialize)]
pub struct FormField {
    /// Field name
    #[serde(default)]
    pub key: String,

    /// Example value
    #[serde(default)]
    pub value: String,

    /// Field type ("text" or "file")
    #[serde(rename = "type")]
    #[serde(default)]
    pub field_type: Option<String>,

    /// Required flag
    #[serde(default)]
    pub required: bool,

    /// Disabled flag
    #[serde(default)]
    pub disabled: bool,
}
