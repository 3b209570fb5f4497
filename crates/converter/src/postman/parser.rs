//! Postman collection loader

use super::types::Collection;
use crate::convert;
use crate::error::{ConvertError, Result};
use crate::openapi::OpenApiDocument;
use std::fs;
use std::path::Path;

/// Postman collection parser
///
/// Loads a Postman Collection v2 export and converts it into an OpenAPI
/// 3.0 document.
pub struct PostmanParser {
    /// Loaded collection
    collection: Collection,
}

impl PostmanParser {
    /// Load a collection from a file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = PostmanParser::from_file("my_api.postman_collection.json")?;
    /// let document = parser.convert();
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ConvertError::Parse(format!(
                "Failed to read collection file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Parse a collection from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let collection: Collection = serde_json::from_str(json)
            .map_err(|e| ConvertError::Parse(format!("Failed to parse collection JSON: {}", e)))?;

        Ok(Self { collection })
    }

    /// Parse a collection from an already-parsed JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let collection: Collection = serde_json::from_value(value)
            .map_err(|e| ConvertError::Parse(format!("Failed to parse collection JSON: {}", e)))?;

        Ok(Self { collection })
    }

    /// Convert the loaded collection into an OpenAPI document
    pub fn convert(&self) -> OpenApiDocument {
        convert::convert_collection(&self.collection)
    }

    /// Get a reference to the underlying collection
    pub fn collection(&self) -> &Collection {
        &self.collection
    }
}
