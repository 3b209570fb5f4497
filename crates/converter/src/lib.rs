//! Postman Collection v2 to OpenAPI 3.0 conversion
//!
//! Walks a collection's `item`/`request` tree, normalizes the
//! heterogeneous URL and body shapes Postman exports, infers JSON
//! Schemas from example payloads, and assembles an OpenAPI 3.0.0
//! document.
//!
//! The conversion is a pure function over the input: no I/O, no state
//! across calls, and deterministic output (ordered maps everywhere), so
//! converting the same collection twice yields identical bytes.
//!
//! ## Usage
//! ```rust,ignore
//! use post2swag_converter::convert_json;
//!
//! let document = convert_json(&collection_json)?;
//! println!("{}", serde_json::to_string_pretty(&document)?);
//! ```
//!
//! For embedding in a service that must never fail with an error value
//! of its own shape, [`convert_or_error`] returns either the document or
//! a `{"error": "Failed to convert: ..."}` object, never an `Err`.

pub mod convert;
mod error;
pub mod openapi;
pub mod postman;

pub use error::{ConvertError, Result};
pub use openapi::OpenApiDocument;
pub use postman::PostmanParser;

/// Convert a collection JSON string into an OpenAPI document.
pub fn convert_json(json: &str) -> Result<OpenApiDocument> {
    Ok(PostmanParser::from_json(json)?.convert())
}

/// Convert an already-parsed collection JSON value into an OpenAPI
/// document.
pub fn convert_value(value: serde_json::Value) -> Result<OpenApiDocument> {
    Ok(PostmanParser::from_value(value)?.convert())
}

/// Convert a collection JSON string, folding any failure into the
/// single-key `{"error": "Failed to convert: <message>"}` object.
pub fn convert_or_error(json: &str) -> serde_json::Value {
    match convert_json(json) {
        Ok(document) => {
            // A freshly built document always serializes
            serde_json::to_value(&document)
                .unwrap_or_else(|e| ConvertError::Json(e).to_error_object())
        }
        Err(e) => e.to_error_object(),
    }
}
