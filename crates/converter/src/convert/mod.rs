//! Collection-to-document conversion
//!
//! Single-pass, purely functional transformation from a parsed Postman
//! collection to an OpenAPI 3.0 document. The pieces, leaves first:
//! URL normalization ([`url`]), schema inference from example payloads
//! ([`schema`]), request body mapping ([`body`]), operation assembly
//! ([`operation`]), and the tree walk that fills the paths map
//! ([`walker`]). This module assembles the document envelope around the
//! walker's output.

pub mod body;
pub mod operation;
pub mod schema;
pub mod url;
pub mod walker;

use crate::openapi::{Components, Info, OpenApiDocument, SecurityScheme, Server};
use crate::postman::Collection;
use indexmap::IndexMap;

const DEFAULT_TITLE: &str = "API Documentation";
const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Convert a parsed collection into an OpenAPI document.
///
/// Total: any collection that deserialized successfully converts. The
/// transformation holds no state across calls.
pub fn convert_collection(collection: &Collection) -> OpenApiDocument {
    let title = collection
        .info
        .as_ref()
        .and_then(|info| info.name.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let mut paths = IndexMap::new();
    walker::walk(&collection.item, &mut paths, "");

    OpenApiDocument {
        openapi: "3.0.0".to_string(),
        info: Info {
            title,
            description: "Generated from Postman collection".to_string(),
            version: "1.0.0".to_string(),
        },
        servers: vec![Server {
            url: base_url(collection),
            description: "API Server".to_string(),
        }],
        paths,
        components: Components {
            schemas: IndexMap::new(),
            security_schemes: IndexMap::from([(
                "bearerAuth".to_string(),
                SecurityScheme {
                    scheme_type: "http".to_string(),
                    scheme: "bearer".to_string(),
                    bearer_format: "JWT".to_string(),
                },
            )]),
        },
    }
}

/// Base server URL from the `server` collection variable.
fn base_url(collection: &Collection) -> String {
    match collection.variable.iter().find(|var| var.key == "server") {
        Some(var) => var
            .value
            .clone()
            .unwrap_or_else(|| "http://localhost".to_string()),
        None => DEFAULT_BASE_URL.to_string(),
    }
}
