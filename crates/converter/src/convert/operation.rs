//! Operation assembly for a single request item

use super::body;
use crate::openapi::{self, Operation, Parameter, Schema};
use crate::postman::{RequestItem, Url};
use regex::Regex;
use std::sync::LazyLock;

static PATH_PARAM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^}]+)\}").unwrap());

/// Build the OpenAPI operation for one request item.
///
/// `tag_prefix` is the folder path accumulated by the walker; an empty
/// prefix falls back to the "default" tag.
pub fn build_operation(item: &RequestItem, path_template: &str, tag_prefix: &str) -> Operation {
    let tag = if tag_prefix.is_empty() {
        "default"
    } else {
        tag_prefix
    };

    // Path parameters first, then enabled query parameters
    let mut parameters: Vec<Parameter> = PATH_PARAM
        .captures_iter(path_template)
        .map(|capture| Parameter {
            name: capture[1].to_string(),
            location: "path".to_string(),
            required: true,
            schema: Schema::typed("string"),
        })
        .collect();

    if let Url::Detailed(url) = &item.request.url {
        for query in url.query.iter().filter(|q| !q.disabled) {
            parameters.push(Parameter {
                name: query.key.clone(),
                location: "query".to_string(),
                required: false,
                schema: Schema::typed("string"),
            });
        }
    }

    // Auth endpoints themselves are left without a security requirement
    let security = if path_template.contains("login") || path_template.contains("register") {
        None
    } else {
        Some(openapi::bearer_requirement())
    };

    Operation {
        tags: vec![tag.to_string()],
        summary: item.name.clone(),
        description: item.description.clone().unwrap_or_default(),
        operation_id: operation_id(&item.name),
        parameters,
        request_body: item.request.body.as_ref().and_then(body::request_body),
        responses: openapi::default_responses(),
        security,
    }
}

/// Derive a camelCase operationId from a request display name.
///
/// Non-alphanumeric characters split the name into words; an empty
/// result falls back to "operation". The id is deterministic but not
/// deduplicated across the collection.
pub fn operation_id(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();

    let mut words = sanitized.split_whitespace();
    let Some(first) = words.next() else {
        return "operation".to_string();
    };

    let mut id = first.to_lowercase();
    for word in words {
        let mut chars = word.chars();
        if let Some(initial) = chars.next() {
            id.extend(initial.to_uppercase());
            id.push_str(&chars.as_str().to_lowercase());
        }
    }
    id
}
