//! URL normalization
//!
//! Reduces a Postman URL (raw string or structured object) to a clean
//! OpenAPI path template: query string and `{{variable}}` placeholders
//! stripped, scheme and host dropped, `:param` segments rewritten to
//! `{param}`.

use crate::postman::Url;
use regex::Regex;
use std::sync::LazyLock;

static TEMPLATE_VAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{[^}]+\}\}").unwrap());
static COLON_SEGMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":([^/]+)").unwrap());

/// Extract the path template for a request URL.
pub fn path_template(url: &Url) -> String {
    let raw = match url {
        Url::Raw(s) => s.clone(),
        Url::Detailed(obj) => match &obj.raw {
            Some(raw) => raw.clone(),
            // No raw form: synthesize one from the host and path segments
            None => format!("{}/{}", obj.host.join("/"), obj.path.join("/")),
        },
    };

    let path = extract_path(&raw);
    COLON_SEGMENT.replace_all(&path, "{${1}}").into_owned()
}

/// Strip query string, template variables, and scheme+host from a raw URL.
fn extract_path(raw: &str) -> String {
    let without_query = raw.split('?').next().unwrap_or("");

    // {{variable}} placeholders are environment values (typically the
    // base URL), not path segments; they collapse to nothing.
    let without_vars = TEMPLATE_VAR.replace_all(without_query, "");

    // Full URL: drop scheme and host, keep everything after the third slash
    if without_vars.starts_with("http") {
        let path = without_vars.splitn(4, '/').nth(3).unwrap_or("");
        return format!("/{}", path);
    }

    if without_vars.starts_with('/') {
        without_vars.into_owned()
    } else {
        format!("/{}", without_vars)
    }
}
