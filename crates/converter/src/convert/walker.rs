//! Recursive collection tree traversal

use super::{operation, url};
use crate::openapi::PathOperations;
use crate::postman::Item;
use indexmap::IndexMap;

/// Walk the item tree in input order, accumulating operations into the
/// shared paths map.
///
/// Folder names join the tag prefix with `/`. Two requests landing on
/// the same (path, method) key overwrite: the later one wins, fields are
/// never merged.
pub fn walk(items: &[Item], paths: &mut IndexMap<String, PathOperations>, tag_prefix: &str) {
    for item in items {
        match item {
            Item::Folder(folder) => {
                let prefix = if tag_prefix.is_empty() {
                    folder.name.clone()
                } else {
                    format!("{}/{}", tag_prefix, folder.name)
                };
                walk(&folder.item, paths, &prefix);
            }
            Item::Request(request) => {
                let template = url::path_template(&request.request.url);
                let method = request.request.method.to_lowercase();
                let op = operation::build_operation(request, &template, tag_prefix);
                paths.entry(template).or_default().insert(method, op);
            }
        }
    }
}
