//! Postman Collection v2 input model
//!
//! Parses `item`/`request` trees as exported by Postman's
//! "Collection v2.x" format. The variant shapes of the export (raw vs
//! structured URLs, folder vs request nodes, body modes) are resolved
//! once here, at the deserialization boundary.
//!
//! ## Usage
//! ```rust,ignore
//! use post2swag_converter::postman::PostmanParser;
//!
//! let parser = PostmanParser::from_file("my_api.postman_collection.json")?;
//! let document = parser.convert();
//! ```

mod parser;
mod types;

pub use parser::PostmanParser;
pub use types::*;
