//! OpenAPI 3.0 output model

mod types;

pub use types::*;
