//! Request extractors.

pub mod json_body;
pub use json_body::{check_content_type, JsonBody, JSON_CONTENT_TYPE};
