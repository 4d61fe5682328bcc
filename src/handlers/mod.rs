//! HTTP handlers for products and service health.

pub mod common;
pub mod product;
pub use common::*;
pub use product::*;
