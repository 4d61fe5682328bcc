//! SQL text for the products table: fixed identifiers, values always as parameters.

mod builder;
pub use builder::*;
