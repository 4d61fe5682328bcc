//! Product entity and its JSON mapping.

mod category;
mod product;
mod validation;
pub use category::Category;
pub use product::Product;
pub use validation::{parse_price, ProductPatch, DESCRIPTION_MAX_LEN, NAME_MAX_LEN};
