//! Display model implementations for table and JSON output
//!
//! Display models transform API records into CLI-friendly formats with
//! appropriate column names and serialization.

mod category;
mod common;
mod movement;
mod offer;
mod product;
mod supplier;

pub use category::CategoryDisplay;
pub use movement::MovementDisplay;
pub use offer::OfferDisplay;
pub use product::{CategoryNames, ProductDisplay};
pub use supplier::SupplierDisplay;
