//! Inventario API data models
//!
//! Wire names follow the API (camelCase Spanish); Rust names are English.
//! Models are organized by resource type.

mod auth;
mod category;
mod envelope;
mod movement;
mod offer;
mod product;
mod supplier;

pub use auth::LoginRequest;
pub use category::{Category, CategoryUpdate, NewCategory};
pub use envelope::ApiResponse;
pub use movement::Movement;
pub use offer::{NewOffer, Offer, OfferUpdate};
pub use product::{NewProduct, Product, ProductUpdate};
pub use supplier::{NewSupplier, Supplier, SupplierUpdate};
