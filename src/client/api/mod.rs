//! API trait definitions split by responsibility
//!
//! This module organizes the Inventario API surface into focused sub-traits:
//! - [`AuthApi`] - Sign-in
//! - [`CategoryApi`], [`SupplierApi`], [`ProductApi`], [`OfferApi`] - Resource CRUD
//! - [`MovementApi`] - Read-only inventory ledger
//!
//! The [`InventarioApi`](super::InventarioApi) super-trait combines them.

mod auth;
mod category;
mod movement;
mod offer;
mod product;
mod supplier;

pub use auth::AuthApi;
pub use category::CategoryApi;
pub use movement::MovementApi;
pub use offer::OfferApi;
pub use product::ProductApi;
pub use supplier::SupplierApi;
