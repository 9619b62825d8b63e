//! Inventario API client
//!
//! Layers, bottom up: [`transport`] sends requests, [`pipeline`] wraps the
//! transport with session stages, [`InventarioClient`] turns resource
//! operations into pipeline calls.

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pipeline;
pub mod transport;

mod inventario;

pub use api::{AuthApi, CategoryApi, MovementApi, OfferApi, ProductApi, SupplierApi};
pub use inventario::InventarioClient;
