//! Display models for CLI output
//!
//! Converts API records into CLI-friendly table rows and JSON objects.

pub mod display;

pub use display::{
    CategoryDisplay, CategoryNames, MovementDisplay, OfferDisplay, ProductDisplay, SupplierDisplay,
};
