//! Supplier API trait

use async_trait::async_trait;

use crate::client::models::{NewSupplier, Supplier, SupplierUpdate};
use crate::error::Result;

/// Supplier operations (`/admin/proveedores`)
#[async_trait]
pub trait SupplierApi: Send + Sync {
    /// List suppliers, optionally filtered server-side by free text.
    async fn list_suppliers(&self, search: Option<&str>) -> Result<Vec<Supplier>>;

    async fn create_supplier(&self, supplier: &NewSupplier) -> Result<()>;

    async fn update_supplier(&self, supplier: &SupplierUpdate) -> Result<()>;

    async fn delete_supplier(&self, id: i64) -> Result<()>;
}
