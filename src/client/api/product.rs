//! Product API trait

use async_trait::async_trait;

use crate::client::models::{NewProduct, Product, ProductUpdate};
use crate::error::Result;

/// Product operations (`/admin/productos`)
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// List products, optionally filtered server-side by free text.
    async fn list_products(&self, search: Option<&str>) -> Result<Vec<Product>>;

    async fn get_product(&self, id: i64) -> Result<Product>;

    async fn create_product(&self, product: &NewProduct) -> Result<()>;

    async fn update_product(&self, product: &ProductUpdate) -> Result<()>;

    /// Logical delete; the server keeps the record inactive.
    async fn delete_product(&self, id: i64) -> Result<()>;
}
