//! Category API trait

use async_trait::async_trait;

use crate::client::models::{Category, CategoryUpdate, NewCategory};
use crate::error::Result;

/// Category operations (`/admin/categorias`)
#[async_trait]
pub trait CategoryApi: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn create_category(&self, category: &NewCategory) -> Result<()>;

    async fn update_category(&self, category: &CategoryUpdate) -> Result<()>;

    async fn delete_category(&self, id: i64) -> Result<()>;
}
