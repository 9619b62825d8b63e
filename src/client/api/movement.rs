//! Movement API trait

use async_trait::async_trait;

use crate::client::models::Movement;
use crate::error::Result;

/// Inventory movement lookups (`/admin/inventario/movimientos`)
#[async_trait]
pub trait MovementApi: Send + Sync {
    /// Ledger entries for one offer.
    async fn list_movements(&self, offer_id: i64) -> Result<Vec<Movement>>;
}
