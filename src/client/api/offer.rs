//! Offer API trait

use async_trait::async_trait;

use crate::client::models::{NewOffer, Offer, OfferUpdate};
use crate::error::Result;

/// Offer operations (`/admin/productos-proveedor-lote`)
#[async_trait]
pub trait OfferApi: Send + Sync {
    /// Offers for one product.
    async fn list_offers(&self, product_id: i64) -> Result<Vec<Offer>>;

    async fn get_offer(&self, id: i64) -> Result<Offer>;

    async fn create_offer(&self, offer: &NewOffer) -> Result<()>;

    async fn update_offer(&self, offer: &OfferUpdate) -> Result<()>;
}
