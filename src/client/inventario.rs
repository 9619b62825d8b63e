//! Inventario API client implementation

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api::{AuthApi, CategoryApi, MovementApi, OfferApi, ProductApi, SupplierApi};
use super::models::{
    ApiResponse, Category, CategoryUpdate, LoginRequest, Movement, NewCategory, NewOffer,
    NewProduct, NewSupplier, Offer, OfferUpdate, Product, ProductUpdate, Supplier, SupplierUpdate,
};
use super::pipeline::{LOGIN_ENDPOINT, Pipeline};
use super::transport::{HttpTransport, OutgoingRequest, Transport};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::router::Navigator;
use crate::session::store::TokenStore;

const CATEGORIES_PATH: &str = "/admin/categorias";
const SUPPLIERS_PATH: &str = "/admin/proveedores";
const PRODUCTS_PATH: &str = "/admin/productos";
const OFFERS_PATH: &str = "/admin/productos-proveedor-lote";
const MOVEMENTS_PATH: &str = "/admin/inventario/movimientos";

/// Inventario API client. All calls share one pipeline.
pub struct InventarioClient<T = HttpTransport> {
    pipeline: Pipeline<T>,
}

impl InventarioClient<HttpTransport> {
    /// Client over HTTP with the session stages installed
    pub fn new<S, N>(config: &Config, store: Arc<S>, navigator: Arc<N>) -> Result<Self>
    where
        S: TokenStore + ?Sized + 'static,
        N: Navigator + ?Sized + 'static,
    {
        let transport = HttpTransport::new(config)?;
        log::debug!("API client for {}", transport.base_url());
        Ok(Self::with_pipeline(Pipeline::with_session(
            transport, store, navigator,
        )))
    }
}

impl<T: Transport> InventarioClient<T> {
    pub fn with_pipeline(pipeline: Pipeline<T>) -> Self {
        Self { pipeline }
    }

    #[cfg(test)]
    pub fn pipeline(&self) -> &Pipeline<T> {
        &self.pipeline
    }

    async fn get_json<R: DeserializeOwned>(&self, request: OutgoingRequest) -> Result<R> {
        let response = self.pipeline.execute(request).await?;
        Ok(response.json()?)
    }

    async fn send_json<B: Serialize + Sync + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<()> {
        let request = OutgoingRequest::new(method, path).with_json(body)?;
        self.pipeline.execute(request).await?;
        Ok(())
    }

    async fn delete(&self, path: String) -> Result<()> {
        self.pipeline
            .execute(OutgoingRequest::new(Method::DELETE, path))
            .await?;
        Ok(())
    }
}

/// Add `texto` only when there is something to search for.
fn with_search(request: OutgoingRequest, search: Option<&str>) -> OutgoingRequest {
    match search.map(str::trim).filter(|s| !s.is_empty()) {
        Some(text) => request.with_query("texto", text),
        None => request,
    }
}

#[async_trait]
impl<T: Transport> AuthApi for InventarioClient<T> {
    async fn login(&self, request: &LoginRequest) -> Result<ApiResponse<Option<String>>> {
        let request = OutgoingRequest::new(Method::POST, LOGIN_ENDPOINT).with_json(request)?;
        self.get_json(request).await
    }
}

#[async_trait]
impl<T: Transport> CategoryApi for InventarioClient<T> {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.get_json(OutgoingRequest::get(CATEGORIES_PATH)).await
    }

    async fn create_category(&self, category: &NewCategory) -> Result<()> {
        self.send_json(Method::POST, CATEGORIES_PATH, category).await
    }

    async fn update_category(&self, category: &CategoryUpdate) -> Result<()> {
        self.send_json(Method::PUT, CATEGORIES_PATH, category).await
    }

    async fn delete_category(&self, id: i64) -> Result<()> {
        self.delete(format!("{}/{}", CATEGORIES_PATH, id)).await
    }
}

#[async_trait]
impl<T: Transport> SupplierApi for InventarioClient<T> {
    async fn list_suppliers(&self, search: Option<&str>) -> Result<Vec<Supplier>> {
        self.get_json(with_search(OutgoingRequest::get(SUPPLIERS_PATH), search))
            .await
    }

    async fn create_supplier(&self, supplier: &NewSupplier) -> Result<()> {
        self.send_json(Method::POST, SUPPLIERS_PATH, supplier).await
    }

    async fn update_supplier(&self, supplier: &SupplierUpdate) -> Result<()> {
        self.send_json(Method::PUT, SUPPLIERS_PATH, supplier).await
    }

    async fn delete_supplier(&self, id: i64) -> Result<()> {
        self.delete(format!("{}/{}", SUPPLIERS_PATH, id)).await
    }
}

#[async_trait]
impl<T: Transport> ProductApi for InventarioClient<T> {
    async fn list_products(&self, search: Option<&str>) -> Result<Vec<Product>> {
        self.get_json(with_search(OutgoingRequest::get(PRODUCTS_PATH), search))
            .await
    }

    async fn get_product(&self, id: i64) -> Result<Product> {
        self.get_json(OutgoingRequest::get(format!("{}/{}", PRODUCTS_PATH, id)))
            .await
    }

    async fn create_product(&self, product: &NewProduct) -> Result<()> {
        self.send_json(Method::POST, PRODUCTS_PATH, product).await
    }

    async fn update_product(&self, product: &ProductUpdate) -> Result<()> {
        self.send_json(Method::PUT, PRODUCTS_PATH, product).await
    }

    async fn delete_product(&self, id: i64) -> Result<()> {
        self.delete(format!("{}/{}", PRODUCTS_PATH, id)).await
    }
}

#[async_trait]
impl<T: Transport> OfferApi for InventarioClient<T> {
    async fn list_offers(&self, product_id: i64) -> Result<Vec<Offer>> {
        self.get_json(OutgoingRequest::get(OFFERS_PATH).with_query("idProducto", product_id))
            .await
    }

    async fn get_offer(&self, id: i64) -> Result<Offer> {
        self.get_json(OutgoingRequest::get(format!("{}/{}", OFFERS_PATH, id)))
            .await
    }

    async fn create_offer(&self, offer: &NewOffer) -> Result<()> {
        self.send_json(Method::POST, OFFERS_PATH, offer).await
    }

    async fn update_offer(&self, offer: &OfferUpdate) -> Result<()> {
        self.send_json(Method::PUT, OFFERS_PATH, offer).await
    }
}

#[async_trait]
impl<T: Transport> MovementApi for InventarioClient<T> {
    async fn list_movements(&self, offer_id: i64) -> Result<Vec<Movement>> {
        let envelope: ApiResponse<serde_json::Value> = self
            .get_json(OutgoingRequest::get(format!("{}/{}", MOVEMENTS_PATH, offer_id)))
            .await?;

        if !envelope.is_success {
            return Err(ApiError::Rejected(envelope.message_or("Query failed.").to_string()).into());
        }

        match envelope.data {
            serde_json::Value::Array(_) => Ok(serde_json::from_value(envelope.data).map_err(
                |e| ApiError::InvalidResponse(format!("Failed to parse movements: {}", e)),
            )?),
            _ => Ok(Vec::new()),
        }
    }
}
