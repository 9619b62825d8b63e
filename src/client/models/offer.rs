//! Offer models
//!
//! An offer is a product supplied by one supplier under one lot, with its
//! own price and stock.

use serde::{Deserialize, Serialize};

/// Product/supplier/lot record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    #[serde(rename = "idProductoProveedorLote")]
    pub id: i64,

    #[serde(rename = "idProducto")]
    pub product_id: i64,

    #[serde(rename = "idProveedor")]
    pub supplier_id: i64,

    #[serde(rename = "numeroLote", default)]
    pub lot_number: Option<String>,

    #[serde(rename = "precioUnitario", default)]
    pub unit_price: f64,

    #[serde(rename = "stockDisponible", default)]
    pub stock_available: i64,

    #[serde(rename = "stockReservado", default)]
    pub stock_reserved: i64,

    #[serde(rename = "moneda", default)]
    pub currency: Option<String>,

    #[serde(rename = "fechaVencimiento", default)]
    pub expiry_date: Option<String>,

    #[serde(rename = "activo", default)]
    pub active: bool,

    #[serde(rename = "usuarioCreacion", default)]
    pub created_by: Option<String>,

    #[serde(rename = "fechaCreacionUtc", default)]
    pub created_at: Option<String>,

    #[serde(rename = "usuarioModificacion", default)]
    pub modified_by: Option<String>,

    #[serde(rename = "fechaModificacionUtc", default)]
    pub modified_at: Option<String>,

    #[serde(rename = "codigoProducto", default)]
    pub product_code: Option<String>,

    #[serde(rename = "nombreProducto", default)]
    pub product_name: Option<String>,

    #[serde(rename = "codigoProveedor", default)]
    pub supplier_code: Option<String>,

    #[serde(rename = "nombreProveedor", default)]
    pub supplier_name: Option<String>,
}

/// Body for creating an offer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOffer {
    #[serde(rename = "idProducto")]
    pub product_id: i64,

    #[serde(rename = "idProveedor")]
    pub supplier_id: i64,

    #[serde(rename = "numeroLote")]
    pub lot_number: Option<String>,

    #[serde(rename = "precioUnitario")]
    pub unit_price: f64,

    #[serde(rename = "stockDisponible")]
    pub stock_available: i64,

    #[serde(rename = "stockReservado")]
    pub stock_reserved: i64,

    #[serde(rename = "moneda")]
    pub currency: Option<String>,

    /// `YYYY-MM-DD`
    #[serde(rename = "fechaVencimiento")]
    pub expiry_date: Option<String>,

    #[serde(rename = "activo")]
    pub active: bool,
}

/// Body for updating an offer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferUpdate {
    #[serde(rename = "idProductoProveedorLote")]
    pub id: i64,

    #[serde(flatten)]
    pub fields: NewOffer,
}

impl From<&Offer> for NewOffer {
    fn from(o: &Offer) -> Self {
        Self {
            product_id: o.product_id,
            supplier_id: o.supplier_id,
            lot_number: o.lot_number.clone(),
            unit_price: o.unit_price,
            stock_available: o.stock_available,
            stock_reserved: o.stock_reserved,
            currency: o.currency.clone(),
            // the edit form works with the date part only
            expiry_date: o
                .expiry_date
                .as_deref()
                .map(|d| d.chars().take(10).collect()),
            active: o.active,
        }
    }
}
