//! Inventory movement models

use serde::{Deserialize, Serialize};

/// One ledger entry for an offer's stock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movement {
    #[serde(rename = "idMovimiento")]
    pub id: i64,

    #[serde(rename = "idProductoProveedorLote")]
    pub offer_id: i64,

    #[serde(rename = "tipoMovimiento", default)]
    pub movement_type: Option<String>,

    #[serde(rename = "cantidad", default)]
    pub quantity: i64,

    #[serde(rename = "motivo", default)]
    pub reason: Option<String>,

    #[serde(rename = "referencia", default)]
    pub reference: Option<String>,

    #[serde(rename = "idUsuario", default)]
    pub user_id: Option<i64>,

    #[serde(rename = "fechaMovimientoUtc", default)]
    pub occurred_at: Option<String>,
}
