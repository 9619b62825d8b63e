//! Offer display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{active_label, format_date, or_empty};
use crate::client::models::Offer;

/// Offer display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OfferDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "PRODUCT")]
    pub product: String,

    #[tabled(rename = "SUPPLIER")]
    pub supplier: String,

    #[tabled(rename = "LOT")]
    pub lot: String,

    #[tabled(rename = "PRICE")]
    pub price: String,

    #[tabled(rename = "AVAILABLE")]
    pub stock_available: i64,

    #[tabled(rename = "RESERVED")]
    pub stock_reserved: i64,

    #[tabled(rename = "EXPIRES")]
    pub expires: String,

    #[tabled(rename = "ACTIVE")]
    pub active: String,
}

/// Prefer the joined name, fall back to the bare ID.
fn label(name: Option<&str>, id: i64) -> String {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("{} ({})", name, id),
        None => id.to_string(),
    }
}

impl From<Offer> for OfferDisplay {
    fn from(o: Offer) -> Self {
        let currency = o.currency.as_deref().unwrap_or("");
        Self {
            id: o.id,
            product: label(o.product_name.as_deref(), o.product_id),
            supplier: label(o.supplier_name.as_deref(), o.supplier_id),
            lot: or_empty(o.lot_number.as_deref()),
            price: format!("{:.2} {}", o.unit_price, currency).trim_end().to_string(),
            stock_available: o.stock_available,
            stock_reserved: o.stock_reserved,
            expires: format_date(o.expiry_date.as_deref()),
            active: active_label(o.active),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer() -> Offer {
        serde_json::from_value(serde_json::json!({
            "idProductoProveedorLote": 21,
            "idProducto": 12,
            "idProveedor": 9,
            "numeroLote": "L-2025-01",
            "precioUnitario": 4.5,
            "stockDisponible": 100,
            "stockReservado": 5,
            "moneda": "USD",
            "fechaVencimiento": "2026-06-30T00:00:00",
            "activo": true,
            "nombreProducto": "Martillo",
            "nombreProveedor": null
        }))
        .unwrap()
    }

    #[test]
    fn test_offer_display_labels_and_price() {
        let display = OfferDisplay::from(offer());

        assert_eq!(display.product, "Martillo (12)");
        assert_eq!(display.supplier, "9");
        assert_eq!(display.price, "4.50 USD");
        assert_eq!(display.expires, "2026-06-30");
    }
}
