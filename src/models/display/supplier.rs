//! Supplier display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{active_label, or_empty};
use crate::client::models::Supplier;

/// Supplier display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SupplierDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "CODE")]
    pub code: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "TAX ID")]
    pub tax_id: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "PHONE")]
    pub phone: String,

    #[tabled(rename = "ACTIVE")]
    pub active: String,
}

impl From<Supplier> for SupplierDisplay {
    fn from(s: Supplier) -> Self {
        Self {
            id: s.id,
            code: or_empty(s.code.as_deref()),
            name: or_empty(s.name.as_deref()),
            tax_id: or_empty(s.tax_id.as_deref()),
            email: or_empty(s.email.as_deref()),
            phone: or_empty(s.phone.as_deref()),
            active: active_label(s.active),
        }
    }
}
