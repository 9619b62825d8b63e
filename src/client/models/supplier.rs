//! Supplier models

use serde::{Deserialize, Serialize};

/// Supplier record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(rename = "idProveedor")]
    pub id: i64,

    #[serde(rename = "codigo", default)]
    pub code: Option<String>,

    #[serde(rename = "nombre", default)]
    pub name: Option<String>,

    /// Tax or national identification number
    #[serde(rename = "identificacion", default)]
    pub tax_id: Option<String>,

    #[serde(rename = "correo", default)]
    pub email: Option<String>,

    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,

    #[serde(rename = "activo", default)]
    pub active: bool,
}

/// Body for creating a supplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSupplier {
    #[serde(rename = "codigo")]
    pub code: Option<String>,

    #[serde(rename = "nombre")]
    pub name: Option<String>,

    #[serde(rename = "identificacion")]
    pub tax_id: Option<String>,

    #[serde(rename = "correo")]
    pub email: Option<String>,

    #[serde(rename = "telefono")]
    pub phone: Option<String>,

    #[serde(rename = "activo")]
    pub active: bool,
}

/// Body for updating a supplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierUpdate {
    #[serde(rename = "idProveedor")]
    pub id: i64,

    #[serde(flatten)]
    pub fields: NewSupplier,
}

impl From<&Supplier> for NewSupplier {
    fn from(s: &Supplier) -> Self {
        Self {
            code: s.code.clone(),
            name: s.name.clone(),
            tax_id: s.tax_id.clone(),
            email: s.email.clone(),
            phone: s.phone.clone(),
            active: s.active,
        }
    }
}
