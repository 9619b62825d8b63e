//! Product models

use serde::{Deserialize, Serialize};

/// Product record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "idProducto")]
    pub id: i64,

    #[serde(rename = "codigo", default)]
    pub code: Option<String>,

    #[serde(rename = "nombre", default)]
    pub name: Option<String>,

    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,

    #[serde(rename = "marca", default)]
    pub brand: Option<String>,

    #[serde(rename = "idCategoria", default)]
    pub category_id: Option<i64>,

    #[serde(rename = "urlImagen", default)]
    pub image_url: Option<String>,

    #[serde(rename = "activo", default)]
    pub active: bool,
}

/// Body for creating a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    #[serde(rename = "codigo")]
    pub code: Option<String>,

    #[serde(rename = "nombre")]
    pub name: Option<String>,

    #[serde(rename = "descripcion")]
    pub description: Option<String>,

    #[serde(rename = "marca")]
    pub brand: Option<String>,

    #[serde(rename = "idCategoria")]
    pub category_id: Option<i64>,

    #[serde(rename = "urlImagen")]
    pub image_url: Option<String>,

    #[serde(rename = "activo")]
    pub active: bool,
}

/// Body for updating a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(rename = "idProducto")]
    pub id: i64,

    #[serde(flatten)]
    pub fields: NewProduct,
}

impl From<&Product> for NewProduct {
    fn from(p: &Product) -> Self {
        Self {
            code: p.code.clone(),
            name: p.name.clone(),
            description: p.description.clone(),
            brand: p.brand.clone(),
            category_id: p.category_id,
            image_url: p.image_url.clone(),
            active: p.active,
        }
    }
}
