//! Category models

use serde::{Deserialize, Serialize};

/// Product category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "idCategoria")]
    pub id: i64,

    #[serde(rename = "nombre", default)]
    pub name: Option<String>,

    #[serde(rename = "activo", default)]
    pub active: bool,
}

/// Body for creating a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    #[serde(rename = "nombre")]
    pub name: Option<String>,

    #[serde(rename = "activo")]
    pub active: bool,
}

/// Body for updating a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryUpdate {
    #[serde(rename = "idCategoria")]
    pub id: i64,

    #[serde(flatten)]
    pub fields: NewCategory,
}

impl From<&Category> for NewCategory {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            active: category.active,
        }
    }
}
