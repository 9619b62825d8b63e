//! Product display model

use std::collections::HashMap;

use serde::Serialize;
use tabled::Tabled;

use super::common::{EMPTY, active_label, or_empty, truncate_string};
use crate::client::models::{Category, Product};

/// Maximum description width in tables
const DESCRIPTION_WIDTH: usize = 40;

/// Product display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ProductDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "CODE")]
    pub code: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "BRAND")]
    pub brand: String,

    #[tabled(rename = "CATEGORY")]
    pub category: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "ACTIVE")]
    pub active: String,
}

/// Names of the active categories, keyed by ID.
#[derive(Debug, Clone, Default)]
pub struct CategoryNames(HashMap<i64, String>);

impl CategoryNames {
    /// Index active categories. Unnamed ones are labelled `#id`.
    pub fn from_active(categories: &[Category]) -> Self {
        let names = categories
            .iter()
            .filter(|c| c.active)
            .map(|c| {
                let name = c.name.clone().unwrap_or_else(|| format!("#{}", c.id));
                (c.id, name)
            })
            .collect();
        Self(names)
    }

    /// Category column text: the name, `#id` when unknown, `-` when unset.
    pub fn label(&self, id: Option<i64>) -> String {
        match id.filter(|id| *id != 0) {
            Some(id) => self.0.get(&id).cloned().unwrap_or_else(|| format!("#{}", id)),
            None => EMPTY.to_string(),
        }
    }
}

impl ProductDisplay {
    pub fn with_categories(p: Product, categories: &CategoryNames) -> Self {
        Self {
            id: p.id,
            code: or_empty(p.code.as_deref()),
            name: or_empty(p.name.as_deref()),
            brand: or_empty(p.brand.as_deref()),
            category: categories.label(p.category_id),
            description: truncate_string(&or_empty(p.description.as_deref()), DESCRIPTION_WIDTH),
            active: active_label(p.active),
        }
    }
}

impl From<Product> for ProductDisplay {
    fn from(p: Product) -> Self {
        Self::with_categories(p, &CategoryNames::default())
    }
}
