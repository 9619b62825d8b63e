//! Category display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{active_label, or_empty};
use crate::client::models::Category;

/// Category display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CategoryDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ACTIVE")]
    pub active: String,
}

impl From<Category> for CategoryDisplay {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: or_empty(category.name.as_deref()),
            active: active_label(category.active),
        }
    }
}
