//! Movement display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{EMPTY, format_timestamp, or_empty};
use crate::client::models::Movement;

/// Movement display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MovementDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "OFFER")]
    pub offer_id: i64,

    #[tabled(rename = "TYPE")]
    pub movement_type: String,

    #[tabled(rename = "QTY")]
    pub quantity: i64,

    #[tabled(rename = "REASON")]
    pub reason: String,

    #[tabled(rename = "REFERENCE")]
    pub reference: String,

    #[tabled(rename = "USER")]
    pub user_id: String,

    #[tabled(rename = "DATE (UTC)")]
    pub occurred_at: String,
}

impl From<Movement> for MovementDisplay {
    fn from(m: Movement) -> Self {
        Self {
            id: m.id,
            offer_id: m.offer_id,
            movement_type: or_empty(m.movement_type.as_deref()),
            quantity: m.quantity,
            reason: or_empty(m.reason.as_deref()),
            reference: or_empty(m.reference.as_deref()),
            user_id: m
                .user_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| EMPTY.to_string()),
            occurred_at: format_timestamp(m.occurred_at.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_display() {
        let movement = Movement {
            id: 1,
            offer_id: 21,
            movement_type: Some("ENTRADA".to_string()),
            quantity: 10,
            reason: Some("Compra".to_string()),
            reference: None,
            user_id: Some(2),
            occurred_at: Some("2025-02-01T08:15:00Z".to_string()),
        };

        let display = MovementDisplay::from(movement);

        assert_eq!(display.movement_type, "ENTRADA");
        assert_eq!(display.reference, "-");
        assert_eq!(display.user_id, "2");
        assert_eq!(display.occurred_at, "2025-02-01 08:15");
    }
}
