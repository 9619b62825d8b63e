//! JSON output: records under `data`, run details under `meta`

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Envelope printed by `--format json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// When the console produced the output (RFC 3339)
    pub timestamp: String,

    /// `inventario` version
    pub version: String,

    /// Number of records, for listings only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                count: None,
            },
        }
    }

    fn with_count(mut self, count: usize) -> Self {
        self.meta.count = Some(count);
        self
    }
}

/// Pretty-print a single record.
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

/// Pretty-print a listing, with its size in `meta.count`.
pub fn format_json_list<T: Serialize>(items: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(items).with_count(items.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Clone)]
    struct Item {
        id: i64,
        name: String,
    }

    #[test]
    fn test_json_output_carries_version() {
        let output = JsonOutput::new(vec![1, 2]);

        assert_eq!(output.data, vec![1, 2]);
        assert_eq!(output.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!output.meta.timestamp.is_empty());
    }

    #[test]
    fn test_format_json_list_wraps_data_and_counts() {
        let items = vec![Item {
            id: 3,
            name: "Tuercas".to_string(),
        }];

        let value: serde_json::Value =
            serde_json::from_str(&format_json_list(&items).unwrap()).unwrap();

        assert_eq!(value["data"][0]["id"], 3);
        assert_eq!(value["data"][0]["name"], "Tuercas");
        assert_eq!(value["meta"]["count"], 1);
        assert!(value["meta"]["timestamp"].is_string());
    }

    #[test]
    fn test_format_json_record_has_no_count() {
        let item = Item {
            id: 7,
            name: "Arandelas".to_string(),
        };

        let value: serde_json::Value = serde_json::from_str(&format_json(&item).unwrap()).unwrap();

        assert_eq!(value["data"]["id"], 7);
        assert!(value["meta"].get("count").is_none());
    }

    #[test]
    fn test_format_json_list_empty() {
        let items: Vec<Item> = vec![];
        let result = format_json_list(&items).unwrap();

        assert!(result.contains("\"data\": []"));
        assert!(result.contains("\"count\": 0"));
    }
}
