//! Table output for listings and single records

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Shown instead of an empty table, e.g. a search with no matches
pub const NO_RESULTS: &str = "No results found.";

/// Rounded table with centred headers, or [`NO_RESULTS`] when there are no rows.
pub fn format_table<T: Tabled>(rows: &[T]) -> String {
    if rows.is_empty() {
        return NO_RESULTS.to_string();
    }

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct Row {
        #[tabled(rename = "ID")]
        id: i64,
        #[tabled(rename = "NAME")]
        name: String,
    }

    #[test]
    fn test_format_table_empty() {
        let items: Vec<Row> = vec![];
        assert_eq!(format_table(&items), NO_RESULTS);
    }

    #[test]
    fn test_format_table_rows_and_headers() {
        let items = vec![
            Row {
                id: 1,
                name: "Herramientas".to_string(),
            },
            Row {
                id: 2,
                name: "Pinturas".to_string(),
            },
        ];

        let result = format_table(&items);

        assert!(result.contains("ID"));
        assert!(result.contains("NAME"));
        assert!(result.contains("Herramientas"));
        assert!(result.contains("Pinturas"));
        // rounded corners
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }
}
