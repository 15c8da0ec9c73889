// src/table.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<ColumnInfo>,
}

/// Header and body cells of a generic table, both as display strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableSchema {
    pub fn column_summary(&self) -> String {
        self.columns
            .iter()
            .map(|column| format!("{} ({})", column.name, column.column_type))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Parse the `/db_schema` payload, keeping the server's table order.
pub fn parse_schema(data: Map<String, Value>) -> Result<Vec<TableSchema>, String> {
    data.into_iter()
        .map(|(name, columns)| {
            serde_json::from_value::<Vec<ColumnInfo>>(columns)
                .map(|columns| TableSchema {
                    name: name.clone(),
                    columns,
                })
                .map_err(|e| format!("Invalid columns for table {}: {}", name, e))
        })
        .collect()
}

pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl TableView {
    /// Headers come from the keys of the first row; every row is laid out in
    /// that order.
    pub fn from_rows(rows: &[Map<String, Value>]) -> Self {
        let Some(first) = rows.first() else {
            return Self::default();
        };
        let headers: Vec<String> = first.keys().cloned().collect();
        let rows = rows
            .iter()
            .map(|row| {
                headers
                    .iter()
                    .map(|key| row.get(key).map(cell_text).unwrap_or_default())
                    .collect()
            })
            .collect();
        Self { headers, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(value: Value) -> Vec<Map<String, Value>> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_headers_follow_first_row_order() {
        let view = TableView::from_rows(&rows(json!([
            {"simplified": "猫", "pinyin": "māo", "known": 1},
            {"pinyin": "gǒu", "simplified": "狗", "known": 0}
        ])));
        assert_eq!(view.headers, vec!["simplified", "pinyin", "known"]);
        assert_eq!(view.rows[0], vec!["猫", "māo", "1"]);
        assert_eq!(view.rows[1], vec!["狗", "gǒu", "0"]);
    }

    #[test]
    fn test_missing_and_null_cells() {
        let view = TableView::from_rows(&rows(json!([
            {"a": "x", "b": null},
            {"a": "y"}
        ])));
        assert_eq!(view.rows[0], vec!["x", ""]);
        assert_eq!(view.rows[1], vec!["y", ""]);
    }

    #[test]
    fn test_empty_rows() {
        let view = TableView::from_rows(&[]);
        assert!(view.headers.is_empty());
        assert!(view.rows.is_empty());
    }

    #[test]
    fn test_parse_schema() {
        let data: Map<String, Value> = serde_json::from_value(json!({
            "words": [{"name": "id", "type": "INTEGER"}, {"name": "simplified", "type": "TEXT"}],
            "user_words": [{"name": "known_probability", "type": "REAL"}]
        }))
        .unwrap();
        let schema = parse_schema(data).unwrap();
        assert_eq!(schema.len(), 2);
        assert_eq!(schema[0].name, "words");
        assert_eq!(schema[0].column_summary(), "id (INTEGER), simplified (TEXT)");
        assert_eq!(schema[1].column_summary(), "known_probability (REAL)");
    }

    #[test]
    fn test_parse_schema_rejects_bad_columns() {
        let data: Map<String, Value> =
            serde_json::from_value(json!({"words": "not a list"})).unwrap();
        assert!(parse_schema(data).is_err());
    }
}
