//! Tabular view over CFBD JSON responses.
//!
//! Every CFBD endpoint returns a JSON array of objects. [`DataTable`]
//! reshapes such an array into columns and rows for spreadsheet-style
//! consumption: nested objects are flattened to dot-separated column names
//! and the column set is the union over all rows. Arrays and scalars are
//! kept as their JSON values.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use crate::error::{CfbdError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<BTreeMap<String, Value>>,
}

impl DataTable {
    /// Build a table from a JSON array of objects.
    pub fn from_json(value: &Value) -> Result<Self> {
        let items = value
            .as_array()
            .ok_or_else(|| CfbdError::UnexpectedResponse {
                message: "expected a JSON array of objects".to_string(),
            })?;

        let mut rows = Vec::with_capacity(items.len());
        for item in items {
            let obj = item.as_object().ok_or_else(|| CfbdError::UnexpectedResponse {
                message: format!("expected a JSON object per row, got `{item}`"),
            })?;
            let mut row = BTreeMap::new();
            for (key, val) in obj {
                flatten_into(&mut row, key, val);
            }
            rows.push(row);
        }

        let mut columns = BTreeSet::new();
        for row in &rows {
            columns.extend(row.keys().cloned());
        }

        Ok(Self {
            columns: columns.into_iter().collect(),
            rows,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[BTreeMap<String, Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell lookup; `None` when the row is out of range or the row has no
    /// value for that column.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        self.rows.get(row)?.get(column)
    }

    /// Tab-separated rendering with a header line. Missing cells render
    /// empty, strings render unquoted, everything else as compact JSON.
    /// Tabs and line breaks inside column names or string cells become
    /// spaces so they cannot break the row/column structure.
    pub fn to_tsv(&self) -> String {
        let mut out = self
            .columns
            .iter()
            .map(|c| sanitize_cell(c))
            .collect::<Vec<_>>()
            .join("\t");
        out.push('\n');
        for row in &self.rows {
            let line: Vec<String> = self
                .columns
                .iter()
                .map(|col| match row.get(col) {
                    None | Some(Value::Null) => String::new(),
                    Some(Value::String(s)) => sanitize_cell(s),
                    Some(other) => other.to_string(),
                })
                .collect();
            out.push_str(&line.join("\t"));
            out.push('\n');
        }
        out
    }
}

fn sanitize_cell(text: &str) -> String {
    text.replace(['\t', '\n', '\r'], " ")
}

fn flatten_into(row: &mut BTreeMap<String, Value>, key: &str, value: &Value) {
    match value {
        Value::Object(map) => {
            for (sub_key, sub_val) in map {
                flatten_into(row, &format!("{key}.{sub_key}"), sub_val);
            }
        }
        other => {
            row.insert(key.to_string(), other.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_nested_objects_with_dot_columns() {
        let data = json!([
            {"name": "Ohio Stadium", "location": {"city": "Columbus", "state": "OH"}}
        ]);
        let table = DataTable::from_json(&data).unwrap();
        assert_eq!(
            table.columns(),
            ["location.city", "location.state", "name"]
        );
        assert_eq!(table.get(0, "location.city"), Some(&json!("Columbus")));
    }

    #[test]
    fn columns_are_the_union_across_rows() {
        let data = json!([
            {"team": "Cincinnati", "wins": 11},
            {"team": "Akron", "losses": 10}
        ]);
        let table = DataTable::from_json(&data).unwrap();
        assert_eq!(table.columns(), ["losses", "team", "wins"]);
        assert_eq!(table.get(0, "losses"), None);
        assert_eq!(table.get(1, "losses"), Some(&json!(10)));
    }

    #[test]
    fn arrays_stay_as_json_values() {
        let data = json!([
            {"coach": "Fickell", "seasons": [2021, 2022]}
        ]);
        let table = DataTable::from_json(&data).unwrap();
        assert_eq!(table.get(0, "seasons"), Some(&json!([2021, 2022])));
    }

    #[test]
    fn empty_array_is_an_empty_table() {
        let table = DataTable::from_json(&json!([])).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.columns().is_empty());
    }

    #[test]
    fn non_array_response_is_rejected() {
        let err = DataTable::from_json(&json!({"message": "nope"})).unwrap_err();
        assert!(matches!(err, CfbdError::UnexpectedResponse { .. }));
    }

    #[test]
    fn non_object_row_is_rejected() {
        let err = DataTable::from_json(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, CfbdError::UnexpectedResponse { .. }));
    }

    #[test]
    fn tsv_rendering() {
        let data = json!([
            {"team": "Cincinnati", "wins": 11},
            {"team": "Akron", "wins": null}
        ]);
        let table = DataTable::from_json(&data).unwrap();
        assert_eq!(table.to_tsv(), "team\twins\nCincinnati\t11\nAkron\t\n");
    }

    #[test]
    fn tsv_neutralizes_tabs_and_newlines_in_strings() {
        let data = json!([
            {"team": "Bad\tActor\nState", "wins": 3}
        ]);
        let table = DataTable::from_json(&data).unwrap();
        assert_eq!(table.to_tsv(), "team\twins\nBad Actor State\t3\n");
    }
}
