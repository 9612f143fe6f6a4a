use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result table of a synchronous TAP query requested with `FORMAT=json`.
///
/// Both the Gaia archive and SIMBAD answer with the same layout: a list of
/// column descriptions followed by the rows as positional arrays.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TapTable {
    pub metadata: Vec<TapColumn>,
    pub data: Vec<Vec<Value>>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TapColumn {
    pub name: String,
    #[serde(default)]
    pub datatype: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl TapTable {
    pub fn parse(body: &str) -> Result<TapTable> {
        serde_json::from_str(body).context("Failed to parse TAP JSON response")
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Position of the column called `name`, ignoring ASCII case.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.metadata
            .iter()
            .position(|column| column.name.eq_ignore_ascii_case(name))
    }

    /// Numeric value of column `name` in the first row.
    ///
    /// Returns `None` when the table has no rows or the cell is null; fails when the
    /// column is missing or holds something other than a number.
    pub fn first_f64(&self, name: &str) -> Result<Option<f64>> {
        let Some(index) = self.column_index(name) else {
            bail!("Column '{}' missing from TAP response", name);
        };
        let Some(row) = self.data.first() else {
            return Ok(None);
        };
        match row.get(index) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => Ok(n.as_f64()),
            // Some services serialize special floats (NaN) as strings.
            Some(Value::String(s)) => match s.trim().parse::<f64>() {
                Ok(v) if v.is_nan() => Ok(None),
                Ok(v) => Ok(Some(v)),
                Err(_) => bail!("Column '{}' is not numeric: {:?}", name, s),
            },
            Some(other) => bail!("Column '{}' is not numeric: {}", name, other),
        }
    }
}

/// Quote `s` as an ADQL string literal.
pub fn adql_string_literal(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
