//! Export document model and the timestamp pivot.
//!
//! The export holds one [`Variable`] per measured quantity, each with its own
//! sparse set of readings. [`Export::times`] builds the row index from the
//! union of all readings, and [`Export::row`] spreads one instant across the
//! variables in document order.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::csv_out::{DELIMITER, format_decimal};
use crate::readings::{Readings, null_as_default};
use crate::timestamp::{Timestamp, format_row_time};

/// Label of the leading time column.
pub const TIME_COLUMN: &str = "time";

fn separator() -> String {
    char::from(DELIMITER).to_string()
}

/// One measured variable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Variable {
    #[serde(rename = "variable", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub unit: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "data", deserialize_with = "null_as_default")]
    pub readings: Readings,
}

impl Variable {
    /// Column label, `id[unit]`.
    pub fn label(&self) -> String {
        format!("{}[{}]", self.id, self.unit)
    }
}

/// Top-level export document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Export {
    /// Status code of the export API. Read but not acted on.
    #[serde(deserialize_with = "null_as_default")]
    pub errno: i64,
    #[serde(rename = "result", deserialize_with = "null_as_default")]
    pub variables: Vec<Variable>,
}

impl Export {
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    pub fn header_record(&self) -> Vec<String> {
        std::iter::once(TIME_COLUMN.to_string())
            .chain(self.variables.iter().map(Variable::label))
            .collect()
    }

    /// Header line, `time;id1[unit1];id2[unit2];...`.
    pub fn headers(&self) -> String {
        self.header_record().join(&separator())
    }

    /// Union of all reading timestamps, ascending and deduplicated.
    pub fn times(&self) -> Vec<Timestamp> {
        let set: BTreeSet<Timestamp> = self
            .variables
            .iter()
            .flat_map(|v| v.readings.times().copied())
            .collect();
        set.into_iter().collect()
    }

    /// Row cells for `t`; variables without a reading at `t` get an empty cell.
    pub fn row_record(&self, t: &Timestamp) -> Vec<String> {
        std::iter::once(format_row_time(t))
            .chain(self.variables.iter().map(|v| {
                v.readings
                    .get(t)
                    .map(format_decimal)
                    .unwrap_or_default()
            }))
            .collect()
    }

    pub fn row(&self, t: &Timestamp) -> String {
        self.row_record(t).join(&separator())
    }

    pub fn reading_count(&self) -> usize {
        self.variables.iter().map(|v| v.readings.len()).sum()
    }
}
