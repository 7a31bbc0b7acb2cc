//! Per-variable readings keyed by timestamp.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::error::ExportError;
use crate::timestamp::{Timestamp, parse_timestamp};

/// One `{ "time": ..., "value": ... }` entry as it appears in the export.
#[derive(Debug, Deserialize)]
pub struct RawReading {
    pub time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: f64,
}

/// Decode JSON `null` as the type's default, so `"value": null` reads as 0.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Readings of one variable, decoded from the `data` array.
///
/// The array is decoded as-is first and then folded into the map, so a later
/// entry with the same instant replaces the earlier value. A single bad time
/// string fails the whole array.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "Vec<RawReading>")]
pub struct Readings(BTreeMap<Timestamp, f64>);

impl TryFrom<Vec<RawReading>> for Readings {
    type Error = ExportError;

    fn try_from(raw: Vec<RawReading>) -> Result<Self, Self::Error> {
        let mut map = BTreeMap::new();
        for reading in raw {
            let t = parse_timestamp(&reading.time)?;
            map.insert(t, reading.value);
        }
        Ok(Readings(map))
    }
}

impl Readings {
    pub fn get(&self, t: &Timestamp) -> Option<f64> {
        self.0.get(t).copied()
    }

    /// Timestamps in ascending order.
    pub fn times(&self) -> impl Iterator<Item = &Timestamp> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
