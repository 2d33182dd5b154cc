//! Result row mapping.

use crate::error::{QueryError, QueryResult};
use crate::value::Value;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tokio_postgres::types::Type;

/// One fetched row: an ordered column-name → value map.
///
/// Column order equals the underlying result set's column order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row from ordered column/value pairs.
    pub fn from_pairs<C, V>(pairs: impl IntoIterator<Item = (C, V)>) -> Self
    where
        C: Into<String>,
        V: Into<Value>,
    {
        Self {
            columns: pairs
                .into_iter()
                .map(|(c, v)| (c.into(), v.into()))
                .collect(),
        }
    }

    /// Get a value by column name.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Get a column name/value pair by position.
    pub fn get_index(&self, index: usize) -> Option<(&str, &Value)> {
        self.columns
            .get(index)
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Iterate over column name/value pairs in result-set order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Decode a driver row into an ordered column map.
    pub(crate) fn from_pg(row: &tokio_postgres::Row) -> QueryResult<Self> {
        let mut columns = Vec::with_capacity(row.columns().len());
        for (idx, col) in row.columns().iter().enumerate() {
            let value = decode_column(row, idx, col.name(), col.type_())?;
            columns.push((col.name().to_string(), value));
        }
        Ok(Self { columns })
    }
}

fn decode_column(
    row: &tokio_postgres::Row,
    idx: usize,
    name: &str,
    ty: &Type,
) -> QueryResult<Value> {
    // Fetch column `idx` as `Option<$t>` and map it into a `Value`.
    macro_rules! take {
        ($t:ty, $map:expr) => {
            row.try_get::<_, Option<$t>>(idx)
                .map_err(|e| QueryError::decode(name, e.to_string()))?
                .map($map)
                .unwrap_or(Value::Null)
        };
    }

    let value = if *ty == Type::BOOL {
        take!(bool, Value::Bool)
    } else if *ty == Type::INT2 {
        take!(i16, |v| Value::Int(v as i64))
    } else if *ty == Type::INT4 {
        take!(i32, |v| Value::Int(v as i64))
    } else if *ty == Type::INT8 {
        take!(i64, Value::Int)
    } else if *ty == Type::FLOAT4 {
        take!(f32, |v| Value::Float(v as f64))
    } else if *ty == Type::FLOAT8 {
        take!(f64, Value::Float)
    } else if *ty == Type::TEXT || *ty == Type::VARCHAR || *ty == Type::BPCHAR || *ty == Type::NAME
    {
        take!(String, Value::Text)
    } else if *ty == Type::UUID {
        take!(uuid::Uuid, |v| Value::Text(v.to_string()))
    } else if *ty == Type::JSON || *ty == Type::JSONB {
        take!(serde_json::Value, |v| Value::Text(v.to_string()))
    } else if *ty == Type::TIMESTAMP {
        take!(NaiveDateTime, |v| Value::Text(v.to_string()))
    } else if *ty == Type::TIMESTAMPTZ {
        take!(DateTime<Utc>, |v| Value::Text(v.to_rfc3339()))
    } else if *ty == Type::DATE {
        take!(NaiveDate, |v| Value::Text(v.to_string()))
    } else if *ty == Type::TIME {
        take!(NaiveTime, |v| Value::Text(v.to_string()))
    } else {
        return Err(QueryError::decode(
            name,
            format!("unsupported column type {}", ty),
        ));
    };

    Ok(value)
}

// Rows encode as JSON objects whose key order is the column order; decoding
// visits keys in document order, so encode/decode reproduces the row exactly.

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in &self.columns {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct RowVisitor;

impl<'de> Visitor<'de> for RowVisitor {
    type Value = Row;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of column names to scalar values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Row, A::Error> {
        let mut columns = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, value)) = access.next_entry::<String, Value>()? {
            columns.push((name, value));
        }
        Ok(Row { columns })
    }
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RowVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name_and_index() {
        let row = Row::from_pairs([("id", Value::Int(1)), ("name", Value::from("Ada"))]);
        assert_eq!(row.get("name"), Some(&Value::Text("Ada".to_string())));
        assert_eq!(row.get("missing"), None);
        assert_eq!(row.get_index(0), Some(("id", &Value::Int(1))));
        assert_eq!(row.get_index(2), None);
    }

    #[test]
    fn test_json_preserves_column_order() {
        let row = Row::from_pairs([
            ("z", Value::Int(1)),
            ("a", Value::from("x")),
            ("m", Value::Null),
        ]);
        let encoded = serde_json::to_string(&row).unwrap();
        assert_eq!(encoded, r#"{"z":1,"a":"x","m":null}"#);

        let decoded: Row = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, row);
    }
}
