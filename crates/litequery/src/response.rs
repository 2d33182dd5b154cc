//! Read-only result set wrapper.

use crate::error::QueryResult;
use crate::row::Row;

/// An indexed, read-only view over the rows fetched by a SELECT.
///
/// Out-of-range access returns `None` rather than panicking; an empty
/// response is a valid result, not an error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectResponse {
    rows: Vec<Row>,
}

impl SelectResponse {
    /// Wrap fetched rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// The first row, if any.
    pub fn first(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// The last row, if any.
    pub fn last(&self) -> Option<&Row> {
        self.rows.last()
    }

    /// The row at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Check whether a row exists at `index`.
    pub fn has(&self, index: usize) -> bool {
        index < self.rows.len()
    }

    /// Number of rows.
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the response holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows, in result-set order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Consume the response, yielding the row sequence.
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Encode the row sequence as JSON.
    ///
    /// Column order inside each row is preserved, so decoding the output as
    /// `Vec<Row>` reproduces the rows exactly.
    pub fn to_json(&self) -> QueryResult<String> {
        Ok(serde_json::to_string(&self.rows)?)
    }
}

impl<'a> IntoIterator for &'a SelectResponse {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn sample() -> SelectResponse {
        SelectResponse::new(vec![
            Row::from_pairs([("id", Value::Int(1)), ("name", Value::from("Ada"))]),
            Row::from_pairs([("id", Value::Int(2)), ("name", Value::from("Bob"))]),
            Row::from_pairs([("id", Value::Int(3)), ("name", Value::Null)]),
        ])
    }

    #[test]
    fn test_boundary_rows() {
        let response = sample();
        assert_eq!(response.first().unwrap().get("id"), Some(&Value::Int(1)));
        assert_eq!(response.last().unwrap().get("id"), Some(&Value::Int(3)));

        let empty = SelectResponse::default();
        assert_eq!(empty.first(), None);
        assert_eq!(empty.last(), None);
    }

    #[test]
    fn test_out_of_range_get_is_none() {
        let response = sample();
        assert!(response.get(2).is_some());
        assert_eq!(response.get(3), None);
        assert_eq!(response.get(usize::MAX), None);
        assert!(response.has(0));
        assert!(!response.has(3));
    }

    #[test]
    fn test_count() {
        assert_eq!(sample().count(), 3);
        assert_eq!(SelectResponse::default().count(), 0);
    }

    #[test]
    fn test_json_round_trip() {
        let response = sample();
        let encoded = response.to_json().unwrap();
        let decoded: Vec<Row> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, response.rows());
    }
}
