//! WHERE clause container.

use crate::value::Value;

/// Boolean operator joining one WHERE clause to the next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Conjunction {
    /// AND
    #[default]
    And,
    /// OR
    Or,
}

impl Conjunction {
    /// SQL keyword for this conjunction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Conjunction::And => "AND",
            Conjunction::Or => "OR",
        }
    }
}

/// One WHERE clause record.
///
/// The conjunction links this clause to the **next** one; the conjunction of
/// the last clause is never serialized.
#[derive(Clone, Debug, PartialEq)]
pub struct WhereClause {
    pub column: String,
    pub operator: String,
    pub value: Value,
    pub conjunction: Conjunction,
}

/// Ordered list of WHERE clauses.
///
/// Clause order is insertion order. Column names and operators are not
/// validated; an unsupported operator is serialized verbatim.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Where {
    clauses: Vec<WhereClause>,
}

impl Where {
    /// Create an empty clause list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a clause.
    pub fn add(
        &mut self,
        column: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<Value>,
        conjunction: Conjunction,
    ) -> &mut Self {
        self.clauses.push(WhereClause {
            column: column.into(),
            operator: operator.into(),
            value: value.into(),
            conjunction,
        });
        self
    }

    /// Check whether any clause has been added.
    pub fn has(&self) -> bool {
        !self.clauses.is_empty()
    }

    /// Clause records in insertion order, for builder consumption.
    pub fn clauses(&self) -> &[WhereClause] {
        &self.clauses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_clause_order() {
        let mut where_group = Where::new();
        where_group
            .add("a", "=", 1, Conjunction::And)
            .add("b", ">", 2, Conjunction::Or)
            .add("c", "!=", 3, Conjunction::And);

        assert!(where_group.has());
        let cols: Vec<&str> = where_group
            .clauses()
            .iter()
            .map(|c| c.column.as_str())
            .collect();
        assert_eq!(cols, ["a", "b", "c"]);
    }

    #[test]
    fn test_empty_has() {
        assert!(!Where::new().has());
    }
}
