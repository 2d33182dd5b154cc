//! ORDER BY clause container.

/// Sort direction for an ORDER BY entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderDirection {
    /// ASC
    #[default]
    Asc,
    /// DESC
    Desc,
}

impl OrderDirection {
    /// SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}

/// One ORDER BY entry.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderEntry {
    pub column: String,
    pub direction: OrderDirection,
}

/// Ordered list of ORDER BY entries; entry order is insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderBy {
    entries: Vec<OrderEntry>,
}

impl OrderBy {
    /// Create an empty entry list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn add(&mut self, column: impl Into<String>, direction: OrderDirection) -> &mut Self {
        self.entries.push(OrderEntry {
            column: column.into(),
            direction,
        });
        self
    }

    /// Check whether any entry has been added.
    pub fn has(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Entries in insertion order, for builder consumption.
    pub fn entries(&self) -> &[OrderEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_keywords() {
        assert_eq!(OrderDirection::Asc.as_sql(), "ASC");
        assert_eq!(OrderDirection::Desc.as_sql(), "DESC");
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut order_by = OrderBy::new();
        order_by
            .add("created_at", OrderDirection::Desc)
            .add("id", OrderDirection::Asc);

        assert!(order_by.has());
        assert_eq!(order_by.entries()[0].column, "created_at");
        assert_eq!(order_by.entries()[1].column, "id");
    }
}
