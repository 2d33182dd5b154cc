//! SELECT column list specification.

/// Columns to project in a SELECT statement.
///
/// A single string is used verbatim, so it may carry a raw expression
/// (`"COUNT(*) AS n"`); a list is comma-joined. A single-element list renders
/// identically to the equivalent string. Empty means all columns (`*`).
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ColumnSpec {
    /// All columns (`*`)
    #[default]
    All,
    /// A single column name or raw expression, used verbatim
    Raw(String),
    /// An ordered list of column names, comma-joined
    List(Vec<String>),
}

impl ColumnSpec {
    /// Render the projection list.
    pub fn to_sql(&self) -> String {
        match self {
            ColumnSpec::All => "*".to_string(),
            ColumnSpec::Raw(s) => s.clone(),
            ColumnSpec::List(cols) => cols.join(", "),
        }
    }

    /// Check whether this selects all columns.
    pub fn is_all(&self) -> bool {
        matches!(self, ColumnSpec::All)
    }
}

impl From<&str> for ColumnSpec {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            ColumnSpec::All
        } else {
            ColumnSpec::Raw(s.to_string())
        }
    }
}

impl From<String> for ColumnSpec {
    fn from(s: String) -> Self {
        if s.is_empty() {
            ColumnSpec::All
        } else {
            ColumnSpec::Raw(s)
        }
    }
}

impl From<Vec<String>> for ColumnSpec {
    fn from(cols: Vec<String>) -> Self {
        if cols.is_empty() {
            ColumnSpec::All
        } else {
            ColumnSpec::List(cols)
        }
    }
}

impl From<&[&str]> for ColumnSpec {
    fn from(cols: &[&str]) -> Self {
        if cols.is_empty() {
            ColumnSpec::All
        } else {
            ColumnSpec::List(cols.iter().map(|s| s.to_string()).collect())
        }
    }
}

impl<const N: usize> From<[&str; N]> for ColumnSpec {
    fn from(cols: [&str; N]) -> Self {
        ColumnSpec::from(&cols[..])
    }
}
