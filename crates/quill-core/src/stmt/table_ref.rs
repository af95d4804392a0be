use super::TableExpr;

/// A named table, optionally aliased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub name: String,
    pub alias: Option<String>,
}

impl TableRef {
    pub fn new(name: impl Into<String>) -> TableRef {
        TableRef {
            name: name.into(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> TableRef {
        self.alias = Some(alias.into());
        self
    }
}

impl From<&str> for TableRef {
    fn from(value: &str) -> Self {
        TableRef::new(value)
    }
}

impl From<TableRef> for TableExpr {
    fn from(value: TableRef) -> Self {
        TableExpr::Table(value)
    }
}
