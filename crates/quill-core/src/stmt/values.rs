use super::{Expr, TableExpr};

/// Explicitly listed rows, as in `VALUES (1, 'a'), (2, 'b')`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values {
    pub rows: Vec<Vec<Expr>>,
}

impl Values {
    pub fn new(rows: Vec<Vec<Expr>>) -> Values {
        Values { rows }
    }

    pub fn push(&mut self, row: impl Into<Vec<Expr>>) {
        self.rows.push(row.into());
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `true` if every row only holds constants.
    pub fn is_const(&self) -> bool {
        self.rows.iter().flatten().all(Expr::is_value)
    }
}

impl From<Vec<Vec<Expr>>> for Values {
    fn from(value: Vec<Vec<Expr>>) -> Self {
        Values::new(value)
    }
}

impl From<Values> for TableExpr {
    fn from(value: Values) -> Self {
        TableExpr::Values(value)
    }
}
