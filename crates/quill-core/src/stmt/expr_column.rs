use super::Expr;

/// References a result column by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprColumn {
    pub name: String,
}

impl ExprColumn {
    pub fn new(name: impl Into<String>) -> ExprColumn {
        ExprColumn { name: name.into() }
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Expr::Column(value)
    }
}
