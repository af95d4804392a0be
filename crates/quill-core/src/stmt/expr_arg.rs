use super::Expr;

/// A positional statement parameter (`?`), numbered from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExprArg {
    pub position: usize,
}

impl ExprArg {
    pub fn new(position: usize) -> ExprArg {
        ExprArg { position }
    }
}

impl From<ExprArg> for Expr {
    fn from(value: ExprArg) -> Self {
        Expr::Arg(value)
    }
}
