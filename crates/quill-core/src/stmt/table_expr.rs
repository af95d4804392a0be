use super::{Node, SetOperator, TableRef, Values, Visit, VisitMut};
use crate::print::TreePrinter;

use std::fmt;

/// Anything that yields rows.
#[derive(Clone, PartialEq)]
pub enum TableExpr {
    /// A set operation (union, intersection, difference) on two operands
    SetOp(Box<SetOperator>),

    /// A named table
    Table(TableRef),

    /// Explicitly listed rows
    Values(Values),
}

impl TableExpr {
    pub fn table(name: impl Into<String>) -> TableExpr {
        TableExpr::Table(TableRef::new(name))
    }

    pub fn is_set_op(&self) -> bool {
        matches!(self, TableExpr::SetOp(_))
    }

    pub fn as_set_op(&self) -> Option<&SetOperator> {
        match self {
            TableExpr::SetOp(set_op) => Some(set_op),
            _ => None,
        }
    }

    pub fn as_set_op_mut(&mut self) -> Option<&mut SetOperator> {
        match self {
            TableExpr::SetOp(set_op) => Some(set_op),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&TableRef> {
        match self {
            TableExpr::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_values(&self) -> Option<&Values> {
        match self {
            TableExpr::Values(values) => Some(values),
            _ => None,
        }
    }

    /// Renders the diagnostic tree dump of this expression with the default
    /// print configuration.
    pub fn render(&self, depth: usize) -> String {
        TreePrinter::default().render_table_expr(self, depth)
    }
}

impl Node for TableExpr {
    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_table_expr(self);
    }

    fn visit_mut<V: VisitMut>(&mut self, mut visit: V) {
        visit.visit_table_expr_mut(self);
    }
}

impl fmt::Debug for TableExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetOp(e) => e.fmt(f),
            Self::Table(e) => e.fmt(f),
            Self::Values(e) => e.fmt(f),
        }
    }
}

impl From<SetOperator> for TableExpr {
    fn from(value: SetOperator) -> Self {
        TableExpr::SetOp(Box::new(value))
    }
}
