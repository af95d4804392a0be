use super::{Node, OrderByExpr, Visit, VisitMut};

/// An ORDER BY list.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub exprs: Vec<OrderByExpr>,
}

impl OrderBy {
    pub fn new(exprs: impl Into<Vec<OrderByExpr>>) -> OrderBy {
        OrderBy {
            exprs: exprs.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

impl Node for OrderBy {
    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_order_by(self);
    }

    fn visit_mut<V: VisitMut>(&mut self, mut visit: V) {
        visit.visit_order_by_mut(self);
    }
}

impl From<OrderByExpr> for OrderBy {
    fn from(value: OrderByExpr) -> Self {
        Self { exprs: vec![value] }
    }
}

impl From<Vec<OrderByExpr>> for OrderBy {
    fn from(value: Vec<OrderByExpr>) -> Self {
        Self { exprs: value }
    }
}
