use super::{
    Expr, Node, OrderBy, Properties, SetOp, SetQuantifier, TableBinary, TableExpr, Visit,
    VisitMut,
};
use crate::{print::TreePrinter, Error, Result};

use std::mem;

/// A set operation combining two tabular expressions.
///
/// Applies a set operator (union, intersect, except) to the results of two
/// operands. Binding and optimization are the same for all three operators,
/// so they share this one node type and differ only in [`SetOp`].
///
/// # Examples
///
/// ```text
/// SELECT ... UNION SELECT ...            // all rows of both, deduplicated
/// SELECT ... INTERSECT ALL SELECT ...    // common rows, duplicates kept
/// SELECT ... EXCEPT SELECT ... ORDER BY 1 OFFSET 10 ROWS
/// ```
///
/// ORDER BY, OFFSET and FETCH FIRST stored here apply to the combined result.
/// Clauses written inside a parenthesized operand stay on that operand.
///
/// A `SetOperator` is produced by [`SetOperatorBuilder::build`]. Once built,
/// the operator, quantifier and trailing clauses are fixed; only the operands
/// can be replaced, by binding and rewrite passes.
#[derive(Debug, Clone, PartialEq)]
pub struct SetOperator {
    /// The operator to apply.
    pub(super) op: SetOp,

    /// ALL or DISTINCT
    pub(super) quantifier: SetQuantifier,

    /// The two operands and their table properties.
    pub(super) binary: TableBinary,

    /// ORDER BY on the combined result
    pub(super) order_by: Option<OrderBy>,

    /// OFFSET n ROWS
    pub(super) offset: Option<Expr>,

    /// FETCH FIRST n ROWS ONLY
    pub(super) fetch_first: Option<Expr>,
}

/// Assembles a [`SetOperator`] during parsing.
///
/// Each trailing clause may be attached at most once. Attaching one twice is
/// a bug in the caller and panics.
#[derive(Debug)]
pub struct SetOperatorBuilder {
    op: SetOp,
    left: Option<TableExpr>,
    right: Option<TableExpr>,
    quantifier: SetQuantifier,
    properties: Option<Properties>,
    order_by: Option<OrderBy>,
    offset: Option<Expr>,
    fetch_first: Option<Expr>,
}

impl SetOperator {
    /// Creates a set operation with no trailing clauses.
    ///
    /// `all` is the surface `ALL` keyword: `true` keeps duplicate rows.
    pub fn new(
        op: SetOp,
        left: impl Into<TableExpr>,
        right: impl Into<TableExpr>,
        all: bool,
    ) -> SetOperator {
        SetOperator {
            op,
            quantifier: SetQuantifier::from(all),
            binary: TableBinary::new(left, right, None),
            order_by: None,
            offset: None,
            fetch_first: None,
        }
    }

    pub fn builder(op: SetOp) -> SetOperatorBuilder {
        SetOperatorBuilder {
            op,
            left: None,
            right: None,
            quantifier: SetQuantifier::default(),
            properties: None,
            order_by: None,
            offset: None,
            fetch_first: None,
        }
    }

    pub fn op(&self) -> SetOp {
        self.op
    }

    /// Returns `"UNION"`, `"INTERSECT"`, or `"EXCEPT"`.
    pub fn operator_name(&self) -> &'static str {
        self.op.as_str()
    }

    pub fn is_union(&self) -> bool {
        self.op.is_union()
    }

    pub fn is_intersect(&self) -> bool {
        self.op.is_intersect()
    }

    pub fn is_except(&self) -> bool {
        self.op.is_except()
    }

    pub fn quantifier(&self) -> SetQuantifier {
        self.quantifier
    }

    /// `true` when written with `ALL`.
    pub fn is_all(&self) -> bool {
        self.quantifier.is_all()
    }

    /// `true` when duplicate rows are removed from the result. Always the
    /// inverse of [`is_all`](Self::is_all).
    pub fn eliminate_duplicates(&self) -> bool {
        self.quantifier.eliminates_duplicates()
    }

    pub fn binary(&self) -> &TableBinary {
        &self.binary
    }

    pub fn left(&self) -> &TableExpr {
        &self.binary.left
    }

    pub fn right(&self) -> &TableExpr {
        &self.binary.right
    }

    pub fn left_mut(&mut self) -> &mut TableExpr {
        &mut self.binary.left
    }

    pub fn right_mut(&mut self) -> &mut TableExpr {
        &mut self.binary.right
    }

    /// Replaces the left operand, returning the previous one.
    pub fn replace_left(&mut self, left: impl Into<TableExpr>) -> TableExpr {
        tracing::debug!(op = %self.op, "replacing left operand");
        mem::replace(&mut *self.binary.left, left.into())
    }

    /// Replaces the right operand, returning the previous one.
    pub fn replace_right(&mut self, right: impl Into<TableExpr>) -> TableExpr {
        tracing::debug!(op = %self.op, "replacing right operand");
        mem::replace(&mut *self.binary.right, right.into())
    }

    /// Left then right.
    pub fn operands(&self) -> impl Iterator<Item = &TableExpr> {
        self.binary.operands().into_iter()
    }

    pub fn properties(&self) -> Option<&Properties> {
        self.binary.properties.as_ref()
    }

    pub fn order_by(&self) -> Option<&OrderBy> {
        self.order_by.as_ref()
    }

    pub fn offset(&self) -> Option<&Expr> {
        self.offset.as_ref()
    }

    pub fn fetch_first(&self) -> Option<&Expr> {
        self.fetch_first.as_ref()
    }

    /// Renders the diagnostic tree dump of this node with the default print
    /// configuration.
    pub fn render(&self, depth: usize) -> String {
        TreePrinter::default().render_set_operator(self, depth)
    }
}

impl Node for SetOperator {
    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_set_operator(self);
    }

    fn visit_mut<V: VisitMut>(&mut self, mut visit: V) {
        visit.visit_set_operator_mut(self);
    }
}

impl SetOperatorBuilder {
    pub fn left(mut self, left: impl Into<TableExpr>) -> Self {
        self.left = Some(left.into());
        self
    }

    pub fn right(mut self, right: impl Into<TableExpr>) -> Self {
        self.right = Some(right.into());
        self
    }

    /// Sets the surface `ALL` keyword: `true` keeps duplicate rows.
    pub fn all(mut self, all: bool) -> Self {
        self.quantifier = SetQuantifier::from(all);
        self
    }

    pub fn quantifier(mut self, quantifier: SetQuantifier) -> Self {
        self.quantifier = quantifier;
        self
    }

    pub fn properties(mut self, properties: Properties) -> Self {
        self.properties = Some(properties);
        self
    }

    #[track_caller]
    pub fn order_by(mut self, order_by: impl Into<OrderBy>) -> Self {
        assert!(
            self.order_by.is_none(),
            "ORDER BY already attached to {}",
            self.op
        );
        self.order_by = Some(order_by.into());
        self
    }

    #[track_caller]
    pub fn offset(mut self, offset: impl Into<Expr>) -> Self {
        assert!(
            self.offset.is_none(),
            "OFFSET already attached to {}",
            self.op
        );
        self.offset = Some(offset.into());
        self
    }

    #[track_caller]
    pub fn fetch_first(mut self, fetch_first: impl Into<Expr>) -> Self {
        assert!(
            self.fetch_first.is_none(),
            "FETCH FIRST already attached to {}",
            self.op
        );
        self.fetch_first = Some(fetch_first.into());
        self
    }

    /// Finalizes the node.
    ///
    /// Fails with a construction error if either operand was never supplied or
    /// if an attached ORDER BY has no sort keys.
    pub fn build(self) -> Result<SetOperator> {
        let (left, right) = match (self.left, self.right) {
            (Some(left), Some(right)) => (left, right),
            (None, Some(_)) => {
                return Err(Error::construction(format!(
                    "{} is missing its left operand",
                    self.op
                )))
            }
            (Some(_), None) => {
                return Err(Error::construction(format!(
                    "{} is missing its right operand",
                    self.op
                )))
            }
            (None, None) => {
                return Err(Error::construction(format!(
                    "{} is missing its left and right operands",
                    self.op
                )))
            }
        };

        if self.order_by.as_ref().is_some_and(OrderBy::is_empty) {
            return Err(Error::construction(format!(
                "ORDER BY on {} has no sort keys",
                self.op
            )));
        }

        tracing::debug!(
            op = %self.op,
            quantifier = %self.quantifier,
            order_by = self.order_by.is_some(),
            offset = self.offset.is_some(),
            fetch_first = self.fetch_first.is_some(),
            "built set operation"
        );

        Ok(SetOperator {
            op: self.op,
            quantifier: self.quantifier,
            binary: TableBinary::new(left, right, self.properties),
            order_by: self.order_by,
            offset: self.offset,
            fetch_first: self.fetch_first,
        })
    }
}
