#![allow(unused_variables)]

//! In-place rewriting of statement trees.
//!
//! Set operations only expose their operands to mutable visitors. The
//! operator, quantifier and trailing clauses are fixed once the node is built,
//! so `visit_set_operator_mut` does not descend into ORDER BY, OFFSET, or
//! FETCH FIRST.

use super::{
    Expr, ExprArg, ExprColumn, Node, OrderBy, OrderByExpr, SetOperator, TableExpr, TableRef,
    Value, Values,
};

pub trait VisitMut {
    fn visit_mut<N: Node>(&mut self, i: &mut N)
    where
        Self: Sized,
    {
        i.visit_mut(self);
    }

    fn visit_expr_mut(&mut self, i: &mut Expr) {
        visit_expr_mut(self, i);
    }

    fn visit_expr_arg_mut(&mut self, i: &mut ExprArg) {
        visit_expr_arg_mut(self, i);
    }

    fn visit_expr_column_mut(&mut self, i: &mut ExprColumn) {
        visit_expr_column_mut(self, i);
    }

    fn visit_order_by_mut(&mut self, i: &mut OrderBy) {
        visit_order_by_mut(self, i);
    }

    fn visit_order_by_expr_mut(&mut self, i: &mut OrderByExpr) {
        visit_order_by_expr_mut(self, i);
    }

    fn visit_set_operator_mut(&mut self, i: &mut SetOperator) {
        visit_set_operator_mut(self, i);
    }

    fn visit_table_expr_mut(&mut self, i: &mut TableExpr) {
        visit_table_expr_mut(self, i);
    }

    fn visit_table_ref_mut(&mut self, i: &mut TableRef) {
        visit_table_ref_mut(self, i);
    }

    fn visit_value_mut(&mut self, i: &mut Value) {
        visit_value_mut(self, i);
    }

    fn visit_values_mut(&mut self, i: &mut Values) {
        visit_values_mut(self, i);
    }
}

impl<V: VisitMut> VisitMut for &mut V {
    fn visit_expr_mut(&mut self, i: &mut Expr) {
        VisitMut::visit_expr_mut(&mut **self, i);
    }

    fn visit_expr_arg_mut(&mut self, i: &mut ExprArg) {
        VisitMut::visit_expr_arg_mut(&mut **self, i);
    }

    fn visit_expr_column_mut(&mut self, i: &mut ExprColumn) {
        VisitMut::visit_expr_column_mut(&mut **self, i);
    }

    fn visit_order_by_mut(&mut self, i: &mut OrderBy) {
        VisitMut::visit_order_by_mut(&mut **self, i);
    }

    fn visit_order_by_expr_mut(&mut self, i: &mut OrderByExpr) {
        VisitMut::visit_order_by_expr_mut(&mut **self, i);
    }

    fn visit_set_operator_mut(&mut self, i: &mut SetOperator) {
        VisitMut::visit_set_operator_mut(&mut **self, i);
    }

    fn visit_table_expr_mut(&mut self, i: &mut TableExpr) {
        VisitMut::visit_table_expr_mut(&mut **self, i);
    }

    fn visit_table_ref_mut(&mut self, i: &mut TableRef) {
        VisitMut::visit_table_ref_mut(&mut **self, i);
    }

    fn visit_value_mut(&mut self, i: &mut Value) {
        VisitMut::visit_value_mut(&mut **self, i);
    }

    fn visit_values_mut(&mut self, i: &mut Values) {
        VisitMut::visit_values_mut(&mut **self, i);
    }
}

pub fn visit_expr_mut<V>(v: &mut V, node: &mut Expr)
where
    V: VisitMut + ?Sized,
{
    match node {
        Expr::Arg(expr) => v.visit_expr_arg_mut(expr),
        Expr::Column(expr) => v.visit_expr_column_mut(expr),
        Expr::Value(expr) => v.visit_value_mut(expr),
    }
}

pub fn visit_expr_arg_mut<V>(v: &mut V, node: &mut ExprArg)
where
    V: VisitMut + ?Sized,
{
}

pub fn visit_expr_column_mut<V>(v: &mut V, node: &mut ExprColumn)
where
    V: VisitMut + ?Sized,
{
}

pub fn visit_order_by_mut<V>(v: &mut V, node: &mut OrderBy)
where
    V: VisitMut + ?Sized,
{
    for expr in &mut node.exprs {
        v.visit_order_by_expr_mut(expr);
    }
}

pub fn visit_order_by_expr_mut<V>(v: &mut V, node: &mut OrderByExpr)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.expr);
}

pub fn visit_set_operator_mut<V>(v: &mut V, node: &mut SetOperator)
where
    V: VisitMut + ?Sized,
{
    v.visit_table_expr_mut(node.left_mut());
    v.visit_table_expr_mut(node.right_mut());
}

pub fn visit_table_expr_mut<V>(v: &mut V, node: &mut TableExpr)
where
    V: VisitMut + ?Sized,
{
    match node {
        TableExpr::SetOp(set_op) => v.visit_set_operator_mut(set_op),
        TableExpr::Table(table) => v.visit_table_ref_mut(table),
        TableExpr::Values(values) => v.visit_values_mut(values),
    }
}

pub fn visit_table_ref_mut<V>(v: &mut V, node: &mut TableRef)
where
    V: VisitMut + ?Sized,
{
}

pub fn visit_value_mut<V>(v: &mut V, node: &mut Value)
where
    V: VisitMut + ?Sized,
{
}

pub fn visit_values_mut<V>(v: &mut V, node: &mut Values)
where
    V: VisitMut + ?Sized,
{
    for expr in node.rows.iter_mut().flatten() {
        v.visit_expr_mut(expr);
    }
}

pub fn for_each_table_expr_mut<F>(node: &mut impl Node, f: F)
where
    F: FnMut(&mut TableExpr),
{
    struct ForEach<F> {
        f: F,
    }

    impl<F> VisitMut for ForEach<F>
    where
        F: FnMut(&mut TableExpr),
    {
        fn visit_table_expr_mut(&mut self, node: &mut TableExpr) {
            visit_table_expr_mut(self, node);
            (self.f)(node);
        }
    }

    node.visit_mut(ForEach { f });
}
