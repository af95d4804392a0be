#![allow(unused_variables)]

use super::{
    Expr, ExprArg, ExprColumn, Node, OrderBy, OrderByExpr, SetOperator, TableExpr, TableRef,
    Value, Values,
};

pub trait Visit {
    fn visit<N: Node>(&mut self, i: &N)
    where
        Self: Sized,
    {
        i.visit(self);
    }

    fn visit_expr(&mut self, i: &Expr) {
        visit_expr(self, i);
    }

    fn visit_expr_arg(&mut self, i: &ExprArg) {
        visit_expr_arg(self, i);
    }

    fn visit_expr_column(&mut self, i: &ExprColumn) {
        visit_expr_column(self, i);
    }

    fn visit_order_by(&mut self, i: &OrderBy) {
        visit_order_by(self, i);
    }

    fn visit_order_by_expr(&mut self, i: &OrderByExpr) {
        visit_order_by_expr(self, i);
    }

    fn visit_set_operator(&mut self, i: &SetOperator) {
        visit_set_operator(self, i);
    }

    fn visit_table_expr(&mut self, i: &TableExpr) {
        visit_table_expr(self, i);
    }

    fn visit_table_ref(&mut self, i: &TableRef) {
        visit_table_ref(self, i);
    }

    fn visit_value(&mut self, i: &Value) {
        visit_value(self, i);
    }

    fn visit_values(&mut self, i: &Values) {
        visit_values(self, i);
    }
}

impl<V: Visit> Visit for &mut V {
    fn visit_expr(&mut self, i: &Expr) {
        Visit::visit_expr(&mut **self, i);
    }

    fn visit_expr_arg(&mut self, i: &ExprArg) {
        Visit::visit_expr_arg(&mut **self, i);
    }

    fn visit_expr_column(&mut self, i: &ExprColumn) {
        Visit::visit_expr_column(&mut **self, i);
    }

    fn visit_order_by(&mut self, i: &OrderBy) {
        Visit::visit_order_by(&mut **self, i);
    }

    fn visit_order_by_expr(&mut self, i: &OrderByExpr) {
        Visit::visit_order_by_expr(&mut **self, i);
    }

    fn visit_set_operator(&mut self, i: &SetOperator) {
        Visit::visit_set_operator(&mut **self, i);
    }

    fn visit_table_expr(&mut self, i: &TableExpr) {
        Visit::visit_table_expr(&mut **self, i);
    }

    fn visit_table_ref(&mut self, i: &TableRef) {
        Visit::visit_table_ref(&mut **self, i);
    }

    fn visit_value(&mut self, i: &Value) {
        Visit::visit_value(&mut **self, i);
    }

    fn visit_values(&mut self, i: &Values) {
        Visit::visit_values(&mut **self, i);
    }
}

pub fn visit_expr<V>(v: &mut V, node: &Expr)
where
    V: Visit + ?Sized,
{
    match node {
        Expr::Arg(expr) => v.visit_expr_arg(expr),
        Expr::Column(expr) => v.visit_expr_column(expr),
        Expr::Value(expr) => v.visit_value(expr),
    }
}

pub fn visit_expr_arg<V>(v: &mut V, node: &ExprArg)
where
    V: Visit + ?Sized,
{
}

pub fn visit_expr_column<V>(v: &mut V, node: &ExprColumn)
where
    V: Visit + ?Sized,
{
}

pub fn visit_order_by<V>(v: &mut V, node: &OrderBy)
where
    V: Visit + ?Sized,
{
    for expr in &node.exprs {
        v.visit_order_by_expr(expr);
    }
}

pub fn visit_order_by_expr<V>(v: &mut V, node: &OrderByExpr)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_set_operator<V>(v: &mut V, node: &SetOperator)
where
    V: Visit + ?Sized,
{
    v.visit_table_expr(&node.binary.left);
    v.visit_table_expr(&node.binary.right);

    if let Some(order_by) = &node.order_by {
        v.visit_order_by(order_by);
    }

    if let Some(offset) = &node.offset {
        v.visit_expr(offset);
    }

    if let Some(fetch_first) = &node.fetch_first {
        v.visit_expr(fetch_first);
    }
}

pub fn visit_table_expr<V>(v: &mut V, node: &TableExpr)
where
    V: Visit + ?Sized,
{
    match node {
        TableExpr::SetOp(set_op) => v.visit_set_operator(set_op),
        TableExpr::Table(table) => v.visit_table_ref(table),
        TableExpr::Values(values) => v.visit_values(values),
    }
}

pub fn visit_table_ref<V>(v: &mut V, node: &TableRef)
where
    V: Visit + ?Sized,
{
}

pub fn visit_value<V>(v: &mut V, node: &Value)
where
    V: Visit + ?Sized,
{
}

pub fn visit_values<V>(v: &mut V, node: &Values)
where
    V: Visit + ?Sized,
{
    for expr in node.rows.iter().flatten() {
        v.visit_expr(expr);
    }
}

pub fn for_each_expr<F>(node: &impl Node, f: F)
where
    F: FnMut(&Expr),
{
    struct ForEach<F> {
        f: F,
    }

    impl<F> Visit for ForEach<F>
    where
        F: FnMut(&Expr),
    {
        fn visit_expr(&mut self, node: &Expr) {
            visit_expr(self, node);
            (self.f)(node);
        }
    }

    node.visit(ForEach { f });
}

pub fn for_each_set_operator<F>(node: &impl Node, f: F)
where
    F: FnMut(&SetOperator),
{
    struct ForEach<F> {
        f: F,
    }

    impl<F> Visit for ForEach<F>
    where
        F: FnMut(&SetOperator),
    {
        fn visit_set_operator(&mut self, node: &SetOperator) {
            visit_set_operator(self, node);
            (self.f)(node);
        }
    }

    node.visit(ForEach { f });
}
