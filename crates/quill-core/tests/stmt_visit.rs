use quill_core::stmt::{
    visit, visit_mut, Expr, Node, OrderByExpr, SetOp, SetOperator, TableExpr, TableRef, Visit,
    VisitMut,
};

fn tree() -> SetOperator {
    let inner = SetOperator::builder(SetOp::Union)
        .left(TableExpr::table("a"))
        .right(TableExpr::table("b"))
        .all(true)
        .build()
        .unwrap();

    SetOperator::builder(SetOp::Except)
        .left(inner)
        .right(TableExpr::table("c"))
        .order_by(OrderByExpr::asc(Expr::column("id")))
        .offset(10)
        .fetch_first(Expr::arg(0))
        .build()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Read-only traversal
// ---------------------------------------------------------------------------

#[test]
fn visit_reaches_every_table() {
    #[derive(Default)]
    struct Tables(Vec<String>);

    impl Visit for Tables {
        fn visit_table_ref(&mut self, i: &TableRef) {
            self.0.push(i.name.clone());
        }
    }

    let mut tables = Tables::default();
    tree().visit(&mut tables);

    assert_eq!(tables.0, ["a", "b", "c"]);
}

#[test]
fn for_each_expr_includes_trailing_clauses() {
    let mut exprs = vec![];
    visit::for_each_expr(&tree(), |expr| exprs.push(expr.clone()));

    assert_eq!(exprs, [Expr::column("id"), Expr::from(10), Expr::arg(0)]);
}

#[test]
fn for_each_set_operator_visits_nested_first() {
    let mut ops = vec![];
    visit::for_each_set_operator(&tree(), |node| ops.push(node.op()));

    assert_eq!(ops, [SetOp::Union, SetOp::Except]);
}

// ---------------------------------------------------------------------------
// In-place operand replacement
// ---------------------------------------------------------------------------

#[test]
fn replace_left_keeps_everything_else() {
    let mut node = tree();
    let before = node.clone();

    let old = node.replace_left(TableExpr::table("bound_union"));

    assert!(old.is_set_op());
    assert_eq!(node.left(), &TableExpr::table("bound_union"));
    assert_eq!(node.right(), before.right());
    assert_eq!(node.operator_name(), before.operator_name());
    assert_eq!(node.eliminate_duplicates(), before.eliminate_duplicates());
    assert_eq!(node.order_by(), before.order_by());
    assert_eq!(node.offset(), before.offset());
    assert_eq!(node.fetch_first(), before.fetch_first());
}

#[test]
fn replace_right_through_mut_accessor() {
    let mut node = tree();

    *node.right_mut() = TableExpr::table("c_bound");

    assert_eq!(node.right().as_table().unwrap().name, "c_bound");
    assert_eq!(node.operator_name(), "EXCEPT");
    assert!(node.eliminate_duplicates());
}

#[test]
fn visit_mut_rewrites_operands_only() {
    struct Qualify;

    impl VisitMut for Qualify {
        fn visit_table_ref_mut(&mut self, i: &mut TableRef) {
            i.name = format!("public.{}", i.name);
        }

        fn visit_expr_mut(&mut self, i: &mut Expr) {
            *i = Expr::null();
        }
    }

    let mut node = tree();
    let before = node.clone();
    node.visit_mut(Qualify);

    let inner = node.left().as_set_op().unwrap();
    assert_eq!(inner.left().as_table().unwrap().name, "public.a");
    assert_eq!(inner.right().as_table().unwrap().name, "public.b");
    assert_eq!(node.right().as_table().unwrap().name, "public.c");

    // Trailing clauses are not reachable from a mutable visitor.
    assert_eq!(node.order_by(), before.order_by());
    assert_eq!(node.offset(), before.offset());
    assert_eq!(node.fetch_first(), before.fetch_first());
}

#[test]
fn for_each_table_expr_mut_can_swap_nested_operations() {
    let mut node = tree();

    visit_mut::for_each_table_expr_mut(&mut node, |expr| {
        if let Some(set_op) = expr.as_set_op() {
            if set_op.is_union() {
                *expr = TableExpr::table("materialized_union");
            }
        }
    });

    assert_eq!(node.left(), &TableExpr::table("materialized_union"));
    assert_eq!(node.operator_name(), "EXCEPT");
}

#[test]
fn operator_name_is_stable_across_rewrites() {
    for op in SetOp::VARIANTS {
        let mut node = SetOperator::new(op, TableExpr::table("l"), TableExpr::table("r"), false);
        node.replace_left(TableExpr::table("l2"));
        node.replace_right(tree());

        assert_eq!(node.operator_name(), op.as_str());
        assert_eq!(node.op(), op);
    }
}
