use pretty_assertions::assert_eq;
use quill_core::{
    stmt::{Expr, OrderByExpr, Properties, SetOp, SetOperator, TableExpr, TableRef, Values},
    PrintConfig, TreePrinter,
};

fn union_all() -> SetOperator {
    SetOperator::builder(SetOp::Union)
        .left(TableExpr::table("customers"))
        .right(TableExpr::table("suppliers"))
        .all(true)
        .build()
        .unwrap()
}

#[test]
fn union_of_two_tables() {
    let node = union_all();

    assert!(!node.eliminate_duplicates());
    assert_eq!(
        node.render(0),
        "\
UNION
eliminate_duplicates: false
left:
    Table: customers
right:
    Table: suppliers
"
    );
    assert!(!node.render(0).contains("orderByList"));
}

#[test]
fn except_with_order_by() {
    let node = SetOperator::builder(SetOp::Except)
        .left(TableExpr::table("orders"))
        .right(TableExpr::table("returns"))
        .all(false)
        .order_by(OrderByExpr::asc(Expr::column("id")))
        .build()
        .unwrap();

    assert!(node.eliminate_duplicates());
    assert_eq!(node.operator_name(), "EXCEPT");

    let out = node.render(0);
    assert_eq!(
        out,
        "\
EXCEPT
eliminate_duplicates: true
left:
    Table: orders
right:
    Table: returns
orderByList:
    OrderByExpr: ASC
        Column: id
"
    );
    assert_eq!(out.matches("orderByList:").count(), 1);
}

#[test]
fn order_by_block_is_one_level_deeper_than_the_node() {
    let node = SetOperator::builder(SetOp::Intersect)
        .left(TableExpr::table("a"))
        .right(TableExpr::table("b"))
        .order_by(OrderByExpr::desc(Expr::column("x")))
        .build()
        .unwrap();

    let out = node.render(2);
    let lines: Vec<_> = out.lines().collect();
    let label = lines
        .iter()
        .position(|line| line.trim_start() == "orderByList:")
        .unwrap();

    assert_eq!(lines[0], "        INTERSECT");
    assert_eq!(lines[label], "        orderByList:");
    assert_eq!(lines[label + 1], "            OrderByExpr: DESC");
}

#[test]
fn offset_and_fetch_first_use_expression_printing() {
    let node = SetOperator::builder(SetOp::Union)
        .left(TableExpr::table("a"))
        .right(TableExpr::table("b"))
        .offset(20)
        .fetch_first(Expr::arg(0))
        .build()
        .unwrap();

    assert_eq!(
        node.render(0),
        "\
UNION
eliminate_duplicates: true
left:
    Table: a
right:
    Table: b
offset:
    Value: 20
fetchFirst:
    Arg: 0
"
    );
}

#[test]
fn nested_set_operations() {
    let inner = SetOperator::builder(SetOp::Intersect)
        .left(TableExpr::table("a"))
        .right(TableRef::new("b").with_alias("bb"))
        .order_by(OrderByExpr::from(Expr::column("k")))
        .build()
        .unwrap();

    let outer = SetOperator::new(SetOp::Union, inner, TableExpr::table("c"), true);

    assert_eq!(
        outer.render(0),
        "\
UNION
eliminate_duplicates: false
left:
    INTERSECT
    eliminate_duplicates: true
    left:
        Table: a
    right:
        Table: b AS bb
    orderByList:
        OrderByExpr
            Column: k
right:
    Table: c
"
    );
}

#[test]
fn values_operand() {
    let values = Values::new(vec![
        vec![Expr::from(1), Expr::from("it's")],
        vec![Expr::null(), Expr::from(true)],
    ]);
    let node = SetOperator::new(SetOp::Union, TableExpr::table("t"), values, false);

    assert_eq!(
        node.render(0),
        "\
UNION
eliminate_duplicates: true
left:
    Table: t
right:
    Values
        Row
            Value: 1
            Value: 'it''s'
        Row
            Value: NULL
            Value: true
"
    );
}

#[test]
fn rendering_is_read_only() {
    let node = SetOperator::builder(SetOp::Except)
        .left(union_all())
        .right(TableExpr::table("c"))
        .order_by(OrderByExpr::asc(Expr::column("id")))
        .offset(1)
        .build()
        .unwrap();
    let before = node.clone();

    let first = node.render(1);
    let second = node.render(1);

    assert_eq!(first, second);
    assert_eq!(node, before);
}

#[test]
fn properties_are_printed_in_insertion_order() {
    let mut properties = Properties::new();
    properties.insert("zeta", "1");
    properties.insert("alpha", "2");

    let node = SetOperator::builder(SetOp::Union)
        .left(TableExpr::table("a"))
        .right(TableExpr::table("b"))
        .properties(properties)
        .build()
        .unwrap();

    let out = node.render(0);
    assert!(out.contains("\nproperties: {zeta=1, alpha=2}\n"), "{out}");

    let hidden = TreePrinter::new(PrintConfig::default().show_properties(false))
        .render_set_operator(&node, 0);
    assert!(!hidden.contains("properties"));
}

#[test]
fn custom_indent() {
    let printer = TreePrinter::new(PrintConfig::default().indent("  "));
    let out = printer.render_table_expr(&TableExpr::from(union_all()), 1);

    assert_eq!(
        out,
        "  UNION
  eliminate_duplicates: false
  left:
    Table: customers
  right:
    Table: suppliers
"
    );
}

#[test]
fn table_expr_render_matches_node_render() {
    let node = union_all();
    assert_eq!(TableExpr::from(node.clone()).render(3), node.render(3));
}

#[test]
fn render_scalar_expressions() {
    let printer = TreePrinter::new(PrintConfig::default().indent("\t"));
    assert_eq!(printer.config().indent, "\t");
    assert!(printer.config().show_properties);

    assert_eq!(printer.render_expr(&Expr::from("it's"), 2), "\t\tValue: 'it''s'\n");
    assert_eq!(printer.render_expr(&Expr::null(), 0), "Value: NULL\n");
    assert_eq!(printer.render_expr(&Expr::arg(3), 1), "\tArg: 3\n");
    assert_eq!(printer.render_expr(&Expr::column("id"), 0), "Column: id\n");
}
