use pretty_assertions::assert_eq;
use quill_core::stmt::{Expr, OrderByExpr, SetOp, SetOperator, TableExpr, Value, Values};
use quill_sql::Serializer;

fn serialize(stmt: &SetOperator) -> quill_core::Result<(String, Vec<Value>)> {
    let mut params = vec![];
    let sql = Serializer::sqlite().serialize_set_operator(stmt, &mut params)?;
    Ok((sql, params))
}

fn tables(op: SetOp, all: bool) -> SetOperator {
    SetOperator::new(op, TableExpr::table("a"), TableExpr::table("b"), all)
}

// ---------------------------------------------------------------------------
// Quantifier support
// ---------------------------------------------------------------------------

#[test]
fn union_all_is_supported() {
    let (sql, _) = serialize(&tables(SetOp::Union, true)).unwrap();
    assert_eq!(sql, r#"SELECT * FROM "a" UNION ALL SELECT * FROM "b";"#);
}

#[test]
fn intersect_all_is_rejected() {
    let err = serialize(&tables(SetOp::Intersect, true)).unwrap_err();

    assert!(err.is_unsupported_feature());
    assert_eq!(
        err.to_string(),
        "unsupported feature: INTERSECT ALL is not supported by SQLite"
    );
}

#[test]
fn except_all_is_rejected() {
    let err = serialize(&tables(SetOp::Except, true)).unwrap_err();
    assert!(err.is_unsupported_feature());
}

#[test]
fn nested_intersect_all_is_rejected() {
    let stmt = SetOperator::new(
        SetOp::Union,
        TableExpr::table("c"),
        tables(SetOp::Intersect, true),
        false,
    );

    assert!(serialize(&stmt).unwrap_err().is_unsupported_feature());
}

#[test]
fn distinct_intersect_and_except_are_supported() {
    let (sql, _) = serialize(&tables(SetOp::Intersect, false)).unwrap();
    assert_eq!(sql, r#"SELECT * FROM "a" INTERSECT SELECT * FROM "b";"#);

    let (sql, _) = serialize(&tables(SetOp::Except, false)).unwrap();
    assert_eq!(sql, r#"SELECT * FROM "a" EXCEPT SELECT * FROM "b";"#);
}

// ---------------------------------------------------------------------------
// Operands and trailing clauses
// ---------------------------------------------------------------------------

#[test]
fn nested_operand_becomes_subquery() {
    let stmt = SetOperator::new(
        SetOp::Intersect,
        tables(SetOp::Union, false),
        TableExpr::table("c"),
        false,
    );

    let (sql, _) = serialize(&stmt).unwrap();
    assert_eq!(
        sql,
        r#"SELECT * FROM (SELECT * FROM "a" UNION SELECT * FROM "b") INTERSECT SELECT * FROM "c";"#
    );
}

#[test]
fn offset_without_fetch_first() {
    let stmt = SetOperator::builder(SetOp::Union)
        .left(TableExpr::table("a"))
        .right(TableExpr::table("b"))
        .offset(10)
        .build()
        .unwrap();

    let (sql, params) = serialize(&stmt).unwrap();
    assert_eq!(
        sql,
        r#"SELECT * FROM "a" UNION SELECT * FROM "b" LIMIT -1 OFFSET ?1;"#
    );
    assert_eq!(params, [Value::I64(10)]);
}

#[test]
fn fetch_first_and_offset() {
    let stmt = SetOperator::builder(SetOp::Union)
        .left(TableExpr::table("a"))
        .right(TableExpr::table("b"))
        .order_by(vec![
            OrderByExpr::asc(Expr::column("x")),
            OrderByExpr::from(Expr::column("y")),
        ])
        .offset(10)
        .fetch_first(5)
        .build()
        .unwrap();

    let (sql, params) = serialize(&stmt).unwrap();
    assert_eq!(
        sql,
        r#"SELECT * FROM "a" UNION SELECT * FROM "b" ORDER BY "x" ASC, "y" LIMIT ?1 OFFSET ?2;"#
    );
    assert_eq!(params, [Value::I64(5), Value::I64(10)]);
}

#[test]
fn values_rows() {
    let values = Values::new(vec![
        vec![Expr::from(1), Expr::from(true)],
        vec![Expr::from(2), Expr::null()],
    ]);
    let stmt = SetOperator::new(SetOp::Except, values, TableExpr::table("t"), false);

    let (sql, params) = serialize(&stmt).unwrap();
    assert_eq!(
        sql,
        r#"VALUES (?1, ?2), (?3, ?4) EXCEPT SELECT * FROM "t";"#
    );
    assert_eq!(
        params,
        [
            Value::I64(1),
            Value::Bool(true),
            Value::I64(2),
            Value::Null
        ]
    );
}
