use super::{Comma, Formatter, Ident, Params, ToSql};

use quill_core::stmt;

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            stmt::Expr::Column(expr) => expr.to_sql(f),
            stmt::Expr::Value(value) => value.to_sql(f),
            // Rejected by the flavor check
            stmt::Expr::Arg(expr) => unreachable!("unsubstituted argument; expr={expr:?}"),
        }
    }
}

impl ToSql for &stmt::ExprColumn {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, Ident(&self.name));
    }
}

impl ToSql for &stmt::Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(self);
        fmt!(f, placeholder);
    }
}

impl ToSql for &stmt::OrderBy {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let order_by = Comma(&self.exprs);

        fmt!(f, "ORDER BY " order_by);
    }
}

impl ToSql for &stmt::OrderByExpr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match &self.expr {
            // `ORDER BY 2` refers to a result column by position and must stay
            // a literal.
            stmt::Expr::Value(stmt::Value::I64(position)) => fmt!(f, position.to_string()),
            expr => fmt!(f, expr),
        }

        if let Some(order) = self.order {
            fmt!(f, " " order.as_str());
        }
    }
}
