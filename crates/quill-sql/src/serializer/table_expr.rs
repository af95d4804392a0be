use super::{Comma, Flavor, Formatter, Ident, Params, ToSql};

use quill_core::stmt;

/// SQLite and MySQL only offer `LIMIT`; an OFFSET on its own needs a limit
/// that never applies.
const SQLITE_NO_LIMIT: &str = "-1";
const MYSQL_NO_LIMIT: &str = "18446744073709551615";

impl ToSql for &stmt::TableExpr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            stmt::TableExpr::SetOp(set_op) => (&**set_op).to_sql(f),
            stmt::TableExpr::Table(table) => fmt!(f, "SELECT * FROM " table),
            stmt::TableExpr::Values(values) => values.to_sql(f),
        }
    }
}

impl ToSql for &stmt::TableRef {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let alias = self.alias.as_ref().map(|alias| (" AS ", Ident(alias)));

        fmt!(f, Ident(&self.name) alias);
    }
}

impl ToSql for &stmt::Values {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let row_prefix = match f.serializer.flavor {
            Flavor::Mysql => "ROW(",
            Flavor::Postgresql | Flavor::Sqlite => "(",
        };

        let mut s = "VALUES ";
        for row in &self.rows {
            fmt!(f, s row_prefix Comma(row) ")");
            s = ", ";
        }
    }
}

/// One side of a set operation.
struct Operand<'a>(&'a stmt::TableExpr);

impl ToSql for Operand<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let stmt::TableExpr::SetOp(_) = self.0 else {
            self.0.to_sql(f);
            return;
        };

        // SQLite does not accept a parenthesized compound select as an
        // operand, so it becomes a subquery instead.
        if f.serializer.is_sqlite() {
            fmt!(f, "SELECT * FROM (" self.0 ")");
        } else {
            fmt!(f, "(" self.0 ")");
        }
    }
}

impl ToSql for &stmt::SetOperator {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let quantifier = if self.is_all() { " ALL " } else { " " };

        fmt!(f, Operand(self.left()) " " self.operator_name() quantifier Operand(self.right()));

        if let Some(order_by) = self.order_by() {
            fmt!(f, " " order_by);
        }

        match f.serializer.flavor {
            Flavor::Postgresql => {
                if let Some(offset) = self.offset() {
                    fmt!(f, " OFFSET " offset " ROWS");
                }

                if let Some(fetch_first) = self.fetch_first() {
                    fmt!(f, " FETCH FIRST " fetch_first " ROWS ONLY");
                }
            }
            Flavor::Sqlite | Flavor::Mysql => {
                let no_limit = match f.serializer.flavor {
                    Flavor::Sqlite => SQLITE_NO_LIMIT,
                    _ => MYSQL_NO_LIMIT,
                };

                match (self.fetch_first(), self.offset()) {
                    (Some(limit), offset) => {
                        fmt!(f, " LIMIT " limit);
                        if let Some(offset) = offset {
                            fmt!(f, " OFFSET " offset);
                        }
                    }
                    (None, Some(offset)) => fmt!(f, " LIMIT " no_limit " OFFSET " offset),
                    (None, None) => {}
                }
            }
        }
    }
}
