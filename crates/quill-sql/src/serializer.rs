#[macro_use]
mod fmt;
use fmt::ToSql;

mod check;
use check::FlavorCheck;

mod delim;
use delim::Comma;

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;
mod table_expr;

use quill_core::{stmt, Result};

/// Serialize a statement tree to a SQL string
#[derive(Debug)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    /// Serializes a tabular expression as a complete query.
    ///
    /// Constant values are written as placeholders and pushed onto `params`
    /// in the order they appear in the SQL text.
    pub fn serialize(&self, stmt: &stmt::TableExpr, params: &mut impl Params) -> Result<String> {
        FlavorCheck::check(&self.flavor, stmt)?;
        Ok(self.write(stmt, params))
    }

    /// Serializes a set operation as a complete query.
    pub fn serialize_set_operator(
        &self,
        stmt: &stmt::SetOperator,
        params: &mut impl Params,
    ) -> Result<String> {
        FlavorCheck::check(&self.flavor, stmt)?;
        Ok(self.write(stmt, params))
    }

    fn write(&self, stmt: impl ToSql, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');

        tracing::debug!(flavor = ?self.flavor, sql = %ret, "serialized statement");
        ret
    }

    fn is_sqlite(&self) -> bool {
        matches!(self.flavor, Flavor::Sqlite)
    }
}
