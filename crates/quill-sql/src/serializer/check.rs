use super::Flavor;

use quill_core::{
    stmt::{self, visit, Node, SetOp, Visit},
    Error, Result,
};

/// Rejects statements the target flavor cannot express, before any SQL is
/// written.
pub(super) struct FlavorCheck<'a> {
    flavor: &'a Flavor,
    err: Option<Error>,
}

impl<'a> FlavorCheck<'a> {
    pub(super) fn check(flavor: &'a Flavor, stmt: &impl Node) -> Result<()> {
        let mut check = FlavorCheck { flavor, err: None };
        stmt.visit(&mut check);

        match check.err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fail(&mut self, err: Error) {
        if self.err.is_none() {
            self.err = Some(err);
        }
    }
}

impl Visit for FlavorCheck<'_> {
    fn visit_set_operator(&mut self, i: &stmt::SetOperator) {
        visit::visit_set_operator(self, i);

        if let Flavor::Sqlite = self.flavor {
            match i.op() {
                SetOp::Union => {}
                SetOp::Intersect | SetOp::Except if i.is_all() => {
                    self.fail(Error::unsupported_feature(format!(
                        "{} ALL is not supported by SQLite",
                        i.op()
                    )));
                }
                SetOp::Intersect | SetOp::Except => {}
            }
        }
    }

    fn visit_expr_arg(&mut self, i: &stmt::ExprArg) {
        self.fail(Error::unsupported_feature(format!(
            "statement argument {} must be substituted before serialization",
            i.position
        )));
    }

    fn visit_values(&mut self, i: &stmt::Values) {
        visit::visit_values(self, i);

        if i.is_empty() || i.rows.iter().any(Vec::is_empty) {
            self.fail(Error::unsupported_feature("VALUES without rows or columns"));
        }
    }
}
