use std::fmt;

/// The operator of a set operation.
///
/// Binding and optimization treat all three operators the same way; the
/// operator only matters for diagnostics and for choosing an execution
/// strategy, so callers match on it where the difference is relevant.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum SetOp {
    Union,
    Intersect,
    Except,
}

impl SetOp {
    /// Every operator, in declaration order.
    pub const VARIANTS: [SetOp; 3] = [SetOp::Union, SetOp::Intersect, SetOp::Except];

    /// The SQL keyword for the operator: `UNION`, `INTERSECT`, or `EXCEPT`.
    pub const fn as_str(self) -> &'static str {
        match self {
            SetOp::Union => "UNION",
            SetOp::Intersect => "INTERSECT",
            SetOp::Except => "EXCEPT",
        }
    }

    pub fn is_union(self) -> bool {
        matches!(self, SetOp::Union)
    }

    pub fn is_intersect(self) -> bool {
        matches!(self, SetOp::Intersect)
    }

    pub fn is_except(self) -> bool {
        matches!(self, SetOp::Except)
    }
}

impl fmt::Display for SetOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl fmt::Debug for SetOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
