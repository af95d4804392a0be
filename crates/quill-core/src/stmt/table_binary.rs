use super::{Properties, TableExpr};

/// Two tabular operands plus the properties attached to the combination.
///
/// This is the shared payload of every binary table operator. Both operands
/// are always present; the type has no way to represent a missing side.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBinary {
    pub left: Box<TableExpr>,
    pub right: Box<TableExpr>,
    pub properties: Option<Properties>,
}

impl TableBinary {
    pub fn new(
        left: impl Into<TableExpr>,
        right: impl Into<TableExpr>,
        properties: Option<Properties>,
    ) -> TableBinary {
        TableBinary {
            left: Box::new(left.into()),
            right: Box::new(right.into()),
            properties,
        }
    }

    pub fn operands(&self) -> [&TableExpr; 2] {
        [&self.left, &self.right]
    }
}
