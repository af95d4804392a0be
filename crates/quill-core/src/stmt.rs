mod direction;
pub use direction::Direction;

mod expr;
pub use expr::Expr;

mod expr_arg;
pub use expr_arg::ExprArg;

mod expr_column;
pub use expr_column::ExprColumn;

mod node;
pub use node::Node;

mod op_set;
pub use op_set::SetOp;

mod order_by;
pub use order_by::OrderBy;

mod order_by_expr;
pub use order_by_expr::OrderByExpr;

mod properties;
pub use properties::Properties;

mod set_operator;
pub use set_operator::{SetOperator, SetOperatorBuilder};

mod set_quantifier;
pub use set_quantifier::SetQuantifier;

mod table_binary;
pub use table_binary::TableBinary;

mod table_expr;
pub use table_expr::TableExpr;

mod table_ref;
pub use table_ref::TableRef;

mod value;
pub use value::Value;

mod values;
pub use values::Values;

pub mod visit;
pub use visit::Visit;

pub mod visit_mut;
pub use visit_mut::VisitMut;
