//! Diagnostic tree dumps.
//!
//! The dump is for debugging and tracing only. Every node prints its own
//! lines at the requested depth; labeled sub-blocks (`left:`, `right:`,
//! `orderByList:`, ...) print the label at the node's depth and the child one
//! level deeper.
//!
//! ```text
//! UNION
//! eliminate_duplicates: true
//! left:
//!     Table: customers
//! right:
//!     Table: suppliers
//! orderByList:
//!     OrderByExpr: ASC
//!         Column: name
//! ```

use crate::stmt::{Expr, OrderBy, OrderByExpr, SetOperator, TableExpr, TableRef, Value, Values};

/// Formatting options for [`TreePrinter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintConfig {
    /// Prefix written once per depth level.
    pub indent: String,

    /// Whether table properties are printed.
    pub show_properties: bool,
}

impl Default for PrintConfig {
    fn default() -> Self {
        PrintConfig {
            indent: "    ".to_string(),
            show_properties: true,
        }
    }
}

impl PrintConfig {
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn show_properties(mut self, show_properties: bool) -> Self {
        self.show_properties = show_properties;
        self
    }
}

/// Renders statement trees as indentation-structured text.
///
/// Rendering only reads the tree.
#[derive(Debug, Clone, Default)]
pub struct TreePrinter {
    config: PrintConfig,
}

struct Formatter<'a> {
    config: &'a PrintConfig,

    /// Where to write the dump
    dst: String,
}

impl TreePrinter {
    pub fn new(config: PrintConfig) -> TreePrinter {
        TreePrinter { config }
    }

    pub fn config(&self) -> &PrintConfig {
        &self.config
    }

    pub fn render_set_operator(&self, node: &SetOperator, depth: usize) -> String {
        tracing::trace!(op = %node.op(), depth, "rendering set operation");
        let mut f = self.formatter();
        f.set_operator(node, depth);
        f.dst
    }

    pub fn render_table_expr(&self, node: &TableExpr, depth: usize) -> String {
        let mut f = self.formatter();
        f.table_expr(node, depth);
        f.dst
    }

    pub fn render_expr(&self, node: &Expr, depth: usize) -> String {
        let mut f = self.formatter();
        f.expr(node, depth);
        f.dst
    }

    fn formatter(&self) -> Formatter<'_> {
        Formatter {
            config: &self.config,
            dst: String::new(),
        }
    }
}

impl Formatter<'_> {
    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.dst.push_str(&self.config.indent);
        }
        self.dst.push_str(text);
        self.dst.push('\n');
    }

    fn label(&mut self, depth: usize, label: &str) {
        self.line(depth, label);
    }

    fn table_expr(&mut self, node: &TableExpr, depth: usize) {
        match node {
            TableExpr::SetOp(set_op) => self.set_operator(set_op, depth),
            TableExpr::Table(table) => self.table_ref(table, depth),
            TableExpr::Values(values) => self.values(values, depth),
        }
    }

    fn set_operator(&mut self, node: &SetOperator, depth: usize) {
        self.line(depth, node.operator_name());
        self.line(
            depth,
            &format!("eliminate_duplicates: {}", node.eliminate_duplicates()),
        );

        if let Some(properties) = node.properties() {
            if self.config.show_properties && !properties.is_empty() {
                let entries = properties
                    .iter()
                    .map(|(key, value)| format!("{key}={value}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                self.line(depth, &format!("properties: {{{entries}}}"));
            }
        }

        self.label(depth, "left:");
        self.table_expr(node.left(), depth + 1);
        self.label(depth, "right:");
        self.table_expr(node.right(), depth + 1);

        if let Some(order_by) = node.order_by() {
            self.label(depth, "orderByList:");
            self.order_by(order_by, depth + 1);
        }

        if let Some(offset) = node.offset() {
            self.label(depth, "offset:");
            self.expr(offset, depth + 1);
        }

        if let Some(fetch_first) = node.fetch_first() {
            self.label(depth, "fetchFirst:");
            self.expr(fetch_first, depth + 1);
        }
    }

    fn table_ref(&mut self, node: &TableRef, depth: usize) {
        match &node.alias {
            Some(alias) => self.line(depth, &format!("Table: {} AS {}", node.name, alias)),
            None => self.line(depth, &format!("Table: {}", node.name)),
        }
    }

    fn values(&mut self, node: &Values, depth: usize) {
        self.line(depth, "Values");
        for row in &node.rows {
            self.line(depth + 1, "Row");
            for expr in row {
                self.expr(expr, depth + 2);
            }
        }
    }

    fn order_by(&mut self, node: &OrderBy, depth: usize) {
        for expr in &node.exprs {
            self.order_by_expr(expr, depth);
        }
    }

    fn order_by_expr(&mut self, node: &OrderByExpr, depth: usize) {
        match node.order {
            Some(direction) => self.line(depth, &format!("OrderByExpr: {direction}")),
            None => self.line(depth, "OrderByExpr"),
        }
        self.expr(&node.expr, depth + 1);
    }

    fn expr(&mut self, node: &Expr, depth: usize) {
        match node {
            Expr::Arg(arg) => self.line(depth, &format!("Arg: {}", arg.position)),
            Expr::Column(column) => self.line(depth, &format!("Column: {}", column.name)),
            Expr::Value(value) => self.line(depth, &format!("Value: {}", value_text(value))),
        }
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(v) => v.to_string(),
        Value::I64(v) => v.to_string(),
        Value::String(v) => format!("'{}'", v.replace('\'', "''")),
    }
}
