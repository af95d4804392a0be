mod error;
pub use error::{Error, IntoError};

pub mod print;
pub use print::{PrintConfig, TreePrinter};

pub mod stmt;

/// A Result type alias that uses Quill's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
