mod dialect;
pub use dialect::Dialect;

mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::Result;

use std::fmt::Debug;

/// The database handle consumed by the query builders.
///
/// Execution is synchronous: every call blocks for one round trip. A handle
/// is not shared between threads; open one handle per thread instead.
pub trait Connection: Debug {
    /// The SQL dialect the handle speaks, which selects the compiler.
    fn dialect(&self) -> Dialect;

    /// Execute a database operation
    fn exec(&mut self, op: Operation) -> Result<Response>;

    /// Returns the id generated by the most recent INSERT on this handle.
    fn last_insert_id(&mut self, sequence: Option<&str>) -> Result<String>;
}

impl<C: Connection + ?Sized> Connection for Box<C> {
    fn dialect(&self) -> Dialect {
        (**self).dialect()
    }

    fn exec(&mut self, op: Operation) -> Result<Response> {
        (**self).exec(op)
    }

    fn last_insert_id(&mut self, sequence: Option<&str>) -> Result<String> {
        (**self).last_insert_id(sequence)
    }
}
