use super::Error;
use crate::stmt::Value;

/// Context attached to every failed statement execution.
///
/// Carries the SQL text exactly as it was sent to the database handle and the
/// ordered bind values, so the failure can be reproduced outside the library.
#[derive(Debug)]
pub(super) struct StatementFailed {
    sql: Box<str>,
    bindings: Box<[Value]>,
}

impl std::error::Error for StatementFailed {}

impl core::fmt::Display for StatementFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "statement failed; sql={}; bindings=[", self.sql)?;
        let mut s = "";
        for value in self.bindings.iter() {
            write!(f, "{s}{value}")?;
            s = ", ";
        }
        f.write_str("]")
    }
}

impl Error {
    /// Creates the context error used to wrap an execution failure.
    ///
    /// ```
    /// # use quarry_core::Error;
    /// let err = Error::driver_operation_failed(std::io::Error::other("disk I/O error"))
    ///     .context(Error::statement_failed("DELETE FROM \"t\"", &[]));
    /// assert!(err.is_statement_failed());
    /// ```
    pub fn statement_failed(sql: impl Into<String>, bindings: &[Value]) -> Error {
        Error::from(super::ErrorKind::StatementFailed(StatementFailed {
            sql: sql.into().into(),
            bindings: bindings.into(),
        }))
    }

    /// Returns `true` if this error carries failed-statement context.
    pub fn is_statement_failed(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::StatementFailed(_)))
    }

    /// Returns the SQL text of the failed statement, if this error carries
    /// failed-statement context.
    pub fn failed_sql(&self) -> Option<&str> {
        self.chain().find_map(|err| match err.kind() {
            super::ErrorKind::StatementFailed(failed) => Some(&*failed.sql),
            _ => None,
        })
    }

    /// Returns the bind values of the failed statement.
    pub fn failed_bindings(&self) -> Option<&[Value]> {
        self.chain().find_map(|err| match err.kind() {
            super::ErrorKind::StatementFailed(failed) => Some(&*failed.bindings),
            _ => None,
        })
    }
}
