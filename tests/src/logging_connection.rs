use quarry_core::{
    driver::{operation::Transaction, Connection, Dialect, Operation, Response, Rows},
    Error, Result,
};

use std::sync::{Arc, Mutex};

#[derive(Debug)]
pub struct ConnectionOp {
    pub operation: Operation,

    /// `None` when the operation failed.
    pub response: Option<Response>,
}

/// A connection wrapper that logs all operations for testing purposes
#[derive(Debug)]
pub struct LoggingConnection {
    /// The underlying connection that actually executes operations
    inner: Box<dyn Connection>,

    /// Log of all operations executed through this connection
    ops_log: Arc<Mutex<Vec<ConnectionOp>>>,
}

impl LoggingConnection {
    pub fn new(inner: impl Connection + 'static) -> Self {
        Self {
            inner: Box::new(inner),
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<ConnectionOp>>> {
        self.ops_log.clone()
    }
}

impl Connection for LoggingConnection {
    fn dialect(&self) -> Dialect {
        self.inner.dialect()
    }

    fn exec(&mut self, operation: Operation) -> Result<Response> {
        let operation_clone = operation.clone();

        let res = self.inner.exec(operation);

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(ConnectionOp {
                operation: operation_clone,
                response: res.as_ref().ok().map(duplicate_response),
            });

        res
    }

    fn last_insert_id(&mut self, sequence: Option<&str>) -> Result<String> {
        self.inner.last_insert_id(sequence)
    }
}

fn duplicate_response(response: &Response) -> Response {
    match &response.rows {
        Rows::Count(count) => Response::count(*count),
        Rows::Values(rows) => Response::values(rows.clone()),
    }
}

/// A connection wrapper that fails the n-th parameterized statement (counted
/// from 1) with a driver error. Every other operation is passed through.
#[derive(Debug)]
pub struct FailingConnection {
    inner: Box<dyn Connection>,
    fail_at: usize,
    seen: usize,

    /// Fail the next COMMIT, once.
    fail_commit: bool,
}

impl FailingConnection {
    pub fn new(inner: impl Connection + 'static, fail_at: usize) -> Self {
        Self {
            inner: Box::new(inner),
            fail_at,
            seen: 0,
            fail_commit: false,
        }
    }

    /// Fails the first COMMIT without forwarding it. Statements are not
    /// failed.
    pub fn failing_commit(inner: impl Connection + 'static) -> Self {
        Self {
            fail_commit: true,
            ..Self::new(inner, 0)
        }
    }
}

impl Connection for FailingConnection {
    fn dialect(&self) -> Dialect {
        self.inner.dialect()
    }

    fn exec(&mut self, operation: Operation) -> Result<Response> {
        if self.fail_commit && matches!(operation, Operation::Transaction(Transaction::Commit)) {
            self.fail_commit = false;
            return Err(Error::driver_operation_failed(std::io::Error::other(
                "injected commit failure",
            )));
        }

        if operation.is_query_sql() {
            self.seen += 1;

            if self.seen == self.fail_at {
                return Err(Error::driver_operation_failed(std::io::Error::other(
                    "injected failure",
                )));
            }
        }

        self.inner.exec(operation)
    }

    fn last_insert_id(&mut self, sequence: Option<&str>) -> Result<String> {
        self.inner.last_insert_id(sequence)
    }
}
