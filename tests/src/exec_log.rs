use crate::logging_connection::ConnectionOp;

use quarry_core::driver::{operation::Transaction, Operation};

use std::sync::{Arc, Mutex};

/// A wrapper around the operations log that provides a clean API for tests
#[derive(Clone)]
pub struct ExecLog {
    ops: Arc<Mutex<Vec<ConnectionOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<ConnectionOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Count operations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| predicate(&op.operation))
            .count()
    }

    /// Number of parameterized statements sent, failed ones included
    pub fn query_count(&self) -> usize {
        self.count(Operation::is_query_sql)
    }

    /// The SQL text of every parameterized statement, in order
    pub fn queries(&self) -> Vec<String> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match &op.operation {
                Operation::QuerySql(query) => Some(query.sql.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of statements whose SQL starts with `prefix`
    pub fn statements_starting_with(&self, prefix: &str) -> usize {
        self.queries()
            .iter()
            .filter(|sql| sql.starts_with(prefix))
            .count()
    }

    /// The transaction operations, in order
    pub fn transactions(&self) -> Vec<Transaction> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match op.operation {
                Operation::Transaction(tx) => Some(tx),
                _ => None,
            })
            .collect()
    }

    /// Number of operations the connection rejected
    pub fn failures(&self) -> usize {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| op.response.is_none())
            .count()
    }

    /// Clear the log
    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }

    /// Remove and return the first operation from the log
    pub fn pop(&self) -> Option<Operation> {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            None
        } else {
            Some(ops.remove(0).operation)
        }
    }
}
