mod exec_log;
pub use exec_log::ExecLog;

mod logging_connection;
pub use logging_connection::{ConnectionOp, FailingConnection, LoggingConnection};

pub mod models;

use quarry::Db;
use quarry_driver_sqlite::Connection;

use std::sync::Once;

/// Installs a `tracing` subscriber once per test binary. Output is
/// controlled with `RUST_LOG`.
pub fn init_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// An in-memory SQLite database with the test schema, wrapped in a logging
/// connection. The log starts empty.
pub fn setup() -> (Db, ExecLog) {
    let connection = Connection::in_memory().expect("open in-memory database");
    setup_with(connection)
}

/// Like [`setup`], but the `fail_at`-th parameterized statement executed
/// after the schema is created fails.
pub fn setup_failing(fail_at: usize) -> (Db, ExecLog) {
    let connection = Connection::in_memory().expect("open in-memory database");
    setup_with(FailingConnection::new(connection, fail_at))
}

/// Like [`setup`], but the first COMMIT fails.
pub fn setup_failing_commit() -> (Db, ExecLog) {
    let connection = Connection::in_memory().expect("open in-memory database");
    setup_with(FailingConnection::failing_commit(connection))
}

fn setup_with(connection: impl quarry_core::Connection + 'static) -> (Db, ExecLog) {
    init_tracing();

    let connection = LoggingConnection::new(connection);
    let log = ExecLog::new(connection.ops_log_handle());

    let db = Db::new(connection);
    models::create_schema(&db).expect("create schema");
    log.clear();

    (db, log)
}
