use pretty_assertions::assert_eq;
use quarry_core::{
    driver::{
        operation::{Operation, QuerySql, Transaction},
        Connection as _, Dialect,
    },
    stmt::{Bind, Value},
};
use quarry_driver_sqlite::{Connection, Sqlite};

fn query(sql: &str, bindings: Vec<Bind>, ret: bool) -> Operation {
    QuerySql {
        sql: sql.to_string(),
        bindings,
        ret,
    }
    .into()
}

#[test]
fn parse_connection_urls() {
    assert_eq!(Sqlite::new("sqlite::memory:").unwrap(), Sqlite::InMemory);
    assert_eq!(
        Sqlite::new("sqlite:/tmp/app.db").unwrap(),
        Sqlite::File("/tmp/app.db".into())
    );
    assert_eq!(Sqlite::InMemory.url(), "sqlite::memory:");

    let err = Sqlite::new("mysql://localhost/app").unwrap_err();
    assert!(err.is_invalid_connection_url());

    let err = Sqlite::new("not a url").unwrap_err();
    assert!(err.is_invalid_connection_url());
}

#[test]
fn missing_database_file_fails_at_connect() {
    let path = std::env::temp_dir().join(format!("quarry-missing-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let err = Sqlite::open(&path).connect().unwrap_err();
    assert!(err.is_driver_operation_failed());
    assert!(!path.exists());

    let conn = Sqlite::create(&path).unwrap();
    assert_eq!(conn.dialect(), Dialect::Sqlite);
    assert!(path.exists());

    drop(conn);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn exec_query_and_count() {
    let mut conn = Connection::in_memory().unwrap();

    conn.exec(Operation::ExecSql(
        "CREATE TABLE \"users\" (\"id\" INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL, \"email\" TEXT NOT NULL, \"score\" REAL)"
            .to_string(),
    ))
    .unwrap();

    let count = conn
        .exec(query(
            "INSERT INTO \"users\" (\"email\", \"score\") VALUES (?, ?), (?, ?)",
            vec![
                Bind::positional("a@example.com".into()),
                Bind::positional(1.5.into()),
                Bind::positional("b@example.com".into()),
                Bind::positional(Value::Null),
            ],
            false,
        ))
        .unwrap()
        .into_count()
        .unwrap();
    assert_eq!(count, 2);
    assert_eq!(conn.last_insert_id(None).unwrap(), "2");

    // Named SET placeholder followed by a positional WHERE placeholder
    let count = conn
        .exec(query(
            "UPDATE \"users\" SET \"email\" = :email WHERE \"id\" = ?",
            vec![
                Bind::named("email", "c@example.com".into()),
                Bind::positional(2.into()),
            ],
            false,
        ))
        .unwrap()
        .into_count()
        .unwrap();
    assert_eq!(count, 1);

    let rows = conn
        .exec(query(
            "SELECT * FROM \"users\" ORDER BY \"id\" ASC",
            vec![],
            true,
        ))
        .unwrap()
        .into_rows()
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("email"), Some(&Value::from("a@example.com")));
    assert_eq!(rows[0].get("score"), Some(&Value::F64(1.5)));
    assert_eq!(rows[1].get("email"), Some(&Value::from("c@example.com")));
    assert_eq!(rows[1].get("score"), Some(&Value::Null));
}

#[test]
fn transactions_roll_back() {
    let mut conn = Connection::in_memory().unwrap();

    conn.exec(Operation::ExecSql("CREATE TABLE t (v INTEGER)".to_string()))
        .unwrap();
    conn.exec(Transaction::Start.into()).unwrap();
    conn.exec(query(
        "INSERT INTO t (v) VALUES (?)",
        vec![Bind::positional(1.into())],
        false,
    ))
    .unwrap();
    conn.exec(Transaction::Rollback.into()).unwrap();

    let rows = conn
        .exec(query("SELECT COUNT(*) FROM t", vec![], true))
        .unwrap()
        .into_rows()
        .unwrap();
    assert_eq!(rows[0].first(), Some(&Value::I64(0)));
}

#[test]
fn driver_errors_are_surfaced() {
    let mut conn = Connection::in_memory().unwrap();

    let err = conn
        .exec(query("SELECT * FROM missing", vec![], true))
        .unwrap_err();
    assert!(err.is_driver_operation_failed());
    assert!(err.to_string().contains("no such table: missing"));
}

#[test]
fn ddl_after_dml_reports_no_changes() {
    let mut conn = Connection::in_memory().unwrap();

    conn.exec(Operation::ExecSql("CREATE TABLE t (v INTEGER)".to_string()))
        .unwrap();
    let count = conn
        .exec(query(
            "INSERT INTO t (v) VALUES (?), (?), (?)",
            vec![
                Bind::positional(1.into()),
                Bind::positional(2.into()),
                Bind::positional(3.into()),
            ],
            false,
        ))
        .unwrap()
        .into_count()
        .unwrap();
    assert_eq!(count, 3);

    let count = conn
        .exec(Operation::ExecSql("CREATE INDEX t_v ON t (v)".to_string()))
        .unwrap()
        .into_count()
        .unwrap();
    assert_eq!(count, 0);

    let count = conn
        .exec(Operation::ExecSql("DELETE FROM t WHERE v > 1".to_string()))
        .unwrap()
        .into_count()
        .unwrap();
    assert_eq!(count, 2);
}
