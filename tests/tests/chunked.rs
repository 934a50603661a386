use pretty_assertions::assert_eq;
use quarry::{driver::operation::Transaction, SelectBuilder, Value};
use tests::{setup, setup_failing};

fn user_rows(n: usize) -> Vec<[Value; 2]> {
    (0..n)
        .map(|i| [Value::from(format!("uuid-{i}")), Value::from(format!("user{i}@example.com"))])
        .collect()
}

#[test]
fn rows_are_split_into_chunks_in_one_transaction() {
    let (db, log) = setup();

    let mut insert = db.insert();
    insert.into_table("users").columns(["uuid", "email"]);

    assert_eq!(insert.chunked(user_rows(1001), 500).unwrap(), 1001);

    assert_eq!(log.statements_starting_with("INSERT INTO \"users\""), 3);
    assert_eq!(log.transactions(), [Transaction::Start, Transaction::Commit]);
    assert!(insert.stmt().rows.is_empty());

    assert_eq!(db.select().from("users").count().unwrap(), 1001);
}

#[test]
fn pending_rows_are_inserted_first() {
    let (db, log) = setup();

    let mut insert = db.insert();
    insert
        .into_table("users")
        .columns(["uuid", "email"])
        .values(["first", "first@example.com"]);

    assert_eq!(insert.chunked(user_rows(3), 2).unwrap(), 4);
    assert_eq!(log.query_count(), 2);

    let mut select = db.select();
    select.from("users").order_by(["id"]);
    let first = select.fetch_one().unwrap().unwrap();
    assert_eq!(first.get("uuid"), Some(&Value::from("first")));
}

#[test]
fn failed_chunk_rolls_back_every_chunk() {
    let (db, log) = setup_failing(2);

    let mut insert = db.insert();
    insert.into_table("users").columns(["uuid", "email"]);

    let err = insert.chunked(user_rows(1001), 500).unwrap_err();
    assert!(err.is_statement_failed());
    assert!(err.is_driver_operation_failed());

    assert_eq!(log.query_count(), 2);
    assert_eq!(log.failures(), 1);
    assert_eq!(log.transactions(), [Transaction::Start, Transaction::Rollback]);
    assert!(!db.in_transaction());

    assert_eq!(db.select().from("users").count().unwrap(), 0);
}

#[test]
fn zero_chunk_size_is_rejected() {
    let (db, log) = setup();

    let mut insert = db.insert();
    insert.into_table("users").columns(["uuid", "email"]);

    let err = insert.chunked(user_rows(3), 0).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(log.is_empty());
}

#[test]
fn nothing_to_insert_sends_nothing() {
    let (db, log) = setup();

    let mut insert = db.insert();
    insert.into_table("users").columns(["uuid", "email"]);

    assert_eq!(insert.chunked(Vec::<[Value; 2]>::new(), 10).unwrap(), 0);
    assert!(log.is_empty());
}
