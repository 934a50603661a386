use pretty_assertions::assert_eq;
use quarry::{
    driver::operation::Transaction,
    stmt::{ColumnDef, Selection, Type},
    BinaryOp, Db, Filtered, SelectBuilder, Value,
};
use tests::{setup, setup_failing_commit};

fn insert_users(db: &Db, emails: &[&str]) {
    let mut insert = db.insert();
    insert.into_table("users").columns(["uuid", "email"]);
    for email in emails {
        insert.values([format!("uuid-{email}"), email.to_string()]);
    }
    insert.execute().unwrap();
}

#[test]
fn insert_then_select() {
    let (db, log) = setup();

    let mut insert = db.insert();
    insert
        .into_table("users")
        .columns(["uuid", "email"])
        .values(["u1", "a@example.com"])
        .values(["u2", "b@example.com"]);

    assert_eq!(
        insert.to_sql().unwrap(),
        "INSERT INTO \"users\" (\"uuid\", \"email\") VALUES (?, ?), (?, ?)"
    );
    assert_eq!(insert.execute().unwrap(), 2);

    let mut select = db.select();
    select
        .columns(["email"])
        .from("users")
        .filter_eq("uuid", "u2");

    let rows = select.fetch_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("email"), Some(&Value::from("b@example.com")));

    assert_eq!(
        log.queries(),
        [
            "INSERT INTO \"users\" (\"uuid\", \"email\") VALUES (?, ?), (?, ?)",
            "SELECT \"email\" FROM \"users\" WHERE \"uuid\" = ?",
        ]
    );
}

#[test]
fn insert_clears_rows_after_execute() {
    let (db, _log) = setup();

    let mut insert = db.insert();
    insert
        .into_table("users")
        .columns(["uuid", "email"])
        .values(["u1", "a@example.com"]);
    insert.execute().unwrap();

    assert!(insert.stmt().rows.is_empty());
    assert_eq!(insert.stmt().columns.len(), 2);

    insert.values(["u2", "b@example.com"]);
    assert_eq!(insert.execute().unwrap(), 1);
    assert_eq!(db.select().from("users").count().unwrap(), 2);
}

#[test]
fn fetch_one_limits_to_one_row() {
    let (db, log) = setup();
    insert_users(&db, &["a@example.com", "b@example.com"]);
    log.clear();

    let mut select = db.select();
    select.from("users").order_by(["id desc"]);

    let row = select.fetch_one().unwrap().unwrap();
    assert_eq!(row.get("email"), Some(&Value::from("b@example.com")));
    assert_eq!(
        log.queries(),
        ["SELECT * FROM \"users\" ORDER BY \"id\" DESC LIMIT 1"]
    );

    let mut none = db.select();
    none.from("users").filter_eq("email", "nobody@example.com");
    assert!(none.fetch_one().unwrap().is_none());
}

#[test]
fn count_ignores_order_and_limit() {
    let (db, log) = setup();
    insert_users(&db, &["a@example.com", "b@example.com", "c@example.com"]);
    log.clear();

    let mut select = db.select();
    select
        .columns(["email"])
        .from("users")
        .filter("id", BinaryOp::Gt, 1)
        .order_by(["email"])
        .limit(1)
        .offset(1);

    assert_eq!(select.count().unwrap(), 2);
    assert_eq!(
        log.queries(),
        ["SELECT COUNT(*) FROM \"users\" WHERE \"id\" > ?"]
    );

    // The builder itself is untouched
    assert_eq!(select.stmt().limit, Some(1));
    assert_eq!(select.fetch_all().unwrap().len(), 1);
}

#[test]
fn count_without_matches_is_zero() {
    let (db, _log) = setup();

    let mut select = db.select();
    select.from("users").filter_eq("email", "nobody@example.com");
    assert_eq!(select.count().unwrap(), 0);

    let mut grouped = db.select();
    grouped
        .columns([Selection::column("email")])
        .from("users")
        .group_by(["email"]);
    assert_eq!(grouped.count().unwrap(), 0);
}

#[test]
fn update_with_named_placeholders() {
    let (db, log) = setup();
    insert_users(&db, &["a@example.com", "b@example.com"]);
    log.clear();

    let mut update = db.update();
    update
        .table("users")
        .set("email", "z@example.com")
        .set_raw("uuid", "upper(uuid)")
        .filter_eq("email", "a@example.com");

    let (sql, bindings) = update.to_sql_with_bindings().unwrap();
    assert_eq!(
        sql,
        "UPDATE \"users\" SET \"email\" = :email, \"uuid\" = upper(uuid) WHERE \"email\" = ?"
    );
    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings[0].name.as_deref(), Some("email"));
    assert!(!bindings[1].is_named());

    assert_eq!(update.execute().unwrap(), 1);
    assert!(update.stmt().assignments.is_empty());
    assert!(!update.stmt().filter.is_empty());

    let mut select = db.select();
    select.from("users").filter_eq("email", "z@example.com");
    let row = select.fetch_one().unwrap().unwrap();
    assert_eq!(row.get("uuid"), Some(&Value::from("UUID-A@EXAMPLE.COM")));
}

#[test]
fn delete_returns_affected_rows() {
    let (db, _log) = setup();
    insert_users(&db, &["a@example.com", "b@example.com", "c@example.com"]);

    let mut delete = db.delete();
    delete
        .from("users")
        .filter_in("email", ["a@example.com", "c@example.com"]);

    assert_eq!(
        delete.to_sql().unwrap(),
        "DELETE FROM \"users\" WHERE \"email\" IN (?, ?)"
    );
    assert_eq!(delete.execute().unwrap(), 2);
    assert_eq!(db.select().from("users").count().unwrap(), 1);
}

#[test]
fn failed_statement_carries_sql_and_bindings() {
    let (db, _log) = setup();

    let mut select = db.select();
    select.from("missing").filter_eq("id", 7);

    let err = select.fetch_all().unwrap_err();
    assert!(err.is_statement_failed());
    assert!(err.is_driver_operation_failed());
    assert_eq!(
        err.failed_sql(),
        Some("SELECT * FROM \"missing\" WHERE \"id\" = ?")
    );
    assert_eq!(err.failed_bindings(), Some(&[Value::I64(7)][..]));
}

#[test]
fn transaction_commits_on_success() {
    let (db, log) = setup();

    db.transaction(|db| {
        insert_users(db, &["a@example.com"]);
        assert!(db.in_transaction());
        Ok(())
    })
    .unwrap();

    assert!(!db.in_transaction());
    assert_eq!(log.transactions(), [Transaction::Start, Transaction::Commit]);
    assert_eq!(db.select().from("users").count().unwrap(), 1);
}

#[test]
fn transaction_rolls_back_on_error() {
    let (db, log) = setup();

    let err = db
        .transaction(|db| {
            insert_users(db, &["a@example.com"]);
            db.select().from("missing").fetch_all()
        })
        .unwrap_err();

    assert!(err.is_statement_failed());
    assert_eq!(log.transactions(), [Transaction::Start, Transaction::Rollback]);
    assert_eq!(db.select().from("users").count().unwrap(), 0);
}

#[test]
fn nested_transaction_joins_the_outer_one() {
    let (db, log) = setup();

    db.transaction(|db| {
        db.transaction(|db| {
            insert_users(db, &["a@example.com"]);
            Ok(())
        })
    })
    .unwrap();

    assert_eq!(log.transactions(), [Transaction::Start, Transaction::Commit]);
}

#[test]
fn failed_commit_rolls_back_and_leaves_the_transaction() {
    let (db, log) = setup_failing_commit();

    let err = db
        .transaction(|db| {
            insert_users(db, &["a@example.com"]);
            Ok(())
        })
        .unwrap_err();

    assert!(err.is_driver_operation_failed());
    assert!(!db.in_transaction());
    assert_eq!(
        log.transactions(),
        [Transaction::Start, Transaction::Commit, Transaction::Rollback]
    );
    assert_eq!(db.select().from("users").count().unwrap(), 0);

    log.clear();
    db.transaction(|db| {
        insert_users(db, &["b@example.com"]);
        Ok(())
    })
    .unwrap();

    assert_eq!(log.transactions(), [Transaction::Start, Transaction::Commit]);
    assert_eq!(db.select().from("users").count().unwrap(), 1);
}

#[test]
fn sqlite_alter_skips_unsupported_alterations() {
    let (db, log) = setup();

    let mut alter = db.alter_table("users");
    alter.drop_primary_key().drop_index("users_email");
    assert_eq!(alter.to_sql().unwrap(), "");
    assert_eq!(alter.execute().unwrap(), 0);
    assert!(log.is_empty());

    let mut alter = db.alter_table("users");
    alter
        .add_column(ColumnDef::new("name", Type::varchar(100)).nullable().clone())
        .drop_primary_key();
    assert_eq!(
        alter.to_sql().unwrap(),
        "ALTER TABLE \"users\" ADD COLUMN \"name\" TEXT"
    );
    alter.execute().unwrap();
    assert_eq!(log.len(), 1);
}

#[test]
fn truncate_is_unsupported_on_sqlite() {
    let (db, log) = setup();

    let err = db.truncate_table("users").execute().unwrap_err();
    assert!(err.is_unsupported_feature());
    assert!(log.is_empty());
}

#[test]
fn drop_and_index_statements() {
    let (db, _log) = setup();

    let mut index = db.create_index("users_email", "users");
    index.column("email").unique();
    assert_eq!(
        index.to_sql().unwrap(),
        "CREATE UNIQUE INDEX \"users_email\" ON \"users\" (\"email\")"
    );
    index.execute().unwrap();

    insert_users(&db, &["a@example.com"]);
    let mut duplicate = db.insert();
    duplicate
        .into_table("users")
        .columns(["uuid", "email"])
        .values(["other", "a@example.com"]);
    assert!(duplicate.execute().unwrap_err().is_statement_failed());

    db.drop_index("users_email").execute().unwrap();

    let mut drop = db.drop_table();
    drop.table("comments").if_exists();
    assert_eq!(drop.to_sql().unwrap(), "DROP TABLE IF EXISTS \"comments\"");
    drop.execute().unwrap();
}

#[test]
fn schema_options_chain_into_execute() {
    let (db, _log) = setup();

    let mut tags = db.create_table("tags");
    tags.column("id", Type::integer()).primary_key();
    tags.if_not_exists()
        .engine("InnoDB")
        .comment("labels")
        .execute()
        .unwrap();
    assert_eq!(db.select().from("tags").count().unwrap(), 0);

    db.alter_table("tags")
        .add_column(ColumnDef::new("label", Type::text()))
        .execute()
        .unwrap();
    db.create_index("tags_label", "tags")
        .column("label")
        .unique()
        .execute()
        .unwrap();
    db.drop_index("tags_label").if_exists().execute().unwrap();
    db.drop_table().table("tags").if_exists().execute().unwrap();

    assert!(db.select().from("tags").count().unwrap_err().is_statement_failed());
}

#[test]
fn connect_checks_the_url() {
    let err = Db::connect("postgres://localhost/app").unwrap_err();
    assert!(err.is_invalid_connection_url());

    let err = Db::connect("sqlite:").unwrap_err();
    assert!(err.is_invalid_connection_url());

    let db = Db::connect("sqlite::memory:").unwrap();
    assert_eq!(db.exec_sql("CREATE TABLE t (id INTEGER)").unwrap(), 0);
}
