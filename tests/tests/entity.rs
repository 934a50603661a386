use pretty_assertions::assert_eq;
use quarry::{Entity, Filtered, SelectBuilder, Value};
use serde_json::json;
use tests::{
    models::{Comment, Post, User},
    setup,
};

#[test]
fn insert_reads_back_the_generated_id() {
    let (db, log) = setup();

    let mut user = User::new("alice@example.com");
    assert_eq!(user.insert(&db).unwrap(), 1);
    assert_eq!(user.get::<i64>("id").unwrap(), 1);

    let mut other = User::new("bob@example.com");
    other.insert(&db).unwrap();
    assert_eq!(other.get::<i64>("id").unwrap(), 2);

    assert_eq!(
        log.queries(),
        [
            "INSERT INTO \"users\" (\"uuid\", \"email\") VALUES (?, ?)",
            "INSERT INTO \"users\" (\"uuid\", \"email\") VALUES (?, ?)",
        ]
    );
}

#[test]
fn columns_are_renamed_to_properties() {
    let (db, log) = setup();

    let mut user = User::new("alice@example.com");
    user.insert(&db).unwrap();
    let mut post = Post::new(1, "hello");
    post.insert(&db).unwrap();
    log.clear();

    let post = Post::find(&db, 1).unwrap().unwrap();
    assert_eq!(post.get::<i64>("userId").unwrap(), 1);
    assert!(post.attributes().get("user_id").is_none());

    assert_eq!(
        log.queries(),
        ["SELECT \"id\", \"user_id\", \"title\" FROM \"posts\" WHERE \"id\" = ? LIMIT 1"]
    );
}

#[test]
fn find_missing_is_none() {
    let (db, _log) = setup();

    assert!(User::find(&db, 42).unwrap().is_none());
}

#[test]
fn find_by_key_checks_the_key_width() {
    let (db, log) = setup();

    let err = User::find_by_key(&db, &[Value::from(1), Value::from(2)]).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(log.is_empty());
}

#[test]
fn query_loads_many() {
    let (db, _log) = setup();

    for email in ["a@example.com", "b@example.com", "c@example.com"] {
        User::new(email).insert(&db).unwrap();
    }

    let mut query = User::query(&db);
    query.filter_eq("email", "b@example.com").or_filter_eq("email", "c@example.com");
    query.order_by(["id desc"]);

    let users: Vec<User> = query.load_all().unwrap();
    let emails: Vec<String> = users.iter().map(|user| user.get("email").unwrap()).collect();
    assert_eq!(emails, ["c@example.com", "b@example.com"]);
}

#[test]
fn update_writes_non_key_properties() {
    let (db, log) = setup();

    let mut user = User::new("alice@example.com");
    user.insert(&db).unwrap();
    log.clear();

    user.set("email", "alice@example.org");
    assert_eq!(user.update(&db).unwrap(), 1);

    assert_eq!(
        log.queries(),
        ["UPDATE \"users\" SET \"uuid\" = :uuid, \"email\" = :email WHERE \"id\" = ?"]
    );

    let reloaded = User::find(&db, 1).unwrap().unwrap();
    assert_eq!(reloaded.get::<String>("email").unwrap(), "alice@example.org");
}

#[test]
fn update_and_delete_need_a_key() {
    let (db, log) = setup();

    let user = User::new("alice@example.com");
    assert!(user.update(&db).unwrap_err().is_invalid_argument());
    assert!(user.delete(&db).unwrap_err().is_invalid_argument());
    assert!(log.is_empty());
}

#[test]
fn delete_removes_the_row() {
    let (db, _log) = setup();

    let mut user = User::new("alice@example.com");
    user.insert(&db).unwrap();

    assert_eq!(user.delete(&db).unwrap(), 1);
    assert!(User::find(&db, 1).unwrap().is_none());
    assert_eq!(user.delete(&db).unwrap(), 0);
}

#[test]
fn to_json_applies_hidden_and_visible() {
    let (db, _log) = setup();

    let mut user = User::new("alice@example.com");
    user.insert(&db).unwrap();
    assert_eq!(
        user.to_json(),
        json!({ "id": 1, "email": "alice@example.com" })
    );

    Post::new(1, "hello").insert(&db).unwrap();
    let mut comment = Comment::new(1, "nice");
    comment.insert(&db).unwrap();

    // `post_id` is not visible, and neither is an unresolved relation
    assert_eq!(comment.to_json(), json!({ "id": 1, "body": "nice" }));

    comment.relation("post", &[], &db).unwrap();
    comment.relation("author", &[], &db).unwrap();
    assert_eq!(
        comment.to_json(),
        json!({
            "id": 1,
            "body": "nice",
            "post": { "id": 1, "userId": 1, "title": "hello" },
        })
    );
}

#[test]
fn to_json_of_many_relation_is_an_array() {
    let (db, _log) = setup();

    let mut user = User::new("alice@example.com");
    user.insert(&db).unwrap();
    Post::new(1, "first").insert(&db).unwrap();
    Post::new(1, "second").insert(&db).unwrap();

    let posts = user.relation("posts", &[], &db).unwrap();
    assert_eq!(
        posts.to_json(),
        json!([
            { "id": 1, "userId": 1, "title": "first" },
            { "id": 2, "userId": 1, "title": "second" },
        ])
    );
}
