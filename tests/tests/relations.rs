use pretty_assertions::assert_eq;
use quarry::{Db, Entity, Filtered, Related, Value};
use quarry_core::stmt::Bind;
use tests::{
    models::{Comment, Post, User},
    setup,
};

fn seed(db: &Db) -> (User, Vec<Post>) {
    let mut user = User::new("alice@example.com");
    user.insert(db).unwrap();
    let user_id: i64 = user.get("id").unwrap();

    let mut posts = vec![];
    for title in ["first", "second"] {
        let mut post = Post::new(user_id, title);
        post.insert(db).unwrap();
        posts.push(post);
    }

    (user, posts)
}

#[test]
fn user_posts_end_to_end() {
    let (db, log) = setup();
    let (user, _) = seed(&db);
    assert_eq!(user.get::<i64>("id").unwrap(), 1);
    log.clear();

    let posts = user.relation("posts", &[], &db).unwrap();

    assert!(posts.is_many());
    assert_eq!(posts.len(), 2);
    for post in posts.many::<Post>() {
        assert_eq!(post.get::<i64>("userId").unwrap(), 1);
    }

    let titles: Vec<String> = posts
        .many::<Post>()
        .iter()
        .map(|post| post.get("title").unwrap())
        .collect();
    assert_eq!(titles, ["first", "second"]);

    assert_eq!(
        log.queries(),
        ["SELECT \"posts\".* FROM \"posts\" WHERE \"posts\".\"user_id\" = ?"]
    );
}

#[test]
fn relation_is_memoized_by_name() {
    let (db, log) = setup();
    let (user, _) = seed(&db);
    log.clear();

    let first = user.relation("posts", &[], &db).unwrap();
    assert_eq!(log.query_count(), 1);

    // Different arguments still return the first result
    let second = user
        .relation("posts", &[Value::from("ignored")], &db)
        .unwrap();
    assert_eq!(log.query_count(), 1);
    assert!(first.ptr_eq(&second));
}

#[test]
fn memoized_result_ignores_later_arguments() {
    let (db, log) = setup();
    let (user, _) = seed(&db);
    log.clear();

    let titled = user
        .relation("posts_titled", &[Value::from("second")], &db)
        .unwrap();
    assert_eq!(titled.len(), 1);
    assert_eq!(
        log.queries(),
        ["SELECT \"posts\".* FROM \"posts\" WHERE \"posts\".\"user_id\" = ? AND (\"posts\".\"title\" = ?)"]
    );

    let again = user
        .relation("posts_titled", &[Value::from("first")], &db)
        .unwrap();
    assert_eq!(log.query_count(), 1);
    assert_eq!(again.many::<Post>()[0].get::<String>("title").unwrap(), "second");
}

#[test]
fn refresh_relation_queries_again() {
    let (db, log) = setup();
    let (user, _) = seed(&db);
    log.clear();

    user.relation("posts", &[], &db).unwrap();
    Post::new(1, "third").insert(&db).unwrap();

    assert_eq!(user.relation("posts", &[], &db).unwrap().len(), 2);

    let dropped = user.refresh_relation("posts").unwrap();
    assert_eq!(dropped.len(), 2);
    assert!(!user.relation_cache().contains("posts"));

    assert_eq!(user.relation("posts", &[], &db).unwrap().len(), 3);
}

#[test]
fn unknown_relation_is_invalid_argument() {
    let (db, log) = setup();
    let (user, _) = seed(&db);
    log.clear();

    let err = user.relation("followers", &[], &db).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err.to_string(), "invalid argument: no relation named `followers` on `users`");
    assert!(log.is_empty());
}

#[test]
fn to_one_without_match_is_none() {
    let (db, _log) = setup();

    let mut user = User::new("nobody@example.com");
    user.insert(&db).unwrap();

    let latest = user.relation("latest_post", &[], &db).unwrap();
    assert!(latest.is_one());
    assert!(latest.is_empty());
    assert!(latest.one::<Post>().is_none());
    assert_eq!(latest.to_json(), serde_json::Value::Null);

    let posts = user.relation("posts", &[], &db).unwrap();
    assert!(posts.is_many());
    assert!(posts.is_empty());
}

#[test]
fn has_one_applies_order_and_limit() {
    let (db, log) = setup();
    let (user, _) = seed(&db);
    log.clear();

    let latest = user.relation("latest_post", &[], &db).unwrap();
    let post = latest.one::<Post>().unwrap();
    assert_eq!(post.get::<String>("title").unwrap(), "second");

    assert_eq!(
        log.queries(),
        ["SELECT \"posts\".* FROM \"posts\" WHERE \"posts\".\"user_id\" = ? ORDER BY \"posts\".\"id\" DESC LIMIT 1"]
    );
}

#[test]
fn belongs_to_reads_the_foreign_key() {
    let (db, log) = setup();
    let (_, posts) = seed(&db);
    log.clear();

    let user = posts[1].relation("user", &[], &db).unwrap();
    let user = user.one::<User>().unwrap();
    assert_eq!(user.get::<String>("email").unwrap(), "alice@example.com");

    let (sql, bindings) = posts[1]
        .belongs_to_one::<User>("user_id", "id")
        .to_sql_with_bindings(&db)
        .unwrap();
    assert_eq!(
        sql,
        "SELECT \"users\".* FROM \"users\" WHERE \"users\".\"id\" = ? LIMIT 1"
    );
    assert_eq!(bindings, [Bind::positional(Value::I64(1))]);
}

#[test]
fn has_many_through_compiles_to_one_statement() {
    let (db, log) = setup();
    let (user, posts) = seed(&db);

    for (post, body) in posts.iter().zip(["nice", "great"]) {
        Comment::new(post.get("id").unwrap(), body)
            .insert(&db)
            .unwrap();
    }

    let mut other = User::new("bob@example.com");
    other.insert(&db).unwrap();
    let mut other_post = Post::new(other.get("id").unwrap(), "elsewhere");
    other_post.insert(&db).unwrap();
    Comment::new(other_post.get("id").unwrap(), "unrelated")
        .insert(&db)
        .unwrap();
    log.clear();

    let comments = user.relation("comments", &[], &db).unwrap();
    let bodies: Vec<String> = comments
        .many::<Comment>()
        .iter()
        .map(|comment| comment.get("body").unwrap())
        .collect();
    assert_eq!(bodies, ["nice", "great"]);

    assert_eq!(
        log.queries(),
        ["SELECT \"comments\".* FROM \"comments\" WHERE \"comments\".\"post_id\" IN \
          (SELECT \"posts\".\"id\" FROM \"posts\" WHERE \"posts\".\"user_id\" = ?)"]
    );
}

#[test]
fn belongs_to_through_reaches_the_grandparent() {
    let (db, log) = setup();
    let (_, posts) = seed(&db);

    let mut comment = Comment::new(posts[0].get("id").unwrap(), "hello");
    comment.insert(&db).unwrap();
    log.clear();

    let author = comment.relation("author", &[], &db).unwrap();
    let author = author.one::<User>().unwrap();
    assert_eq!(author.get::<String>("email").unwrap(), "alice@example.com");

    assert_eq!(
        log.queries(),
        ["SELECT \"users\".* FROM \"users\" WHERE \"users\".\"id\" IN \
          (SELECT \"posts\".\"user_id\" FROM \"posts\" WHERE \"posts\".\"id\" = ?) LIMIT 1"]
    );
}

#[test]
fn limit_on_an_intermediate_hop_is_honored() {
    let (db, log) = setup();
    let (user, posts) = seed(&db);

    let mut third = Post::new(1, "third");
    third.insert(&db).unwrap();
    for (post, body) in posts.iter().chain([&third]).zip(["one", "two", "three"]) {
        Comment::new(post.get("id").unwrap(), body)
            .insert(&db)
            .unwrap();
    }
    log.clear();

    let latest = user
        .has_many::<Post>("user_id", "id")
        .alias("p")
        .order_by(["p.id desc"])
        .limit(1)
        .has_many::<Comment>("post_id", "id")
        .alias("c");

    assert_eq!(
        latest.to_sql(&db).unwrap(),
        "SELECT \"c\".* FROM \"comments\" AS \"c\" WHERE \"c\".\"post_id\" IN \
         (SELECT \"p_sub\".\"id\" FROM (SELECT \"p\".* FROM \"posts\" AS \"p\" \
         WHERE \"p\".\"user_id\" = ? ORDER BY \"p\".\"id\" DESC LIMIT 1) AS \"p_sub\")"
    );

    let comments = latest.fetch(&db).unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(
        comments.many::<Comment>()[0].get::<String>("body").unwrap(),
        "three"
    );
}

#[test]
fn order_without_limit_is_left_out_of_the_sub_select() {
    let (db, _log) = setup();
    let (user, _) = seed(&db);

    let sql = user
        .has_many::<Post>("user_id", "id")
        .order_by(["posts.id desc"])
        .has_one::<Comment>("post_id", "id")
        .to_sql(&db)
        .unwrap();

    assert_eq!(
        sql,
        "SELECT \"comments\".* FROM \"comments\" WHERE \"comments\".\"post_id\" IN \
         (SELECT \"posts\".\"id\" FROM \"posts\" WHERE \"posts\".\"user_id\" = ?) LIMIT 1"
    );
}

#[test]
fn key_is_read_when_compiled() {
    let (db, _log) = setup();

    let mut user = User::new("carol@example.com");
    user.set("id", 7);

    let mut posts = user.has_many::<Post>("user_id", "id");
    posts.filter_eq("posts.title", "draft");
    let (_, bindings) = posts.to_sql_with_bindings(&db).unwrap();
    assert_eq!(
        bindings.into_iter().map(|bind| bind.value).collect::<Vec<_>>(),
        [Value::I64(7), Value::from("draft")]
    );
}

#[test]
fn null_key_resolves_without_querying() {
    let (db, log) = setup();

    let user = User::new("dave@example.com");
    let posts = user.relation("posts", &[], &db).unwrap();

    assert!(posts.is_empty());
    assert!(matches!(posts, Related::Many(_)));
    assert_eq!(log.query_count(), 0);
}

#[test]
fn to_json_includes_resolved_relations() {
    let (db, _log) = setup();
    let (user, _) = seed(&db);

    user.relation("latest_post", &[], &db).unwrap();

    assert_eq!(
        user.to_json(),
        serde_json::json!({
            "id": 1,
            "email": "alice@example.com",
            "latest_post": { "id": 2, "userId": 1, "title": "second" },
        })
    );
}
