//! The entities shared by the integration tests: users write posts, posts
//! collect comments.

use quarry::{
    stmt::{Constraint, ForeignKey, ReferentialAction, Type},
    Attributes, Db, Entity, EntityMap, Filtered, RelationCache, Relations, Result,
};

use std::sync::OnceLock;

macro_rules! entity_state {
    () => {
        fn attributes(&self) -> &Attributes {
            &self.attributes
        }

        fn attributes_mut(&mut self) -> &mut Attributes {
            &mut self.attributes
        }

        fn relation_cache(&self) -> &RelationCache {
            &self.relations
        }
    };
}

#[derive(Debug, Default)]
pub struct User {
    attributes: Attributes,
    relations: RelationCache,
}

impl User {
    pub fn new(email: &str) -> User {
        let mut user = User::default();
        user.set("uuid", format!("uuid-{email}"));
        user.set("email", email);
        user
    }
}

impl Entity for User {
    fn entity_map() -> &'static EntityMap {
        static MAP: OnceLock<EntityMap> = OnceLock::new();
        MAP.get_or_init(|| EntityMap::new("users", ["id"], ["uuid", "email"]))
    }

    fn populate(attributes: Attributes) -> Result<Self> {
        Ok(User {
            attributes,
            relations: RelationCache::new(),
        })
    }

    fn relations() -> Relations<Self> {
        Relations::<Self>::new()
            .add("posts", |user, _| user.has_many::<Post>("user_id", "id"))
            .add("latest_post", |user, _| {
                user.has_one::<Post>("user_id", "id")
                    .order_by(["posts.id desc"])
            })
            .add("posts_titled", |user, args| {
                let mut posts = user.has_many::<Post>("user_id", "id");
                if let Some(title) = args.first() {
                    posts.filter_eq("posts.title", title.clone());
                }
                posts
            })
            .add("comments", |user, _| {
                user.has_many::<Post>("user_id", "id")
                    .has_many::<Comment>("post_id", "id")
            })
    }

    fn hidden() -> &'static [&'static str] {
        &["uuid"]
    }

    entity_state!();
}

#[derive(Debug, Default)]
pub struct Post {
    attributes: Attributes,
    relations: RelationCache,
}

impl Post {
    pub fn new(user_id: i64, title: &str) -> Post {
        let mut post = Post::default();
        post.set("userId", user_id);
        post.set("title", title);
        post
    }
}

impl Entity for Post {
    fn entity_map() -> &'static EntityMap {
        static MAP: OnceLock<EntityMap> = OnceLock::new();
        MAP.get_or_init(|| {
            EntityMap::new(
                "posts",
                ["id"],
                [("user_id", "userId"), ("title", "title")],
            )
        })
    }

    fn populate(attributes: Attributes) -> Result<Self> {
        Ok(Post {
            attributes,
            relations: RelationCache::new(),
        })
    }

    fn relations() -> Relations<Self> {
        Relations::<Self>::new()
            .add("user", |post, _| post.belongs_to_one::<User>("user_id", "id"))
            .add("comments", |post, _| post.has_many::<Comment>("post_id", "id"))
    }

    entity_state!();
}

#[derive(Debug, Default)]
pub struct Comment {
    attributes: Attributes,
    relations: RelationCache,
}

impl Comment {
    pub fn new(post_id: i64, body: &str) -> Comment {
        let mut comment = Comment::default();
        comment.set("post_id", post_id);
        comment.set("body", body);
        comment
    }
}

impl Entity for Comment {
    fn entity_map() -> &'static EntityMap {
        static MAP: OnceLock<EntityMap> = OnceLock::new();
        MAP.get_or_init(|| EntityMap::new("comments", ["id"], ["post_id", "body"]))
    }

    fn populate(attributes: Attributes) -> Result<Self> {
        Ok(Comment {
            attributes,
            relations: RelationCache::new(),
        })
    }

    fn relations() -> Relations<Self> {
        Relations::<Self>::new()
            .add("post", |comment, _| comment.belongs_to_one::<Post>("post_id", "id"))
            // The author of the post the comment is on.
            .add("author", |comment, _| {
                comment
                    .belongs_to_one::<Post>("post_id", "id")
                    .belongs_to_one::<User>("user_id", "id")
            })
    }

    fn visible() -> &'static [&'static str] {
        &["id", "body", "post"]
    }

    entity_state!();
}

/// Creates the `users`, `posts` and `comments` tables.
pub fn create_schema(db: &Db) -> Result<()> {
    let mut users = db.create_table("users");
    users.column("id", Type::integer()).auto_increment().primary_key();
    users.column("uuid", Type::char(36));
    users.column("email", Type::varchar(255));
    users.execute()?;

    let mut posts = db.create_table("posts");
    posts.column("id", Type::integer()).auto_increment().primary_key();
    posts.column("user_id", Type::integer());
    posts.column("title", Type::varchar(255));
    posts.constraint(
        ForeignKey::new(["user_id"], "users", ["id"]).on_delete(ReferentialAction::Cascade),
    );
    posts.execute()?;

    let mut comments = db.create_table("comments");
    comments.column("id", Type::integer()).auto_increment().primary_key();
    comments.column("post_id", Type::integer());
    comments.column("body", Type::text());
    comments.constraint(Constraint::index(None, ["post_id"]));
    comments.execute()?;

    Ok(())
}
