mod attributes;
pub use attributes::Attributes;

mod cache;
pub use cache::RelationCache;

mod map;
pub use map::{ColumnMapping, EntityMap};

use crate::{
    query,
    relation::{Cardinality, Related, Relations, Relationship},
    stmt::{Filtered, SelectBuilder, Selection, Value},
    Db, Result,
};

use quarry_core::{
    stmt::{FromValue, Row},
    Error,
};

use std::any::Any;

/// A type whose instances are rows of one table.
///
/// Implementors supply the static [`EntityMap`], a `populate` factory and
/// access to the instance's attributes and relationship cache. Persistence,
/// serialization and relationship resolution are provided.
///
/// ```
/// use quarry::{Attributes, Entity, EntityMap, RelationCache, Relations, Result};
/// use std::sync::OnceLock;
///
/// #[derive(Debug)]
/// struct User {
///     attributes: Attributes,
///     relations: RelationCache,
/// }
///
/// #[derive(Debug)]
/// struct Post {
///     attributes: Attributes,
///     relations: RelationCache,
/// }
///
/// impl Entity for User {
///     fn entity_map() -> &'static EntityMap {
///         static MAP: OnceLock<EntityMap> = OnceLock::new();
///         MAP.get_or_init(|| EntityMap::new("users", ["id"], ["uuid", "email"]))
///     }
///
///     fn populate(attributes: Attributes) -> Result<Self> {
///         Ok(User { attributes, relations: RelationCache::new() })
///     }
///
///     fn attributes(&self) -> &Attributes {
///         &self.attributes
///     }
///
///     fn attributes_mut(&mut self) -> &mut Attributes {
///         &mut self.attributes
///     }
///
///     fn relation_cache(&self) -> &RelationCache {
///         &self.relations
///     }
///
///     fn relations() -> Relations<Self> {
///         Relations::<Self>::new()
///             .add("posts", |user, _| user.has_many::<Post>("user_id", "id"))
///     }
/// }
///
/// impl Entity for Post {
///     fn entity_map() -> &'static EntityMap {
///         static MAP: OnceLock<EntityMap> = OnceLock::new();
///         MAP.get_or_init(|| EntityMap::new("posts", ["id"], ["user_id", "title"]))
///     }
///
///     fn populate(attributes: Attributes) -> Result<Self> {
///         Ok(Post { attributes, relations: RelationCache::new() })
///     }
///
///     fn attributes(&self) -> &Attributes {
///         &self.attributes
///     }
///
///     fn attributes_mut(&mut self) -> &mut Attributes {
///         &mut self.attributes
///     }
///
///     fn relation_cache(&self) -> &RelationCache {
///         &self.relations
///     }
/// }
/// ```
pub trait Entity: Sized + 'static {
    fn entity_map() -> &'static EntityMap;

    /// Builds an instance from properties already renamed through the
    /// entity map.
    fn populate(attributes: Attributes) -> Result<Self>;

    fn attributes(&self) -> &Attributes;

    fn attributes_mut(&mut self) -> &mut Attributes;

    fn relation_cache(&self) -> &RelationCache;

    /// The relationships [`relation`](Self::relation) can resolve, by name.
    fn relations() -> Relations<Self> {
        Relations::new()
    }

    /// Properties left out of [`to_json`](Self::to_json).
    fn hidden() -> &'static [&'static str] {
        &[]
    }

    /// When non-empty, the only properties [`to_json`](Self::to_json)
    /// includes.
    fn visible() -> &'static [&'static str] {
        &[]
    }

    fn from_row(row: Row) -> Result<Self> {
        Self::populate(Attributes::from_row(row, Self::entity_map()))
    }

    fn get<T: FromValue>(&self, property: &str) -> Result<T> {
        self.attributes().get_as(property)
    }

    fn set(&mut self, property: &str, value: impl Into<Value>) {
        self.attributes_mut().set(property, value);
    }

    /// A SELECT of the mapped columns of every row of the table.
    fn query(db: &Db) -> query::Select<'_> {
        let map = Self::entity_map();

        let mut select = db.select();
        select
            .columns(map.column_map().map(|mapping| Selection::column(mapping.column.as_str())))
            .from(map.table_name());
        select
    }

    /// Loads the row whose single-column primary key is `key`.
    fn find(db: &Db, key: impl Into<Value>) -> Result<Option<Self>> {
        Self::find_by_key(db, &[key.into()])
    }

    /// Loads a row by its full primary key, values in key column order.
    fn find_by_key(db: &Db, key: &[Value]) -> Result<Option<Self>> {
        let map = Self::entity_map();

        if key.len() != map.primary_keys().len() {
            return Err(Error::invalid_argument(format!(
                "`{}` has {} primary key column(s), got {} value(s)",
                map.table_name(),
                map.primary_keys().len(),
                key.len()
            )));
        }

        let mut select = Self::query(db);
        for (mapping, value) in map.primary_keys().iter().zip(key) {
            select.filter_eq(mapping.column.as_str(), value.clone());
        }

        select.load_one()
    }

    /// Inserts the instance's mapped properties and returns the affected row
    /// count.
    ///
    /// Primary key properties that are unset or `NULL` are left to the
    /// database. With a single-column key, the generated id is read back
    /// into the key property.
    fn insert(&mut self, db: &Db) -> Result<u64> {
        let map = Self::entity_map();

        let mut columns = vec![];
        let mut values = vec![];
        let mut generated = None;

        for mapping in map.column_map() {
            match self.attributes().get(&mapping.property) {
                Some(value) if !value.is_null() || !map.is_primary_key(&mapping.column) => {
                    columns.push(mapping.column.as_str());
                    values.push(value.clone());
                }
                Some(_) | None if map.is_primary_key(&mapping.column) => {
                    generated = Some(mapping.property.as_str());
                }
                _ => {}
            }
        }

        let count = db
            .insert()
            .into_table(map.table_name())
            .columns(columns)
            .values(values)
            .execute()?;

        if let (Some(property), [_]) = (generated, map.primary_keys()) {
            let id = db.last_insert_id(None)?;
            let id = match id.parse::<i64>() {
                Ok(id) => Value::I64(id),
                Err(_) => Value::String(id),
            };
            self.set(property, id);
        }

        Ok(count)
    }

    /// Writes the non-key properties back to the row with this instance's
    /// primary key. Returns the affected row count.
    fn update(&self, db: &Db) -> Result<u64> {
        let map = Self::entity_map();
        let key = self.primary_key()?;

        let assignments: Vec<_> = map
            .non_key_columns()
            .iter()
            .filter_map(|mapping| {
                self.attributes()
                    .get(&mapping.property)
                    .map(|value| (mapping.column.as_str(), value.clone()))
            })
            .collect();

        if assignments.is_empty() {
            return Ok(0);
        }

        let mut update = db.update();
        update.table(map.table_name()).set_many(assignments);
        for (column, value) in key {
            update.filter_eq(column, value);
        }
        update.execute()
    }

    /// Deletes the row with this instance's primary key.
    fn delete(&self, db: &Db) -> Result<u64> {
        let map = Self::entity_map();
        let key = self.primary_key()?;

        let mut delete = db.delete();
        delete.from(map.table_name());
        for (column, value) in key {
            delete.filter_eq(column, value);
        }
        delete.execute()
    }

    /// The primary key columns paired with this instance's values.
    fn primary_key(&self) -> Result<Vec<(&'static str, Value)>> {
        let map = Self::entity_map();

        map.primary_keys()
            .iter()
            .map(|mapping| match self.attributes().get(&mapping.property) {
                Some(value) if !value.is_null() => Ok((mapping.column.as_str(), value.clone())),
                _ => Err(Error::invalid_argument(format!(
                    "`{}` instance has no value for primary key `{}`",
                    map.table_name(),
                    mapping.column
                ))),
            })
            .collect()
    }

    /// The properties, filtered by [`visible`](Self::visible) and
    /// [`hidden`](Self::hidden), followed by every resolved relationship.
    fn to_json(&self) -> serde_json::Value {
        let shown = |name: &str| {
            let visible = Self::visible();
            (visible.is_empty() || visible.contains(&name)) && !Self::hidden().contains(&name)
        };

        let mut object = serde_json::Map::new();

        for (property, value) in self.attributes().iter() {
            if shown(property) {
                object.insert(property.to_string(), value.to_json());
            }
        }

        for (name, related) in self.relation_cache().entries() {
            if shown(&name) {
                object.insert(name, related.to_json());
            }
        }

        serde_json::Value::Object(object)
    }

    /// Resolves the relationship registered as `name`.
    ///
    /// The first call runs the relationship's query and caches the result on
    /// the instance. Later calls return the cached result without querying,
    /// whatever `args` they pass.
    fn relation(&self, name: &str, args: &[Value], db: &Db) -> Result<Related> {
        if let Some(related) = self.relation_cache().get(name) {
            tracing::trace!(relation = name, "relation cache hit");
            return Ok(related);
        }

        let relations = Self::relations();
        let Some(factory) = relations.get(name) else {
            return Err(Error::invalid_argument(format!(
                "no relation named `{name}` on `{}`",
                Self::entity_map().table_name()
            )));
        };

        tracing::debug!(
            relation = name,
            table = Self::entity_map().table_name(),
            "resolving relation"
        );

        let related = factory(self, args).fetch(db)?;
        self.relation_cache().insert(name, related.clone());
        Ok(related)
    }

    /// Drops the cached result of `name`, so the next
    /// [`relation`](Self::relation) call queries again.
    fn refresh_relation(&self, name: &str) -> Option<Related> {
        self.relation_cache().remove(name)
    }

    /// The `T` rows whose `foreign_key` column references this entity's
    /// `local_key` column. Resolves to at most one `T`.
    fn has_one<T: Entity>(&self, foreign_key: &str, local_key: &str) -> Relationship<'_> {
        Relationship::new::<Self, T>(self, foreign_key, local_key, Cardinality::One)
    }

    fn has_many<T: Entity>(&self, foreign_key: &str, local_key: &str) -> Relationship<'_> {
        Relationship::new::<Self, T>(self, foreign_key, local_key, Cardinality::Many)
    }

    /// The `T` referenced by this entity's `foreign_key` column, matching
    /// `T`'s `owner_key` column.
    fn belongs_to_one<T: Entity>(&self, foreign_key: &str, owner_key: &str) -> Relationship<'_> {
        Relationship::new::<Self, T>(self, owner_key, foreign_key, Cardinality::One)
    }

    fn belongs_to_many<T: Entity>(&self, foreign_key: &str, owner_key: &str) -> Relationship<'_> {
        Relationship::new::<Self, T>(self, owner_key, foreign_key, Cardinality::Many)
    }
}

/// The object-safe view of an [`Entity`], used for resolved relationships
/// whose target type is only known to the relationship.
pub trait AnyEntity: Any {
    fn table(&self) -> &str;

    fn properties(&self) -> &Attributes;

    fn to_json_value(&self) -> serde_json::Value;

    fn as_any(&self) -> &dyn Any;
}

impl<E: Entity> AnyEntity for E {
    fn table(&self) -> &str {
        E::entity_map().table_name()
    }

    fn properties(&self) -> &Attributes {
        self.attributes()
    }

    fn to_json_value(&self) -> serde_json::Value {
        self.to_json()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
