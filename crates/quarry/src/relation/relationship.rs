use super::Related;
use crate::{
    query,
    stmt::{
        self, Conditions, Conjunction, Filtered, Name, OrderByExpr, Predicate, Selection,
        TableRef, Value,
    },
    AnyEntity, Attributes, Db, Entity, EntityMap, Result,
};

use quarry_core::stmt::{Bind, Row};

use std::{fmt, mem, rc::Rc};

/// Whether a relationship resolves to at most one entity or to a
/// collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    One,
    Many,
}

/// An unresolved relationship from one source entity.
///
/// A relationship is a chain of hops. The first hop matches rows of its
/// table against a key of the source entity, each further hop matches rows
/// of its table against a column of the previous hop. The whole chain
/// compiles to one SELECT over the last hop's table, earlier hops becoming
/// nested `IN (SELECT ...)` filters:
///
/// ```text
/// SELECT comments.* FROM comments
/// WHERE comments.post_id IN (SELECT posts.id FROM posts WHERE posts.user_id = ?)
/// ```
///
/// Predicates, ordering and limits apply to the last hop added. A hop that
/// carries a limit or offset is wrapped in a derived table so the limit
/// still narrows the rows the next hop matches. The source key is read when
/// the relationship is compiled, not when it is declared.
pub struct Relationship<'a> {
    owner: &'a Attributes,
    owner_map: &'static EntityMap,

    /// Never empty.
    hops: Vec<Hop>,

    cardinality: Cardinality,

    /// Builds the entity type of the last hop from a row.
    load: fn(Row) -> Result<Rc<dyn AnyEntity>>,
}

struct Hop {
    map: &'static EntityMap,
    alias: Option<String>,

    /// Column of this hop's table compared against `source`.
    column: String,

    /// Column of the previous hop's table, or of the source entity for the
    /// first hop.
    source: String,

    /// Extra clauses supplied by the caller.
    query: stmt::Select,
}

impl<'a> Relationship<'a> {
    pub(crate) fn new<S: Entity, T: Entity>(
        owner: &'a S,
        column: &str,
        source: &str,
        cardinality: Cardinality,
    ) -> Relationship<'a> {
        Relationship {
            owner: owner.attributes(),
            owner_map: S::entity_map(),
            hops: vec![Hop::new(T::entity_map(), column, source)],
            cardinality,
            load: load_entity::<T>,
        }
    }

    /// Continues through a `T` whose `foreign_key` column references
    /// `local_key` of the current hop. Resolves to at most one `T`.
    pub fn has_one<T: Entity>(self, foreign_key: &str, local_key: &str) -> Relationship<'a> {
        self.through::<T>(foreign_key, local_key, Cardinality::One)
    }

    /// Continues through every `T` whose `foreign_key` column references
    /// `local_key` of the current hop.
    pub fn has_many<T: Entity>(self, foreign_key: &str, local_key: &str) -> Relationship<'a> {
        self.through::<T>(foreign_key, local_key, Cardinality::Many)
    }

    /// Continues to the `T` referenced by the current hop's `foreign_key`
    /// column, matching `owner_key` of `T`.
    pub fn belongs_to_one<T: Entity>(self, foreign_key: &str, owner_key: &str) -> Relationship<'a> {
        self.through::<T>(owner_key, foreign_key, Cardinality::One)
    }

    pub fn belongs_to_many<T: Entity>(
        self,
        foreign_key: &str,
        owner_key: &str,
    ) -> Relationship<'a> {
        self.through::<T>(owner_key, foreign_key, Cardinality::Many)
    }

    fn through<T: Entity>(
        mut self,
        column: &str,
        source: &str,
        cardinality: Cardinality,
    ) -> Relationship<'a> {
        self.hops.push(Hop::new(T::entity_map(), column, source));
        self.cardinality = cardinality;
        self.load = load_entity::<T>;
        self
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// Sets the alias of the last hop's table. Without an alias, columns
    /// are qualified with the table name.
    pub fn alias(mut self, alias: impl Into<String>) -> Relationship<'a> {
        self.last_mut().alias = Some(alias.into());
        self
    }

    pub fn order_by<O: Into<OrderByExpr>>(
        mut self,
        terms: impl IntoIterator<Item = O>,
    ) -> Relationship<'a> {
        self.last_mut().query.order_by = terms.into_iter().map(Into::into).collect();
        self
    }

    pub fn limit(mut self, limit: u64) -> Relationship<'a> {
        self.last_mut().query.limit = Some(limit);
        self
    }

    /// The value of the source entity's key, read now.
    fn owner_key(&self) -> Value {
        self.owner
            .value(self.owner_map.property(&self.hops[0].source))
    }

    /// Compiles the chain into a single SELECT.
    pub fn to_select(&self) -> stmt::Select {
        let first = &self.hops[0];
        let mut select = first.select(Predicate::Binary {
            column: first.qualified(&first.column),
            op: stmt::BinaryOp::Eq,
            value: self.owner_key(),
        });

        for pair in self.hops.windows(2) {
            let [prev, hop] = pair else { continue };

            let inner = if select.limit.is_some() || select.offset.is_some() {
                // MySQL rejects LIMIT inside `IN (...)` but accepts it in a
                // derived table
                let alias = format!("{}_sub", prev.reference());
                let mut outer = stmt::Select::new();
                outer.columns = vec![Selection::column(Name::qualified(&alias, &hop.source))];
                outer.from = vec![TableRef::derived(select, alias)];
                outer
            } else {
                // Without a limit the order does not change which rows match
                let mut inner = select;
                inner.columns = vec![Selection::column(prev.qualified(&hop.source))];
                inner.order_by.clear();
                inner
            };

            select = hop.select(Predicate::InSubquery {
                column: hop.qualified(&hop.column),
                query: Box::new(inner),
                negate: false,
            });
        }

        if self.cardinality == Cardinality::One {
            select.limit = Some(1);
        }

        select
    }

    pub fn to_sql(&self, db: &Db) -> Result<String> {
        self.to_sql_with_bindings(db).map(|(sql, _)| sql)
    }

    pub fn to_sql_with_bindings(&self, db: &Db) -> Result<(String, Vec<Bind>)> {
        db.to_sql(&self.to_select().into())
    }

    /// Runs the relationship's query and materializes the result.
    ///
    /// A source entity whose key is `NULL` has no related rows, so nothing
    /// is sent to the database in that case.
    pub fn fetch(&self, db: &Db) -> Result<Related> {
        let entities = if self.owner_key().is_null() {
            tracing::debug!(
                table = self.owner_map.table_name(),
                key = %self.hops[0].source,
                "source key is NULL; relationship is empty"
            );
            vec![]
        } else {
            query::Select::from_stmt(db, self.to_select())
                .fetch_all()?
                .into_iter()
                .map(self.load)
                .collect::<Result<Vec<_>>>()?
        };

        Ok(match self.cardinality {
            Cardinality::One => Related::One(entities.into_iter().next()),
            Cardinality::Many => Related::Many(entities.into()),
        })
    }

    fn last_mut(&mut self) -> &mut Hop {
        let last = self.hops.len() - 1;
        &mut self.hops[last]
    }
}

impl Filtered for Relationship<'_> {
    fn conditions_mut(&mut self) -> &mut Conditions {
        &mut self.last_mut().query.filter
    }
}

impl fmt::Debug for Relationship<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relationship")
            .field("owner", &self.owner_map.table_name())
            .field("hops", &self.hops)
            .field("cardinality", &self.cardinality)
            .finish()
    }
}

impl Hop {
    fn new(map: &'static EntityMap, column: &str, source: &str) -> Hop {
        Hop {
            map,
            alias: None,
            column: column.to_string(),
            source: source.to_string(),
            query: stmt::Select::new(),
        }
    }

    fn reference(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.map.table_name())
    }

    fn qualified(&self, column: &str) -> Name {
        Name::qualified(self.reference(), column)
    }

    /// `SELECT ref.* FROM table [AS alias] WHERE key [AND (extra)]`
    fn select(&self, key: Predicate) -> stmt::Select {
        let mut select = self.query.clone();
        select.columns = vec![Selection::column(self.qualified("*"))];
        select.from = vec![match &self.alias {
            Some(alias) => TableRef::aliased(self.map.table_name(), alias.clone()),
            None => TableRef::new(self.map.table_name()),
        }];

        let extra = mem::take(&mut select.filter);
        select.filter.push(Conjunction::And, key);
        select.filter.push(Conjunction::And, Predicate::Group(extra));
        select
    }
}

impl fmt::Debug for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hop")
            .field("table", &self.map.table_name())
            .field("alias", &self.alias)
            .field("column", &self.column)
            .field("source", &self.source)
            .finish()
    }
}

fn load_entity<T: Entity>(row: Row) -> Result<Rc<dyn AnyEntity>> {
    Ok(Rc::new(T::from_row(row)?))
}
