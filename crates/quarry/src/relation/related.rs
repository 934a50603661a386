use crate::{AnyEntity, Entity};

use std::{fmt, rc::Rc};

/// The resolved value of a relationship.
///
/// Cloning is cheap and yields the same entities: a memoized relationship
/// hands out clones of one `Related`.
#[derive(Clone)]
pub enum Related {
    /// A to-one relationship. `None` when no row matched.
    One(Option<Rc<dyn AnyEntity>>),

    /// A to-many relationship, in the order the database returned the rows.
    Many(Rc<[Rc<dyn AnyEntity>]>),
}

impl Related {
    pub fn is_one(&self) -> bool {
        matches!(self, Related::One(_))
    }

    pub fn is_many(&self) -> bool {
        matches!(self, Related::Many(_))
    }

    /// Number of related entities.
    pub fn len(&self) -> usize {
        match self {
            Related::One(entity) => usize::from(entity.is_some()),
            Related::Many(entities) => entities.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The related entities, whatever the cardinality.
    pub fn entities(&self) -> &[Rc<dyn AnyEntity>] {
        match self {
            Related::One(entity) => entity.as_slice(),
            Related::Many(entities) => entities,
        }
    }

    /// The related entity of a to-one relationship, as `T`.
    ///
    /// Returns `None` for an empty or to-many result, or when the entity is
    /// not a `T`.
    pub fn one<T: Entity>(&self) -> Option<&T> {
        match self {
            Related::One(Some(entity)) => entity.as_any().downcast_ref(),
            _ => None,
        }
    }

    /// The related entities that are a `T`.
    pub fn many<T: Entity>(&self) -> Vec<&T> {
        self.entities()
            .iter()
            .filter_map(|entity| entity.as_any().downcast_ref())
            .collect()
    }

    /// Returns `true` when both values hold the same entities, not just
    /// equal ones.
    pub fn ptr_eq(&self, other: &Related) -> bool {
        match (self, other) {
            (Related::One(Some(a)), Related::One(Some(b))) => Rc::ptr_eq(a, b),
            (Related::One(None), Related::One(None)) => true,
            (Related::Many(a), Related::Many(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// `null`, an object or an array of objects.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Related::One(None) => serde_json::Value::Null,
            Related::One(Some(entity)) => entity.to_json_value(),
            Related::Many(entities) => entities
                .iter()
                .map(|entity| entity.to_json_value())
                .collect(),
        }
    }
}

impl fmt::Debug for Related {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Related::One(entity) => f
                .debug_tuple("One")
                .field(&entity.as_ref().map(|entity| entity.to_json_value()))
                .finish(),
            Related::Many(entities) => f
                .debug_tuple("Many")
                .field(&entities.iter().map(|entity| entity.to_json_value()).collect::<Vec<_>>())
                .finish(),
        }
    }
}
