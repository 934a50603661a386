use super::Relationship;
use crate::{stmt::Value, Entity};

use indexmap::IndexMap;

use std::fmt;

type Factory<E> = Box<dyn for<'a> Fn(&'a E, &[Value]) -> Relationship<'a>>;

/// The relationships an entity type declares, by name.
///
/// [`Entity::relation`](crate::Entity::relation) looks names up here. Each
/// factory receives the source entity and the caller's arguments and returns
/// an unresolved relationship.
pub struct Relations<E> {
    factories: IndexMap<&'static str, Factory<E>>,
}

impl<E: Entity> Relations<E> {
    pub fn new() -> Relations<E> {
        Relations {
            factories: IndexMap::new(),
        }
    }

    /// Declares a relationship. A later declaration under the same name
    /// replaces the earlier one.
    pub fn add<F>(mut self, name: &'static str, factory: F) -> Relations<E>
    where
        F: for<'a> Fn(&'a E, &[Value]) -> Relationship<'a> + 'static,
    {
        self.factories.insert(name, Box::new(factory));
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn for<'a> Fn(&'a E, &[Value]) -> Relationship<'a>> {
        self.factories.get(name).map(|factory| &**factory)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }
}

impl<E: Entity> Default for Relations<E> {
    fn default() -> Self {
        Relations::new()
    }
}

impl<E> fmt::Debug for Relations<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.factories.keys()).finish()
    }
}
