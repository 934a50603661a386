//! Relationships between entities.
//!
//! A [`Relationship`] describes how to reach related rows from one source
//! entity. It is built from the source with [`Entity::has_one`],
//! [`Entity::has_many`], [`Entity::belongs_to_one`] or
//! [`Entity::belongs_to_many`], optionally chained through further hops, and
//! resolved with [`Relationship::fetch`] into a [`Related`] value.
//!
//! [`Entity::has_one`]: crate::Entity::has_one
//! [`Entity::has_many`]: crate::Entity::has_many
//! [`Entity::belongs_to_one`]: crate::Entity::belongs_to_one
//! [`Entity::belongs_to_many`]: crate::Entity::belongs_to_many

mod registry;
pub use registry::Relations;

mod related;
pub use related::Related;

mod relationship;
pub use relationship::{Cardinality, Relationship};
