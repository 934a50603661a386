use super::EntityMap;

use quarry_core::{
    stmt::{FromValue, Row, Value},
    Error, Result,
};

use indexmap::IndexMap;

/// The property bag of one entity instance, keyed by property name.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Attributes {
    values: IndexMap<String, Value>,
}

impl Attributes {
    pub fn new() -> Attributes {
        Attributes::default()
    }

    /// Renames the columns of `row` to properties through `map`.
    pub fn from_row(row: Row, map: &EntityMap) -> Attributes {
        row.into_iter()
            .map(|(column, value)| (map.property(&column).to_string(), value))
            .collect()
    }

    pub fn get(&self, property: &str) -> Option<&Value> {
        self.values.get(property)
    }

    /// Returns a copy of a property converted to `T`.
    pub fn get_as<T: FromValue>(&self, property: &str) -> Result<T> {
        match self.values.get(property) {
            Some(value) => value.clone().into_type(),
            None => Err(Error::invalid_argument(format!(
                "no property `{property}`"
            ))),
        }
    }

    /// Returns the property value, treating a missing property as `NULL`.
    pub fn value(&self, property: &str) -> Value {
        self.values.get(property).cloned().unwrap_or_default()
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(property.into(), value.into());
    }

    pub fn remove(&mut self, property: &str) -> Option<Value> {
        self.values.shift_remove(property)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.values.contains_key(property)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Attributes {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
