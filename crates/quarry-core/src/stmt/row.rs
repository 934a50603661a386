use super::{FromValue, Value};
use crate::{Error, Result};

use indexmap::IndexMap;

/// One result row: column names mapped to values, in the order the database
/// returned the columns.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Row {
    columns: IndexMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: Value) {
        self.columns.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    /// Removes a column from the row and converts it.
    pub fn take<T: FromValue>(&mut self, column: &str) -> Result<T> {
        match self.columns.shift_remove(column) {
            Some(value) => T::from_value(value),
            None => Err(Error::invalid_result(format!(
                "row has no column `{column}`"
            ))),
        }
    }

    /// Returns the value of the first column, used for scalar queries such as
    /// `COUNT(*)`.
    pub fn first(&self) -> Option<&Value> {
        self.columns.get_index(0).map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for Row {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Row {
            columns: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
