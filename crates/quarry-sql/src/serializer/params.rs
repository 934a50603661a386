use super::{Formatter, ToSql};

use quarry_core::stmt::{Bind, Value};

/// Collects the values bound while serializing a statement.
pub trait Params {
    fn push(&mut self, value: &Value) -> Placeholder;

    fn push_named(&mut self, name: &str, value: &Value) -> Placeholder;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// `?`, numbered from 1 in order of appearance.
    Positional(usize),

    /// `:name`
    Named(String),
}

impl Params for Vec<Bind> {
    fn push(&mut self, value: &Value) -> Placeholder {
        self.push(Bind::positional(value.clone()));
        Placeholder::Positional(self.len())
    }

    fn push_named(&mut self, name: &str, value: &Value) -> Placeholder {
        self.push(Bind::named(name, value.clone()));
        Placeholder::Named(name.to_string())
    }
}

/// Drops parameter names, keeping only the values in order.
impl Params for Vec<Value> {
    fn push(&mut self, value: &Value) -> Placeholder {
        self.push(value.clone());
        Placeholder::Positional(self.len())
    }

    fn push_named(&mut self, name: &str, value: &Value) -> Placeholder {
        self.push(value.clone());
        Placeholder::Named(name.to_string())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: super::Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Placeholder::Positional(_) => f.dst.push('?'),
            Placeholder::Named(name) => {
                f.dst.push(':');
                f.dst.push_str(&name);
            }
        }
    }
}
