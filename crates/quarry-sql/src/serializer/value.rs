use super::{Flavor, Formatter, Params, ToSql};

use quarry_core::stmt::Value;

/// A value bound as a parameter.
impl ToSql for &Value {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let placeholder = f.params.push(self);
        placeholder.to_sql(f);
    }
}

/// A value written into the SQL text as an escaped literal. Only DDL uses
/// this, because schema statements cannot carry parameters.
pub(super) struct Literal<'a>(pub(super) &'a Value);

impl ToSql for Literal<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        use std::fmt::Write;

        match self.0 {
            Value::Null => f.dst.push_str("NULL"),
            Value::Bool(true) => f.dst.push('1'),
            Value::Bool(false) => f.dst.push('0'),
            Value::I64(v) => f.dst.push_str(&v.to_string()),
            Value::F64(v) => f.dst.push_str(&v.to_string()),
            Value::String(v) => Quoted(v).to_sql(f),
            Value::Bytes(v) => {
                f.dst.push_str("X'");
                for byte in v {
                    let _ = write!(f.dst, "{byte:02X}");
                }
                f.dst.push('\'');
            }
            Value::Uuid(v) => Quoted(&v.to_string()).to_sql(f),
        }
    }
}

/// A single-quoted string literal.
pub(super) struct Quoted<'a>(pub(super) &'a str);

impl ToSql for Quoted<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        f.dst.push('\'');
        for c in self.0.chars() {
            match c {
                '\'' => f.dst.push_str("''"),
                // MySQL treats backslash as an escape character in strings
                '\\' if matches!(f.serializer.flavor, Flavor::Mysql) => f.dst.push_str("\\\\"),
                c => f.dst.push(c),
            }
        }
        f.dst.push('\'');
    }
}
