use super::{Flavor, Formatter, Params, ToSql};

/// A quoted identifier. The quote character is doubled inside the name.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let name = self.0.as_ref();

        if name == "*" {
            f.dst.push('*');
            return;
        }

        let quote = match f.serializer.flavor {
            Flavor::Mysql => '`',
            Flavor::Sqlite => '"',
        };

        f.dst.push(quote);
        for c in name.chars() {
            if c == quote {
                f.dst.push(quote);
            }
            f.dst.push(c);
        }
        f.dst.push(quote);
    }
}
