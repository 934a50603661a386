use super::{value::Quoted, Comma, Flavor, Params, ToSql};

use crate::stmt::{self, TypeKind};

impl ToSql for &stmt::Type {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        match f.serializer.flavor {
            Flavor::Mysql => mysql(self, f),
            Flavor::Sqlite => fmt!(f, sqlite_affinity(self.kind)),
        }
    }
}

/// SQLite stores every abstract type in one of three column affinities.
fn sqlite_affinity(kind: TypeKind) -> &'static str {
    use TypeKind::*;

    match kind {
        TinyInteger | SmallInteger | MediumInteger | Integer | BigInteger | Boolean => "INTEGER",
        Float | Double | Decimal => "REAL",
        _ => "TEXT",
    }
}

fn mysql<T: Params>(ty: &stmt::Type, f: &mut super::Formatter<'_, T>) {
    use TypeKind::*;

    let name = match ty.kind {
        TinyInteger => "TINYINT",
        SmallInteger => "SMALLINT",
        MediumInteger => "MEDIUMINT",
        Integer => "INT",
        BigInteger => "BIGINT",
        Boolean => "BOOLEAN",
        Float => "FLOAT",
        Double => "DOUBLE",
        Decimal => "DECIMAL",
        Date => "DATE",
        Time => "TIME",
        Timestamp => "TIMESTAMP",
        DateTime => "DATETIME",
        Char => "CHAR",
        Varchar => "VARCHAR",
        Binary => "BINARY",
        VarBinary => "VARBINARY",
        TinyBlob => "TINYBLOB",
        Blob => "BLOB",
        MediumBlob => "MEDIUMBLOB",
        LongBlob => "LONGBLOB",
        TinyText => "TINYTEXT",
        Text => "TEXT",
        MediumText => "MEDIUMTEXT",
        LongText => "LONGTEXT",
        Enum => "ENUM",
        Json => "JSON",
    };

    fmt!(f, name);

    match ty.kind {
        // VARCHAR and VARBINARY require a length
        Varchar | VarBinary => {
            fmt!(f, "(", u64::from(ty.length.unwrap_or(255)), ")");
        }
        Char | Binary | TinyInteger | SmallInteger | MediumInteger | Integer | BigInteger => {
            if let Some(length) = ty.length {
                fmt!(f, "(", u64::from(length), ")");
            }
        }
        Float | Double | Decimal => match (ty.precision, ty.scale) {
            (Some(precision), Some(scale)) => {
                fmt!(f, "(", u64::from(precision), ", ", u64::from(scale), ")")
            }
            (Some(precision), None) => fmt!(f, "(", u64::from(precision), ")"),
            _ => {}
        },
        Enum => {
            fmt!(f, "(", Comma(ty.values.iter().map(|v| Quoted(v))), ")");
        }
        _ => {}
    }

    if ty.kind.is_numeric() {
        if ty.unsigned {
            fmt!(f, " UNSIGNED");
        }
        if ty.zero_fill {
            fmt!(f, " ZEROFILL");
        }
    }

    if ty.kind.is_textual() {
        if let Some(charset) = &ty.charset {
            fmt!(f, " CHARACTER SET ", charset);
        }
        if let Some(collate) = &ty.collate {
            fmt!(f, " COLLATE ", collate);
        }
    }
}
