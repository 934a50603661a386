use super::Serializer;

use quarry_core::driver::Dialect;

#[derive(Debug, Clone, Copy)]
pub(super) enum Flavor {
    Mysql,
    Sqlite,
}

impl Serializer {
    pub fn mysql() -> Serializer {
        Serializer {
            flavor: Flavor::Mysql,
        }
    }

    pub fn sqlite() -> Serializer {
        Serializer {
            flavor: Flavor::Sqlite,
        }
    }

    /// The serializer for the dialect a connection reports.
    pub fn new(dialect: Dialect) -> Serializer {
        match dialect {
            Dialect::Mysql => Serializer::mysql(),
            Dialect::Sqlite => Serializer::sqlite(),
        }
    }
}
