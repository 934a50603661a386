use std::collections::HashSet;

/// Binds an entity type's properties to the columns of its table.
///
/// A map is built once per entity type and never changes afterwards.
/// Primary key columns come first, followed by the other columns in
/// declaration order. That order is the column order of every SELECT and
/// INSERT generated for the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMap {
    table: String,
    primary_keys: Vec<ColumnMapping>,
    columns: Vec<ColumnMapping>,
}

/// One column and the property it is exposed as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub column: String,
    pub property: String,
}

impl EntityMap {
    /// # Panics
    ///
    /// Panics when a column or a property name appears twice.
    pub fn new<P, C>(
        table: impl Into<String>,
        primary_keys: impl IntoIterator<Item = P>,
        columns: impl IntoIterator<Item = C>,
    ) -> EntityMap
    where
        P: Into<ColumnMapping>,
        C: Into<ColumnMapping>,
    {
        let map = EntityMap {
            table: table.into(),
            primary_keys: primary_keys.into_iter().map(Into::into).collect(),
            columns: columns.into_iter().map(Into::into).collect(),
        };

        map.assert_unique();
        map
    }

    fn assert_unique(&self) {
        let mut columns = HashSet::new();
        let mut properties = HashSet::new();

        for mapping in self.column_map() {
            assert!(
                columns.insert(&mapping.column),
                "column `{}` mapped twice on `{}`",
                mapping.column,
                self.table
            );
            assert!(
                properties.insert(&mapping.property),
                "property `{}` mapped twice on `{}`",
                mapping.property,
                self.table
            );
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    pub fn primary_keys(&self) -> &[ColumnMapping] {
        &self.primary_keys
    }

    /// Every mapping, primary keys first.
    pub fn column_map(&self) -> impl Iterator<Item = &ColumnMapping> {
        self.primary_keys.iter().chain(self.columns.iter())
    }

    /// The mappings of the columns that are not part of the primary key.
    pub fn non_key_columns(&self) -> &[ColumnMapping] {
        &self.columns
    }

    /// The property a column is exposed as. Unmapped columns keep their
    /// name.
    pub fn property<'a>(&'a self, column: &'a str) -> &'a str {
        self.column_map()
            .find(|mapping| mapping.column == column)
            .map(|mapping| mapping.property.as_str())
            .unwrap_or(column)
    }

    /// The column backing a property. Unmapped properties are assumed to be
    /// columns of the same name.
    pub fn column<'a>(&'a self, property: &'a str) -> &'a str {
        self.column_map()
            .find(|mapping| mapping.property == property)
            .map(|mapping| mapping.column.as_str())
            .unwrap_or(property)
    }

    pub fn is_primary_key(&self, column: &str) -> bool {
        self.primary_keys.iter().any(|mapping| mapping.column == column)
    }
}

impl ColumnMapping {
    pub fn new(column: impl Into<String>, property: impl Into<String>) -> ColumnMapping {
        ColumnMapping {
            column: column.into(),
            property: property.into(),
        }
    }
}

/// A column exposed under its own name.
impl From<&str> for ColumnMapping {
    fn from(column: &str) -> ColumnMapping {
        ColumnMapping::new(column, column)
    }
}

impl From<(&str, &str)> for ColumnMapping {
    fn from((column, property): (&str, &str)) -> ColumnMapping {
        ColumnMapping::new(column, property)
    }
}
