use super::{
    BinaryOp, Conditions, Filtered, Join, JoinKind, Name, OrderByExpr, Selection, TableRef, Value,
};

/// A SELECT statement.
///
/// Setting a clause replaces its content, the `add_` variants append.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Select {
    pub distinct: bool,

    /// Selected columns. Empty means `*`.
    pub columns: Vec<Selection>,

    pub from: Vec<TableRef>,
    pub joins: Vec<Join>,
    pub filter: Conditions,
    pub group_by: Vec<Name>,
    pub having: Conditions,
    pub order_by: Vec<OrderByExpr>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl Select {
    pub fn new() -> Select {
        Select::default()
    }

    /// Iterates over this statement and every sub-select it contains.
    pub(crate) fn visit(&self, f: &mut impl FnMut(&Select)) {
        f(self);

        let nested = self
            .filter
            .subqueries()
            .into_iter()
            .chain(self.having.subqueries())
            .chain(self.joins.iter().flat_map(|join| join.on.subqueries()))
            .chain(self.from.iter().filter_map(|table| table.query.as_deref()))
            .chain(self.joins.iter().filter_map(|join| join.table.query.as_deref()));

        for query in nested {
            query.visit(f);
        }
    }
}

impl Filtered for Select {
    fn conditions_mut(&mut self) -> &mut Conditions {
        &mut self.filter
    }
}

/// Fluent construction of the clauses of a SELECT statement.
pub trait SelectBuilder {
    fn select_mut(&mut self) -> &mut Select;

    /// Replaces the selected columns.
    fn columns<S: Into<Selection>>(&mut self, columns: impl IntoIterator<Item = S>) -> &mut Self {
        self.select_mut().columns = columns.into_iter().map(Into::into).collect();
        self
    }

    fn add_columns<S: Into<Selection>>(
        &mut self,
        columns: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        self.select_mut()
            .columns
            .extend(columns.into_iter().map(Into::into));
        self
    }

    fn distinct(&mut self) -> &mut Self {
        self.select_mut().distinct = true;
        self
    }

    /// Replaces the FROM list with a single table.
    fn from(&mut self, table: impl Into<TableRef>) -> &mut Self {
        self.select_mut().from = vec![table.into()];
        self
    }

    fn add_from(&mut self, table: impl Into<TableRef>) -> &mut Self {
        self.select_mut().from.push(table.into());
        self
    }

    /// Inner join on `lhs = rhs`. `rhs` is a column, not a value.
    fn join(
        &mut self,
        table: impl Into<TableRef>,
        lhs: impl Into<Name>,
        rhs: impl Into<Name>,
    ) -> &mut Self {
        self.inner_join(table, lhs, rhs)
    }

    fn inner_join(
        &mut self,
        table: impl Into<TableRef>,
        lhs: impl Into<Name>,
        rhs: impl Into<Name>,
    ) -> &mut Self {
        self.join_on(JoinKind::Inner, table, |join| {
            join.on(lhs, BinaryOp::Eq, rhs);
        })
    }

    fn left_join(
        &mut self,
        table: impl Into<TableRef>,
        lhs: impl Into<Name>,
        rhs: impl Into<Name>,
    ) -> &mut Self {
        self.join_on(JoinKind::Left, table, |join| {
            join.on(lhs, BinaryOp::Eq, rhs);
        })
    }

    fn right_join(
        &mut self,
        table: impl Into<TableRef>,
        lhs: impl Into<Name>,
        rhs: impl Into<Name>,
    ) -> &mut Self {
        self.join_on(JoinKind::Right, table, |join| {
            join.on(lhs, BinaryOp::Eq, rhs);
        })
    }

    fn full_join(
        &mut self,
        table: impl Into<TableRef>,
        lhs: impl Into<Name>,
        rhs: impl Into<Name>,
    ) -> &mut Self {
        self.join_on(JoinKind::Full, table, |join| {
            join.on(lhs, BinaryOp::Eq, rhs);
        })
    }

    /// Adds a join whose ON clause is built by `f`.
    fn join_on(
        &mut self,
        kind: JoinKind,
        table: impl Into<TableRef>,
        f: impl FnOnce(&mut Join),
    ) -> &mut Self {
        let mut join = Join::new(kind, table);
        f(&mut join);
        self.select_mut().joins.push(join);
        self
    }

    fn group_by<N: Into<Name>>(&mut self, columns: impl IntoIterator<Item = N>) -> &mut Self {
        self.select_mut().group_by = columns.into_iter().map(Into::into).collect();
        self
    }

    fn add_group_by<N: Into<Name>>(&mut self, columns: impl IntoIterator<Item = N>) -> &mut Self {
        self.select_mut()
            .group_by
            .extend(columns.into_iter().map(Into::into));
        self
    }

    fn having(
        &mut self,
        column: impl Into<Name>,
        op: BinaryOp,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.select_mut().having.filter(column, op, value);
        self
    }

    fn or_having(
        &mut self,
        column: impl Into<Name>,
        op: BinaryOp,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.select_mut().having.or_filter(column, op, value);
        self
    }

    /// Compares `expr`, usually an aggregate, against a raw fragment.
    fn having_raw(
        &mut self,
        expr: impl Into<Name>,
        op: BinaryOp,
        sql: impl Into<String>,
    ) -> &mut Self {
        self.select_mut().having.filter_raw(expr, op, sql);
        self
    }

    fn having_sql(&mut self, sql: impl Into<String>) -> &mut Self {
        self.select_mut().having.filter_sql(sql);
        self
    }

    /// Replaces the ORDER BY list.
    fn order_by<O: Into<OrderByExpr>>(&mut self, terms: impl IntoIterator<Item = O>) -> &mut Self {
        self.select_mut().order_by = terms.into_iter().map(Into::into).collect();
        self
    }

    fn add_order_by<O: Into<OrderByExpr>>(
        &mut self,
        terms: impl IntoIterator<Item = O>,
    ) -> &mut Self {
        self.select_mut()
            .order_by
            .extend(terms.into_iter().map(Into::into));
        self
    }

    fn limit(&mut self, limit: u64) -> &mut Self {
        self.select_mut().limit = Some(limit);
        self
    }

    fn offset(&mut self, offset: u64) -> &mut Self {
        self.select_mut().offset = Some(offset);
        self
    }
}

impl SelectBuilder for Select {
    fn select_mut(&mut self) -> &mut Select {
        self
    }
}
