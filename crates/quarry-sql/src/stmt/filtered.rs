use super::{BinaryOp, Conditions, Conjunction, Name, Predicate, Select, Value};

/// Fluent predicate construction, shared by every clause that holds a list
/// of conditions.
///
/// `filter` binds its value as a parameter, `filter_raw` embeds it verbatim
/// and `filter_column` compares against another column. Each method has an
/// `or_` twin that joins with `OR` instead of `AND`.
pub trait Filtered {
    fn conditions_mut(&mut self) -> &mut Conditions;

    fn filter(
        &mut self,
        column: impl Into<Name>,
        op: BinaryOp,
        value: impl Into<Value>,
    ) -> &mut Self {
        push_binary(self.conditions_mut(), Conjunction::And, column, op, value);
        self
    }

    fn or_filter(
        &mut self,
        column: impl Into<Name>,
        op: BinaryOp,
        value: impl Into<Value>,
    ) -> &mut Self {
        push_binary(self.conditions_mut(), Conjunction::Or, column, op, value);
        self
    }

    /// `filter` with the `=` operator.
    fn filter_eq(&mut self, column: impl Into<Name>, value: impl Into<Value>) -> &mut Self {
        self.filter(column, BinaryOp::Eq, value)
    }

    fn or_filter_eq(&mut self, column: impl Into<Name>, value: impl Into<Value>) -> &mut Self {
        self.or_filter(column, BinaryOp::Eq, value)
    }

    /// Compares `column` against a raw SQL fragment. The fragment is not
    /// escaped or bound.
    fn filter_raw(
        &mut self,
        column: impl Into<Name>,
        op: BinaryOp,
        sql: impl Into<String>,
    ) -> &mut Self {
        push_raw(self.conditions_mut(), Conjunction::And, column, op, sql);
        self
    }

    fn or_filter_raw(
        &mut self,
        column: impl Into<Name>,
        op: BinaryOp,
        sql: impl Into<String>,
    ) -> &mut Self {
        push_raw(self.conditions_mut(), Conjunction::Or, column, op, sql);
        self
    }

    /// Appends a complete predicate written in SQL.
    fn filter_sql(&mut self, sql: impl Into<String>) -> &mut Self {
        self.conditions_mut()
            .push(Conjunction::And, Predicate::Sql(sql.into()));
        self
    }

    fn or_filter_sql(&mut self, sql: impl Into<String>) -> &mut Self {
        self.conditions_mut()
            .push(Conjunction::Or, Predicate::Sql(sql.into()));
        self
    }

    fn filter_column(
        &mut self,
        lhs: impl Into<Name>,
        op: BinaryOp,
        rhs: impl Into<Name>,
    ) -> &mut Self {
        push_column(self.conditions_mut(), Conjunction::And, lhs, op, rhs);
        self
    }

    fn or_filter_column(
        &mut self,
        lhs: impl Into<Name>,
        op: BinaryOp,
        rhs: impl Into<Name>,
    ) -> &mut Self {
        push_column(self.conditions_mut(), Conjunction::Or, lhs, op, rhs);
        self
    }

    fn filter_in<V: Into<Value>>(
        &mut self,
        column: impl Into<Name>,
        values: impl IntoIterator<Item = V>,
    ) -> &mut Self {
        push_in_list(self.conditions_mut(), Conjunction::And, column, values, false);
        self
    }

    fn or_filter_in<V: Into<Value>>(
        &mut self,
        column: impl Into<Name>,
        values: impl IntoIterator<Item = V>,
    ) -> &mut Self {
        push_in_list(self.conditions_mut(), Conjunction::Or, column, values, false);
        self
    }

    fn filter_not_in<V: Into<Value>>(
        &mut self,
        column: impl Into<Name>,
        values: impl IntoIterator<Item = V>,
    ) -> &mut Self {
        push_in_list(self.conditions_mut(), Conjunction::And, column, values, true);
        self
    }

    fn or_filter_not_in<V: Into<Value>>(
        &mut self,
        column: impl Into<Name>,
        values: impl IntoIterator<Item = V>,
    ) -> &mut Self {
        push_in_list(self.conditions_mut(), Conjunction::Or, column, values, true);
        self
    }

    /// `column IN (SELECT ...)`, the sub-select is built by `f`.
    fn filter_in_query(
        &mut self,
        column: impl Into<Name>,
        f: impl FnOnce(&mut Select),
    ) -> &mut Self {
        push_in_query(self.conditions_mut(), Conjunction::And, column, f, false);
        self
    }

    fn or_filter_in_query(
        &mut self,
        column: impl Into<Name>,
        f: impl FnOnce(&mut Select),
    ) -> &mut Self {
        push_in_query(self.conditions_mut(), Conjunction::Or, column, f, false);
        self
    }

    fn filter_not_in_query(
        &mut self,
        column: impl Into<Name>,
        f: impl FnOnce(&mut Select),
    ) -> &mut Self {
        push_in_query(self.conditions_mut(), Conjunction::And, column, f, true);
        self
    }

    fn or_filter_not_in_query(
        &mut self,
        column: impl Into<Name>,
        f: impl FnOnce(&mut Select),
    ) -> &mut Self {
        push_in_query(self.conditions_mut(), Conjunction::Or, column, f, true);
        self
    }

    fn filter_null(&mut self, column: impl Into<Name>) -> &mut Self {
        push_null(self.conditions_mut(), Conjunction::And, column, false);
        self
    }

    fn or_filter_null(&mut self, column: impl Into<Name>) -> &mut Self {
        push_null(self.conditions_mut(), Conjunction::Or, column, false);
        self
    }

    fn filter_not_null(&mut self, column: impl Into<Name>) -> &mut Self {
        push_null(self.conditions_mut(), Conjunction::And, column, true);
        self
    }

    fn or_filter_not_null(&mut self, column: impl Into<Name>) -> &mut Self {
        push_null(self.conditions_mut(), Conjunction::Or, column, true);
        self
    }

    fn filter_exists(&mut self, f: impl FnOnce(&mut Select)) -> &mut Self {
        push_exists(self.conditions_mut(), Conjunction::And, f, false);
        self
    }

    fn or_filter_exists(&mut self, f: impl FnOnce(&mut Select)) -> &mut Self {
        push_exists(self.conditions_mut(), Conjunction::Or, f, false);
        self
    }

    fn filter_not_exists(&mut self, f: impl FnOnce(&mut Select)) -> &mut Self {
        push_exists(self.conditions_mut(), Conjunction::And, f, true);
        self
    }

    fn or_filter_not_exists(&mut self, f: impl FnOnce(&mut Select)) -> &mut Self {
        push_exists(self.conditions_mut(), Conjunction::Or, f, true);
        self
    }

    /// Appends a parenthesized sub-clause built by `f`. Nothing is rendered
    /// when `f` adds no predicates.
    fn filter_group(&mut self, f: impl FnOnce(&mut Conditions)) -> &mut Self {
        push_group(self.conditions_mut(), Conjunction::And, f);
        self
    }

    fn or_filter_group(&mut self, f: impl FnOnce(&mut Conditions)) -> &mut Self {
        push_group(self.conditions_mut(), Conjunction::Or, f);
        self
    }
}

impl Filtered for Conditions {
    fn conditions_mut(&mut self) -> &mut Conditions {
        self
    }
}

fn push_binary(
    conditions: &mut Conditions,
    conjunction: Conjunction,
    column: impl Into<Name>,
    op: BinaryOp,
    value: impl Into<Value>,
) {
    conditions.push(
        conjunction,
        Predicate::Binary {
            column: column.into(),
            op,
            value: value.into(),
        },
    );
}

fn push_raw(
    conditions: &mut Conditions,
    conjunction: Conjunction,
    column: impl Into<Name>,
    op: BinaryOp,
    sql: impl Into<String>,
) {
    conditions.push(
        conjunction,
        Predicate::Raw {
            column: column.into(),
            op,
            sql: sql.into(),
        },
    );
}

fn push_column(
    conditions: &mut Conditions,
    conjunction: Conjunction,
    lhs: impl Into<Name>,
    op: BinaryOp,
    rhs: impl Into<Name>,
) {
    conditions.push(
        conjunction,
        Predicate::Column {
            lhs: lhs.into(),
            op,
            rhs: rhs.into(),
        },
    );
}

fn push_in_list<V: Into<Value>>(
    conditions: &mut Conditions,
    conjunction: Conjunction,
    column: impl Into<Name>,
    values: impl IntoIterator<Item = V>,
    negate: bool,
) {
    conditions.push(
        conjunction,
        Predicate::InList {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
            negate,
        },
    );
}

fn push_in_query(
    conditions: &mut Conditions,
    conjunction: Conjunction,
    column: impl Into<Name>,
    f: impl FnOnce(&mut Select),
    negate: bool,
) {
    let mut query = Select::default();
    f(&mut query);
    conditions.push(
        conjunction,
        Predicate::InSubquery {
            column: column.into(),
            query: Box::new(query),
            negate,
        },
    );
}

fn push_null(
    conditions: &mut Conditions,
    conjunction: Conjunction,
    column: impl Into<Name>,
    negate: bool,
) {
    conditions.push(
        conjunction,
        Predicate::IsNull {
            column: column.into(),
            negate,
        },
    );
}

fn push_exists(
    conditions: &mut Conditions,
    conjunction: Conjunction,
    f: impl FnOnce(&mut Select),
    negate: bool,
) {
    let mut query = Select::default();
    f(&mut query);
    conditions.push(
        conjunction,
        Predicate::Exists {
            query: Box::new(query),
            negate,
        },
    );
}

fn push_group(
    conditions: &mut Conditions,
    conjunction: Conjunction,
    f: impl FnOnce(&mut Conditions),
) {
    let mut group = Conditions::new();
    f(&mut group);
    conditions.push(conjunction, Predicate::Group(group));
}
