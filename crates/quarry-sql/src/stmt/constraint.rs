/// A table-level constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    PrimaryKey(Vec<String>),
    Unique {
        name: Option<String>,
        columns: Vec<String>,
    },
    Index {
        name: Option<String>,
        columns: Vec<String>,
    },
    ForeignKey(ForeignKey),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    pub name: Option<String>,
    pub columns: Vec<String>,
    pub references_table: String,
    pub references_columns: Vec<String>,
    pub on_delete: Option<ReferentialAction>,
    pub on_update: Option<ReferentialAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferentialAction {
    Cascade,
    Restrict,
    SetNull,
    SetDefault,
    NoAction,
}

impl ReferentialAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::Restrict => "RESTRICT",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::SetDefault => "SET DEFAULT",
            ReferentialAction::NoAction => "NO ACTION",
        }
    }
}

fn strings<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Vec<String> {
    items.into_iter().map(Into::into).collect()
}

impl Constraint {
    pub fn primary_key<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Constraint {
        Constraint::PrimaryKey(strings(columns))
    }

    pub fn unique<S: Into<String>>(
        name: Option<&str>,
        columns: impl IntoIterator<Item = S>,
    ) -> Constraint {
        Constraint::Unique {
            name: name.map(str::to_string),
            columns: strings(columns),
        }
    }

    pub fn index<S: Into<String>>(
        name: Option<&str>,
        columns: impl IntoIterator<Item = S>,
    ) -> Constraint {
        Constraint::Index {
            name: name.map(str::to_string),
            columns: strings(columns),
        }
    }

    pub fn columns(&self) -> &[String] {
        match self {
            Constraint::PrimaryKey(columns) => columns,
            Constraint::Unique { columns, .. } | Constraint::Index { columns, .. } => columns,
            Constraint::ForeignKey(fk) => &fk.columns,
        }
    }
}

impl ForeignKey {
    pub fn new<S: Into<String>, R: Into<String>>(
        columns: impl IntoIterator<Item = S>,
        references_table: impl Into<String>,
        references_columns: impl IntoIterator<Item = R>,
    ) -> ForeignKey {
        ForeignKey {
            name: None,
            columns: strings(columns),
            references_table: references_table.into(),
            references_columns: strings(references_columns),
            on_delete: None,
            on_update: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> ForeignKey {
        self.name = Some(name.into());
        self
    }

    pub fn on_delete(mut self, action: ReferentialAction) -> ForeignKey {
        self.on_delete = Some(action);
        self
    }

    pub fn on_update(mut self, action: ReferentialAction) -> ForeignKey {
        self.on_update = Some(action);
        self
    }
}

impl From<ForeignKey> for Constraint {
    fn from(fk: ForeignKey) -> Self {
        Constraint::ForeignKey(fk)
    }
}
