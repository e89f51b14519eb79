mod cmd;
pub use cmd::Cmd;

mod parameter;
pub use parameter::Parameter;

use crate::catalog::{Column, Identifier};
use serde::Deserialize;

/// A parsed query annotated with its parameters and result columns.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Query {
    pub text: String,

    pub name: String,

    /// Raw command tag, e.g. `:one`.
    pub cmd: String,

    pub columns: Vec<Column>,

    pub params: Vec<Parameter>,

    pub comments: Vec<String>,

    pub filename: String,

    /// Target table of an `INSERT`.
    pub insert_into_table: Option<Identifier>,
}

impl Query {
    pub fn new(name: impl Into<String>, cmd: Cmd) -> Query {
        Query {
            name: name.into(),
            cmd: cmd.as_str().to_string(),
            ..Query::default()
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn param(mut self, number: i32, column: Column) -> Self {
        self.params.push(Parameter { number, column });
        self
    }
}
