use super::{Column, Identifier};
use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Table {
    pub rel: Identifier,
    pub columns: Vec<Column>,
    pub comment: String,
}

impl Table {
    pub fn new(rel: Identifier) -> Table {
        Table {
            rel,
            ..Table::default()
        }
    }

    /// Adds a column owned by this table.
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column.table(self.rel.clone()));
        self
    }
}
