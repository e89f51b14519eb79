use super::{Enum, Table};
use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Schema {
    pub name: String,
    pub comment: String,
    pub tables: Vec<Table>,
    pub enums: Vec<Enum>,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Schema {
        Schema {
            name: name.into(),
            ..Schema::default()
        }
    }

    pub fn table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    pub fn enum_type(mut self, ty: Enum) -> Self {
        self.enums.push(ty);
        self
    }
}
