use super::Identifier;
use serde::{Deserialize, Serialize};

/// A column as seen by a query: a table column, a query parameter or a
/// computed result.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Column {
    /// Column name. Empty for computed or positional columns.
    pub name: String,

    pub not_null: bool,

    pub is_array: bool,

    pub comment: String,

    pub length: i32,

    /// True for `sqlc.arg(name)` / `@name` parameters.
    pub is_named_param: bool,

    /// True if the column is the result of a function call.
    pub is_func_call: bool,

    pub scope: String,

    /// The table owning this column, if any.
    pub table: Option<Identifier>,

    pub table_alias: String,

    /// The database type of the column.
    #[serde(rename = "type")]
    pub ty: Identifier,

    pub is_sqlc_slice: bool,

    pub array_dims: i32,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Column {
        Column {
            name: name.into(),
            ty: Identifier::unqualified(ty),
            ..Column::default()
        }
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub fn array(mut self) -> Self {
        self.is_array = true;
        self.array_dims = self.array_dims.max(1);
        self
    }

    pub fn named_param(mut self) -> Self {
        self.is_named_param = true;
        self
    }

    pub fn func_call(mut self) -> Self {
        self.is_func_call = true;
        self
    }

    pub fn table(mut self, table: Identifier) -> Self {
        self.table = Some(table);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Sets a schema-qualified database type, e.g. `pg_catalog.int4`.
    pub fn qualified_type(mut self, schema: impl Into<String>) -> Self {
        self.ty.schema = schema.into();
        self
    }
}
