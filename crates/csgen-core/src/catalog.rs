mod column;
pub use column::Column;

mod enum_type;
pub use enum_type::Enum;

mod identifier;
pub use identifier::Identifier;

mod schema;
pub use schema::Schema;

mod table;
pub use table::Table;

use serde::Deserialize;

/// Schemas owned by the database engine itself. Nothing is generated for
/// them.
pub const SYSTEM_SCHEMAS: &[&str] = &["pg_catalog", "information_schema"];

/// The resolved schema metadata supplied by the host.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub comment: String,

    /// Schema that unqualified table and type references resolve to.
    pub default_schema: String,

    pub name: String,

    pub schemas: Vec<Schema>,
}

impl Catalog {
    pub fn new(default_schema: impl Into<String>) -> Catalog {
        Catalog {
            default_schema: default_schema.into(),
            ..Catalog::default()
        }
    }

    pub fn schema(mut self, schema: Schema) -> Self {
        self.schemas.push(schema);
        self
    }

    /// Iterates the schemas code is generated for, skipping system schemas.
    pub fn user_schemas(&self) -> impl Iterator<Item = &Schema> + '_ {
        self.schemas
            .iter()
            .filter(|schema| !SYSTEM_SCHEMAS.contains(&schema.name.as_str()))
    }

    /// Returns `true` if `schema` is the catalog's default schema.
    pub fn is_default_schema(&self, schema: &str) -> bool {
        schema == self.default_schema
    }

    /// Name used for generated types: the bare name in the default schema,
    /// `schema_name` everywhere else.
    pub fn qualified_name(&self, schema: &str, name: &str) -> String {
        if self.is_default_schema(schema) {
            name.to_string()
        } else {
            format!("{schema}_{name}")
        }
    }
}
