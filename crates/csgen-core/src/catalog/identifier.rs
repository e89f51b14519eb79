use serde::{Deserialize, Serialize};
use std::fmt;

/// A possibly qualified reference to a table or a type.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct Identifier {
    pub catalog: String,
    pub schema: String,
    pub name: String,
}

impl Identifier {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Identifier {
        Identifier {
            catalog: String::new(),
            schema: schema.into(),
            name: name.into(),
        }
    }

    /// An unqualified reference, e.g. a builtin type name.
    pub fn unqualified(name: impl Into<String>) -> Identifier {
        Identifier::new("", name)
    }

    /// The type name as written in the catalog, `schema.name` when the
    /// schema is known.
    pub fn data_type(&self) -> String {
        if self.schema.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.schema, self.name)
        }
    }

    /// Compares two table references, resolving a missing schema on `self`
    /// to `default_schema`.
    pub fn same_table(&self, other: &Identifier, default_schema: &str) -> bool {
        let schema = if self.schema.is_empty() {
            default_schema
        } else {
            &self.schema
        };

        self.catalog == other.catalog && schema == other.schema && self.name == other.name
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data_type())
    }
}
