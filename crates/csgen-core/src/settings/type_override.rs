use super::Pattern;
use crate::catalog::{Column, Identifier};
use crate::Error;
use serde::Deserialize;

/// Replaces the generated C# type of matching columns.
///
/// An override either targets specific columns (`column` rule) or every
/// column of a database type with a given nullability (`db_type`).
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "OverrideDef")]
pub struct Override {
    /// The C# type to emit. Overrides without one are ignored.
    pub code_type: String,

    pub db_type: String,

    /// The nullability this override applies to, for `db_type` rules.
    pub nullable: bool,

    pub column: Option<ColumnRule>,
}

/// Column selector parsed from `[catalog.][schema.]table.column`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRule {
    pub catalog: Option<Pattern>,

    /// `None` selects the catalog's default schema.
    pub schema: Option<Pattern>,

    pub table: Pattern,

    pub column: Pattern,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct OverrideDef {
    code_type: String,
    db_type: String,
    nullable: bool,
    column: String,
}

impl TryFrom<OverrideDef> for Override {
    type Error = Error;

    fn try_from(def: OverrideDef) -> Result<Override, Error> {
        let column = if def.column.is_empty() {
            None
        } else {
            Some(ColumnRule::parse(&def.column)?)
        };

        Ok(Override {
            code_type: def.code_type,
            db_type: def.db_type,
            nullable: def.nullable,
            column,
        })
    }
}

impl Override {
    /// An override for columns matching `selector` (`table.column`,
    /// `schema.table.column` or `catalog.schema.table.column`).
    pub fn column(selector: &str, code_type: impl Into<String>) -> crate::Result<Override> {
        Ok(Override {
            code_type: code_type.into(),
            db_type: String::new(),
            nullable: false,
            column: Some(ColumnRule::parse(selector)?),
        })
    }

    /// An override for every column of `db_type` with the given nullability.
    pub fn db_type(
        db_type: impl Into<String>,
        nullable: bool,
        code_type: impl Into<String>,
    ) -> Override {
        Override {
            code_type: code_type.into(),
            db_type: db_type.into(),
            nullable,
            column: None,
        }
    }

    /// Returns `true` if this is a column rule matching `column`.
    pub fn matches_column(&self, column: &Column, default_schema: &str) -> bool {
        let Some(rule) = &self.column else {
            return false;
        };

        let Some(table) = &column.table else {
            return false;
        };

        rule.column.matches(&column.name) && rule.matches_table(table, default_schema)
    }
}

impl ColumnRule {
    pub fn parse(selector: &str) -> crate::Result<ColumnRule> {
        let parts: Vec<&str> = selector.split('.').collect();

        let (catalog, schema, table, column) = match parts[..] {
            [table, column] => (None, None, table, column),
            [schema, table, column] => (None, Some(schema), table, column),
            [catalog, schema, table, column] => (Some(catalog), Some(schema), table, column),
            _ => bail!(
                "override `column` specifier {selector:?} is not the proper format, expected '[catalog.][schema.]tablename.colname'"
            ),
        };

        Ok(ColumnRule {
            catalog: catalog.map(Pattern::new).transpose()?,
            schema: schema.map(Pattern::new).transpose()?,
            table: Pattern::new(table)?,
            column: Pattern::new(column)?,
        })
    }

    fn matches_table(&self, table: &Identifier, default_schema: &str) -> bool {
        if let Some(catalog) = &self.catalog {
            if !catalog.matches(&table.catalog) {
                return false;
            }
        }

        let schema = if table.schema.is_empty() {
            default_schema
        } else {
            &table.schema
        };

        let schema_matches = match &self.schema {
            Some(pattern) => pattern.matches(schema),
            None => schema == default_schema,
        };

        schema_matches && self.table.matches(&table.name)
    }
}
