mod postgres;

use crate::Context;
use csgen_core::{catalog::Column, settings::Engine};
use std::fmt;

/// C# type used when a database type has no known mapping.
pub(crate) const OPAQUE_TYPE: &str = "object";

/// The C# type chosen for a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    name: String,

    /// True if the type is the `object` fallback rather than a concrete
    /// mapping.
    opaque: bool,
}

impl ResolvedType {
    fn concrete(name: impl Into<String>) -> ResolvedType {
        ResolvedType {
            name: name.into(),
            opaque: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_opaque(&self) -> bool {
        self.opaque
    }

    pub fn into_name(self) -> String {
        self.name
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Context<'_> {
    /// Resolves the C# type of `column`.
    ///
    /// Column-specific overrides are checked first and returned verbatim.
    /// Otherwise the element type comes from a database type override or the
    /// engine's default mapping, and is then wrapped as an array or, if
    /// enabled, a nullable type.
    pub fn resolve_type(&self, column: &Column) -> ResolvedType {
        for rule in &self.settings.overrides {
            if rule.code_type.is_empty() {
                continue;
            }

            if rule.matches_column(column, self.default_schema()) {
                return ResolvedType::concrete(&rule.code_type);
            }
        }

        let inner = self.inner_type(column);

        if column.is_array {
            ResolvedType {
                name: format!("{}[]", inner.name),
                opaque: false,
            }
        } else if !column.not_null && self.config.emit_null_operators {
            ResolvedType {
                name: format!("{}?", inner.name),
                ..inner
            }
        } else {
            inner
        }
    }

    fn inner_type(&self, column: &Column) -> ResolvedType {
        let engine = self.settings.engine;
        let data_type = column.ty.data_type();
        let db_type = engine.normalize_type(&data_type);

        // Arrays are never null at the element level
        let not_null = column.not_null || column.is_array;

        for rule in &self.settings.overrides {
            if rule.code_type.is_empty() || rule.db_type.is_empty() {
                continue;
            }

            if engine.normalize_type(&rule.db_type) == db_type && rule.nullable != not_null {
                return ResolvedType::concrete(&rule.code_type);
            }
        }

        let mapped = match engine {
            Engine::Postgresql => postgres::cs_type(db_type),
            _ => None,
        };

        match mapped {
            Some(name) => ResolvedType {
                name: name.to_string(),
                opaque: name == OPAQUE_TYPE,
            },
            None => {
                if self.report_unmapped(db_type) {
                    tracing::warn!(
                        %engine,
                        db_type,
                        column = %column.name,
                        "unrecognized database type; falling back to `object`"
                    );
                }

                ResolvedType {
                    name: OPAQUE_TYPE.to_string(),
                    opaque: true,
                }
            }
        }
    }
}
