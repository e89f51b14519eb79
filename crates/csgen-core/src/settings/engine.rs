use serde::Deserialize;
use std::fmt;

/// The database engine the catalog was resolved against.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    #[default]
    Postgresql,
    Mysql,
    Sqlite,
    #[serde(other)]
    Unknown,
}

impl Engine {
    /// Strips the engine's builtin type namespace from a type name, so that
    /// `pg_catalog.int4` and `int4` are looked up the same way.
    pub fn normalize_type<'a>(&self, data_type: &'a str) -> &'a str {
        match self {
            Engine::Postgresql => data_type
                .strip_prefix("pg_catalog.")
                .unwrap_or(data_type),
            _ => data_type,
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Engine::Postgresql => "postgresql",
            Engine::Mysql => "mysql",
            Engine::Sqlite => "sqlite",
            Engine::Unknown => "unknown",
        })
    }
}
