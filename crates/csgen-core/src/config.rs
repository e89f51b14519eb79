use crate::Result;
use serde::Deserialize;
use std::path::PathBuf;

/// Plugin options, passed by the host as a JSON document.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Namespace of the generated C# code.
    pub namespace: String,

    /// Queries with at most this many parameters take them inline at the
    /// call site. A single parameter is bound as a plain scalar unless this
    /// is `0`.
    pub query_param_limit: usize,

    pub emit_async: bool,

    /// Emit `?` annotations on nullable value types.
    #[serde(rename = "emit_null_ops")]
    pub emit_null_operators: bool,

    /// Write generation logs to this file instead of stderr.
    pub log_file: Option<PathBuf>,

    /// Use table names as-is instead of singularizing them.
    pub emit_exact_table_names: bool,

    /// Table names that are never singularized.
    pub inflection_exclude_table_names: Vec<String>,
}

impl Config {
    /// Decodes plugin options. Empty options yield the default config.
    pub fn from_json(options: &[u8]) -> Result<Config> {
        if options.iter().all(u8::is_ascii_whitespace) {
            return Ok(Config::default());
        }

        Ok(serde_json::from_slice(options)?)
    }

    /// Returns `true` if `table` was excluded from singularization.
    pub fn is_inflection_excluded(&self, table: &str) -> bool {
        self.inflection_exclude_table_names
            .iter()
            .any(|name| name.eq_ignore_ascii_case(table))
    }
}
