mod engine;
pub use engine::Engine;

mod type_override;
pub use type_override::{ColumnRule, Override};

mod pattern;
pub use pattern::Pattern;

use indexmap::IndexMap;
use serde::Deserialize;

/// Generation settings shared by all plugins of a sqlc run.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub engine: Engine,

    /// Type overrides, evaluated in declaration order.
    pub overrides: Vec<Override>,

    /// Exact identifier renames, consulted before any naming rule.
    pub rename: IndexMap<String, String>,
}

impl Settings {
    pub fn new(engine: Engine) -> Settings {
        Settings {
            engine,
            ..Settings::default()
        }
    }

    pub fn rename(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.rename.insert(from.into(), to.into());
        self
    }

    pub fn override_type(mut self, rule: Override) -> Self {
        self.overrides.push(rule);
        self
    }
}
