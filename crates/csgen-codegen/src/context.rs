use crate::inflection::Inflector;
use csgen_core::{Catalog, Config, Request, Settings};

use std::{cell::RefCell, collections::HashSet};

/// State shared by every step of one generation run.
///
/// A context is built per request and never shared between runs.
pub struct Context<'a> {
    pub(crate) catalog: &'a Catalog,
    pub(crate) settings: &'a Settings,
    pub(crate) config: &'a Config,
    pub(crate) inflector: &'a dyn Inflector,

    /// Span all log lines of the run are recorded in.
    span: tracing::Span,

    /// Database types already reported as unmapped.
    unmapped: RefCell<HashSet<String>>,
}

impl<'a> Context<'a> {
    pub fn new(request: &'a Request, config: &'a Config, inflector: &'a dyn Inflector) -> Self {
        Context {
            catalog: &request.catalog,
            settings: &request.settings,
            config,
            inflector,
            span: tracing::debug_span!("generate", sqlc_version = %request.sqlc_version),
            unmapped: RefCell::new(HashSet::new()),
        }
    }

    pub fn span(&self) -> &tracing::Span {
        &self.span
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    pub(crate) fn default_schema(&self) -> &str {
        &self.catalog.default_schema
    }

    /// Sanitized type name honoring the rename table.
    pub(crate) fn class_name(&self, name: &str) -> String {
        crate::name::class_name(name, &self.settings.rename)
    }

    /// Records that `db_type` had no mapping. Returns `true` the first time
    /// a type is seen.
    pub(crate) fn report_unmapped(&self, db_type: &str) -> bool {
        self.unmapped.borrow_mut().insert(db_type.to_string())
    }
}
