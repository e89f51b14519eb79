use crate::{Class, Enum, Query};
use serde::Serialize;
use std::collections::BTreeSet;

/// Everything the renderer needs, in deterministic order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Output {
    /// Enums sorted by name.
    pub enums: Vec<Enum>,

    /// Table classes sorted by name.
    pub classes: Vec<Class>,

    /// Queries sorted by method name.
    pub queries: Vec<Query>,
}

impl Output {
    /// Source files the queries came from, extension stripped. One query
    /// file is rendered for each.
    pub fn source_files(&self) -> Vec<&str> {
        let files: BTreeSet<&str> = self
            .queries
            .iter()
            .map(|query| std_util::str::strip_extension(&query.source_name))
            .collect();

        files.into_iter().collect()
    }

    /// Queries read from `source_file` (extension stripped).
    pub fn queries_in<'a>(&'a self, source_file: &'a str) -> impl Iterator<Item = &'a Query> + 'a {
        self.queries.iter().filter(move |query| {
            std_util::str::strip_extension(&query.source_name) == source_file
        })
    }
}
