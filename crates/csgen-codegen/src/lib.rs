//! Derives the C# declarations needed to call sqlc queries: enums, table
//! classes and per-query argument and return bindings.
//!
//! The output is a pure function of the request and the plugin config, and
//! is ordered deterministically so that rendered files are byte-stable.

mod class;
pub use class::{Class, Member};

mod columns;

mod context;
pub use context::Context;

mod enums;
pub use enums::{Enum, EnumMember};

mod inflection;
pub use inflection::{Inflector, Pluralizer};

pub mod name;

mod output;
pub use output::Output;

mod query;
pub use query::{Query, QueryValue};

mod ty;
pub use ty::ResolvedType;

use csgen_core::{Config, Request, Result};

/// Builds the output model for `request`, singularizing table names with
/// the default [`Pluralizer`].
pub fn generate(request: &Request, config: &Config) -> Result<Output> {
    generate_with(request, config, &Pluralizer)
}

/// Builds the output model for `request` using a custom inflector.
pub fn generate_with(
    request: &Request,
    config: &Config,
    inflector: &dyn Inflector,
) -> Result<Output> {
    let cx = Context::new(request, config, inflector);
    let _entered = cx.span().enter();

    tracing::debug!(
        engine = %request.settings.engine,
        queries = request.queries.len(),
        "beginning generation"
    );

    let enums = enums::build_enums(&cx);
    let classes = class::build_classes(&cx);
    let queries = query::build_queries(&cx, &request.queries, &classes)?;

    tracing::debug!(
        enums = enums.len(),
        classes = classes.len(),
        queries = queries.len(),
        "generation finished"
    );

    Ok(Output {
        enums,
        classes,
        queries,
    })
}
