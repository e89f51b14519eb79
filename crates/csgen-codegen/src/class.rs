use crate::Context;
use csgen_core::catalog::{Column, Identifier, Table};
use serde::Serialize;

/// A generated C# record: either a table model or a query-scoped
/// `Params`/`Row` type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Class {
    /// The table this class models, if any.
    pub table: Option<Identifier>,

    pub name: String,

    pub members: Vec<Member>,

    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    pub name: String,

    /// Name of the column the member is read from.
    pub db_name: String,

    #[serde(rename = "type")]
    pub ty: String,

    /// Whether renderers may treat the member as non-nullable. Always false
    /// unless null operators are emitted.
    pub not_null: bool,

    pub comment: String,

    pub column: Option<Column>,
}

impl Member {
    pub(crate) fn from_column(
        cx: &Context<'_>,
        name: String,
        db_name: &str,
        ty: String,
        column: &Column,
    ) -> Member {
        Member {
            name,
            db_name: db_name.to_string(),
            ty,
            not_null: cx.config.emit_null_operators && column.not_null,
            comment: column.comment.clone(),
            column: Some(column.clone()),
        }
    }
}

pub(crate) fn build_classes(cx: &Context<'_>) -> Vec<Class> {
    tracing::debug!("building classes");

    let mut classes = vec![];

    for schema in cx.catalog.user_schemas() {
        for table in &schema.tables {
            classes.push(build_class(cx, &schema.name, table));
        }
    }

    classes.sort_by(|a, b| a.name.cmp(&b.name));

    tracing::debug!(count = classes.len(), "classes built");
    classes
}

fn build_class(cx: &Context<'_>, schema: &str, table: &Table) -> Class {
    let table_name = cx.catalog.qualified_name(schema, &table.rel.name);

    let keep_name =
        cx.config.emit_exact_table_names || cx.config.is_inflection_excluded(&table_name);

    let class_name = if keep_name {
        table_name
    } else {
        cx.inflector.singular(&table_name)
    };

    let members = table
        .columns
        .iter()
        .map(|column| {
            let ty = cx.resolve_type(column).into_name();
            Member::from_column(cx, cx.class_name(&column.name), &column.name, ty, column)
        })
        .collect();

    Class {
        table: Some(Identifier {
            catalog: table.rel.catalog.clone(),
            schema: schema.to_string(),
            name: table.rel.name.clone(),
        }),
        name: cx.class_name(&class_name),
        members,
        comment: table.comment.clone(),
    }
}
