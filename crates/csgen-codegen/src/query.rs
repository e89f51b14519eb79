use crate::{
    class::{Class, Member},
    columns::{columns_to_class, CodeColumn},
    name, Context,
};
use csgen_core::{
    catalog::{Column, Identifier},
    query::Cmd,
    Result,
};
use serde::Serialize;

/// A query together with its resolved argument and return bindings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    pub cmd: Cmd,
    pub comments: Vec<String>,
    pub method_name: String,
    pub constant_name: String,
    pub sql: String,
    pub source_name: String,
    pub arg: QueryValue,
    pub ret: QueryValue,

    /// Target table of an `INSERT`.
    pub table: Option<Identifier>,
}

/// The input or output side of a query: nothing, a scalar, or a class.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct QueryValue {
    /// The class must be declared alongside the query. False when an
    /// existing table class is reused, or when the members are passed
    /// inline at the call site.
    pub emit: bool,

    pub name: String,

    pub db_name: String,

    pub class: Option<Class>,

    #[serde(rename = "type")]
    pub ty: String,

    pub not_null: bool,

    pub column: Option<Column>,
}

impl Query {
    pub fn has_args(&self) -> bool {
        !self.arg.is_empty()
    }
}

impl QueryValue {
    pub fn is_empty(&self) -> bool {
        self.ty.is_empty() && self.name.is_empty() && self.class.is_none()
    }

    pub fn is_class(&self) -> bool {
        self.class.is_some()
    }

    pub fn emit_class(&self) -> bool {
        self.emit
    }

    /// The scalar type, or the class name for class bindings.
    pub fn ty(&self) -> Option<&str> {
        if !self.ty.is_empty() {
            Some(&self.ty)
        } else {
            self.class.as_ref().map(|class| class.name.as_str())
        }
    }

    /// The type of the value when returned from a query. Single-row lookups
    /// may find nothing, so with null operators the type is always nullable.
    pub fn return_type(&self, emit_null: bool) -> Option<String> {
        let ty = self.ty()?;

        if !emit_null || ty.ends_with('?') {
            Some(ty.to_string())
        } else {
            Some(format!("{ty}?"))
        }
    }

    /// The call-site parameter list for this value: `type name`, or one
    /// `type name` pair per member when the class members are passed
    /// inline.
    pub fn pair(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        match &self.class {
            Some(class) if !self.emit => class
                .members
                .iter()
                .map(|member| format!("{} {}", member.ty, member.name.to_lowercase()))
                .collect::<Vec<_>>()
                .join(", "),
            _ => format!("{} {}", self.ty().unwrap_or_default(), self.name),
        }
    }

    /// Class members with duplicate names removed, in declaration order.
    pub fn unique_members(&self) -> Vec<&Member> {
        let Some(class) = &self.class else {
            return vec![];
        };

        let mut seen = std::collections::HashSet::new();
        class
            .members
            .iter()
            .filter(|member| seen.insert(member.name.as_str()))
            .collect()
    }
}

pub(crate) fn build_queries(
    cx: &Context<'_>,
    queries: &[csgen_core::Query],
    classes: &[Class],
) -> Result<Vec<Query>> {
    let mut out = Vec::with_capacity(queries.len());

    for query in queries {
        if query.name.is_empty() {
            tracing::debug!(filename = %query.filename, "skipping unnamed query");
            continue;
        }

        let Some(cmd) = Cmd::parse(&query.cmd) else {
            tracing::debug!(query = %query.name, "skipping query without a command");
            continue;
        };

        let built = build_query(cx, query, cmd, classes)
            .map_err(|err| err.context(csgen_core::err!("query `{}`", query.name)))?;
        out.push(built);
    }

    out.sort_by(|a, b| a.method_name.cmp(&b.method_name));
    Ok(out)
}

fn build_query(
    cx: &Context<'_>,
    query: &csgen_core::Query,
    cmd: Cmd,
    classes: &[Class],
) -> Result<Query> {
    let arg = build_arg(cx, query)?;
    let ret = build_ret(cx, query, classes)?;

    tracing::debug!(
        query = %query.name,
        arg = arg.ty().unwrap_or_default(),
        ret = ret.ty().unwrap_or_default(),
        "query built"
    );

    Ok(Query {
        cmd,
        comments: query.comments.clone(),
        method_name: query.name.clone(),
        constant_name: name::constant_name(&query.name),
        sql: query.text.clone(),
        source_name: query.filename.clone(),
        arg,
        ret,
        table: query.insert_into_table.clone(),
    })
}

fn build_arg(cx: &Context<'_>, query: &csgen_core::Query) -> Result<QueryValue> {
    let limit = cx.config.query_param_limit;

    match &query.params[..] {
        [] => Ok(QueryValue::default()),
        [param] if limit != 0 => Ok(QueryValue {
            name: name::param_name(param),
            db_name: param.column.name.clone(),
            ty: cx.resolve_type(&param.column).into_name(),
            not_null: cx.config.emit_null_operators && param.column.not_null,
            column: Some(param.column.clone()),
            ..QueryValue::default()
        }),
        params => {
            let columns: Vec<_> = params
                .iter()
                .map(|param| CodeColumn {
                    id: param.number,
                    column: &param.column,
                })
                .collect();

            let class_name = format!("{}Params", query.name);
            let class = columns_to_class(cx, class_name, &columns, true)?;

            Ok(QueryValue {
                emit: params.len() > limit,
                name: "arg".to_string(),
                class: Some(class),
                ..QueryValue::default()
            })
        }
    }
}

fn build_ret(
    cx: &Context<'_>,
    query: &csgen_core::Query,
    classes: &[Class],
) -> Result<QueryValue> {
    match &query.columns[..] {
        [] => Ok(QueryValue::default()),
        [column] => {
            let mut name = name::column_name(column, 0).into_owned();
            if column.is_func_call {
                name = name.replace('$', "_");
            }

            let ty = cx.resolve_type(column).into_name();
            let not_null = cx.config.emit_null_operators && !ty.ends_with('?');

            Ok(QueryValue {
                db_name: name.clone(),
                name,
                ty,
                not_null,
                ..QueryValue::default()
            })
        }
        columns => {
            if let Some(class) = find_matching_class(cx, columns, classes) {
                tracing::debug!(query = %query.name, class = %class.name, "reusing table class");

                return Ok(QueryValue {
                    emit: false,
                    name: "i".to_string(),
                    class: Some(class.clone()),
                    ..QueryValue::default()
                });
            }

            let code_columns: Vec<_> = columns
                .iter()
                .enumerate()
                .map(|(i, column)| CodeColumn {
                    id: i as i32,
                    column,
                })
                .collect();

            let class_name = format!("{}Row", query.name);
            let class = columns_to_class(cx, class_name, &code_columns, false)?;

            Ok(QueryValue {
                emit: true,
                name: "i".to_string(),
                class: Some(class),
                ..QueryValue::default()
            })
        }
    }
}

/// Finds a table class with exactly the shape of `columns`: same member
/// count and, position by position, the same name, type and owning table.
fn find_matching_class<'a>(
    cx: &Context<'_>,
    columns: &[Column],
    classes: &'a [Class],
) -> Option<&'a Class> {
    classes.iter().find(|class| {
        class.members.len() == columns.len()
            && class
                .members
                .iter()
                .zip(columns)
                .enumerate()
                .all(|(i, (member, column))| is_same_member(cx, class, member, column, i))
    })
}

fn is_same_member(
    cx: &Context<'_>,
    class: &Class,
    member: &Member,
    column: &Column,
    pos: usize,
) -> bool {
    let same_table = match (&column.table, &class.table) {
        (Some(column_table), Some(class_table)) => {
            column_table.same_table(class_table, cx.default_schema())
        }
        _ => false,
    };

    same_table
        && member.name == cx.class_name(&name::column_name(column, pos))
        && member.ty == cx.resolve_type(column).name()
}
