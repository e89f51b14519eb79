use crate::{
    class::{Class, Member},
    name, Context, ResolvedType,
};
use csgen_core::{catalog::Column, Error, Result};
use indexmap::IndexMap;
use std::collections::HashMap;

/// A column tagged with an id, so that a parameter referenced several times
/// in a query maps to a single member.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CodeColumn<'a> {
    pub(crate) id: i32,
    pub(crate) column: &'a Column,
}

/// Builds a query-scoped class from an ordered list of columns.
///
/// Columns sharing a base name get numeric suffixes (`ID`, `ID_2`, ...).
/// With `use_id`, columns sharing an id reuse the suffix assigned to the
/// first of them and collapse into one member.
pub(crate) fn columns_to_class(
    cx: &Context<'_>,
    name: String,
    columns: &[CodeColumn<'_>],
    use_id: bool,
) -> Result<Class> {
    // Base member name -> positions using it
    let mut seen: HashMap<String, Vec<usize>> = HashMap::new();
    // Column id -> assigned suffix
    let mut suffixes: HashMap<i32, usize> = HashMap::new();

    let mut members = Vec::with_capacity(columns.len());
    let mut types = Vec::with_capacity(columns.len());

    for (i, code_column) in columns.iter().enumerate() {
        let column = code_column.column;
        let col_name = name::column_name(column, i);
        let base_name = cx.class_name(&col_name);

        let suffix = match suffixes.get(&code_column.id) {
            Some(suffix) if use_id => *suffix,
            _ => match seen.get(&base_name).map(Vec::len) {
                Some(uses) if uses > 0 && !column.is_named_param => uses + 1,
                _ => 0,
            },
        };
        suffixes.insert(code_column.id, suffix);

        let member_name = if suffix > 0 {
            format!("{base_name}_{suffix}")
        } else {
            base_name.clone()
        };

        let ty = cx.resolve_type(column);
        members.push(Member::from_column(
            cx,
            member_name,
            &col_name,
            ty.name().to_string(),
            column,
        ));
        types.push(ty);

        seen.entry(base_name).or_default().push(i);
    }

    unify_opaque_types(&mut members, &types, &seen);

    let groups = group_by_name(&members);
    check_member_types(&members, &groups)?;

    Ok(Class {
        table: None,
        name,
        members: dedup_members(members, &groups),
        comment: String::new(),
    })
}

/// Positions of members, grouped by final member name in first-seen order.
fn group_by_name(members: &[Member]) -> IndexMap<String, Vec<usize>> {
    let mut groups: IndexMap<String, Vec<usize>> = IndexMap::new();
    for (i, member) in members.iter().enumerate() {
        groups.entry(member.name.clone()).or_default().push(i);
    }
    groups
}

/// A member that only resolved to the `object` fallback takes the type of
/// the first concretely typed column sharing its base name, suffixed
/// siblings included. Only the member still carrying the bare base name is
/// rewritten.
fn unify_opaque_types(
    members: &mut [Member],
    types: &[ResolvedType],
    seen: &HashMap<String, Vec<usize>>,
) {
    for (base_name, positions) in seen.iter().filter(|(_, positions)| positions.len() > 1) {
        for &i in positions {
            if !types[i].is_opaque() || members[i].name != *base_name {
                continue;
            }

            let concrete = positions
                .iter()
                .find(|&&j| j != i && !types[j].is_opaque());

            if let Some(&j) = concrete {
                members[i].ty = members[j].ty.clone();
            }
        }
    }
}

fn check_member_types(members: &[Member], groups: &IndexMap<String, Vec<usize>>) -> Result<()> {
    for (name, positions) in groups {
        let first = &members[positions[0]].ty;

        if let Some(other) = positions[1..]
            .iter()
            .map(|&i| &members[i].ty)
            .find(|ty| *ty != first)
        {
            return Err(Error::incompatible_member_type(name, other, first));
        }
    }

    Ok(())
}

/// Keeps the first member of each name group.
fn dedup_members(members: Vec<Member>, groups: &IndexMap<String, Vec<usize>>) -> Vec<Member> {
    if groups.len() == members.len() {
        return members;
    }

    members
        .into_iter()
        .enumerate()
        .filter(|(i, member)| groups[&member.name][0] == *i)
        .map(|(_, member)| member)
        .collect()
}
