use crate::{name, Context};
use serde::Serialize;
use std::collections::HashSet;

/// A C# enum generated from a database enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enum {
    pub name: String,
    pub comment: String,
    pub members: Vec<EnumMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumMember {
    /// Sanitized member name.
    pub name: String,

    /// The database literal the member stands for.
    pub mapped_value: String,
}

pub(crate) fn build_enums(cx: &Context<'_>) -> Vec<Enum> {
    let mut enums = vec![];

    for schema in cx.catalog.user_schemas() {
        for db_enum in &schema.enums {
            let enum_name = cx.catalog.qualified_name(&schema.name, &db_enum.name);

            enums.push(Enum {
                name: cx.class_name(&enum_name),
                comment: db_enum.comment.clone(),
                members: build_members(cx, &db_enum.vals),
            });
        }
    }

    enums.sort_by(|a, b| a.name.cmp(&b.name));
    enums
}

fn build_members(cx: &Context<'_>, vals: &[String]) -> Vec<EnumMember> {
    let mut seen = HashSet::with_capacity(vals.len());

    vals.iter()
        .enumerate()
        .map(|(i, val)| {
            let value = name::enum_value_name(val);
            let mut member_name = cx.class_name(&value);

            if value.is_empty() || seen.contains(&member_name) {
                let mut suffixed = format!("{value}_{i}");
                member_name = cx.class_name(&suffixed);

                while seen.contains(&member_name) {
                    suffixed = format!("{suffixed}_{i}");
                    member_name = cx.class_name(&suffixed);
                }
            }

            seen.insert(member_name.clone());

            EnumMember {
                name: member_name,
                mapped_value: val.clone(),
            }
        })
        .collect()
}
