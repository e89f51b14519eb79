//! Turns database names into C# identifiers.

use csgen_core::{catalog::Column, query::Parameter};
use indexmap::IndexMap;
use std::borrow::Cow;
use std_util::str;

/// Type-style identifier: `user_id` becomes `UserID`.
///
/// An entry in `rename` for the exact input wins over every rule.
pub fn class_name(name: &str, rename: &IndexMap<String, String>) -> String {
    if let Some(renamed) = rename.get(name).filter(|renamed| !renamed.is_empty()) {
        return renamed.clone();
    }

    let out: String = name
        .split('_')
        .map(|part| match part {
            "id" => Cow::Borrowed("ID"),
            _ => Cow::Owned(str::upper_first_letter(part)),
        })
        .collect();

    escape_leading_digit(out)
}

/// Parameter-style identifier: `author_id` becomes `authorID`.
pub fn argument_name(name: &str) -> String {
    let out: String = name
        .split('_')
        .enumerate()
        .map(|(i, part)| match part {
            "id" => Cow::Borrowed("ID"),
            _ if i == 0 => Cow::Owned(part.to_lowercase()),
            _ => Cow::Owned(str::upper_first_letter(part)),
        })
        .collect();

    escape_leading_digit(out)
}

/// Strips characters that cannot appear in an identifier from an enum
/// literal.
pub fn enum_value_name(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '-' | ':' | '/' => '_',
            c => c,
        })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Column name, or `column_<n>` (1-based) for anonymous columns.
pub fn column_name(column: &Column, pos: usize) -> Cow<'_, str> {
    if column.name.is_empty() {
        Cow::Owned(format!("column_{}", pos + 1))
    } else {
        Cow::Borrowed(&column.name)
    }
}

/// Name of a parameter bound directly as a scalar.
pub fn param_name(param: &Parameter) -> String {
    if param.column.name.is_empty() {
        format!("dollar_{}", param.number)
    } else {
        argument_name(&param.column.name)
    }
}

/// Name of the constant holding a query's SQL text.
pub fn constant_name(query_name: &str) -> String {
    format!("{}_SQL", query_name.to_uppercase())
}

fn escape_leading_digit(name: String) -> String {
    if str::starts_with_digit(&name) {
        format!("_{name}")
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_renames() -> IndexMap<String, String> {
        IndexMap::new()
    }

    #[test]
    fn class_name_capitalizes_segments() {
        assert_eq!(class_name("user_id", &no_renames()), "UserID");
        assert_eq!(class_name("author", &no_renames()), "Author");
        assert_eq!(class_name("book_tags", &no_renames()), "BookTags");
        assert_eq!(class_name("", &no_renames()), "");
    }

    #[test]
    fn id_is_only_replaced_when_lowercase() {
        assert_eq!(class_name("ID_card", &no_renames()), "IDCard");
        assert_eq!(class_name("Id", &no_renames()), "Id");
        assert_eq!(class_name("idx", &no_renames()), "Idx");
    }

    #[test]
    fn class_name_escapes_leading_digit() {
        assert_eq!(class_name("2fast", &no_renames()), "_2Fast");
        assert_eq!(class_name("_2", &no_renames()), "_2");
    }

    #[test]
    fn rename_wins_verbatim() {
        let mut rename = IndexMap::new();
        rename.insert("2fast_id".to_string(), "too_quick".to_string());

        assert_eq!(class_name("2fast_id", &rename), "too_quick");
        assert_eq!(class_name("2fast", &rename), "_2Fast");
    }

    #[test]
    fn argument_name_lowercases_first_segment() {
        assert_eq!(argument_name("author_id"), "authorID");
        assert_eq!(argument_name("Name"), "name");
        assert_eq!(argument_name("id"), "ID");
        assert_eq!(argument_name("id_list"), "IDList");
        assert_eq!(argument_name("2fast"), "_2fast");
    }

    #[test]
    fn enum_values_are_cleaned() {
        assert_eq!(enum_value_name("in-progress"), "in_progress");
        assert_eq!(enum_value_name("a:b/c"), "a_b_c");
        assert_eq!(enum_value_name("hello world!"), "helloworld");
        assert_eq!(enum_value_name(")"), "");
    }

    #[test]
    fn anonymous_columns_are_numbered() {
        assert_eq!(column_name(&Column::new("", "int4"), 0), "column_1");
        assert_eq!(column_name(&Column::new("bio", "text"), 4), "bio");
    }

    #[test]
    fn param_names() {
        let named = Parameter {
            number: 1,
            column: Column::new("author_id", "int4"),
        };
        let anonymous = Parameter {
            number: 3,
            column: Column::new("", "int4"),
        };

        assert_eq!(param_name(&named), "authorID");
        assert_eq!(param_name(&anonymous), "dollar_3");
        assert_eq!(constant_name("GetAuthor"), "GETAUTHOR_SQL");
    }
}
