/// Uppercases the first letter of `src`, leaving everything else untouched.
/// Leading digits and punctuation are skipped over (`2fast` -> `2Fast`).
pub fn upper_first_letter(src: &str) -> String {
    match src.char_indices().find(|(_, c)| c.is_alphabetic()) {
        Some((i, first)) => {
            let mut out = String::with_capacity(src.len());
            out.push_str(&src[..i]);
            out.extend(first.to_uppercase());
            out.push_str(&src[i + first.len_utf8()..]);
            out
        }
        None => src.to_string(),
    }
}

/// Returns `true` if the first character is an ASCII digit.
pub fn starts_with_digit(src: &str) -> bool {
    src.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Strips a trailing file extension (`queries.sql` -> `queries`).
///
/// Only the last path component is inspected, so dots in directory names are
/// left alone.
pub fn strip_extension(src: &str) -> &str {
    let file_start = src.rfind('/').map(|i| i + 1).unwrap_or(0);

    match src[file_start..].rfind('.') {
        Some(0) | None => src,
        Some(dot) => &src[..file_start + dot],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_first_letter_handles_empty_and_unicode() {
        assert_eq!(upper_first_letter(""), "");
        assert_eq!(upper_first_letter("author"), "Author");
        assert_eq!(upper_first_letter("éclair"), "Éclair");
        assert_eq!(upper_first_letter("ID"), "ID");
    }

    #[test]
    fn upper_first_letter_skips_leading_digits() {
        assert_eq!(upper_first_letter("2fast"), "2Fast");
        assert_eq!(upper_first_letter("42"), "42");
    }

    #[test]
    fn strip_extension_only_touches_file_name() {
        assert_eq!(strip_extension("query.sql"), "query");
        assert_eq!(strip_extension("sql/v1.2/query"), "sql/v1.2/query");
        assert_eq!(strip_extension("sql/v1.2/query.sql"), "sql/v1.2/query");
        assert_eq!(strip_extension(".hidden"), ".hidden");
    }
}
