use crate::Result;
use regex::Regex;
use std::fmt;

/// A glob pattern used by type overrides to match schema, table and column
/// names. `*` matches any run of characters, `?` exactly one. The whole
/// name must match.
#[derive(Debug, Clone)]
pub struct Pattern {
    src: Box<str>,
    regex: Regex,
}

impl Pattern {
    pub fn new(src: impl Into<String>) -> Result<Pattern> {
        let src = src.into();

        let mut expr = String::with_capacity(src.len() + 2);
        expr.push('^');
        for c in src.chars() {
            match c {
                '*' => expr.push_str(".*"),
                '?' => expr.push('.'),
                c => expr.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
            }
        }
        expr.push('$');

        let regex = Regex::new(&expr).map_err(|e| err!("invalid glob pattern {src:?}: {e}"))?;

        Ok(Pattern {
            src: src.into(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.src
    }

    pub fn matches(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Pattern) -> bool {
        self.src == other.src
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.src)
    }
}
