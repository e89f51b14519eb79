use serde::Deserialize;

/// A database enumeration with its literal values in declaration order.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Enum {
    pub name: String,
    pub vals: Vec<String>,
    pub comment: String,
}

impl Enum {
    pub fn new<I, S>(name: impl Into<String>, vals: I) -> Enum
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Enum {
            name: name.into(),
            vals: vals.into_iter().map(Into::into).collect(),
            comment: String::new(),
        }
    }
}
