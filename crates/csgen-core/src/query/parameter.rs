use crate::catalog::Column;
use serde::Deserialize;

/// A query input. Parameters referenced several times in the query text
/// share the same `number`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Parameter {
    pub number: i32,
    pub column: Column,
}
