use crate::{Catalog, Config, Query, Result, Settings};
use serde::Deserialize;

/// A complete generation request as handed over by the host.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Request {
    pub settings: Settings,

    pub catalog: Catalog,

    pub queries: Vec<Query>,

    pub sqlc_version: String,

    /// Raw plugin options; decoded with [`Request::config`].
    pub plugin_options: Option<serde_json::Value>,
}

impl Request {
    pub fn from_json(src: &[u8]) -> Result<Request> {
        serde_json::from_slice(src).map_err(|e| err!("invalid generation request: {e}"))
    }

    /// Decodes the plugin options carried by the request.
    pub fn config(&self) -> Result<Config> {
        match &self.plugin_options {
            None | Some(serde_json::Value::Null) => Ok(Config::default()),
            Some(options) => Ok(Config::deserialize(options)?),
        }
    }
}
