use super::Error;

/// Error when the plugin options or the request document cannot be decoded.
#[derive(Debug)]
pub(super) struct InvalidConfig {
    source: serde_json::Error,
}

impl std::error::Error for InvalidConfig {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl core::fmt::Display for InvalidConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid plugin options: {}", self.source)
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Error {
        Error::from(super::ErrorKind::InvalidConfig(InvalidConfig { source }))
    }
}

impl Error {
    /// Returns `true` if this error (or a cause) is an invalid configuration
    /// error.
    pub fn is_invalid_config(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::InvalidConfig(_)))
    }
}
