//! Input model for the C# binding generator: the resolved catalog, the
//! parsed queries and the settings handed over by the sqlc host.

#[macro_use]
mod macros;

pub mod catalog;
pub use catalog::Catalog;

mod config;
pub use config::Config;

mod error;
pub use error::Error;

pub mod query;
pub use query::Query;

mod request;
pub use request::Request;

pub mod settings;
pub use settings::Settings;

/// A Result type alias that uses the generator's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
