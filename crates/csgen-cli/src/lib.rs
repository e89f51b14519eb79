pub mod gen;
pub mod logging;
