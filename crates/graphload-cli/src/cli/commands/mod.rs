//! CLI command handlers, one per file.

pub(crate) mod check_host;
mod config;
pub(crate) mod normalize;
pub(crate) mod translate;

pub use check_host::run_check_host;
pub use config::run_config;
pub use normalize::run_normalize;
pub use translate::run_translate;
