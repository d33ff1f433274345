pub mod config;
pub mod error;
pub mod logging;

pub mod host_policy;
pub mod loader;
pub mod normalize;
pub mod protocol;
pub mod translate;
pub mod url_model;

pub use error::{LoadError, NormalizeError, TranslateError};
pub use loader::{GraphLoader, Transport};
pub use protocol::Protocol;
pub use translate::{ActionKind, RequestDescriptor, SafeRequest, Translator};
