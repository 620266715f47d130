mod errors;
mod logging;
mod resolver;
mod root;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use resolver::{ResolverConfig, DEFAULT_SERVER};
pub use root::{CliOverrides, Config};
