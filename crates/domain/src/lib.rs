//! Ferrous Lookup Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod errors;
pub mod reverse_address;

pub use config::{CliOverrides, Config, ConfigError, LogFormat, LoggingConfig, ResolverConfig};
pub use dns_message::{Header, Query, Question, Response, ResponseCode, CLASS_IN};
pub use dns_record::{CharacterString, MailExchange, RecordData, RecordType, ResourceRecord};
pub use errors::DomainError;
pub use reverse_address::{reverse_name, reverse_name_str};
