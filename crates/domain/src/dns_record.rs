mod record;
mod record_data;
mod record_type;

pub use record::ResourceRecord;
pub use record_data::{CharacterString, MailExchange, RecordData};
pub use record_type::RecordType;
