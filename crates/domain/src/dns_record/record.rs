use super::{RecordData, RecordType};
use crate::dns_message::CLASS_IN;
use std::fmt;

/// One answer, authority or additional entry of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Owner name, compression resolved.
    pub name: String,

    pub record_type: RecordType,

    pub class: u16,

    /// Seconds; carried through, never interpreted.
    pub ttl: u32,

    pub data_length: u16,

    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        ttl: u32,
        data_length: u16,
        data: RecordData,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            class: CLASS_IN,
            ttl,
            data_length,
            data,
        }
    }

    pub fn is_type(&self, record_type: RecordType) -> bool {
        self.record_type == record_type
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = if self.class == CLASS_IN {
            "IN".to_string()
        } else {
            format!("CLASS{}", self.class)
        };
        write!(
            f,
            "{} {} {} {} {}",
            self.name, self.ttl, class, self.record_type, self.data
        )
    }
}
