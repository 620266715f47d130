//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format: the 12-byte header followed
//! by a single question.

use crate::dns::wire::{encode_name, WireWriter};
use ferrous_lookup_domain::{DomainError, Header, Query, RecordType, CLASS_IN};

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a DNS query message and serialize to wire format bytes
    ///
    /// Creates a standard recursive query with:
    /// - Random ID for request/response matching
    /// - RD (Recursion Desired) flag set
    /// - Single question section, class IN
    pub fn build_query(domain: &str, record_type: &RecordType) -> Result<Vec<u8>, DomainError> {
        Self::build_query_with_id(domain, record_type).map(|(_, bytes)| bytes)
    }

    /// Build a query message and return both the ID and bytes
    ///
    /// Useful when you need the message ID for response matching.
    pub fn build_query_with_id(
        domain: &str,
        record_type: &RecordType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let query = Query::new(fastrand::u16(..), domain, *record_type);
        let bytes = Self::encode(&query)?;
        Ok((query.id, bytes))
    }

    /// Serialize a query. Only the first question is written and QDCOUNT is
    /// always 1.
    pub fn encode(query: &Query) -> Result<Vec<u8>, DomainError> {
        let question = query.question()?;

        let header = Header {
            flags: query.flags,
            ..Header::query(query.id)
        };

        let mut writer = WireWriter::new();
        write_header(&mut writer, &header);
        encode_name(&mut writer, &question.name)?;
        writer.put_u16(question.record_type);
        writer.put_u16(if question.class == 0 {
            CLASS_IN
        } else {
            question.class
        });

        Ok(writer.into_bytes())
    }
}

pub(crate) fn write_header(writer: &mut WireWriter, header: &Header) {
    writer.put_u16(header.id);
    writer.put_u16(header.flags);
    writer.put_u16(header.question_count);
    writer.put_u16(header.answer_count);
    writer.put_u16(header.authority_count);
    writer.put_u16(header.additional_count);
}
