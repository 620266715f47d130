use crate::dns::wire::{decode_rdata, NameDecoder, WireReader};
use ferrous_lookup_domain::{DomainError, Header, Question, Response, ResourceRecord};
use tracing::debug;

/// Decodes a complete response message.
///
/// Decoding stops at the first failure and nothing partial is returned. One
/// [`NameDecoder`] (and so one pointer cache) is shared by the question,
/// answer, authority and additional sections of a message.
pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<Response, DomainError> {
        let mut reader = WireReader::new(response_bytes);
        let header = read_header(&mut reader)?;

        if let Some(error) = header.response_code().to_error() {
            debug!(
                id = header.id,
                rcode = %header.response_code(),
                "DNS server returned error"
            );
            return Err(error);
        }

        let mut names = NameDecoder::new(response_bytes);

        let questions = (0..header.question_count)
            .map(|_| read_question(&mut reader, &mut names))
            .collect::<Result<Vec<_>, _>>()?;

        if reader.is_empty() || header.answer_count == 0 {
            return Err(DomainError::NoAnswer);
        }

        let answers = read_records(&mut reader, &mut names, header.answer_count)?;
        let authorities = read_records(&mut reader, &mut names, header.authority_count)?;
        let additionals = read_records(&mut reader, &mut names, header.additional_count)?;

        debug!(
            id = header.id,
            answers = answers.len(),
            authority = authorities.len(),
            additional = additionals.len(),
            truncated = header.is_truncated(),
            pointers_resolved = names.resolutions(),
            pointer_cache_hits = names.cache_hits(),
            "DNS response parsed"
        );

        Ok(Response {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }
}

pub fn read_header(reader: &mut WireReader<'_>) -> Result<Header, DomainError> {
    if reader.remaining() < Header::LEN {
        return Err(DomainError::invalid_answer(format!(
            "message of {} bytes is shorter than the header",
            reader.remaining()
        )));
    }

    Ok(Header {
        id: reader.read_u16()?,
        flags: reader.read_u16()?,
        question_count: reader.read_u16()?,
        answer_count: reader.read_u16()?,
        authority_count: reader.read_u16()?,
        additional_count: reader.read_u16()?,
    })
}

fn read_question(
    reader: &mut WireReader<'_>,
    names: &mut NameDecoder<'_>,
) -> Result<Question, DomainError> {
    let (name, consumed) = names.decode(reader.position())?;
    reader.skip(consumed)?;

    Ok(Question {
        name,
        record_type: reader.read_u16()?,
        class: reader.read_u16()?,
    })
}

fn read_records(
    reader: &mut WireReader<'_>,
    names: &mut NameDecoder<'_>,
    count: u16,
) -> Result<Vec<ResourceRecord>, DomainError> {
    let mut records = Vec::with_capacity(count.min(64) as usize);
    for _ in 0..count {
        records.push(read_record(reader, names)?);
    }
    Ok(records)
}

fn read_record(
    reader: &mut WireReader<'_>,
    names: &mut NameDecoder<'_>,
) -> Result<ResourceRecord, DomainError> {
    let (name, consumed) = names.decode(reader.position())?;
    reader.skip(consumed)?;

    let type_code = reader.read_u16()?;
    let class = reader.read_u16()?;
    let ttl = reader.read_u32()?;
    let data_length = reader.read_u16()?;

    let rdata_offset = reader.position();
    // Advance by the declared length, not by what the payload decoder used.
    let rdata = reader.read_bytes(data_length as usize)?;
    let (record_type, data) = decode_rdata(type_code, rdata, rdata_offset, names)?;

    Ok(ResourceRecord {
        name,
        record_type,
        class,
        ttl,
        data_length,
        data,
    })
}
