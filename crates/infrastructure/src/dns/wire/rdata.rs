//! Per-type payload decoding for resource records.

use super::name::NameDecoder;
use ferrous_lookup_domain::{CharacterString, DomainError, MailExchange, RecordData, RecordType};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Decodes the payload of one record.
///
/// `rdata` is exactly the record's declared data; `offset` is where it starts
/// in the message, needed so embedded names can follow compression pointers.
/// The caller always advances by the declared length, whatever the payload
/// decoder consumed.
pub fn decode_rdata(
    type_code: u16,
    rdata: &[u8],
    offset: usize,
    names: &mut NameDecoder<'_>,
) -> Result<(RecordType, RecordData), DomainError> {
    let record_type =
        RecordType::from_u16(type_code).ok_or(DomainError::UnsupportedType(type_code))?;

    let data = match record_type {
        RecordType::A => decode_a(rdata)?,
        RecordType::AAAA => decode_aaaa(rdata)?,
        RecordType::CNAME | RecordType::NS | RecordType::PTR => {
            RecordData::Name(decode_embedded_name(rdata, offset, names)?)
        }
        RecordType::MX => decode_mx(rdata, offset, names)?,
        RecordType::TXT => decode_txt(rdata)?,
    };

    Ok((record_type, data))
}

fn decode_a(rdata: &[u8]) -> Result<RecordData, DomainError> {
    if rdata.len() < 4 {
        return Err(DomainError::invalid_answer(format!(
            "A record needs 4 bytes, got {}",
            rdata.len()
        )));
    }
    let addr = Ipv4Addr::new(rdata[0], rdata[1], rdata[2], rdata[3]);
    Ok(RecordData::Address(IpAddr::V4(addr)))
}

fn decode_aaaa(rdata: &[u8]) -> Result<RecordData, DomainError> {
    let octets: [u8; 16] = rdata
        .get(..16)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or_else(|| {
            DomainError::invalid_answer(format!("AAAA record needs 16 bytes, got {}", rdata.len()))
        })?;
    Ok(RecordData::Address(IpAddr::V6(Ipv6Addr::from(octets))))
}

// Labels of the name must lie inside the record data; pointers may go anywhere
// earlier or later in the message.
fn decode_embedded_name(
    rdata: &[u8],
    offset: usize,
    names: &mut NameDecoder<'_>,
) -> Result<String, DomainError> {
    if rdata.is_empty() {
        return Err(DomainError::invalid_answer("empty name in record data"));
    }
    let (name, consumed) = names.decode(offset)?;
    if consumed > rdata.len() {
        return Err(DomainError::invalid_answer(format!(
            "name of {} bytes overruns record data of {}",
            consumed,
            rdata.len()
        )));
    }
    Ok(name)
}

fn decode_mx(
    rdata: &[u8],
    offset: usize,
    names: &mut NameDecoder<'_>,
) -> Result<RecordData, DomainError> {
    if rdata.len() < 3 {
        return Err(DomainError::invalid_answer(format!(
            "MX record needs at least 3 bytes, got {}",
            rdata.len()
        )));
    }
    let preference = u16::from_be_bytes([rdata[0], rdata[1]]);
    let exchange = decode_embedded_name(&rdata[2..], offset + 2, names)?;
    Ok(RecordData::MailExchange(MailExchange {
        preference,
        exchange,
    }))
}

// Segments must add up to the data length exactly.
fn decode_txt(rdata: &[u8]) -> Result<RecordData, DomainError> {
    if rdata.is_empty() {
        return Err(DomainError::invalid_answer("TXT record with no data"));
    }

    let mut strings = Vec::new();
    let mut pos = 0;
    while pos < rdata.len() {
        let length = rdata[pos];
        let start = pos + 1;
        let end = start + length as usize;
        let text = rdata.get(start..end).ok_or_else(|| {
            DomainError::invalid_answer(format!(
                "TXT segment of {} bytes at {} overruns data length {}",
                length,
                pos,
                rdata.len()
            ))
        })?;
        strings.push(CharacterString {
            length,
            text: String::from_utf8_lossy(text).into_owned(),
        });
        pos = end;
    }

    Ok(RecordData::Text(strings))
}
