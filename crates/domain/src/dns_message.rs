use crate::dns_record::{RecordType, ResourceRecord};
use crate::errors::DomainError;
use std::fmt;

/// The Internet class, the only one queried.
pub const CLASS_IN: u16 = 1;

/// Standard query with RD (recursion desired) set.
pub const FLAGS_RECURSIVE_QUERY: u16 = 0x0100;

const FLAG_QR: u16 = 0x8000;
const FLAG_TC: u16 = 0x0200;
const FLAG_RA: u16 = 0x0080;
// RCODE is the low 4 bits; RA and Z share the low byte and do not change the outcome.
const RCODE_MASK: u16 = 0x000F;

/// The fixed 12-byte message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    pub const LEN: usize = 12;

    pub fn query(id: u16) -> Self {
        Self {
            id,
            flags: FLAGS_RECURSIVE_QUERY,
            question_count: 1,
            ..Self::default()
        }
    }

    pub fn is_response(&self) -> bool {
        self.flags & FLAG_QR != 0
    }

    pub fn is_truncated(&self) -> bool {
        self.flags & FLAG_TC != 0
    }

    pub fn recursion_available(&self) -> bool {
        self.flags & FLAG_RA != 0
    }

    pub fn response_code(&self) -> ResponseCode {
        ResponseCode::from_flags(self.flags)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub record_type: u16,
    pub class: u16,
}

impl Question {
    pub fn new(name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.to_u16(),
            class: CLASS_IN,
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match RecordType::from_u16(self.record_type) {
            Some(rt) => write!(f, "{} {}", self.name, rt),
            None => write!(f, "{} TYPE{}", self.name, self.record_type),
        }
    }
}

/// An outbound query. Only the first question is ever put on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub id: u16,
    pub flags: u16,
    pub questions: Vec<Question>,
}

impl Query {
    pub fn new(id: u16, name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            id,
            flags: FLAGS_RECURSIVE_QUERY,
            questions: vec![Question::new(name, record_type)],
        }
    }

    pub fn question(&self) -> Result<&Question, DomainError> {
        self.questions.first().ok_or(DomainError::EmptyQueries)
    }
}

/// A fully decoded response. Immutable once the parser hands it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Response {
    pub fn id(&self) -> u16 {
        self.header.id
    }

    pub fn answers_of(&self, record_type: RecordType) -> impl Iterator<Item = &ResourceRecord> {
        self.answers.iter().filter(move |r| r.is_type(record_type))
    }

    pub fn min_ttl(&self) -> Option<u32> {
        self.answers.iter().map(|r| r.ttl).min()
    }
}

/// Server outcome carried in the low four bits of the flags word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    YXDomain,
    YXRRSet,
    NXRRSet,
    NotAuth,
    Other(u8),
}

impl ResponseCode {
    pub fn from_flags(flags: u16) -> Self {
        match (flags & RCODE_MASK) as u8 {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NXDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            6 => ResponseCode::YXDomain,
            7 => ResponseCode::YXRRSet,
            8 => ResponseCode::NXRRSet,
            9 => ResponseCode::NotAuth,
            other => ResponseCode::Other(other),
        }
    }

    /// Error the caller sees for this outcome, `None` when decoding should proceed.
    pub fn to_error(self) -> Option<DomainError> {
        match self {
            ResponseCode::FormErr => Some(DomainError::FormatError),
            ResponseCode::ServFail => Some(DomainError::ServerFailure),
            ResponseCode::NXDomain => Some(DomainError::NoSuchName),
            ResponseCode::NotImp => Some(DomainError::NotImplemented),
            ResponseCode::Refused => Some(DomainError::Refused),
            ResponseCode::YXDomain => Some(DomainError::YxDomain),
            ResponseCode::YXRRSet => Some(DomainError::YxRrSet),
            ResponseCode::NXRRSet => Some(DomainError::NxRrSet),
            ResponseCode::NotAuth => Some(DomainError::NotAuth),
            ResponseCode::NoError | ResponseCode::Other(_) => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::YXDomain => "YXDOMAIN",
            ResponseCode::YXRRSet => "YXRRSET",
            ResponseCode::NXRRSet => "NXRRSET",
            ResponseCode::NotAuth => "NOTAUTH",
            ResponseCode::Other(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Other(code) => write!(f, "RCODE{}", code),
            _ => f.write_str(self.as_str()),
        }
    }
}
