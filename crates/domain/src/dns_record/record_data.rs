use super::RecordType;
use std::fmt;
use std::net::IpAddr;

/// One length-prefixed string from TXT record data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterString {
    pub length: u8,
    pub text: String,
}

impl CharacterString {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            length: text.len().min(u8::MAX as usize) as u8,
            text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MailExchange {
    pub preference: u16,
    pub exchange: String,
}

impl MailExchange {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}

impl fmt::Display for MailExchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange)
    }
}

/// Decoded payload of a resource record, one case per supported type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    /// A or AAAA
    Address(IpAddr),
    /// CNAME, NS or PTR, compression resolved and without trailing dot
    Name(String),
    Text(Vec<CharacterString>),
    MailExchange(MailExchange),
}

impl RecordData {
    pub fn as_address(&self) -> Option<IpAddr> {
        match self {
            RecordData::Address(addr) => Some(*addr),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            RecordData::Name(name) => Some(name),
            _ => None,
        }
    }

    /// Character-strings joined in wire order.
    pub fn text(&self) -> Option<String> {
        match self {
            RecordData::Text(strings) => Some(strings.iter().map(|s| s.text.as_str()).collect()),
            _ => None,
        }
    }

    pub fn as_mail_exchange(&self) -> Option<&MailExchange> {
        match self {
            RecordData::MailExchange(mx) => Some(mx),
            _ => None,
        }
    }

    /// Whether this payload shape is the one `record_type` decodes to.
    pub fn matches(&self, record_type: RecordType) -> bool {
        match self {
            RecordData::Address(IpAddr::V4(_)) => record_type == RecordType::A,
            RecordData::Address(IpAddr::V6(_)) => record_type == RecordType::AAAA,
            RecordData::Name(_) => record_type.is_name_reference(),
            RecordData::Text(_) => record_type == RecordType::TXT,
            RecordData::MailExchange(_) => record_type == RecordType::MX,
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::Address(addr) => write!(f, "{}", addr),
            RecordData::Name(name) => write!(f, "{}", name),
            RecordData::Text(strings) => {
                for (i, s) in strings.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{:?}", s.text)?;
                }
                Ok(())
            }
            RecordData::MailExchange(mx) => write!(f, "{}", mx),
        }
    }
}
