use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid answer from server: {0}")]
    InvalidAnswer(String),

    #[error("Unsupported DNS record type: {0}")]
    UnsupportedType(u16),

    #[error("Query has no question")]
    EmptyQueries,

    #[error("Not a valid IP address: {0}")]
    NotValidAddress(String),

    #[error("Label '{label}' is {len} bytes long (max 63)")]
    LabelTooLong { label: String, len: usize },

    #[error("Domain name is {0} octets in wire form (max 255)")]
    NameTooLong(usize),

    #[error("Compression pointer loop at offset {offset}")]
    PointerLoop { offset: usize },

    #[error("Too many compression pointers in one name")]
    TooManyPointers,

    // Outcomes signalled by the server through the RCODE field
    #[error("The query was constructed incorrectly (FORMERR)")]
    FormatError,

    #[error("Internal error in the DNS server (SERVFAIL)")]
    ServerFailure,

    #[error("No such name (NXDOMAIN)")]
    NoSuchName,

    #[error("Query type not implemented by the server (NOTIMP)")]
    NotImplemented,

    #[error("Query refused by the DNS server (REFUSED)")]
    Refused,

    #[error("Name exists when it should not (YXDOMAIN)")]
    YxDomain,

    #[error("RR set exists when it should not (YXRRSET)")]
    YxRrSet,

    #[error("RR set that should exist does not (NXRRSET)")]
    NxRrSet,

    #[error("Server not authoritative for zone (NOTAUTH)")]
    NotAuth,

    #[error("No answer")]
    NoAnswer,

    #[error("Invalid server address: {0}")]
    InvalidServerAddress(String),

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Transport error talking to {server}: {message}")]
    TransportIo { server: String, message: String },

    #[error("Response ID mismatch from {server}: sent {sent:#06x}, received {received:#06x}")]
    ResponseIdMismatch {
        server: String,
        sent: u16,
        received: u16,
    },
}

impl DomainError {
    pub fn invalid_answer(message: impl Into<String>) -> Self {
        DomainError::InvalidAnswer(message.into())
    }

    /// A well-formed response that carried nothing to return.
    pub fn is_no_answer(&self) -> bool {
        matches!(self, DomainError::NoAnswer)
    }

    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            DomainError::FormatError
                | DomainError::ServerFailure
                | DomainError::NoSuchName
                | DomainError::NotImplemented
                | DomainError::Refused
                | DomainError::YxDomain
                | DomainError::YxRrSet
                | DomainError::NxRrSet
                | DomainError::NotAuth
        )
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportIo { .. }
                | DomainError::ResponseIdMismatch { .. }
        )
    }

    /// Failures raised while decoding response bytes.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidAnswer(_)
                | DomainError::UnsupportedType(_)
                | DomainError::NameTooLong(_)
                | DomainError::PointerLoop { .. }
                | DomainError::TooManyPointers
        )
    }
}
