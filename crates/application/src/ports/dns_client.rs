use async_trait::async_trait;
use ferrous_lookup_domain::{DomainError, RecordType, Response};

/// Sends one query to one server and returns the decoded response.
///
/// Server-signalled failures (NXDOMAIN, SERVFAIL, ...) and `NoAnswer` come
/// back as `Err`; transport errors pass through unchanged.
#[async_trait]
pub trait DnsClient: Send + Sync {
    async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
        server: &str,
    ) -> Result<Response, DomainError>;
}
