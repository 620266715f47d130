use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use crate::dns::transport::{resolve_server, DnsTransport, UdpTransport};
use async_trait::async_trait;
use ferrous_lookup_application::ports::DnsClient;
use ferrous_lookup_domain::{DomainError, RecordType, ResolverConfig, Response};
use std::time::Duration;
use tracing::{debug, warn};

/// DNS Forwarder for sending queries to specific servers
pub struct DnsForwarder {
    timeout: Duration,
    attempts: u32,
}

impl DnsForwarder {
    pub fn new(timeout: Duration, attempts: u32) -> Self {
        Self {
            timeout,
            attempts: attempts.max(1),
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.timeout(), config.attempts)
    }

    /// Query a specific DNS server over UDP
    pub async fn forward(
        &self,
        server: &str,
        domain: &str,
        record_type: &RecordType,
    ) -> Result<Response, DomainError> {
        let server_addr = resolve_server(server).await?;
        let transport = UdpTransport::new(server_addr);
        self.exchange(&transport, domain, record_type).await
    }

    /// Build, send and parse one query over `transport`, re-sending the same
    /// bytes when an attempt times out.
    pub async fn exchange<T>(
        &self,
        transport: &T,
        domain: &str,
        record_type: &RecordType,
    ) -> Result<Response, DomainError>
    where
        T: DnsTransport + ?Sized,
    {
        let (id, request_bytes) = MessageBuilder::build_query_with_id(domain, record_type)?;
        debug!(
            id = id,
            domain = %domain,
            record_type = %record_type,
            protocol = transport.protocol_name(),
            "Sending DNS query"
        );

        let mut attempt = 1;
        loop {
            match transport.send(&request_bytes, self.timeout).await {
                Ok(response) => return ResponseParser::parse(&response.bytes),
                Err(DomainError::TransportTimeout { server }) if attempt < self.attempts => {
                    warn!(
                        server = %server,
                        attempt = attempt,
                        max_attempts = self.attempts,
                        "DNS query timed out, retrying"
                    );
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl Default for DnsForwarder {
    fn default() -> Self {
        Self::from_config(&ResolverConfig::default())
    }
}

#[async_trait]
impl DnsClient for DnsForwarder {
    async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
        server: &str,
    ) -> Result<Response, DomainError> {
        self.forward(server, domain, &record_type).await
    }
}
