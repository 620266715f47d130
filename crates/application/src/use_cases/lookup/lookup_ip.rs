use super::Upstream;
use ferrous_lookup_domain::{DomainError, RecordType};
use std::net::IpAddr;
use tracing::debug;

pub struct LookupIpUseCase {
    upstream: Upstream,
}

impl LookupIpUseCase {
    pub fn new(upstream: Upstream) -> Self {
        Self { upstream }
    }

    /// IPv4 then IPv6 addresses of `domain`. A family with no records is
    /// skipped; every other error aborts the lookup.
    pub async fn execute(
        &self,
        domain: &str,
        server: Option<&str>,
    ) -> Result<Vec<IpAddr>, DomainError> {
        let mut addresses = Vec::new();

        for record_type in [RecordType::A, RecordType::AAAA] {
            match self.upstream.query(domain, record_type, server).await {
                Ok(response) => addresses.extend(
                    response
                        .answers_of(record_type)
                        .filter_map(|record| record.data.as_address()),
                ),
                Err(DomainError::NoAnswer) => {
                    debug!(domain = %domain, record_type = %record_type, "No records of this family");
                }
                Err(e) => return Err(e),
            }
        }

        Ok(addresses)
    }
}
