mod lookup_addr;
mod lookup_cname;
mod lookup_ip;
mod lookup_mx;
mod lookup_ns;
mod lookup_text;

pub use lookup_addr::LookupAddrUseCase;
pub use lookup_cname::LookupCnameUseCase;
pub use lookup_ip::LookupIpUseCase;
pub use lookup_mx::LookupMxUseCase;
pub use lookup_ns::LookupNsUseCase;
pub use lookup_text::LookupTextUseCase;

use crate::ports::DnsClient;
use ferrous_lookup_domain::{DomainError, RecordType, Response};
use std::sync::Arc;

/// Client plus the server used when a lookup does not name one.
#[derive(Clone)]
pub struct Upstream {
    client: Arc<dyn DnsClient>,
    default_server: Arc<str>,
}

impl Upstream {
    pub fn new(client: Arc<dyn DnsClient>, default_server: impl Into<Arc<str>>) -> Self {
        Self {
            client,
            default_server: default_server.into(),
        }
    }

    pub fn default_server(&self) -> &str {
        &self.default_server
    }

    pub async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
        server: Option<&str>,
    ) -> Result<Response, DomainError> {
        let server = server.unwrap_or(&self.default_server);
        self.client.query(domain, record_type, server).await
    }
}

/// Names carried by answers of `record_type` (CNAME, NS, PTR).
fn answer_names(response: &Response, record_type: RecordType) -> Vec<String> {
    response
        .answers_of(record_type)
        .filter_map(|record| record.data.as_name())
        .map(str::to_string)
        .collect()
}
