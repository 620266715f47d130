use super::Upstream;
use ferrous_lookup_domain::{DomainError, MailExchange, RecordType};

pub struct LookupMxUseCase {
    upstream: Upstream,
}

impl LookupMxUseCase {
    pub fn new(upstream: Upstream) -> Self {
        Self { upstream }
    }

    /// Mail exchangers ordered by preference, lowest first. Equal
    /// preferences keep the server's order.
    pub async fn execute(
        &self,
        domain: &str,
        server: Option<&str>,
    ) -> Result<Vec<MailExchange>, DomainError> {
        let response = self.upstream.query(domain, RecordType::MX, server).await?;

        let mut exchanges: Vec<MailExchange> = response
            .answers_of(RecordType::MX)
            .filter_map(|record| record.data.as_mail_exchange())
            .cloned()
            .collect();
        exchanges.sort_by_key(|mx| mx.preference);
        Ok(exchanges)
    }
}
