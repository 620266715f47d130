use super::Upstream;
use ferrous_lookup_domain::{DomainError, RecordType};

pub struct LookupTextUseCase {
    upstream: Upstream,
}

impl LookupTextUseCase {
    pub fn new(upstream: Upstream) -> Self {
        Self { upstream }
    }

    /// One string per TXT record, its character-strings joined in wire order.
    pub async fn execute(
        &self,
        domain: &str,
        server: Option<&str>,
    ) -> Result<Vec<String>, DomainError> {
        let response = self.upstream.query(domain, RecordType::TXT, server).await?;

        Ok(response
            .answers_of(RecordType::TXT)
            .filter_map(|record| record.data.text())
            .collect())
    }
}
