use super::{answer_names, Upstream};
use ferrous_lookup_domain::{DomainError, RecordType};

pub struct LookupNsUseCase {
    upstream: Upstream,
}

impl LookupNsUseCase {
    pub fn new(upstream: Upstream) -> Self {
        Self { upstream }
    }

    pub async fn execute(
        &self,
        domain: &str,
        server: Option<&str>,
    ) -> Result<Vec<String>, DomainError> {
        let response = self.upstream.query(domain, RecordType::NS, server).await?;
        Ok(answer_names(&response, RecordType::NS))
    }
}
