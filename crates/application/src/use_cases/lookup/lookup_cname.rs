use super::{answer_names, Upstream};
use ferrous_lookup_domain::{DomainError, RecordType};

pub struct LookupCnameUseCase {
    upstream: Upstream,
}

impl LookupCnameUseCase {
    pub fn new(upstream: Upstream) -> Self {
        Self { upstream }
    }

    pub async fn execute(
        &self,
        domain: &str,
        server: Option<&str>,
    ) -> Result<Vec<String>, DomainError> {
        let response = self.upstream.query(domain, RecordType::CNAME, server).await?;
        Ok(answer_names(&response, RecordType::CNAME))
    }
}
