use super::{answer_names, Upstream};
use ferrous_lookup_domain::{reverse_name_str, DomainError, RecordType};
use tracing::debug;

pub struct LookupAddrUseCase {
    upstream: Upstream,
}

impl LookupAddrUseCase {
    pub fn new(upstream: Upstream) -> Self {
        Self { upstream }
    }

    /// Names an address maps back to, via a PTR query on its reverse name.
    pub async fn execute(
        &self,
        address: &str,
        server: Option<&str>,
    ) -> Result<Vec<String>, DomainError> {
        let reverse = reverse_name_str(address)?;
        debug!(address = %address, reverse = %reverse, "PTR lookup");

        let response = self.upstream.query(&reverse, RecordType::PTR, server).await?;
        Ok(answer_names(&response, RecordType::PTR))
    }
}
