use async_trait::async_trait;
use ferrous_lookup_application::ports::DnsClient;
use ferrous_lookup_domain::{
    DomainError, Header, Question, RecordData, RecordType, ResourceRecord, Response,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type Key = (String, RecordType);

/// Client answering from scripted results keyed by (domain, type).
///
/// Unscripted queries get `NoAnswer`. Every call is recorded with the server
/// it was sent to.
#[derive(Clone, Default)]
pub struct MockDnsClient {
    results: Arc<Mutex<HashMap<Key, Result<Response, DomainError>>>>,
    calls: Arc<Mutex<Vec<(String, RecordType, String)>>>,
}

impl MockDnsClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, domain: &str, record_type: RecordType, response: Response) {
        self.results
            .lock()
            .unwrap()
            .insert((domain.to_string(), record_type), Ok(response));
    }

    pub fn set_error(&self, domain: &str, record_type: RecordType, error: DomainError) {
        self.results
            .lock()
            .unwrap()
            .insert((domain.to_string(), record_type), Err(error));
    }

    pub fn calls(&self) -> Vec<(String, RecordType, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsClient for MockDnsClient {
    async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
        server: &str,
    ) -> Result<Response, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((domain.to_string(), record_type, server.to_string()));

        self.results
            .lock()
            .unwrap()
            .get(&(domain.to_string(), record_type))
            .cloned()
            .unwrap_or(Err(DomainError::NoAnswer))
    }
}

pub fn record(name: &str, record_type: RecordType, data: RecordData) -> ResourceRecord {
    ResourceRecord::new(name, record_type, 300, 0, data)
}

pub fn response_with(domain: &str, record_type: RecordType, answers: Vec<ResourceRecord>) -> Response {
    Response {
        header: Header {
            id: 1,
            flags: 0x8180,
            question_count: 1,
            answer_count: answers.len() as u16,
            ..Header::default()
        },
        questions: vec![Question::new(domain, record_type)],
        answers,
        authorities: vec![],
        additionals: vec![],
    }
}
