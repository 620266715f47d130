#![allow(dead_code)]
#![allow(unused_imports)]

mod mock_client;

pub use mock_client::{record, response_with, MockDnsClient};
