#![allow(dead_code)]
#![allow(unused_imports)]

mod builders;
mod dns_server_mock;

pub use builders::{labels, ResponseBuilder, POINTER_TO_QUESTION};
pub use dns_server_mock::MockDnsServer;
