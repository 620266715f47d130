pub mod forwarding;
pub mod transport;
pub mod wire;

pub use forwarding::{DnsForwarder, MessageBuilder, ResponseParser};
pub use transport::{DnsTransport, TransportResponse, UdpTransport};
