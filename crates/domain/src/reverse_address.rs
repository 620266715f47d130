//! Reverse-lookup names for PTR queries.

use crate::errors::DomainError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

pub const IPV4_REVERSE_SUFFIX: &str = "in-addr.arpa";
pub const IPV6_REVERSE_SUFFIX: &str = "ip6.arpa";

/// Returns the name a PTR query for `addr` is asked under,
/// e.g. `1.2.3.4` → `4.3.2.1.in-addr.arpa`. IPv4-mapped IPv6 addresses
/// (`::ffff:a.b.c.d`) are reversed under `in-addr.arpa`.
pub fn reverse_name(addr: IpAddr) -> String {
    match addr {
        IpAddr::V4(v4) => reverse_v4(v4),
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => reverse_v4(v4),
            None => reverse_v6(v6),
        },
    }
}

/// Parses `text` as an IPv4 or IPv6 address and formats its reverse name.
pub fn reverse_name_str(text: &str) -> Result<String, DomainError> {
    let addr: IpAddr = text
        .trim()
        .parse()
        .map_err(|_| DomainError::NotValidAddress(text.to_string()))?;
    Ok(reverse_name(addr))
}

fn reverse_v4(addr: Ipv4Addr) -> String {
    let [a, b, c, d] = addr.octets();
    format!("{}.{}.{}.{}.{}", d, c, b, a, IPV4_REVERSE_SUFFIX)
}

// Every hextet is expanded to four digits (so `::` runs become `0000` groups),
// giving 32 nibbles that are emitted least significant first.
fn reverse_v6(addr: Ipv6Addr) -> String {
    let nibbles: String = addr
        .segments()
        .iter()
        .map(|segment| format!("{:04x}", segment))
        .collect();

    let mut name = String::with_capacity(nibbles.len() * 2 + IPV6_REVERSE_SUFFIX.len());
    for nibble in nibbles.chars().rev() {
        name.push(nibble);
        name.push('.');
    }
    name.push_str(IPV6_REVERSE_SUFFIX);
    name
}
