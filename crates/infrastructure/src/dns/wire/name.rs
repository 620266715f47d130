//! Domain name codec (RFC 1035 §3.1, §4.1.4).
//!
//! Names are written as length-prefixed labels terminated by a zero byte and
//! read back with compression-pointer support. A pointer is any length byte
//! whose two top bits are set; the remaining 14 bits of that byte and the next
//! one form an offset into the original message. Length bytes with top bits
//! `01` or `10` are reserved and rejected.

use super::buffer::WireWriter;
use ferrous_lookup_domain::DomainError;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::trace;

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_OCTETS: usize = 255;

/// Longest chain of pointers followed while resolving one name.
pub const MAX_POINTER_HOPS: usize = 16;

const POINTER_MASK: u8 = 0xC0;

/// Writes `name` in label-sequence form. Empty segments are skipped, so a
/// trailing dot and the root name `""` are both accepted.
pub fn encode_name(writer: &mut WireWriter, name: &str) -> Result<(), DomainError> {
    let mut octets = 1;
    for label in name.split('.').filter(|label| !label.is_empty()) {
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::LabelTooLong {
                label: label.to_string(),
                len: label.len(),
            });
        }
        octets += label.len() + 1;
        if octets > MAX_NAME_OCTETS {
            return Err(DomainError::NameTooLong(octets));
        }
    }

    for label in name.split('.').filter(|label| !label.is_empty()) {
        writer.put_u8(label.len() as u8);
        writer.put_bytes(label.as_bytes());
    }
    writer.put_u8(0);
    Ok(())
}

/// Name decoding context for one response.
///
/// Holds the whole message (pointer targets always index into it, never into
/// the caller's cursor) and the pointer cache: target offset → resolved name.
/// A target is cached only after it resolved completely, so cycles are caught
/// by the per-chain set of offsets still being resolved, and chain length is
/// capped by [`MAX_POINTER_HOPS`].
pub struct NameDecoder<'a> {
    message: &'a [u8],
    cache: FxHashMap<usize, String>,
    resolutions: usize,
    cache_hits: usize,
}

type PointerChain = SmallVec<[usize; MAX_POINTER_HOPS]>;

impl<'a> NameDecoder<'a> {
    pub fn new(message: &'a [u8]) -> Self {
        Self {
            message,
            cache: FxHashMap::default(),
            resolutions: 0,
            cache_hits: 0,
        }
    }

    /// Decodes the name starting at `offset`.
    ///
    /// Returns the dotted name without trailing dot and the number of bytes
    /// the name occupies at `offset` (a pointer counts as its two bytes).
    pub fn decode(&mut self, offset: usize) -> Result<(String, usize), DomainError> {
        let mut chain = PointerChain::new();
        self.decode_from(offset, &mut chain)
    }

    /// Resolves the name a pointer to `target` refers to, going through the cache.
    pub fn resolve(&mut self, target: usize) -> Result<String, DomainError> {
        let mut chain = PointerChain::new();
        self.follow_pointer(target, &mut chain)
    }

    /// Pointer targets resolved from scratch.
    pub fn resolutions(&self) -> usize {
        self.resolutions
    }

    pub fn cache_hits(&self) -> usize {
        self.cache_hits
    }

    pub fn cached(&self, target: usize) -> Option<&str> {
        self.cache.get(&target).map(String::as_str)
    }

    fn decode_from(
        &mut self,
        offset: usize,
        chain: &mut PointerChain,
    ) -> Result<(String, usize), DomainError> {
        let mut name = String::new();
        let mut pos = offset;

        loop {
            let len = *self.message.get(pos).ok_or_else(|| {
                DomainError::invalid_answer(format!("name runs past end of message at {}", pos))
            })?;

            match len & POINTER_MASK {
                0x00 if len == 0 => {
                    pos += 1;
                    break;
                }
                0x00 => {
                    let start = pos + 1;
                    let end = start + len as usize;
                    let label = self.message.get(start..end).ok_or_else(|| {
                        DomainError::invalid_answer(format!(
                            "label of {} bytes at {} runs past end of message",
                            len, pos
                        ))
                    })?;
                    name.push_str(&String::from_utf8_lossy(label));
                    name.push('.');
                    check_octets(name.len() + 1)?;
                    pos = end;
                }
                POINTER_MASK => {
                    let low = *self.message.get(pos + 1).ok_or_else(|| {
                        DomainError::invalid_answer(format!("truncated pointer at {}", pos))
                    })?;
                    let target = (((len & !POINTER_MASK) as usize) << 8) | low as usize;
                    let suffix = self.follow_pointer(target, chain)?;
                    name.push_str(&suffix);
                    if name.ends_with('.') {
                        name.pop();
                    }
                    check_octets(name.len() + 2)?;
                    // A pointer always ends the name.
                    return Ok((name, pos + 2 - offset));
                }
                _ => {
                    return Err(DomainError::invalid_answer(format!(
                        "reserved label type {:#04x} at {}",
                        len, pos
                    )));
                }
            }
        }

        if name.ends_with('.') {
            name.pop();
        }
        Ok((name, pos - offset))
    }

    fn follow_pointer(
        &mut self,
        target: usize,
        chain: &mut PointerChain,
    ) -> Result<String, DomainError> {
        if target >= self.message.len() {
            return Err(DomainError::invalid_answer(format!(
                "pointer to {} outside message of {} bytes",
                target,
                self.message.len()
            )));
        }

        if let Some(name) = self.cache.get(&target) {
            self.cache_hits += 1;
            return Ok(name.clone());
        }

        if chain.contains(&target) {
            return Err(DomainError::PointerLoop { offset: target });
        }
        if chain.len() >= MAX_POINTER_HOPS {
            return Err(DomainError::TooManyPointers);
        }

        chain.push(target);
        let resolved = self.decode_from(target, chain);
        chain.pop();
        let (name, _) = resolved?;

        trace!(offset = target, resolved = %name, "compression pointer resolved");
        self.resolutions += 1;
        self.cache.insert(target, name.clone());
        Ok(name)
    }
}

fn check_octets(octets: usize) -> Result<(), DomainError> {
    if octets > MAX_NAME_OCTETS {
        return Err(DomainError::NameTooLong(octets));
    }
    Ok(())
}
