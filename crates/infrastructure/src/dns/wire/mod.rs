//! DNS wire-format codec (RFC 1035 §4): big-endian cursor, name compression
//! and per-type record data.

pub mod buffer;
pub mod name;
pub mod rdata;

pub use buffer::{WireReader, WireWriter};
pub use name::{encode_name, NameDecoder, MAX_LABEL_LEN, MAX_NAME_OCTETS, MAX_POINTER_HOPS};
pub use rdata::decode_rdata;
