//! Zero-copy canonical RLP serialization.
//!
//! # Overview
//!
//! A codec for the recursive-length-prefix (RLP) wire format, designed to
//! efficiently and safely:
//! - Decode untrusted binary input without copying the buffer for every
//!   nested value
//! - Encode compound values in a single pass, without knowing their total
//!   length in advance
//! - Reject every non-canonical (ambiguous) encoding instead of silently
//!   normalizing it
//!
//! # Decoding
//!
//! Decoding never builds a tree. Every element is reduced to a [`StreamId`]:
//! one packed word holding the element's content offset, content size, and a
//! string/list tag. List children are visited with [`stream::iterate`] (or
//! the [`ListIter`] iterator), which steps from one child descriptor to the
//! next inside the parent's payload without materializing anything. Values
//! are only copied when a caller extracts them.
//!
//! ```
//! use streamrlp::{rlp, stream};
//!
//! let bin = rlp::encode(&("cat".to_string(), 1024u64)).unwrap();
//! assert_eq!(&bin[..], [0xc7, 0x83, 0x63, 0x61, 0x74, 0x82, 0x04, 0x00]);
//!
//! let list = stream::decode_element(&bin, 0, bin.len(), true).unwrap();
//! let first = stream::iterate(&bin, list, list).unwrap();
//! assert_eq!(stream::as_slice(&bin, first).unwrap(), b"cat");
//! let second = stream::iterate(&bin, list, first).unwrap();
//! assert_eq!(stream::as_u64(&bin, second).unwrap(), 1024);
//! assert!(stream::iterate(&bin, list, second).unwrap().is_eof());
//! ```
//!
//! # Encoding
//!
//! The encoder drives one [`RlpBuf`] per operation, choosing between two
//! backends: [`BytesBuf`] over an owned growable array and [`RawBuf`] over a
//! manually managed native region. Because a list prefix's width depends on
//! the payload size, the list writer reserves worst-case prefix space up
//! front, writes the children, then writes the real prefix and compacts the
//! payload over the gap in place, so no length-counting pre-pass is needed.
//!
//! ```
//! use streamrlp::{writer, BytesBuf, RlpBuf};
//!
//! let mut buf = BytesBuf::default();
//! writer::begin_list(&mut buf).unwrap();
//! let mut size = 0;
//! size += writer::write_str(&mut buf, "cat").unwrap();
//! size += writer::write_str(&mut buf, "dog").unwrap();
//! writer::end_list(&mut buf, size).unwrap();
//! assert_eq!(buf.as_slice(), [0xc8, 0x83, 0x63, 0x61, 0x74, 0x83, 0x64, 0x6f, 0x67]);
//! ```
//!
//! # Typed values
//!
//! User-defined types participate by implementing [`Encodable`] and
//! [`Decodable`]; implementations for integers, byte strings, big integers,
//! vectors, and tuples are provided. There is no runtime registry: a
//! compound type is just a list of its fields.
//!
//! ```
//! use streamrlp::{Decodable, Encodable};
//!
//! let peer = ("10.0.0.1".to_string(), 30303u16);
//! let encoded = peer.encode().unwrap();
//! assert_eq!(<(String, u16)>::decode(&encoded).unwrap(), peer);
//! ```

pub mod buffer;
pub mod codec;
pub mod constants;
pub mod error;
pub mod list;
pub mod rlp;
pub mod stream;
pub mod stream_id;
pub mod types;
pub mod writer;

// Re-export main types and traits
pub use buffer::{BytesBuf, RawBuf, RlpBuf, DEFAULT_INITIAL_CAP};
pub use codec::{Decodable, Encodable};
pub use error::Error;
pub use list::RlpList;
pub use stream::ListIter;
pub use stream_id::StreamId;
