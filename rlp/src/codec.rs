//! Core codec traits.
//!
//! Types declare how they map onto the wire by implementing [`Encodable`]
//! and [`Decodable`]. The codec itself has no registry and no knowledge of
//! application types beyond bytes, integers, and lists; a compound type
//! simply writes its fields between [`crate::writer::begin_list`] and
//! [`crate::writer::end_list`] and reads them back through a
//! [`crate::stream::ListIter`].

use crate::{
    buffer::{BytesBuf, RlpBuf, DEFAULT_INITIAL_CAP},
    error::Error,
    stream::decode_element,
    stream_id::StreamId,
};
use bytes::Bytes;

/// Trait for types that can be written into a [`RlpBuf`].
pub trait Encodable {
    /// Writes this value's encoding and returns the number of bytes written.
    fn write_to(&self, buf: &mut impl RlpBuf) -> Result<usize, Error>;

    /// Encodes this value into an owned byte sequence.
    ///
    /// (Provided method).
    fn encode(&self) -> Result<Bytes, Error>
    where
        Self: Sized,
    {
        let mut buf = BytesBuf::with_capacity(DEFAULT_INITIAL_CAP);
        self.write_to(&mut buf)?;
        Ok(buf.finish())
    }
}

impl<T: Encodable + ?Sized> Encodable for &T {
    fn write_to(&self, buf: &mut impl RlpBuf) -> Result<usize, Error> {
        (**self).write_to(buf)
    }
}

/// Trait for types that can be read back from a decoded element.
pub trait Decodable: Sized {
    /// Reads a value from the element `id` describes.
    fn read_from(bin: &[u8], id: StreamId) -> Result<Self, Error>;

    /// Decodes a value from a buffer holding exactly one encoded element.
    ///
    /// (Provided method).
    fn decode(bin: &[u8]) -> Result<Self, Error> {
        let id = decode_element(bin, 0, bin.len(), true)?;
        Self::read_from(bin, id)
    }
}
