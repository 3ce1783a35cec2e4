//! Codec implementations for homogeneous lists.
//!
//! A slice or `Vec<T>` is always a *list* of its elements' encodings. In
//! particular `Vec<u8>` is a list of small integers, not a byte string (see
//! [`crate::types::primitives`]).

use crate::{
    buffer::RlpBuf,
    codec::{Decodable, Encodable},
    error::Error,
    stream::ListIter,
    stream_id::StreamId,
    writer,
};

impl<T: Encodable> Encodable for [T] {
    fn write_to(&self, buf: &mut impl RlpBuf) -> Result<usize, Error> {
        if self.is_empty() {
            return writer::write_prefix(buf, 0, false, true);
        }
        writer::begin_list(buf)?;
        let mut size = 0;
        for item in self {
            size += item.write_to(buf)?;
        }
        Ok(size + writer::end_list(buf, size)?)
    }
}

impl<T: Encodable> Encodable for Vec<T> {
    #[inline]
    fn write_to(&self, buf: &mut impl RlpBuf) -> Result<usize, Error> {
        self.as_slice().write_to(buf)
    }
}

impl<T: Decodable> Decodable for Vec<T> {
    fn read_from(bin: &[u8], id: StreamId) -> Result<Self, Error> {
        let mut out = Vec::new();
        for child in ListIter::new(bin, id)? {
            out.push(T::read_from(bin, child?)?);
        }
        Ok(out)
    }
}
