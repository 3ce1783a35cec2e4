//! Codec implementations for byte-string types.

use crate::{
    buffer::RlpBuf,
    codec::{Decodable, Encodable},
    error::Error,
    stream,
    stream_id::StreamId,
    writer,
};
use bytes::Bytes;
use num_bigint::{BigInt, BigUint};

impl Encodable for Bytes {
    #[inline]
    fn write_to(&self, buf: &mut impl RlpBuf) -> Result<usize, Error> {
        writer::write_bytes(buf, self)
    }
}

impl Decodable for Bytes {
    #[inline]
    fn read_from(bin: &[u8], id: StreamId) -> Result<Self, Error> {
        stream::as_slice(bin, id).map(Bytes::copy_from_slice)
    }
}

impl Encodable for str {
    #[inline]
    fn write_to(&self, buf: &mut impl RlpBuf) -> Result<usize, Error> {
        writer::write_str(buf, self)
    }
}

impl Encodable for String {
    #[inline]
    fn write_to(&self, buf: &mut impl RlpBuf) -> Result<usize, Error> {
        writer::write_str(buf, self)
    }
}

impl Decodable for String {
    #[inline]
    fn read_from(bin: &[u8], id: StreamId) -> Result<Self, Error> {
        stream::as_string(bin, id)
    }
}

impl Encodable for BigUint {
    #[inline]
    fn write_to(&self, buf: &mut impl RlpBuf) -> Result<usize, Error> {
        writer::write_biguint(buf, self)
    }
}

impl Decodable for BigUint {
    #[inline]
    fn read_from(bin: &[u8], id: StreamId) -> Result<Self, Error> {
        stream::as_biguint(bin, id)
    }
}

impl Encodable for BigInt {
    #[inline]
    fn write_to(&self, buf: &mut impl RlpBuf) -> Result<usize, Error> {
        writer::write_bigint(buf, self)
    }
}
