//! Codec implementations for Rust primitive types.
//!
//! All unsigned integers share one wire shape: the minimal big-endian byte
//! string, with zero as the empty item. A `u8` is therefore an *integer*,
//! not a one-byte string; byte strings are [`bytes::Bytes`], [`String`], or
//! the facade functions in [`crate::rlp`]. Signed and floating types have no
//! canonical mapping and are deliberately absent.

use crate::{
    buffer::RlpBuf,
    codec::{Decodable, Encodable},
    error::Error,
    stream,
    stream_id::StreamId,
    writer,
};

macro_rules! impl_uint {
    ($type:ty) => {
        impl Encodable for $type {
            #[inline]
            fn write_to(&self, buf: &mut impl RlpBuf) -> Result<usize, Error> {
                writer::write_u64(buf, *self as u64)
            }
        }

        impl Decodable for $type {
            #[inline]
            fn read_from(bin: &[u8], id: StreamId) -> Result<Self, Error> {
                let value = stream::as_u64(bin, id)?;
                <$type>::try_from(value).map_err(|_| Error::NumericOverflow(stringify!($type)))
            }
        }
    };
}

impl_uint!(u8);
impl_uint!(u16);
impl_uint!(u32);
impl_uint!(u64);

impl Encodable for bool {
    #[inline]
    fn write_to(&self, buf: &mut impl RlpBuf) -> Result<usize, Error> {
        writer::write_bool(buf, *self)
    }
}

impl Decodable for bool {
    #[inline]
    fn read_from(bin: &[u8], id: StreamId) -> Result<Self, Error> {
        stream::as_bool(bin, id)
    }
}
