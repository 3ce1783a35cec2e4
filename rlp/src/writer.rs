//! Canonical prefix selection and the primitive value writers.
//!
//! Every writer mirrors the decoder's canonicality rules exactly, so a
//! decode of anything written here reproduces the input byte for byte.

use crate::{
    buffer::RlpBuf,
    constants::{
        EMPTY_ITEM, EMPTY_LIST, MAX_ENCODED, OFFSET_LONG_ITEM, OFFSET_LONG_LIST,
        OFFSET_SHORT_ITEM, OFFSET_SHORT_LIST, SIZE_THRESHOLD,
    },
    error::Error,
    stream_id::be_len,
};
use num_bigint::{BigInt, BigUint};

/// Worst-case prefix width: one selector byte plus four length bytes. The
/// list writer reserves this much before the payload size is known.
pub const MAX_PREFIX_SIZE: usize = 5;

/// Writes the canonical prefix for an element of `size` content bytes and
/// returns the number of prefix bytes written.
///
/// `mono` marks the single self-encoding byte, which has no prefix at all;
/// it is only ever set for a byte string of length one whose value is below
/// [`OFFSET_SHORT_ITEM`].
pub fn write_prefix(
    buf: &mut impl RlpBuf,
    size: usize,
    mono: bool,
    is_list: bool,
) -> Result<usize, Error> {
    if mono {
        return Ok(0);
    }
    if size == 0 {
        buf.write_byte(if is_list { EMPTY_LIST } else { EMPTY_ITEM })?;
        return Ok(1);
    }
    if size > MAX_ENCODED {
        return Err(Error::InputTooLarge);
    }
    if size < SIZE_THRESHOLD {
        let base = if is_list { OFFSET_SHORT_LIST } else { OFFSET_SHORT_ITEM };
        buf.write_byte(base + size as u8)?;
        return Ok(1);
    }
    let base = if is_list { OFFSET_LONG_LIST } else { OFFSET_LONG_ITEM };
    let len_width = be_len(size as u64);
    buf.write_byte(base + len_width as u8)?;
    for i in (0..len_width).rev() {
        buf.write_byte((size >> (8 * i)) as u8)?;
    }
    Ok(1 + len_width)
}

/// Writes the empty item (`0x80`), the encoding of empty byte strings and of
/// zero.
pub(crate) fn write_empty_item(buf: &mut impl RlpBuf) -> Result<usize, Error> {
    buf.write_byte(EMPTY_ITEM)?;
    Ok(1)
}

/// Writes the empty list (`0xc0`).
pub(crate) fn write_empty_list(buf: &mut impl RlpBuf) -> Result<usize, Error> {
    buf.write_byte(EMPTY_LIST)?;
    Ok(1)
}

/// Writes a byte string and returns the total bytes written.
pub fn write_bytes(buf: &mut impl RlpBuf, bytes: &[u8]) -> Result<usize, Error> {
    if bytes.is_empty() {
        return write_empty_item(buf);
    }
    let mono = bytes.len() == 1 && bytes[0] < OFFSET_SHORT_ITEM;
    let prefix = write_prefix(buf, bytes.len(), mono, false)?;
    buf.write_slice(bytes)?;
    Ok(prefix + bytes.len())
}

/// Writes an unsigned integer as its minimal big-endian byte string: zero is
/// the empty item, values below [`OFFSET_SHORT_ITEM`] are self-encoding.
pub fn write_u64(buf: &mut impl RlpBuf, value: u64) -> Result<usize, Error> {
    if value == 0 {
        return write_empty_item(buf);
    }
    let size = be_len(value);
    let mono = value < OFFSET_SHORT_ITEM as u64;
    let prefix = write_prefix(buf, size, mono, false)?;
    for i in (0..size).rev() {
        buf.write_byte((value >> (8 * i)) as u8)?;
    }
    Ok(prefix + size)
}

/// Writes a boolean as the integer zero or one.
pub fn write_bool(buf: &mut impl RlpBuf, value: bool) -> Result<usize, Error> {
    write_u64(buf, value as u64)
}

/// Writes a string as its UTF-8 bytes.
pub fn write_str(buf: &mut impl RlpBuf, value: &str) -> Result<usize, Error> {
    write_bytes(buf, value.as_bytes())
}

/// Writes an unsigned big integer as its minimal magnitude bytes.
pub fn write_biguint(buf: &mut impl RlpBuf, value: &BigUint) -> Result<usize, Error> {
    if value.bits() == 0 {
        return write_empty_item(buf);
    }
    write_bytes(buf, &value.to_bytes_be())
}

/// Writes a signed big integer. Negative values have no encoding and fail
/// with [`Error::NegativeBigInteger`].
pub fn write_bigint(buf: &mut impl RlpBuf, value: &BigInt) -> Result<usize, Error> {
    if value.sign() == num_bigint::Sign::Minus {
        return Err(Error::NegativeBigInteger);
    }
    write_biguint(buf, value.magnitude())
}

/// Appends already-encoded bytes verbatim.
pub fn write_raw(buf: &mut impl RlpBuf, bytes: &[u8]) -> Result<usize, Error> {
    buf.write_slice(bytes)?;
    Ok(bytes.len())
}

/// Opens an aggregate by reserving worst-case prefix space.
///
/// The caller writes the children, sums the bytes they report, and closes
/// with [`end_list`]. Aggregates nest freely; each level reserves its own
/// prefix space.
pub fn begin_list(buf: &mut impl RlpBuf) -> Result<(), Error> {
    let reserved = buf.len().checked_add(MAX_PREFIX_SIZE).ok_or(Error::CapacityOverflow)?;
    buf.set_len(reserved)
}

/// Closes an aggregate of `content_size` payload bytes: rewinds to the
/// reservation, writes the real prefix, and shifts the payload left over the
/// over-reserved gap. Returns the number of prefix bytes written.
pub fn end_list(buf: &mut impl RlpBuf, content_size: usize) -> Result<usize, Error> {
    let content_end = buf.len();
    let content_start = content_end - content_size;
    let reserved = content_start - MAX_PREFIX_SIZE;
    buf.set_len(reserved)?;
    let prefix = write_prefix(buf, content_size, false, true)?;
    let gap = MAX_PREFIX_SIZE - prefix;
    if gap > 0 && content_size > 0 {
        buf.shift_left(content_start, content_size, gap);
    }
    buf.set_len(reserved + prefix + content_size)?;
    Ok(prefix)
}

/// Writes a list of pre-encoded children.
pub fn write_elements<T: AsRef<[u8]>>(
    buf: &mut impl RlpBuf,
    elements: &[T],
) -> Result<usize, Error> {
    if elements.is_empty() {
        return write_empty_list(buf);
    }
    begin_list(buf)?;
    let mut size = 0;
    for element in elements {
        size += write_raw(buf, element.as_ref())?;
    }
    Ok(size + end_list(buf, size)?)
}
