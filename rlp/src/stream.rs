//! Prefix classification, zero-copy list iteration, and value extraction.
//!
//! Decoding never copies the input: every element is reduced to a
//! [`StreamId`] describing where its content lives. The only copies made are
//! the ones a caller asks for when materializing an extracted value.

use crate::{
    constants::{
        MAX_ENCODED, OFFSET_LONG_ITEM, OFFSET_LONG_LIST, OFFSET_SHORT_ITEM, OFFSET_SHORT_LIST,
        SIZE_THRESHOLD,
    },
    error::Error,
    stream_id::StreamId,
};
use num_bigint::BigUint;

/// Classifies the element starting at `raw_offset` and returns its
/// descriptor.
///
/// `raw_limit` bounds the bytes this element may occupy (the end of the input
/// for a root decode, the end of the enclosing list payload for a child).
/// With `exact`, the element must fill `[raw_offset, raw_limit)` entirely;
/// any unconsumed tail fails with [`Error::TrailingBytes`]. Callers assert
/// exactness only at the top level; list children are bounded by their parent
/// instead.
///
/// Every non-canonical form is rejected: a long form carrying a length below
/// [`SIZE_THRESHOLD`], a length-of-length with a leading zero byte, and a
/// length-1 item whose content byte should have encoded itself.
pub fn decode_element(
    bin: &[u8],
    raw_offset: usize,
    raw_limit: usize,
    exact: bool,
) -> Result<StreamId, Error> {
    if raw_limit > MAX_ENCODED {
        return Err(Error::InputTooLarge);
    }
    if raw_limit > bin.len() || raw_offset >= raw_limit {
        return Err(Error::TruncatedInput);
    }

    let prefix = bin[raw_offset];

    if prefix < OFFSET_SHORT_ITEM {
        // Single self-encoding byte: the prefix is the content.
        check_bounds(raw_offset, 0, 1, raw_limit, exact)?;
        return Ok(StreamId::new(raw_offset, 1, false));
    }

    if prefix <= OFFSET_LONG_ITEM {
        let len = (prefix - OFFSET_SHORT_ITEM) as usize;
        check_bounds(raw_offset, 1, len as u64, raw_limit, exact)?;
        if len == 1 && bin[raw_offset + 1] < OFFSET_SHORT_ITEM {
            return Err(Error::NonCanonicalShortItem);
        }
        return Ok(StreamId::new(raw_offset + 1, len, false));
    }

    if prefix < OFFSET_SHORT_LIST {
        let (len, len_width) = decode_long_length(bin, raw_offset, prefix - OFFSET_LONG_ITEM, raw_limit)?;
        check_bounds(raw_offset, 1 + len_width, len, raw_limit, exact)?;
        return Ok(StreamId::new(raw_offset + 1 + len_width, len as usize, false));
    }

    if prefix <= OFFSET_LONG_LIST {
        let len = (prefix - OFFSET_SHORT_LIST) as usize;
        check_bounds(raw_offset, 1, len as u64, raw_limit, exact)?;
        return Ok(StreamId::new(raw_offset + 1, len, true));
    }

    let (len, len_width) = decode_long_length(bin, raw_offset, prefix - OFFSET_LONG_LIST, raw_limit)?;
    check_bounds(raw_offset, 1 + len_width, len, raw_limit, exact)?;
    Ok(StreamId::new(raw_offset + 1 + len_width, len as usize, true))
}

/// Verifies that `prefix_width + len` content bytes fit inside `raw_limit`,
/// exactly so when `exact` is set. Widths are summed in 64 bits so a hostile
/// length cannot wrap the arithmetic.
fn check_bounds(
    raw_offset: usize,
    prefix_width: usize,
    len: u64,
    raw_limit: usize,
    exact: bool,
) -> Result<(), Error> {
    let end = raw_offset as u64 + prefix_width as u64 + len;
    if end > raw_limit as u64 {
        return Err(Error::TruncatedInput);
    }
    if exact && end != raw_limit as u64 {
        return Err(Error::TrailingBytes(raw_limit - end as usize));
    }
    Ok(())
}

/// Decodes the explicit length of a long item or list: `len_width` big-endian
/// bytes following the selector. A leading zero byte or a decoded length
/// below [`SIZE_THRESHOLD`] means a shorter form existed, so the encoding is
/// rejected as non-optimal.
fn decode_long_length(
    bin: &[u8],
    raw_offset: usize,
    len_width: u8,
    raw_limit: usize,
) -> Result<(u64, usize), Error> {
    let len_width = len_width as usize;
    if (raw_offset + 1 + len_width) as u64 > raw_limit as u64 {
        return Err(Error::TruncatedInput);
    }
    let len = read_uint(bin, raw_offset + 1, len_width).map_err(|e| match e {
        Error::NonCanonicalInteger => Error::NonOptimalLength,
        other => other,
    })?;
    if len < SIZE_THRESHOLD as u64 {
        return Err(Error::NonOptimalLength);
    }
    Ok((len, len_width))
}

/// Steps list iteration forward: returns the child following `prev` inside
/// `list`, or [`StreamId::EOF`] once the payload is exhausted.
///
/// Iteration starts by passing the list's own descriptor as `prev`. Children
/// are decoded lazily and bounded by the list's payload, so arity is
/// discovered by exhaustion and nothing is copied or materialized:
///
/// ```
/// use streamrlp::{stream, StreamId};
///
/// let bin = [0xc8, 0x83, 0x63, 0x61, 0x74, 0x83, 0x64, 0x6f, 0x67]; // ["cat", "dog"]
/// let list = stream::decode_element(&bin, 0, bin.len(), true).unwrap();
/// let mut prev = list;
/// let mut children = 0;
/// loop {
///     let child = stream::iterate(&bin, list, prev).unwrap();
///     if child.is_eof() {
///         break;
///     }
///     children += 1;
///     prev = child;
/// }
/// assert_eq!(children, 2);
/// ```
pub fn iterate(bin: &[u8], list: StreamId, prev: StreamId) -> Result<StreamId, Error> {
    if !list.is_list() {
        return Err(Error::NotAListOrNotAnItem);
    }
    let list_limit = list.end();
    let prev_end = if prev == list { list.offset() } else { prev.end() };
    if prev_end == list_limit {
        return Ok(StreamId::EOF);
    }
    decode_element(bin, prev_end, list_limit, false)
}

/// [`Iterator`] sugar over [`iterate`]. Yields each child descriptor in
/// order; a malformed child ends the iteration with its error.
pub struct ListIter<'a> {
    bin: &'a [u8],
    list: StreamId,
    prev: StreamId,
    done: bool,
}

impl<'a> ListIter<'a> {
    /// Starts iteration over the children of `list`.
    pub fn new(bin: &'a [u8], list: StreamId) -> Result<Self, Error> {
        if !list.is_list() {
            return Err(Error::NotAListOrNotAnItem);
        }
        Ok(Self { bin, list, prev: list, done: false })
    }
}

impl Iterator for ListIter<'_> {
    type Item = Result<StreamId, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match iterate(self.bin, self.list, self.prev) {
            Ok(id) if id.is_eof() => {
                self.done = true;
                None
            }
            Ok(id) => {
                self.prev = id;
                Some(Ok(id))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// The canonical big-endian unsigned decode every numeric extraction funnels
/// through: zero length is zero, more than eight bytes cannot fit, and a
/// leading zero byte means a shorter encoding existed.
pub(crate) fn read_uint(bin: &[u8], offset: usize, size: usize) -> Result<u64, Error> {
    if size == 0 {
        return Ok(0);
    }
    if size > 8 {
        return Err(Error::IntegerTooWide(size));
    }
    if bin[offset] == 0 {
        return Err(Error::NonCanonicalInteger);
    }
    let mut value = 0u64;
    for &b in &bin[offset..offset + size] {
        value = (value << 8) | b as u64;
    }
    Ok(value)
}

/// Borrows the element's content. Fails on a list descriptor.
pub fn as_slice(bin: &[u8], id: StreamId) -> Result<&[u8], Error> {
    if id.is_list() {
        return Err(Error::NotAListOrNotAnItem);
    }
    Ok(&bin[id.offset()..id.end()])
}

/// Copies the element's content out of the buffer.
pub fn as_bytes(bin: &[u8], id: StreamId) -> Result<Vec<u8>, Error> {
    as_slice(bin, id).map(<[u8]>::to_vec)
}

/// Decodes the element as a canonical unsigned integer.
pub fn as_u64(bin: &[u8], id: StreamId) -> Result<u64, Error> {
    if id.is_list() {
        return Err(Error::NotAListOrNotAnItem);
    }
    read_uint(bin, id.offset(), id.size())
}

/// Decodes the element as a `u32`.
pub fn as_u32(bin: &[u8], id: StreamId) -> Result<u32, Error> {
    u32::try_from(as_u64(bin, id)?).map_err(|_| Error::NumericOverflow("u32"))
}

/// Decodes the element as a `u16`.
pub fn as_u16(bin: &[u8], id: StreamId) -> Result<u16, Error> {
    u16::try_from(as_u64(bin, id)?).map_err(|_| Error::NumericOverflow("u16"))
}

/// Decodes the element as a `u8`.
pub fn as_u8(bin: &[u8], id: StreamId) -> Result<u8, Error> {
    u8::try_from(as_u64(bin, id)?).map_err(|_| Error::NumericOverflow("u8"))
}

/// Decodes the element as a boolean: zero is false, one is true.
pub fn as_bool(bin: &[u8], id: StreamId) -> Result<bool, Error> {
    match as_u64(bin, id)? {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(Error::NumericOverflow("bool")),
    }
}

/// Decodes the element as an unsigned big integer. Zero length encodes zero;
/// a leading zero byte is rejected like any other integer.
pub fn as_biguint(bin: &[u8], id: StreamId) -> Result<BigUint, Error> {
    let bytes = as_slice(bin, id)?;
    if bytes.is_empty() {
        return Ok(BigUint::from(0u8));
    }
    if bytes[0] == 0 {
        return Err(Error::NonCanonicalInteger);
    }
    Ok(BigUint::from_bytes_be(bytes))
}

/// Decodes the element as a UTF-8 string.
pub fn as_string(bin: &[u8], id: StreamId) -> Result<String, Error> {
    String::from_utf8(as_bytes(bin, id)?).map_err(|_| Error::InvalidUtf8)
}
