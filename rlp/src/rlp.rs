//! One-shot encode and decode entry points.
//!
//! Each encode function drives a single [`BytesBuf`] end-to-end and returns
//! the finished bytes; each decode function requires the input to hold
//! exactly one encoded element. Partial reads from a larger buffer go
//! through [`crate::stream`] directly.

use crate::{
    buffer::{BytesBuf, RlpBuf, DEFAULT_INITIAL_CAP},
    codec::{Decodable, Encodable},
    error::Error,
    list::RlpList,
    stream::{self, decode_element},
    writer,
};
use bytes::Bytes;
use num_bigint::{BigInt, BigUint};

fn encode_with(f: impl FnOnce(&mut BytesBuf) -> Result<usize, Error>) -> Result<Bytes, Error> {
    let mut buf = BytesBuf::with_capacity(DEFAULT_INITIAL_CAP);
    f(&mut buf)?;
    Ok(buf.finish())
}

/// Encodes any [`Encodable`] value.
pub fn encode<T: Encodable + ?Sized>(value: &T) -> Result<Bytes, Error> {
    encode_with(|buf| value.write_to(buf))
}

/// Encodes a byte string.
pub fn encode_bytes(bytes: &[u8]) -> Result<Bytes, Error> {
    encode_with(|buf| writer::write_bytes(buf, bytes))
}

/// Encodes an unsigned integer.
pub fn encode_u64(value: u64) -> Result<Bytes, Error> {
    encode_with(|buf| writer::write_u64(buf, value))
}

/// Encodes a string as its UTF-8 bytes.
pub fn encode_str(value: &str) -> Result<Bytes, Error> {
    encode_with(|buf| writer::write_str(buf, value))
}

/// Encodes an unsigned big integer.
pub fn encode_biguint(value: &BigUint) -> Result<Bytes, Error> {
    encode_with(|buf| writer::write_biguint(buf, value))
}

/// Encodes a signed big integer; negative values fail.
pub fn encode_bigint(value: &BigInt) -> Result<Bytes, Error> {
    encode_with(|buf| writer::write_bigint(buf, value))
}

/// Encodes a list of pre-encoded children.
pub fn encode_elements<T: AsRef<[u8]>>(elements: &[T]) -> Result<Bytes, Error> {
    encode_with(|buf| writer::write_elements(buf, elements))
}

/// Decodes any [`Decodable`] value from exactly one encoded element.
pub fn decode<T: Decodable>(bin: &[u8]) -> Result<T, Error> {
    T::decode(bin)
}

/// Decodes a byte string.
pub fn decode_bytes(bin: &[u8]) -> Result<Vec<u8>, Error> {
    let id = decode_element(bin, 0, bin.len(), true)?;
    stream::as_bytes(bin, id)
}

/// Decodes an unsigned integer.
pub fn decode_u64(bin: &[u8]) -> Result<u64, Error> {
    let id = decode_element(bin, 0, bin.len(), true)?;
    stream::as_u64(bin, id)
}

/// Decodes a `u32`.
pub fn decode_u32(bin: &[u8]) -> Result<u32, Error> {
    let id = decode_element(bin, 0, bin.len(), true)?;
    stream::as_u32(bin, id)
}

/// Decodes a `u16`.
pub fn decode_u16(bin: &[u8]) -> Result<u16, Error> {
    let id = decode_element(bin, 0, bin.len(), true)?;
    stream::as_u16(bin, id)
}

/// Decodes a `u8`.
pub fn decode_u8(bin: &[u8]) -> Result<u8, Error> {
    let id = decode_element(bin, 0, bin.len(), true)?;
    stream::as_u8(bin, id)
}

/// Decodes a boolean.
pub fn decode_bool(bin: &[u8]) -> Result<bool, Error> {
    let id = decode_element(bin, 0, bin.len(), true)?;
    stream::as_bool(bin, id)
}

/// Decodes a UTF-8 string.
pub fn decode_str(bin: &[u8]) -> Result<String, Error> {
    let id = decode_element(bin, 0, bin.len(), true)?;
    stream::as_string(bin, id)
}

/// Decodes an unsigned big integer.
pub fn decode_biguint(bin: &[u8]) -> Result<BigUint, Error> {
    let id = decode_element(bin, 0, bin.len(), true)?;
    stream::as_biguint(bin, id)
}

/// Decodes a list into an indexed view over its children.
pub fn decode_list(bin: &[u8]) -> Result<RlpList<'_>, Error> {
    RlpList::from_encoded(bin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_bytes() {
        assert_eq!(&encode_bytes(b"").unwrap()[..], [0x80]);
        assert_eq!(&encode_bytes(b"dog").unwrap()[..], [0x83, 0x64, 0x6f, 0x67]);
        assert_eq!(decode_bytes(&[0x83, 0x64, 0x6f, 0x67]).unwrap(), b"dog");
    }

    #[test]
    fn test_encode_decode_u64() {
        for value in [0u64, 1, 15, 127, 128, 1000, 1024, 30303, u64::MAX] {
            let encoded = encode_u64(value).unwrap();
            assert_eq!(decode_u64(&encoded).unwrap(), value);
        }
        assert_eq!(&encode_u64(30303).unwrap()[..], [0x82, 0x76, 0x5f]);
        assert_eq!(&encode_u64(20202).unwrap()[..], [0x82, 0x4e, 0xea]);
    }

    #[test]
    fn test_decode_rejects_leading_zero_integers() {
        assert_eq!(decode_u64(&[0x00]), Err(Error::NonCanonicalInteger));
        assert_eq!(
            decode_u32(&[0x83, 0x00, 0x01, 0x00]),
            Err(Error::NonCanonicalInteger)
        );
    }

    #[test]
    fn test_decode_narrow_overflow() {
        // 0x10000 fits a u32 but not a u16.
        let encoded = encode_u64(0x1_0000).unwrap();
        assert_eq!(decode_u32(&encoded).unwrap(), 0x1_0000);
        assert_eq!(decode_u16(&encoded), Err(Error::NumericOverflow("u16")));
        // int32 overflow from the invalid corpus.
        let encoded = encode_u64(0x1_0000_0000).unwrap();
        assert_eq!(decode_u32(&encoded), Err(Error::NumericOverflow("u32")));
    }

    #[test]
    fn test_decode_narrowest_widths() {
        assert_eq!(decode_u8(&[0x7f]).unwrap(), 127);
        assert_eq!(decode_u8(&[0x81, 0xff]).unwrap(), 255);
        assert!(!decode_bool(&[0x80]).unwrap());
        assert!(decode_bool(&[0x01]).unwrap());
        assert_eq!(decode_bool(&[0x02]), Err(Error::NumericOverflow("bool")));
    }

    #[test]
    fn test_encode_decode_str() {
        let encoded = encode_str("EthereumJ Client").unwrap();
        assert_eq!(encoded[0], 0x90);
        assert_eq!(decode_str(&encoded).unwrap(), "EthereumJ Client");
        assert_eq!(decode_str(&encode_str("").unwrap()).unwrap(), "");
    }

    #[test]
    fn test_encode_decode_biguint() {
        let value = BigUint::parse_bytes(
            b"9650128800487972697726795438087510101805200020100629942070155319087371611597\
              658887860952245483247188023303607186148645071838189546969115967896446355306572",
            10,
        )
        .unwrap();
        let encoded = encode_biguint(&value).unwrap();
        assert_eq!(decode_biguint(&encoded).unwrap(), value);

        assert_eq!(&encode_biguint(&BigUint::from(0u8)).unwrap()[..], [0x80]);
        assert_eq!(&encode_biguint(&BigUint::from(1u8)).unwrap()[..], [0x01]);
        assert_eq!(
            encode_bigint(&BigInt::from(-5)),
            Err(Error::NegativeBigInteger)
        );
    }

    #[test]
    fn test_encode_elements_edge_short_list() {
        // A 55-byte payload sits exactly on the short-list boundary.
        let keys = [0xc0];
        let values = [0xc0];
        let mut code = vec![0xb4];
        code.extend_from_slice(&[0x60; 52]);
        let encoded = encode_elements(&[&keys[..], &values[..], &code[..]]).unwrap();
        assert_eq!(encoded[0], 0xf7);
        assert_eq!(encoded.len(), 56);
    }

    #[test]
    fn test_decode_list() {
        let bin = [0xc8, 0x83, 0x63, 0x61, 0x74, 0x83, 0x64, 0x6f, 0x67];
        let list = decode_list(&bin).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.bytes_at(0).unwrap(), b"cat");
        assert_eq!(list.bytes_at(1).unwrap(), b"dog");
    }
}
