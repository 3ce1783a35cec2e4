//! Wire-format vectors from the canonical RLP test corpus, exercised through
//! the public API.

use streamrlp::{rlp, stream, writer, BytesBuf, Error, RawBuf, RlpBuf};
use test_case::test_case;

/// Converts a hexadecimal string to bytes.
fn from_hex(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0);
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
        .collect()
}

/// Converts bytes to a hexadecimal string.
fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[test_case("", "80"; "empty string")]
#[test_case("d", "64"; "single character")]
#[test_case("cat", "83636174"; "cat")]
#[test_case("dog", "83646f67"; "dog")]
#[test_case(
    "Lorem ipsum dolor sit amet, consectetur adipisicing elit",
    "b8384c6f72656d20697073756d20646f6c6f722073697420616d65742c20636f6e7365637465747572206164697069736963696e6720656c6974";
    "56 byte string uses the long form"
)]
fn test_string_vectors(input: &str, expected: &str) {
    let encoded = rlp::encode_str(input).unwrap();
    assert_eq!(hex(&encoded), expected);
    assert_eq!(rlp::decode_str(&encoded).unwrap(), input);
}

#[test_case(0, "80"; "zero")]
#[test_case(1, "01"; "one")]
#[test_case(10, "0a"; "ten")]
#[test_case(100, "64"; "hundred")]
#[test_case(127, "7f"; "largest self-encoding")]
#[test_case(128, "8180"; "smallest prefixed")]
#[test_case(1000, "8203e8"; "thousand")]
#[test_case(1024, "820400"; "kibi")]
#[test_case(30303, "82765f"; "discovery port")]
#[test_case(65536, "83010000"; "three bytes")]
#[test_case(0x7fff_ffff, "847fffffff"; "i32 max")]
fn test_integer_vectors(input: u64, expected: &str) {
    let encoded = rlp::encode_u64(input).unwrap();
    assert_eq!(hex(&encoded), expected);
    assert_eq!(rlp::decode_u64(&encoded).unwrap(), input);
}

#[test]
fn test_list_vectors() {
    let cat_dog = vec!["cat".to_string(), "dog".to_string()];
    assert_eq!(hex(&rlp::encode(&cat_dog).unwrap()), "c88363617483646f67");

    let dog_god_cat = vec!["dog".to_string(), "god".to_string(), "cat".to_string()];
    assert_eq!(
        hex(&rlp::encode(&dog_god_cat).unwrap()),
        "cc83646f6783676f6483636174"
    );

    let empty: Vec<u64> = vec![];
    assert_eq!(hex(&rlp::encode(&empty).unwrap()), "c0");

    let nested: Vec<Vec<Vec<u8>>> = vec![vec![vec![], vec![]], vec![]];
    assert_eq!(hex(&rlp::encode(&nested).unwrap()), "c4c2c0c0c0");
}

#[test]
fn test_64_byte_item_vector() {
    let payload = from_hex(
        "ce73660a06626c1b3fda7b18ef7ba3ce17b6bf604f9541d3c6c654b7ae88b239\
         407f659c78f419025d785727ed017b6add21952d7e12007373e321dbc31824ba",
    );
    let encoded = rlp::encode_bytes(&payload).unwrap();
    assert_eq!(hex(&encoded), format!("b840{}", hex(&payload)));
    assert_eq!(rlp::decode_bytes(&encoded).unwrap(), payload);
}

#[test]
fn test_edge_short_list_vector() {
    let expected = "f7c0c0b4600160003556601359506301000000600035040f6018590060005660805460016080530160005760003560805760203560003557";
    let keys = from_hex("c0");
    let values = from_hex("c0");
    let code = from_hex("b4600160003556601359506301000000600035040f6018590060005660805460016080530160005760003560805760203560003557");
    let encoded = rlp::encode_elements(&[keys, values, code]).unwrap();
    assert_eq!(hex(&encoded), expected);

    let list = rlp::decode_list(&encoded).unwrap();
    assert_eq!(list.len(), 3);
    assert!(list.is_list_at(0));
    assert_eq!(list.raw_at(2).len(), 53);
}

/// Exact-decodes the input and walks every nested element, surfacing the
/// first structural error.
fn decode_any(bin: &[u8]) -> Result<(), Error> {
    fn walk(bin: &[u8], id: streamrlp::StreamId) -> Result<(), Error> {
        if !id.is_list() {
            return Ok(());
        }
        for child in streamrlp::ListIter::new(bin, id)? {
            walk(bin, child?)?;
        }
        Ok(())
    }
    walk(bin, stream::decode_element(bin, 0, bin.len(), true)?)
}

#[test_case(""; "empty input")]
#[test_case("8100"; "prefixed self-encoding byte")]
#[test_case("b805"; "long form below threshold")]
#[test_case("b90038"; "long form truncated payload")]
#[test_case("8363"; "short item truncated")]
#[test_case("c28364"; "child overruns list payload")]
#[test_case("c28100"; "non-canonical child")]
#[test_case("bf0f000000000000021111"; "oversized declared length")]
#[test_case("83646f6700"; "trailing bytes")]
fn test_invalid_vectors(input: &str) {
    assert!(decode_any(&from_hex(input)).is_err());
}

#[test]
fn test_invalid_reasons() {
    assert_eq!(
        rlp::decode_u64(&from_hex("8100")),
        Err(Error::NonCanonicalShortItem)
    );
    // int32Overflow from the invalid corpus: 2^32 does not fit a u32.
    assert_eq!(
        rlp::decode_u32(&from_hex("850100000000")),
        Err(Error::NumericOverflow("u32"))
    );
    // A long form declaring a length below the threshold.
    let mut bin = from_hex("b805");
    bin.extend_from_slice(&[0x61; 5]);
    assert_eq!(rlp::decode_bytes(&bin), Err(Error::NonOptimalLength));
    // Trailing bytes under exact decode.
    assert_eq!(
        rlp::decode_bytes(&from_hex("83646f6700")),
        Err(Error::TrailingBytes(1))
    );
}

#[test]
fn test_iteration_tiles_payload() {
    // Child ranges must tile the list payload with no gaps or overlaps.
    let encoded = rlp::encode(&vec![
        "cat".to_string(),
        "Lorem ipsum dolor sit amet, consectetur adipisicing elit".to_string(),
        "x".to_string(),
    ])
    .unwrap();
    let list = stream::decode_element(&encoded, 0, encoded.len(), true).unwrap();

    let mut cursor = list.offset();
    let mut prev = list;
    let mut count = 0;
    loop {
        let child = stream::iterate(&encoded, list, prev).unwrap();
        if child.is_eof() {
            break;
        }
        assert_eq!(child.offset() - child.prefix_size(&encoded), cursor);
        cursor = child.offset() + child.size();
        count += 1;
        prev = child;
    }
    assert_eq!(cursor, list.offset() + list.size());
    assert_eq!(count, 3);
}

#[test]
fn test_backend_equivalence() {
    // The growable-array and raw-memory backends must be byte-identical.
    fn drive<B: RlpBuf>(mut buf: B) -> Vec<u8> {
        writer::begin_list(&mut buf).unwrap();
        let mut size = 0;
        size += writer::write_str(&mut buf, "cat").unwrap();
        size += writer::write_u64(&mut buf, 1024).unwrap();
        size += writer::write_bytes(&mut buf, &[0x61; 56]).unwrap();
        {
            writer::begin_list(&mut buf).unwrap();
            let mut inner = 0;
            inner += writer::write_u64(&mut buf, 0).unwrap();
            inner += writer::write_str(&mut buf, "dog").unwrap();
            size += inner + writer::end_list(&mut buf, inner).unwrap();
        }
        writer::end_list(&mut buf, size).unwrap();
        buf.as_slice().to_vec()
    }

    let grown = drive(BytesBuf::with_capacity(1));
    let raw = drive(RawBuf::with_capacity(1));
    let comfortable = drive(BytesBuf::with_capacity(4096));
    assert_eq!(grown, raw);
    assert_eq!(grown, comfortable);

    // And the output round-trips.
    let list = rlp::decode_list(&grown).unwrap();
    assert_eq!(list.len(), 4);
    assert_eq!(list.str_at(0).unwrap(), "cat");
    assert_eq!(list.u64_at(1).unwrap(), 1024);
    assert_eq!(list.bytes_at(2).unwrap(), &[0x61; 56]);
    assert_eq!(list.list_at(3).unwrap().str_at(1).unwrap(), "dog");
}

#[test]
fn test_roundtrip_nested_structures() {
    let value = (
        vec![0u64, 1, 127, 128, 30303, u64::MAX],
        vec![
            vec!["".to_string()],
            vec!["a".to_string(), "bb".to_string(), "ccc".to_string()],
        ],
        true,
    );
    let encoded = rlp::encode(&value).unwrap();
    let decoded: (Vec<u64>, Vec<Vec<String>>, bool) = rlp::decode(&encoded).unwrap();
    assert_eq!(decoded, value);
}
