#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use streamrlp::{stream, writer, BytesBuf, Error, RlpBuf, StreamId};

/// An arbitrary wire value: byte strings, integers, and nested lists.
#[derive(Debug, Arbitrary)]
enum Value {
    Bytes(Vec<u8>),
    Number(u64),
    List(Vec<Value>),
}

fn write_value(buf: &mut impl RlpBuf, value: &Value) -> Result<usize, Error> {
    match value {
        Value::Bytes(bytes) => writer::write_bytes(buf, bytes),
        Value::Number(n) => writer::write_u64(buf, *n),
        Value::List(children) => {
            if children.is_empty() {
                return writer::write_prefix(buf, 0, false, true);
            }
            writer::begin_list(buf)?;
            let mut size = 0;
            for child in children {
                size += write_value(buf, child)?;
            }
            Ok(size + writer::end_list(buf, size)?)
        }
    }
}

fn encode_value(value: &Value) -> Vec<u8> {
    let mut buf = BytesBuf::default();
    write_value(&mut buf, value).expect("encoding an in-memory value cannot fail");
    buf.as_slice().to_vec()
}

/// Reads the structure back as raw byte strings and lists.
fn read_value(bin: &[u8], id: StreamId) -> Result<Value, Error> {
    if id.is_list() {
        let mut children = Vec::new();
        for child in stream::ListIter::new(bin, id)? {
            children.push(read_value(bin, child?)?);
        }
        Ok(Value::List(children))
    } else {
        Ok(Value::Bytes(stream::as_bytes(bin, id)?))
    }
}

fuzz_target!(|value: Value| {
    let encoded = encode_value(&value);

    // Whatever was written must decode exactly, and re-encoding the decoded
    // structure must reproduce the bytes: canonical forms are unique.
    let id = stream::decode_element(&encoded, 0, encoded.len(), true)
        .expect("failed to decode a successfully encoded value");
    let reread = read_value(&encoded, id).expect("failed to walk a successfully encoded value");
    assert_eq!(encoded, encode_value(&reread));
});
