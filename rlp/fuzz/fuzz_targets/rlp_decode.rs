#![no_main]

use libfuzzer_sys::fuzz_target;
use streamrlp::{stream, StreamId};

/// Walks every reachable element. Errors are fine; panics are not.
fn walk(bin: &[u8], id: StreamId, depth: usize) {
    if depth > 64 {
        return;
    }
    if id.is_list() {
        let mut prev = id;
        loop {
            match stream::iterate(bin, id, prev) {
                Ok(child) if child.is_eof() => break,
                Ok(child) => {
                    walk(bin, child, depth + 1);
                    prev = child;
                }
                Err(_) => break,
            }
        }
    } else {
        let _ = stream::as_slice(bin, id);
        let _ = stream::as_u64(bin, id);
        let _ = stream::as_biguint(bin, id);
        let _ = id.prefix_size(bin);
    }
}

fuzz_target!(|data: &[u8]| {
    // Arbitrary byte soup must never panic the decoder, in either mode.
    if let Ok(id) = stream::decode_element(data, 0, data.len(), true) {
        walk(data, id, 0);
    }
    if let Ok(id) = stream::decode_element(data, 0, data.len(), false) {
        walk(data, id, 0);
    }
});
