//! Boundary values of the RLP wire format.

/// If a string is 0-55 bytes long, the RLP encoding consists of a single byte
/// with value 0x80 plus the length of the string, followed by the string. The
/// range of the first byte is thus [0x80, 0xb7].
pub const OFFSET_SHORT_ITEM: u8 = 0x80;

/// If a string is more than 55 bytes long, the RLP encoding consists of a
/// single byte with value 0xb7 plus the length of the length of the string in
/// binary form, followed by the length of the string, followed by the string.
/// For example, a length-1024 string is encoded as `\xb9\x04\x00` followed by
/// the string. The range of the first byte is thus [0xb8, 0xbf].
pub const OFFSET_LONG_ITEM: u8 = 0xb7;

/// If the total payload of a list (the combined length of all its items) is
/// 0-55 bytes long, the RLP encoding consists of a single byte with value 0xc0
/// plus the length of the payload, followed by the concatenation of the child
/// encodings. The range of the first byte is thus [0xc0, 0xf7].
pub const OFFSET_SHORT_LIST: u8 = 0xc0;

/// If the total payload of a list is more than 55 bytes long, the RLP encoding
/// consists of a single byte with value 0xf7 plus the length of the length of
/// the payload, followed by the payload length, followed by the concatenation
/// of the child encodings. The range of the first byte is thus [0xf8, 0xff].
pub const OFFSET_LONG_LIST: u8 = 0xf7;

/// Lengths below this threshold are folded into the selector byte; lengths at
/// or above it use the explicit length-of-length form. A length under the
/// threshold encoded in the long form is not canonical and must be rejected.
pub const SIZE_THRESHOLD: usize = 56;

/// The encoding of the empty byte string (and of the integer zero).
pub const EMPTY_ITEM: u8 = 0x80;

/// The encoding of the empty list.
pub const EMPTY_LIST: u8 = 0xc0;

/// Offsets and sizes are packed into 31 bits each (see [`crate::StreamId`]),
/// so no input or payload may exceed this many bytes.
pub const MAX_ENCODED: usize = 0x7fff_ffff;
