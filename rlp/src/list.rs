//! An indexed view over a decoded list.
//!
//! The iteration protocol discovers arity by exhaustion, so random access
//! needs the child descriptors cached. [`RlpList`] iterates once at
//! construction and then answers indexed queries without touching the
//! protocol again. It borrows the input; nothing is copied until a caller
//! extracts a value.

use crate::{
    codec::Decodable,
    error::Error,
    stream::{self, decode_element, ListIter},
    stream_id::StreamId,
};

/// A decoded list with its children indexed for random access.
pub struct RlpList<'a> {
    bin: &'a [u8],
    id: StreamId,
    children: Vec<StreamId>,
}

impl<'a> RlpList<'a> {
    /// Indexes the children of the list `id` describes.
    pub fn new(bin: &'a [u8], id: StreamId) -> Result<Self, Error> {
        let children = ListIter::new(bin, id)?.collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bin, id, children })
    }

    /// Decodes a buffer holding exactly one encoded list and indexes it.
    pub fn from_encoded(bin: &'a [u8]) -> Result<Self, Error> {
        let id = decode_element(bin, 0, bin.len(), true)?;
        Self::new(bin, id)
    }

    /// The list's own descriptor.
    pub fn id(&self) -> StreamId {
        self.id
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the list has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The child descriptors in order.
    pub fn ids(&self) -> &[StreamId] {
        &self.children
    }

    /// The child descriptor at `idx`.
    ///
    /// Panics if `idx` is out of bounds, as do the other indexed accessors.
    pub fn id_at(&self, idx: usize) -> StreamId {
        self.children[idx]
    }

    /// Whether the child at `idx` is the canonical empty item.
    pub fn is_null_at(&self, idx: usize) -> bool {
        self.children[idx].is_null()
    }

    /// Whether the child at `idx` is itself a list.
    pub fn is_list_at(&self, idx: usize) -> bool {
        self.children[idx].is_list()
    }

    /// Borrows the content of the byte-string child at `idx`.
    pub fn bytes_at(&self, idx: usize) -> Result<&'a [u8], Error> {
        stream::as_slice(self.bin, self.children[idx])
    }

    /// Decodes the child at `idx` as an unsigned integer.
    pub fn u64_at(&self, idx: usize) -> Result<u64, Error> {
        stream::as_u64(self.bin, self.children[idx])
    }

    /// Decodes the child at `idx` as a UTF-8 string.
    pub fn str_at(&self, idx: usize) -> Result<String, Error> {
        stream::as_string(self.bin, self.children[idx])
    }

    /// The full encoding of the child at `idx`, prefix included.
    pub fn raw_at(&self, idx: usize) -> &'a [u8] {
        self.children[idx].raw_slice(self.bin)
    }

    /// Indexes the list child at `idx`.
    pub fn list_at(&self, idx: usize) -> Result<RlpList<'a>, Error> {
        RlpList::new(self.bin, self.children[idx])
    }

    /// Decodes the child at `idx` as any [`Decodable`] type.
    pub fn get<T: Decodable>(&self, idx: usize) -> Result<T, Error> {
        T::read_from(self.bin, self.children[idx])
    }

    /// The list's own full encoding, prefix included.
    pub fn encoded(&self) -> &'a [u8] {
        self.id.raw_slice(self.bin)
    }
}
