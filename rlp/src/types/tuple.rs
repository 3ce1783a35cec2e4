//! Codec implementations for heterogeneous lists as tuples.
//!
//! A tuple encodes as a list whose children are the fields in order, which
//! is how compound application types map onto the wire. Decoding demands the
//! exact arity; anything else fails [`Error::UnexpectedArity`].

use crate::{
    buffer::RlpBuf,
    codec::{Decodable, Encodable},
    error::Error,
    stream::ListIter,
    stream_id::StreamId,
    writer,
};
use paste::paste;

/// Collects exactly `expected` child descriptors of a list.
fn collect_arity(bin: &[u8], id: StreamId, expected: usize) -> Result<Vec<StreamId>, Error> {
    let mut children = Vec::with_capacity(expected);
    for child in ListIter::new(bin, id)? {
        children.push(child?);
    }
    if children.len() != expected {
        return Err(Error::UnexpectedArity { expected, found: children.len() });
    }
    Ok(children)
}

macro_rules! impl_tuple {
    ($len:literal => $($index:literal),+) => {
        paste! {
            impl<$( [<T $index>]: Encodable ),+> Encodable for ( $( [<T $index>], )+ ) {
                fn write_to(&self, buf: &mut impl RlpBuf) -> Result<usize, Error> {
                    writer::begin_list(buf)?;
                    let mut size = 0;
                    $( size += self.$index.write_to(buf)?; )+
                    Ok(size + writer::end_list(buf, size)?)
                }
            }

            impl<$( [<T $index>]: Decodable ),+> Decodable for ( $( [<T $index>], )+ ) {
                fn read_from(bin: &[u8], id: StreamId) -> Result<Self, Error> {
                    let children = collect_arity(bin, id, $len)?;
                    Ok(( $( [<T $index>]::read_from(bin, children[$index])?, )+ ))
                }
            }
        }
    };
}

impl_tuple!(1 => 0);
impl_tuple!(2 => 0, 1);
impl_tuple!(3 => 0, 1, 2);
impl_tuple!(4 => 0, 1, 2, 3);
impl_tuple!(5 => 0, 1, 2, 3, 4);
impl_tuple!(6 => 0, 1, 2, 3, 4, 5);
