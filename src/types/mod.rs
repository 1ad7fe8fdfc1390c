//! Core types for the decoded value tree

mod array;
mod code;
mod dtype;
mod element;
mod header;
mod tagged;
mod value;

pub use array::{ArrayData, RArray};
pub use code::TypeCode;
pub use dtype::{DType, Logical};
pub use element::{ArrayElement, ElementError};
pub use header::{
    ENVELOPE_SIZE, Envelope, FLAG_HAS_ATTR, FLAG_LARGE, RESP_ERR, RESP_OK, Status, TYPE_MASK,
    error_message,
};
pub use tagged::TaggedList;
pub use value::Value;
