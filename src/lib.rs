//! rexp - Decoder for the Rserve QAP1 binary result format
//!
//! Turns the response an Rserve server sends after an evaluation request into
//! a tree of native values: scalars, typed n-dimensional arrays, lists, tagged
//! lists, closures and S4 objects.
//!
//! # Features
//!
//! - Decodes from an in-memory buffer, any `Read` stream, or a socket
//! - Typed arrays backed by `ndarray`, reshaped column-major from `dim`
//! - `names` attributes turn lists into tagged lists
//! - Socket sources are drained after a failed parse so the connection stays usable
//!
//! # Example
//!
//! ```rust
//! use rexp::{Value, parse};
//!
//! // response to evaluating `1`
//! let mut bytes = vec![0x01, 0x00, 0x01, 0x00, 0x10, 0x00, 0x00, 0x00];
//! bytes.extend_from_slice(&[0; 8]);
//! bytes.extend_from_slice(&[0x0A, 0x0C, 0x00, 0x00, 0x21, 0x08, 0x00, 0x00]);
//! bytes.extend_from_slice(&1.0f64.to_le_bytes());
//!
//! assert_eq!(parse(&bytes).unwrap(), Value::Double(1.0));
//! ```

pub mod error;
pub mod parser;
pub mod types;

use std::io::Read;

// Re-export common types at crate root
pub use error::{Result, RexpError};
pub use parser::{ByteSource, ParserConfig, RParser, Socket};
pub use types::{
    ArrayData, ArrayElement, DType, ElementError, Envelope, Logical, RArray, Status, TaggedList,
    TypeCode, Value,
};

/// Decode one response held entirely in memory
pub fn parse(bytes: &[u8]) -> Result<Value> {
    parse_with(bytes, ParserConfig::default())
}

/// Decode one in-memory response with explicit settings
pub fn parse_with(bytes: &[u8], config: ParserConfig) -> Result<Value> {
    RParser::new(ByteSource::buffer(bytes), config).parse()
}

/// Decode one response from a byte stream
pub fn parse_stream<R: Read>(reader: R, config: ParserConfig) -> Result<Value> {
    RParser::new(ByteSource::stream(reader), config).parse()
}

/// Decode one response from a connected socket.
///
/// Leftover bytes are discarded if decoding fails, so the next request on
/// the same connection starts at a message boundary.
pub fn parse_socket<S: Socket>(socket: &mut S, config: ParserConfig) -> Result<Value> {
    RParser::new(ByteSource::socket(socket), config).parse()
}
