//! Binary parser for QAP1 result messages
//!
//! A [`Lexer`] frames the byte stream into records; [`RParser`] assembles
//! those records into a [`Value`] tree and applies R attributes.

mod array;
mod lexer;
mod primitives;
mod source;
mod string;
mod value;

pub use lexer::{Lexeme, Lexer, Record};
pub use source::{ByteSource, Socket};
pub use value::MAX_DEPTH;

use crate::error::{Result, RexpError};
use crate::types::{Envelope, Value, error_message};

/// Caller-visible decoder settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Keep one-element arrays as arrays instead of unwrapping them to scalars
    pub atomic_array: bool,
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atomic_array(mut self, atomic_array: bool) -> Self {
        self.atomic_array = atomic_array;
        self
    }
}

/// Decodes one server response per [`RParser::parse`] call
pub struct RParser<'a> {
    lexer: Lexer<'a>,
    config: ParserConfig,
    depth: usize,
}

impl<'a> RParser<'a> {
    pub fn new(source: ByteSource<'a>, config: ParserConfig) -> Self {
        Self {
            lexer: Lexer::new(source),
            config,
            depth: 0,
        }
    }

    pub fn config(&self) -> ParserConfig {
        self.config
    }

    /// Bytes consumed from the source so far
    pub fn position(&self) -> u64 {
        self.lexer.position()
    }

    /// Decode the next message from the source.
    ///
    /// On failure a socket source is drained so the next call starts at a
    /// message boundary.
    pub fn parse(&mut self) -> Result<Value> {
        self.depth = 0;
        let envelope = self.lexer.read_envelope()?;
        match self.parse_message(&envelope) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::debug!(error = %e, "parse failed, draining source");
                self.lexer.drain();
                Err(e)
            }
        }
    }

    fn parse_message(&mut self, envelope: &Envelope) -> Result<Value> {
        if !envelope.is_ok() {
            let code = envelope.error_code;
            return Err(match error_message(code) {
                Some(message) => RexpError::ResponseError { message, code },
                None => RexpError::EvaluationError { code },
            });
        }
        if envelope.message_size == 0 {
            return Ok(Value::Null);
        }
        let outer = self.lexer.next_data_header()?;
        let framed = outer.header_size() + outer.length;
        if framed != envelope.message_size {
            return Err(RexpError::MalformedRecord {
                position: outer.position,
                reason: format!(
                    "expression spans {} bytes, envelope declares {}",
                    framed, envelope.message_size
                ),
            });
        }
        let end = self.lexer.position() + outer.length;
        let record = self.parse_record()?;
        if self.lexer.position() != end {
            return Err(RexpError::MalformedRecord {
                position: outer.position,
                reason: format!(
                    "expression ends at {}, declared end is {}",
                    self.lexer.position(),
                    end
                ),
            });
        }
        Ok(self.unwrap_scalar(record.value))
    }

    /// Replace a plain one-element array by its element, unless configured otherwise
    pub(crate) fn unwrap_scalar(&self, value: Value) -> Value {
        if self.config.atomic_array {
            return value;
        }
        match value {
            Value::Array(arr) if arr.is_plain() => match arr.into_scalar() {
                Ok(scalar) => scalar,
                Err(arr) => Value::Array(arr),
            },
            other => other,
        }
    }
}
