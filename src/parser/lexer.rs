//! Record framing over a byte source

use super::primitives::{complex_le, exact, leading, u24_le, u56_le, unpack};
use super::source::ByteSource;
use super::string::{split_strings, symbol};
use crate::error::{Result, RexpError};
use crate::types::{
    DType, Envelope, FLAG_HAS_ATTR, FLAG_LARGE, Logical, RArray, Status, TYPE_MASK, TypeCode,
    Value,
};

/// Header of one record, plus its decoded attribute once parsed
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub type_code: TypeCode,
    /// Declared length, covering the attribute record when one is present
    pub length: u64,
    pub has_attr: bool,
    pub is_large: bool,
    /// Offset of the leading byte
    pub position: u64,
    pub attribute: Option<Box<Record>>,
}

/// A fully decoded record
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub lexeme: Lexeme,
    pub value: Value,
}

impl Lexeme {
    /// Size of this record's header on the wire
    pub fn header_size(&self) -> u64 {
        if self.is_large { 8 } else { 4 }
    }

    /// Decoded attribute value, if any
    pub fn attr(&self) -> Option<&Value> {
        self.attribute.as_ref().map(|r| &r.value)
    }

    /// Length of the payload proper, excluding the attribute record
    pub fn data_length(&self) -> Result<u64> {
        if !self.has_attr {
            return Ok(self.length);
        }
        let attr = self.attribute.as_ref().ok_or_else(|| RexpError::MalformedRecord {
            position: self.position,
            reason: "attribute not yet decoded".into(),
        })?;
        self.length
            .checked_sub(attr.lexeme.length + attr.lexeme.header_size())
            .ok_or_else(|| RexpError::MalformedRecord {
                position: self.position,
                reason: format!(
                    "attribute of {} bytes exceeds record length {}",
                    attr.lexeme.length + attr.lexeme.header_size(),
                    self.length
                ),
            })
    }
}

/// Reason text for a packed array whose byte count is not a whole number of elements
fn ragged(data_length: u64, dtype: DType) -> String {
    match dtype.element_size() {
        Some(width) => format!(
            "{} bytes is not a whole number of {}-byte {:?} elements",
            data_length, width, dtype
        ),
        None => format!("{} bytes cannot hold {:?} elements", data_length, dtype),
    }
}

/// Header fields before the type code is validated
struct RawHeader {
    code: u8,
    length: u64,
    has_attr: bool,
    is_large: bool,
    position: u64,
}

/// Splits a byte source into envelopes, record headers and primitive payloads
pub struct Lexer<'a> {
    source: ByteSource<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: ByteSource<'a>) -> Self {
        Self { source }
    }

    pub fn position(&self) -> u64 {
        self.source.position()
    }

    /// Discard leftover socket data after a failed parse
    pub fn drain(&mut self) {
        self.source.drain();
    }

    fn read(&mut self, n: u64) -> Result<Vec<u8>> {
        let n = usize::try_from(n).map_err(|_| RexpError::MalformedRecord {
            position: self.position(),
            reason: format!("length {} does not fit in memory", n),
        })?;
        self.source.read_exact(n)
    }

    /// Read the fixed 16-byte message prologue
    pub fn read_envelope(&mut self) -> Result<Envelope> {
        let code = u24_le(self.source.read_array::<3>()?);
        let Some(status) = Status::from_code(code) else {
            self.source.drain();
            return Err(RexpError::MalformedEnvelope { code });
        };
        let [error_code] = self.source.read_array::<1>()?;
        let size_lo = u32::from_le_bytes(self.source.read_array::<4>()?);
        // reserved: data offset, then the high word of the message size
        let reserved = self.source.read_array::<8>()?;
        let size_hi = u32::from_le_bytes([reserved[4], reserved[5], reserved[6], reserved[7]]);
        let envelope = Envelope {
            status,
            error_code,
            message_size: (u64::from(size_hi) << 32) | u64::from(size_lo),
        };
        tracing::debug!(
            ok = envelope.is_ok(),
            error_code = envelope.error_code,
            message_size = envelope.message_size,
            "envelope"
        );
        Ok(envelope)
    }

    fn read_raw_header(&mut self) -> Result<RawHeader> {
        let position = self.position();
        let [lead] = self.source.read_array::<1>()?;
        let is_large = lead & FLAG_LARGE != 0;
        let length = if is_large {
            u56_le(self.source.read_array::<7>()?)
        } else {
            u64::from(u24_le(self.source.read_array::<3>()?))
        };
        Ok(RawHeader {
            code: lead & TYPE_MASK,
            length,
            has_attr: lead & FLAG_HAS_ATTR != 0,
            is_large,
            position,
        })
    }

    /// Read the header of the record wrapping the whole message payload
    pub fn next_data_header(&mut self) -> Result<Lexeme> {
        let raw = self.read_raw_header()?;
        if raw.code != TypeCode::Sexp as u8 {
            return Err(RexpError::UnsupportedOuterFormat { code: raw.code });
        }
        Ok(Lexeme {
            type_code: TypeCode::Sexp,
            length: raw.length,
            has_attr: raw.has_attr,
            is_large: raw.is_large,
            position: raw.position,
            attribute: None,
        })
    }

    /// Read the next record header
    pub fn next_header(&mut self) -> Result<Lexeme> {
        let raw = self.read_raw_header()?;
        let type_code = TypeCode::from_u8(raw.code).ok_or(RexpError::InvalidRecordType {
            code: raw.code,
            position: raw.position,
        })?;
        Ok(Lexeme {
            type_code,
            length: raw.length,
            has_attr: raw.has_attr,
            is_large: raw.is_large,
            position: raw.position,
            attribute: None,
        })
    }

    /// Consume and discard the payload of `lexeme`
    pub fn skip_payload(&mut self, lexeme: &Lexeme) -> Result<()> {
        let n = lexeme.data_length()?;
        self.read(n).map(drop)
    }

    /// Decode the payload of a primitive (non-container) record
    pub fn decode_payload(&mut self, lexeme: &Lexeme) -> Result<Value> {
        let data_length = lexeme.data_length()?;
        let malformed = |reason: String| RexpError::MalformedRecord {
            position: lexeme.position,
            reason,
        };
        let value = match lexeme.type_code {
            TypeCode::Null => {
                self.read(data_length)?;
                Value::Null
            }
            TypeCode::Int => {
                let raw = self.read(data_length)?;
                let v = exact(&raw, i32::from_le_bytes)
                    .ok_or_else(|| malformed(format!("INT payload of {} bytes", data_length)))?;
                Value::Int(v)
            }
            TypeCode::Double => {
                let raw = self.read(data_length)?;
                let v = exact(&raw, f64::from_le_bytes)
                    .ok_or_else(|| malformed(format!("DOUBLE payload of {} bytes", data_length)))?;
                Value::Double(v)
            }
            TypeCode::Bool => {
                let raw = self.read(data_length)?;
                let first = raw
                    .first()
                    .ok_or_else(|| malformed("empty BOOL payload".into()))?;
                Value::Bool(Logical::from_byte(*first))
            }
            TypeCode::ArrayInt => {
                let raw = self.read(data_length)?;
                let values = unpack(&raw, i32::from_le_bytes)
                    .ok_or_else(|| malformed(ragged(data_length, DType::Int)))?;
                Value::Array(RArray::from(values))
            }
            TypeCode::ArrayDouble => {
                let raw = self.read(data_length)?;
                let values = unpack(&raw, f64::from_le_bytes)
                    .ok_or_else(|| malformed(ragged(data_length, DType::Double)))?;
                Value::Array(RArray::from(values))
            }
            TypeCode::ArrayComplex => {
                let raw = self.read(data_length)?;
                let values = unpack(&raw, complex_le)
                    .ok_or_else(|| malformed(ragged(data_length, DType::Complex)))?;
                Value::Array(RArray::from(values))
            }
            TypeCode::ArrayBool => {
                let raw = self.read(data_length)?;
                let count = leading(&raw, u32::from_le_bytes)
                    .ok_or_else(|| malformed("BOOL array without element count".into()))?;
                // the rest is `count` logicals followed by alignment padding
                let body = &raw[4..];
                let values: Vec<Logical> = body
                    .get(..count as usize)
                    .ok_or_else(|| {
                        malformed(format!("{} logicals declared in {} bytes", count, body.len()))
                    })?
                    .iter()
                    .map(|b| Logical::from_byte(*b))
                    .collect();
                Value::Array(RArray::from(values))
            }
            TypeCode::ArrayStr => {
                let raw = self.read(data_length)?;
                Value::Array(RArray::from(split_strings(&raw)))
            }
            TypeCode::Str => Value::Str(symbol(&self.read(data_length)?)),
            TypeCode::SymName => Value::Symbol(symbol(&self.read(data_length)?)),
            TypeCode::Raw => {
                let content_length = data_length
                    .checked_sub(4)
                    .ok_or_else(|| malformed("RAW payload without length field".into()))?;
                self.read(4)?;
                Value::Raw(self.read(content_length)?)
            }
            TypeCode::Unknown => {
                let raw = self.read(data_length)?;
                let v = leading(&raw, i32::from_le_bytes)
                    .ok_or_else(|| malformed(format!("UNKNOWN payload of {} bytes", data_length)))?;
                Value::Unknown(v)
            }
            TypeCode::S4
            | TypeCode::Sexp
            | TypeCode::Vector
            | TypeCode::Closure
            | TypeCode::ListNoTag
            | TypeCode::ListTag
            | TypeCode::LangNoTag
            | TypeCode::LangTag
            | TypeCode::VectorExp => {
                return Err(malformed(format!(
                    "{} is not a primitive payload",
                    lexeme.type_code.name()
                )));
            }
        };
        Ok(value)
    }
}
