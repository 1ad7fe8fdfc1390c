//! Recursive record parsing

use super::RParser;
use super::array::{apply_array_attributes, apply_list_attributes};
use super::lexer::{Lexeme, Record};
use crate::error::{Result, RexpError};
use crate::types::{TaggedList, TypeCode, Value};

/// Deepest record nesting accepted before parsing stops
pub const MAX_DEPTH: usize = 128;

impl RParser<'_> {
    /// Parse one record, its attribute and all of its children
    pub(crate) fn parse_record(&mut self) -> Result<Record> {
        if self.depth >= MAX_DEPTH {
            return Err(RexpError::NestingTooDeep {
                limit: MAX_DEPTH,
                position: self.lexer.position(),
            });
        }
        self.depth += 1;
        let record = self.parse_record_at_depth();
        self.depth -= 1;
        record
    }

    fn parse_record_at_depth(&mut self) -> Result<Record> {
        let mut lexeme = self.lexer.next_header()?;
        tracing::trace!(
            depth = self.depth,
            kind = lexeme.type_code.name(),
            length = lexeme.length,
            has_attr = lexeme.has_attr,
            position = lexeme.position,
            "record"
        );
        if lexeme.has_attr {
            let attr = self.parse_record()?;
            lexeme.attribute = Some(Box::new(attr));
        }

        let value = match lexeme.type_code {
            TypeCode::Null
            | TypeCode::Int
            | TypeCode::Double
            | TypeCode::Bool
            | TypeCode::Str
            | TypeCode::SymName
            | TypeCode::Raw
            | TypeCode::Unknown => self.lexer.decode_payload(&lexeme)?,
            TypeCode::ArrayInt
            | TypeCode::ArrayDouble
            | TypeCode::ArrayComplex
            | TypeCode::ArrayBool
            | TypeCode::ArrayStr => {
                let value = self.lexer.decode_payload(&lexeme)?;
                match (value, lexeme.attr()) {
                    (Value::Array(arr), Some(attr)) => {
                        Value::Array(apply_array_attributes(arr, attr, lexeme.position)?)
                    }
                    (value, _) => value,
                }
            }
            TypeCode::Vector | TypeCode::VectorExp | TypeCode::ListNoTag | TypeCode::LangNoTag => {
                let items = self.parse_items(&lexeme)?;
                apply_list_attributes(items, lexeme.attr(), lexeme.position)?
            }
            TypeCode::ListTag | TypeCode::LangTag => Value::Tagged(self.parse_pairs(&lexeme)?),
            TypeCode::Closure => {
                let end = self.payload_end(&lexeme)?;
                let formals = self.parse_record()?.value;
                let body = self.parse_record()?.value;
                self.check_end(&lexeme, end)?;
                Value::Closure {
                    formals: Box::new(formals),
                    body: Box::new(body),
                }
            }
            TypeCode::S4 => {
                self.lexer.skip_payload(&lexeme)?;
                let attrs = lexeme
                    .attr()
                    .and_then(Value::as_tagged)
                    .cloned()
                    .unwrap_or_default();
                Value::S4(attrs)
            }
            TypeCode::Sexp => {
                return Err(RexpError::InvalidRecordType {
                    code: TypeCode::Sexp as u8,
                    position: lexeme.position,
                });
            }
        };
        Ok(Record { lexeme, value })
    }

    /// Byte offset at which the payload of `lexeme` ends
    fn payload_end(&self, lexeme: &Lexeme) -> Result<u64> {
        Ok(self.lexer.position() + lexeme.data_length()?)
    }

    fn check_end(&self, lexeme: &Lexeme, end: u64) -> Result<()> {
        let position = self.lexer.position();
        if position != end {
            return Err(RexpError::MalformedRecord {
                position: lexeme.position,
                reason: format!(
                    "{} children end at {}, declared end is {}",
                    lexeme.type_code.name(),
                    position,
                    end
                ),
            });
        }
        Ok(())
    }

    /// Parse children until the payload's byte budget is used up
    fn parse_items(&mut self, lexeme: &Lexeme) -> Result<Vec<Value>> {
        let end = self.payload_end(lexeme)?;
        let mut items = Vec::new();
        while self.lexer.position() < end {
            let item = self.parse_record()?.value;
            items.push(self.unwrap_scalar(item));
        }
        self.check_end(lexeme, end)?;
        Ok(items)
    }

    /// Parse (value, tag) record pairs until the byte budget is used up
    fn parse_pairs(&mut self, lexeme: &Lexeme) -> Result<TaggedList> {
        let end = self.payload_end(lexeme)?;
        let mut pairs = TaggedList::new();
        while self.lexer.position() < end {
            // values precede their tags on the wire
            let value = self.parse_record()?.value;
            let tag = self.parse_record()?.value;
            pairs.push(tag, value);
        }
        self.check_end(lexeme, end)?;
        Ok(pairs)
    }
}
