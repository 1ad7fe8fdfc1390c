//! Error types for rexp

use thiserror::Error;

/// Errors raised while decoding a server response
#[derive(Debug, Error)]
pub enum RexpError {
    /// Source exhausted before a requested byte count could be satisfied
    #[error("unexpected end of data at position {position}")]
    EndOfData { position: u64 },

    /// Leading byte carries a type code outside the valid set
    #[error("invalid record type 0x{code:02X} at position {position}")]
    InvalidRecordType { code: u8, position: u64 },

    /// Response code is neither OK nor ERR
    #[error("received illegal response code 0x{code:06X}")]
    MalformedEnvelope { code: u32 },

    /// Server reported a known error code
    #[error("server error: {message} (code 0x{code:02X})")]
    ResponseError { message: &'static str, code: u8 },

    /// Server reported an error code with no known message
    #[error("evaluation failed with error code 0x{code:02X}")]
    EvaluationError { code: u8 },

    /// Outer record is not an expression wrapper
    #[error("unsupported outer record type 0x{code:02X}")]
    UnsupportedOuterFormat { code: u8 },

    /// Record framing is inconsistent
    #[error("malformed record at position {position}: {reason}")]
    MalformedRecord { position: u64, reason: String },

    /// Records nest deeper than the parser accepts
    #[error("records nested deeper than {limit} levels at position {position}")]
    NestingTooDeep { limit: usize, position: u64 },

    /// `dim` attribute does not match the element count
    #[error("cannot reshape {len} elements into {shape:?}")]
    ShapeMismatch { shape: Vec<usize>, len: usize },

    /// `names` attribute does not match the element count
    #[error("{names} names given for {len} elements")]
    NamesMismatch { names: usize, len: usize },

    /// I/O error other than running out of data
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RexpError {
    /// True if the server itself reported the failure, as opposed to malformed data
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            RexpError::ResponseError { .. } | RexpError::EvaluationError { .. }
        )
    }
}

/// Result type alias using RexpError.
pub type Result<T> = std::result::Result<T, RexpError>;
