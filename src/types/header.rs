//! Envelope constants and structure

/// Response code (low 24 bits of the command word) for a successful reply
pub const RESP_OK: u32 = 0x01_0001;

/// Response code for a failed reply
pub const RESP_ERR: u32 = 0x01_0002;

/// Envelope size in bytes (response code + error code + size + reserved)
pub const ENVELOPE_SIZE: usize = 16;

/// Attribute flag in a record's leading byte
pub const FLAG_HAS_ATTR: u8 = 0x80;

/// Large-length flag in a record's leading byte
pub const FLAG_LARGE: u8 = 0x40;

/// Mask selecting the type code from a record's leading byte
pub const TYPE_MASK: u8 = 0x3F;

/// Response status carried in the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Err,
}

impl Status {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            RESP_OK => Some(Status::Ok),
            RESP_ERR => Some(Status::Err),
            _ => None,
        }
    }
}

/// Decoded message prologue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope {
    pub status: Status,
    pub error_code: u8,
    /// Payload size in bytes, including the high word from the reserved field
    pub message_size: u64,
}

impl Envelope {
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

/// Human readable message for a server error code, if the code is known
pub fn error_message(code: u8) -> Option<&'static str> {
    let message = match code {
        0x41 => "auth failed",
        0x42 => "connection broken",
        0x43 => "invalid command",
        0x44 => "invalid parameters",
        0x45 => "R error",
        0x46 => "I/O error",
        0x47 => "file not open",
        0x48 => "access denied",
        0x49 => "unsupported command",
        0x4A => "unknown command",
        0x4B => "data overflow",
        0x4C => "object too big",
        0x4D => "out of memory",
        0x4E => "control pipe closed",
        0x50 => "session busy",
        0x51 => "unable to detach session",
        _ => return None,
    };
    Some(message)
}
