//! Record type codes

/// Closed set of record type codes accepted on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypeCode {
    Null = 0x00,
    Int = 0x01,
    Double = 0x02,
    Str = 0x03,
    Bool = 0x06,
    S4 = 0x07,
    /// Envelope payload wrapper; only valid as the outermost record
    Sexp = 0x0A,
    Vector = 0x10,
    Closure = 0x12,
    SymName = 0x13,
    ListNoTag = 0x14,
    ListTag = 0x15,
    LangNoTag = 0x16,
    LangTag = 0x17,
    VectorExp = 0x1A,
    ArrayInt = 0x20,
    ArrayDouble = 0x21,
    ArrayStr = 0x22,
    ArrayBool = 0x24,
    Raw = 0x25,
    ArrayComplex = 0x26,
    Unknown = 0x30,
}

impl TypeCode {
    pub fn from_u8(code: u8) -> Option<Self> {
        match code {
            0x00 => Some(TypeCode::Null),
            0x01 => Some(TypeCode::Int),
            0x02 => Some(TypeCode::Double),
            0x03 => Some(TypeCode::Str),
            0x06 => Some(TypeCode::Bool),
            0x07 => Some(TypeCode::S4),
            0x0A => Some(TypeCode::Sexp),
            0x10 => Some(TypeCode::Vector),
            0x12 => Some(TypeCode::Closure),
            0x13 => Some(TypeCode::SymName),
            0x14 => Some(TypeCode::ListNoTag),
            0x15 => Some(TypeCode::ListTag),
            0x16 => Some(TypeCode::LangNoTag),
            0x17 => Some(TypeCode::LangTag),
            0x1A => Some(TypeCode::VectorExp),
            0x20 => Some(TypeCode::ArrayInt),
            0x21 => Some(TypeCode::ArrayDouble),
            0x22 => Some(TypeCode::ArrayStr),
            0x24 => Some(TypeCode::ArrayBool),
            0x25 => Some(TypeCode::Raw),
            0x26 => Some(TypeCode::ArrayComplex),
            0x30 => Some(TypeCode::Unknown),
            _ => None,
        }
    }

    /// Short name used in log output
    pub fn name(self) -> &'static str {
        match self {
            TypeCode::Null => "NULL",
            TypeCode::Int => "INT",
            TypeCode::Double => "DOUBLE",
            TypeCode::Str => "STR",
            TypeCode::Bool => "BOOL",
            TypeCode::S4 => "S4",
            TypeCode::Sexp => "SEXP",
            TypeCode::Vector => "VECTOR",
            TypeCode::Closure => "CLOS",
            TypeCode::SymName => "SYMNAME",
            TypeCode::ListNoTag => "LIST_NOTAG",
            TypeCode::ListTag => "LIST_TAG",
            TypeCode::LangNoTag => "LANG_NOTAG",
            TypeCode::LangTag => "LANG_TAG",
            TypeCode::VectorExp => "VECTOR_EXP",
            TypeCode::ArrayInt => "ARRAY_INT",
            TypeCode::ArrayDouble => "ARRAY_DOUBLE",
            TypeCode::ArrayStr => "ARRAY_STR",
            TypeCode::ArrayBool => "ARRAY_BOOL",
            TypeCode::Raw => "RAW",
            TypeCode::ArrayComplex => "ARRAY_CPLX",
            TypeCode::Unknown => "UNKNOWN",
        }
    }
}
