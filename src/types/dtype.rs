//! Element types for decoded arrays

/// Element type of an array payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DType {
    Int,
    Double,
    Complex,
    Bool,
    Str,
}

impl DType {
    /// Size in bytes of a single packed element, for fixed-width types
    pub fn element_size(self) -> Option<usize> {
        match self {
            DType::Int => Some(4),
            DType::Double => Some(8),
            DType::Complex => Some(16),
            DType::Bool => Some(1),
            DType::Str => None,
        }
    }
}

/// Tri-state R logical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Logical {
    #[default]
    False,
    True,
    NA,
}

impl Logical {
    /// Decode a wire byte: 0 is false, 1 is true, anything else is NA
    pub fn from_byte(b: u8) -> Self {
        match b {
            0 => Logical::False,
            1 => Logical::True,
            _ => Logical::NA,
        }
    }

    pub fn to_bool(self) -> Option<bool> {
        match self {
            Logical::False => Some(false),
            Logical::True => Some(true),
            Logical::NA => None,
        }
    }

    pub fn is_na(self) -> bool {
        self == Logical::NA
    }
}

impl From<bool> for Logical {
    fn from(v: bool) -> Self {
        if v { Logical::True } else { Logical::False }
    }
}
