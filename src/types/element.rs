//! Typed ndarray access to decoded arrays

use super::{ArrayData, DType, Logical, RArray, Value};
use ndarray::{ArrayD, ArrayViewD};
use num_complex::Complex64;
use thiserror::Error;

/// Error type for typed array access
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementError {
    /// DType mismatch between expected and actual
    #[error("DType mismatch: expected {expected:?}, got {actual:?}")]
    DTypeMismatch { expected: DType, actual: DType },
}

/// Trait for types that can be stored in a decoded array
pub trait ArrayElement: Sized + Clone + 'static {
    const DTYPE: DType;

    /// Borrow the typed storage, if `data` holds this element type
    fn view(data: &ArrayData) -> Option<&ArrayD<Self>>;

    fn wrap(arr: ArrayD<Self>) -> ArrayData;

    /// Convert a single element to its scalar value
    fn into_value(self) -> Value;
}

impl ArrayElement for i32 {
    const DTYPE: DType = DType::Int;

    fn view(data: &ArrayData) -> Option<&ArrayD<Self>> {
        match data {
            ArrayData::Int(a) => Some(a),
            _ => None,
        }
    }

    fn wrap(arr: ArrayD<Self>) -> ArrayData {
        ArrayData::Int(arr)
    }

    fn into_value(self) -> Value {
        Value::Int(self)
    }
}

impl ArrayElement for f64 {
    const DTYPE: DType = DType::Double;

    fn view(data: &ArrayData) -> Option<&ArrayD<Self>> {
        match data {
            ArrayData::Double(a) => Some(a),
            _ => None,
        }
    }

    fn wrap(arr: ArrayD<Self>) -> ArrayData {
        ArrayData::Double(arr)
    }

    fn into_value(self) -> Value {
        Value::Double(self)
    }
}

impl ArrayElement for Complex64 {
    const DTYPE: DType = DType::Complex;

    fn view(data: &ArrayData) -> Option<&ArrayD<Self>> {
        match data {
            ArrayData::Complex(a) => Some(a),
            _ => None,
        }
    }

    fn wrap(arr: ArrayD<Self>) -> ArrayData {
        ArrayData::Complex(arr)
    }

    fn into_value(self) -> Value {
        Value::Complex(self)
    }
}

impl ArrayElement for Logical {
    const DTYPE: DType = DType::Bool;

    fn view(data: &ArrayData) -> Option<&ArrayD<Self>> {
        match data {
            ArrayData::Bool(a) => Some(a),
            _ => None,
        }
    }

    fn wrap(arr: ArrayD<Self>) -> ArrayData {
        ArrayData::Bool(arr)
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl ArrayElement for String {
    const DTYPE: DType = DType::Str;

    fn view(data: &ArrayData) -> Option<&ArrayD<Self>> {
        match data {
            ArrayData::Str(a) => Some(a),
            _ => None,
        }
    }

    fn wrap(arr: ArrayD<Self>) -> ArrayData {
        ArrayData::Str(arr)
    }

    fn into_value(self) -> Value {
        Value::Str(self)
    }
}

/// Element `index` of `arr` counted in wire (column-major) order
pub(crate) fn nth_in_wire_order<T: ArrayElement>(arr: &ArrayD<T>, index: usize) -> Option<Value> {
    arr.t().iter().nth(index).cloned().map(T::into_value)
}

impl RArray {
    /// Borrow as an ndarray view of element type `T`
    pub fn as_ndarray<T: ArrayElement>(&self) -> Result<ArrayViewD<'_, T>, ElementError> {
        T::view(&self.data)
            .map(|a| a.view())
            .ok_or(ElementError::DTypeMismatch {
                expected: T::DTYPE,
                actual: self.dtype(),
            })
    }

    /// Copy into an owned ndarray of element type `T`
    pub fn to_ndarray<T: ArrayElement>(&self) -> Result<ArrayD<T>, ElementError> {
        self.as_ndarray().map(|v| v.to_owned())
    }
}
