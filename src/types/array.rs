//! Typed array types

use super::element::{ArrayElement, nth_in_wire_order};
use super::{DType, Logical, Value};
use ndarray::{Array1, ArrayD, IxDyn, ShapeBuilder, ShapeError};
use num_complex::Complex64;

/// Homogeneous element storage of a decoded array
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayData {
    Int(ArrayD<i32>),
    Double(ArrayD<f64>),
    Complex(ArrayD<Complex64>),
    Bool(ArrayD<Logical>),
    Str(ArrayD<String>),
}

impl ArrayData {
    pub fn dtype(&self) -> DType {
        match self {
            ArrayData::Int(_) => DType::Int,
            ArrayData::Double(_) => DType::Double,
            ArrayData::Complex(_) => DType::Complex,
            ArrayData::Bool(_) => DType::Bool,
            ArrayData::Str(_) => DType::Str,
        }
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        match self {
            ArrayData::Int(a) => a.len(),
            ArrayData::Double(a) => a.len(),
            ArrayData::Complex(a) => a.len(),
            ArrayData::Bool(a) => a.len(),
            ArrayData::Str(a) => a.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            ArrayData::Int(a) => a.shape(),
            ArrayData::Double(a) => a.shape(),
            ArrayData::Complex(a) => a.shape(),
            ArrayData::Bool(a) => a.shape(),
            ArrayData::Str(a) => a.shape(),
        }
    }

    /// Element `index` in wire order (first axis varies fastest)
    pub fn get(&self, index: usize) -> Option<Value> {
        match self {
            ArrayData::Int(a) => nth_in_wire_order(a, index),
            ArrayData::Double(a) => nth_in_wire_order(a, index),
            ArrayData::Complex(a) => nth_in_wire_order(a, index),
            ArrayData::Bool(a) => nth_in_wire_order(a, index),
            ArrayData::Str(a) => nth_in_wire_order(a, index),
        }
    }

    /// Reshape into `dims` using column-major element order
    pub fn reshape(self, dims: &[usize]) -> Result<Self, ShapeError> {
        Ok(match self {
            ArrayData::Int(a) => ArrayData::Int(reshape_fortran(a, dims)?),
            ArrayData::Double(a) => ArrayData::Double(reshape_fortran(a, dims)?),
            ArrayData::Complex(a) => ArrayData::Complex(reshape_fortran(a, dims)?),
            ArrayData::Bool(a) => ArrayData::Bool(reshape_fortran(a, dims)?),
            ArrayData::Str(a) => ArrayData::Str(reshape_fortran(a, dims)?),
        })
    }

    /// All elements in wire order, as strings; `None` unless this is a string array
    pub fn strings(&self) -> Option<Vec<String>> {
        match self {
            ArrayData::Str(a) => Some(a.t().iter().cloned().collect()),
            _ => None,
        }
    }
}

fn reshape_fortran<T: Clone>(arr: ArrayD<T>, dims: &[usize]) -> Result<ArrayD<T>, ShapeError> {
    // Reversing the axes of a column-major array yields its wire order under standard iteration.
    let flat: Vec<T> = arr.t().iter().cloned().collect();
    ArrayD::from_shape_vec(IxDyn(dims).f(), flat)
}

/// Decoded array with its attribute-derived facets.
///
/// A plain array has no names and no attributes. The `names` facet makes it a
/// named array (lookup by name or position); any other attribute tag lands in
/// the open `attributes` list. Facets compose, and a `dim` reshape is kept in
/// the shape of `data`.
#[derive(Debug, Clone, PartialEq)]
pub struct RArray {
    pub data: ArrayData,
    pub names: Option<Vec<String>>,
    pub attributes: Vec<(String, Value)>,
}

impl RArray {
    pub fn new(data: ArrayData) -> Self {
        Self {
            data,
            names: None,
            attributes: Vec::new(),
        }
    }

    pub fn dtype(&self) -> DType {
        self.data.dtype()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// True if no names and no attributes are attached
    pub fn is_plain(&self) -> bool {
        self.names.is_none() && self.attributes.is_empty()
    }

    /// Element at flat position `index`
    pub fn get(&self, index: usize) -> Option<Value> {
        self.data.get(index)
    }

    /// Element whose name is `name`
    pub fn get_by_name(&self, name: &str) -> Option<Value> {
        let index = self.names.as_ref()?.iter().position(|n| n == name)?;
        self.data.get(index)
    }

    /// Attribute stored under `tag`
    pub fn attr(&self, tag: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, v)| v)
    }

    /// Extract the single element of a one-element array
    ///
    /// Returns the array unchanged if it holds any other number of elements.
    pub fn into_scalar(self) -> Result<Value, Self> {
        if self.len() != 1 {
            return Err(self);
        }
        match self.data.get(0) {
            Some(v) => Ok(v),
            None => Err(self),
        }
    }
}

impl<T: ArrayElement> From<Vec<T>> for RArray {
    fn from(v: Vec<T>) -> Self {
        RArray::new(T::wrap(Array1::from(v).into_dyn()))
    }
}
