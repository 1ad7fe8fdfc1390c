//! Integration tests for ndarray access to decoded arrays

mod common;

use common::*;
use ndarray::{ArrayD, IxDyn, array};
use num_complex::Complex64;
use rexp::{ElementError, Logical, ParserConfig, parse, parse_with};

fn with_dim(code: u8, dims: &[i32], encoded: Vec<u8>) -> Vec<u8> {
    let attr = tagged(&[("dim", ints(dims))]);
    message(&record_with_attr(code, &attr, &encoded[4..]))
}

// =============================================================================
// Shaped arrays
// =============================================================================

#[test]
fn matrix_is_column_major() {
    // matrix(1:6, nrow = 2)
    let bytes = with_dim(ARRAY_DOUBLE, &[2, 3], doubles(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]));
    let value = parse(&bytes).unwrap();
    let matrix: ArrayD<f64> = value.as_array().unwrap().to_ndarray().unwrap();
    assert_eq!(matrix, array![[1.0, 3.0, 5.0], [2.0, 4.0, 6.0]].into_dyn());
}

#[test]
fn three_dimensional_array() {
    let flat: Vec<i32> = (0..24).collect();
    let value = parse(&with_dim(ARRAY_INT, &[2, 3, 4], ints(&flat))).unwrap();
    let arr = value.as_array().unwrap();
    let expected = ArrayD::<i32>::from_shape_fn(IxDyn(&[2, 3, 4]), |idx| {
        (idx[0] + idx[1] * 2 + idx[2] * 6) as i32
    });
    assert_eq!(arr.to_ndarray::<i32>().unwrap(), expected);
}

#[test]
fn view_borrows_without_copy() {
    let value = parse(&message(&doubles(&[0.5, 1.5, 2.5]))).unwrap();
    let arr = value.as_array().unwrap();
    let view = arr.as_ndarray::<f64>().unwrap();
    assert_eq!(view.sum(), 4.5);
}

// =============================================================================
// Element types
// =============================================================================

#[test]
fn logical_and_string_arrays() {
    let value = parse(&message(&bools(&[1, 0, 2]))).unwrap();
    let logicals = value.as_array().unwrap().to_ndarray::<Logical>().unwrap();
    assert_eq!(
        logicals.iter().copied().collect::<Vec<_>>(),
        vec![Logical::True, Logical::False, Logical::NA]
    );

    let value = parse(&message(&strings(&["a", "b"]))).unwrap();
    let strs = value.as_array().unwrap().to_ndarray::<String>().unwrap();
    assert_eq!(strs[[1]], "b");
}

#[test]
fn complex_array() {
    let payload: Vec<u8> = [1.0f64, 0.0, 0.0, 1.0]
        .iter()
        .flat_map(|v| v.to_le_bytes())
        .collect();
    let value = parse(&message(&record(ARRAY_CPLX, &payload))).unwrap();
    let arr = value.as_array().unwrap().to_ndarray::<Complex64>().unwrap();
    assert_eq!(arr[[1]], Complex64::i());
}

#[test]
fn dtype_mismatch() {
    let value = parse_with(&message(&ints(&[1])), ParserConfig::new().atomic_array(true)).unwrap();
    let err = value.as_array().unwrap().to_ndarray::<f64>().unwrap_err();
    assert!(matches!(err, ElementError::DTypeMismatch { .. }));
}
