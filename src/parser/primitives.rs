//! Little-endian primitive decoders

use num_complex::Complex64;

/// Decode a 3-byte little-endian unsigned integer
pub fn u24_le(bytes: [u8; 3]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0])
}

/// Decode a 7-byte little-endian unsigned integer
pub fn u56_le(bytes: [u8; 7]) -> u64 {
    let mut wide = [0u8; 8];
    wide[..7].copy_from_slice(&bytes);
    u64::from_le_bytes(wide)
}

/// Decode a complex number stored as two consecutive f64 (real, imaginary)
pub fn complex_le(bytes: [u8; 16]) -> Complex64 {
    let mut re = [0u8; 8];
    let mut im = [0u8; 8];
    re.copy_from_slice(&bytes[..8]);
    im.copy_from_slice(&bytes[8..]);
    Complex64::new(f64::from_le_bytes(re), f64::from_le_bytes(im))
}

/// Reinterpret `bytes` as a packed array of `N`-byte elements
///
/// Returns `None` if the length is not a multiple of `N`.
pub fn unpack<T, const N: usize>(bytes: &[u8], decode: fn([u8; N]) -> T) -> Option<Vec<T>> {
    if bytes.len() % N != 0 {
        return None;
    }
    let values = bytes
        .chunks_exact(N)
        .map(|chunk| {
            let mut arr = [0u8; N];
            arr.copy_from_slice(chunk);
            decode(arr)
        })
        .collect();
    Some(values)
}

/// Decode the leading `N` bytes of `bytes`, if there are at least that many
pub fn leading<T, const N: usize>(bytes: &[u8], decode: fn([u8; N]) -> T) -> Option<T> {
    let head = bytes.get(..N)?;
    let mut arr = [0u8; N];
    arr.copy_from_slice(head);
    Some(decode(arr))
}

/// Decode `bytes` as a single `N`-byte value; `None` unless exactly `N` bytes
pub fn exact<T, const N: usize>(bytes: &[u8], decode: fn([u8; N]) -> T) -> Option<T> {
    if bytes.len() != N {
        return None;
    }
    leading(bytes, decode)
}
