//! Byte builders for hand-assembled QAP1 fixtures

#![allow(dead_code)]

pub const INT: u8 = 0x01;
pub const DOUBLE: u8 = 0x02;
pub const STR: u8 = 0x03;
pub const BOOL: u8 = 0x06;
pub const S4: u8 = 0x07;
pub const SEXP: u8 = 0x0A;
pub const NULL: u8 = 0x00;
pub const VECTOR: u8 = 0x10;
pub const CLOSURE: u8 = 0x12;
pub const SYMNAME: u8 = 0x13;
pub const LIST_NOTAG: u8 = 0x14;
pub const LIST_TAG: u8 = 0x15;
pub const LANG_NOTAG: u8 = 0x16;
pub const LANG_TAG: u8 = 0x17;
pub const VECTOR_EXP: u8 = 0x1A;
pub const ARRAY_INT: u8 = 0x20;
pub const ARRAY_DOUBLE: u8 = 0x21;
pub const ARRAY_STR: u8 = 0x22;
pub const ARRAY_BOOL: u8 = 0x24;
pub const RAW: u8 = 0x25;
pub const ARRAY_CPLX: u8 = 0x26;
pub const UNKNOWN: u8 = 0x30;

/// Record with a 4-byte header
pub fn record(code: u8, payload: &[u8]) -> Vec<u8> {
    let mut bytes = vec![code];
    bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes()[..3]);
    bytes.extend_from_slice(payload);
    bytes
}

/// Record with an 8-byte header
pub fn large_record(code: u8, payload: &[u8]) -> Vec<u8> {
    let mut bytes = vec![code | 0x40];
    bytes.extend_from_slice(&(payload.len() as u64).to_le_bytes()[..7]);
    bytes.extend_from_slice(payload);
    bytes
}

/// Record whose attribute record precedes the payload
pub fn record_with_attr(code: u8, attr: &[u8], payload: &[u8]) -> Vec<u8> {
    let mut body = attr.to_vec();
    body.extend_from_slice(payload);
    let mut bytes = record(code, &body);
    bytes[0] |= 0x80;
    bytes
}

pub fn ints(values: &[i32]) -> Vec<u8> {
    record(ARRAY_INT, &values.iter().flat_map(|v| v.to_le_bytes()).collect::<Vec<_>>())
}

pub fn doubles(values: &[f64]) -> Vec<u8> {
    record(ARRAY_DOUBLE, &values.iter().flat_map(|v| v.to_le_bytes()).collect::<Vec<_>>())
}

/// String array payload: NUL-terminated strings padded with 0x01 to a multiple of 4
pub fn strings_payload(values: &[&str]) -> Vec<u8> {
    let mut payload = Vec::new();
    for s in values {
        payload.extend_from_slice(s.as_bytes());
        payload.push(0);
    }
    while payload.len() % 4 != 0 {
        payload.push(0x01);
    }
    payload
}

pub fn strings(values: &[&str]) -> Vec<u8> {
    record(ARRAY_STR, &strings_payload(values))
}

/// Boolean array: count prefix, one byte per element, 0xFF padding
pub fn bools(values: &[u8]) -> Vec<u8> {
    let mut payload = (values.len() as u32).to_le_bytes().to_vec();
    payload.extend_from_slice(values);
    while payload.len() % 4 != 0 {
        payload.push(0xFF);
    }
    record(ARRAY_BOOL, &payload)
}

/// Symbol name padded with NULs to a multiple of 4
pub fn symbol(name: &str) -> Vec<u8> {
    let mut payload = name.as_bytes().to_vec();
    payload.push(0);
    while payload.len() % 4 != 0 {
        payload.push(0);
    }
    record(SYMNAME, &payload)
}

/// Tagged pair list from (tag, encoded value) entries, value first on the wire
pub fn tagged(entries: &[(&str, Vec<u8>)]) -> Vec<u8> {
    let mut payload = Vec::new();
    for (tag, value) in entries {
        payload.extend_from_slice(value);
        payload.extend(symbol(tag));
    }
    record(LIST_TAG, &payload)
}

/// Concatenate encoded records
pub fn concat(records: &[Vec<u8>]) -> Vec<u8> {
    records.concat()
}

pub fn envelope_ok(size: u32) -> Vec<u8> {
    let mut bytes = vec![0x01, 0x00, 0x01, 0x00];
    bytes.extend_from_slice(&size.to_le_bytes());
    bytes.extend_from_slice(&[0; 8]);
    bytes
}

pub fn envelope_err(error_code: u8) -> Vec<u8> {
    let mut bytes = vec![0x02, 0x00, 0x01, error_code];
    bytes.extend_from_slice(&[0; 12]);
    bytes
}

/// Complete OK response wrapping `body` in the outer expression record
pub fn message(body: &[u8]) -> Vec<u8> {
    let sexp = record(SEXP, body);
    let mut bytes = envelope_ok(sexp.len() as u32);
    bytes.extend(sexp);
    bytes
}
