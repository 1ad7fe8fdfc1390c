//! Null-terminated string helpers

/// Filler byte used to pad string arrays to a multiple of four
const FILLER: u8 = 0x01;

/// Split a packed string-array payload into its strings.
///
/// Strings are NUL-terminated and packed back to back. Whatever follows the
/// last terminator is dropped when it is empty or consists only of filler.
pub fn split_strings(bytes: &[u8]) -> Vec<String> {
    if bytes.is_empty() {
        return Vec::new();
    }
    let mut segments: Vec<&[u8]> = bytes.split(|b| *b == 0).collect();
    if let Some(last) = segments.last() {
        if last.iter().all(|b| *b == FILLER) {
            segments.pop();
        }
    }
    segments
        .into_iter()
        .map(|s| String::from_utf8_lossy(s).into_owned())
        .collect()
}

/// Decode a NUL-padded string, keeping bytes up to the first NUL
pub fn symbol(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}
