//! # String Utilities

/// Build a `String` from bytes, dropping invalid UTF-8 sequences.
///
/// Unlike [`String::from_utf8_lossy`], no replacement characters are
/// inserted; invalid sequences are removed.
pub fn string_from_utf8_dropping_invalid(v: Vec<u8>) -> String {
    match String::from_utf8(v) {
        Ok(s) => s,
        Err(err) => {
            let bytes = err.into_bytes();
            let mut s = String::with_capacity(bytes.len());
            for chunk in bytes.utf8_chunks() {
                s.push_str(chunk.valid());
            }
            s
        }
    }
}
