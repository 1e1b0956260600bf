//! Big-endian helpers for the counter field and GHASH length block
//!
//! GCM fixes network byte order for every multi-byte integer it serializes, so
//! only the big-endian direction is provided.

/// Read a u32 from the first four bytes of `bytes`
///
/// # Panics
/// Panics if `bytes` is shorter than four bytes.
pub fn u32_from_be_bytes(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Serialize a u32 as four big-endian bytes
pub fn u32_to_be_bytes(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Serialize a u64 as eight big-endian bytes
pub fn u64_to_be_bytes(value: u64) -> [u8; 8] {
    value.to_be_bytes()
}
