//! PKCS#7 padding to the AES block size

use aes128gcm::params::AES_BLOCK_SIZE;

use super::error::{CliError, Result};

/// Append PKCS#7 padding; an aligned input gains a full block
pub fn pkcs7_pad(data: &[u8]) -> Vec<u8> {
    let pad = AES_BLOCK_SIZE - data.len() % AES_BLOCK_SIZE;
    let mut out = Vec::with_capacity(data.len() + pad);
    out.extend_from_slice(data);
    out.resize(data.len() + pad, pad as u8);
    out
}

/// Strip and check PKCS#7 padding
pub fn pkcs7_unpad(data: &[u8]) -> Result<&[u8]> {
    let pad = *data.last().ok_or(CliError::Padding)? as usize;
    if pad == 0 || pad > AES_BLOCK_SIZE || pad > data.len() {
        return Err(CliError::Padding);
    }

    let (body, padding) = data.split_at(data.len() - pad);
    if padding.iter().any(|&b| b as usize != pad) {
        return Err(CliError::Padding);
    }
    Ok(body)
}
