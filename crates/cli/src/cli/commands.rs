//! # Command implementations

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use aes128gcm::params::{GCM_NONCE_SIZE, GCM_TAG_SIZE};

use super::app::CipherOptions;
use super::error::{CliError, Result};
use super::keys::{decode_hex, decode_hex_array, load_key};
use super::padding::{pkcs7_pad, pkcs7_unpad};

/// Ciphertext hex, a blank line, then the tag hex
fn format_sealed(ciphertext: &[u8], tag: &[u8; GCM_TAG_SIZE]) -> String {
    format!("{}\n\n{}\n", hex::encode(ciphertext), hex::encode(tag))
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| CliError::io(path, e))
}

fn write_output(output: Option<&Path>, data: &[u8]) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, data).map_err(|e| CliError::io(path, e))?;
            log::info!("Wrote {} bytes to {}", data.len(), path.display());
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(data)
                .and_then(|_| stdout.flush())
                .map_err(CliError::Stdout)
        }
    }
}

/// Encrypt `plaintext` under the options and return the printable result
pub fn encrypt_bytes(plaintext: &[u8], opts: &CipherOptions) -> Result<String> {
    let key = load_key(opts.key_file.as_deref())?;
    let iv: [u8; GCM_NONCE_SIZE] = decode_hex_array("iv", &opts.iv)?;
    let aad = decode_hex("aad", &opts.aad)?;

    let plaintext = if opts.pkcs7 {
        let padded = pkcs7_pad(plaintext);
        log::debug!(
            "PKCS#7 padded {} bytes to {}",
            plaintext.len(),
            padded.len()
        );
        padded
    } else {
        plaintext.to_vec()
    };

    log::debug!(
        "Encrypting {} bytes with {} bytes of associated data",
        plaintext.len(),
        aad.len()
    );
    let (ciphertext, tag) = aes128gcm::encrypt(&plaintext, &key, &iv, &aad)?;
    Ok(format_sealed(&ciphertext, &tag))
}

/// Verify and decrypt hex `ciphertext` under the options
pub fn decrypt_text(ciphertext: &str, tag: &str, opts: &CipherOptions) -> Result<Vec<u8>> {
    let key = load_key(opts.key_file.as_deref())?;
    let iv: [u8; GCM_NONCE_SIZE] = decode_hex_array("iv", &opts.iv)?;
    let aad = decode_hex("aad", &opts.aad)?;
    let tag: [u8; GCM_TAG_SIZE] = decode_hex_array("tag", tag)?;
    let ciphertext = decode_hex("ciphertext", ciphertext)?;

    log::debug!(
        "Decrypting {} bytes with {} bytes of associated data",
        ciphertext.len(),
        aad.len()
    );
    let plaintext = aes128gcm::decrypt(&ciphertext, &key, &iv, &aad, &tag)?;

    if opts.pkcs7 {
        let unpadded = pkcs7_unpad(&plaintext)?;
        log::debug!("Stripped {} bytes of PKCS#7 padding", plaintext.len() - unpadded.len());
        Ok(unpadded.to_vec())
    } else {
        Ok(plaintext)
    }
}

/// `encrypt` subcommand
pub fn cmd_encrypt(input: &Path, opts: &CipherOptions) -> Result<()> {
    let plaintext = read_input(input)?;
    log::info!("Read {} bytes from {}", plaintext.len(), input.display());

    let sealed = encrypt_bytes(&plaintext, opts)?;
    write_output(opts.output.as_deref(), sealed.as_bytes())
}

/// Split `encrypt` output into the ciphertext section and, if present, the tag
///
/// Text without a blank line is all ciphertext.
pub fn split_sealed(text: &str) -> (&str, Option<&str>) {
    match text.split_once("\n\n") {
        Some((ciphertext, tag)) if !tag.trim().is_empty() => (ciphertext, Some(tag.trim())),
        Some((ciphertext, _)) => (ciphertext, None),
        None => (text, None),
    }
}

/// `decrypt` subcommand
///
/// `tag` overrides a tag embedded in the input file.
pub fn cmd_decrypt(input: &Path, tag: Option<&str>, opts: &CipherOptions) -> Result<()> {
    let raw = read_input(input)?;
    let text = String::from_utf8_lossy(&raw).replace("\r\n", "\n");
    log::info!("Read {} bytes from {}", raw.len(), input.display());

    let (ciphertext, embedded) = split_sealed(&text);
    let tag = match (tag, embedded) {
        (Some(given), _) => given,
        (None, Some(embedded)) => {
            log::debug!("Using the tag stored in {}", input.display());
            embedded
        }
        (None, None) => return Err(CliError::MissingTag),
    };

    let plaintext = decrypt_text(ciphertext, tag, opts)?;
    write_output(opts.output.as_deref(), &plaintext)
}
