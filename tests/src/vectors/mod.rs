//! NIST CAVP `.rsp` parser for GCM known-answer files
//!
//! A file is a sequence of groups. Each group opens with bracketed headers
//! (`[Keylen = 128]`, `[IVlen = 96]`, ...) followed by vectors introduced
//! by `Count = n`. Decrypt files mark vectors that must be rejected with a
//! bare `FAIL` line in place of `PT`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, VectorError};

/// One known-answer vector
#[derive(Debug, Clone, Default)]
pub struct GcmTestVector {
    pub count: usize,
    pub key: Vec<u8>,
    pub iv: Vec<u8>,
    /// Absent in decrypt vectors marked `FAIL`
    pub pt: Option<Vec<u8>>,
    pub ct: Vec<u8>,
    pub aad: Vec<u8>,
    pub tag: Vec<u8>,
    pub fail_expected: bool,
}

/// Vectors sharing one set of bracketed headers; lengths are in bits
#[derive(Debug, Clone, Default)]
pub struct GcmTestGroup {
    pub key_len: usize,
    pub iv_len: usize,
    pub pt_len: usize,
    pub aad_len: usize,
    pub tag_len: usize,
    pub vectors: Vec<GcmTestVector>,
}

/// Directory holding the `.rsp` files
pub fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
        .join("gcm")
}

/// Load and parse `name` from [`vectors_dir`]
pub fn load_gcm_file(name: &str) -> Result<Vec<GcmTestGroup>> {
    let path = vectors_dir().join(name);
    let text = fs::read_to_string(&path).map_err(|source| VectorError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_gcm_rsp(&text)
}

fn split_assignment(s: &str) -> Option<(&str, &str)> {
    let (name, value) = s.split_once('=')?;
    Some((name.trim(), value.trim()))
}

fn decode(field: &'static str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|source| VectorError::Hex { field, source })
}

fn number(line: usize, value: &str) -> Result<usize> {
    value.parse().map_err(|_| VectorError::Malformed {
        line,
        reason: "expected a decimal number",
    })
}

/// Parse the text of a GCM `.rsp` file
pub fn parse_gcm_rsp(text: &str) -> Result<Vec<GcmTestGroup>> {
    let mut groups: Vec<GcmTestGroup> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let malformed = |reason| VectorError::Malformed {
            line: line_no,
            reason,
        };

        if let Some(inner) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let (name, value) = split_assignment(inner).ok_or_else(|| malformed("header without '='"))?;
            let value = number(line_no, value)?;

            // [Keylen] opens a new group
            if name == "Keylen" {
                groups.push(GcmTestGroup {
                    key_len: value,
                    ..Default::default()
                });
                continue;
            }

            let group = groups
                .last_mut()
                .ok_or_else(|| malformed("header before [Keylen]"))?;
            match name {
                "IVlen" => group.iv_len = value,
                "PTlen" => group.pt_len = value,
                "AADlen" => group.aad_len = value,
                "Taglen" => group.tag_len = value,
                _ => {}
            }
            continue;
        }

        let group = groups
            .last_mut()
            .ok_or_else(|| malformed("vector before any group header"))?;

        if line == "FAIL" {
            let vector = group
                .vectors
                .last_mut()
                .ok_or_else(|| malformed("FAIL before Count"))?;
            vector.fail_expected = true;
            continue;
        }

        let (name, value) = split_assignment(line).ok_or_else(|| malformed("expected 'Name = value'"))?;

        if name == "Count" {
            group.vectors.push(GcmTestVector {
                count: number(line_no, value)?,
                ..Default::default()
            });
            continue;
        }

        let vector = group
            .vectors
            .last_mut()
            .ok_or_else(|| malformed("field before Count"))?;
        match name {
            "Key" => vector.key = decode("Key", value)?,
            "IV" => vector.iv = decode("IV", value)?,
            "PT" => vector.pt = Some(decode("PT", value)?),
            "CT" => vector.ct = decode("CT", value)?,
            "AAD" => vector.aad = decode("AAD", value)?,
            "Tag" => vector.tag = decode("Tag", value)?,
            _ => {}
        }
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# comment
[Keylen = 128]
[IVlen = 96]
[PTlen = 8]
[AADlen = 0]
[Taglen = 128]

Count = 0
Key = 00112233445566778899aabbccddeeff
IV = 000102030405060708090a0b
CT = 9b
AAD = 
Tag = eb3f004721eec1cf071fbf444bdf4609
PT = 00

Count = 1
Key = 00112233445566778899aabbccddeeff
IV = 000102030405060708090a0b
CT = 9c
AAD = 
Tag = eb3f004721eec1cf071fbf444bdf4609
FAIL
";

    #[test]
    fn test_parse_sample() {
        let groups = parse_gcm_rsp(SAMPLE).unwrap();
        assert_eq!(groups.len(), 1);

        let group = &groups[0];
        assert_eq!(
            (group.key_len, group.iv_len, group.pt_len, group.aad_len, group.tag_len),
            (128, 96, 8, 0, 128)
        );
        assert_eq!(group.vectors.len(), 2);

        let ok = &group.vectors[0];
        assert_eq!(ok.count, 0);
        assert_eq!(ok.key.len(), 16);
        assert_eq!(ok.iv.len(), 12);
        assert_eq!(ok.pt, Some(vec![0u8]));
        assert!(ok.aad.is_empty());
        assert!(!ok.fail_expected);

        let bad = &group.vectors[1];
        assert_eq!(bad.count, 1);
        assert!(bad.pt.is_none());
        assert!(bad.fail_expected);
    }

    #[test]
    fn test_bad_hex_is_reported() {
        let text = "[Keylen = 128]\nCount = 0\nKey = xyz\n";
        assert!(matches!(
            parse_gcm_rsp(text),
            Err(VectorError::Hex { field: "Key", .. })
        ));
    }

    #[test]
    fn test_vector_without_group_is_rejected() {
        assert!(matches!(
            parse_gcm_rsp("Count = 0\n"),
            Err(VectorError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn test_bundled_files_parse() {
        for name in ["gcmEncryptExtIV128.rsp", "gcmDecrypt128.rsp"] {
            let groups = load_gcm_file(name).unwrap();
            assert!(!groups.is_empty(), "{name} has no groups");
            for group in &groups {
                assert_eq!(group.key_len, 128);
                assert_eq!(group.iv_len, 96);
                assert_eq!(group.tag_len, 128);
            }
        }
    }
}
