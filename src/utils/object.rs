use crate::utils::{GitError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Blob,
    Tree,
    Commit,
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Blob => "blob",
            ObjectKind::Tree => "tree",
            ObjectKind::Commit => "commit",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prepend the "<type> <len>\0" header. Digests are always computed over
/// this full buffer, never the payload alone.
pub fn encode_object(kind: ObjectKind, payload: &[u8]) -> Vec<u8> {
    let header = format!("{} {}\0", kind, payload.len());
    let mut data = header.into_bytes();
    data.extend_from_slice(payload);
    data
}

/// Split encoded bytes back into (type, payload). The type string is not
/// checked against the known kinds; callers interpret the payload.
pub fn decode_object(data: &[u8]) -> Result<(String, &[u8])> {
    let nul = data
        .iter()
        .position(|&b| b == 0)
        .ok_or_else(|| GitError::MalformedObject("missing NUL separator".to_string()))?;

    let header = std::str::from_utf8(&data[..nul])
        .map_err(|_| GitError::MalformedObject("header is not valid UTF-8".to_string()))?;
    let (kind, len_str) = header
        .split_once(' ')
        .ok_or_else(|| GitError::MalformedObject("header missing space separator".to_string()))?;
    let declared: usize = len_str.parse().map_err(|_| {
        GitError::MalformedObject(format!("invalid declared length '{}'", len_str))
    })?;

    let payload = &data[nul + 1..];
    if declared != payload.len() {
        return Err(GitError::MalformedObject(format!(
            "declared length {} does not match payload length {}",
            declared,
            payload.len()
        )));
    }

    Ok((kind.to_string(), payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn encode_prepends_typed_header() {
        assert_eq!(encode_object(ObjectKind::Blob, b"world"), b"blob 5\0world");
        assert_eq!(encode_object(ObjectKind::Tree, b""), b"tree 0\0");
    }

    #[test]
    fn decode_inverts_encode() {
        for kind in [ObjectKind::Blob, ObjectKind::Tree, ObjectKind::Commit] {
            let payload: &[u8] = b"payload with\0embedded NUL";
            let encoded = encode_object(kind, payload);
            let (decoded_kind, decoded_payload) = decode_object(&encoded).unwrap();
            assert_eq!(decoded_kind, kind.as_str());
            assert_eq!(decoded_payload, payload);
        }
    }

    #[test]
    fn decode_rejects_missing_nul() {
        assert!(matches!(
            decode_object(b"blob 5 world"),
            Err(GitError::MalformedObject(_))
        ));
    }

    #[test]
    fn decode_rejects_length_mismatch() {
        assert!(matches!(
            decode_object(b"blob 99\0world"),
            Err(GitError::MalformedObject(_))
        ));
    }

    #[test]
    fn decode_rejects_garbage_length() {
        assert!(matches!(
            decode_object(b"blob five\0world"),
            Err(GitError::MalformedObject(_))
        ));
    }

    #[test]
    fn decode_keeps_unknown_types() {
        let (kind, payload) = decode_object(b"tag 3\0abc").unwrap();
        assert_eq!(kind, "tag");
        assert_eq!(payload, b"abc");
    }
}
