use crate::utils::{GitError, Result};
use sha1::{Digest, Sha1};
use std::fmt;

pub const DIGEST_LEN: usize = 20;
pub const HEX_LEN: usize = 40;

/// SHA-1 digest naming an object in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId([u8; DIGEST_LEN]);

impl ObjectId {
    pub fn hash(bytes: &[u8]) -> ObjectId {
        let mut hasher = Sha1::new();
        hasher.update(bytes);
        let digest = hasher.finalize();

        let mut id = [0u8; DIGEST_LEN];
        id.copy_from_slice(&digest[..]);
        ObjectId(id)
    }

    pub fn from_hex(hex_str: &str) -> Result<ObjectId> {
        if hex_str.len() != HEX_LEN {
            return Err(GitError::MalformedDigest(hex_str.to_string()));
        }

        let raw =
            hex::decode(hex_str).map_err(|_| GitError::MalformedDigest(hex_str.to_string()))?;
        ObjectId::from_raw(&raw)
    }

    pub fn from_raw(bytes: &[u8]) -> Result<ObjectId> {
        if bytes.len() != DIGEST_LEN {
            return Err(GitError::MalformedDigest(hex::encode(bytes)));
        }

        let mut id = [0u8; DIGEST_LEN];
        id.copy_from_slice(bytes);
        Ok(ObjectId(id))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hash_matches_git_blob_digest() {
        let id = ObjectId::hash(b"blob 5\0world");
        assert_eq!(id.to_hex(), "04fea06420ca60892f73becee3614f6d023a4b7f");
    }

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(ObjectId::hash(b"tree 0\0"), ObjectId::hash(b"tree 0\0"));
    }

    #[test]
    fn hex_round_trip() {
        let id = ObjectId::hash(b"some bytes");
        let parsed = ObjectId::from_hex(&id.to_hex()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(matches!(
            ObjectId::from_hex("abc123"),
            Err(GitError::MalformedDigest(_))
        ));
    }

    #[test]
    fn from_hex_rejects_non_hex_characters() {
        let bad = "zz".repeat(20);
        assert!(matches!(
            ObjectId::from_hex(&bad),
            Err(GitError::MalformedDigest(_))
        ));
    }

    #[test]
    fn from_raw_rejects_short_input() {
        assert!(matches!(
            ObjectId::from_raw(&[0u8; 19]),
            Err(GitError::MalformedDigest(_))
        ));
    }
}
