use crate::utils::{
    DIGEST_LEN, GIT_DIR, GitError, ObjectId, ObjectKind, ObjectStore, Result, decode_object,
};
use std::{fs, path::Path};

pub const FILE_MODE: &str = "100644";
pub const DIR_MODE: &str = "40000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub mode: String,  // "100644" for files, "40000" for directories
    pub name: String,  // e.g., "main.rs" or "src"
    pub id: ObjectId,  // digest of the blob/tree
}

impl TreeEntry {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut entry = Vec::new();
        entry.extend_from_slice(self.mode.as_bytes());
        entry.push(b' ');

        entry.extend_from_slice(self.name.as_bytes());
        entry.push(0); // NULL separator

        // The one place a digest appears as raw bytes instead of hex.
        entry.extend_from_slice(&self.id.as_bytes()[..]);
        entry
    }
}

/// Recursively snapshot a directory into blob and tree objects, returning the
/// root tree's id. Entries are sorted by name so the same set of files always
/// hashes identically regardless of filesystem listing order.
pub fn write_tree(store: &ObjectStore, dir: &Path) -> Result<ObjectId> {
    let mut names: Vec<String> = Vec::new();
    for dir_entry in fs::read_dir(dir)? {
        let name = dir_entry?.file_name().to_string_lossy().into_owned();
        if name == GIT_DIR {
            continue;
        }
        names.push(name);
    }
    names.sort();

    let mut entries: Vec<TreeEntry> = Vec::new();
    for name in names {
        let path = dir.join(&name);
        let metadata = fs::symlink_metadata(&path)?;

        let (mode, id) = if metadata.is_file() {
            let content = fs::read(&path)?;
            (FILE_MODE, store.put_object(ObjectKind::Blob, &content)?)
        } else if metadata.is_dir() {
            (DIR_MODE, write_tree(store, &path)?)
        } else {
            // Symlinks, sockets and devices are not modeled.
            continue;
        };

        entries.push(TreeEntry {
            mode: mode.to_string(),
            name,
            id,
        });
    }

    let mut payload = Vec::new();
    for entry in &entries {
        payload.extend_from_slice(&entry.to_bytes());
    }

    store.put_object(ObjectKind::Tree, &payload)
}

/// Load a tree object and decode its entries in payload order.
pub fn read_tree(store: &ObjectStore, id: &ObjectId) -> Result<Vec<TreeEntry>> {
    let encoded = store.get(id)?;
    let (kind, payload) = decode_object(&encoded)?;
    if kind != ObjectKind::Tree.as_str() {
        return Err(GitError::WrongObjectType {
            expected: ObjectKind::Tree.as_str(),
            found: kind,
        });
    }

    parse_tree_payload(payload)
}

pub fn parse_tree_payload(payload: &[u8]) -> Result<Vec<TreeEntry>> {
    let mut entries = Vec::new();
    let mut index = 0;

    while index < payload.len() {
        let nul = payload[index..]
            .iter()
            .position(|&b| b == 0)
            .ok_or(GitError::TruncatedTree)?
            + index;

        let head = std::str::from_utf8(&payload[index..nul])
            .map_err(|_| GitError::MalformedObject("tree entry is not valid UTF-8".to_string()))?;
        // Split on the first space only: names may contain spaces, modes never do.
        let (mode, name) = head.split_once(' ').ok_or_else(|| {
            GitError::MalformedObject("tree entry missing mode separator".to_string())
        })?;

        let raw_start = nul + 1;
        let raw_end = raw_start + DIGEST_LEN;
        if payload.len() < raw_end {
            return Err(GitError::TruncatedTree);
        }

        entries.push(TreeEntry {
            mode: mode.to_string(),
            name: name.to_string(),
            id: ObjectId::from_raw(&payload[raw_start..raw_end])?,
        });
        index = raw_end;
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(mode: &str, name: &str, seed: &[u8]) -> TreeEntry {
        TreeEntry {
            mode: mode.to_string(),
            name: name.to_string(),
            id: ObjectId::hash(seed),
        }
    }

    #[test]
    fn entry_encodes_mode_name_and_raw_digest() {
        let entry = entry(FILE_MODE, "hello.txt", b"seed");
        let bytes = entry.to_bytes();

        assert!(bytes.starts_with(b"100644 hello.txt\0"));
        assert_eq!(bytes.len(), "100644 hello.txt".len() + 1 + DIGEST_LEN);
        assert_eq!(&bytes[bytes.len() - DIGEST_LEN..], &entry.id.as_bytes()[..]);
    }

    #[test]
    fn parse_inverts_entry_encoding() {
        let first = entry(FILE_MODE, "a.txt", b"a");
        let second = entry(DIR_MODE, "sub", b"b");

        let mut payload = first.to_bytes();
        payload.extend_from_slice(&second.to_bytes());

        let parsed = parse_tree_payload(&payload).unwrap();
        assert_eq!(parsed, vec![first, second]);
    }

    #[test]
    fn parse_keeps_spaces_in_names() {
        let spaced = entry(FILE_MODE, "a file name.txt", b"x");
        let parsed = parse_tree_payload(&spaced.to_bytes()).unwrap();
        assert_eq!(parsed[0].name, spaced.name);
        assert_eq!(parsed[0].mode, FILE_MODE);
    }

    #[test]
    fn parse_rejects_missing_nul() {
        assert!(matches!(
            parse_tree_payload(b"100644 dangling"),
            Err(GitError::TruncatedTree)
        ));
    }

    #[test]
    fn parse_rejects_short_digest() {
        let mut payload = b"100644 a.txt\0".to_vec();
        payload.extend_from_slice(&[0u8; DIGEST_LEN - 1]);
        assert!(matches!(
            parse_tree_payload(&payload),
            Err(GitError::TruncatedTree)
        ));
    }

    #[test]
    fn empty_payload_is_a_valid_empty_tree() {
        assert_eq!(parse_tree_payload(b"").unwrap(), vec![]);
    }
}
