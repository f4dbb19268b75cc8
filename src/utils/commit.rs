use crate::utils::{GitError, ObjectId, ObjectKind, ObjectStore, Result};

#[derive(Debug, Clone)]
pub struct CommitEntry {
    pub tree: ObjectId,
    pub parent: Option<ObjectId>, // absent for the first commit
    pub author: String,           // "Name <email>", used for committer too
    pub timestamp: i64,           // UNIX seconds
    pub timezone: String,         // e.g., "+0000"
    pub message: String,
}

impl CommitEntry {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut content = Vec::new();

        content.extend_from_slice(b"tree ");
        content.extend_from_slice(self.tree.to_hex().as_bytes());
        content.push(b'\n');

        if let Some(parent) = &self.parent {
            content.extend_from_slice(b"parent ");
            content.extend_from_slice(parent.to_hex().as_bytes());
            content.push(b'\n');
        }

        for role in [&b"author "[..], &b"committer "[..]] {
            content.extend_from_slice(role);
            content.extend_from_slice(self.author.as_bytes());
            content.push(b' ');
            content.extend_from_slice(self.timestamp.to_string().as_bytes());
            content.push(b' ');
            content.extend_from_slice(self.timezone.as_bytes());
            content.push(b'\n');
        }

        content.push(b'\n'); // Blank line before message
        content.extend_from_slice(self.message.as_bytes());
        content.push(b'\n');

        content
    }
}

/// Store a commit object for the given entry, verifying first that the tree
/// and any parent it references actually exist.
pub fn commit_tree(store: &ObjectStore, entry: &CommitEntry) -> Result<ObjectId> {
    if !store.contains(&entry.tree) {
        return Err(GitError::DanglingReference(entry.tree.to_hex()));
    }
    if let Some(parent) = &entry.parent {
        if !store.contains(parent) {
            return Err(GitError::DanglingReference(parent.to_hex()));
        }
    }

    store.put_object(ObjectKind::Commit, &entry.to_bytes())
}
