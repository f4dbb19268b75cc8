use crate::utils::{GitError, ObjectId, ObjectKind, Result, encode_object};
use flate2::{Compression, bufread::ZlibDecoder, write::ZlibEncoder};
use std::{
    fs,
    io::{Cursor, Read, Write},
    path::{Path, PathBuf},
};

/// Name of the repository metadata directory at the working tree root.
pub const GIT_DIR: &str = ".git";

/// Handle over one repository's object database. Construct one per store so
/// tests can point at temporary directories instead of a process-wide root.
#[derive(Debug, Clone)]
pub struct ObjectStore {
    objects_dir: PathBuf,
}

impl ObjectStore {
    pub fn open(git_dir: &Path) -> ObjectStore {
        ObjectStore {
            objects_dir: git_dir.join("objects"),
        }
    }

    fn object_path(&self, id: &ObjectId) -> PathBuf {
        let hex = id.to_hex();
        let (dir_name, file_name) = hex.split_at(2);
        self.objects_dir.join(dir_name).join(file_name)
    }

    pub fn contains(&self, id: &ObjectId) -> bool {
        self.object_path(id).exists()
    }

    pub fn put(&self, id: &ObjectId, encoded: &[u8]) -> Result<()> {
        let object_path = self.object_path(id);

        // Identical content is written at most once.
        if object_path.exists() {
            return Ok(());
        }

        if let Some(object_dir) = object_path.parent() {
            fs::create_dir_all(object_dir)?;
        }

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(encoded)?;
        let compressed = encoder.finish()?;

        fs::write(object_path, compressed)?;
        Ok(())
    }

    pub fn get(&self, id: &ObjectId) -> Result<Vec<u8>> {
        let object_path = self.object_path(id);
        if !object_path.exists() {
            return Err(GitError::ObjectNotFound(id.to_hex()));
        }

        let compressed = fs::read(object_path)?;
        let mut decoder = ZlibDecoder::new(Cursor::new(compressed));
        let mut decompressed = Vec::new();
        decoder.read_to_end(&mut decompressed)?;
        Ok(decompressed)
    }

    /// Encode, hash and persist in one step, returning the new object's id.
    pub fn put_object(&self, kind: ObjectKind, payload: &[u8]) -> Result<ObjectId> {
        let encoded = encode_object(kind, payload);
        let id = ObjectId::hash(&encoded);
        self.put(&id, &encoded)?;
        Ok(id)
    }
}
