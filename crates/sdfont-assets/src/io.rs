//! Byte readers used to resolve assets referenced by relative path.
//!
//! Font loads are small one-shot reads, so readers are synchronous.

use std::path::{Path, PathBuf};

use sdfont_core::alloc::HashMap;

use crate::error::{AssetError, AssetResult};

/// Trait for loading bytes from various sources.
pub trait BytesReader {
    /// Read all bytes from a path.
    fn read_bytes(&self, path: &Path) -> AssetResult<Vec<u8>>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

impl<R: BytesReader + ?Sized> BytesReader for &R {
    fn read_bytes(&self, path: &Path) -> AssetResult<Vec<u8>> {
        (**self).read_bytes(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

/// Reads files relative to a base directory.
#[derive(Debug, Clone)]
pub struct FileReader {
    base_path: PathBuf,
}

impl FileReader {
    /// Create a new file reader with a base path.
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve a path relative to the base path.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }
}

impl BytesReader for FileReader {
    fn read_bytes(&self, path: &Path) -> AssetResult<Vec<u8>> {
        let full_path = self.resolve_path(path);
        let bytes = std::fs::read(&full_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AssetError::NotFound {
                    path: full_path.display().to_string(),
                }
            } else {
                AssetError::IoError {
                    path: full_path.clone(),
                    source: e,
                }
            }
        })?;

        tracing::trace!("Read {} bytes from '{}'", bytes.len(), full_path.display());
        Ok(bytes)
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve_path(path).exists()
    }
}

/// In-memory bytes reader for testing or embedded assets.
#[derive(Debug, Default, Clone)]
pub struct MemoryReader {
    /// Stored bytes keyed by path string.
    files: HashMap<String, Vec<u8>>,
}

impl MemoryReader {
    /// Create a new empty memory reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add bytes for a path.
    pub fn insert(&mut self, path: impl AsRef<str>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(path.as_ref().to_string(), bytes.into());
    }

    /// Builder-style [`MemoryReader::insert`].
    pub fn with(mut self, path: impl AsRef<str>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(path, bytes);
        self
    }

    fn key(path: &Path) -> String {
        // Keys always use forward slashes regardless of platform
        path.to_string_lossy().replace('\\', "/")
    }
}

impl BytesReader for MemoryReader {
    fn read_bytes(&self, path: &Path) -> AssetResult<Vec<u8>> {
        let key = Self::key(path);
        match self.files.get(&key) {
            Some(bytes) => {
                tracing::trace!("Read {} bytes from memory://{}", bytes.len(), key);
                Ok(bytes.clone())
            }
            None => {
                tracing::debug!("No bytes stored under memory://{}", key);
                Err(AssetError::NotFound { path: key })
            }
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(&Self::key(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_reader_roundtrip() {
        let reader = MemoryReader::new().with("fonts/page0.png", b"png".to_vec());
        assert!(reader.exists(Path::new("fonts/page0.png")));
        assert_eq!(
            reader.read_bytes(Path::new("fonts/page0.png")).unwrap(),
            b"png"
        );
    }

    #[test]
    fn test_memory_reader_missing() {
        let reader = MemoryReader::new();
        let err = reader.read_bytes(Path::new("nope.png")).unwrap_err();
        assert!(matches!(err, AssetError::NotFound { path } if path == "nope.png"));
    }

    #[test]
    fn test_file_reader_relative_to_base() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("page0.png"), [1u8, 2, 3]).unwrap();

        let reader = FileReader::new(dir.path());
        assert!(reader.exists(Path::new("page0.png")));
        assert_eq!(reader.read_bytes(Path::new("page0.png")).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_file_reader_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let reader = FileReader::new(dir.path());
        let err = reader.read_bytes(Path::new("missing.png")).unwrap_err();
        assert!(matches!(err, AssetError::NotFound { .. }));
    }

    #[test]
    fn test_memory_reader_normalizes_backslashes() {
        let reader = MemoryReader::new().with("fonts/page0.png", vec![7u8]);
        assert!(reader.exists(Path::new("fonts\\page0.png")));
        assert_eq!(reader.read_bytes(Path::new("fonts\\page0.png")).unwrap(), vec![7]);
    }

    #[test]
    fn test_reader_by_reference() {
        fn read_via<R: BytesReader>(reader: R) -> Vec<u8> {
            reader.read_bytes(Path::new("a")).unwrap()
        }

        let reader = MemoryReader::new().with("a", vec![9u8]);
        assert_eq!(read_via(&reader), vec![9]);
    }
}
