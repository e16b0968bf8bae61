//! Asset sources - where assets come from.

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The source of an asset - where to load it from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssetSource {
    /// Load from a file on disk.
    Disk {
        /// The path as provided.
        path: PathBuf,
        /// The path with forward slashes.
        key: String,
    },

    /// Load from a named memory source (e.g., embedded assets).
    Memory {
        /// A unique key identifying this memory source.
        key: String,
    },

    /// Load from raw bytes (already in memory).
    Bytes {
        /// Identifier for this data.
        id: String,
        /// The raw bytes.
        data: Arc<[u8]>,
    },
}

impl AssetSource {
    /// Create a disk source from a path.
    pub fn disk(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        AssetSource::Disk {
            path: path.to_path_buf(),
            key: path.to_string_lossy().replace('\\', "/"),
        }
    }

    /// Create a memory source with a key.
    pub fn memory(key: impl Into<String>) -> Self {
        AssetSource::Memory { key: key.into() }
    }

    /// Create a bytes source with an identifier.
    pub fn bytes(id: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
        AssetSource::Bytes {
            id: id.into(),
            data: data.into(),
        }
    }

    /// Get the original path if this is a disk source.
    pub fn path(&self) -> Option<&Path> {
        match self {
            AssetSource::Disk { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Get the extension of the path, key or id.
    pub fn extension(&self) -> Option<&str> {
        match self {
            AssetSource::Disk { path, .. } => path.extension().and_then(|e| e.to_str()),
            AssetSource::Memory { key } => key
                .rsplit_once('.')
                .map(|(_, ext)| ext)
                .filter(|e| !e.contains('/')),
            AssetSource::Bytes { id, .. } => id
                .rsplit_once('.')
                .map(|(_, ext)| ext)
                .filter(|e| !e.contains('/') && !e.contains(':')),
        }
    }

    /// Resolve `relative` against the directory this source lives in.
    ///
    /// Atlas pages are referenced relative to their font descriptor, so a
    /// page `"font_0.png"` next to `"fonts/body.fnt"` becomes `"fonts/font_0.png"`.
    /// Bytes sources have no directory and resolve to a memory key.
    pub fn sibling(&self, relative: &str) -> AssetSource {
        match self {
            AssetSource::Disk { path, .. } => {
                let dir = path.parent().unwrap_or_else(|| Path::new(""));
                AssetSource::disk(dir.join(relative))
            }
            AssetSource::Memory { key } => match key.rsplit_once('/') {
                Some((dir, _)) => AssetSource::memory(format!("{}/{}", dir, relative)),
                None => AssetSource::memory(relative),
            },
            AssetSource::Bytes { .. } => AssetSource::memory(relative),
        }
    }

    /// The path a [`BytesReader`](crate::BytesReader) should be asked for.
    ///
    /// Memory and bytes sources use their key as a forward-slash path.
    pub fn reader_path(&self) -> &Path {
        match self {
            AssetSource::Disk { path, .. } => path,
            AssetSource::Memory { key } => Path::new(key),
            AssetSource::Bytes { id, .. } => Path::new(id),
        }
    }

    /// Get the key for this source.
    ///
    /// Disk sources keep the path as given, so two spellings of the same file
    /// have different keys.
    pub fn key(&self) -> &str {
        match self {
            AssetSource::Disk { key, .. } => key,
            AssetSource::Memory { key } => key,
            AssetSource::Bytes { id, .. } => id,
        }
    }

    /// Get a string representation of this source for logging/debugging.
    pub fn display_path(&self) -> String {
        match self {
            AssetSource::Disk { path, .. } => path.display().to_string(),
            AssetSource::Memory { key } => format!("memory://{}", key),
            AssetSource::Bytes { id, .. } => format!("bytes://{}", id),
        }
    }
}

impl<P: AsRef<Path>> From<P> for AssetSource {
    fn from(path: P) -> Self {
        AssetSource::disk(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_key_is_path_as_given() {
        let source = AssetSource::disk("fonts/body.fnt");
        assert_eq!(source.key(), "fonts/body.fnt");
        assert_eq!(source, AssetSource::disk("fonts/body.fnt"));

        let missing = AssetSource::disk("no/such/dir/page_0.png");
        assert_eq!(missing.key(), "no/such/dir/page_0.png");
    }

    #[test]
    fn test_disk_key_uses_forward_slashes() {
        let source = AssetSource::disk("fonts\\body.fnt");
        assert_eq!(source.key(), "fonts/body.fnt");
    }

    #[test]
    fn test_extension_extraction() {
        let disk = AssetSource::disk("fonts/body.fnt");
        assert_eq!(disk.extension(), Some("fnt"));

        let memory = AssetSource::memory("fonts/body_0.png");
        assert_eq!(memory.extension(), Some("png"));

        let bytes = AssetSource::bytes("title.fnt", vec![1, 2, 3]);
        assert_eq!(bytes.extension(), Some("fnt"));

        let no_ext = AssetSource::memory("fonts.d/readme");
        assert_eq!(no_ext.extension(), None);
    }

    #[test]
    fn test_sibling_disk() {
        let font = AssetSource::disk("assets/fonts/body.fnt");
        let page = font.sibling("body_0.png");
        assert_eq!(
            page.path(),
            Some(Path::new("assets/fonts").join("body_0.png").as_path())
        );
    }

    #[test]
    fn test_sibling_memory() {
        let font = AssetSource::memory("fonts/body.fnt");
        assert_eq!(font.sibling("body_0.png").key(), "fonts/body_0.png");

        let flat = AssetSource::memory("body.fnt");
        assert_eq!(flat.sibling("body_0.png").key(), "body_0.png");
    }
}
