//! Asset loader traits.

use crate::error::AssetResult;
use crate::source::AssetSource;

/// Context provided to asset loaders during loading.
pub struct LoadContext<'a> {
    /// The source of the asset being loaded.
    pub source: &'a AssetSource,
    /// The raw bytes of the asset.
    pub bytes: &'a [u8],
    /// File extension (without the dot), if available.
    pub extension: Option<&'a str>,
}

impl<'a> LoadContext<'a> {
    /// Create a new load context.
    pub fn new(source: &'a AssetSource, bytes: &'a [u8], extension: Option<&'a str>) -> Self {
        Self {
            source,
            bytes,
            extension,
        }
    }

    /// Create a context for `source`, taking the extension from the source itself.
    pub fn for_source(source: &'a AssetSource, bytes: &'a [u8]) -> Self {
        Self::new(source, bytes, source.extension())
    }
}

/// Trait for loading assets from bytes.
///
/// # Example
///
/// ```ignore
/// struct PngLoader;
///
/// impl AssetLoader for PngLoader {
///     type Asset = PageImage;
///
///     fn extensions(&self) -> &[&str] {
///         &["png"]
///     }
///
///     fn load(&self, ctx: LoadContext<'_>) -> AssetResult<Self::Asset> {
///         // Decode PNG bytes...
///     }
/// }
/// ```
pub trait AssetLoader: Send + Sync + 'static {
    /// The asset type this loader produces.
    type Asset: crate::Asset;

    /// The file extensions this loader handles (without dots).
    fn extensions(&self) -> &[&str];

    /// Load an asset from the provided context.
    fn load(&self, ctx: LoadContext<'_>) -> AssetResult<Self::Asset>;

    /// Whether this loader claims `extension` (case-insensitive).
    fn handles(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssetError;

    /// Header line of a descriptor, kept as a stand-in asset.
    #[derive(Debug, PartialEq)]
    struct Header(String);

    impl crate::Asset for Header {
        fn type_name() -> &'static str {
            "Header"
        }
    }

    struct HeaderLoader;

    impl AssetLoader for HeaderLoader {
        type Asset = Header;

        fn extensions(&self) -> &[&str] {
            &["fnt"]
        }

        fn load(&self, ctx: LoadContext<'_>) -> AssetResult<Header> {
            let text = std::str::from_utf8(ctx.bytes).map_err(|e| AssetError::LoaderError {
                path: ctx.source.display_path(),
                message: e.to_string(),
            })?;
            Ok(Header(text.lines().next().unwrap_or_default().to_string()))
        }
    }

    #[test]
    fn test_context_takes_extension_from_source() {
        let source = AssetSource::memory("fonts/body.fnt");
        let ctx = LoadContext::for_source(&source, b"info face=\"Body\"\ncommon lineHeight=12");
        assert_eq!(ctx.extension, Some("fnt"));

        let header = HeaderLoader.load(ctx).unwrap();
        assert_eq!(header, Header("info face=\"Body\"".to_string()));
    }

    #[test]
    fn test_loader_error_names_source() {
        let source = AssetSource::bytes("bad.fnt", vec![0xff]);
        let err = HeaderLoader
            .load(LoadContext::for_source(&source, &[0xff, 0xfe]))
            .unwrap_err();
        assert!(matches!(err, AssetError::LoaderError { ref path, .. } if path == "bytes://bad.fnt"));
    }

    #[test]
    fn test_handles_is_case_insensitive() {
        assert!(HeaderLoader.handles("FNT"));
        assert!(!HeaderLoader.handles("png"));
    }
}
