//! Asset integration for BMFont descriptors.
//!
//! [`BmFontLoader`] plugs font loading into the `sdfont-assets` loader
//! interface. The descriptor bytes arrive through the [`LoadContext`]; pages
//! are read with the loader's own [`BytesReader`], resolved relative to the
//! descriptor's source.
//!
//! # Example
//!
//! ```ignore
//! use sdfont_assets::{AssetLoader, AssetSource, LoadContext};
//! use sdfont_text::{BmFontLoader, ImageDecoder};
//!
//! let loader = BmFontLoader::new(ImageDecoder);
//! let source = AssetSource::disk("fonts/body.fnt");
//! let bytes = std::fs::read("fonts/body.fnt")?;
//! let font = loader.load(LoadContext::for_source(&source, &bytes))?;
//! ```

use sdfont_assets::{AssetError, AssetLoader, AssetResult, BytesReader, FileReader, LoadContext};

use crate::bmfont::PageResolver;
use crate::font::FontDescriptor;
use crate::texture::TextureDecoder;

/// Loads `.fnt` text descriptors and their atlas pages.
pub struct BmFontLoader<D, R = FileReader> {
    decoder: D,
    reader: R,
}

impl<D> BmFontLoader<D> {
    /// Loader that reads pages from disk, relative to the working directory.
    pub fn new(decoder: D) -> Self {
        Self {
            decoder,
            reader: FileReader::new(""),
        }
    }
}

impl<D, R> BmFontLoader<D, R> {
    /// Loader that reads pages through `reader`.
    pub fn with_reader(decoder: D, reader: R) -> Self {
        Self { decoder, reader }
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }
}

impl<D, R> AssetLoader for BmFontLoader<D, R>
where
    D: TextureDecoder + Send + Sync + 'static,
    D::Texture: Send + Sync + 'static,
    R: BytesReader + Send + Sync + 'static,
{
    type Asset = FontDescriptor<D::Texture>;

    fn extensions(&self) -> &[&str] {
        &["fnt"]
    }

    fn load(&self, ctx: LoadContext<'_>) -> AssetResult<Self::Asset> {
        let mut pages = PageResolver::new(ctx.source.clone(), &self.reader, &self.decoder);

        FontDescriptor::parse(ctx.bytes, &mut pages).map_err(|err| {
            tracing::warn!("Failed to load font '{}': {}", ctx.source.display_path(), err);
            AssetError::LoaderError {
                path: ctx.source.display_path(),
                message: err.to_string(),
            }
        })
    }
}
