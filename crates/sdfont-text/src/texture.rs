//! Atlas page textures.
//!
//! The text crate never talks to a GPU. Pages are produced by a
//! [`TextureDecoder`] and shared between every glyph on that page through a
//! [`TextureHandle`]. The `image` feature provides [`ImageDecoder`], which
//! decodes pages into CPU-side RGBA with premultiplied alpha.

use std::sync::Arc;

use sdfont_assets::{AssetResult, AssetSource};

/// A shared reference to one atlas page.
pub struct TextureHandle<T> {
    page: usize,
    texture: Arc<T>,
}

impl<T> TextureHandle<T> {
    pub fn new(page: usize, texture: T) -> Self {
        Self {
            page,
            texture: Arc::new(texture),
        }
    }

    /// Index of the page in declaration order.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn texture(&self) -> &T {
        &self.texture
    }

    /// Whether both handles point at the same decoded page.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.texture, &other.texture)
    }
}

impl<T> Clone for TextureHandle<T> {
    fn clone(&self) -> Self {
        Self {
            page: self.page,
            texture: self.texture.clone(),
        }
    }
}

impl<T> std::fmt::Debug for TextureHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureHandle")
            .field("page", &self.page)
            .field("texture", &std::any::type_name::<T>())
            .finish()
    }
}

/// Decodes page image bytes into a texture.
///
/// Implementations must hand back pixels with premultiplied alpha; the SDF
/// shaders sample pages assuming it.
pub trait TextureDecoder {
    type Texture;

    fn decode(&self, source: &AssetSource, bytes: &[u8]) -> AssetResult<Self::Texture>;
}

impl<D: TextureDecoder + ?Sized> TextureDecoder for &D {
    type Texture = D::Texture;

    fn decode(&self, source: &AssetSource, bytes: &[u8]) -> AssetResult<Self::Texture> {
        (**self).decode(source, bytes)
    }
}

/// Multiply the color channels of tightly packed RGBA8 pixels by their alpha.
pub fn premultiply_alpha(pixels: &mut [u8]) {
    for px in pixels.chunks_exact_mut(4) {
        let alpha = px[3] as u16;
        for channel in &mut px[..3] {
            *channel = ((*channel as u16 * alpha + 127) / 255) as u8;
        }
    }
}

/// A decoded atlas page held in CPU memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    pub width: u32,
    pub height: u32,
    /// RGBA8 rows, premultiplied alpha.
    pub pixels: Vec<u8>,
}

impl PageImage {
    /// Wrap straight-alpha RGBA8 pixels, premultiplying them.
    pub fn from_straight_rgba(width: u32, height: u32, mut pixels: Vec<u8>) -> Self {
        premultiply_alpha(&mut pixels);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.pixels.get(offset..offset + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Decodes PNG pages with the `image` crate.
#[cfg(feature = "image")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageDecoder;

#[cfg(feature = "image")]
impl TextureDecoder for ImageDecoder {
    type Texture = PageImage;

    fn decode(&self, source: &AssetSource, bytes: &[u8]) -> AssetResult<PageImage> {
        let image = image::load_from_memory(bytes).map_err(|e| {
            sdfont_assets::AssetError::LoaderError {
                path: source.display_path(),
                message: e.to_string(),
            }
        })?;
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        tracing::debug!(path = %source.display_path(), width, height, "decoded font page");
        Ok(PageImage::from_straight_rgba(width, height, rgba.into_raw()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_premultiply_alpha() {
        let mut pixels = vec![255, 128, 0, 128, 10, 20, 30, 255, 200, 200, 200, 0];
        premultiply_alpha(&mut pixels);
        assert_eq!(&pixels[0..4], &[128, 64, 0, 128]);
        assert_eq!(&pixels[4..8], &[10, 20, 30, 255]);
        assert_eq!(&pixels[8..12], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_page_image_pixel_lookup() {
        let page = PageImage::from_straight_rgba(2, 1, vec![255, 255, 255, 255, 255, 0, 0, 0]);
        assert_eq!(page.pixel(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(page.pixel(1, 0), Some([0, 0, 0, 0]));
        assert_eq!(page.pixel(2, 0), None);
    }

    #[test]
    fn test_pixel_offset_past_u32_range() {
        // 70000 * 70000 * 4 does not fit in a u32
        let page = PageImage {
            width: 70_000,
            height: 70_000,
            pixels: vec![0; 16],
        };
        assert_eq!(page.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(page.pixel(69_999, 69_999), None);
    }

    #[test]
    fn test_handle_clone_shares_texture() {
        let handle = TextureHandle::new(3, "page".to_string());
        let clone = handle.clone();
        assert!(handle.ptr_eq(&clone));
        assert_eq!(clone.page(), 3);
        assert_eq!(clone.texture(), "page");

        let other = TextureHandle::new(3, "page".to_string());
        assert!(!handle.ptr_eq(&other));
    }

    #[cfg(feature = "image")]
    #[test]
    fn test_image_decoder_premultiplies() {
        let mut img = image::RgbaImage::new(1, 1);
        img.put_pixel(0, 0, image::Rgba([200, 100, 50, 51]));
        let mut png = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let page = ImageDecoder
            .decode(&AssetSource::memory("page.png"), &png)
            .unwrap();
        assert_eq!((page.width, page.height), (1, 1));
        assert_eq!(page.pixel(0, 0), Some([40, 20, 10, 51]));
    }

    #[cfg(feature = "image")]
    #[test]
    fn test_image_decoder_rejects_garbage() {
        let err = ImageDecoder
            .decode(&AssetSource::memory("page.png"), b"not a png")
            .unwrap_err();
        assert!(matches!(err, sdfont_assets::AssetError::LoaderError { .. }));
    }
}
