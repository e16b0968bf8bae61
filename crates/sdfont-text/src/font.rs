//! Bitmap font descriptors.
//!
//! A [`FontDescriptor`] is built once from a BMFont text file (see
//! [`crate::bmfont`]) and is read-only afterwards, apart from the two layout
//! defaults `letter_spacing` and `use_kerning`.

use sdfont_core::alloc::HashMap;
use sdfont_core::geometry::Rect;
use sdfont_core::math::Vec2;

use crate::code_points::CodePointSource;
use crate::error::{FontError, FontResult};
use crate::layout::{GlyphLayout, LayoutOptions};
use crate::texture::TextureHandle;

/// Metrics and atlas location of a single glyph.
pub struct CharacterMetrics<T> {
    pub(crate) code_point: u32,
    pub(crate) texture: TextureHandle<T>,
    pub(crate) source: Rect<i32>,
    pub(crate) x_offset: i32,
    pub(crate) y_offset: i32,
    pub(crate) x_advance: i32,
    pub(crate) kerning: HashMap<u32, i32>,
}

impl<T> CharacterMetrics<T> {
    pub fn code_point(&self) -> u32 {
        self.code_point
    }

    /// The atlas page holding this glyph's pixels.
    pub fn texture(&self) -> &TextureHandle<T> {
        &self.texture
    }

    /// Pixel rectangle of the glyph inside its page.
    pub fn source(&self) -> Rect<i32> {
        self.source
    }

    /// Offset from the pen position to the glyph's top-left corner.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x_offset as f32, self.y_offset as f32)
    }

    pub fn x_offset(&self) -> i32 {
        self.x_offset
    }

    pub fn y_offset(&self) -> i32 {
        self.y_offset
    }

    pub fn x_advance(&self) -> i32 {
        self.x_advance
    }

    /// Kerning adjustment when this glyph is immediately followed by `next`.
    pub fn kerning(&self, next: u32) -> Option<i32> {
        self.kerning.get(&next).copied()
    }

    pub fn kerning_pairs(&self) -> &HashMap<u32, i32> {
        &self.kerning
    }
}

impl<T> Clone for CharacterMetrics<T> {
    fn clone(&self) -> Self {
        Self {
            code_point: self.code_point,
            texture: self.texture.clone(),
            source: self.source,
            x_offset: self.x_offset,
            y_offset: self.y_offset,
            x_advance: self.x_advance,
            kerning: self.kerning.clone(),
        }
    }
}

impl<T> std::fmt::Debug for CharacterMetrics<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharacterMetrics")
            .field("code_point", &self.code_point)
            .field("page", &self.texture.page())
            .field("source", &self.source)
            .field("x_offset", &self.x_offset)
            .field("y_offset", &self.y_offset)
            .field("x_advance", &self.x_advance)
            .field("kerning_pairs", &self.kerning.len())
            .finish()
    }
}

/// A parsed bitmap font: static metadata, atlas pages, glyphs and kerning.
///
/// # Thread safety
///
/// Layout only reads the descriptor, so any number of threads can lay out
/// text against a shared `&FontDescriptor`. The layout defaults are changed
/// through `&mut self`, which the borrow checker already serializes against
/// readers. Callers that want different settings per call should use
/// [`FontDescriptor::layout_with`] instead of mutating shared state.
pub struct FontDescriptor<T> {
    face: String,
    size: i16,
    line_height: u16,
    pages: Vec<TextureHandle<T>>,
    characters: HashMap<u32, CharacterMetrics<T>>,
    letter_spacing: i32,
    use_kerning: bool,
}

impl<T> FontDescriptor<T> {
    pub(crate) fn from_parts(
        face: String,
        size: i16,
        line_height: u16,
        pages: Vec<TextureHandle<T>>,
        characters: HashMap<u32, CharacterMetrics<T>>,
    ) -> Self {
        Self {
            face,
            size,
            line_height,
            pages,
            characters,
            letter_spacing: 0,
            use_kerning: true,
        }
    }

    pub fn face(&self) -> &str {
        &self.face
    }

    pub fn size(&self) -> i16 {
        self.size
    }

    /// Vertical distance between consecutive lines, in pixels.
    pub fn line_height(&self) -> u16 {
        self.line_height
    }

    /// Atlas pages in declaration order.
    pub fn pages(&self) -> &[TextureHandle<T>] {
        &self.pages
    }

    pub fn characters(&self) -> &HashMap<u32, CharacterMetrics<T>> {
        &self.characters
    }

    /// Look up a glyph, reporting absence as `None`.
    pub fn get_character(&self, code_point: u32) -> Option<&CharacterMetrics<T>> {
        self.characters.get(&code_point)
    }

    /// Look up a glyph, reporting absence as [`FontError::UnknownCharacter`].
    pub fn character(&self, code_point: u32) -> FontResult<&CharacterMetrics<T>> {
        self.get_character(code_point)
            .ok_or(FontError::UnknownCharacter(code_point))
    }

    pub fn contains(&self, code_point: u32) -> bool {
        self.characters.contains_key(&code_point)
    }

    /// Total number of kerning pairs across all glyphs.
    pub fn kerning_pair_count(&self) -> usize {
        self.characters.values().map(|c| c.kerning.len()).sum()
    }

    /// Extra horizontal spacing added after every glyph.
    pub fn letter_spacing(&self) -> i32 {
        self.letter_spacing
    }

    pub fn set_letter_spacing(&mut self, letter_spacing: i32) {
        self.letter_spacing = letter_spacing;
    }

    pub fn use_kerning(&self) -> bool {
        self.use_kerning
    }

    pub fn set_use_kerning(&mut self, use_kerning: bool) {
        self.use_kerning = use_kerning;
    }

    /// Snapshot of the stored layout defaults.
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            letter_spacing: self.letter_spacing,
            use_kerning: self.use_kerning,
        }
    }

    /// Lay out `text` starting at `origin` with the stored defaults.
    pub fn layout<'a, S>(&'a self, text: &'a S, origin: Vec2) -> GlyphLayout<'a, T, S>
    where
        S: CodePointSource + ?Sized,
    {
        GlyphLayout::new(self, text, origin, self.layout_options())
    }

    /// Lay out `text` starting at `origin` with explicit options.
    pub fn layout_with<'a, S>(
        &'a self,
        text: &'a S,
        origin: Vec2,
        options: LayoutOptions,
    ) -> GlyphLayout<'a, T, S>
    where
        S: CodePointSource + ?Sized,
    {
        GlyphLayout::new(self, text, origin, options)
    }

    /// Size of the box `text` occupies when laid out with the stored defaults.
    pub fn measure<S>(&self, text: &S) -> Vec2
    where
        S: CodePointSource + ?Sized,
    {
        crate::layout::measure(self, text, self.layout_options())
    }

    pub fn measure_with<S>(&self, text: &S, options: LayoutOptions) -> Vec2
    where
        S: CodePointSource + ?Sized,
    {
        crate::layout::measure(self, text, options)
    }
}

impl<T> Clone for FontDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            face: self.face.clone(),
            size: self.size,
            line_height: self.line_height,
            pages: self.pages.clone(),
            characters: self.characters.clone(),
            letter_spacing: self.letter_spacing,
            use_kerning: self.use_kerning,
        }
    }
}

impl<T> std::fmt::Debug for FontDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontDescriptor")
            .field("face", &self.face)
            .field("size", &self.size)
            .field("line_height", &self.line_height)
            .field("pages", &self.pages.len())
            .field("characters", &self.characters.len())
            .field("letter_spacing", &self.letter_spacing)
            .field("use_kerning", &self.use_kerning)
            .finish()
    }
}

impl<T: Send + Sync + 'static> sdfont_assets::Asset for FontDescriptor<T> {
    fn type_name() -> &'static str {
        "FontDescriptor"
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Builds descriptors without going through the parser.
    pub(crate) struct TestFont {
        pages: Vec<TextureHandle<()>>,
        characters: HashMap<u32, CharacterMetrics<()>>,
        line_height: u16,
    }

    impl TestFont {
        pub(crate) fn new(line_height: u16) -> Self {
            Self {
                pages: vec![TextureHandle::new(0, ())],
                characters: HashMap::new(),
                line_height,
            }
        }

        /// Glyph with a `width x height` source rect and no offsets.
        pub(crate) fn glyph(self, c: char, width: i32, height: i32, x_advance: i32) -> Self {
            self.glyph_with_offset(c, width, height, x_advance, 0, 0)
        }

        pub(crate) fn glyph_with_offset(
            mut self,
            c: char,
            width: i32,
            height: i32,
            x_advance: i32,
            x_offset: i32,
            y_offset: i32,
        ) -> Self {
            let metrics = CharacterMetrics {
                code_point: c as u32,
                texture: self.pages[0].clone(),
                source: Rect::new(0, 0, width, height),
                x_offset,
                y_offset,
                x_advance,
                kerning: HashMap::new(),
            };
            self.characters.insert(c as u32, metrics);
            self
        }

        pub(crate) fn kerning(mut self, first: char, second: char, amount: i32) -> Self {
            if let Some(metrics) = self.characters.get_mut(&(first as u32)) {
                metrics.kerning.insert(second as u32, amount);
            }
            self
        }

        pub(crate) fn build(self) -> FontDescriptor<()> {
            FontDescriptor::from_parts(
                "Test".to_string(),
                16,
                self.line_height,
                self.pages,
                self.characters,
            )
        }
    }
}
