//! Glyph layout.
//!
//! [`GlyphLayout`] walks a [`CodePointSource`] and yields one
//! [`PositionedGlyph`] per decoded code point. It is a plain value iterator:
//! no allocation per step, and cloning it snapshots the traversal so a caller
//! can measure and then draw from the same point.
//!
//! Per code point:
//!
//! 1. the reported position starts at `origin + pen_delta`;
//! 2. a glyph present in the font shifts the reported position by its offset
//!    and advances `pen_delta.x` by `x_advance + letter_spacing`;
//! 3. with kerning enabled, the previous glyph's adjustment for this code
//!    point is added to both the reported position and `pen_delta.x`;
//! 4. a line feed moves the pen down one line, back to `origin.x`, and clears
//!    the kerning context.
//!
//! Glyphs missing from the font are still yielded (with `metrics: None`) but
//! do not move the pen.

use std::iter::FusedIterator;

use sdfont_core::math::Vec2;
use sdfont_core::profiling::profile_function;

use crate::code_points::CodePointSource;
use crate::font::{CharacterMetrics, FontDescriptor};

/// Code point that starts a new line.
pub const LINE_FEED: u32 = '\n' as u32;

/// Per-call layout settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Extra pixels added to every present glyph's advance.
    pub letter_spacing: i32,
    /// Apply kerning pairs between adjacent glyphs.
    pub use_kerning: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            letter_spacing: 0,
            use_kerning: true,
        }
    }
}

impl LayoutOptions {
    pub fn with_letter_spacing(mut self, letter_spacing: i32) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }

    pub fn with_kerning(mut self, use_kerning: bool) -> Self {
        self.use_kerning = use_kerning;
        self
    }
}

/// One laid out code point.
pub struct PositionedGlyph<'a, T> {
    pub code_point: u32,
    /// Pen position for this glyph, including its offset and any kerning.
    /// For missing glyphs this is the bare pen position.
    pub position: Vec2,
    /// `None` when the font has no glyph for `code_point`.
    pub metrics: Option<&'a CharacterMetrics<T>>,
}

impl<T> PositionedGlyph<'_, T> {
    pub fn is_missing(&self) -> bool {
        self.metrics.is_none()
    }

    pub fn is_line_feed(&self) -> bool {
        self.code_point == LINE_FEED
    }
}

impl<T> Clone for PositionedGlyph<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PositionedGlyph<'_, T> {}

impl<T> PartialEq for PositionedGlyph<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.code_point == other.code_point
            && self.position == other.position
            && match (self.metrics, other.metrics) {
                (Some(a), Some(b)) => std::ptr::eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl<T> std::fmt::Debug for PositionedGlyph<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PositionedGlyph")
            .field("code_point", &self.code_point)
            .field("position", &self.position)
            .field("missing", &self.is_missing())
            .finish()
    }
}

/// Lazy layout of one text run. Created by [`FontDescriptor::layout`].
pub struct GlyphLayout<'a, T, S: ?Sized> {
    font: &'a FontDescriptor<T>,
    text: &'a S,
    origin: Vec2,
    options: LayoutOptions,
    cursor: usize,
    pen_delta: Vec2,
    previous: Option<&'a CharacterMetrics<T>>,
}

impl<'a, T, S> GlyphLayout<'a, T, S>
where
    S: CodePointSource + ?Sized,
{
    pub(crate) fn new(
        font: &'a FontDescriptor<T>,
        text: &'a S,
        origin: Vec2,
        options: LayoutOptions,
    ) -> Self {
        Self {
            font,
            text,
            origin,
            options,
            cursor: 0,
            pen_delta: Vec2::ZERO,
            previous: None,
        }
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn options(&self) -> LayoutOptions {
        self.options
    }

    /// Where the next glyph would be placed before offsets and kerning.
    pub fn pen_position(&self) -> Vec2 {
        self.origin + self.pen_delta
    }
}

impl<'a, T, S> Iterator for GlyphLayout<'a, T, S>
where
    S: CodePointSource + ?Sized,
{
    type Item = PositionedGlyph<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (code_point, units) = self.text.decode_at(self.cursor)?;
        self.cursor += units;

        let mut position = self.origin + self.pen_delta;
        let metrics = self.font.get_character(code_point);

        if let Some(current) = metrics {
            position += current.offset();
            self.pen_delta.x += current.x_advance as f32 + self.options.letter_spacing as f32;

            if self.options.use_kerning {
                if let Some(amount) = self.previous.and_then(|prev| prev.kerning(code_point)) {
                    // Shifts this glyph and, through the delta, everything after it
                    position.x += amount as f32;
                    self.pen_delta.x += amount as f32;
                }
            }
        }

        if code_point == LINE_FEED {
            self.previous = None;
            self.pen_delta.x = 0.0;
            self.pen_delta.y += self.font.line_height() as f32;
        } else {
            self.previous = metrics;
        }

        Some(PositionedGlyph {
            code_point,
            position,
            metrics,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.text.unit_len().saturating_sub(self.cursor);
        (remaining.div_ceil(S::MAX_UNITS_PER_CODE_POINT), Some(remaining))
    }
}

impl<T, S> FusedIterator for GlyphLayout<'_, T, S> where S: CodePointSource + ?Sized {}

impl<T, S: ?Sized> Clone for GlyphLayout<'_, T, S> {
    fn clone(&self) -> Self {
        Self {
            font: self.font,
            text: self.text,
            origin: self.origin,
            options: self.options,
            cursor: self.cursor,
            pen_delta: self.pen_delta,
            previous: self.previous,
        }
    }
}

/// Width and height of `text` laid out from the origin.
///
/// Height is one line plus one more per line feed. Width is the furthest
/// right edge of any present glyph. Empty text measures zero.
pub(crate) fn measure<T, S>(font: &FontDescriptor<T>, text: &S, options: LayoutOptions) -> Vec2
where
    S: CodePointSource + ?Sized,
{
    profile_function!();

    if text.is_empty() {
        return Vec2::ZERO;
    }

    let line_height = font.line_height() as f32;
    let mut size = Vec2::new(0.0, line_height);

    for glyph in font.layout_with(text, Vec2::ZERO, options) {
        if glyph.is_line_feed() {
            size.y += line_height;
        }
        if let Some(metrics) = glyph.metrics {
            size.x = size.x.max(glyph.position.x + metrics.source().width as f32);
        }
    }

    size
}
