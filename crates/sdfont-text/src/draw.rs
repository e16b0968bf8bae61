//! Hand-off from layout to a sprite renderer.
//!
//! [`draw_text`] lays out a string and issues one [`GlyphDrawCommand`] per
//! glyph present in the font. The commands carry everything a sprite batcher
//! needs: the atlas page, the source rectangle and a destination expressed
//! the way sprite batchers expect it (position, origin, rotation, scale).
//!
//! Every command of one call shares the requested text position as its
//! destination. The glyph's own placement is folded into `origin`, so
//! rotation and scale pivot around the same point for the whole string.

use sdfont_core::color::Color;
use sdfont_core::geometry::Rect;
use sdfont_core::math::{PackedVec2, Vec2};
use sdfont_core::profiling::profile_function;

use crate::code_points::CodePointSource;
use crate::font::FontDescriptor;
use crate::layout::LayoutOptions;
use crate::texture::TextureHandle;

/// Caller supplied draw settings, passed through to every glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawParams {
    pub color: Color,
    /// Rotation in radians around `position + origin`.
    pub rotation: f32,
    /// Pivot for rotation and scale, relative to the requested position.
    pub origin: Vec2,
    pub scale: Vec2,
    pub layer_depth: f32,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            rotation: 0.0,
            origin: Vec2::ZERO,
            scale: Vec2::ONE,
            layer_depth: 0.0,
        }
    }
}

impl DrawParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    /// Uniform scale on both axes.
    pub fn with_uniform_scale(self, scale: f32) -> Self {
        self.with_scale(Vec2::splat(scale))
    }

    pub fn with_layer_depth(mut self, layer_depth: f32) -> Self {
        self.layer_depth = layer_depth;
        self
    }
}

/// One glyph sprite to draw.
pub struct GlyphDrawCommand<'a, T> {
    pub code_point: u32,
    pub texture: &'a TextureHandle<T>,
    /// Pixel rectangle inside the page.
    pub source: Rect<i32>,
    /// Destination anchor: the position the text was requested at.
    pub position: Vec2,
    /// Sprite origin, `requested - glyph position + params.origin`.
    pub origin: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
    pub layer_depth: f32,
    pub color: Color,
}

impl<T> GlyphDrawCommand<'_, T> {
    /// Destination corners in the order top-left, top-right, bottom-right,
    /// bottom-left.
    pub fn corners(&self) -> [Vec2; 4] {
        let size = Vec2::new(self.source.width as f32, self.source.height as f32);
        let rotation = Vec2::from_angle(self.rotation);
        [
            Vec2::ZERO,
            Vec2::new(size.x, 0.0),
            size,
            Vec2::new(0.0, size.y),
        ]
        .map(|corner| self.position + rotation.rotate((corner - self.origin) * self.scale))
    }
}

impl<T> Clone for GlyphDrawCommand<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for GlyphDrawCommand<'_, T> {}

impl<T> std::fmt::Debug for GlyphDrawCommand<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphDrawCommand")
            .field("code_point", &self.code_point)
            .field("page", &self.texture.page())
            .field("source", &self.source)
            .field("position", &self.position)
            .field("origin", &self.origin)
            .field("rotation", &self.rotation)
            .field("scale", &self.scale)
            .field("layer_depth", &self.layer_depth)
            .field("color", &self.color)
            .finish()
    }
}

/// Something that can put glyph sprites on screen.
pub trait GlyphRenderer<T> {
    fn draw_glyph(&mut self, command: GlyphDrawCommand<'_, T>);
}

impl<T, R: GlyphRenderer<T> + ?Sized> GlyphRenderer<T> for &mut R {
    fn draw_glyph(&mut self, command: GlyphDrawCommand<'_, T>) {
        (**self).draw_glyph(command)
    }
}

/// Draw `text` at `position` with the font's stored layout defaults.
///
/// Returns the number of glyphs handed to the renderer. Code points missing
/// from the font are skipped without error.
pub fn draw_text<T, S, R>(
    renderer: &mut R,
    font: &FontDescriptor<T>,
    text: &S,
    position: Vec2,
    params: &DrawParams,
) -> usize
where
    S: CodePointSource + ?Sized,
    R: GlyphRenderer<T> + ?Sized,
{
    draw_text_with(renderer, font, text, position, params, font.layout_options())
}

/// [`draw_text`] with explicit layout options.
pub fn draw_text_with<T, S, R>(
    renderer: &mut R,
    font: &FontDescriptor<T>,
    text: &S,
    position: Vec2,
    params: &DrawParams,
    options: LayoutOptions,
) -> usize
where
    S: CodePointSource + ?Sized,
    R: GlyphRenderer<T> + ?Sized,
{
    profile_function!();

    let mut drawn = 0;
    let mut skipped = 0;

    for glyph in font.layout_with(text, position, options) {
        let Some(metrics) = glyph.metrics else {
            if !glyph.is_line_feed() {
                skipped += 1;
            }
            continue;
        };

        renderer.draw_glyph(GlyphDrawCommand {
            code_point: glyph.code_point,
            texture: metrics.texture(),
            source: metrics.source(),
            position,
            origin: position - glyph.position + params.origin,
            rotation: params.rotation,
            scale: params.scale,
            layer_depth: params.layer_depth,
            color: params.color,
        });
        drawn += 1;
    }

    if skipped > 0 {
        tracing::trace!(drawn, skipped, "skipped glyphs missing from font");
    }

    drawn
}

/// Vertex layout for batched glyph quads.
///
/// `tex_coords` are in page pixels; the consumer normalizes them by the page
/// size it uploaded.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlyphVertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
    pub color: [f32; 4],
}

/// A glyph sprite resolved to screen-space corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphQuad {
    pub code_point: u32,
    pub page: usize,
    /// Top-left, top-right, bottom-right, bottom-left.
    pub corners: [Vec2; 4],
    pub source: Rect<i32>,
    pub color: Color,
    pub layer_depth: f32,
}

impl GlyphQuad {
    pub fn from_command<T>(command: &GlyphDrawCommand<'_, T>) -> Self {
        Self {
            code_point: command.code_point,
            page: command.texture.page(),
            corners: command.corners(),
            source: command.source,
            color: command.color,
            layer_depth: command.layer_depth,
        }
    }

    /// Corner positions ready for a vertex buffer.
    pub fn positions(&self) -> [PackedVec2; 4] {
        self.corners.map(PackedVec2::from)
    }

    pub fn vertices(&self) -> [GlyphVertex; 4] {
        let Rect {
            x,
            y,
            width,
            height,
        } = self.source;
        let (left, top) = (x as f32, y as f32);
        let (right, bottom) = ((x + width) as f32, (y + height) as f32);
        let tex_coords = [[left, top], [right, top], [right, bottom], [left, bottom]];
        let color = self.color.to_array();

        std::array::from_fn(|i| GlyphVertex {
            position: self.corners[i].to_array(),
            tex_coords: tex_coords[i],
            color,
        })
    }
}

/// Largest quad count whose vertices a `u32` index buffer can address.
pub const MAX_INDEXED_QUADS: u32 = 1 << 30;

/// A CPU-side [`GlyphRenderer`] that collects quads for a later batch.
#[derive(Debug, Default, Clone)]
pub struct QuadCollector {
    quads: Vec<GlyphQuad>,
}

impl QuadCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quads(&self) -> &[GlyphQuad] {
        &self.quads
    }

    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    pub fn clear(&mut self) {
        self.quads.clear();
    }

    /// Group quads by atlas page, keeping draw order within a page.
    pub fn sort_by_page(&mut self) {
        self.quads.sort_by_key(|quad| quad.page);
    }

    /// Four vertices per quad, in quad order.
    pub fn vertices(&self) -> Vec<GlyphVertex> {
        self.quads.iter().flat_map(GlyphQuad::vertices).collect()
    }

    /// Two triangles per quad over [`QuadCollector::vertices`].
    ///
    /// Only the first [`MAX_INDEXED_QUADS`] quads are indexed. Split larger
    /// batches before building index buffers.
    pub fn indices(&self) -> Vec<u32> {
        if self.quads.len() > MAX_INDEXED_QUADS as usize {
            tracing::warn!(
                quads = self.quads.len(),
                "quad batch exceeds u32 index range, truncating"
            );
        }

        (0..MAX_INDEXED_QUADS)
            .zip(&self.quads)
            .flat_map(|(quad, _)| {
                let base = quad * 4;
                [base, base + 1, base + 2, base, base + 2, base + 3]
            })
            .collect()
    }

    pub fn into_quads(self) -> Vec<GlyphQuad> {
        self.quads
    }
}

impl<T> GlyphRenderer<T> for QuadCollector {
    fn draw_glyph(&mut self, command: GlyphDrawCommand<'_, T>) {
        self.quads.push(GlyphQuad::from_command(&command));
    }
}
