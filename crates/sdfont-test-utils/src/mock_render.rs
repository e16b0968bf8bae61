//! Mock renderer and texture decoder.
//!
//! Both record what they were asked to do so tests can assert on it without
//! a GPU or real image files.

use parking_lot::Mutex;
use sdfont_assets::{AssetError, AssetResult, AssetSource};
use sdfont_core::color::Color;
use sdfont_core::geometry::Rect;
use sdfont_core::math::Vec2;
use sdfont_text::{GlyphDrawCommand, GlyphRenderer, TextureDecoder};

/// A fake page texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockTexture {
    /// Decode order, starting at 0.
    pub id: usize,
    /// Memory key or path of the page.
    pub label: String,
    pub byte_len: usize,
}

/// Records a decode call for verification in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeCall {
    pub source: String,
    pub byte_len: usize,
}

/// Texture decoder that never looks at the bytes.
///
/// Decoding takes `&self`, so calls are recorded behind a `Mutex`.
#[derive(Debug, Default)]
pub struct MockTextureDecoder {
    calls: Mutex<Vec<DecodeCall>>,
    fail_on: Option<String>,
}

impl MockTextureDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any page whose source key ends with `suffix`.
    pub fn failing_on(suffix: impl Into<String>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: Some(suffix.into()),
        }
    }

    pub fn calls(&self) -> Vec<DecodeCall> {
        self.calls.lock().clone()
    }

    pub fn decode_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl TextureDecoder for MockTextureDecoder {
    type Texture = MockTexture;

    fn decode(&self, source: &AssetSource, bytes: &[u8]) -> AssetResult<MockTexture> {
        let label = source.key().to_string();

        if let Some(suffix) = &self.fail_on {
            if label.ends_with(suffix.as_str()) {
                return Err(AssetError::LoaderError {
                    path: source.display_path(),
                    message: "mock decode failure".to_string(),
                });
            }
        }

        let mut calls = self.calls.lock();
        let id = calls.len();
        calls.push(DecodeCall {
            source: label.clone(),
            byte_len: bytes.len(),
        });

        Ok(MockTexture {
            id,
            label,
            byte_len: bytes.len(),
        })
    }
}

/// An owned copy of one [`GlyphDrawCommand`].
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub code_point: u32,
    pub page: usize,
    pub source: Rect<i32>,
    pub position: Vec2,
    pub origin: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
    pub layer_depth: f32,
    pub color: Color,
    /// Top-left, top-right, bottom-right, bottom-left.
    pub corners: [Vec2; 4],
}

impl DrawCall {
    /// Where the glyph's top-left corner lands, ignoring rotation and scale.
    pub fn top_left(&self) -> Vec2 {
        self.position - self.origin
    }
}

/// Glyph renderer that records every command it receives.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn count(&self) -> usize {
        self.calls.len()
    }

    /// Code points in draw order.
    pub fn code_points(&self) -> Vec<u32> {
        self.calls.iter().map(|call| call.code_point).collect()
    }

    /// Number of draws that sampled `page`.
    pub fn count_page(&self, page: usize) -> usize {
        self.calls.iter().filter(|call| call.page == page).count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl<T> GlyphRenderer<T> for RecordingRenderer {
    fn draw_glyph(&mut self, command: GlyphDrawCommand<'_, T>) {
        self.calls.push(DrawCall {
            code_point: command.code_point,
            page: command.texture.page(),
            source: command.source,
            position: command.position,
            origin: command.origin,
            rotation: command.rotation,
            scale: command.scale,
            layer_depth: command.layer_depth,
            color: command.color,
            corners: command.corners(),
        });
    }
}
