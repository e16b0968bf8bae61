//! Test utilities for sdfont crates.
//!
//! - [`fixtures`] - a small two-page sample font, in memory
//! - `RecordingRenderer` - a [`GlyphRenderer`](sdfont_text::GlyphRenderer) that records every
//!   draw command (requires `mock` feature)
//! - `MockTextureDecoder` - a [`TextureDecoder`](sdfont_text::TextureDecoder) that hands out
//!   labelled fake textures and records each decode (requires `mock` feature)
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use sdfont_core::math::Vec2;
//! use sdfont_test_utils::{MockTextureDecoder, RecordingRenderer, fixtures};
//! use sdfont_text::{DrawParams, draw_text};
//!
//! let decoder = MockTextureDecoder::new();
//! let font = fixtures::sample_font(&decoder).unwrap();
//!
//! let mut renderer = RecordingRenderer::new();
//! draw_text(&mut renderer, &font, "AV", Vec2::ZERO, &DrawParams::default());
//!
//! assert_eq!(decoder.decode_count(), 2);
//! assert_eq!(renderer.count(), 2);
//! # }
//! ```

pub mod fixtures;
#[cfg(feature = "mock")]
pub mod mock_render;

#[cfg(feature = "mock")]
pub use mock_render::*;
