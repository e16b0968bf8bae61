//! sdfont Text - BMFont loading and glyph layout for signed-distance-field text.
//!
//! This crate turns an AngleCode BMFont text descriptor into a
//! [`FontDescriptor`] and lays text out against it:
//! - [`FontDescriptor::parse`] / [`FontDescriptor::from_path`] read descriptors and atlas pages
//! - [`FontDescriptor::layout`] yields a lazy [`GlyphLayout`] of positioned glyphs
//! - [`FontDescriptor::measure`] sizes a string without drawing it
//! - [`draw_text`] hands drawable glyphs to a [`GlyphRenderer`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sdfont_core::math::Vec2;
//! use sdfont_text::{DrawParams, FontDescriptor, ImageDecoder, QuadCollector, draw_text};
//!
//! let font = FontDescriptor::from_path("assets/fonts/body.fnt", ImageDecoder)?;
//!
//! let size = font.measure("Hello, World!");
//! let mut quads = QuadCollector::new();
//! draw_text(&mut quads, &font, "Hello, World!", Vec2::new(10.0, 10.0), &DrawParams::default());
//! # let _ = size;
//! # Ok::<(), sdfont_text::FontError>(())
//! ```
//!
//! ## Text representations
//!
//! Layout accepts anything implementing [`CodePointSource`]: `str`, `String`,
//! UTF-16 buffers (`[u16]`, `Vec<u16>`) and `char` slices. UTF-16 surrogate
//! pairs decode to a single code point.
//!
//! ## Features
//!
//! - `image` (default): [`ImageDecoder`], PNG page decoding with premultiplied alpha

pub mod asset;
pub mod bmfont;
pub mod code_points;
pub mod draw;
pub mod error;
pub mod font;
pub mod layout;
pub mod texture;

pub use asset::BmFontLoader;
pub use bmfont::{FnPageLoader, PageLoader, PageResolver};
pub use code_points::CodePointSource;
pub use draw::{
    DrawParams, GlyphDrawCommand, GlyphQuad, GlyphRenderer, GlyphVertex, MAX_INDEXED_QUADS,
    QuadCollector, draw_text, draw_text_with,
};
pub use error::{FontError, FontResult};
pub use font::{CharacterMetrics, FontDescriptor};
pub use layout::{GlyphLayout, LINE_FEED, LayoutOptions, PositionedGlyph};
#[cfg(feature = "image")]
pub use texture::ImageDecoder;
pub use texture::{PageImage, TextureDecoder, TextureHandle, premultiply_alpha};
