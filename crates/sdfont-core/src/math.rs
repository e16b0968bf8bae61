/// Fast mathematical operations using SIMD-accelerated `glam` types.
///
/// This module re-exports all types and functions from the [`glam`] crate.
/// Layout positions, pen deltas and draw anchors are all [`Vec2`].
///
/// # Examples
///
/// ```
/// use sdfont_core::math::Vec2;
///
/// let origin = Vec2::new(10.0, 20.0);
/// let pen = origin + Vec2::new(12.0, 0.0);
/// assert_eq!(pen.x, 22.0);
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

/// Packed vector types for GPU buffer uploads.
///
/// These are `#[repr(C)]` and [`bytemuck::Pod`], so glyph quads produced by
/// the text crate can be cast straight into vertex bytes.
///
/// ```
/// use sdfont_core::math::{PackedVec2, Vec2};
///
/// let corner = Vec2::new(1.0, 2.0);
/// let packed = PackedVec2::from(corner);
/// let bytes: &[u8] = bytemuck::bytes_of(&packed);
/// assert_eq!(bytes.len(), 8);
/// ```
pub mod packed {
    use bytemuck::{Pod, Zeroable};

    /// A 2D vector with guaranteed `#[repr(C)]` layout for GPU uploads.
    #[repr(C)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
    pub struct Vec2 {
        pub x: f32,
        pub y: f32,
    }

    impl From<glam::Vec2> for Vec2 {
        fn from(v: glam::Vec2) -> Self {
            Self { x: v.x, y: v.y }
        }
    }

    impl From<Vec2> for glam::Vec2 {
        fn from(v: Vec2) -> Self {
            glam::Vec2::new(v.x, v.y)
        }
    }
}

pub use fast::*;
pub use packed::Vec2 as PackedVec2;
