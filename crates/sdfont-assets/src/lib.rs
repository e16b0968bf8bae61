//! sdfont Assets - where font descriptors and atlas pages come from.
//!
//! - [`AssetSource`] names an asset (disk path, memory key or raw bytes)
//! - [`BytesReader`] resolves relative paths to bytes ([`FileReader`], [`MemoryReader`])
//! - [`AssetLoader`] turns bytes into a typed [`Asset`]

pub mod error;
pub mod io;
pub mod loader;
pub mod source;

pub use error::{AssetError, AssetResult};
pub use io::{BytesReader, FileReader, MemoryReader};
pub use loader::{AssetLoader, LoadContext};
pub use source::AssetSource;

/// Marker for types produced by an [`AssetLoader`].
pub trait Asset: Send + Sync + 'static {
    /// Human-readable type name used in logs and errors.
    fn type_name() -> &'static str;
}
