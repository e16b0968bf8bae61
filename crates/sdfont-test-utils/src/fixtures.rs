//! In-memory sample font.
//!
//! Two pages, five glyphs and two kerning pairs:
//!
//! | glyph | page | source | offset | advance |
//! |---|---|---|---|---|
//! | space | 0 | 0x0 | 0, 0 | 5 |
//! | `A` | 0 | 9x12 at (0, 0) | 0, 4 | 10 |
//! | `B` | 0 | 8x12 at (10, 0) | 1, 4 | 10 |
//! | `V` | 0 | 9x12 at (20, 0) | 0, 4 | 10 |
//! | U+1F600 | 1 | 16x16 at (0, 0) | 0, 2 | 18 |
//!
//! Kerning: `A` then `V` is -2, `V` then `A` is -1. Line height is 20.

use sdfont_assets::{AssetSource, MemoryReader};
use sdfont_text::{FontDescriptor, FontResult, PageResolver, TextureDecoder};

/// Memory key the sample descriptor is stored under.
pub const SAMPLE_FNT_KEY: &str = "fonts/sample.fnt";

pub const SAMPLE_LINE_HEIGHT: u16 = 20;

pub const SAMPLE_FNT: &str = "\
info face=\"Sample Sans\" size=16 bold=0 italic=0 charset=\"\" unicode=1 stretchH=100 smooth=1 aa=1 padding=0,0,0,0 spacing=1,1
common lineHeight=20 base=16 scaleW=64 scaleH=64 pages=2 packed=0
page id=0 file=\"sample_0.png\"
page id=1 file=\"sample_1.png\"
chars count=5
char id=32     x=0   y=0   width=0   height=0   xoffset=0   yoffset=0   xadvance=5   page=0  chnl=15
char id=65     x=0   y=0   width=9   height=12  xoffset=0   yoffset=4   xadvance=10  page=0  chnl=15
char id=66     x=10  y=0   width=8   height=12  xoffset=1   yoffset=4   xadvance=10  page=0  chnl=15
char id=86     x=20  y=0   width=9   height=12  xoffset=0   yoffset=4   xadvance=10  page=0  chnl=15
char id=128512 x=0   y=0   width=16  height=16  xoffset=0   yoffset=2   xadvance=18  page=1  chnl=15
kernings count=2
kerning first=65  second=86  amount=-2
kerning first=86  second=65  amount=-1
";

/// A reader holding the sample descriptor and placeholder page bytes.
pub fn sample_reader() -> MemoryReader {
    MemoryReader::new()
        .with(SAMPLE_FNT_KEY, SAMPLE_FNT.as_bytes().to_vec())
        .with("fonts/sample_0.png", b"page-0".to_vec())
        .with("fonts/sample_1.png", b"page-1".to_vec())
}

/// Parse the sample font, decoding its pages with `decoder`.
pub fn sample_font<D: TextureDecoder>(decoder: D) -> FontResult<FontDescriptor<D::Texture>> {
    let reader = sample_reader();
    let mut pages = PageResolver::new(AssetSource::memory(SAMPLE_FNT_KEY), &reader, decoder);
    FontDescriptor::parse(SAMPLE_FNT.as_bytes(), &mut pages)
}
