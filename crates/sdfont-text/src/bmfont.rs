//! AngleCode BMFont text descriptor parsing.
//!
//! The format is one record per line: a tag followed by `key=value` pairs,
//! with double quotes grouping values that contain spaces.
//!
//! ```text
//! info face="Body Text" size=32
//! common lineHeight=38
//! page id=0 file="body_0.png"
//! char id=65 x=2 y=2 width=20 height=24 xoffset=0 yoffset=6 xadvance=19 page=0
//! kerning first=65 second=86 amount=-2
//! ```
//!
//! Only the fields layout needs are read. Unknown tags, blank lines and
//! tokens that are not a single `key=value` pair are skipped. Numbers that
//! fail to parse abort the whole load, as do undeclared pages and repeated
//! character ids.

use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use sdfont_assets::{AssetError, AssetSource, BytesReader, FileReader};
use sdfont_core::alloc::HashMap;
use sdfont_core::geometry::Rect;
use sdfont_core::profiling::profile_function;

use crate::error::{FontError, FontResult};
use crate::font::{CharacterMetrics, FontDescriptor};
use crate::texture::{TextureDecoder, TextureHandle};

/// Supplies the texture for each `page` record, in declaration order.
pub trait PageLoader {
    type Texture;

    /// Load the page named by a `page` record's `file` field.
    fn load_page(&mut self, file: &str) -> FontResult<Self::Texture>;
}

impl<P: PageLoader + ?Sized> PageLoader for &mut P {
    type Texture = P::Texture;

    fn load_page(&mut self, file: &str) -> FontResult<Self::Texture> {
        (**self).load_page(file)
    }
}

/// Adapts a closure into a [`PageLoader`].
///
/// ```
/// use sdfont_text::{FnPageLoader, FontDescriptor, FontResult};
///
/// let fnt = "common lineHeight=10\npage id=0 file=\"a.png\"\n";
/// let mut pages = FnPageLoader(|file: &str| -> FontResult<String> { Ok(file.to_string()) });
/// let font = FontDescriptor::parse(fnt.as_bytes(), &mut pages).unwrap();
/// assert_eq!(font.pages()[0].texture(), "a.png");
/// ```
pub struct FnPageLoader<F>(pub F);

impl<T, F> PageLoader for FnPageLoader<F>
where
    F: FnMut(&str) -> FontResult<T>,
{
    type Texture = T;

    fn load_page(&mut self, file: &str) -> FontResult<T> {
        (self.0)(file)
    }
}

/// Resolves page files next to the font descriptor and decodes them.
pub struct PageResolver<R, D> {
    font: AssetSource,
    reader: R,
    decoder: D,
}

impl<R, D> PageResolver<R, D>
where
    R: BytesReader,
    D: TextureDecoder,
{
    /// `font` is where the descriptor itself came from; page paths are
    /// taken relative to its directory.
    pub fn new(font: AssetSource, reader: R, decoder: D) -> Self {
        Self {
            font,
            reader,
            decoder,
        }
    }

    pub fn font_source(&self) -> &AssetSource {
        &self.font
    }
}

impl<R, D> PageLoader for PageResolver<R, D>
where
    R: BytesReader,
    D: TextureDecoder,
{
    type Texture = D::Texture;

    fn load_page(&mut self, file: &str) -> FontResult<D::Texture> {
        let source = self.font.sibling(file);
        let bytes = self
            .reader
            .read_bytes(source.reader_path())
            .map_err(|err| resource_error(&source, err))?;
        let texture = self
            .decoder
            .decode(&source, &bytes)
            .map_err(|err| resource_error(&source, err))?;

        tracing::debug!(path = %source.display_path(), bytes = bytes.len(), "resolved font page");
        Ok(texture)
    }
}

fn resource_error(source: &AssetSource, err: AssetError) -> FontError {
    FontError::Resource {
        path: source.display_path(),
        source: err,
    }
}

impl<T> FontDescriptor<T> {
    /// Parse a BMFont text descriptor, loading each page through `pages`.
    ///
    /// Lines are decoded as UTF-8; invalid sequences are replaced rather than
    /// rejected.
    pub fn parse<B, P>(mut reader: B, pages: &mut P) -> FontResult<Self>
    where
        B: BufRead,
        P: PageLoader<Texture = T> + ?Sized,
    {
        profile_function!();

        let mut parser = BmFontParser::new(pages);
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;

            let line = String::from_utf8_lossy(&buf);
            parser.parse_line(line_number, line.trim_end_matches(['\n', '\r']))?;
        }

        Ok(parser.finish())
    }

    /// Load a descriptor from disk, reading pages from the same directory.
    pub fn from_path<D>(path: impl AsRef<Path>, decoder: D) -> FontResult<Self>
    where
        D: TextureDecoder<Texture = T>,
    {
        let path = path.as_ref();
        if path.file_name().is_none() {
            return Err(FontError::InvalidArgument {
                name: "path",
                reason: format!("'{}' does not name a font file", path.display()),
            });
        }

        let file = std::fs::File::open(path).map_err(|err| {
            let source = if err.kind() == std::io::ErrorKind::NotFound {
                AssetError::NotFound {
                    path: path.display().to_string(),
                }
            } else {
                AssetError::IoError {
                    path: path.to_path_buf(),
                    source: err,
                }
            };
            FontError::Resource {
                path: path.display().to_string(),
                source,
            }
        })?;

        let mut pages = PageResolver::new(AssetSource::disk(path), FileReader::new(""), decoder);
        Self::parse(BufReader::new(file), &mut pages)
    }
}

/// Split a line on whitespace, keeping quoted runs together.
///
/// Quotes toggle a flag and are dropped; there is no escaping, so an odd
/// number of quotes simply leaves the rest of the line grouped.
fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => quoted = !quoted,
            c if c.is_whitespace() && !quoted => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// `key=value` pairs of a tokenized record. Tokens that are not exactly one
/// pair are dropped.
fn fields(tokens: &[String]) -> impl Iterator<Item = (&str, &str)> {
    tokens.iter().filter_map(|token| {
        let mut parts = token.split('=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => Some((key, value)),
            _ => None,
        }
    })
}

fn number<N: FromStr>(line: usize, key: &str, value: &str) -> FontResult<N> {
    value.parse().map_err(|_| FontError::InvalidNumber {
        line,
        key: key.to_string(),
        value: value.to_string(),
    })
}

struct BmFontParser<'p, P: PageLoader + ?Sized> {
    pages: &'p mut P,
    face: String,
    size: i16,
    line_height: u16,
    loaded: Vec<TextureHandle<P::Texture>>,
    characters: HashMap<u32, CharacterMetrics<P::Texture>>,
    dropped_kerning: usize,
}

impl<'p, P: PageLoader + ?Sized> BmFontParser<'p, P> {
    fn new(pages: &'p mut P) -> Self {
        Self {
            pages,
            face: String::new(),
            size: 0,
            line_height: 0,
            loaded: Vec::new(),
            characters: HashMap::new(),
            dropped_kerning: 0,
        }
    }

    fn parse_line(&mut self, line: usize, text: &str) -> FontResult<()> {
        let tokens = tokenize(text);
        let Some((tag, rest)) = tokens.split_first() else {
            return Ok(());
        };

        match tag.as_str() {
            "info" => self.parse_info(line, rest),
            "common" => self.parse_common(line, rest),
            "page" => self.parse_page(line, rest),
            "char" => self.parse_char(line, rest),
            "kerning" => self.parse_kerning(line, rest),
            _ => Ok(()),
        }
    }

    fn parse_info(&mut self, line: usize, tokens: &[String]) -> FontResult<()> {
        let (mut has_face, mut has_size) = (false, false);
        for (key, value) in fields(tokens) {
            match key {
                "face" => {
                    self.face = value.to_string();
                    has_face = true;
                }
                "size" => {
                    self.size = number(line, key, value)?;
                    has_size = true;
                }
                _ => {}
            }
            if has_face && has_size {
                break;
            }
        }
        Ok(())
    }

    fn parse_common(&mut self, line: usize, tokens: &[String]) -> FontResult<()> {
        if let Some((key, value)) = fields(tokens).find(|(key, _)| *key == "lineHeight") {
            self.line_height = number(line, key, value)?;
        }
        Ok(())
    }

    fn parse_page(&mut self, line: usize, tokens: &[String]) -> FontResult<()> {
        let (_, file) = fields(tokens)
            .find(|(key, _)| *key == "file")
            .ok_or(FontError::MissingField {
                line,
                tag: "page",
                key: "file",
            })?;

        let texture = self.pages.load_page(file)?;
        let index = self.loaded.len();
        tracing::debug!(page = index, file, "loaded font page");
        self.loaded.push(TextureHandle::new(index, texture));
        Ok(())
    }

    fn parse_char(&mut self, line: usize, tokens: &[String]) -> FontResult<()> {
        let mut id = 0u32;
        let mut source = Rect::<i32>::default();
        let (mut x_offset, mut y_offset, mut x_advance) = (0, 0, 0);
        let mut page = 0usize;

        for (key, value) in fields(tokens) {
            match key {
                "id" => id = number(line, key, value)?,
                "x" => source.x = number(line, key, value)?,
                "y" => source.y = number(line, key, value)?,
                "width" => source.width = number(line, key, value)?,
                "height" => source.height = number(line, key, value)?,
                "xoffset" => x_offset = number(line, key, value)?,
                "yoffset" => y_offset = number(line, key, value)?,
                "xadvance" => x_advance = number(line, key, value)?,
                "page" => page = number(line, key, value)?,
                _ => {}
            }
        }

        let texture = self
            .loaded
            .get(page)
            .cloned()
            .ok_or(FontError::UnknownPage { line, page })?;

        if self.characters.contains_key(&id) {
            return Err(FontError::DuplicateCharacter { line, id });
        }

        self.characters.insert(
            id,
            CharacterMetrics {
                code_point: id,
                texture,
                source,
                x_offset,
                y_offset,
                x_advance,
                kerning: HashMap::new(),
            },
        );
        Ok(())
    }

    fn parse_kerning(&mut self, line: usize, tokens: &[String]) -> FontResult<()> {
        let (mut first, mut second, mut amount) = (0u32, 0u32, 0i32);
        for (key, value) in fields(tokens) {
            match key {
                "first" => first = number(line, key, value)?,
                "second" => second = number(line, key, value)?,
                "amount" => amount = number(line, key, value)?,
                _ => {}
            }
        }

        match self.characters.get_mut(&first) {
            // A repeated pair overwrites the earlier amount
            Some(metrics) => {
                metrics.kerning.insert(second, amount);
            }
            None => {
                tracing::trace!(line, first, second, "dropping kerning pair for unknown character");
                self.dropped_kerning += 1;
            }
        }
        Ok(())
    }

    fn finish(self) -> FontDescriptor<P::Texture> {
        let font = FontDescriptor::from_parts(
            self.face,
            self.size,
            self.line_height,
            self.loaded,
            self.characters,
        );

        tracing::debug!(
            face = font.face(),
            size = font.size(),
            line_height = font.line_height(),
            pages = font.pages().len(),
            characters = font.characters().len(),
            kerning_pairs = font.kerning_pair_count(),
            dropped_kerning = self.dropped_kerning,
            "parsed BMFont descriptor"
        );

        font
    }
}
