use sdfont_assets::AssetError;

/// Errors that can occur while loading or querying a bitmap font.
#[derive(Debug)]
pub enum FontError {
    /// A caller-supplied argument is unusable.
    InvalidArgument { name: &'static str, reason: String },

    /// A numeric field could not be parsed as an integer.
    InvalidNumber {
        line: usize,
        key: String,
        value: String,
    },

    /// A `char` record references a page that has not been declared yet.
    UnknownPage { line: usize, page: usize },

    /// Two `char` records share the same code point.
    DuplicateCharacter { line: usize, id: u32 },

    /// A record is missing a field it cannot do without.
    MissingField {
        line: usize,
        tag: &'static str,
        key: &'static str,
    },

    /// The font has no glyph for this code point.
    UnknownCharacter(u32),

    /// An atlas page could not be located or decoded.
    Resource { path: String, source: AssetError },

    /// Reading the descriptor stream failed.
    Io(std::io::Error),
}

impl std::fmt::Display for FontError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontError::InvalidArgument { name, reason } => {
                write!(f, "Invalid argument '{}': {}", name, reason)
            }
            FontError::InvalidNumber { line, key, value } => write!(
                f,
                "Line {}: value '{}' for '{}' is not a valid integer",
                line, value, key
            ),
            FontError::UnknownPage { line, page } => {
                write!(f, "Line {}: character references undeclared page {}", line, page)
            }
            FontError::DuplicateCharacter { line, id } => {
                write!(f, "Line {}: duplicate character id {}", line, id)
            }
            FontError::MissingField { line, tag, key } => {
                write!(f, "Line {}: '{}' record has no '{}' field", line, tag, key)
            }
            FontError::UnknownCharacter(code_point) => match char::from_u32(*code_point) {
                Some(c) if !c.is_control() => {
                    write!(f, "Character '{}' (U+{:04X}) is not in the font", c, code_point)
                }
                _ => write!(f, "Character U+{:04X} is not in the font", code_point),
            },
            FontError::Resource { path, source } => {
                write!(f, "Failed to load font page '{}': {}", path, source)
            }
            FontError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for FontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FontError::Resource { source, .. } => Some(source),
            FontError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FontError {
    fn from(err: std::io::Error) -> Self {
        FontError::Io(err)
    }
}

/// Result type for font operations.
pub type FontResult<T> = Result<T, FontError>;
