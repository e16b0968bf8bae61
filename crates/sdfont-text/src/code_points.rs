//! Random-access code point decoding over the text representations layout accepts.
//!
//! Layout only ever asks "which code point starts at this cursor, and how many
//! units does it span", so one trait covers UTF-8 strings, UTF-16 edit buffers
//! and plain `char` slices without copying them into a common form.

/// Text that can be decoded one code point at a time.
///
/// The cursor is measured in the source's own units: bytes for `str`,
/// UTF-16 code units for `[u16]`, and `char`s for `[char]`.
pub trait CodePointSource {
    /// Largest number of units a single code point can occupy.
    const MAX_UNITS_PER_CODE_POINT: usize;

    /// Total length in units.
    fn unit_len(&self) -> usize;

    /// Decode the code point starting at `cursor`, returning it and the number
    /// of units it occupies. `None` once the cursor reaches the end.
    fn decode_at(&self, cursor: usize) -> Option<(u32, usize)>;

    fn is_empty(&self) -> bool {
        self.unit_len() == 0
    }
}

impl CodePointSource for str {
    const MAX_UNITS_PER_CODE_POINT: usize = 4;

    fn unit_len(&self) -> usize {
        self.len()
    }

    fn decode_at(&self, cursor: usize) -> Option<(u32, usize)> {
        let c = self.get(cursor..)?.chars().next()?;
        Some((c as u32, c.len_utf8()))
    }
}

impl CodePointSource for String {
    const MAX_UNITS_PER_CODE_POINT: usize = 4;

    fn unit_len(&self) -> usize {
        self.len()
    }

    fn decode_at(&self, cursor: usize) -> Option<(u32, usize)> {
        self.as_str().decode_at(cursor)
    }
}

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

impl CodePointSource for [u16] {
    const MAX_UNITS_PER_CODE_POINT: usize = 2;

    fn unit_len(&self) -> usize {
        self.len()
    }

    fn decode_at(&self, cursor: usize) -> Option<(u32, usize)> {
        let unit = *self.get(cursor)?;
        if HIGH_SURROGATES.contains(&unit) {
            if let Some(&low) = self.get(cursor + 1).filter(|low| LOW_SURROGATES.contains(*low)) {
                let code_point =
                    0x10000 + (((unit as u32) - 0xD800) << 10) + ((low as u32) - 0xDC00);
                return Some((code_point, 2));
            }
        }
        // Unpaired surrogates pass through as their own unit value
        Some((unit as u32, 1))
    }
}

impl CodePointSource for Vec<u16> {
    const MAX_UNITS_PER_CODE_POINT: usize = 2;

    fn unit_len(&self) -> usize {
        self.len()
    }

    fn decode_at(&self, cursor: usize) -> Option<(u32, usize)> {
        self.as_slice().decode_at(cursor)
    }
}

impl CodePointSource for [char] {
    const MAX_UNITS_PER_CODE_POINT: usize = 1;

    fn unit_len(&self) -> usize {
        self.len()
    }

    fn decode_at(&self, cursor: usize) -> Option<(u32, usize)> {
        self.get(cursor).map(|&c| (c as u32, 1))
    }
}

impl CodePointSource for Vec<char> {
    const MAX_UNITS_PER_CODE_POINT: usize = 1;

    fn unit_len(&self) -> usize {
        self.len()
    }

    fn decode_at(&self, cursor: usize) -> Option<(u32, usize)> {
        self.as_slice().decode_at(cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<S: CodePointSource + ?Sized>(text: &S) -> Vec<u32> {
        let mut cursor = 0;
        let mut out = Vec::new();
        while let Some((code_point, units)) = text.decode_at(cursor) {
            out.push(code_point);
            cursor += units;
        }
        out
    }

    #[test]
    fn test_str_decodes_multibyte() {
        assert_eq!(collect("aé😀"), vec![0x61, 0xE9, 0x1F600]);
        assert_eq!("😀".decode_at(0), Some((0x1F600, 4)));
    }

    #[test]
    fn test_utf16_combines_surrogate_pairs() {
        let units: Vec<u16> = "a😀b".encode_utf16().collect();
        assert_eq!(units.len(), 4);
        assert_eq!(units.decode_at(1), Some((0x1F600, 2)));
        assert_eq!(collect(&units), vec![0x61, 0x1F600, 0x62]);
    }

    #[test]
    fn test_utf16_unpaired_surrogates_pass_through() {
        // Trailing high surrogate with nothing after it
        let trailing = [0x41u16, 0xD83D];
        assert_eq!(collect(&trailing[..]), vec![0x41, 0xD83D]);

        // High surrogate followed by a non-surrogate
        let broken = [0xD83Du16, 0x41];
        assert_eq!(collect(&broken[..]), vec![0xD83D, 0x41]);

        // Lone low surrogate
        let low = [0xDE00u16];
        assert_eq!(collect(&low[..]), vec![0xDE00]);
    }

    #[test]
    fn test_representations_agree() {
        let text = "Hi\n𝄞!";
        let utf16: Vec<u16> = text.encode_utf16().collect();
        let chars: Vec<char> = text.chars().collect();
        let owned = text.to_string();

        let expected = collect(text);
        assert_eq!(collect(&utf16), expected);
        assert_eq!(collect(&chars), expected);
        assert_eq!(collect(&owned), expected);
    }

    #[test]
    fn test_empty_sources() {
        assert!("".is_empty());
        assert!(Vec::<u16>::new().is_empty());
        assert_eq!("".decode_at(0), None);
        assert_eq!([0u16; 0][..].decode_at(0), None);
    }
}
