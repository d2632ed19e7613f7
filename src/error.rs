use thiserror::Error;

#[doc = r#"
The error produced when a byte index falls outside the word it addresses.

The byte-extraction utilities accept exactly the indices their word has
bytes for: `{0, 1}` for 16-bit words and `{0, 1, 2, 3}` for 32-bit words.
Anything else fails loudly rather than clamping or wrapping.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("byte index {index} out of range for a {width}-bit word")]
pub struct ByteIndexError {
    index: usize,
    width: u8,
}

impl ByteIndexError {
    pub(crate) const fn sixteen(index: usize) -> Self {
        Self { index, width: 16 }
    }

    pub(crate) const fn thirty_two(index: usize) -> Self {
        Self { index, width: 32 }
    }

    /// The index that was requested.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The width, in bits, of the word that was addressed.
    pub const fn width(&self) -> u8 {
        self.width
    }
}
