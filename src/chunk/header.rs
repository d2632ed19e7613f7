use crate::{
    bytes,
    chunk::Chunk,
    file::{Division, FormatType},
};
use alloc::{borrow::Cow, vec::Vec};

#[doc = r#"
The "MThd" chunk that opens every MIDI file.

Holds the raw 16-bit triple the 6-byte header body is built from: format
type, track count, and time division. The constructor performs no range
checking on the triple; a caller who asks for format 7 gets exactly that
on disk. Use [`HeaderChunk::with_format`] for the typed path.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderChunk {
    format: u16,
    num_tracks: u16,
    division: u16,
}

impl HeaderChunk {
    /// The payload of an "MThd" chunk is always six bytes.
    pub const LENGTH: u32 = 6;

    /// Create a header from the raw 16-bit fields.
    pub const fn new(format: u16, num_tracks: u16, division: u16) -> Self {
        Self {
            format,
            num_tracks,
            division,
        }
    }

    /// Create a header from a typed format and division.
    pub fn with_format(format: FormatType, num_tracks: u16, division: Division) -> Self {
        Self::new(u16::from(format), num_tracks, division.as_u16())
    }

    /// The raw format field.
    pub const fn format(&self) -> u16 {
        self.format
    }

    /// The announced number of track chunks.
    pub const fn num_tracks(&self) -> u16 {
        self.num_tracks
    }

    /// The raw time-division field.
    pub const fn division(&self) -> u16 {
        self.division
    }
}

impl Chunk for HeaderChunk {
    fn chunk_type(&self) -> [u8; 4] {
        *b"MThd"
    }

    fn length(&self) -> u32 {
        Self::LENGTH
    }

    /// The three fields, each big-endian, in declaration order.
    fn data(&self) -> Cow<'_, [u8]> {
        let mut body = Vec::with_capacity(Self::LENGTH as usize);
        body.extend_from_slice(&bytes::be_u16(self.format));
        body.extend_from_slice(&bytes::be_u16(self.num_tracks));
        body.extend_from_slice(&bytes::be_u16(self.division));
        Cow::Owned(body)
    }
}

#[test]
fn header_body_is_big_endian() {
    use pretty_assertions::assert_eq;
    let header = HeaderChunk::new(1, 3, 45);

    assert_eq!(header.chunk_type(), *b"MThd");
    assert_eq!(header.length(), 6);
    assert_eq!(header.data().as_ref(), [0, 1, 0, 3, 0, 45]);
}

#[test]
fn header_length_is_fixed() {
    for (format, num_tracks, division) in [(0u16, 0u16, 0u16), (2, 65535, 0x8000), (7, 1, 480)] {
        let header = HeaderChunk::new(format, num_tracks, division);
        assert_eq!(header.length(), 6);
        assert_eq!(header.data().len(), 6);
    }
}

#[test]
fn header_reads_are_idempotent() {
    use pretty_assertions::assert_eq;
    let header = HeaderChunk::with_format(
        FormatType::Simultaneous,
        2,
        Division::TicksPerQuarterNote(480),
    );

    assert_eq!(header.data(), header.data());
    assert_eq!(header.chunk_type(), header.chunk_type());
    assert_eq!(header.length(), header.length());
    assert_eq!(header.data().as_ref(), [0, 1, 0, 2, 1, 0xE0]);
}
