#![doc = r#"
Assembly of a header and track chunks into a complete [`MidiFile`]
"#]

mod format;
pub use format::*;

mod timing;
pub use timing::*;

use crate::chunk::{Chunk, HeaderChunk, TrackChunk};
use alloc::vec::Vec;

#[doc = r#"
A whole MIDI file: a format, a time division, and the tracks added so
far.

The header's track count is computed when the file is serialized, from
the number of tracks actually added, so it cannot drift from the file
contents. Callers who need a deliberately inconsistent header can frame
a [`HeaderChunk`] and the track chunks by hand; every chunk exposes its
own [`encode`](Chunk::encode).
"#]
#[derive(Debug, Clone, PartialEq)]
pub struct MidiFile {
    format: FormatType,
    division: Division,
    tracks: Vec<TrackChunk>,
}

impl MidiFile {
    /// Create an empty file with the given format and division.
    pub const fn new(format: FormatType, division: Division) -> Self {
        Self {
            format,
            division,
            tracks: Vec::new(),
        }
    }

    /// Append a finished track chunk to the file.
    pub fn add_track(&mut self, track: TrackChunk) -> &mut Self {
        self.tracks.push(track);
        self
    }

    /// The tracks added so far, in file order.
    pub fn tracks(&self) -> &[TrackChunk] {
        &self.tracks
    }

    /// The header chunk the file will open with.
    pub fn header(&self) -> HeaderChunk {
        HeaderChunk::with_format(self.format, self.tracks.len() as u16, self.division)
    }

    /// Serialize the whole file: the framed header, then every track in
    /// insertion order.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.header().encode();
        for track in &self.tracks {
            out.extend_from_slice(&track.encode());
        }
        out
    }

    /// Write the encoded file to `w`.
    #[cfg(feature = "std")]
    pub fn write_to<W: std::io::Write>(&self, w: &mut W) -> std::io::Result<()> {
        w.write_all(&self.to_bytes())
    }
}

#[test]
fn header_counts_added_tracks() {
    use pretty_assertions::assert_eq;
    let mut file = MidiFile::new(
        FormatType::Simultaneous,
        Division::TicksPerQuarterNote(480),
    );
    assert_eq!(file.header().num_tracks(), 0);

    file.add_track(TrackChunk::new())
        .add_track(TrackChunk::new());
    assert_eq!(file.header().num_tracks(), 2);
    assert_eq!(file.tracks().len(), 2);
}

#[test]
fn empty_file_is_just_the_header() {
    use pretty_assertions::assert_eq;
    let file = MidiFile::new(
        FormatType::SingleMultiChannel,
        Division::TicksPerQuarterNote(96),
    );

    assert_eq!(
        file.to_bytes(),
        [
            b'M', b'T', b'h', b'd', // type
            0, 0, 0, 6, // length
            0, 0, // format 0
            0, 0, // no tracks
            0, 96, // division
        ]
    );
}
