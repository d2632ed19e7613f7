#![doc = r#"
The "MTrk" chunk and the event encoders that fill it.

# Hierarchy
```text
                  |---------------|
                  | Track Event   |
                  |---------------|
                 /    |       |    \
    |-------------| |------| |-------| |-----------|
    | Chan. Voice | | Mode | | Meta  | | Sys. Excl.|
    |-------------| |------| |-------| |-----------|
```

Every event is appended through one command method per MIDI message. A
command encodes the event's delta-time as a variable-length quantity,
then its status byte(s), then its data bytes, and pushes the whole thing
onto the track's buffer.
"#]

mod meta;
mod mode;
mod sysex;
mod voice;

use crate::{bytes, chunk::Chunk};
use alloc::{borrow::Cow, vec::Vec};

#[doc = r#"
An "MTrk" chunk under construction.

Events are appended in emission order and never reordered or removed; the
chunk's length is always the current size of the buffer. Semantic
arguments are masked into range (channels to 4 bits, data bytes to 7)
rather than rejected, so a command never fails.
"#]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackChunk {
    events: Vec<u8>,
}

impl TrackChunk {
    /// Create an empty track.
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// True if no events have been appended yet.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Append a channel-scoped event: the status nibble ORed with the
    /// channel, then the data bytes.
    fn channel_event(
        &mut self,
        delta_time: u32,
        status: u8,
        channel: u8,
        data: &[u8],
    ) -> &mut Self {
        let delta = bytes::uint_to_vlq(delta_time);
        self.events.reserve(delta.len() + 1 + data.len());
        self.events.extend_from_slice(&delta);
        self.events.push(status | (channel & 0x0F));
        self.events.extend_from_slice(data);
        self
    }
}

impl Chunk for TrackChunk {
    fn chunk_type(&self) -> [u8; 4] {
        *b"MTrk"
    }

    fn length(&self) -> u32 {
        self.events.len() as u32
    }

    fn data(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&self.events)
    }
}

#[test]
fn empty_track() {
    use pretty_assertions::assert_eq;
    let track = TrackChunk::new();

    assert!(track.is_empty());
    assert!(track.data().is_empty());
    assert_eq!(track.chunk_type(), *b"MTrk");
    assert_eq!(track.length(), 0);
    assert_eq!(track.encode(), [b'M', b'T', b'r', b'k', 0, 0, 0, 0]);
}

#[test]
fn length_tracks_the_buffer() {
    let mut track = TrackChunk::new();
    track.note_on(0, 0, 60, 100);
    assert_eq!(track.length(), 4);

    track.note_off(96, 0, 60, 64);
    assert_eq!(track.length(), 8);

    track.end_of_track(0);
    assert_eq!(track.length(), 12);
    assert_eq!(track.length() as usize, track.data().len());
}

#[test]
fn reads_are_idempotent() {
    use pretty_assertions::assert_eq;
    let mut track = TrackChunk::new();
    track.all_notes_off(0, 7);

    assert_eq!(track.data(), track.data());
    assert_eq!(track.length(), track.length());
    assert_eq!(track.encode(), track.encode());
}

#[test]
fn delta_times_are_vlq_prefixed() {
    use pretty_assertions::assert_eq;
    let mut track = TrackChunk::new();
    track.note_on(259, 2, 60, 100);

    // two VLQ bytes, then status | channel, then the data pair
    assert_eq!(track.data().as_ref(), [130, 3, 0x92, 60, 100]);
}

#[test]
fn channels_mask_to_four_bits() {
    use pretty_assertions::assert_eq;
    let mut wrapped = TrackChunk::new();
    wrapped.note_on(0, 18, 60, 100);

    let mut plain = TrackChunk::new();
    plain.note_on(0, 2, 60, 100);

    assert_eq!(wrapped.data(), plain.data());
}
