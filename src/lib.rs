#![doc = r#"
Byte-exact encoding of Standard MIDI Files.

`midiwrite` turns an in-memory description of a musical sequence into the
exact byte stream the MIDI 1.0 file specification calls for. It is a
write-only encoder: the crate knows nothing about parsing, playback, or
deciding *what* events a sequence should contain.

A file is a header chunk followed by track chunks. Tracks are built by
calling one command method per event; each command appends the event's
delta-time (as a variable-length quantity) and its status and data bytes
to the track's buffer.

# Example

```rust
use midiwrite::prelude::*;

let mut track = TrackChunk::new();
track
    .track_name(0, "melody")
    .program_change(0, 0, 19)
    .note_on(0, 0, 60, 100)
    .note_off(96, 0, 60, 64)
    .end_of_track(0);

let mut file = MidiFile::new(
    FormatType::SingleMultiChannel,
    Division::TicksPerQuarterNote(480),
);
file.add_track(track);

let bytes = file.to_bytes();
assert_eq!(&bytes[..4], b"MThd");
```

# Leniency

Commands never fail. Out-of-range semantic arguments are masked into range
(channels to 4 bits, data bytes to 7 bits, tempo to 24 bits) rather than
rejected, so the output is always structurally valid; whether it is the
file the caller meant to write is the caller's job. The only error in the
crate is the byte-index range check in [`bytes`].
"#]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod bytes;

pub mod chunk;

mod error;
pub use error::*;

pub mod file;

pub mod prelude;
