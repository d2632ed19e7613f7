#![doc = r#"
Chunk framing for Standard MIDI Files.

A MIDI file is a sequence of chunks, each identified by a 4-character
ASCII type tag followed by a 32-bit big-endian length and then that many
bytes of payload. The Standard MIDI File specification defines two chunk
types.

## [`HeaderChunk`]

The header chunk (identified by "MThd") must be the first chunk in a MIDI
file. It carries the format type, the track count, and the time division,
and its payload is always exactly 6 bytes.

## [`TrackChunk`]

Track chunks (identified by "MTrk") hold the actual MIDI events, each
prefixed by a variable-length delta-time. A file contains one track chunk
per track announced in the header.

# Example structure

A typical MIDI file looks like:
```text
[Header Chunk: "MThd"]
[Track Chunk 1: "MTrk"]
[Track Chunk 2: "MTrk"]
...
[Track Chunk N: "MTrk"]
```
"#]

mod header;
pub use header::*;

mod track;
pub use track::*;

use crate::bytes;
use alloc::{borrow::Cow, vec::Vec};

/// The capability every chunk of a MIDI file shares: a type tag, a
/// length, and a payload.
///
/// Reads are idempotent; none of the three accessors mutates the chunk.
/// [`encode`](Chunk::encode) produces the on-disk framing, and a file is
/// the concatenation of its chunks' encodings.
pub trait Chunk {
    /// The 4-character ASCII chunk identifier.
    fn chunk_type(&self) -> [u8; 4];

    /// The payload size in bytes.
    fn length(&self) -> u32;

    /// The chunk payload, without the type/length framing.
    fn data(&self) -> Cow<'_, [u8]>;

    /// Frame the chunk: type tag, big-endian length, then the payload.
    fn encode(&self) -> Vec<u8> {
        let data = self.data();
        let mut out = Vec::with_capacity(8 + data.len());
        out.extend_from_slice(&self.chunk_type());
        out.extend_from_slice(&bytes::be_u32(self.length()));
        out.extend_from_slice(&data);
        out
    }
}
