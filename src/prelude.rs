#![doc = r#"
Re-exports everything needed to build and serialize a file.

```rust
use midiwrite::prelude::*;
```
"#]

pub use crate::{
    ByteIndexError,
    bytes::{be_u16, be_u32, from_string, nth_byte_16, nth_byte_32, uint_to_vlq},
    chunk::{Chunk, HeaderChunk, TrackChunk},
    file::{Division, FormatType, MidiFile, SmpteFps},
};
