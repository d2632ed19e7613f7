use super::TrackChunk;
use crate::bytes;

/// System exclusive events, stored in a track behind a variable-length
/// payload length the way the file format (unlike the wire protocol)
/// requires.
impl TrackChunk {
    /// Append a complete system exclusive message.
    ///
    /// `payload` is everything after the opening `F0`; the closing `F7`
    /// is appended here and counted in the length prefix.
    pub fn system_exclusive(&mut self, delta_time: u32, payload: &[u8]) -> &mut Self {
        let delta = bytes::uint_to_vlq(delta_time);
        let len = bytes::uint_to_vlq(payload.len() as u32 + 1);
        self.events
            .reserve(delta.len() + 1 + len.len() + payload.len() + 1);
        self.events.extend_from_slice(&delta);
        self.events.push(0xF0);
        self.events.extend_from_slice(&len);
        self.events.extend_from_slice(payload);
        self.events.push(0xF7);
        self
    }

    /// Append an escape event: `payload` reaches the output stream
    /// verbatim, with no terminator.
    ///
    /// Used for sysex continuation packets and for smuggling bytes the
    /// other commands cannot express (e.g. system real-time messages)
    /// into a track.
    pub fn escape(&mut self, delta_time: u32, payload: &[u8]) -> &mut Self {
        let delta = bytes::uint_to_vlq(delta_time);
        let len = bytes::uint_to_vlq(payload.len() as u32);
        self.events
            .reserve(delta.len() + 1 + len.len() + payload.len());
        self.events.extend_from_slice(&delta);
        self.events.push(0xF7);
        self.events.extend_from_slice(&len);
        self.events.extend_from_slice(payload);
        self
    }
}

#[test]
fn sysex_appends_the_terminator() {
    use pretty_assertions::assert_eq;
    let mut track = TrackChunk::new();
    track.system_exclusive(0, &[0x43, 0x12, 0x00]);

    assert_eq!(track.events, [0x00, 0xF0, 0x04, 0x43, 0x12, 0x00, 0xF7]);
}

#[test]
fn empty_sysex_is_just_the_terminator() {
    use pretty_assertions::assert_eq;
    let mut track = TrackChunk::new();
    track.system_exclusive(0, &[]);

    assert_eq!(track.events, [0x00, 0xF0, 0x01, 0xF7]);
}

#[test]
fn escape_is_verbatim() {
    use pretty_assertions::assert_eq;
    let mut track = TrackChunk::new();
    track.escape(0, &[0xF8]);

    assert_eq!(track.events, [0x00, 0xF7, 0x01, 0xF8]);
}
