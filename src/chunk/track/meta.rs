use super::TrackChunk;
use crate::{bytes, file::SmpteFps};

/// Meta events: status `0xFF`, a type byte, a variable-length payload
/// length, then the payload.
impl TrackChunk {
    fn meta_event(&mut self, delta_time: u32, meta_type: u8, payload: &[u8]) -> &mut Self {
        let delta = bytes::uint_to_vlq(delta_time);
        let len = bytes::uint_to_vlq(payload.len() as u32);
        self.events
            .reserve(delta.len() + 2 + len.len() + payload.len());
        self.events.extend_from_slice(&delta);
        self.events.push(0xFF);
        self.events.push(meta_type);
        self.events.extend_from_slice(&len);
        self.events.extend_from_slice(payload);
        self
    }

    /// Identify the sequence (or, in format 2, the pattern) this track
    /// belongs to. Type `0x00`, two big-endian bytes.
    pub fn sequence_number(&mut self, delta_time: u32, number: u16) -> &mut Self {
        self.meta_event(delta_time, 0x00, &bytes::be_u16(number))
    }

    /// Free text. Type `0x01`.
    ///
    /// Text payloads are raw bytes behind a length prefix; no terminator
    /// is appended.
    pub fn text(&mut self, delta_time: u32, text: &str) -> &mut Self {
        self.meta_event(delta_time, 0x01, text.as_bytes())
    }

    /// A copyright notice, conventionally in the file's first track at
    /// time zero. Type `0x02`.
    pub fn copyright_notice(&mut self, delta_time: u32, text: &str) -> &mut Self {
        self.meta_event(delta_time, 0x02, text.as_bytes())
    }

    /// Name the sequence or this track. Type `0x03`.
    pub fn track_name(&mut self, delta_time: u32, name: &str) -> &mut Self {
        self.meta_event(delta_time, 0x03, name.as_bytes())
    }

    /// Name the instrumentation used on this track. Type `0x04`.
    pub fn instrument_name(&mut self, delta_time: u32, name: &str) -> &mut Self {
        self.meta_event(delta_time, 0x04, name.as_bytes())
    }

    /// A syllable to be sung at this point. Type `0x05`.
    pub fn lyric(&mut self, delta_time: u32, text: &str) -> &mut Self {
        self.meta_event(delta_time, 0x05, text.as_bytes())
    }

    /// Mark a point in the sequence, e.g. a rehearsal letter. Type `0x06`.
    pub fn marker(&mut self, delta_time: u32, text: &str) -> &mut Self {
        self.meta_event(delta_time, 0x06, text.as_bytes())
    }

    /// Describe something happening off-score at this point. Type `0x07`.
    pub fn cue_point(&mut self, delta_time: u32, text: &str) -> &mut Self {
        self.meta_event(delta_time, 0x07, text.as_bytes())
    }

    /// Associate the following meta and sysex events with a channel.
    /// Type `0x20`, one data byte.
    pub fn midi_channel_prefix(&mut self, delta_time: u32, channel: u8) -> &mut Self {
        self.meta_event(delta_time, 0x20, &[channel & 0x0F])
    }

    /// Close the track. Type `0x2F`, empty payload.
    ///
    /// Required as the final event of every track chunk; the encoder does
    /// not append it implicitly.
    pub fn end_of_track(&mut self, delta_time: u32) -> &mut Self {
        self.meta_event(delta_time, 0x2F, &[])
    }

    /// Set the tempo in microseconds per quarter note, masked to the
    /// 24 bits the payload holds. Type `0x51`.
    pub fn set_tempo(&mut self, delta_time: u32, us_per_quarter_note: u32) -> &mut Self {
        let tempo = us_per_quarter_note & 0x00FF_FFFF;
        self.meta_event(
            delta_time,
            0x51,
            &[(tempo >> 16) as u8, (tempo >> 8) as u8, tempo as u8],
        )
    }

    /// Give the track an absolute SMPTE start time. Type `0x54`.
    ///
    /// The first payload byte packs the frame rate into bits 5-6 above a
    /// 5-bit hour (`0rrhhhhh`); frames and subframes (100ths of a frame)
    /// follow the wall-clock fields.
    pub fn smpte_offset(
        &mut self,
        delta_time: u32,
        fps: SmpteFps,
        hour: u8,
        minute: u8,
        second: u8,
        frame: u8,
        subframe: u8,
    ) -> &mut Self {
        self.meta_event(
            delta_time,
            0x54,
            &[
                (fps.offset_bits() << 5) | (hour & 0x1F),
                minute,
                second,
                frame,
                subframe,
            ],
        )
    }

    /// Declare the time signature. Type `0x58`.
    ///
    /// `denominator` is a power of two (2 = quarter note, 3 = eighth).
    /// `clocks_per_click` counts MIDI clocks per metronome tick, and
    /// `thirty_seconds_per_quarter` is conventionally 8.
    pub fn time_signature(
        &mut self,
        delta_time: u32,
        numerator: u8,
        denominator: u8,
        clocks_per_click: u8,
        thirty_seconds_per_quarter: u8,
    ) -> &mut Self {
        self.meta_event(
            delta_time,
            0x58,
            &[
                numerator,
                denominator,
                clocks_per_click,
                thirty_seconds_per_quarter,
            ],
        )
    }

    /// Declare the key signature: sharps positive, flats negative, and
    /// whether the key is minor. Type `0x59`.
    pub fn key_signature(&mut self, delta_time: u32, sharps_flats: i8, minor: bool) -> &mut Self {
        self.meta_event(delta_time, 0x59, &[sharps_flats as u8, minor as u8])
    }

    /// Sequencer-specific payload, opaque to this encoder. Type `0x7F`.
    pub fn sequencer_specific(&mut self, delta_time: u32, data: &[u8]) -> &mut Self {
        self.meta_event(delta_time, 0x7F, data)
    }
}

#[test]
fn end_of_track_bytes() {
    use pretty_assertions::assert_eq;
    let mut track = TrackChunk::new();
    track.end_of_track(0);
    assert_eq!(track.events, [0x00, 0xFF, 0x2F, 0x00]);
}

#[test]
fn tempo_is_three_big_endian_bytes() {
    use pretty_assertions::assert_eq;
    let mut track = TrackChunk::new();
    // 500,000 us per quarter note = 120 bpm
    track.set_tempo(0, 500_000);
    assert_eq!(track.events, [0x00, 0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20]);

    let mut track = TrackChunk::new();
    track.set_tempo(0, 0xFF00_0001);
    assert_eq!(track.events, [0x00, 0xFF, 0x51, 0x03, 0x00, 0x00, 0x01]);
}

#[test]
fn text_events_are_length_prefixed() {
    use pretty_assertions::assert_eq;
    let mut track = TrackChunk::new();
    track.track_name(0, "solo");
    assert_eq!(track.events, [0, 0xFF, 0x03, 4, b's', b'o', b'l', b'o']);

    let mut track = TrackChunk::new();
    track.marker(0, "");
    assert_eq!(track.events, [0, 0xFF, 0x06, 0]);
}

#[test]
fn sequence_number_is_big_endian() {
    use pretty_assertions::assert_eq;
    let mut track = TrackChunk::new();
    track.sequence_number(0, 0x0103);
    assert_eq!(track.events, [0, 0xFF, 0x00, 0x02, 0x01, 0x03]);
}

#[test]
fn smpte_offset_packs_fps_and_hour() {
    use pretty_assertions::assert_eq;
    let mut track = TrackChunk::new();
    track.smpte_offset(0, SmpteFps::TwentyNine, 1, 23, 45, 12, 34);
    assert_eq!(
        track.events,
        [0x00, 0xFF, 0x54, 0x05, 0x41, 0x17, 0x2D, 0x0C, 0x22]
    );
}

#[test]
fn signatures() {
    use pretty_assertions::assert_eq;
    let mut track = TrackChunk::new();
    track.time_signature(0, 6, 3, 24, 8).key_signature(0, -3, true);
    assert_eq!(
        track.events,
        [
            0x00, 0xFF, 0x58, 0x04, 6, 3, 24, 8, //
            0x00, 0xFF, 0x59, 0x02, 0xFD, 1,
        ]
    );
}

#[test]
fn channel_prefix_and_sequencer_specific() {
    use pretty_assertions::assert_eq;
    let mut track = TrackChunk::new();
    track
        .midi_channel_prefix(0, 9)
        .sequencer_specific(0, &[0x43, 0x01, 0x02]);
    assert_eq!(
        track.events,
        [
            0x00, 0xFF, 0x20, 0x01, 9, //
            0x00, 0xFF, 0x7F, 0x03, 0x43, 0x01, 0x02,
        ]
    );
}
