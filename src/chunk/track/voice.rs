use super::TrackChunk;

/// Channel voice messages: the notes themselves plus the per-channel
/// performance controls.
impl TrackChunk {
    /// Release a key. Status `0x80 | channel`.
    pub fn note_off(&mut self, delta_time: u32, channel: u8, key: u8, velocity: u8) -> &mut Self {
        self.channel_event(delta_time, 0x80, channel, &[key & 0x7F, velocity & 0x7F])
    }

    /// Press a key. Status `0x90 | channel`.
    ///
    /// A velocity of zero is transmitted as given; receivers treat it as
    /// a note off.
    pub fn note_on(&mut self, delta_time: u32, channel: u8, key: u8, velocity: u8) -> &mut Self {
        self.channel_event(delta_time, 0x90, channel, &[key & 0x7F, velocity & 0x7F])
    }

    /// Aftertouch on a single held key. Status `0xA0 | channel`.
    pub fn polyphonic_key_pressure(
        &mut self,
        delta_time: u32,
        channel: u8,
        key: u8,
        pressure: u8,
    ) -> &mut Self {
        self.channel_event(delta_time, 0xA0, channel, &[key & 0x7F, pressure & 0x7F])
    }

    /// Move a controller. Status `0xB0 | channel`.
    ///
    /// Controller numbers 120-127 carry channel mode semantics; prefer
    /// the named mode commands for those.
    pub fn control_change(
        &mut self,
        delta_time: u32,
        channel: u8,
        controller: u8,
        value: u8,
    ) -> &mut Self {
        self.channel_event(delta_time, 0xB0, channel, &[controller & 0x7F, value & 0x7F])
    }

    /// Select a program (patch) for the channel. Status `0xC0 | channel`,
    /// one data byte.
    pub fn program_change(&mut self, delta_time: u32, channel: u8, program: u8) -> &mut Self {
        self.channel_event(delta_time, 0xC0, channel, &[program & 0x7F])
    }

    /// Aftertouch applied to the whole channel. Status `0xD0 | channel`,
    /// one data byte.
    pub fn channel_pressure(&mut self, delta_time: u32, channel: u8, pressure: u8) -> &mut Self {
        self.channel_event(delta_time, 0xD0, channel, &[pressure & 0x7F])
    }

    /// Bend the channel's pitch wheel. Status `0xE0 | channel`.
    ///
    /// `value` is the 14-bit wheel position (center is 8192), sent least
    /// significant seven bits first.
    pub fn pitch_bend(&mut self, delta_time: u32, channel: u8, value: u16) -> &mut Self {
        let value = value & 0x3FFF;
        self.channel_event(
            delta_time,
            0xE0,
            channel,
            &[(value & 0x7F) as u8, (value >> 7) as u8],
        )
    }
}

#[test]
fn note_events() {
    use pretty_assertions::assert_eq;
    let mut track = TrackChunk::new();
    track.note_on(0, 0, 0x3C, 0x64).note_off(0x60, 0, 0x3C, 0x40);

    assert_eq!(
        track.events,
        [0x00, 0x90, 0x3C, 0x64, 0x60, 0x80, 0x3C, 0x40]
    );
}

#[test]
fn two_byte_voice_events() {
    use pretty_assertions::assert_eq;
    let mut track = TrackChunk::new();
    track
        .polyphonic_key_pressure(0, 3, 72, 90)
        .control_change(0, 3, 64, 127);

    assert_eq!(track.events, [0, 0xA3, 72, 90, 0, 0xB3, 64, 127]);
}

#[test]
fn one_byte_voice_events() {
    use pretty_assertions::assert_eq;
    let mut track = TrackChunk::new();
    track.program_change(0, 9, 19).channel_pressure(12, 9, 88);

    assert_eq!(track.events, [0, 0xC9, 19, 12, 0xD9, 88]);
}

#[test]
fn pitch_bend_is_lsb_first() {
    use pretty_assertions::assert_eq;
    let mut track = TrackChunk::new();
    // center position: 8192 = 0x2000 -> lsb 0x00, msb 0x40
    track.pitch_bend(0, 1, 8192);
    assert_eq!(track.events, [0, 0xE1, 0x00, 0x40]);

    let mut track = TrackChunk::new();
    track.pitch_bend(0, 1, 0x1234);
    assert_eq!(track.events, [0, 0xE1, 0x34, 0x24]);
}

#[test]
fn data_bytes_mask_to_seven_bits() {
    use pretty_assertions::assert_eq;
    let mut masked = TrackChunk::new();
    masked.note_on(0, 0, 200, 255);

    let mut plain = TrackChunk::new();
    plain.note_on(0, 0, 200 & 0x7F, 255 & 0x7F);

    assert_eq!(masked.events, plain.events);
}
