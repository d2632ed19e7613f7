use super::TrackChunk;

/// Channel mode messages: controller numbers 120-127, reserved for
/// mode-control semantics on status `0xB0 | channel`.
impl TrackChunk {
    fn mode_message(
        &mut self,
        delta_time: u32,
        channel: u8,
        controller: u8,
        value: u8,
    ) -> &mut Self {
        self.channel_event(delta_time, 0xB0, channel, &[controller, value])
    }

    /// Silence every voice on the channel immediately. Controller 120.
    pub fn all_sound_off(&mut self, delta_time: u32, channel: u8) -> &mut Self {
        self.mode_message(delta_time, channel, 120, 0)
    }

    /// Return every controller on the channel to its default state.
    /// Controller 121.
    pub fn reset_all_controllers(&mut self, delta_time: u32, channel: u8) -> &mut Self {
        self.mode_message(delta_time, channel, 121, 0)
    }

    /// Connect (`on = true`) or disconnect the channel's keyboard from
    /// its own sound generator. Controller 122, data 127 or 0.
    pub fn local_control(&mut self, delta_time: u32, channel: u8, on: bool) -> &mut Self {
        self.mode_message(delta_time, channel, 122, if on { 127 } else { 0 })
    }

    /// Release every sounding note on the channel. Controller 123.
    pub fn all_notes_off(&mut self, delta_time: u32, channel: u8) -> &mut Self {
        self.mode_message(delta_time, channel, 123, 0)
    }

    /// Respond only to messages on this channel. Controller 124.
    pub fn omni_mode_off(&mut self, delta_time: u32, channel: u8) -> &mut Self {
        self.mode_message(delta_time, channel, 124, 0)
    }

    /// Respond to messages on every channel. Controller 125.
    pub fn omni_mode_on(&mut self, delta_time: u32, channel: u8) -> &mut Self {
        self.mode_message(delta_time, channel, 125, 0)
    }

    /// Switch to monophonic operation on `num_channels` channels (zero
    /// means one channel per receiver voice). Controller 126.
    pub fn mono_mode_on(&mut self, delta_time: u32, channel: u8, num_channels: u8) -> &mut Self {
        self.mode_message(delta_time, channel, 126, num_channels & 0x7F)
    }

    /// Switch back to polyphonic operation. Controller 127.
    pub fn poly_mode_on(&mut self, delta_time: u32, channel: u8) -> &mut Self {
        self.mode_message(delta_time, channel, 127, 0)
    }
}

#[test]
fn mode_messages_use_the_reserved_controllers() {
    use pretty_assertions::assert_eq;

    let mut track = TrackChunk::new();
    track.all_sound_off(0, 7);
    assert_eq!(track.events, [0, 0xB7, 120, 0]);

    let mut track = TrackChunk::new();
    track.reset_all_controllers(0, 7);
    assert_eq!(track.events, [0, 0xB7, 121, 0]);

    let mut track = TrackChunk::new();
    track.all_notes_off(0, 7);
    assert_eq!(track.events, [0, 0xB7, 123, 0]);

    let mut track = TrackChunk::new();
    track.omni_mode_off(0, 7);
    assert_eq!(track.events, [0, 0xB7, 124, 0]);

    let mut track = TrackChunk::new();
    track.omni_mode_on(0, 7);
    assert_eq!(track.events, [0, 0xB7, 125, 0]);

    let mut track = TrackChunk::new();
    track.poly_mode_on(0, 7);
    assert_eq!(track.events, [0, 0xB7, 127, 0]);
}

#[test]
fn local_control_is_off_or_on() {
    use pretty_assertions::assert_eq;

    let mut track = TrackChunk::new();
    track.local_control(0, 7, true);
    assert_eq!(track.events, [0, 0xB7, 122, 127]);

    let mut track = TrackChunk::new();
    track.local_control(0, 7, false);
    assert_eq!(track.events, [0, 0xB7, 122, 0]);
}

#[test]
fn mono_mode_carries_the_channel_count() {
    use pretty_assertions::assert_eq;

    let mut track = TrackChunk::new();
    track.mono_mode_on(0, 7, 9);
    assert_eq!(track.events, [0, 0xB7, 126, 9]);

    let mut track = TrackChunk::new();
    track.mono_mode_on(0, 7, 0);
    assert_eq!(track.events, [0, 0xB7, 126, 0]);
}
