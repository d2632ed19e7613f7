use midiwrite::prelude::*;
use pretty_assertions::assert_eq;

fn encoded(build: impl FnOnce(&mut TrackChunk)) -> Vec<u8> {
    let mut track = TrackChunk::new();
    build(&mut track);
    track.data().into_owned()
}

#[test]
fn every_mode_command_at_channel_seven() {
    let cases: [(Vec<u8>, u8, u8); 10] = [
        (encoded(|t| {
            t.all_sound_off(0, 7);
        }), 120, 0),
        (encoded(|t| {
            t.reset_all_controllers(0, 7);
        }), 121, 0),
        (encoded(|t| {
            t.local_control(0, 7, true);
        }), 122, 127),
        (encoded(|t| {
            t.local_control(0, 7, false);
        }), 122, 0),
        (encoded(|t| {
            t.all_notes_off(0, 7);
        }), 123, 0),
        (encoded(|t| {
            t.omni_mode_off(0, 7);
        }), 124, 0),
        (encoded(|t| {
            t.omni_mode_on(0, 7);
        }), 125, 0),
        (encoded(|t| {
            t.mono_mode_on(0, 7, 9);
        }), 126, 9),
        (encoded(|t| {
            t.mono_mode_on(0, 7, 0);
        }), 126, 0),
        (encoded(|t| {
            t.poly_mode_on(0, 7);
        }), 127, 0),
    ];

    for (bytes, controller, value) in cases {
        assert_eq!(bytes.len(), 4);
        assert_eq!(bytes, [0x00, 0xB7, controller, value]);
    }
}

#[test]
fn mode_status_byte_follows_the_channel() {
    for channel in 0..16u8 {
        let bytes = encoded(|t| {
            t.all_notes_off(0, channel);
        });
        assert_eq!(bytes, [0x00, 0xB0 | channel, 123, 0]);
    }
}

#[test]
fn out_of_range_channels_wrap() {
    assert_eq!(
        encoded(|t| {
            t.omni_mode_on(0, 23);
        }),
        encoded(|t| {
            t.omni_mode_on(0, 7);
        }),
    );
}

#[test]
fn mode_messages_take_delta_times_like_any_event() {
    let bytes = encoded(|t| {
        t.all_sound_off(515089, 7);
    });
    assert_eq!(bytes, [159, 184, 17, 0xB7, 120, 0]);
}

#[test]
fn mode_and_voice_events_interleave() {
    let bytes = encoded(|t| {
        t.note_on(0, 7, 60, 100)
            .all_notes_off(96, 7)
            .poly_mode_on(0, 7);
    });

    assert_eq!(
        bytes,
        [
            0x00, 0x97, 60, 100, //
            0x60, 0xB7, 123, 0, //
            0x00, 0xB7, 127, 0,
        ]
    );
}
