use midiwrite::prelude::*;
use pretty_assertions::assert_eq;

/// Hand-assemble the byte stream a file with these fields and track
/// payloads must serialize to.
fn hand_assembled(format: u16, num_tracks: u16, division: u16, tracks: &[&[u8]]) -> Vec<u8> {
    let mut bytes = Vec::new();

    bytes.extend_from_slice(b"MThd");
    bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x06]);
    bytes.extend_from_slice(&format.to_be_bytes());
    bytes.extend_from_slice(&num_tracks.to_be_bytes());
    bytes.extend_from_slice(&division.to_be_bytes());

    for track in tracks {
        bytes.extend_from_slice(b"MTrk");
        bytes.extend_from_slice(&(track.len() as u32).to_be_bytes());
        bytes.extend_from_slice(track);
    }

    bytes
}

#[test]
fn format_zero_file_matches_hand_assembled_bytes() {
    let mut track = TrackChunk::new();
    track
        .program_change(0, 0, 0x13)
        .note_on(0, 0, 0x3C, 0x64)
        .note_off(0x60, 0, 0x3C, 0x40)
        .end_of_track(0);

    let mut file = MidiFile::new(
        FormatType::SingleMultiChannel,
        Division::TicksPerQuarterNote(96),
    );
    file.add_track(track);

    let expected = hand_assembled(
        0,
        1,
        96,
        &[&[
            0x00, 0xC0, 0x13, // program change
            0x00, 0x90, 0x3C, 0x64, // note on, middle C
            0x60, 0x80, 0x3C, 0x40, // note off after 96 ticks
            0x00, 0xFF, 0x2F, 0x00, // end of track
        ]],
    );

    assert_eq!(file.to_bytes(), expected);
}

#[test]
fn smpte_timed_file_with_offset() {
    let mut track = TrackChunk::new();
    track
        .smpte_offset(0, SmpteFps::TwentyFive, 0, 0, 10, 0, 0)
        .end_of_track(0);

    let mut file = MidiFile::new(
        FormatType::SingleMultiChannel,
        Division::Smpte {
            fps: SmpteFps::TwentyFive,
            ticks_per_frame: 40,
        },
    );
    file.add_track(track);

    let expected = hand_assembled(
        0,
        1,
        0xE728,
        &[&[
            0x00, 0xFF, 0x54, 0x05, // smpte offset meta
            0x20, // 25 fps, hour 0
            0x00, // minutes
            0x0A, // 10 seconds
            0x00, // frames
            0x00, // subframes
            0x00, 0xFF, 0x2F, 0x00, // end of track
        ]],
    );

    assert_eq!(file.to_bytes(), expected);
}

#[test]
fn simultaneous_tracks_are_framed_in_insertion_order() {
    let mut conductor = TrackChunk::new();
    conductor
        .set_tempo(0, 500_000)
        .time_signature(0, 4, 2, 24, 8)
        .end_of_track(0);

    let mut melody = TrackChunk::new();
    melody
        .track_name(0, "melody")
        .note_on(0, 1, 64, 90)
        .note_off(480, 1, 64, 0)
        .end_of_track(0);

    let mut file = MidiFile::new(
        FormatType::Simultaneous,
        Division::TicksPerQuarterNote(480),
    );
    file.add_track(conductor).add_track(melody);

    let expected = hand_assembled(
        1,
        2,
        480,
        &[
            &[
                0x00, 0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20, // tempo, 120 bpm
                0x00, 0xFF, 0x58, 0x04, 4, 2, 24, 8, // common time
                0x00, 0xFF, 0x2F, 0x00,
            ],
            &[
                0x00, 0xFF, 0x03, 6, b'm', b'e', b'l', b'o', b'd', b'y', //
                0x00, 0x91, 64, 90, //
                0x83, 0x60, 0x81, 64, 0, // 480 ticks = VLQ [0x83, 0x60]
                0x00, 0xFF, 0x2F, 0x00,
            ],
        ],
    );

    assert_eq!(file.to_bytes(), expected);
}

#[test]
fn chunk_encode_frames_type_length_data() {
    let header = HeaderChunk::new(1, 3, 45);
    assert_eq!(
        header.encode(),
        [b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 1, 0, 3, 0, 45]
    );

    let mut track = TrackChunk::new();
    track.all_sound_off(0, 7);
    assert_eq!(
        track.encode(),
        [b'M', b'T', b'r', b'k', 0, 0, 0, 4, 0x00, 0xB7, 120, 0]
    );
}

#[test]
fn sysex_round_out_a_track() {
    let mut track = TrackChunk::new();
    track
        .system_exclusive(0, &[0x43, 0x12, 0x00])
        .escape(0, &[0xF7])
        .end_of_track(0);

    assert_eq!(
        track.data().as_ref(),
        [
            0x00, 0xF0, 0x04, 0x43, 0x12, 0x00, 0xF7, // dump request
            0x00, 0xF7, 0x01, 0xF7, // continuation terminator
            0x00, 0xFF, 0x2F, 0x00,
        ]
    );
}

#[test]
fn write_to_emits_to_bytes() {
    let mut file = MidiFile::new(
        FormatType::SingleMultiChannel,
        Division::TicksPerQuarterNote(480),
    );
    let mut track = TrackChunk::new();
    track.end_of_track(0);
    file.add_track(track);

    let mut sink = Vec::new();
    file.write_to(&mut sink).unwrap();
    assert_eq!(sink, file.to_bytes());
}
