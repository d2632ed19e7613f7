use num_enum::{IntoPrimitive, TryFromPrimitive};

#[doc = r#"
The three track arrangements a MIDI file can declare.

Format 0 holds the whole performance in a single multi-channel track.
Format 1 holds simultaneous tracks meant to be played together. Format 2
holds sequentially independent patterns.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum FormatType {
    /// Format 0
    SingleMultiChannel = 0,
    /// Format 1
    Simultaneous = 1,
    /// Format 2
    SequentiallyIndependent = 2,
}

#[test]
fn format_round_trips_through_u16() {
    use pretty_assertions::assert_eq;
    assert_eq!(u16::from(FormatType::SingleMultiChannel), 0);
    assert_eq!(u16::from(FormatType::Simultaneous), 1);
    assert_eq!(u16::from(FormatType::SequentiallyIndependent), 2);

    assert_eq!(
        FormatType::try_from(2u16).unwrap(),
        FormatType::SequentiallyIndependent
    );
    assert!(FormatType::try_from(3u16).is_err());
}
