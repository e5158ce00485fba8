use core::char::REPLACEMENT_CHARACTER;

use rstest::rstest;

use crate::{
    CodecTable, EBCDIC_KANA, ENCODINGS, EncodeEntry, RepertoireError, Status, TransformError,
    by_name,
};

/// Bytes with no assignment in EBCDIC-Kana.
const UNMAPPED: [u8; 25] = [
    0x80, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xDA, 0xDB, 0xDC, 0xDD, 0xDE, 0xDF, 0xE1, 0xEA,
    0xEB, 0xEC, 0xED, 0xEE, 0xEF, 0xFA, 0xFB, 0xFC, 0xFD, 0xFE,
];

/// Decode-only aliases and the byte their character encodes to.
const ALIASES: [(u8, u8); 2] = [(0xC0, 0x75), (0xD0, 0x76)];

#[test]
fn every_assigned_byte_round_trips() {
    for b in 0..=0xFFu8 {
        let c = EBCDIC_KANA.decode_byte(b);
        if UNMAPPED.contains(&b) {
            assert_eq!(c, REPLACEMENT_CHARACTER, "{b:#04X}");
            assert!(!EBCDIC_KANA.is_mapped(b));
            continue;
        }
        assert!(EBCDIC_KANA.is_mapped(b));
        let canonical = ALIASES
            .iter()
            .find(|&&(alias, _)| alias == b)
            .map_or(b, |&(_, canonical)| canonical);
        assert_eq!(EBCDIC_KANA.encode_char(c), (canonical, true), "{b:#04X}");
    }
}

#[rstest]
#[case(0x42, 'b')]
#[case(0x40, ' ')]
#[case(0xC1, 'A')]
#[case(0xF0, '0')]
#[case(0x5B, '\u{A5}')]
#[case(0x77, '\u{203E}')]
#[case(0x81, '\u{FF61}')]
#[case(0xBF, '\u{FF9F}')]
#[case(0x25, '\n')]
#[case(0xFF, '\u{9F}')]
fn known_assignments(#[case] b: u8, #[case] c: char) {
    assert_eq!(EBCDIC_KANA.decode_byte(b), c);
    assert_eq!(EBCDIC_KANA.encode_char(c), (b, true));
    assert_eq!(EBCDIC_KANA.try_encode_char(c), Ok(b));
}

#[rstest]
#[case('\u{3042}')]
#[case('\u{E9}')]
#[case('\u{FFFD}')]
#[case('\u{1F600}')]
fn characters_outside_the_repertoire(#[case] c: char) {
    assert_eq!(EBCDIC_KANA.encode_char(c), (0x3F, false));
    let err = EBCDIC_KANA.try_encode_char(c).unwrap_err();
    assert_eq!(err, RepertoireError(0x3F));
    assert_eq!(err.replacement(), EBCDIC_KANA.replacement());
}

#[test]
fn shipped_encode_table_is_sorted_and_padded() {
    assert!(!EBCDIC_KANA.is_ascii_superset());
    assert_eq!(EBCDIC_KANA.low(), 0x00);

    let encode = EBCDIC_KANA.encode_entries();
    let real = 256 - UNMAPPED.len() - ALIASES.len();
    assert!(encode[..real].windows(2).all(|w| w[0].scalar() < w[1].scalar()));
    assert!(encode[real..].iter().all(|&e| e == encode[real - 1]));
    assert_eq!(encode[real - 1], EncodeEntry::new(0xBF, '\u{FF9F}'));
    assert!(encode.iter().all(|e| e.scalar() != u32::from(REPLACEMENT_CHARACTER)));
}

#[test]
fn shipped_table_matches_a_runtime_build() {
    let mut mapping = [REPLACEMENT_CHARACTER; 256];
    for (b, slot) in (0..=0xFFu8).zip(mapping.iter_mut()) {
        *slot = EBCDIC_KANA.decode_byte(b);
    }
    let table = CodecTable::build(0x3F, &mapping).unwrap().with_name("EBCDIC-KANA");
    assert_eq!(table, EBCDIC_KANA);
}

#[test]
fn ascii_fast_path_agrees_with_the_tables() {
    let mut mapping = [REPLACEMENT_CHARACTER; 256];
    for (b, slot) in (0..0x80u8).zip(mapping.iter_mut()) {
        *slot = char::from(b);
    }
    mapping[0xA1] = '\u{FF61}';
    let table = CodecTable::build(0x1A, &mapping).unwrap();
    assert!(table.is_ascii_superset());
    assert_eq!(table.low(), 0x80);

    for b in 0..0x80u8 {
        let c = char::from(b);
        assert_eq!(table.decode_byte(b), c);
        assert_eq!(table.decode_entries()[usize::from(b)].scalar(), c);
        assert_eq!(table.encode_char(c), (b, true));
        assert_eq!(table.encode_entries()[usize::from(b)], EncodeEntry::new(b, c));
    }
    assert_eq!(table.encode_char('\u{FF61}'), (0xA1, true));
    assert_eq!(table.encode_char('\u{FF62}'), (0x1A, false));
}

#[rstest]
#[case("EBCDIC-KANA")]
#[case("ebcdic-kana")]
#[case("Ebcdic-Kana")]
fn tables_are_found_by_name(#[case] name: &str) {
    assert_eq!(by_name(name), Some(&EBCDIC_KANA));
}

#[test]
fn shipped_tables_carry_their_code_set_name() {
    assert_eq!(EBCDIC_KANA.name(), "EBCDIC-KANA");
    assert!(ENCODINGS.iter().all(|&(name, table)| table.name() == name));
}

#[test]
fn unknown_names_are_not_found() {
    assert_eq!(by_name("EBCDIC"), None);
    assert_eq!(by_name(""), None);
    assert_eq!(ENCODINGS.len(), 1);
}

#[rstest]
#[case(Status::Complete, Ok(()), false)]
#[case(Status::DestinationFull, Err(TransformError::DestinationFull), true)]
#[case(Status::SourceIncomplete, Err(TransformError::SourceIncomplete), true)]
#[case(
    Status::Unsupported(RepertoireError(0x3F)),
    Err(TransformError::Repertoire(RepertoireError(0x3F))),
    false
)]
fn statuses_convert_to_results(
    #[case] status: Status,
    #[case] result: Result<(), TransformError>,
    #[case] resumable: bool,
) {
    assert_eq!(status.into_result(), result);
    assert_eq!(status.is_resumable(), resumable);
}

#[test]
fn tables_and_transforms_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CodecTable>();
    assert_send_sync::<crate::Decoder<'static>>();
    assert_send_sync::<crate::Encoder<'static>>();
}
