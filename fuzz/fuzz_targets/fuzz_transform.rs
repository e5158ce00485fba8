#![no_main]
use arbitrary::Arbitrary;
use ebcdic_kana::{EBCDIC_KANA, Status, Transform, transform_to_vec};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    encode: bool,
    room: u8,
    splits: Vec<u8>,
    data: Vec<u8>,
}

/// Streams `data` through `transform` in the chunk sizes given by `splits`
/// with a destination of `room` bytes, checking every call as it goes.
fn stream<T: Transform>(transform: &T, data: &[u8], splits: &[u8], room: usize) -> (Vec<u8>, Status) {
    let mut out = Vec::new();
    let mut dst = vec![0u8; room];
    let mut carry = Vec::new();
    let mut rest = data;
    let mut splits = splits.iter();

    loop {
        let take = splits
            .next()
            .map_or(rest.len(), |&s| usize::from(s).min(rest.len()));
        carry.extend_from_slice(&rest[..take]);
        rest = &rest[take..];
        let at_end = rest.is_empty();

        let mut consumed = 0;
        loop {
            let res = transform.transform(&mut dst, &carry[consumed..], at_end);
            assert!(res.written <= dst.len());
            assert!(res.consumed <= carry.len() - consumed);
            out.extend_from_slice(&dst[..res.written]);
            consumed += res.consumed;
            match res.status {
                Status::DestinationFull => assert!(res.consumed > 0, "no progress with {room} bytes of room"),
                Status::Complete => {
                    assert_eq!(consumed, carry.len());
                    break;
                }
                Status::SourceIncomplete => {
                    assert!(!at_end);
                    assert!(carry.len() - consumed < 4);
                    break;
                }
                status @ Status::Unsupported(_) => return (out, status),
            }
        }
        carry.drain(..consumed);
        if at_end {
            return (out, Status::Complete);
        }
    }
}

fuzz_target!(|input: Input| {
    let mut whole = Vec::new();
    if input.encode {
        let room = 1 + usize::from(input.room);
        let encoder = EBCDIC_KANA.encoder();
        let expected = transform_to_vec(&encoder, &input.data, &mut whole);
        let (out, status) = stream(&encoder, &input.data, &input.splits, room);
        assert_eq!(out, whole);
        assert_eq!(status, expected.status);

        // Encoder output is canonical, so it survives a decode and re-encode.
        let text = EBCDIC_KANA.decode_to_string(&out);
        assert_eq!(EBCDIC_KANA.encode_to_vec(&text).as_ref(), Ok(&out));
    } else {
        let room = 3 + usize::from(input.room);
        let decoder = EBCDIC_KANA.decoder();
        let expected = transform_to_vec(&decoder, &input.data, &mut whole);
        let (out, status) = stream(&decoder, &input.data, &input.splits, room);
        assert_eq!(status, Status::Complete);
        assert_eq!(expected.status, Status::Complete);
        assert_eq!(out, whole);
        assert!(std::str::from_utf8(&out).is_ok());
    }
});
