//! Whole-buffer conversions on top of [`Transform`].

use alloc::{string::String, vec::Vec};

use crate::{CodecTable, EncodeError, Status, Transform, Transformed};

/// Size of the stack buffer [`transform_to_vec`] drains through.
const SCRATCH_LEN: usize = 1024;

/// Runs `transform` over all of `src` (as the final chunk) and appends the
/// output to `out`.
///
/// Returns the totals over every internal call; `status` is never
/// [`Status::DestinationFull`]. On [`Status::Unsupported`] the output of
/// everything before the offending unit has been appended and `consumed` is
/// its offset in `src`.
pub fn transform_to_vec<T>(transform: &T, src: &[u8], out: &mut Vec<u8>) -> Transformed
where
    T: Transform + ?Sized,
{
    let mut scratch = [0u8; SCRATCH_LEN];
    let mut written = 0;
    let mut consumed = 0;
    loop {
        let res = transform.transform(&mut scratch, &src[consumed..], true);
        out.extend_from_slice(&scratch[..res.written]);
        written += res.written;
        consumed += res.consumed;
        if res.status != Status::DestinationFull {
            return Transformed::new(written, consumed, res.status);
        }
    }
}

impl CodecTable {
    /// Decodes a whole buffer. Unassigned bytes become U+FFFD.
    #[must_use]
    pub fn decode_to_string(&self, src: &[u8]) -> String {
        let mut s = String::with_capacity(src.len());
        s.extend(src.iter().map(|&b| self.decode_byte(b)));
        s
    }

    /// Encodes a whole string.
    ///
    /// # Errors
    ///
    /// The first character outside the repertoire, with its byte offset in
    /// `src`.
    pub fn encode_to_vec(&self, src: &str) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::with_capacity(src.len());
        let res = transform_to_vec(&self.encoder(), src.as_bytes(), &mut out);
        match res.status {
            Status::Unsupported(source) => Err(EncodeError {
                position: res.consumed,
                source,
            }),
            _ => Ok(out),
        }
    }

    /// Encodes arbitrary bytes, writing the replacement byte for every
    /// character outside the repertoire and for every maximal invalid UTF-8
    /// subsequence.
    #[must_use]
    pub fn encode_lossy(&self, mut src: &[u8]) -> Vec<u8> {
        let encoder = self.encoder();
        let mut out = Vec::with_capacity(src.len());
        loop {
            let res = transform_to_vec(&encoder, src, &mut out);
            src = &src[res.consumed..];
            let Status::Unsupported(err) = res.status else {
                return out;
            };
            out.push(err.replacement());
            let (_, skip) = bstr::decode_utf8(src);
            src = &src[skip.max(1)..];
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use rstest::rstest;

    use super::*;
    use crate::{EBCDIC_KANA, RepertoireError};

    #[test]
    fn transform_to_vec_crosses_scratch_boundaries() {
        // 1000 three-byte kana overflow the scratch buffer several times.
        let src = vec![0x91u8; 1000];
        let mut out = Vec::new();
        let res = transform_to_vec(&EBCDIC_KANA.decoder(), &src, &mut out);
        assert_eq!(res, Transformed::new(3000, 1000, Status::Complete));
        assert_eq!(out.len(), 3000);
        assert!(out.chunks(3).all(|c| c == "\u{FF71}".as_bytes()));
    }

    #[test]
    fn decode_to_string_maps_every_byte() {
        let s = EBCDIC_KANA.decode_to_string(b"\xC8\x45\x53\x53\x56\x40\x96\xC5\x80");
        assert_eq!(s, "Hello \u{FF76}E\u{FFFD}");
    }

    #[test]
    fn encode_to_vec_reports_the_offset_of_the_first_miss() {
        assert_eq!(
            EBCDIC_KANA.encode_to_vec("\u{FF71}b"),
            Ok(vec![0x91, 0x42])
        );
        assert_eq!(
            EBCDIC_KANA.encode_to_vec("ab\u{3042}c"),
            Err(EncodeError {
                position: 2,
                source: RepertoireError(0x3F)
            })
        );
    }

    #[rstest]
    #[case::clean(b"ab", b"\x41\x42")]
    #[case::out_of_repertoire("a\u{3042}b".as_bytes(), b"\x41\x3F\x42")]
    #[case::invalid_lead(b"a\xFFb", b"\x41\x3F\x42")]
    #[case::maximal_subpart(b"a\xE3\x81b", b"\x41\x3F\x42")]
    #[case::two_bad_bytes(b"\x80\x80", b"\x3F\x3F")]
    #[case::truncated_at_end(b"a\xEF\xBD", b"\x41\x3F")]
    fn encode_lossy_replaces_each_bad_unit_once(#[case] src: &[u8], #[case] expected: &[u8]) {
        assert_eq!(EBCDIC_KANA.encode_lossy(src), expected);
    }
}
