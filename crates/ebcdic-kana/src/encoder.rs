use crate::{CodecTable, Status, Transform, Transformed};

/// Encodes UTF-8 to EBCDIC-Kana bytes.
///
/// Input that is not valid UTF-8, and characters outside the repertoire, stop
/// the call with [`Status::Unsupported`] carrying the table's replacement
/// byte. The offending bytes are left unconsumed.
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'t> {
    table: &'t CodecTable,
}

impl<'t> Encoder<'t> {
    /// Creates an encoder over `table`.
    #[must_use]
    pub const fn new(table: &'t CodecTable) -> Self {
        Self { table }
    }

    /// The table this encoder reads.
    #[must_use]
    pub const fn table(&self) -> &'t CodecTable {
        self.table
    }
}

impl Transform for Encoder<'_> {
    fn transform(&self, dst: &mut [u8], src: &[u8], at_end: bool) -> Transformed {
        let table = self.table;
        let mut written = 0;
        let mut consumed = 0;

        while consumed < src.len() {
            let rest = &src[consumed..];
            let (byte, size) = if table.ascii_superset && rest[0].is_ascii() {
                (rest[0], 1)
            } else {
                let (ch, size) = bstr::decode_utf8(rest);
                let Some(ch) = ch else {
                    let status = if !at_end && ends_mid_sequence(rest, size) {
                        Status::SourceIncomplete
                    } else {
                        Status::Unsupported(table.repertoire_error())
                    };
                    return Transformed::new(written, consumed, status);
                };
                let Some(byte) = table.lookup(ch) else {
                    let status = Status::Unsupported(table.repertoire_error());
                    return Transformed::new(written, consumed, status);
                };
                (byte, size)
            };

            let Some(slot) = dst.get_mut(written) else {
                return Transformed::new(written, consumed, Status::DestinationFull);
            };
            *slot = byte;
            written += 1;
            consumed += size;
        }

        Transformed::new(written, consumed, Status::Complete)
    }
}

/// Whether `rest` is a valid but unfinished UTF-8 sequence, given the length
/// of the invalid prefix `bstr::decode_utf8` reported for it.
fn ends_mid_sequence(rest: &[u8], invalid_len: usize) -> bool {
    invalid_len == rest.len() && matches!(rest[0], 0xC2..=0xF4)
}
