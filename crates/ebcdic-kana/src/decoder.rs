use crate::{CodecTable, Status, Transform, Transformed};

/// Decodes EBCDIC-Kana bytes to UTF-8.
///
/// Every byte has a mapping (unassigned bytes produce U+FFFD), so decoding
/// only ever stops early for lack of room in the destination.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'t> {
    table: &'t CodecTable,
}

impl<'t> Decoder<'t> {
    /// Creates a decoder over `table`.
    #[must_use]
    pub const fn new(table: &'t CodecTable) -> Self {
        Self { table }
    }

    /// The table this decoder reads.
    #[must_use]
    pub const fn table(&self) -> &'t CodecTable {
        self.table
    }
}

impl Transform for Decoder<'_> {
    fn transform(&self, dst: &mut [u8], src: &[u8], _at_end: bool) -> Transformed {
        let mut written = 0;
        for (consumed, &b) in src.iter().enumerate() {
            if self.table.ascii_superset && b.is_ascii() {
                let Some(slot) = dst.get_mut(written) else {
                    return Transformed::new(written, consumed, Status::DestinationFull);
                };
                *slot = b;
                written += 1;
                continue;
            }

            let bytes = self.table.utf8_of(b).as_bytes();
            let Some(out) = dst.get_mut(written..written + bytes.len()) else {
                return Transformed::new(written, consumed, Status::DestinationFull);
            };
            out.copy_from_slice(bytes);
            written += bytes.len();
        }
        Transformed::new(written, src.len(), Status::Complete)
    }
}
