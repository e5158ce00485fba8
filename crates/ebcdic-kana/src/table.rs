use core::{char::REPLACEMENT_CHARACTER, fmt};

use crate::{Decoder, Encoder, RepertoireError, TableError};

/// Mask of the scalar field of an [`EncodeEntry`].
const SCALAR_MASK: u32 = (1 << 24) - 1;

/// The UTF-8 form of a decode table entry: one to three bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Utf8Enc {
    len: u8,
    data: [u8; 3],
}

impl Utf8Enc {
    /// Wraps `len` leading bytes of `data`. Unused trailing bytes are zero in
    /// generated tables.
    ///
    /// # Panics
    ///
    /// Panics (at compile time for `const` tables) if `len` is not 1, 2 or 3.
    #[must_use]
    pub const fn new(len: u8, data: [u8; 3]) -> Self {
        assert!(len >= 1 && len <= 3, "a short encoding is 1 to 3 bytes");
        Self { len, data }
    }

    /// Encodes `c`, or returns `None` when it needs four bytes.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let mut data = [0u8; 4];
        let len = u8::try_from(c.encode_utf8(&mut data).len()).ok()?;
        if len > 3 {
            return None;
        }
        Some(Self {
            len,
            data: [data[0], data[1], data[2]],
        })
    }

    /// The encoded bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..usize::from(self.len)]
    }

    /// Number of encoded bytes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always `false`; present for symmetry with [`len`](Self::len).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Reassembles the scalar value from the stored bytes.
    #[must_use]
    pub fn scalar(&self) -> char {
        let [b0, b1, b2] = self.data.map(u32::from);
        let v = match self.len {
            1 => b0,
            2 => (b0 & 0x1F) << 6 | (b1 & 0x3F),
            _ => (b0 & 0x0F) << 12 | (b1 & 0x3F) << 6 | (b2 & 0x3F),
        };
        char::from_u32(v).unwrap_or(REPLACEMENT_CHARACTER)
    }
}

impl fmt::Debug for Utf8Enc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Utf8Enc({:?})", bstr::BStr::new(self.as_bytes()))
    }
}

/// A packed encode table entry: the legacy byte in the top 8 bits, the scalar
/// value in the low 24.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodeEntry(u32);

impl EncodeEntry {
    /// Packs `byte` and `scalar`.
    #[must_use]
    pub const fn new(byte: u8, scalar: char) -> Self {
        Self((byte as u32) << 24 | scalar as u32)
    }

    /// Wraps an already packed word.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The packed word.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The legacy byte.
    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The scalar value.
    #[inline]
    #[must_use]
    pub const fn scalar(self) -> u32 {
        self.0 & SCALAR_MASK
    }
}

impl fmt::Debug for EncodeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodeEntry(\\x{:02X} U+{:04X})", self.byte(), self.scalar())
    }
}

/// The immutable lookup tables of one single-byte encoding.
///
/// `decode` maps every byte to the UTF-8 form of its scalar value (U+FFFD for
/// unassigned bytes). `encode` lists one entry per distinct scalar value,
/// sorted by scalar value and padded to 256 entries by repeating the last real
/// entry; lookups binary-search `encode[low..]`.
///
/// For ASCII supersets (bytes below 0x80 are the identical ASCII characters)
/// `low` is 0x80 and both directions skip the tables for ASCII.
#[derive(Clone, PartialEq, Eq)]
pub struct CodecTable {
    pub(crate) name: &'static str,
    pub(crate) ascii_superset: bool,
    pub(crate) low: u8,
    pub(crate) replacement: u8,
    pub(crate) decode: [Utf8Enc; 256],
    pub(crate) encode: [EncodeEntry; 256],
}

impl CodecTable {
    /// Builds the tables for `mapping`, where `mapping[b]` is the scalar value
    /// of byte `b` and U+FFFD marks an unassigned byte.
    ///
    /// When several bytes map to one scalar value, the lowest byte is the one
    /// the encoder produces.
    ///
    /// # Errors
    ///
    /// [`TableError::ScalarTooWide`] for a scalar outside the Basic
    /// Multilingual Plane, [`TableError::Empty`] if every byte is unassigned.
    ///
    /// The table is unnamed; see [`with_name`](Self::with_name).
    pub fn build(replacement: u8, mapping: &[char; 256]) -> Result<Self, TableError> {
        let ascii_superset = mapping[..0x80]
            .iter()
            .enumerate()
            .all(|(i, &c)| u32::from(c) == i as u32);
        let low = if ascii_superset { 0x80 } else { 0x00 };

        let mut decode = [Utf8Enc::new(1, [0; 3]); 256];
        for (byte, (slot, &c)) in (0u8..=0xFF).zip(decode.iter_mut().zip(mapping)) {
            *slot = Utf8Enc::from_char(c).ok_or(TableError::ScalarTooWide { byte, scalar: c })?;
        }

        // Sort by (scalar, byte) so the lowest byte of each scalar comes first,
        // then keep that one.
        let mut entries = [EncodeEntry(0); 256];
        for (byte, (slot, &c)) in (0u8..=0xFF).zip(entries.iter_mut().zip(mapping)) {
            *slot = EncodeEntry::new(byte, c);
        }
        entries.sort_unstable_by_key(|e| (e.scalar(), e.byte()));

        let mut encode = [EncodeEntry(0); 256];
        let mut n = 0;
        for e in entries {
            if e.scalar() == u32::from(REPLACEMENT_CHARACTER) {
                continue;
            }
            if n > 0 && encode[n - 1].scalar() == e.scalar() {
                continue;
            }
            encode[n] = e;
            n += 1;
        }
        if n == 0 {
            return Err(TableError::Empty);
        }
        let last = encode[n - 1];
        encode[n..].fill(last);

        Ok(Self {
            name: "",
            ascii_superset,
            low,
            replacement,
            decode,
            encode,
        })
    }

    /// Returns a decoder (EBCDIC-Kana to UTF-8) over this table.
    #[must_use]
    pub const fn decoder(&self) -> Decoder<'_> {
        Decoder::new(self)
    }

    /// Returns an encoder (UTF-8 to EBCDIC-Kana) over this table.
    #[must_use]
    pub const fn encoder(&self) -> Encoder<'_> {
        Encoder::new(self)
    }

    /// Sets the code set name.
    #[must_use]
    pub const fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// The code set name, e.g. `EBCDIC-KANA`. Empty for a table from
    /// [`build`](Self::build) that was never named.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether bytes below 0x80 are plain ASCII.
    #[must_use]
    pub const fn is_ascii_superset(&self) -> bool {
        self.ascii_superset
    }

    /// The first byte that goes through the tables: 0x80 for ASCII supersets,
    /// 0x00 otherwise.
    #[must_use]
    pub const fn low(&self) -> u8 {
        self.low
    }

    /// The substitute byte reported for characters outside the repertoire.
    #[must_use]
    pub const fn replacement(&self) -> u8 {
        self.replacement
    }

    /// The 256 decode entries, indexed by byte.
    #[must_use]
    pub const fn decode_entries(&self) -> &[Utf8Enc; 256] {
        &self.decode
    }

    /// The 256 encode entries, sorted by scalar value, padded at the tail.
    #[must_use]
    pub const fn encode_entries(&self) -> &[EncodeEntry; 256] {
        &self.encode
    }

    /// The short encoding written for byte `b`.
    #[inline]
    pub(crate) fn utf8_of(&self, b: u8) -> &Utf8Enc {
        &self.decode[usize::from(b)]
    }

    /// Decodes one byte. Unassigned bytes decode to U+FFFD.
    #[inline]
    #[must_use]
    pub fn decode_byte(&self, b: u8) -> char {
        if self.ascii_superset && b.is_ascii() {
            return char::from(b);
        }
        self.utf8_of(b).scalar()
    }

    /// Whether byte `b` is assigned, i.e. does not decode to U+FFFD.
    #[must_use]
    pub fn is_mapped(&self, b: u8) -> bool {
        self.decode_byte(b) != REPLACEMENT_CHARACTER
    }

    /// Encodes one character: `(byte, true)` if `c` is in the repertoire,
    /// `(replacement, false)` otherwise.
    #[inline]
    #[must_use]
    pub fn encode_char(&self, c: char) -> (u8, bool) {
        match self.lookup(c) {
            Some(b) => (b, true),
            None => (self.replacement, false),
        }
    }

    /// Encodes one character, reporting a miss as [`RepertoireError`].
    ///
    /// # Errors
    ///
    /// When `c` has no byte in this encoding.
    #[inline]
    pub fn try_encode_char(&self, c: char) -> Result<u8, RepertoireError> {
        self.lookup(c).ok_or(RepertoireError(self.replacement))
    }

    #[inline]
    pub(crate) fn lookup(&self, c: char) -> Option<u8> {
        if self.ascii_superset && c.is_ascii() {
            return Some(c as u8);
        }
        let key = u32::from(c);
        // Pad entries repeat the last real entry, so a hit on one of them
        // yields the same byte as the real entry would.
        self.encode[usize::from(self.low)..]
            .binary_search_by(|e| e.scalar().cmp(&key))
            .ok()
            .map(|i| self.encode[usize::from(self.low) + i].byte())
    }

    /// Builds the repertoire error this table reports.
    pub(crate) const fn repertoire_error(&self) -> RepertoireError {
        RepertoireError(self.replacement)
    }
}

/// Looks up a shipped table by its code set name, ignoring ASCII case.
///
/// ```rust
/// assert!(ebcdic_kana::by_name("ebcdic-kana").is_some());
/// assert!(ebcdic_kana::by_name("EBCDIC-KANA-EXT").is_none());
/// ```
#[must_use]
pub fn by_name(name: &str) -> Option<&'static CodecTable> {
    crate::ENCODINGS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, table)| table)
}

impl fmt::Debug for CodecTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecTable")
            .field("name", &self.name)
            .field("ascii_superset", &self.ascii_superset)
            .field("low", &format_args!("{:#04X}", self.low))
            .field("replacement", &format_args!("{:#04X}", self.replacement))
            .finish_non_exhaustive()
    }
}

impl fmt::Display for CodecTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::ToString};

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case('A', 1, [0x41, 0, 0])]
    #[case('\u{A5}', 2, [0xC2, 0xA5, 0])]
    #[case('\u{203E}', 3, [0xE2, 0x80, 0xBE])]
    #[case('\u{FF9F}', 3, [0xEF, 0xBE, 0x9F])]
    fn short_encoding_reassembles_scalar(#[case] c: char, #[case] len: u8, #[case] data: [u8; 3]) {
        let enc = Utf8Enc::from_char(c).unwrap();
        assert_eq!(enc, Utf8Enc::new(len, data));
        assert_eq!(enc.scalar(), c);
        assert_eq!(enc.as_bytes(), c.encode_utf8(&mut [0; 4]).as_bytes());
    }

    #[test]
    fn four_byte_scalars_have_no_short_encoding() {
        assert_eq!(Utf8Enc::from_char('\u{1F600}'), None);
    }

    #[test]
    fn encode_entry_packs_byte_and_scalar() {
        let e = EncodeEntry::new(0x91, '\u{FF71}');
        assert_eq!(e.raw(), 0x9100_FF71);
        assert_eq!(e.byte(), 0x91);
        assert_eq!(e.scalar(), 0xFF71);
        assert_eq!(EncodeEntry::from_raw(e.raw()), e);
    }

    #[test]
    fn build_rejects_wide_scalars() {
        let mut mapping = [REPLACEMENT_CHARACTER; 256];
        mapping[0x10] = 'x';
        mapping[0x20] = '\u{1F600}';
        assert_eq!(
            CodecTable::build(0x3F, &mapping),
            Err(TableError::ScalarTooWide {
                byte: 0x20,
                scalar: '\u{1F600}'
            })
        );
    }

    #[test]
    fn build_rejects_empty_mapping() {
        let mapping = [REPLACEMENT_CHARACTER; 256];
        assert_eq!(CodecTable::build(0x3F, &mapping), Err(TableError::Empty));
    }

    #[test]
    fn build_pads_with_last_real_entry() {
        let mut mapping = [REPLACEMENT_CHARACTER; 256];
        mapping[0x30] = 'c';
        mapping[0x10] = 'a';
        mapping[0x20] = 'b';
        mapping[0x40] = 'a';
        let table = CodecTable::build(0x3F, &mapping).unwrap();

        assert!(!table.is_ascii_superset());
        let encode = table.encode_entries();
        assert_eq!(encode[0], EncodeEntry::new(0x10, 'a'));
        assert_eq!(encode[1], EncodeEntry::new(0x20, 'b'));
        assert_eq!(encode[2], EncodeEntry::new(0x30, 'c'));
        assert!(encode[3..].iter().all(|&e| e == encode[2]));

        assert_eq!(table.encode_char('a'), (0x10, true));
        assert_eq!(table.encode_char('c'), (0x30, true));
        assert_eq!(table.encode_char('d'), (0x3F, false));
        assert_eq!(table.encode_char('\0'), (0x3F, false));
        assert_eq!(table.decode_byte(0x40), 'a');
        assert_eq!(table.decode_byte(0x00), REPLACEMENT_CHARACTER);
        assert!(!table.is_mapped(0x00));
    }

    #[test]
    fn build_detects_ascii_superset() {
        let mut mapping = [REPLACEMENT_CHARACTER; 256];
        for (b, slot) in mapping.iter_mut().enumerate().take(0x80) {
            *slot = char::from(b as u8);
        }
        assert!(CodecTable::build(0x1A, &mapping).unwrap().is_ascii_superset());

        mapping[0x5C] = '\u{A5}';
        let table = CodecTable::build(0x1A, &mapping).unwrap();
        assert!(!table.is_ascii_superset());
        assert_eq!(table.low(), 0);
    }

    #[test]
    fn built_tables_are_unnamed_until_named() {
        let mut mapping = [REPLACEMENT_CHARACTER; 256];
        mapping[0x10] = 'a';
        let table = CodecTable::build(0x3F, &mapping).unwrap();
        assert_eq!(table.name(), "");

        let table = table.with_name("TEST");
        assert_eq!(table.name(), "TEST");
        assert_eq!(table.to_string(), "TEST");
        assert!(format!("{table:?}").starts_with("CodecTable { name: \"TEST\", "));
    }
}
