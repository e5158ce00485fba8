//! ICU UCM mapping files.
//!
//! Only what a single-byte table needs is read: the `<code_set_name>` and
//! `<subchar>` header entries and the `<UXXXX> \xNN |F` lines of the
//! `CHARMAP` section. Charmap lines in any other shape (multi-byte sequences,
//! comments after the precision flag) are skipped.

use std::collections::HashMap;

use ebcdic_kana::{CodecTable, TableError};
use thiserror::Error;
use tracing::{debug, trace};

/// Fewer assignments than this almost certainly means the file is not a
/// single-byte code page.
pub const MIN_CHARACTERS: usize = 128;

/// A parsed and validated mapping file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ucm {
    /// Where the mapping came from, as given to [`Ucm::parse`].
    pub file: String,
    /// The `<code_set_name>`, e.g. `EBCDIC-KANA`.
    pub code_set_name: String,
    /// The `<subchar>` byte.
    pub subchar: u8,
    /// Scalar value per byte; U+FFFD for unassigned bytes.
    pub mapping: [char; 256],
    /// Number of bytes assigned by the file.
    pub characters: usize,
}

/// A mapping file that cannot be turned into a table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{file}:{line}: {kind}")]
pub struct UcmError {
    /// The file, as given to [`Ucm::parse`].
    pub file: String,
    /// 1-based line of the offending entry; the last line for problems found
    /// at the end of the file.
    pub line: usize,
    /// What is wrong.
    pub kind: ErrorKind,
}

/// The kinds of [`UcmError`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The name is not a non-empty quoted string.
    #[error("malformed <code_set_name> {0}")]
    BadCodeSetName(String),
    /// The substitution character is not a `\xNN` byte.
    #[error("malformed <subchar> {0}")]
    BadSubchar(String),
    /// The header has no `<code_set_name>`.
    #[error("missing <code_set_name>")]
    MissingCodeSetName,
    /// The header has no `<subchar>`.
    #[error("missing <subchar>")]
    MissingSubchar,
    /// A surrogate or a value above U+10FFFF.
    #[error("<U{0:04X}> is not a Unicode scalar value")]
    InvalidScalar(u32),
    /// A second round-trip assignment for a scalar value.
    #[error("U+{scalar:04X} is already mapped to \\x{byte:02X}")]
    DuplicateScalar {
        /// The scalar value.
        scalar: u32,
        /// The byte of the first assignment.
        byte: u8,
    },
    /// A second assignment for a byte.
    #[error("\\x{byte:02X} is already mapped to U+{scalar:04X}")]
    DuplicateByte {
        /// The byte.
        byte: u8,
        /// The scalar value of the first assignment.
        scalar: u32,
    },
    /// Fewer than [`MIN_CHARACTERS`] bytes are assigned.
    #[error("only {0} characters found (wrong page format?)")]
    TooFewCharacters(usize),
}

/// The precision indicator after `|` on a charmap line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Precision {
    /// `|0`: both directions.
    RoundTrip,
    /// `|1`: Unicode to bytes only.
    Fallback,
    /// `|2`: maps to `<subchar1>`.
    Subchar1,
    /// `|3`: bytes to Unicode only.
    ReverseFallback,
}

impl Precision {
    fn from_flag(flag: u8) -> Option<Self> {
        Some(match flag {
            0 => Self::RoundTrip,
            1 => Self::Fallback,
            2 => Self::Subchar1,
            3 => Self::ReverseFallback,
            _ => return None,
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    Charmap,
}

impl Ucm {
    /// Parses and validates `text`. `file` only labels errors and the
    /// generated code.
    ///
    /// # Errors
    ///
    /// A byte assigned twice, a scalar value assigned round-trip from two
    /// bytes, fewer than [`MIN_CHARACTERS`] assignments, or a missing or
    /// malformed header entry.
    pub fn parse(file: &str, text: &str) -> Result<Self, UcmError> {
        let err = |line: usize, kind: ErrorKind| UcmError {
            file: file.to_owned(),
            line,
            kind,
        };

        let mut code_set_name = None;
        let mut subchar = None;
        let mut mapping = ['\u{FFFD}'; 256];
        let mut assigned = [false; 256];
        let mut round_trip: HashMap<char, u8> = HashMap::new();
        let mut characters = 0;
        let mut section = Section::Header;
        let mut last_line = 0;

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            last_line = line;
            let s = raw.trim();
            if s.is_empty() || s.starts_with('#') {
                continue;
            }

            match section {
                Section::Header => {
                    if s == "CHARMAP" {
                        section = Section::Charmap;
                        continue;
                    }
                    let Some((key, value)) = header_entry(s) else {
                        continue;
                    };
                    match key {
                        "code_set_name" => {
                            let name = unquote(value)
                                .ok_or_else(|| err(line, ErrorKind::BadCodeSetName(value.into())))?;
                            code_set_name = Some(name.to_owned());
                        }
                        "subchar" => {
                            let byte = unescape_byte(value)
                                .ok_or_else(|| err(line, ErrorKind::BadSubchar(value.into())))?;
                            subchar = Some(byte);
                        }
                        _ => trace!(key, "ignoring header entry"),
                    }
                }
                Section::Charmap => {
                    if s == "END CHARMAP" {
                        break;
                    }
                    let Some((scalar, byte, precision)) = charmap_entry(s) else {
                        debug!(line, "skipping charmap line");
                        continue;
                    };
                    let ch = char::from_u32(scalar)
                        .ok_or_else(|| err(line, ErrorKind::InvalidScalar(scalar)))?;

                    match precision {
                        Precision::Fallback | Precision::Subchar1 => {
                            debug!(line, ?precision, "ignoring one-way mapping to bytes");
                            continue;
                        }
                        Precision::RoundTrip => {
                            if let Some(&prev) = round_trip.get(&ch) {
                                return Err(err(
                                    line,
                                    ErrorKind::DuplicateScalar { scalar, byte: prev },
                                ));
                            }
                            round_trip.insert(ch, byte);
                        }
                        Precision::ReverseFallback => {}
                    }

                    let slot = usize::from(byte);
                    if assigned[slot] {
                        return Err(err(
                            line,
                            ErrorKind::DuplicateByte {
                                byte,
                                scalar: u32::from(mapping[slot]),
                            },
                        ));
                    }
                    assigned[slot] = true;
                    mapping[slot] = ch;
                    characters += 1;
                }
            }
        }

        let code_set_name =
            code_set_name.ok_or_else(|| err(last_line, ErrorKind::MissingCodeSetName))?;
        let subchar = subchar.ok_or_else(|| err(last_line, ErrorKind::MissingSubchar))?;
        if characters < MIN_CHARACTERS {
            return Err(err(last_line, ErrorKind::TooFewCharacters(characters)));
        }
        debug!(file, %code_set_name, characters, "parsed mapping");

        Ok(Self {
            file: file.to_owned(),
            code_set_name,
            subchar,
            mapping,
            characters,
        })
    }

    /// Builds the codec tables for this mapping.
    ///
    /// # Errors
    ///
    /// See [`CodecTable::build`].
    pub fn table(&self) -> Result<CodecTable, TableError> {
        CodecTable::build(self.subchar, &self.mapping)
    }

    /// The Rust identifier of the generated table: `EBCDIC-KANA` becomes
    /// `EBCDIC_KANA`.
    #[must_use]
    pub fn ident(&self) -> String {
        let mut ident: String = self
            .code_set_name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();
        if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
            ident.insert(0, '_');
        }
        ident
    }

    /// The assigned bytes and their scalar values, in byte order.
    pub fn assignments(&self) -> impl Iterator<Item = (u8, char)> + '_ {
        (0u8..=0xFF)
            .zip(self.mapping.iter().copied())
            .filter(|&(_, c)| c != '\u{FFFD}')
    }
}

/// Splits `<key> value` into `("key", "value")`; the value is the first
/// whitespace-delimited token.
fn header_entry(s: &str) -> Option<(&str, &str)> {
    let (key, rest) = s.strip_prefix('<')?.split_once('>')?;
    let value = rest.split_whitespace().next()?;
    Some((key, value))
}

fn unquote(s: &str) -> Option<&str> {
    let inner = s.strip_prefix('"')?.strip_suffix('"')?;
    (!inner.is_empty() && !inner.contains(['"', '\\'])).then_some(inner)
}

/// The first byte of a `\xNN` escape sequence.
fn unescape_byte(s: &str) -> Option<u8> {
    let hex = s.strip_prefix("\\x")?;
    u8::from_str_radix(hex.get(..2)?, 16).ok()
}

/// Parses `<UXXXX> \xNN |F`, ignoring a `#` comment and anything after the
/// flag.
fn charmap_entry(s: &str) -> Option<(u32, u8, Precision)> {
    let s = s.split_once('#').map_or(s, |(entry, _)| entry);
    let (scalar, rest) = s.strip_prefix("<U")?.split_once('>')?;
    let scalar = u32::from_str_radix(scalar, 16).ok()?;
    let (byte, rest) = rest.trim_start().strip_prefix("\\x")?.split_once(char::is_whitespace)?;
    let byte = u8::from_str_radix(byte, 16).ok()?;
    let flag = rest.trim_start().strip_prefix('|')?.split_whitespace().next()?.parse().ok()?;
    Some((scalar, byte, Precision::from_flag(flag)?))
}

#[cfg(test)]
mod tests {
    use std::fmt::Write;

    use rstest::rstest;

    use super::*;

    const SHIPPED: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../ebcdic-kana/charmap/ebcdic-kana.ucm"
    ));

    /// A header plus round-trip assignments of bytes 0x00..0x80 to
    /// U+0100..U+0180, followed by `extra` charmap lines.
    fn fixture(extra: &str) -> String {
        let mut text = String::from("<code_set_name> \"TEST\"\n<subchar> \\x3F\nCHARMAP\n");
        for b in 0..0x80u32 {
            writeln!(text, "<U{:04X}> \\x{b:02X} |0", 0x100 + b).unwrap();
        }
        text.push_str(extra);
        text.push_str("END CHARMAP\n");
        text
    }

    #[test]
    fn parses_the_shipped_mapping() {
        let ucm = Ucm::parse("ebcdic-kana.ucm", SHIPPED).unwrap();
        assert_eq!(ucm.code_set_name, "EBCDIC-KANA");
        assert_eq!(ucm.ident(), "EBCDIC_KANA");
        assert_eq!(ucm.subchar, 0x3F);
        assert_eq!(ucm.characters, 231);
        assert_eq!(ucm.mapping[0x42], 'b');
        assert_eq!(ucm.mapping[0xC0], '{');
        assert_eq!(ucm.mapping[0x80], '\u{FFFD}');
        assert_eq!(ucm.assignments().count(), 231);
    }

    #[test]
    fn reverse_fallbacks_may_repeat_a_scalar() {
        let ucm = Ucm::parse("t.ucm", &fixture("<U0100> \\x80 |3\n")).unwrap();
        assert_eq!(ucm.mapping[0x80], '\u{100}');
        assert_eq!(ucm.characters, 129);
    }

    #[test]
    fn one_way_mappings_to_bytes_are_ignored() {
        let ucm = Ucm::parse("t.ucm", &fixture("<U00A0> \\x00 |1\n<U00A1> \\x3F |2\n")).unwrap();
        assert_eq!(ucm.mapping[0x00], '\u{100}');
        assert_eq!(ucm.characters, 128);
    }

    #[test]
    fn unparsable_charmap_lines_are_skipped() {
        let extra = "<U3000> \\x0E\\x40\\x40 |0\n<U00A2> \\x81\ngarbage\n";
        let ucm = Ucm::parse("t.ucm", &fixture(extra)).unwrap();
        assert_eq!(ucm.characters, 128);
    }

    #[rstest]
    #[case::comment("<U00A2> \\x80 |0 # cent sign\n")]
    #[case::comment_without_space("<U00A2> \\x80 |0#cent sign\n")]
    #[case::trailing_space("<U00A2> \\x80 |0  \n")]
    #[case::trailing_fields("<U00A2> \\x80 |0 extra\n")]
    fn trailing_text_does_not_hide_an_entry(#[case] extra: &str) {
        let ucm = Ucm::parse("t.ucm", &fixture(extra)).unwrap();
        assert_eq!(ucm.mapping[0x80], '\u{A2}');
        assert_eq!(ucm.characters, 129);
    }

    #[rstest]
    #[case::duplicate_scalar(
        "<U0100> \\x80 |0\n",
        132,
        ErrorKind::DuplicateScalar { scalar: 0x100, byte: 0x00 }
    )]
    #[case::duplicate_byte(
        "<U00A2> \\x00 |0\n",
        132,
        ErrorKind::DuplicateByte { byte: 0x00, scalar: 0x100 }
    )]
    #[case::duplicate_byte_by_fallback(
        "<U00A2> \\x7F |3\n",
        132,
        ErrorKind::DuplicateByte { byte: 0x7F, scalar: 0x17F }
    )]
    #[case::surrogate("<UD800> \\x80 |0\n", 132, ErrorKind::InvalidScalar(0xD800))]
    fn rejects_bad_assignments(#[case] extra: &str, #[case] line: usize, #[case] kind: ErrorKind) {
        let err = Ucm::parse("t.ucm", &fixture(extra)).unwrap_err();
        assert_eq!(
            err,
            UcmError {
                file: "t.ucm".into(),
                line,
                kind
            }
        );
    }

    #[test]
    fn rejects_short_pages() {
        let text = "<code_set_name> \"TEST\"\n<subchar> \\x3F\nCHARMAP\n<U0041> \\xC1 |0\nEND CHARMAP\n";
        let err = Ucm::parse("short.ucm", text).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TooFewCharacters(1));
        assert_eq!(err.line, 5);
        assert_eq!(
            err.to_string(),
            "short.ucm:5: only 1 characters found (wrong page format?)"
        );
    }

    #[rstest]
    #[case::missing_name("<subchar> \\x3F\n", ErrorKind::MissingCodeSetName)]
    #[case::missing_subchar("<code_set_name> \"TEST\"\n", ErrorKind::MissingSubchar)]
    #[case::unquoted_name("<code_set_name> TEST\n", ErrorKind::BadCodeSetName("TEST".into()))]
    #[case::bad_subchar("<code_set_name> \"TEST\"\n<subchar> 3F\n", ErrorKind::BadSubchar("3F".into()))]
    fn rejects_bad_headers(#[case] header: &str, #[case] kind: ErrorKind) {
        let text = fixture("").replace("<code_set_name> \"TEST\"\n<subchar> \\x3F\n", header);
        assert_eq!(Ucm::parse("t.ucm", &text).unwrap_err().kind, kind);
    }

    #[rstest]
    #[case("EBCDIC-KANA", "EBCDIC_KANA")]
    #[case("ibm-290_P100-1995", "IBM_290_P100_1995")]
    #[case("1027", "_1027")]
    fn identifiers_are_screaming_snake_case(#[case] name: &str, #[case] ident: &str) {
        let mut ucm = Ucm::parse("ebcdic-kana.ucm", SHIPPED).unwrap();
        ucm.code_set_name = name.into();
        assert_eq!(ucm.ident(), ident);
    }
}
