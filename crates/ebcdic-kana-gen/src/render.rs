//! Markdown code charts.
//!
//! A chart is a 16x16 grid (columns are the high nibble, rows the low
//! nibble) followed by a listing of every assigned byte. C0 controls, space
//! and DEL are drawn as their Control Pictures, C1 controls as blanks.

use std::fmt;

use crate::Ucm;

/// Renders the chart of `ucm`.
#[must_use]
pub fn markdown(ucm: &Ucm) -> String {
    Chart(ucm).to_string()
}

struct Chart<'a>(&'a Ucm);

impl fmt::Display for Chart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ucm = self.0;
        writeln!(f, "### {}", ucm.code_set_name)?;
        writeln!(f)?;

        write!(f, "|        ")?;
        for hi in 0..16 {
            write!(f, "| X'{:02X}' ", hi * 16)?;
        }
        writeln!(f, "|")?;
        write!(f, "| ------ ")?;
        for _ in 0..16 {
            write!(f, "| ----- ")?;
        }
        writeln!(f, "|")?;

        for lo in 0..16 {
            write!(f, "| +X'{lo:02X}'")?;
            for hi in 0..16 {
                let c = ucm.mapping[hi * 16 + lo];
                let shown = if c == '\u{FFFD}' { ' ' } else { picture(c) };
                write!(f, " |  `{}{shown}` ", escape(shown))?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f)?;

        writeln!(f, "| EBCDIC code | Unicode codepoint | character |")?;
        writeln!(f, "| ----------- | ----------------- | --------- |")?;
        for (byte, c) in ucm.assignments() {
            let shown = picture(c);
            writeln!(
                f,
                "| X'{byte:02X}'       | U+{:04X}            | `{}{shown}`       |",
                u32::from(c),
                escape(shown)
            )?;
        }
        writeln!(f)
    }
}

/// The glyph drawn for `c`.
fn picture(c: char) -> char {
    match u32::from(c) {
        v @ 0x00..=0x20 => char::from_u32(0x2400 + v).unwrap_or(c),
        0x7F => '\u{2421}',
        0x80..=0x9F => ' ',
        _ => c,
    }
}

/// Backticks and pipes would end the code span or the table cell.
fn escape(c: char) -> &'static str {
    if matches!(c, '`' | '|') { "\\" } else { "" }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case('\0', '\u{2400}')]
    #[case(' ', '\u{2420}')]
    #[case('\u{7F}', '\u{2421}')]
    #[case('\u{85}', ' ')]
    #[case('\u{A0}', '\u{A0}')]
    #[case('\u{FF71}', '\u{FF71}')]
    fn controls_are_drawn_as_pictures(#[case] c: char, #[case] shown: char) {
        assert_eq!(picture(c), shown);
    }
}
