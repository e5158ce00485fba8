//! Rust source for the static tables of the `ebcdic-kana` crate.

use std::fmt;

use ebcdic_kana::{CodecTable, TableError};
use thiserror::Error;
use tracing::info;

use crate::Ucm;

/// A parsed mapping whose tables cannot be built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{name}: {source}")]
pub struct EmitError {
    /// The code set name of the mapping.
    pub name: String,
    /// Why [`CodecTable::build`] refused it.
    pub source: TableError,
}

/// Renders `src/tables.rs` for `charmaps`, in the given order.
///
/// # Errors
///
/// The first mapping [`CodecTable::build`] rejects.
pub fn tables(charmaps: &[Ucm]) -> Result<String, EmitError> {
    let built = charmaps
        .iter()
        .map(|ucm| {
            let table = ucm.table().map_err(|source| EmitError {
                name: ucm.code_set_name.clone(),
                source,
            })?;
            info!(
                name = %ucm.code_set_name,
                ascii_superset = table.is_ascii_superset(),
                "built table"
            );
            Ok((ucm, table))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Tables(&built).to_string())
}

struct Tables<'a>(&'a [(&'a Ucm, CodecTable)]);

impl fmt::Display for Tables<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let files: Vec<&str> = self.0.iter().map(|(ucm, _)| ucm.file.as_str()).collect();
        writeln!(
            f,
            "// Code generated by ebcdic-kana-gen from {}. DO NOT EDIT.",
            files.join(", ")
        )?;
        writeln!(f)?;
        writeln!(f, "use crate::{{CodecTable, EncodeEntry, Utf8Enc}};")?;
        writeln!(f)?;
        writeln!(f, "/// Every table in this crate, by code set name.")?;
        writeln!(
            f,
            "pub static ENCODINGS: [(&str, &CodecTable); {}] = [",
            self.0.len()
        )?;
        for (ucm, _) in self.0 {
            writeln!(f, "    ({:?}, &{}),", ucm.code_set_name, ucm.ident())?;
        }
        writeln!(f, "];")?;

        for (ucm, table) in self.0 {
            writeln!(f)?;
            table_item(f, ucm, table)?;
        }
        Ok(())
    }
}

fn table_item(f: &mut fmt::Formatter<'_>, ucm: &Ucm, table: &CodecTable) -> fmt::Result {
    writeln!(f, "/// The {} encoding.", ucm.code_set_name)?;
    writeln!(f, "#[rustfmt::skip]")?;
    writeln!(f, "pub static {}: CodecTable = CodecTable {{", ucm.ident())?;
    writeln!(f, "    name: {:?},", ucm.code_set_name)?;
    writeln!(f, "    ascii_superset: {},", table.is_ascii_superset())?;
    writeln!(f, "    low: 0x{:02X},", table.low())?;
    writeln!(f, "    replacement: 0x{:02X},", table.replacement())?;

    writeln!(f, "    decode: [")?;
    for row in table.decode_entries().chunks(2) {
        let cells: Vec<String> = row
            .iter()
            .map(|enc| {
                let mut data = [0u8; 3];
                data[..enc.len()].copy_from_slice(enc.as_bytes());
                format!(
                    "Utf8Enc::new({}, [0x{:02X}, 0x{:02X}, 0x{:02X}]),",
                    enc.len(),
                    data[0],
                    data[1],
                    data[2]
                )
            })
            .collect();
        writeln!(f, "        {}", cells.join(" "))?;
    }
    writeln!(f, "    ],")?;

    writeln!(f, "    encode: [")?;
    for row in table.encode_entries().chunks(4) {
        let cells: Vec<String> = row
            .iter()
            .map(|e| {
                let raw = e.raw();
                format!(
                    "EncodeEntry::from_raw(0x{:04X}_{:04X}),",
                    raw >> 16,
                    raw & 0xFFFF
                )
            })
            .collect();
        writeln!(f, "        {}", cells.join(" "))?;
    }
    writeln!(f, "    ],")?;
    writeln!(f, "}};")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIPPED: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../ebcdic-kana/charmap/ebcdic-kana.ucm"
    ));

    #[test]
    fn emits_one_static_per_code_set() {
        let ucm = Ucm::parse("charmap/ebcdic-kana.ucm", SHIPPED).unwrap();
        let src = tables(&[ucm]).unwrap();

        let mut lines = src.lines();
        assert_eq!(
            lines.next(),
            Some("// Code generated by ebcdic-kana-gen from charmap/ebcdic-kana.ucm. DO NOT EDIT.")
        );
        assert!(src.contains("    (\"EBCDIC-KANA\", &EBCDIC_KANA),\n"));
        assert!(src.contains("pub static EBCDIC_KANA: CodecTable = CodecTable {\n    name: \"EBCDIC-KANA\",\n"));
        assert!(src.contains("    replacement: 0x3F,\n"));
        // 128 rows of two decode entries, 64 rows of four encode entries.
        assert_eq!(src.matches("Utf8Enc::new(").count(), 256);
        assert_eq!(src.matches("EncodeEntry::from_raw(").count(), 256);
        assert!(src.contains("Utf8Enc::new(3, [0xEF, 0xBD, 0xB0]), Utf8Enc::new(3, [0xEF, 0xBD, 0xB1]),"));
    }

    #[test]
    fn reports_the_mapping_that_fails_to_build() {
        let mut ucm = Ucm::parse("charmap/ebcdic-kana.ucm", SHIPPED).unwrap();
        ucm.mapping[0x80] = '\u{1F600}';
        let err = tables(&[ucm]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "EBCDIC-KANA: \\x80 maps to '\u{1F600}', which needs a four-byte UTF-8 sequence"
        );
    }
}
