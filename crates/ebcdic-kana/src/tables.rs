// Code generated by ebcdic-kana-gen from charmap/ebcdic-kana.ucm. DO NOT EDIT.

use crate::{CodecTable, EncodeEntry, Utf8Enc};

/// Every table in this crate, by code set name.
pub static ENCODINGS: [(&str, &CodecTable); 1] = [
    ("EBCDIC-KANA", &EBCDIC_KANA),
];

/// The EBCDIC-KANA encoding.
#[rustfmt::skip]
pub static EBCDIC_KANA: CodecTable = CodecTable {
    name: "EBCDIC-KANA",
    ascii_superset: false,
    low: 0x00,
    replacement: 0x3F,
    decode: [
        Utf8Enc::new(1, [0x00, 0x00, 0x00]), Utf8Enc::new(1, [0x01, 0x00, 0x00]),
        Utf8Enc::new(1, [0x02, 0x00, 0x00]), Utf8Enc::new(1, [0x03, 0x00, 0x00]),
        Utf8Enc::new(2, [0xC2, 0x9C, 0x00]), Utf8Enc::new(1, [0x09, 0x00, 0x00]),
        Utf8Enc::new(2, [0xC2, 0x86, 0x00]), Utf8Enc::new(1, [0x7F, 0x00, 0x00]),
        Utf8Enc::new(2, [0xC2, 0x97, 0x00]), Utf8Enc::new(2, [0xC2, 0x8D, 0x00]),
        Utf8Enc::new(2, [0xC2, 0x8E, 0x00]), Utf8Enc::new(1, [0x0B, 0x00, 0x00]),
        Utf8Enc::new(1, [0x0C, 0x00, 0x00]), Utf8Enc::new(1, [0x0D, 0x00, 0x00]),
        Utf8Enc::new(1, [0x0E, 0x00, 0x00]), Utf8Enc::new(1, [0x0F, 0x00, 0x00]),
        Utf8Enc::new(1, [0x10, 0x00, 0x00]), Utf8Enc::new(1, [0x11, 0x00, 0x00]),
        Utf8Enc::new(1, [0x12, 0x00, 0x00]), Utf8Enc::new(1, [0x13, 0x00, 0x00]),
        Utf8Enc::new(2, [0xC2, 0x9D, 0x00]), Utf8Enc::new(2, [0xC2, 0x85, 0x00]),
        Utf8Enc::new(1, [0x08, 0x00, 0x00]), Utf8Enc::new(2, [0xC2, 0x87, 0x00]),
        Utf8Enc::new(1, [0x18, 0x00, 0x00]), Utf8Enc::new(1, [0x19, 0x00, 0x00]),
        Utf8Enc::new(2, [0xC2, 0x92, 0x00]), Utf8Enc::new(2, [0xC2, 0x8F, 0x00]),
        Utf8Enc::new(1, [0x1C, 0x00, 0x00]), Utf8Enc::new(1, [0x1D, 0x00, 0x00]),
        Utf8Enc::new(1, [0x1E, 0x00, 0x00]), Utf8Enc::new(1, [0x1F, 0x00, 0x00]),
        Utf8Enc::new(2, [0xC2, 0x80, 0x00]), Utf8Enc::new(2, [0xC2, 0x81, 0x00]),
        Utf8Enc::new(2, [0xC2, 0x82, 0x00]), Utf8Enc::new(2, [0xC2, 0x83, 0x00]),
        Utf8Enc::new(2, [0xC2, 0x84, 0x00]), Utf8Enc::new(1, [0x0A, 0x00, 0x00]),
        Utf8Enc::new(1, [0x17, 0x00, 0x00]), Utf8Enc::new(1, [0x1B, 0x00, 0x00]),
        Utf8Enc::new(2, [0xC2, 0x88, 0x00]), Utf8Enc::new(2, [0xC2, 0x89, 0x00]),
        Utf8Enc::new(2, [0xC2, 0x8A, 0x00]), Utf8Enc::new(2, [0xC2, 0x8B, 0x00]),
        Utf8Enc::new(2, [0xC2, 0x8C, 0x00]), Utf8Enc::new(1, [0x05, 0x00, 0x00]),
        Utf8Enc::new(1, [0x06, 0x00, 0x00]), Utf8Enc::new(1, [0x07, 0x00, 0x00]),
        Utf8Enc::new(2, [0xC2, 0x90, 0x00]), Utf8Enc::new(2, [0xC2, 0x91, 0x00]),
        Utf8Enc::new(1, [0x16, 0x00, 0x00]), Utf8Enc::new(2, [0xC2, 0x93, 0x00]),
        Utf8Enc::new(2, [0xC2, 0x94, 0x00]), Utf8Enc::new(2, [0xC2, 0x95, 0x00]),
        Utf8Enc::new(2, [0xC2, 0x96, 0x00]), Utf8Enc::new(1, [0x04, 0x00, 0x00]),
        Utf8Enc::new(2, [0xC2, 0x98, 0x00]), Utf8Enc::new(2, [0xC2, 0x99, 0x00]),
        Utf8Enc::new(2, [0xC2, 0x9A, 0x00]), Utf8Enc::new(2, [0xC2, 0x9B, 0x00]),
        Utf8Enc::new(1, [0x14, 0x00, 0x00]), Utf8Enc::new(1, [0x15, 0x00, 0x00]),
        Utf8Enc::new(2, [0xC2, 0x9E, 0x00]), Utf8Enc::new(1, [0x1A, 0x00, 0x00]),
        Utf8Enc::new(1, [0x20, 0x00, 0x00]), Utf8Enc::new(1, [0x61, 0x00, 0x00]),
        Utf8Enc::new(1, [0x62, 0x00, 0x00]), Utf8Enc::new(1, [0x63, 0x00, 0x00]),
        Utf8Enc::new(1, [0x64, 0x00, 0x00]), Utf8Enc::new(1, [0x65, 0x00, 0x00]),
        Utf8Enc::new(1, [0x66, 0x00, 0x00]), Utf8Enc::new(1, [0x67, 0x00, 0x00]),
        Utf8Enc::new(1, [0x68, 0x00, 0x00]), Utf8Enc::new(1, [0x69, 0x00, 0x00]),
        Utf8Enc::new(2, [0xC2, 0xA3, 0x00]), Utf8Enc::new(1, [0x2E, 0x00, 0x00]),
        Utf8Enc::new(1, [0x3C, 0x00, 0x00]), Utf8Enc::new(1, [0x28, 0x00, 0x00]),
        Utf8Enc::new(1, [0x2B, 0x00, 0x00]), Utf8Enc::new(1, [0x7C, 0x00, 0x00]),
        Utf8Enc::new(1, [0x26, 0x00, 0x00]), Utf8Enc::new(1, [0x6A, 0x00, 0x00]),
        Utf8Enc::new(1, [0x6B, 0x00, 0x00]), Utf8Enc::new(1, [0x6C, 0x00, 0x00]),
        Utf8Enc::new(1, [0x6D, 0x00, 0x00]), Utf8Enc::new(1, [0x6E, 0x00, 0x00]),
        Utf8Enc::new(1, [0x6F, 0x00, 0x00]), Utf8Enc::new(1, [0x70, 0x00, 0x00]),
        Utf8Enc::new(1, [0x71, 0x00, 0x00]), Utf8Enc::new(1, [0x72, 0x00, 0x00]),
        Utf8Enc::new(1, [0x21, 0x00, 0x00]), Utf8Enc::new(2, [0xC2, 0xA5, 0x00]),
        Utf8Enc::new(1, [0x2A, 0x00, 0x00]), Utf8Enc::new(1, [0x29, 0x00, 0x00]),
        Utf8Enc::new(1, [0x3B, 0x00, 0x00]), Utf8Enc::new(2, [0xC2, 0xAC, 0x00]),
        Utf8Enc::new(1, [0x2D, 0x00, 0x00]), Utf8Enc::new(1, [0x2F, 0x00, 0x00]),
        Utf8Enc::new(1, [0x73, 0x00, 0x00]), Utf8Enc::new(1, [0x74, 0x00, 0x00]),
        Utf8Enc::new(1, [0x75, 0x00, 0x00]), Utf8Enc::new(1, [0x76, 0x00, 0x00]),
        Utf8Enc::new(1, [0x77, 0x00, 0x00]), Utf8Enc::new(1, [0x78, 0x00, 0x00]),
        Utf8Enc::new(1, [0x79, 0x00, 0x00]), Utf8Enc::new(1, [0x7A, 0x00, 0x00]),
        Utf8Enc::new(2, [0xC2, 0xA6, 0x00]), Utf8Enc::new(1, [0x2C, 0x00, 0x00]),
        Utf8Enc::new(1, [0x25, 0x00, 0x00]), Utf8Enc::new(1, [0x5F, 0x00, 0x00]),
        Utf8Enc::new(1, [0x3E, 0x00, 0x00]), Utf8Enc::new(1, [0x3F, 0x00, 0x00]),
        Utf8Enc::new(1, [0x5B, 0x00, 0x00]), Utf8Enc::new(1, [0x5D, 0x00, 0x00]),
        Utf8Enc::new(1, [0x5E, 0x00, 0x00]), Utf8Enc::new(1, [0x7E, 0x00, 0x00]),
        Utf8Enc::new(1, [0x5C, 0x00, 0x00]), Utf8Enc::new(1, [0x7B, 0x00, 0x00]),
        Utf8Enc::new(1, [0x7D, 0x00, 0x00]), Utf8Enc::new(3, [0xE2, 0x80, 0xBE]),
        Utf8Enc::new(2, [0xC2, 0xA2, 0x00]), Utf8Enc::new(1, [0x60, 0x00, 0x00]),
        Utf8Enc::new(1, [0x3A, 0x00, 0x00]), Utf8Enc::new(1, [0x23, 0x00, 0x00]),
        Utf8Enc::new(1, [0x40, 0x00, 0x00]), Utf8Enc::new(1, [0x27, 0x00, 0x00]),
        Utf8Enc::new(1, [0x3D, 0x00, 0x00]), Utf8Enc::new(1, [0x22, 0x00, 0x00]),
        Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]), Utf8Enc::new(3, [0xEF, 0xBD, 0xA1]),
        Utf8Enc::new(3, [0xEF, 0xBD, 0xA2]), Utf8Enc::new(3, [0xEF, 0xBD, 0xA3]),
        Utf8Enc::new(3, [0xEF, 0xBD, 0xA4]), Utf8Enc::new(3, [0xEF, 0xBD, 0xA5]),
        Utf8Enc::new(3, [0xEF, 0xBD, 0xA6]), Utf8Enc::new(3, [0xEF, 0xBD, 0xA7]),
        Utf8Enc::new(3, [0xEF, 0xBD, 0xA8]), Utf8Enc::new(3, [0xEF, 0xBD, 0xA9]),
        Utf8Enc::new(3, [0xEF, 0xBD, 0xAA]), Utf8Enc::new(3, [0xEF, 0xBD, 0xAB]),
        Utf8Enc::new(3, [0xEF, 0xBD, 0xAC]), Utf8Enc::new(3, [0xEF, 0xBD, 0xAD]),
        Utf8Enc::new(3, [0xEF, 0xBD, 0xAE]), Utf8Enc::new(3, [0xEF, 0xBD, 0xAF]),
        Utf8Enc::new(3, [0xEF, 0xBD, 0xB0]), Utf8Enc::new(3, [0xEF, 0xBD, 0xB1]),
        Utf8Enc::new(3, [0xEF, 0xBD, 0xB2]), Utf8Enc::new(3, [0xEF, 0xBD, 0xB3]),
        Utf8Enc::new(3, [0xEF, 0xBD, 0xB4]), Utf8Enc::new(3, [0xEF, 0xBD, 0xB5]),
        Utf8Enc::new(3, [0xEF, 0xBD, 0xB6]), Utf8Enc::new(3, [0xEF, 0xBD, 0xB7]),
        Utf8Enc::new(3, [0xEF, 0xBD, 0xB8]), Utf8Enc::new(3, [0xEF, 0xBD, 0xB9]),
        Utf8Enc::new(3, [0xEF, 0xBD, 0xBA]), Utf8Enc::new(3, [0xEF, 0xBD, 0xBB]),
        Utf8Enc::new(3, [0xEF, 0xBD, 0xBC]), Utf8Enc::new(3, [0xEF, 0xBD, 0xBD]),
        Utf8Enc::new(3, [0xEF, 0xBD, 0xBE]), Utf8Enc::new(3, [0xEF, 0xBD, 0xBF]),
        Utf8Enc::new(3, [0xEF, 0xBE, 0x80]), Utf8Enc::new(3, [0xEF, 0xBE, 0x81]),
        Utf8Enc::new(3, [0xEF, 0xBE, 0x82]), Utf8Enc::new(3, [0xEF, 0xBE, 0x83]),
        Utf8Enc::new(3, [0xEF, 0xBE, 0x84]), Utf8Enc::new(3, [0xEF, 0xBE, 0x85]),
        Utf8Enc::new(3, [0xEF, 0xBE, 0x86]), Utf8Enc::new(3, [0xEF, 0xBE, 0x87]),
        Utf8Enc::new(3, [0xEF, 0xBE, 0x88]), Utf8Enc::new(3, [0xEF, 0xBE, 0x89]),
        Utf8Enc::new(3, [0xEF, 0xBE, 0x8A]), Utf8Enc::new(3, [0xEF, 0xBE, 0x8B]),
        Utf8Enc::new(3, [0xEF, 0xBE, 0x8C]), Utf8Enc::new(3, [0xEF, 0xBE, 0x8D]),
        Utf8Enc::new(3, [0xEF, 0xBE, 0x8E]), Utf8Enc::new(3, [0xEF, 0xBE, 0x8F]),
        Utf8Enc::new(3, [0xEF, 0xBE, 0x90]), Utf8Enc::new(3, [0xEF, 0xBE, 0x91]),
        Utf8Enc::new(3, [0xEF, 0xBE, 0x92]), Utf8Enc::new(3, [0xEF, 0xBE, 0x93]),
        Utf8Enc::new(3, [0xEF, 0xBE, 0x94]), Utf8Enc::new(3, [0xEF, 0xBE, 0x95]),
        Utf8Enc::new(3, [0xEF, 0xBE, 0x96]), Utf8Enc::new(3, [0xEF, 0xBE, 0x97]),
        Utf8Enc::new(3, [0xEF, 0xBE, 0x98]), Utf8Enc::new(3, [0xEF, 0xBE, 0x99]),
        Utf8Enc::new(3, [0xEF, 0xBE, 0x9A]), Utf8Enc::new(3, [0xEF, 0xBE, 0x9B]),
        Utf8Enc::new(3, [0xEF, 0xBE, 0x9C]), Utf8Enc::new(3, [0xEF, 0xBE, 0x9D]),
        Utf8Enc::new(3, [0xEF, 0xBE, 0x9E]), Utf8Enc::new(3, [0xEF, 0xBE, 0x9F]),
        Utf8Enc::new(1, [0x7B, 0x00, 0x00]), Utf8Enc::new(1, [0x41, 0x00, 0x00]),
        Utf8Enc::new(1, [0x42, 0x00, 0x00]), Utf8Enc::new(1, [0x43, 0x00, 0x00]),
        Utf8Enc::new(1, [0x44, 0x00, 0x00]), Utf8Enc::new(1, [0x45, 0x00, 0x00]),
        Utf8Enc::new(1, [0x46, 0x00, 0x00]), Utf8Enc::new(1, [0x47, 0x00, 0x00]),
        Utf8Enc::new(1, [0x48, 0x00, 0x00]), Utf8Enc::new(1, [0x49, 0x00, 0x00]),
        Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]), Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]),
        Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]), Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]),
        Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]), Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]),
        Utf8Enc::new(1, [0x7D, 0x00, 0x00]), Utf8Enc::new(1, [0x4A, 0x00, 0x00]),
        Utf8Enc::new(1, [0x4B, 0x00, 0x00]), Utf8Enc::new(1, [0x4C, 0x00, 0x00]),
        Utf8Enc::new(1, [0x4D, 0x00, 0x00]), Utf8Enc::new(1, [0x4E, 0x00, 0x00]),
        Utf8Enc::new(1, [0x4F, 0x00, 0x00]), Utf8Enc::new(1, [0x50, 0x00, 0x00]),
        Utf8Enc::new(1, [0x51, 0x00, 0x00]), Utf8Enc::new(1, [0x52, 0x00, 0x00]),
        Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]), Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]),
        Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]), Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]),
        Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]), Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]),
        Utf8Enc::new(1, [0x24, 0x00, 0x00]), Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]),
        Utf8Enc::new(1, [0x53, 0x00, 0x00]), Utf8Enc::new(1, [0x54, 0x00, 0x00]),
        Utf8Enc::new(1, [0x55, 0x00, 0x00]), Utf8Enc::new(1, [0x56, 0x00, 0x00]),
        Utf8Enc::new(1, [0x57, 0x00, 0x00]), Utf8Enc::new(1, [0x58, 0x00, 0x00]),
        Utf8Enc::new(1, [0x59, 0x00, 0x00]), Utf8Enc::new(1, [0x5A, 0x00, 0x00]),
        Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]), Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]),
        Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]), Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]),
        Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]), Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]),
        Utf8Enc::new(1, [0x30, 0x00, 0x00]), Utf8Enc::new(1, [0x31, 0x00, 0x00]),
        Utf8Enc::new(1, [0x32, 0x00, 0x00]), Utf8Enc::new(1, [0x33, 0x00, 0x00]),
        Utf8Enc::new(1, [0x34, 0x00, 0x00]), Utf8Enc::new(1, [0x35, 0x00, 0x00]),
        Utf8Enc::new(1, [0x36, 0x00, 0x00]), Utf8Enc::new(1, [0x37, 0x00, 0x00]),
        Utf8Enc::new(1, [0x38, 0x00, 0x00]), Utf8Enc::new(1, [0x39, 0x00, 0x00]),
        Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]), Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]),
        Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]), Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]),
        Utf8Enc::new(3, [0xEF, 0xBF, 0xBD]), Utf8Enc::new(2, [0xC2, 0x9F, 0x00]),
    ],
    encode: [
        EncodeEntry::from_raw(0x0000_0000), EncodeEntry::from_raw(0x0100_0001), EncodeEntry::from_raw(0x0200_0002), EncodeEntry::from_raw(0x0300_0003),
        EncodeEntry::from_raw(0x3700_0004), EncodeEntry::from_raw(0x2D00_0005), EncodeEntry::from_raw(0x2E00_0006), EncodeEntry::from_raw(0x2F00_0007),
        EncodeEntry::from_raw(0x1600_0008), EncodeEntry::from_raw(0x0500_0009), EncodeEntry::from_raw(0x2500_000A), EncodeEntry::from_raw(0x0B00_000B),
        EncodeEntry::from_raw(0x0C00_000C), EncodeEntry::from_raw(0x0D00_000D), EncodeEntry::from_raw(0x0E00_000E), EncodeEntry::from_raw(0x0F00_000F),
        EncodeEntry::from_raw(0x1000_0010), EncodeEntry::from_raw(0x1100_0011), EncodeEntry::from_raw(0x1200_0012), EncodeEntry::from_raw(0x1300_0013),
        EncodeEntry::from_raw(0x3C00_0014), EncodeEntry::from_raw(0x3D00_0015), EncodeEntry::from_raw(0x3200_0016), EncodeEntry::from_raw(0x2600_0017),
        EncodeEntry::from_raw(0x1800_0018), EncodeEntry::from_raw(0x1900_0019), EncodeEntry::from_raw(0x3F00_001A), EncodeEntry::from_raw(0x2700_001B),
        EncodeEntry::from_raw(0x1C00_001C), EncodeEntry::from_raw(0x1D00_001D), EncodeEntry::from_raw(0x1E00_001E), EncodeEntry::from_raw(0x1F00_001F),
        EncodeEntry::from_raw(0x4000_0020), EncodeEntry::from_raw(0x5A00_0021), EncodeEntry::from_raw(0x7F00_0022), EncodeEntry::from_raw(0x7B00_0023),
        EncodeEntry::from_raw(0xE000_0024), EncodeEntry::from_raw(0x6C00_0025), EncodeEntry::from_raw(0x5000_0026), EncodeEntry::from_raw(0x7D00_0027),
        EncodeEntry::from_raw(0x4D00_0028), EncodeEntry::from_raw(0x5D00_0029), EncodeEntry::from_raw(0x5C00_002A), EncodeEntry::from_raw(0x4E00_002B),
        EncodeEntry::from_raw(0x6B00_002C), EncodeEntry::from_raw(0x6000_002D), EncodeEntry::from_raw(0x4B00_002E), EncodeEntry::from_raw(0x6100_002F),
        EncodeEntry::from_raw(0xF000_0030), EncodeEntry::from_raw(0xF100_0031), EncodeEntry::from_raw(0xF200_0032), EncodeEntry::from_raw(0xF300_0033),
        EncodeEntry::from_raw(0xF400_0034), EncodeEntry::from_raw(0xF500_0035), EncodeEntry::from_raw(0xF600_0036), EncodeEntry::from_raw(0xF700_0037),
        EncodeEntry::from_raw(0xF800_0038), EncodeEntry::from_raw(0xF900_0039), EncodeEntry::from_raw(0x7A00_003A), EncodeEntry::from_raw(0x5E00_003B),
        EncodeEntry::from_raw(0x4C00_003C), EncodeEntry::from_raw(0x7E00_003D), EncodeEntry::from_raw(0x6E00_003E), EncodeEntry::from_raw(0x6F00_003F),
        EncodeEntry::from_raw(0x7C00_0040), EncodeEntry::from_raw(0xC100_0041), EncodeEntry::from_raw(0xC200_0042), EncodeEntry::from_raw(0xC300_0043),
        EncodeEntry::from_raw(0xC400_0044), EncodeEntry::from_raw(0xC500_0045), EncodeEntry::from_raw(0xC600_0046), EncodeEntry::from_raw(0xC700_0047),
        EncodeEntry::from_raw(0xC800_0048), EncodeEntry::from_raw(0xC900_0049), EncodeEntry::from_raw(0xD100_004A), EncodeEntry::from_raw(0xD200_004B),
        EncodeEntry::from_raw(0xD300_004C), EncodeEntry::from_raw(0xD400_004D), EncodeEntry::from_raw(0xD500_004E), EncodeEntry::from_raw(0xD600_004F),
        EncodeEntry::from_raw(0xD700_0050), EncodeEntry::from_raw(0xD800_0051), EncodeEntry::from_raw(0xD900_0052), EncodeEntry::from_raw(0xE200_0053),
        EncodeEntry::from_raw(0xE300_0054), EncodeEntry::from_raw(0xE400_0055), EncodeEntry::from_raw(0xE500_0056), EncodeEntry::from_raw(0xE600_0057),
        EncodeEntry::from_raw(0xE700_0058), EncodeEntry::from_raw(0xE800_0059), EncodeEntry::from_raw(0xE900_005A), EncodeEntry::from_raw(0x7000_005B),
        EncodeEntry::from_raw(0x7400_005C), EncodeEntry::from_raw(0x7100_005D), EncodeEntry::from_raw(0x7200_005E), EncodeEntry::from_raw(0x6D00_005F),
        EncodeEntry::from_raw(0x7900_0060), EncodeEntry::from_raw(0x4100_0061), EncodeEntry::from_raw(0x4200_0062), EncodeEntry::from_raw(0x4300_0063),
        EncodeEntry::from_raw(0x4400_0064), EncodeEntry::from_raw(0x4500_0065), EncodeEntry::from_raw(0x4600_0066), EncodeEntry::from_raw(0x4700_0067),
        EncodeEntry::from_raw(0x4800_0068), EncodeEntry::from_raw(0x4900_0069), EncodeEntry::from_raw(0x5100_006A), EncodeEntry::from_raw(0x5200_006B),
        EncodeEntry::from_raw(0x5300_006C), EncodeEntry::from_raw(0x5400_006D), EncodeEntry::from_raw(0x5500_006E), EncodeEntry::from_raw(0x5600_006F),
        EncodeEntry::from_raw(0x5700_0070), EncodeEntry::from_raw(0x5800_0071), EncodeEntry::from_raw(0x5900_0072), EncodeEntry::from_raw(0x6200_0073),
        EncodeEntry::from_raw(0x6300_0074), EncodeEntry::from_raw(0x6400_0075), EncodeEntry::from_raw(0x6500_0076), EncodeEntry::from_raw(0x6600_0077),
        EncodeEntry::from_raw(0x6700_0078), EncodeEntry::from_raw(0x6800_0079), EncodeEntry::from_raw(0x6900_007A), EncodeEntry::from_raw(0x7500_007B),
        EncodeEntry::from_raw(0x4F00_007C), EncodeEntry::from_raw(0x7600_007D), EncodeEntry::from_raw(0x7300_007E), EncodeEntry::from_raw(0x0700_007F),
        EncodeEntry::from_raw(0x2000_0080), EncodeEntry::from_raw(0x2100_0081), EncodeEntry::from_raw(0x2200_0082), EncodeEntry::from_raw(0x2300_0083),
        EncodeEntry::from_raw(0x2400_0084), EncodeEntry::from_raw(0x1500_0085), EncodeEntry::from_raw(0x0600_0086), EncodeEntry::from_raw(0x1700_0087),
        EncodeEntry::from_raw(0x2800_0088), EncodeEntry::from_raw(0x2900_0089), EncodeEntry::from_raw(0x2A00_008A), EncodeEntry::from_raw(0x2B00_008B),
        EncodeEntry::from_raw(0x2C00_008C), EncodeEntry::from_raw(0x0900_008D), EncodeEntry::from_raw(0x0A00_008E), EncodeEntry::from_raw(0x1B00_008F),
        EncodeEntry::from_raw(0x3000_0090), EncodeEntry::from_raw(0x3100_0091), EncodeEntry::from_raw(0x1A00_0092), EncodeEntry::from_raw(0x3300_0093),
        EncodeEntry::from_raw(0x3400_0094), EncodeEntry::from_raw(0x3500_0095), EncodeEntry::from_raw(0x3600_0096), EncodeEntry::from_raw(0x0800_0097),
        EncodeEntry::from_raw(0x3800_0098), EncodeEntry::from_raw(0x3900_0099), EncodeEntry::from_raw(0x3A00_009A), EncodeEntry::from_raw(0x3B00_009B),
        EncodeEntry::from_raw(0x0400_009C), EncodeEntry::from_raw(0x1400_009D), EncodeEntry::from_raw(0x3E00_009E), EncodeEntry::from_raw(0xFF00_009F),
        EncodeEntry::from_raw(0x7800_00A2), EncodeEntry::from_raw(0x4A00_00A3), EncodeEntry::from_raw(0x5B00_00A5), EncodeEntry::from_raw(0x6A00_00A6),
        EncodeEntry::from_raw(0x5F00_00AC), EncodeEntry::from_raw(0x7700_203E), EncodeEntry::from_raw(0x8100_FF61), EncodeEntry::from_raw(0x8200_FF62),
        EncodeEntry::from_raw(0x8300_FF63), EncodeEntry::from_raw(0x8400_FF64), EncodeEntry::from_raw(0x8500_FF65), EncodeEntry::from_raw(0x8600_FF66),
        EncodeEntry::from_raw(0x8700_FF67), EncodeEntry::from_raw(0x8800_FF68), EncodeEntry::from_raw(0x8900_FF69), EncodeEntry::from_raw(0x8A00_FF6A),
        EncodeEntry::from_raw(0x8B00_FF6B), EncodeEntry::from_raw(0x8C00_FF6C), EncodeEntry::from_raw(0x8D00_FF6D), EncodeEntry::from_raw(0x8E00_FF6E),
        EncodeEntry::from_raw(0x8F00_FF6F), EncodeEntry::from_raw(0x9000_FF70), EncodeEntry::from_raw(0x9100_FF71), EncodeEntry::from_raw(0x9200_FF72),
        EncodeEntry::from_raw(0x9300_FF73), EncodeEntry::from_raw(0x9400_FF74), EncodeEntry::from_raw(0x9500_FF75), EncodeEntry::from_raw(0x9600_FF76),
        EncodeEntry::from_raw(0x9700_FF77), EncodeEntry::from_raw(0x9800_FF78), EncodeEntry::from_raw(0x9900_FF79), EncodeEntry::from_raw(0x9A00_FF7A),
        EncodeEntry::from_raw(0x9B00_FF7B), EncodeEntry::from_raw(0x9C00_FF7C), EncodeEntry::from_raw(0x9D00_FF7D), EncodeEntry::from_raw(0x9E00_FF7E),
        EncodeEntry::from_raw(0x9F00_FF7F), EncodeEntry::from_raw(0xA000_FF80), EncodeEntry::from_raw(0xA100_FF81), EncodeEntry::from_raw(0xA200_FF82),
        EncodeEntry::from_raw(0xA300_FF83), EncodeEntry::from_raw(0xA400_FF84), EncodeEntry::from_raw(0xA500_FF85), EncodeEntry::from_raw(0xA600_FF86),
        EncodeEntry::from_raw(0xA700_FF87), EncodeEntry::from_raw(0xA800_FF88), EncodeEntry::from_raw(0xA900_FF89), EncodeEntry::from_raw(0xAA00_FF8A),
        EncodeEntry::from_raw(0xAB00_FF8B), EncodeEntry::from_raw(0xAC00_FF8C), EncodeEntry::from_raw(0xAD00_FF8D), EncodeEntry::from_raw(0xAE00_FF8E),
        EncodeEntry::from_raw(0xAF00_FF8F), EncodeEntry::from_raw(0xB000_FF90), EncodeEntry::from_raw(0xB100_FF91), EncodeEntry::from_raw(0xB200_FF92),
        EncodeEntry::from_raw(0xB300_FF93), EncodeEntry::from_raw(0xB400_FF94), EncodeEntry::from_raw(0xB500_FF95), EncodeEntry::from_raw(0xB600_FF96),
        EncodeEntry::from_raw(0xB700_FF97), EncodeEntry::from_raw(0xB800_FF98), EncodeEntry::from_raw(0xB900_FF99), EncodeEntry::from_raw(0xBA00_FF9A),
        EncodeEntry::from_raw(0xBB00_FF9B), EncodeEntry::from_raw(0xBC00_FF9C), EncodeEntry::from_raw(0xBD00_FF9D), EncodeEntry::from_raw(0xBE00_FF9E),
        EncodeEntry::from_raw(0xBF00_FF9F), EncodeEntry::from_raw(0xBF00_FF9F), EncodeEntry::from_raw(0xBF00_FF9F), EncodeEntry::from_raw(0xBF00_FF9F),
        EncodeEntry::from_raw(0xBF00_FF9F), EncodeEntry::from_raw(0xBF00_FF9F), EncodeEntry::from_raw(0xBF00_FF9F), EncodeEntry::from_raw(0xBF00_FF9F),
        EncodeEntry::from_raw(0xBF00_FF9F), EncodeEntry::from_raw(0xBF00_FF9F), EncodeEntry::from_raw(0xBF00_FF9F), EncodeEntry::from_raw(0xBF00_FF9F),
        EncodeEntry::from_raw(0xBF00_FF9F), EncodeEntry::from_raw(0xBF00_FF9F), EncodeEntry::from_raw(0xBF00_FF9F), EncodeEntry::from_raw(0xBF00_FF9F),
        EncodeEntry::from_raw(0xBF00_FF9F), EncodeEntry::from_raw(0xBF00_FF9F), EncodeEntry::from_raw(0xBF00_FF9F), EncodeEntry::from_raw(0xBF00_FF9F),
        EncodeEntry::from_raw(0xBF00_FF9F), EncodeEntry::from_raw(0xBF00_FF9F), EncodeEntry::from_raw(0xBF00_FF9F), EncodeEntry::from_raw(0xBF00_FF9F),
        EncodeEntry::from_raw(0xBF00_FF9F), EncodeEntry::from_raw(0xBF00_FF9F), EncodeEntry::from_raw(0xBF00_FF9F), EncodeEntry::from_raw(0xBF00_FF9F),
    ],
};
