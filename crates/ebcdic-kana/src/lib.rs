//! A streaming codec between the single-byte EBCDIC-Kana encoding and UTF-8.
//!
//! The codec is split into an immutable [`CodecTable`] and two transforms
//! borrowing it: a [`Decoder`] (EBCDIC-Kana to UTF-8) and an [`Encoder`]
//! (UTF-8 to EBCDIC-Kana). Both implement [`Transform`], a resumable protocol
//! over caller-owned buffers: every call translates as much as fits and reports
//! how many bytes it wrote, how many it consumed, and what the caller has to
//! supply next.
//!
//! ```rust
//! use ebcdic_kana::{EBCDIC_KANA, Status, Transform};
//!
//! let mut dst = [0u8; 16];
//! let res = EBCDIC_KANA.decoder().transform(&mut dst, b"\xC1\x42\x91", true);
//! assert_eq!(res.status, Status::Complete);
//! assert_eq!(core::str::from_utf8(&dst[..res.written]), Ok("Ab\u{FF71}"));
//!
//! let res = EBCDIC_KANA.encoder().transform(&mut dst, "Ab\u{FF71}".as_bytes(), true);
//! assert_eq!(&dst[..res.written], b"\xC1\x42\x91");
//! ```
//!
//! The tables are `static` and the transforms are plain `Copy` handles, so any
//! number of independent streams may share one table across threads.

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod decoder;
mod encoder;
mod error;
mod table;
mod tables;
mod transform;

#[cfg(feature = "alloc")]
mod convert;
#[cfg(feature = "std")]
mod io;

#[cfg(all(test, feature = "alloc"))]
mod tests;

#[cfg(feature = "alloc")]
pub use convert::transform_to_vec;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{EncodeError, RepertoireError, TableError, TransformError};
#[cfg(feature = "std")]
pub use io::TransformWriter;
pub use table::{CodecTable, EncodeEntry, Utf8Enc, by_name};
pub use tables::{EBCDIC_KANA, ENCODINGS};
pub use transform::{Status, Transform, Transformed};
