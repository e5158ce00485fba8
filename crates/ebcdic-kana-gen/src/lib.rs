//! Table tooling for the `ebcdic-kana` codec.
//!
//! Reads ICU UCM mapping files ([`ucm`]), turns them into the Rust source of
//! the crate's static tables ([`emit`]), and renders them as Markdown code
//! charts ([`render`]).

pub mod emit;
pub mod render;
pub mod ucm;

pub use emit::{EmitError, tables};
pub use ucm::{ErrorKind, Ucm, UcmError};
