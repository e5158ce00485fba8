use thiserror::Error;

/// A character has no representation in the target encoding.
///
/// Carries the substitute byte of the encoding that raised it, so callers
/// doing lossy conversion can write [`replacement`](Self::replacement) in
/// place of the offending character and carry on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("character not in the repertoire of the target encoding")]
pub struct RepertoireError(pub(crate) u8);

impl RepertoireError {
    /// Returns the encoding's suggested replacement byte.
    #[must_use]
    pub const fn replacement(self) -> u8 {
        self.0
    }
}

/// A [`Status`](crate::Status) that stopped a transform early, as an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    /// The destination buffer has no room for the next unit of output.
    #[error("destination buffer too short")]
    DestinationFull,
    /// The source ends inside a multi-byte sequence.
    #[error("source ends inside a multi-byte sequence")]
    SourceIncomplete,
    /// See [`RepertoireError`].
    #[error(transparent)]
    Repertoire(#[from] RepertoireError),
}

/// Failure of a whole-buffer encode.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{source} at byte {position}")]
pub struct EncodeError {
    /// Byte offset into the UTF-8 input of the unit that could not be encoded.
    pub position: usize,
    /// The error raised by the encoder.
    pub source: RepertoireError,
}

impl EncodeError {
    /// Returns the encoding's suggested replacement byte.
    #[must_use]
    pub const fn replacement(&self) -> u8 {
        self.source.replacement()
    }
}

/// A mapping that cannot be turned into a [`CodecTable`](crate::CodecTable).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// The scalar needs a four-byte UTF-8 sequence; decode entries hold at most
    /// three.
    #[error("\\x{byte:02X} maps to {scalar:?}, which needs a four-byte UTF-8 sequence")]
    ScalarTooWide {
        /// The legacy byte.
        byte: u8,
        /// The scalar it maps to.
        scalar: char,
    },
    /// No byte maps to anything but U+FFFD.
    #[error("mapping has no encodable characters")]
    Empty,
}
