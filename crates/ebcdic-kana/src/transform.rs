use crate::{RepertoireError, TransformError};

/// A resumable byte-to-byte transform over caller-owned buffers.
///
/// Each call translates a prefix of `src` into a prefix of `dst` and stops at
/// the first unit it cannot finish. Implementations keep no state between
/// calls: whatever was not consumed must be passed again, at the front of
/// `src`, on the next call.
pub trait Transform {
    /// Translates as much of `src` into `dst` as possible.
    ///
    /// `at_end` tells the transform that `src` is the final chunk of the
    /// stream, so a trailing partial sequence can never be completed.
    fn transform(&self, dst: &mut [u8], src: &[u8], at_end: bool) -> Transformed;
}

/// Outcome of one [`Transform::transform`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Transformed {
    /// Bytes written to the front of `dst`.
    pub written: usize,
    /// Bytes consumed from the front of `src`; always whole units.
    pub consumed: usize,
    /// Why the call returned.
    pub status: Status,
}

impl Transformed {
    pub(crate) const fn new(written: usize, consumed: usize, status: Status) -> Self {
        Self {
            written,
            consumed,
            status,
        }
    }
}

/// Why a [`Transform::transform`] call returned, and what to supply next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// All of `src` was consumed.
    Complete,
    /// The next unit does not fit in what is left of `dst`. Drain or grow the
    /// destination and call again with the unconsumed input.
    DestinationFull,
    /// `src` ends inside a multi-byte sequence and `at_end` was false. Call
    /// again with the unconsumed tail followed by more input.
    SourceIncomplete,
    /// The next unit cannot be represented. It is left unconsumed; the caller
    /// either aborts or writes the carried replacement byte and skips it.
    Unsupported(RepertoireError),
}

impl Status {
    /// `Ok(())` for [`Status::Complete`], the matching error otherwise.
    ///
    /// # Errors
    ///
    /// Every status other than [`Status::Complete`].
    pub const fn into_result(self) -> Result<(), TransformError> {
        match self {
            Self::Complete => Ok(()),
            Self::DestinationFull => Err(TransformError::DestinationFull),
            Self::SourceIncomplete => Err(TransformError::SourceIncomplete),
            Self::Unsupported(e) => Err(TransformError::Repertoire(e)),
        }
    }

    /// Whether calling again with more room or more input makes progress.
    #[must_use]
    pub const fn is_resumable(self) -> bool {
        matches!(self, Self::DestinationFull | Self::SourceIncomplete)
    }
}
