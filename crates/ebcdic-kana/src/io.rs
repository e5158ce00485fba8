use alloc::vec::Vec;
use std::io::{self, Write};

use crate::{RepertoireError, Status, Transform};

const SCRATCH_LEN: usize = 1024;

/// An [`io::Write`] adapter that runs everything written through a
/// [`Transform`] before passing it on.
///
/// A multi-byte sequence split across `write` calls is held back until the
/// rest arrives. Call [`finish`](Self::finish) at the end of the stream: a
/// sequence still incomplete at that point is an error.
///
/// A character outside the repertoire fails the write with
/// [`io::ErrorKind::InvalidData`], the [`RepertoireError`] as its source.
/// Everything before it is accepted and the character itself is not, so a
/// caller can skip it and carry on.
///
/// Output the wrapped writer has not taken yet stays buffered. An error from
/// the wrapped writer is reported by the next `write`, `flush` or
/// [`finish`](Self::finish); a `write` that returns an error has accepted
/// nothing.
///
/// ```rust
/// use std::io::Write;
///
/// use ebcdic_kana::{EBCDIC_KANA, TransformWriter};
///
/// let mut w = TransformWriter::new(EBCDIC_KANA.encoder(), Vec::new());
/// let kana = "\u{FF71}".as_bytes();
/// w.write_all(&kana[..1])?;
/// w.write_all(&kana[1..])?;
/// assert_eq!(w.finish()?, b"\x91");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct TransformWriter<T, W: Write> {
    transform: T,
    inner: W,
    pending: Vec<u8>,
    out: Vec<u8>,
    scratch: [u8; SCRATCH_LEN],
}

impl<T: Transform, W: Write> TransformWriter<T, W> {
    /// Wraps `inner`.
    pub fn new(transform: T, inner: W) -> Self {
        Self {
            transform,
            inner,
            pending: Vec::new(),
            out: Vec::new(),
            scratch: [0; SCRATCH_LEN],
        }
    }

    /// The wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Bytes received but not yet transformed: the start of a multi-byte
    /// sequence awaiting its tail.
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    /// Transformed output the wrapped writer has not taken yet.
    pub fn buffered(&self) -> &[u8] {
        &self.out
    }

    /// Transforms whatever is pending as the end of the stream, writes out
    /// everything buffered, flushes, and returns the wrapped writer.
    ///
    /// # Errors
    ///
    /// [`io::ErrorKind::InvalidData`] if the stream ends inside a sequence or
    /// with an unencodable character, and any error of the wrapped writer.
    pub fn finish(mut self) -> io::Result<W> {
        let (consumed, unsupported) = self.transform_pending(true);
        self.pending.drain(..consumed);
        self.write_out()?;
        if let Some(e) = unsupported {
            return Err(invalid_data(e));
        }
        self.inner.flush()?;
        Ok(self.inner)
    }

    /// Runs everything pending through the transform into `out`. Returns how
    /// much of `pending` was consumed and the error that stopped it, if any.
    fn transform_pending(&mut self, at_end: bool) -> (usize, Option<RepertoireError>) {
        let mut consumed = 0;
        loop {
            let res = self
                .transform
                .transform(&mut self.scratch, &self.pending[consumed..], at_end);
            self.out.extend_from_slice(&self.scratch[..res.written]);
            consumed += res.consumed;
            match res.status {
                Status::DestinationFull => {}
                Status::Complete | Status::SourceIncomplete => return (consumed, None),
                Status::Unsupported(e) => return (consumed, Some(e)),
            }
        }
    }

    /// Hands `out` to the wrapped writer. Whatever it does not take stays in
    /// `out`.
    fn write_out(&mut self) -> io::Result<()> {
        let mut done = 0;
        let result = loop {
            if done == self.out.len() {
                break Ok(());
            }
            match self.inner.write(&self.out[done..]) {
                Ok(0) => break Err(io::ErrorKind::WriteZero.into()),
                Ok(n) => done += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => break Err(e),
            }
        };
        self.out.drain(..done);
        result
    }
}

impl<T: Transform, W: Write> Write for TransformWriter<T, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Output of earlier writes goes first; nothing of `buf` is taken if
        // the wrapped writer still refuses it.
        self.write_out()?;

        let held = self.pending.len();
        self.pending.extend_from_slice(buf);
        let (consumed, unsupported) = self.transform_pending(false);
        let taken = match unsupported {
            None => {
                self.pending.drain(..consumed);
                buf.len()
            }
            Some(e) => {
                // Keep only what was already held before this call; the
                // offending unit and the rest of `buf` are not taken.
                self.pending.truncate(held.max(consumed));
                self.pending.drain(..consumed);
                let taken = consumed.saturating_sub(held);
                if taken == 0 {
                    return Err(invalid_data(e));
                }
                taken
            }
        };

        // `buf` is accounted for now. On failure the output stays buffered
        // and the next call reports the error.
        let _ = self.write_out();
        Ok(taken)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.write_out()?;
        self.inner.flush()
    }
}

fn invalid_data(e: RepertoireError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, e)
}
