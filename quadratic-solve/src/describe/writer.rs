use std::fmt;

use super::Description;

/// A [`fmt::Write`] sink that fills a fixed buffer like `snprintf`.
///
/// At most `buffer.len() - 1` bytes of text are stored, leaving room for a
/// NUL terminator. Text past that point is dropped but still counted, so
/// [`finish`](Self::finish) reports the untruncated length.
pub(super) struct TruncatingWriter<'a> {
    buffer: &'a mut [u8],
    written: usize,
    required: usize,
}

impl<'a> TruncatingWriter<'a> {
    pub(super) fn new(buffer: &'a mut [u8]) -> Self {
        Self {
            buffer,
            written: 0,
            required: 0,
        }
    }

    /// Terminates the stored text and returns it with the full length.
    pub(super) fn finish(self) -> Description<'a> {
        let Self {
            buffer,
            written,
            required,
        } = self;

        if let Some(terminator) = buffer.get_mut(written) {
            *terminator = 0;
        }

        let buffer: &'a [u8] = buffer;

        // Text is only ever cut at char boundaries.
        let text = std::str::from_utf8(&buffer[..written]).unwrap_or_default();

        Description::new(text, required)
    }
}

impl fmt::Write for TruncatingWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.required += s.len();

        let limit = self.buffer.len().saturating_sub(1);
        let mut take = limit.saturating_sub(self.written).min(s.len());
        while !s.is_char_boundary(take) {
            take -= 1;
        }

        self.buffer[self.written..self.written + take].copy_from_slice(&s.as_bytes()[..take]);
        self.written += take;

        Ok(())
    }
}
