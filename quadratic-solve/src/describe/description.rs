use std::fmt;

/// Text rendered into a caller-owned buffer, plus its untruncated length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Description<'a> {
    text: &'a str,
    len: usize,
}

impl<'a> Description<'a> {
    pub(super) fn new(text: &'a str, len: usize) -> Self {
        Self { text, len }
    }

    /// The text that fit in the buffer.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length in bytes of the full description, excluding the terminator.
    ///
    /// Independent of how much of it fit in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the full description is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if only a prefix of the description fit in the buffer.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.text.len() < self.len
    }

    /// Buffer size needed to hold the full description and its terminator.
    #[must_use]
    pub fn required_capacity(&self) -> usize {
        self.len + 1
    }
}

impl fmt::Display for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}
