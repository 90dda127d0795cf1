//! Offset+length views into a URI's source buffer.

/// A non-owning byte range logically bound to a [`Uri`](crate::Uri) source
/// buffer.
///
/// A view with zero length is *absent*; an explicitly-present-but-empty
/// component is indistinguishable from an absent one. Because views are plain
/// offsets rather than references, rebuilding the buffer cannot leave them
/// dangling — the parser simply re-derives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct View {
    start: usize,
    len: usize,
}

impl View {
    pub(crate) const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    pub(crate) const fn start(self) -> usize {
        self.start
    }

    pub(crate) const fn end(self) -> usize {
        self.start + self.len
    }

    pub(crate) const fn len(self) -> usize {
        self.len
    }

    pub(crate) const fn is_absent(self) -> bool {
        self.len == 0
    }

    pub(crate) const fn is_present(self) -> bool {
        self.len != 0
    }

    /// Resolves the view against its source buffer.
    ///
    /// The parser maintains the invariant that every issued view lies within
    /// the bounds of the buffer it was derived from.
    pub(crate) fn of(self, source: &str) -> &str {
        &source[self.start..self.end()]
    }

    /// Resolves to `Some(text)` when present, `None` when absent.
    pub(crate) fn resolve(self, source: &str) -> Option<&str> {
        if self.is_absent() { None } else { Some(self.of(source)) }
    }
}
