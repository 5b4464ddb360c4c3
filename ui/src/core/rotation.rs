//! Index bookkeeping for rotating banners.

/// Cursor over a fixed, non-empty list of messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    index: usize,
    len: usize,
}

impl Rotation {
    /// Returns `None` for an empty list; there is nothing to rotate through.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    pub fn current(&self) -> usize {
        self.index
    }

    /// Step to the next message, wrapping at the end, and return the new index.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    /// Index displayed after `ticks` intervals from mount.
    pub fn after_ticks(&self, ticks: u64) -> usize {
        (ticks % self.len as u64) as usize
    }
}
