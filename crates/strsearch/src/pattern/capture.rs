// Capture slots used while matching, and the owned values handed back to callers

/// State of one capture slot on the match stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CapLen {
    /// Opened by `(`, not yet closed
    Unfinished,
    /// `()`, records an offset only
    Position,
    /// Closed with this byte length
    Closed(usize),
}

/// A capture slot: start offset into the subject plus its state.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CaptureSlot {
    pub init: usize,
    pub len: CapLen,
}

/// A captured value, copied out of the subject.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Capture {
    /// Bytes of a closed `( ... )` capture, or the whole match.
    Bytes(Vec<u8>),
    /// 1-based offset recorded by a `()` position capture.
    Position(usize),
}

impl Capture {
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Capture::Bytes(b) => Some(b),
            Capture::Position(_) => None,
        }
    }

    pub fn position(&self) -> Option<usize> {
        match self {
            Capture::Position(p) => Some(*p),
            Capture::Bytes(_) => None,
        }
    }

    /// Append this capture to `out` the way a replacement string sees it:
    /// bytes verbatim, positions as decimal text.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        match self {
            Capture::Bytes(b) => out.extend_from_slice(b),
            Capture::Position(p) => {
                let mut buffer = itoa::Buffer::new();
                out.extend_from_slice(buffer.format(*p).as_bytes());
            }
        }
    }
}

impl From<&[u8]> for Capture {
    fn from(bytes: &[u8]) -> Self {
        Capture::Bytes(bytes.to_vec())
    }
}

/// A successful pattern search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    /// 0-based offset of the first matched byte
    pub start: usize,
    /// 0-based offset one past the last matched byte
    pub end: usize,
    /// Explicit captures in `(` order; empty when the pattern has none
    pub captures: Vec<Capture>,
}

impl Match {
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}
