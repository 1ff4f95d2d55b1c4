use crate::limits::{MAX_STRING_SIZE, MAXCAPTURES, MAXCCALLS, MAXCCALLS_LIMIT};

/// Tunable bounds for a search or match session.
///
/// `max_captures` and `max_depth` are clamped to [`MAXCAPTURES`] and
/// [`MAXCCALLS_LIMIT`] when a session starts, however the config was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchConfig {
    /// Live captures allowed per top-level attempt.
    pub max_captures: usize,
    /// Recursion-depth budget of the pattern matcher.
    /// Zero makes every attempt fail with "pattern too complex".
    pub max_depth: usize,
    /// Largest output buffer replace / gsub may build.
    pub max_result_len: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_captures: MAXCAPTURES,
            max_depth: MAXCCALLS,
            max_result_len: MAX_STRING_SIZE,
        }
    }
}

impl MatchConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAXCCALLS_LIMIT);
        self
    }

    pub fn with_max_captures(mut self, max_captures: usize) -> Self {
        self.max_captures = max_captures.min(MAXCAPTURES);
        self
    }

    pub fn with_max_result_len(mut self, max_result_len: usize) -> Self {
        self.max_result_len = max_result_len;
        self
    }

    /// This config with both engine ceilings applied.
    pub(crate) fn clamped(self) -> Self {
        Self {
            max_captures: self.max_captures.min(MAXCAPTURES),
            max_depth: self.max_depth.min(MAXCCALLS_LIMIT),
            ..self
        }
    }

    /// Fails with [`crate::Error::ResultTooLong`] when `len` exceeds the result cap.
    #[inline]
    pub(crate) fn check_len(&self, len: usize) -> crate::Result<()> {
        if len > self.max_result_len {
            return Err(crate::Error::ResultTooLong);
        }
        Ok(())
    }
}
