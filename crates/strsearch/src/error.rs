/// Everything that can abort a search, replace or match call.
///
/// A pattern that legally fails to match is never an error; it is reported
/// as `Ok(None)` or an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("expected non-negative start index, got {0}")]
    NegativeStart(i64),

    #[error("malformed pattern (ends with '%')")]
    EndsWithEscape,
    #[error("malformed pattern (missing ']')")]
    MissingBracket,
    #[error("malformed pattern (missing arguments to '%b')")]
    MissingBalanceArgs,
    #[error("missing '[' after '%f' in pattern")]
    MissingFrontierBracket,
    #[error("invalid capture index %{0}")]
    InvalidCaptureIndex(i32),
    #[error("invalid pattern capture")]
    InvalidPatternCapture,
    #[error("unfinished capture")]
    UnfinishedCapture,
    #[error("too many captures")]
    TooManyCaptures,
    #[error("invalid use of '%' in replacement string")]
    InvalidReplacement,

    #[error("pattern too complex")]
    TooComplex,
    #[error("result string too long")]
    ResultTooLong,

    #[error("matchdepth error")]
    MatchDepth,
}

/// Coarse classification of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    MalformedPattern,
    ResourceExhausted,
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NegativeStart(_) => ErrorKind::InvalidArgument,
            Error::EndsWithEscape
            | Error::MissingBracket
            | Error::MissingBalanceArgs
            | Error::MissingFrontierBracket
            | Error::InvalidCaptureIndex(_)
            | Error::InvalidPatternCapture
            | Error::UnfinishedCapture
            | Error::TooManyCaptures
            | Error::InvalidReplacement => ErrorKind::MalformedPattern,
            Error::TooComplex | Error::ResultTooLong => ErrorKind::ResourceExhausted,
            Error::MatchDepth => ErrorKind::Internal,
        }
    }

    #[inline]
    pub fn is_pattern_error(&self) -> bool {
        self.kind() == ErrorKind::MalformedPattern
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
