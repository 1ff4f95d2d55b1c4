use super::capture::{Capture, Match};
use super::engine::{MatchState, do_match, validate_pattern};
use crate::limits::SPECIALS;
use crate::{MatchConfig, Result};

/// Check if pattern has no special characters (can be matched as plain text).
#[inline]
pub fn is_plain_pattern(pat: &[u8]) -> bool {
    !pat.iter().any(|c| SPECIALS.contains(c))
}

/// Convert a 1-based, possibly negative, start position into a 0-based
/// offset. Negative positions count back from the end; anything before the
/// first byte clips to it.
pub fn start_offset(init: i64, len: usize) -> usize {
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let pos = if init > 0 {
        init
    } else if init == 0 || init < -len_i {
        1
    } else {
        len_i + init + 1
    };
    usize::try_from(pos - 1).unwrap_or(usize::MAX)
}

/// A validated Lua pattern.
///
/// Construction checks for malformed elements (dangling `%`, unterminated
/// `[set]`, missing `%b` operands, `%f` without a set). Capture misuse is
/// detected while matching.
#[derive(Debug, Clone, Copy)]
pub struct LuaPattern<'p> {
    pat: &'p [u8],
    anchor: bool,
    config: MatchConfig,
}

impl<'p> LuaPattern<'p> {
    pub fn new(pat: &'p [u8]) -> Result<Self> {
        Self::with_config(pat, MatchConfig::default())
    }

    pub fn with_config(pat: &'p [u8], config: MatchConfig) -> Result<Self> {
        let (anchor, body) = match pat.split_first() {
            Some((b'^', rest)) => (true, rest),
            _ => (false, pat),
        };
        validate_pattern(body).inspect_err(|e| {
            tracing::debug!(error = %e, patlen = pat.len(), "rejected malformed pattern");
        })?;
        Ok(Self {
            pat: body,
            anchor,
            config,
        })
    }

    /// Pattern bytes without the leading `^`.
    #[inline]
    pub fn body(&self) -> &'p [u8] {
        self.pat
    }

    #[inline]
    pub fn is_anchored(&self) -> bool {
        self.anchor
    }

    #[inline]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Slide over `text` from the 0-based offset `init` (only `init` itself
    /// when anchored) and stop at the first match.
    /// Returns the match start, end and the state holding its captures.
    fn first_match<'t>(&self, text: &'t [u8], init: usize) -> Result<Option<(usize, usize, MatchState<'t>)>>
    where
        'p: 't,
    {
        if init > text.len() {
            return Ok(None);
        }
        tracing::trace!(
            patlen = self.pat.len(),
            textlen = text.len(),
            init,
            anchor = self.anchor,
            "pattern match"
        );
        let mut ms = MatchState::new(text, self.pat, self.config);
        let mut s1 = init;
        loop {
            ms.reprep()?;
            if let Some(e) = do_match(&mut ms, s1, 0)? {
                return Ok(Some((s1, e, ms)));
            }
            s1 += 1;
            if self.anchor || s1 > text.len() {
                return Ok(None);
            }
        }
    }

    /// First match at or after the 0-based offset `init`, with its explicit captures.
    pub fn find(&self, text: &[u8], init: usize) -> Result<Option<Match>> {
        let Some((start, end, ms)) = self.first_match(text, init).inspect_err(log_abort)? else {
            return Ok(None);
        };
        let captures = ms.get_captures(start, end, false)?;
        Ok(Some(Match { start, end, captures }))
    }

    /// Captures of the first match at or after the 0-based offset `init`;
    /// the whole match when the pattern has no capture groups.
    pub fn captures(&self, text: &[u8], init: usize) -> Result<Option<Vec<Capture>>> {
        let Some((start, end, ms)) = self.first_match(text, init).inspect_err(log_abort)? else {
            return Ok(None);
        };
        ms.get_captures(start, end, true).map(Some)
    }

    pub fn is_match(&self, text: &[u8]) -> Result<bool> {
        Ok(self.first_match(text, 0)?.is_some())
    }

    /// Iterate over successive matches in `text`.
    pub fn gmatch<'t>(&self, text: &'t [u8]) -> GMatch<'t>
    where
        'p: 't,
    {
        GMatch {
            ms: MatchState::new(text, self.pat, self.config),
            anchor: self.anchor,
            src: 0,
            lastmatch: None,
            done: false,
        }
    }
}

fn log_abort(e: &crate::Error) {
    tracing::debug!(error = %e, "pattern match aborted");
}

/// Iterator over the captures of successive matches, see [`LuaPattern::gmatch`].
///
/// An empty match directly after the previous match is skipped. Iteration
/// stops after the first error.
pub struct GMatch<'t> {
    ms: MatchState<'t>,
    anchor: bool,
    src: usize,
    lastmatch: Option<usize>,
    done: bool,
}

impl GMatch<'_> {
    fn advance(&mut self) -> Result<Option<Vec<Capture>>> {
        while self.src <= self.ms.src.len() {
            let s = self.src;
            self.ms.reprep()?;
            match do_match(&mut self.ms, s, 0)? {
                Some(e) if Some(e) != self.lastmatch => {
                    self.src = e;
                    self.lastmatch = Some(e);
                    if self.anchor {
                        self.done = true;
                    }
                    return self.ms.get_captures(s, e, true).map(Some);
                }
                _ => {
                    if self.anchor {
                        break;
                    }
                    self.src += 1;
                }
            }
        }
        self.done = true;
        Ok(None)
    }
}

impl Iterator for GMatch<'_> {
    type Item = Result<Vec<Capture>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.advance() {
            Ok(caps) => caps.map(Ok),
            Err(e) => {
                log_abort(&e);
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for GMatch<'_> {}

// ======================== Free functions ========================

/// Find `pat` in `text` from the 1-based `init` (negative counts from the end).
/// Start and end in the result are 0-based byte offsets.
pub fn str_find(text: &[u8], pat: &[u8], init: i64) -> Result<Option<Match>> {
    LuaPattern::new(pat)?.find(text, start_offset(init, text.len()))
}

/// Captures of the first match of `pat` in `text` from the 1-based `init`.
pub fn str_match(text: &[u8], pat: &[u8], init: i64) -> Result<Option<Vec<Capture>>> {
    LuaPattern::new(pat)?.captures(text, start_offset(init, text.len()))
}

/// Iterate over all matches of `pat` in `text`.
pub fn gmatch<'a>(text: &'a [u8], pat: &'a [u8]) -> Result<GMatch<'a>> {
    Ok(LuaPattern::new(pat)?.gmatch(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(s: &str) -> Capture {
        Capture::Bytes(s.as_bytes().to_vec())
    }

    #[test]
    fn test_start_offset() {
        assert_eq!(start_offset(1, 5), 0);
        assert_eq!(start_offset(3, 5), 2);
        assert_eq!(start_offset(0, 5), 0);
        assert_eq!(start_offset(-1, 5), 4);
        assert_eq!(start_offset(-5, 5), 0);
        assert_eq!(start_offset(-9, 5), 0);
        assert_eq!(start_offset(7, 5), 6);
    }

    #[test]
    fn test_is_plain_pattern() {
        assert!(is_plain_pattern(b"hello world"));
        assert!(!is_plain_pattern(b"a.b"));
        assert!(!is_plain_pattern(b"50%"));
        assert!(is_plain_pattern(b""));
    }

    #[test]
    fn test_find_slides() {
        let pat = LuaPattern::new(b"%d+").unwrap();
        let m = pat.find(b"abc 123 def", 0).unwrap().unwrap();
        assert_eq!((m.start, m.end), (4, 7));
        assert!(m.captures.is_empty());
        assert!(pat.find(b"abc 123 def", 7).unwrap().is_none());
    }

    #[test]
    fn test_anchor() {
        let pat = LuaPattern::new(b"^ab").unwrap();
        assert!(pat.is_anchored());
        assert!(pat.find(b"xab", 0).unwrap().is_none());
        assert_eq!(pat.find(b"xab", 1).unwrap().map(|m| m.start), Some(1));
    }

    #[test]
    fn test_captures_whole_match() {
        let pat = LuaPattern::new(b"%a+").unwrap();
        assert_eq!(pat.captures(b"  hello ", 0).unwrap(), Some(vec![bytes("hello")]));
    }

    #[test]
    fn test_init_past_end() {
        let pat = LuaPattern::new(b"").unwrap();
        assert_eq!(pat.captures(b"ab", 2).unwrap(), Some(vec![bytes("")]));
        assert_eq!(pat.captures(b"ab", 3).unwrap(), None);
    }

    #[test]
    fn test_gmatch() {
        let words: Vec<_> = gmatch(b"one two  three", b"%a+")
            .unwrap()
            .map(|caps| caps.unwrap())
            .collect();
        assert_eq!(words, vec![vec![bytes("one")], vec![bytes("two")], vec![bytes("three")]]);
    }

    #[test]
    fn test_gmatch_empty_matches() {
        let all: Vec<_> = gmatch(b"abc", b"%a*").unwrap().map(|c| c.unwrap()).collect();
        assert_eq!(all, vec![vec![bytes("abc")]]);

        let all: Vec<_> = gmatch(b"ab", b"x*").unwrap().map(|c| c.unwrap()).collect();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_gmatch_anchored() {
        let all: Vec<_> = gmatch(b"aaa", b"^a").unwrap().map(|c| c.unwrap()).collect();
        assert_eq!(all, vec![vec![bytes("a")]]);
    }

    #[test]
    fn test_gmatch_stops_after_error() {
        let mut it = gmatch(b"aaa", b"(a").unwrap();
        assert!(matches!(it.next(), Some(Err(crate::Error::UnfinishedCapture))));
        assert!(it.next().is_none());
    }
}
