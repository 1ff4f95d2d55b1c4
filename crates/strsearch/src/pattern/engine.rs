// Core pattern matching engine: direct interpretation, no AST
//
// - MatchState holds subject, pattern, capture stack and depth budget
// - do_match recursively walks the pattern with backtracking; sequential
//   elements loop in place instead of recursing
// - Captures are speculative: every failed probe pops or reopens what it touched

use super::capture::{CapLen, Capture, CaptureSlot};
use super::class::{class_end, match_bracket_class, single_match};
use crate::limits::{CAPTURE_STACK_INIT, L_ESC};
use crate::{Error, MatchConfig, Result};

/// Match state for one session over one subject.
pub(crate) struct MatchState<'a> {
    pub src: &'a [u8],
    pub pat: &'a [u8],
    /// Remaining recursion budget
    pub matchdepth: usize,
    pub captures: Vec<CaptureSlot>,
    pub config: MatchConfig,
}

impl<'a> MatchState<'a> {
    pub fn new(src: &'a [u8], pat: &'a [u8], config: MatchConfig) -> Self {
        let config = config.clamped();
        Self {
            src,
            pat,
            matchdepth: config.max_depth,
            captures: Vec::with_capacity(CAPTURE_STACK_INIT.min(config.max_captures)),
            config,
        }
    }

    /// Reset before a new top-level attempt. The depth budget must already be
    /// back at its initial value.
    #[inline]
    pub fn reprep(&mut self) -> Result<()> {
        self.captures.clear();
        if self.matchdepth != self.config.max_depth {
            return Err(Error::MatchDepth);
        }
        Ok(())
    }

    #[inline]
    pub fn level(&self) -> usize {
        self.captures.len()
    }

    /// Copy out capture `i`. With no explicit captures, index 0 is the
    /// whole match `src[s..e]`.
    pub fn get_onecapture(&self, i: usize, s: usize, e: usize) -> Result<Capture> {
        if i >= self.level() {
            if i != 0 {
                return Err(Error::InvalidCaptureIndex(i as i32 + 1));
            }
            return Ok(Capture::from(&self.src[s..e]));
        }
        let cap = self.captures[i];
        match cap.len {
            CapLen::Unfinished => Err(Error::UnfinishedCapture),
            CapLen::Position => Ok(Capture::Position(cap.init + 1)),
            CapLen::Closed(len) => Ok(Capture::from(&self.src[cap.init..cap.init + len])),
        }
    }

    /// All explicit captures in open order; the whole match when there are
    /// none and `whole` is set.
    pub fn get_captures(&self, s: usize, e: usize, whole: bool) -> Result<Vec<Capture>> {
        let nlevels = if self.level() == 0 && whole { 1 } else { self.level() };
        (0..nlevels).map(|i| self.get_onecapture(i, s, e)).collect()
    }
}

/// Check a pattern for malformed elements before any matching is done.
///
/// `pat` must already have any leading `^` removed.
pub(crate) fn validate_pattern(pat: &[u8]) -> Result<()> {
    let mut p = 0;
    while p < pat.len() {
        match pat[p] {
            b'(' | b')' => p += 1,
            L_ESC => match pat.get(p + 1) {
                Some(b'b') => {
                    if p + 3 >= pat.len() {
                        return Err(Error::MissingBalanceArgs);
                    }
                    p += 4;
                }
                Some(b'f') => {
                    p += 2;
                    if pat.get(p) != Some(&b'[') {
                        return Err(Error::MissingFrontierBracket);
                    }
                    p = class_end(pat, p)?;
                }
                Some(d) if d.is_ascii_digit() => p += 2,
                _ => p = class_end(pat, p)?,
            },
            _ => p = class_end(pat, p)?,
        }
    }
    Ok(())
}

/// Try to match `pat[p..]` against the subject at `src[s..]`.
/// Returns the end of the match, `None` when it fails, or an error for a
/// malformed pattern or an exhausted depth budget.
pub(crate) fn do_match(ms: &mut MatchState<'_>, s: usize, p: usize) -> Result<Option<usize>> {
    if ms.matchdepth == 0 {
        return Err(Error::TooComplex);
    }
    ms.matchdepth -= 1;
    let res = match_inner(ms, s, p);
    ms.matchdepth += 1;
    res
}

fn match_inner(ms: &mut MatchState<'_>, mut s: usize, mut p: usize) -> Result<Option<usize>> {
    let pat = ms.pat;
    loop {
        if p == pat.len() {
            return Ok(Some(s));
        }

        match pat[p] {
            b'(' => {
                return if pat.get(p + 1) == Some(&b')') {
                    start_capture(ms, s, p + 2, CapLen::Position)
                } else {
                    start_capture(ms, s, p + 1, CapLen::Unfinished)
                };
            }
            b')' => return end_capture(ms, s, p + 1),
            b'$' if p + 1 == pat.len() => {
                return Ok((s == ms.src.len()).then_some(s));
            }
            L_ESC => match pat.get(p + 1) {
                Some(b'b') => {
                    match match_balance(ms, s, p + 2)? {
                        Some(e) => {
                            s = e;
                            p += 4;
                            continue;
                        }
                        None => return Ok(None),
                    }
                }
                Some(b'f') => {
                    p += 2;
                    if pat.get(p) != Some(&b'[') {
                        return Err(Error::MissingFrontierBracket);
                    }
                    let ep = class_end(pat, p)?;
                    let previous = if s == 0 { 0 } else { ms.src[s - 1] };
                    let current = ms.src.get(s).copied().unwrap_or(0);
                    if !match_bracket_class(previous, pat, p, ep - 1)
                        && match_bracket_class(current, pat, p, ep - 1)
                    {
                        p = ep;
                        continue;
                    }
                    return Ok(None);
                }
                Some(&d) if d.is_ascii_digit() => {
                    match match_capture(ms, s, d)? {
                        Some(e) => {
                            s = e;
                            p += 2;
                            continue;
                        }
                        None => return Ok(None),
                    }
                }
                _ => {} // %x class: single element below
            },
            _ => {}
        }

        // Single element (literal, `.`, `%x`, `[set]`) plus optional suffix
        let ep = class_end(pat, p)?;
        let suffix = pat.get(ep).copied();
        if !single_match(ms.src, s, pat, p, ep) {
            if matches!(suffix, Some(b'*' | b'?' | b'-')) {
                // accepts empty
                p = ep + 1;
                continue;
            }
            return Ok(None);
        }
        match suffix {
            Some(b'?') => {
                if let Some(res) = do_match(ms, s + 1, ep + 1)? {
                    return Ok(Some(res));
                }
                p = ep + 1;
            }
            // one match already done
            Some(b'+') => return max_expand(ms, s + 1, p, ep),
            Some(b'*') => return max_expand(ms, s, p, ep),
            Some(b'-') => return min_expand(ms, s, p, ep),
            _ => {
                s += 1;
                p = ep;
            }
        }
    }
}

/// Greedy repetition: take the longest run, then give back one at a time.
fn max_expand(ms: &mut MatchState<'_>, s: usize, p: usize, ep: usize) -> Result<Option<usize>> {
    let mut i = 0;
    while single_match(ms.src, s + i, ms.pat, p, ep) {
        i += 1;
    }
    loop {
        if let Some(res) = do_match(ms, s + i, ep + 1)? {
            return Ok(Some(res));
        }
        if i == 0 {
            return Ok(None);
        }
        i -= 1;
    }
}

/// Lazy repetition: try the rest first, then take one more.
fn min_expand(ms: &mut MatchState<'_>, mut s: usize, p: usize, ep: usize) -> Result<Option<usize>> {
    loop {
        if let Some(res) = do_match(ms, s, ep + 1)? {
            return Ok(Some(res));
        }
        if single_match(ms.src, s, ms.pat, p, ep) {
            s += 1;
        } else {
            return Ok(None);
        }
    }
}

fn start_capture(ms: &mut MatchState<'_>, s: usize, p: usize, what: CapLen) -> Result<Option<usize>> {
    if ms.level() >= ms.config.max_captures {
        return Err(Error::TooManyCaptures);
    }
    ms.captures.push(CaptureSlot { init: s, len: what });
    let res = do_match(ms, s, p)?;
    if res.is_none() {
        ms.captures.pop();
    }
    Ok(res)
}

fn end_capture(ms: &mut MatchState<'_>, s: usize, p: usize) -> Result<Option<usize>> {
    let l = capture_to_close(ms)?;
    ms.captures[l].len = CapLen::Closed(s - ms.captures[l].init);
    let res = do_match(ms, s, p)?;
    if res.is_none() {
        ms.captures[l].len = CapLen::Unfinished;
    }
    Ok(res)
}

/// Index of the most recently opened capture that is still unfinished.
fn capture_to_close(ms: &MatchState<'_>) -> Result<usize> {
    ms.captures
        .iter()
        .rposition(|cap| cap.len == CapLen::Unfinished)
        .ok_or(Error::InvalidPatternCapture)
}

/// Resolve a `%1`-`%9` digit to a closed capture index.
fn check_capture(ms: &MatchState<'_>, d: u8) -> Result<usize> {
    let l = d as i32 - b'1' as i32;
    if l < 0 || l as usize >= ms.level() || ms.captures[l as usize].len == CapLen::Unfinished {
        return Err(Error::InvalidCaptureIndex(l + 1));
    }
    Ok(l as usize)
}

/// Backreference: the subject must repeat the bytes of capture `d`.
fn match_capture(ms: &MatchState<'_>, s: usize, d: u8) -> Result<Option<usize>> {
    let l = check_capture(ms, d)?;
    let cap = ms.captures[l];
    // A position capture has no span and never matches
    let CapLen::Closed(len) = cap.len else {
        return Ok(None);
    };
    let captured = &ms.src[cap.init..cap.init + len];
    Ok(ms.src[s..].starts_with(captured).then_some(s + len))
}

/// `%bxy` with `p` pointing at `x`.
fn match_balance(ms: &MatchState<'_>, s: usize, p: usize) -> Result<Option<usize>> {
    if p + 1 >= ms.pat.len() {
        return Err(Error::MissingBalanceArgs);
    }
    let open = ms.pat[p];
    let close = ms.pat[p + 1];
    if ms.src.get(s) != Some(&open) {
        return Ok(None);
    }
    let mut cont = 1usize;
    for (i, &c) in ms.src.iter().enumerate().skip(s + 1) {
        if c == close {
            cont -= 1;
            if cont == 0 {
                return Ok(Some(i + 1));
            }
        } else if c == open {
            cont += 1;
        }
    }
    // subject ends out of balance
    Ok(None)
}
