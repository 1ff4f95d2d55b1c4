// Global substitution over a Lua pattern

use super::capture::Capture;
use super::engine::{MatchState, do_match};
use super::lua_pattern::LuaPattern;
use crate::limits::L_ESC;
use crate::{Error, Result};

impl LuaPattern<'_> {
    /// Replace up to `max` matches (all when `None`) with `repl`.
    ///
    /// In `repl`, `%0` is the whole match, `%1`-`%9` the captures and `%%` a
    /// literal `%`. Returns the new text and the number of substitutions.
    pub fn gsub(&self, text: &[u8], repl: &[u8], max: Option<usize>) -> Result<(Vec<u8>, usize)> {
        self.substitute(text, max, |ms, s, e, out| add_s(ms, s, e, repl, out))
    }

    /// Replace up to `max` matches with whatever `f` returns for their
    /// captures (the whole match when the pattern has none). `None` keeps
    /// the matched bytes unchanged.
    pub fn gsub_with<F>(&self, text: &[u8], max: Option<usize>, mut f: F) -> Result<(Vec<u8>, usize)>
    where
        F: FnMut(&[Capture]) -> Option<Vec<u8>>,
    {
        self.substitute(text, max, |ms, s, e, out| {
            let captures = ms.get_captures(s, e, true)?;
            match f(&captures) {
                Some(value) => out.extend_from_slice(&value),
                None => out.extend_from_slice(&ms.src[s..e]),
            }
            Ok(())
        })
    }

    fn substitute<F>(&self, text: &[u8], max: Option<usize>, mut add_value: F) -> Result<(Vec<u8>, usize)>
    where
        F: FnMut(&MatchState<'_>, usize, usize, &mut Vec<u8>) -> Result<()>,
    {
        let max_s = max.unwrap_or(text.len() + 1);
        let config = *self.config();
        let mut ms = MatchState::new(text, self.body(), config);
        let mut out = Vec::with_capacity(text.len());
        let mut src = 0;
        let mut lastmatch = None;
        let mut n = 0;

        while n < max_s {
            ms.reprep()?;
            match do_match(&mut ms, src, 0)? {
                Some(e) if Some(e) != lastmatch => {
                    n += 1;
                    add_value(&ms, src, e, &mut out)?;
                    config.check_len(out.len())?;
                    src = e;
                    lastmatch = Some(e);
                }
                _ if src < text.len() => {
                    out.push(text[src]);
                    src += 1;
                }
                _ => break,
            }
            if self.is_anchored() {
                break;
            }
        }

        config.check_len(out.len() + text.len() - src)?;
        out.extend_from_slice(&text[src..]);
        Ok((out, n))
    }
}

/// Expand a replacement string for the match `src[s..e]`.
fn add_s(ms: &MatchState<'_>, s: usize, e: usize, repl: &[u8], out: &mut Vec<u8>) -> Result<()> {
    let mut i = 0;
    while i < repl.len() {
        // copy the run up to the next escape in one go
        let run = repl[i..].iter().position(|&c| c == L_ESC).unwrap_or(repl.len() - i);
        out.extend_from_slice(&repl[i..i + run]);
        i += run;
        if i == repl.len() {
            break;
        }
        i += 1; // skip '%'
        match repl.get(i) {
            Some(&L_ESC) => out.push(L_ESC),
            Some(b'0') => out.extend_from_slice(&ms.src[s..e]),
            Some(&d) if d.is_ascii_digit() => {
                ms.get_onecapture((d - b'1') as usize, s, e)?.write_to(out);
            }
            _ => return Err(Error::InvalidReplacement),
        }
        i += 1;
    }
    Ok(())
}

/// Replace matches of `pat` in `text` with `repl`, at most `max` times.
pub fn gsub(text: &[u8], pat: &[u8], repl: &[u8], max: Option<usize>) -> Result<(Vec<u8>, usize)> {
    LuaPattern::new(pat)?.gsub(text, repl, max).inspect_err(|e| {
        tracing::debug!(error = %e, "gsub aborted");
    })
}
