// Literal find / find-all / replace / replace-all / split built on `Cursor`.

use std::borrow::Cow;

use super::cursor::Cursor;
use crate::{Error, MatchConfig, Result};

/// Validate a caller-supplied start offset.
#[inline]
fn start_index(start: i64) -> Result<usize> {
    if start < 0 {
        tracing::debug!(start, "rejected negative start index");
        return Err(Error::NegativeStart(start));
    }
    Ok(usize::try_from(start).unwrap_or(usize::MAX))
}

/// Offset of the first occurrence of `pat` in `text` at or after `start`.
pub fn find(pat: &[u8], text: &[u8], start: i64) -> Result<Option<usize>> {
    let start = start_index(start)?;
    Ok(Cursor::with_start(pat, text, start).next_match())
}

/// Every occurrence at or after `start`, left to right.
/// Overlapping occurrences are included.
pub fn find_all(pat: &[u8], text: &[u8], start: i64) -> Result<Vec<usize>> {
    let start = start_index(start)?;
    Ok(Cursor::with_start(pat, text, start).collect())
}

/// Replace the first occurrence at or after `start` with `subst`.
/// Returns `text` itself when there is no occurrence.
pub fn replace<'a>(pat: &[u8], subst: &[u8], text: &'a [u8], start: i64) -> Result<Cow<'a, [u8]>> {
    let start = start_index(start)?;
    let mut cursor = Cursor::with_start(pat, text, start);
    let Some(hit) = cursor.next_match() else {
        return Ok(Cow::Borrowed(text));
    };

    let len = text.len() - pat.len() + subst.len();
    MatchConfig::default().check_len(len)?;
    let mut buf = Vec::with_capacity(len);
    buf.extend_from_slice(&text[..hit]);
    buf.extend_from_slice(subst);
    buf.extend_from_slice(&text[hit + pat.len()..]);
    Ok(Cow::Owned(buf))
}

/// Replace every non-overlapping occurrence at or after `start` with `subst`.
/// Bytes before `start` are copied unchanged.
pub fn replace_all(pat: &[u8], subst: &[u8], text: &[u8], start: i64) -> Result<Vec<u8>> {
    let start = start_index(start)?;
    let config = MatchConfig::default();
    let mut cursor = Cursor::with_start(pat, text, start);
    let mut buf = Vec::with_capacity(text.len());
    let mut last = 0;

    while let Some(hit) = cursor.next_match() {
        config.check_len(buf.len() + (hit - last) + subst.len())?;
        buf.extend_from_slice(&text[last..hit]);
        buf.extend_from_slice(subst);
        last = hit + pat.len();
        cursor.rewind_past(hit);
    }

    config.check_len(buf.len() + text.len() - last)?;
    buf.extend_from_slice(&text[last..]);
    Ok(buf)
}

/// Split `text` around non-overlapping occurrences of `delim` found at or
/// after `start`.
///
/// At most `limit` splits are made; the remaining text is always emitted as
/// the final segment, so the result has at least one element.
pub fn split(delim: &[u8], text: &[u8], start: i64, limit: Option<usize>) -> Result<Vec<Vec<u8>>> {
    let start = start_index(start)?;
    let mut cursor = Cursor::with_start(delim, text, start);
    let mut segments = Vec::new();
    let mut remaining = limit;
    let mut last = 0;

    while let Some(hit) = cursor.next_match() {
        match remaining.as_mut() {
            Some(0) => break,
            Some(n) => *n -= 1,
            None => {}
        }
        segments.push(text[last..hit].to_vec());
        last = hit + delim.len();
        cursor.rewind_past(hit);
    }

    segments.push(text[last..].to_vec());
    Ok(segments)
}
