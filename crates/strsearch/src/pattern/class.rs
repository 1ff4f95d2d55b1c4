// Character class matching for Lua patterns
// Handles %a, %d, %l, %u, %w, %s, %p, %c, %g, %x, %z and their uppercase inverses
// Also handles [set] matching. All classes are ASCII (C locale).

use crate::limits::L_ESC;
use crate::{Error, Result};

/// Check if byte `c` matches the class letter `cl`.
/// A lowercase letter selects the class, uppercase its complement; any
/// other `cl` matches itself literally.
#[inline(always)]
pub fn match_class(c: u8, cl: u8) -> bool {
    let res = match cl.to_ascii_lowercase() {
        b'a' => c.is_ascii_alphabetic(),
        b'c' => c.is_ascii_control(),
        b'd' => c.is_ascii_digit(),
        b'g' => c.is_ascii_graphic(),
        b'l' => c.is_ascii_lowercase(),
        b'p' => c.is_ascii_punctuation(),
        // isspace() includes \v, which is_ascii_whitespace does not
        b's' => matches!(c, b' ' | b'\t'..=b'\r'),
        b'u' => c.is_ascii_uppercase(),
        b'w' => c.is_ascii_alphanumeric(),
        b'x' => c.is_ascii_hexdigit(),
        b'z' => c == 0,
        _ => return cl == c,
    };
    if cl.is_ascii_lowercase() { res } else { !res }
}

/// Return the pattern index after the single element starting at `pat[p]`
/// (past `[set]`, `%x`, or one literal byte). Repetition suffixes are not
/// consumed.
pub fn class_end(pat: &[u8], p: usize) -> Result<usize> {
    let mut p = p;
    let c = pat[p];
    p += 1;
    match c {
        L_ESC => {
            if p >= pat.len() {
                return Err(Error::EndsWithEscape);
            }
            Ok(p + 1)
        }
        b'[' => {
            if pat.get(p) == Some(&b'^') {
                p += 1;
            }
            // The first byte is always part of the set, so "[]]" holds ']'
            loop {
                if p >= pat.len() {
                    return Err(Error::MissingBracket);
                }
                let c = pat[p];
                p += 1;
                if c == L_ESC && p < pat.len() {
                    p += 1; // skip escapes such as '%]'
                }
                if pat.get(p) == Some(&b']') {
                    break;
                }
            }
            Ok(p + 1)
        }
        _ => Ok(p),
    }
}

/// Match `c` against the set `pat[p..=ec]`, where `pat[p]` is `[` and
/// `pat[ec]` its closing `]`.
pub fn match_bracket_class(c: u8, pat: &[u8], p: usize, ec: usize) -> bool {
    let mut p = p;
    let mut sig = true;
    if pat[p + 1] == b'^' {
        sig = false;
        p += 1;
    }
    loop {
        p += 1;
        if p >= ec {
            break;
        }
        if pat[p] == L_ESC {
            p += 1;
            if match_class(c, pat[p]) {
                return sig;
            }
        } else if pat[p + 1] == b'-' && p + 2 < ec {
            p += 2;
            if pat[p - 2] <= c && c <= pat[p] {
                return sig;
            }
        } else if pat[p] == c {
            return sig;
        }
    }
    !sig
}

/// Match the subject byte at `s` against the element `pat[p..ep]`.
/// Always false at the end of the subject.
#[inline]
pub fn single_match(src: &[u8], s: usize, pat: &[u8], p: usize, ep: usize) -> bool {
    let Some(&c) = src.get(s) else {
        return false;
    };
    match pat[p] {
        b'.' => true,
        L_ESC => match_class(c, pat[p + 1]),
        b'[' => match_bracket_class(c, pat, p, ep - 1),
        lit => lit == c,
    }
}
