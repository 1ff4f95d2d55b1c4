// Resumable Knuth-Morris-Pratt cursor over one text/pattern pair.

/// Build the KMP failure table for `pat`.
///
/// `table[i]` is the length of the longest proper prefix of `pat` that is
/// also a suffix of `pat[..=i]`.
pub fn failure_table(pat: &[u8]) -> Vec<usize> {
    let mut table = vec![0usize; pat.len()];
    let mut j = 0;
    for i in 1..pat.len() {
        while j > 0 && pat[j] != pat[i] {
            j = table[j - 1];
        }
        if pat[j] == pat[i] {
            j += 1;
        }
        table[i] = j;
    }
    table
}

/// Search position plus automaton state, bound to one text and one pattern.
///
/// Successive calls to [`Cursor::next_match`] keep the automaton state, so
/// self-overlapping occurrences are all reported. Use [`Cursor::rewind`] to
/// restart from an arbitrary offset without rebuilding the failure table.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a [u8],
    pat: &'a [u8],
    table: Vec<usize>,
    i: usize, // text offset
    j: usize, // automaton state
}

impl<'a> Cursor<'a> {
    pub fn new(pat: &'a [u8], text: &'a [u8]) -> Self {
        tracing::trace!(patlen = pat.len(), textlen = text.len(), "kmp cursor");
        Self {
            text,
            pat,
            table: failure_table(pat),
            i: 0,
            j: 0,
        }
    }

    pub fn with_start(pat: &'a [u8], text: &'a [u8], start: usize) -> Self {
        let mut cursor = Self::new(pat, text);
        cursor.rewind(start);
        cursor
    }

    /// Restart scanning at `start` with an empty partial match.
    #[inline]
    pub fn rewind(&mut self, start: usize) {
        self.i = start;
        self.j = 0;
    }

    /// Rewind to just past an occurrence reported at `hit`, so the next
    /// occurrence cannot overlap it. An empty pattern advances one byte.
    #[inline]
    pub fn rewind_past(&mut self, hit: usize) {
        self.rewind(hit + self.pat.len().max(1));
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.i
    }

    #[inline]
    pub fn state(&self) -> usize {
        self.j
    }

    #[inline]
    pub fn pattern(&self) -> &'a [u8] {
        self.pat
    }

    #[inline]
    pub fn text(&self) -> &'a [u8] {
        self.text
    }

    #[inline]
    pub fn table(&self) -> &[usize] {
        &self.table
    }

    /// Start offset of the next occurrence, or `None` once the text is exhausted.
    pub fn next_match(&mut self) -> Option<usize> {
        let text = self.text;
        let pat = self.pat;
        let patlen = pat.len();

        // An empty pattern occurs once at every offset up to and including textlen
        if patlen == 0 {
            if self.i > text.len() {
                return None;
            }
            let hit = self.i;
            self.i += 1;
            return Some(hit);
        }

        let mut i = self.i;
        let mut j = self.j;
        while i < text.len() {
            if text[i] == pat[j] {
                if j == patlen - 1 {
                    self.i = i + 1;
                    self.j = self.table[j];
                    return Some(i - j);
                }
                i += 1;
                j += 1;
            } else if j > 0 {
                j = self.table[j - 1];
            } else {
                i += 1;
            }
        }
        self.i = i;
        self.j = j;
        None
    }
}

impl Iterator for Cursor<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        self.next_match()
    }
}
