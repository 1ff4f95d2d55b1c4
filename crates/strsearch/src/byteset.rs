/// 256-bit membership set over byte values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteSet([u32; 8]);

impl ByteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut set = Self::new();
        for &b in bytes {
            set.insert(b);
        }
        set
    }

    #[inline(always)]
    pub fn insert(&mut self, b: u8) {
        self.0[(b >> 5) as usize] |= 1 << (b & 31);
    }

    #[inline(always)]
    pub fn contains(&self, b: u8) -> bool {
        self.0[(b >> 5) as usize] & (1 << (b & 31)) != 0
    }

    pub fn invert(mut self) -> Self {
        for word in &mut self.0 {
            *word = !*word;
        }
        self
    }
}

/// True when every byte of `text` belongs to the set of bytes in `set`
/// (or, with `invert`, to its complement). An empty `text` always passes.
pub fn check_set(set: &[u8], text: &[u8], invert: bool) -> bool {
    let mut bits = ByteSet::from_bytes(set);
    if invert {
        bits = bits.invert();
    }
    text.iter().all(|&b| bits.contains(b))
}
