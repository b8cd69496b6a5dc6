//! Packed-key memoization for bounded-state dynamic programming.
//!
//! A DP state made of a few small coordinates (row index, carry, a handful of
//! bitmasks, a score offset) is packed into a single `u64` by a [`KeyLayout`].
//! Packed keys hash as one word, so [`Memo`] and [`StateDistribution`] are thin
//! wrappers around `HashMap<u64, _>`. [`StateCounts`] does the same for
//! exact path counts in forward transfer DPs.
//!
//! ## Layout
//!
//! Fields are laid out from bit 0 upward in declaration order. For example the
//! layout `[8, 9, 9, 9]` used by the 9-wide triomino tiling DP stores the row
//! in bits 0..8 and the three row masks in bits 8..17, 17..26 and 26..35.

use std::collections::HashMap;

/// Maximum number of fields in one layout.
pub const MAX_FIELDS: usize = 32;

/// Bit-field layout of a packed `u64` state key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLayout {
    widths: [u8; MAX_FIELDS],
    offsets: [u8; MAX_FIELDS],
    len: usize,
}

impl KeyLayout {
    /// Build a layout from field widths (bits). Panics if the widths exceed
    /// 64 bits in total or there are more than [`MAX_FIELDS`] fields.
    pub fn new(widths: &[u8]) -> Self {
        assert!(widths.len() <= MAX_FIELDS, "too many key fields");
        let mut layout = KeyLayout {
            widths: [0; MAX_FIELDS],
            offsets: [0; MAX_FIELDS],
            len: widths.len(),
        };
        let mut offset = 0u32;
        for (i, &w) in widths.iter().enumerate() {
            assert!(w > 0, "zero-width key field {}", i);
            layout.widths[i] = w;
            layout.offsets[i] = offset as u8;
            offset += w as u32;
        }
        assert!(offset <= 64, "key layout needs {} bits", offset);
        layout
    }

    /// Total bits used by the layout.
    pub fn bits(&self) -> u32 {
        self.widths[..self.len].iter().map(|&w| w as u32).sum()
    }

    #[inline(always)]
    fn mask(&self, i: usize) -> u64 {
        if self.widths[i] == 64 {
            u64::MAX
        } else {
            (1u64 << self.widths[i]) - 1
        }
    }

    /// Pack field values into a key. Values wider than their field are masked
    /// (and trip a debug assertion).
    #[inline]
    pub fn pack(&self, values: &[u64]) -> u64 {
        debug_assert_eq!(values.len(), self.len);
        let mut key = 0u64;
        for (i, &v) in values.iter().enumerate() {
            let mask = self.mask(i);
            debug_assert!(v <= mask, "field {} value {} exceeds {} bits", i, v, self.widths[i]);
            key |= (v & mask) << self.offsets[i];
        }
        key
    }

    /// Extract field `i` from a key.
    #[inline(always)]
    pub fn field(&self, key: u64, i: usize) -> u64 {
        (key >> self.offsets[i]) & self.mask(i)
    }

    /// `key` with field `i` overwritten by `value`.
    #[inline(always)]
    pub fn replace(&self, key: u64, i: usize, value: u64) -> u64 {
        let mask = self.mask(i);
        debug_assert!(value <= mask, "field {} value {} exceeds {} bits", i, value, self.widths[i]);
        (key & !(mask << self.offsets[i])) | ((value & mask) << self.offsets[i])
    }

    /// Inverse of [`pack`](Self::pack).
    pub fn unpack(&self, key: u64) -> Vec<u64> {
        (0..self.len).map(|i| self.field(key, i)).collect()
    }
}

/// Memo table statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

impl MemoStats {
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Memo table keyed by packed states.
///
/// Recursive solvers use the `get` / `insert` pair, since the recursion itself
/// needs `&mut self`; [`Memo::get_or_insert_with`] covers non-recursive fills.
pub struct Memo<V> {
    table: HashMap<u64, V>,
    hits: u64,
    misses: u64,
}

impl<V: Copy> Memo<V> {
    pub fn new() -> Self {
        Memo {
            table: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Memo {
            table: HashMap::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    #[inline]
    pub fn get(&mut self, key: u64) -> Option<V> {
        match self.table.get(&key) {
            Some(&v) => {
                self.hits += 1;
                Some(v)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    #[inline]
    pub fn insert(&mut self, key: u64, value: V) -> V {
        self.table.insert(key, value);
        value
    }

    /// Cached value for `key`, computing it with `f` on a miss.
    pub fn get_or_insert_with(&mut self, key: u64, f: impl FnOnce() -> V) -> V {
        if let Some(v) = self.get(key) {
            return v;
        }
        self.insert(key, f())
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn stats(&self) -> MemoStats {
        MemoStats {
            entries: self.table.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

impl<V: Copy> Default for Memo<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Probability mass over packed states, advanced one step at a time by
/// Markov-chain solvers.
#[derive(Debug, Clone, Default)]
pub struct StateDistribution {
    mass: HashMap<u64, f64>,
}

impl StateDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distribution concentrated on one state.
    pub fn point(key: u64) -> Self {
        let mut d = Self::new();
        d.add(key, 1.0);
        d
    }

    #[inline]
    pub fn add(&mut self, key: u64, p: f64) {
        *self.mass.entry(key).or_insert(0.0) += p;
    }

    pub fn len(&self) -> usize {
        self.mass.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mass.is_empty()
    }

    pub fn total_mass(&self) -> f64 {
        self.mass.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.mass.iter().map(|(&k, &p)| (k, p))
    }

    /// Expected value of `f` over the distribution.
    pub fn expectation(&self, f: impl Fn(u64) -> f64) -> f64 {
        self.mass.iter().map(|(&k, &p)| p * f(k)).sum()
    }
}

/// Path counts over packed states, for forward transfer DPs that advance a
/// whole frontier (row profile, cell profile) one step at a time.
#[derive(Debug, Clone, Default)]
pub struct StateCounts {
    counts: HashMap<u64, u128>,
}

impl StateCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point(key: u64) -> Self {
        let mut c = Self::new();
        c.add(key, 1);
        c
    }

    #[inline]
    pub fn add(&mut self, key: u64, n: u128) {
        *self.counts.entry(key).or_insert(0) += n;
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, u128)> + '_ {
        self.counts.iter().map(|(&k, &n)| (k, n))
    }

    pub fn total(&self) -> u128 {
        self.counts.values().sum()
    }
}
