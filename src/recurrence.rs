//! Linear recurrences modulo m.
//!
//! - [`ModMatrix`]: square matrices over Z/m with fast exponentiation, for
//!   transfer-matrix counting (state vector advanced n steps in O(k³ log n)).
//! - [`LinearRecurrence`]: constant-coefficient recurrences of order d,
//!   evaluated at huge n by Kitamasa's method: x^n is reduced modulo the
//!   characteristic polynomial in O(d² log n), which beats the d×d matrix
//!   power by a factor of d.
//! - [`LinearRecurrence::discover`]: Berlekamp-Massey over a prime field,
//!   recovering the shortest recurrence behind a run of computed terms.

use crate::number_theory::{mod_inverse, mul_mod};

/// `Σ a_i · b_i (mod m)` with a `u128` accumulator, so any `m < 2^64` is safe.
fn dot_mod(pairs: impl Iterator<Item = (u64, u64)>, m: u64) -> u64 {
    let m = m as u128;
    pairs.fold(0u128, |acc, (a, b)| (acc + a as u128 * b as u128 % m) % m) as u64
}

/// Square matrix over Z/m, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModMatrix {
    n: usize,
    modulus: u64,
    data: Vec<u64>,
}

impl ModMatrix {
    pub fn zeros(n: usize, modulus: u64) -> Self {
        ModMatrix {
            n,
            modulus,
            data: vec![0; n * n],
        }
    }

    pub fn identity(n: usize, modulus: u64) -> Self {
        let mut m = Self::zeros(n, modulus);
        for i in 0..n {
            m.data[i * n + i] = 1 % modulus;
        }
        m
    }

    /// Build from rows; entries are reduced mod `modulus`.
    pub fn from_rows(rows: &[Vec<u64>], modulus: u64) -> Self {
        let n = rows.len();
        let mut m = Self::zeros(n, modulus);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), n, "row {} has {} entries, expected {}", i, row.len(), n);
            for (j, &v) in row.iter().enumerate() {
                m.data[i * n + j] = v % modulus;
            }
        }
        m
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> u64 {
        self.data[i * self.n + j]
    }

    #[inline(always)]
    pub fn set(&mut self, i: usize, j: usize, v: u64) {
        self.data[i * self.n + j] = v % self.modulus;
    }

    /// Add `v` to entry (i, j).
    pub fn add(&mut self, i: usize, j: usize, v: u64) {
        let cur = self.get(i, j);
        self.set(i, j, ((cur as u128 + v as u128) % self.modulus as u128) as u64);
    }

    pub fn mul(&self, other: &ModMatrix) -> ModMatrix {
        assert_eq!(self.n, other.n);
        let n = self.n;
        let m = self.modulus as u128;
        let mut out = ModMatrix::zeros(n, self.modulus);
        for i in 0..n {
            for k in 0..n {
                let a = self.data[i * n + k] as u128;
                if a == 0 {
                    continue;
                }
                for j in 0..n {
                    let idx = i * n + j;
                    out.data[idx] =
                        ((out.data[idx] as u128 + a * other.data[k * n + j] as u128) % m) as u64;
                }
            }
        }
        out
    }

    pub fn pow(&self, mut e: u64) -> ModMatrix {
        let mut result = ModMatrix::identity(self.n, self.modulus);
        let mut base = self.clone();
        while e > 0 {
            if e & 1 == 1 {
                result = result.mul(&base);
            }
            e >>= 1;
            if e > 0 {
                base = base.mul(&base);
            }
        }
        result
    }

    /// Matrix-vector product.
    pub fn apply(&self, v: &[u64]) -> Vec<u64> {
        assert_eq!(v.len(), self.n);
        (0..self.n)
            .map(|i| dot_mod((0..self.n).map(|j| (self.get(i, j), v[j])), self.modulus))
            .collect()
    }
}

/// `a_n = Σ_{i<d} coefficients[i] · a_{n-1-i} (mod modulus)` with
/// `a_0..a_{d-1} = initial`.
#[derive(Debug, Clone)]
pub struct LinearRecurrence {
    coefficients: Vec<u64>,
    initial: Vec<u64>,
    modulus: u64,
    /// Non-zero `(i, c_i)` pairs; sparse characteristic polynomials reduce fast.
    nonzero: Vec<(usize, u64)>,
}

impl LinearRecurrence {
    pub fn new(coefficients: Vec<u64>, initial: Vec<u64>, modulus: u64) -> Self {
        assert!(!coefficients.is_empty(), "recurrence needs order >= 1");
        assert_eq!(
            coefficients.len(),
            initial.len(),
            "order {} needs {} initial terms",
            coefficients.len(),
            coefficients.len()
        );
        let coefficients: Vec<u64> = coefficients.iter().map(|&c| c % modulus).collect();
        let initial: Vec<u64> = initial.iter().map(|&a| a % modulus).collect();
        let nonzero = coefficients
            .iter()
            .enumerate()
            .filter(|(_, &c)| c != 0)
            .map(|(i, &c)| (i, c))
            .collect();
        LinearRecurrence {
            coefficients,
            initial,
            modulus,
            nonzero,
        }
    }

    pub fn order(&self) -> usize {
        self.coefficients.len()
    }

    /// Terms `a_0..a_{count-1}` by direct iteration.
    pub fn terms(&self, count: usize) -> Vec<u64> {
        let mut a: Vec<u64> = self.initial.iter().take(count).copied().collect();
        while a.len() < count {
            let n = a.len();
            let v = dot_mod(self.nonzero.iter().map(|&(i, c)| (c, a[n - 1 - i])), self.modulus);
            a.push(v);
        }
        a
    }

    /// Reduce a polynomial (ascending coefficients, `u128` accumulators)
    /// modulo the characteristic polynomial, returning d coefficients.
    fn reduce(&self, mut poly: Vec<u128>) -> Vec<u64> {
        let d = self.order();
        let m = self.modulus as u128;
        for k in (d..poly.len()).rev() {
            let t = poly[k] % m;
            if t == 0 {
                continue;
            }
            poly[k] = 0;
            // x^k = x^{k-d} · x^d = Σ c_i x^{k-1-i}
            for &(i, c) in &self.nonzero {
                let idx = k - 1 - i;
                poly[idx] = (poly[idx] % m + t * c as u128 % m) % m;
            }
        }
        poly.truncate(d);
        poly.resize(d, 0);
        poly.iter().map(|&v| (v % m) as u64).collect()
    }

    fn mul_reduce(&self, a: &[u64], b: &[u64]) -> Vec<u64> {
        let m = self.modulus as u128;
        let d = self.order();
        // Products are < m², so up to 2^128 / m² of them can be summed lazily.
        let lazy = (m * m)
            .checked_mul(d as u128)
            .is_some_and(|bound| bound < u128::MAX / 2);
        let mut prod = vec![0u128; 2 * d - 1];
        for (i, &x) in a.iter().enumerate() {
            if x == 0 {
                continue;
            }
            let x = x as u128;
            for (j, &y) in b.iter().enumerate() {
                if lazy {
                    prod[i + j] += x * y as u128;
                } else {
                    prod[i + j] = (prod[i + j] + x * y as u128) % m;
                }
            }
        }
        self.reduce(prod)
    }

    /// The n-th term.
    pub fn nth(&self, n: u64) -> u64 {
        let d = self.order();
        if (n as u128) < d as u128 {
            return self.initial[n as usize];
        }
        // result = x^n mod charpoly, by square-and-multiply over polynomials.
        let mut result = self.reduce(vec![1]);
        let mut x = vec![0u128; 2];
        x[1] = 1;
        let mut base = self.reduce(x);
        let mut e = n;
        while e > 0 {
            if e & 1 == 1 {
                result = self.mul_reduce(&result, &base);
            }
            e >>= 1;
            if e > 0 {
                base = self.mul_reduce(&base, &base);
            }
        }
        dot_mod(
            result.iter().copied().zip(self.initial.iter().copied()),
            self.modulus,
        )
    }

    /// Shortest recurrence generating `terms` modulo the prime `modulus`
    /// (Berlekamp-Massey). `None` when the terms are too few to pin down the
    /// recurrence found (order `d` needs at least `2d` terms) or a
    /// discrepancy has no inverse mod a composite `modulus`.
    pub fn discover(terms: &[u64], modulus: u64) -> Option<LinearRecurrence> {
        let s: Vec<u64> = terms.iter().map(|&t| t % modulus).collect();
        let mut c: Vec<u64> = vec![1];
        let mut b: Vec<u64> = vec![1];
        let mut order = 0usize;
        let mut shift = 1usize;
        let mut last_discrepancy = 1u64;

        for n in 0..s.len() {
            let d = dot_mod(
                c.iter().copied().zip((0..=order).map(|i| s[n - i])),
                modulus,
            );
            if d == 0 {
                shift += 1;
                continue;
            }
            let coef = mul_mod(d, mod_inverse(last_discrepancy, modulus)?, modulus);
            let previous = c.clone();
            if c.len() < b.len() + shift {
                c.resize(b.len() + shift, 0);
            }
            for (i, &bi) in b.iter().enumerate() {
                let sub = mul_mod(coef, bi, modulus) as u128;
                let m = modulus as u128;
                c[i + shift] = ((c[i + shift] as u128 + m - sub) % m) as u64;
            }
            if 2 * order <= n {
                order = n + 1 - order;
                b = previous;
                last_discrepancy = d;
                shift = 1;
            } else {
                shift += 1;
            }
        }

        if 2 * order.max(1) > s.len() {
            return None;
        }
        if order == 0 {
            return Some(LinearRecurrence::new(vec![0], vec![0], modulus));
        }
        c.resize(order + 1, 0);
        let coefficients = c[1..].iter().map(|&x| (modulus - x) % modulus).collect();
        Some(LinearRecurrence::new(coefficients, s[..order].to_vec(), modulus))
    }
}
