//! Number-theory toolbox shared by the solvers.
//!
//! The core (sieve, prime list, modular power, gcd) is what nearly every
//! solver links against; the rest (Miller-Rabin, totient/Möbius sieves,
//! factorization, multiplicative order) covers the recurring needs of the
//! number-theory puzzles.
//!
//! All modular arithmetic routes products through `u128`, so any modulus below
//! 2^64 is safe.

/// Prime flags for `0..n`: `flags[i]` is true iff `i` is prime.
pub fn sieve(n: usize) -> Vec<bool> {
    let mut flags = vec![true; n];
    for f in flags.iter_mut().take(2) {
        *f = false;
    }
    let mut i = 2;
    while i * i < n {
        if flags[i] {
            let mut j = i * i;
            while j < n {
                flags[j] = false;
                j += i;
            }
        }
        i += 1;
    }
    flags
}

/// Primes strictly below `n`, ascending.
pub fn primes(n: usize) -> Vec<u64> {
    sieve(n)
        .iter()
        .enumerate()
        .filter(|(_, &p)| p)
        .map(|(i, _)| i as u64)
        .collect()
}

/// `a * b mod m`.
#[inline(always)]
pub fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// `base^exp mod m` by square-and-multiply.
pub fn pow_mod(base: u64, exp: u64, m: u64) -> u64 {
    if m == 1 {
        return 0;
    }
    let mut result = 1u64;
    let mut b = base % m;
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            result = mul_mod(result, b, m);
        }
        b = mul_mod(b, b, m);
        e >>= 1;
    }
    result
}

pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// Inverse of `a` modulo `m`, if `gcd(a, m) == 1`.
pub fn mod_inverse(a: u64, m: u64) -> Option<u64> {
    if m == 1 {
        return Some(0);
    }
    let (mut old_r, mut r) = (a as i128 % m as i128, m as i128);
    let (mut old_s, mut s) = (1i128, 0i128);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    if old_r != 1 {
        return None;
    }
    Some(old_s.rem_euclid(m as i128) as u64)
}

/// Deterministic Miller-Rabin for the full `u64` range.
pub fn is_prime(n: u64) -> bool {
    const BASES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];
    if n < 2 {
        return false;
    }
    for &p in &BASES {
        if n % p == 0 {
            return n == p;
        }
    }
    let mut d = n - 1;
    let mut r = 0;
    while d % 2 == 0 {
        d /= 2;
        r += 1;
    }
    'witness: for &a in &BASES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..r {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Floor of the square root.
pub fn isqrt(n: u64) -> u64 {
    let mut r = (n as f64).sqrt() as u64;
    while (r as u128) * (r as u128) > n as u128 {
        r -= 1;
    }
    while ((r + 1) as u128) * ((r + 1) as u128) <= n as u128 {
        r += 1;
    }
    r
}

/// Floor of the cube root.
pub fn icbrt(n: u64) -> u64 {
    let cube = |r: u64| (r as u128) * (r as u128) * (r as u128);
    let mut r = (n as f64).cbrt() as u64;
    while r > 0 && cube(r) > n as u128 {
        r -= 1;
    }
    while cube(r + 1) <= n as u128 {
        r += 1;
    }
    r
}

/// Euler's totient for `0..=n`.
pub fn totient_sieve(n: usize) -> Vec<u64> {
    let mut phi: Vec<u64> = (0..=n as u64).collect();
    for i in 2..=n {
        if phi[i] == i as u64 {
            let mut j = i;
            while j <= n {
                phi[j] -= phi[j] / i as u64;
                j += i;
            }
        }
    }
    phi
}

/// Möbius function for `0..=n` (`mu[0]` is 0).
pub fn mobius_sieve(n: usize) -> Vec<i8> {
    let mut mu = vec![1i8; n + 1];
    let mut composite = vec![false; n + 1];
    if n >= 1 {
        mu[0] = 0;
    } else {
        return vec![0];
    }
    for i in 2..=n {
        if composite[i] {
            continue;
        }
        let mut j = i;
        while j <= n {
            if j > i {
                composite[j] = true;
            }
            mu[j] = -mu[j];
            j += i;
        }
        let sq = i.saturating_mul(i);
        let mut j = sq;
        while j <= n {
            mu[j] = 0;
            j += sq;
        }
    }
    mu
}

/// Trial-division factorization into ascending `(prime, exponent)` pairs.
pub fn factorize(mut n: u64) -> Vec<(u64, u32)> {
    let mut factors = Vec::new();
    let mut p = 2u64;
    while p <= n / p {
        if n % p == 0 {
            let mut e = 0;
            while n % p == 0 {
                n /= p;
                e += 1;
            }
            factors.push((p, e));
        }
        p += if p == 2 { 1 } else { 2 };
    }
    if n > 1 {
        factors.push((n, 1));
    }
    factors
}

/// Expand a factorization into all divisors, ascending.
pub fn divisors_from_factors(factors: &[(u64, u32)]) -> Vec<u64> {
    let mut divs = vec![1u64];
    for &(p, e) in factors {
        let len = divs.len();
        let mut pk = 1u64;
        for _ in 0..e {
            pk *= p;
            for i in 0..len {
                divs.push(divs[i] * pk);
            }
        }
    }
    divs.sort_unstable();
    divs
}

/// All divisors of `n`, ascending.
pub fn divisors(n: u64) -> Vec<u64> {
    divisors_from_factors(&factorize(n))
}

/// Least `k >= 1` with `a^k ≡ 1 (mod m)`.
pub fn multiplicative_order(a: u64, m: u64) -> Option<u64> {
    if m == 1 {
        return Some(1);
    }
    if gcd(a % m, m) != 1 {
        return None;
    }
    let phi = factorize(m)
        .iter()
        .fold(1u64, |acc, &(p, e)| acc * (p - 1) * p.pow(e - 1));
    Some(reduce_order(a, m, phi, &factorize(phi)))
}

/// Shrink a known multiple `order` of the order of `a` mod `m` to the exact
/// order, given the factorization of `order`.
pub fn reduce_order(a: u64, m: u64, mut order: u64, factors: &[(u64, u32)]) -> u64 {
    for &(q, _) in factors {
        while order % q == 0 && pow_mod(a, order / q, m) == 1 {
            order /= q;
        }
    }
    order
}

/// Smallest-prime-factor table over odd numbers only.
///
/// Entry `n / 2` holds the smallest prime factor of odd `n`, or 0 when `n` is
/// prime (or 1). Halving the table keeps a 10^8 limit at ~200 MB.
pub struct OddFactorSieve {
    limit: u64,
    spf: Vec<u32>,
}

impl OddFactorSieve {
    pub fn new(limit: u64) -> Self {
        assert!(limit < u32::MAX as u64, "limit {} exceeds u32 table", limit);
        let mut spf = vec![0u32; (limit / 2 + 1) as usize];
        let mut p = 3u64;
        while p * p <= limit {
            if spf[(p / 2) as usize] == 0 {
                let mut j = p * p;
                while j <= limit {
                    let slot = &mut spf[(j / 2) as usize];
                    if *slot == 0 {
                        *slot = p as u32;
                    }
                    j += 2 * p;
                }
            }
            p += 2;
        }
        OddFactorSieve { limit, spf }
    }

    /// Smallest prime factor of `n` (`n` itself when prime, 1 for `n == 1`).
    #[inline(always)]
    pub fn smallest_factor(&self, n: u64) -> u64 {
        debug_assert!(n >= 1 && n <= self.limit);
        if n % 2 == 0 {
            return 2;
        }
        match self.spf[(n / 2) as usize] {
            0 => n,
            p => p as u64,
        }
    }

    #[inline(always)]
    pub fn is_prime(&self, n: u64) -> bool {
        if n < 2 {
            return false;
        }
        if n % 2 == 0 {
            return n == 2;
        }
        self.spf[(n / 2) as usize] == 0
    }

    /// Ascending `(prime, exponent)` pairs of `n <= limit`.
    pub fn factorize(&self, mut n: u64) -> Vec<(u64, u32)> {
        let mut factors = Vec::new();
        let twos = n.trailing_zeros();
        if n > 0 && twos > 0 {
            factors.push((2, twos));
            n >>= twos;
        }
        while n > 1 {
            let p = self.smallest_factor(n);
            let mut e = 0;
            while n % p == 0 {
                n /= p;
                e += 1;
            }
            factors.push((p, e));
        }
        factors
    }
}
