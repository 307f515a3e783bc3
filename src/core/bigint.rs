// src/core/bigint.rs
// Arbitrary-precision number theory written out step by step; nothing here
// shells out to library modpow or primality black boxes.

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::rngs::OsRng;

use crate::core::error::{CryptoError, CryptoResult};

/// Default witness count for [`miller_rabin`].
pub const MILLER_RABIN_ROUNDS: u32 = 5;

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `a*x + b*y == g == gcd(a, b)`.
pub fn extended_euclid(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        return (a.clone(), BigInt::one(), BigInt::zero());
    }
    let (g, x1, y1) = extended_euclid(b, &(a % b));
    let x = y1.clone();
    let y = x1 - (a / b) * y1;
    (g, x, y)
}

pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    extended_euclid(a, b).0
}

/// Remainder normalized into `[0, m)` even for negative `a`.
pub fn mod_reduce(a: &BigInt, m: &BigInt) -> BigInt {
    ((a % m) + m) % m
}

/// Modular inverse of `a` modulo `m`, in `[0, m)`.
///
/// Fails with a domain error when `gcd(a, m) != 1`.
pub fn mod_inverse(a: &BigInt, m: &BigInt) -> CryptoResult<BigInt> {
    let (g, x, _) = extended_euclid(a, m);
    if !g.is_one() {
        return Err(CryptoError::domain(format!(
            "no modular inverse: gcd({}, {}) != 1",
            a, m
        )));
    }
    Ok(mod_reduce(&x, m))
}

/// Square-and-multiply `base^exponent mod modulus`, consuming the exponent
/// least-significant bit first. `exponent == 0` yields 1; `modulus == 1`
/// yields 0.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_one() {
        return BigUint::zero();
    }
    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exponent = exponent.clone();
    while !exponent.is_zero() {
        if exponent.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exponent >>= 1;
    }
    result
}

/// Deterministic primality by trial division over 6k±1 candidates up to √n.
pub fn is_prime(n: &BigUint) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u32);
    let three = BigUint::from(3u32);
    if *n <= one {
        return false;
    }
    if *n <= three {
        return true;
    }
    if (n % &two).is_zero() || (n % &three).is_zero() {
        return false;
    }
    let mut i = BigUint::from(5u32);
    while &i * &i <= *n {
        if (n % &i).is_zero() || (n % (&i + &two)).is_zero() {
            return false;
        }
        i += 6u32;
    }
    true
}

/// Miller–Rabin probabilistic primality test with `rounds` random witnesses,
/// each drawn from `[2, n-2]`.
pub fn miller_rabin(n: &BigUint, rounds: u32) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u32);
    let three = BigUint::from(3u32);
    if *n <= one {
        return false;
    }
    if *n == two || *n == three {
        return true;
    }
    if (n % &two).is_zero() {
        return false;
    }

    // n - 1 = d * 2^s with d odd
    let n_minus_one = n - &one;
    let mut d = n_minus_one.clone();
    let mut s = 0u64;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    let mut rng = OsRng;
    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = mod_pow(&a, &d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 0..s.saturating_sub(1) {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Distinct prime factors of `n`, by trial division.
pub fn prime_factors(n: &BigUint) -> Vec<BigUint> {
    let mut factors = Vec::new();
    let mut n = n.clone();
    let mut i = BigUint::from(2u32);
    while &i * &i <= n {
        if (&n % &i).is_zero() {
            factors.push(i.clone());
            while (&n % &i).is_zero() {
                n /= &i;
            }
        }
        i += 1u32;
    }
    if n > BigUint::one() {
        factors.push(n);
    }
    factors
}

/// Smallest primitive root modulo the prime `p`: the first `g >= 2` with
/// `g^((p-1)/f) != 1 (mod p)` for every prime factor `f` of `p-1`.
pub fn find_primitive_root(p: &BigUint) -> CryptoResult<BigUint> {
    if !is_prime(p) {
        return Err(CryptoError::domain("P must be prime"));
    }
    let one = BigUint::one();
    let phi = p - &one;
    let factors = prime_factors(&phi);

    let mut g = BigUint::from(2u32);
    while g < *p {
        if factors.iter().all(|f| !mod_pow(&g, &(&phi / f), p).is_one()) {
            return Ok(g);
        }
        g += 1u32;
    }
    Err(CryptoError::domain(format!("no primitive root found below {}", p)))
}

/// Uniform random draw from the half-open interval `[low, high)`,
/// cryptographically sourced from the OS.
pub fn random_in_range(low: &BigUint, high: &BigUint) -> BigUint {
    let mut rng = OsRng;
    rng.gen_biguint_range(low, high)
}
