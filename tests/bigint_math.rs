use cryptolab::core::bigint::{
    extended_euclid, find_primitive_root, gcd, is_prime, miller_rabin, mod_inverse, mod_pow,
    mod_reduce, prime_factors,
};
use num_bigint::{BigInt, BigUint};
use num_traits::One;

fn biguint(n: u64) -> BigUint {
    BigUint::from(n)
}

#[test]
fn bezout_identity_holds() {
    let pairs = [(240i64, 46i64), (17, 5), (1, 1), (99, 0), (0, 7), (1071, 462)];
    for (a, b) in pairs {
        let a = BigInt::from(a);
        let b = BigInt::from(b);
        let (g, x, y) = extended_euclid(&a, &b);
        assert_eq!(&a * &x + &b * &y, g, "a={} b={}", a, b);
    }
}

#[test]
fn gcd_known_values() {
    assert_eq!(gcd(&BigInt::from(1071), &BigInt::from(462)), BigInt::from(21));
    assert_eq!(gcd(&BigInt::from(13), &BigInt::from(7)), BigInt::one());
}

#[test]
fn inverse_law() {
    // (a * inverse(a, m)) mod m == 1 whenever gcd(a, m) == 1.
    let cases = [(3i64, 11i64), (10, 17), (7, 26), (123456789, 1000000007)];
    for (a, m) in cases {
        let a = BigInt::from(a);
        let m = BigInt::from(m);
        let inv = mod_inverse(&a, &m).unwrap();
        assert!(inv >= BigInt::from(0) && inv < m);
        assert_eq!(mod_reduce(&(&a * &inv), &m), BigInt::one());
    }
}

#[test]
fn inverse_fails_without_coprimality() {
    assert!(mod_inverse(&BigInt::from(4), &BigInt::from(8)).is_err());
}

#[test]
fn mod_reduce_normalizes_negatives() {
    assert_eq!(mod_reduce(&BigInt::from(-3), &BigInt::from(7)), BigInt::from(4));
    assert_eq!(mod_reduce(&BigInt::from(10), &BigInt::from(7)), BigInt::from(3));
}

#[test]
fn mod_pow_small_values() {
    assert_eq!(mod_pow(&biguint(2), &biguint(10), &biguint(1000)), biguint(24));
    assert_eq!(mod_pow(&biguint(5), &biguint(0), &biguint(7)), biguint(1));
    assert_eq!(mod_pow(&biguint(5), &biguint(3), &biguint(1)), biguint(0));
}

// Exercises the 1024-bit magnitude requirement against num-bigint's own
// modpow as oracle.
#[test]
fn mod_pow_matches_oracle_at_1024_bits() {
    let base = (BigUint::one() << 1023u32) + biguint(0x1234_5678);
    let exponent = (BigUint::one() << 1024u32) + biguint(987_654_321);
    let modulus = (BigUint::one() << 1021u32) + biguint(12_345);
    assert_eq!(
        mod_pow(&base, &exponent, &modulus),
        base.modpow(&exponent, &modulus)
    );
}

#[test]
fn trial_division_and_miller_rabin_agree_below_10_000() {
    for n in 0u64..10_000 {
        let n = biguint(n);
        assert_eq!(
            is_prime(&n),
            miller_rabin(&n, 5),
            "disagreement at {}",
            n
        );
    }
}

#[test]
fn miller_rabin_accepts_large_known_prime() {
    // 2^89 - 1, a Mersenne prime; repeated runs must never reject it.
    let p = (BigUint::one() << 89u32) - BigUint::one();
    for _ in 0..20 {
        assert!(miller_rabin(&p, 5));
    }
}

#[test]
fn miller_rabin_rejects_carmichael_number() {
    // 561 = 3 * 11 * 17 fools the plain Fermat test.
    assert!(!miller_rabin(&biguint(561), 5));
}

#[test]
fn prime_factor_sets() {
    assert_eq!(prime_factors(&biguint(22)), vec![biguint(2), biguint(11)]);
    assert_eq!(prime_factors(&biguint(97)), vec![biguint(97)]);
}

#[test]
fn primitive_roots_known_values() {
    // Smallest primitive roots: 2 mod 11, 3 mod 7, 5 mod 23.
    assert_eq!(find_primitive_root(&biguint(11)).unwrap(), biguint(2));
    assert_eq!(find_primitive_root(&biguint(7)).unwrap(), biguint(3));
    assert_eq!(find_primitive_root(&biguint(23)).unwrap(), biguint(5));
}

#[test]
fn primitive_root_requires_prime() {
    assert!(find_primitive_root(&biguint(15)).is_err());
}

#[test]
fn primitive_root_generates_full_group() {
    let p = biguint(23);
    let g = find_primitive_root(&p).unwrap();
    let mut seen = std::collections::HashSet::new();
    let mut value = BigUint::one();
    for _ in 0..22 {
        value = (&value * &g) % &p;
        seen.insert(value.clone());
    }
    assert_eq!(seen.len(), 22);
}
