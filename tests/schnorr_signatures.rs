use cryptolab::core::bigint::{mod_inverse, mod_reduce};
use cryptolab::core::error::CryptoError;
use cryptolab::core::schnorr::{generate_key_pair, sign, verify, SchnorrGroup, SchnorrSignature};
use num_bigint::{BigInt, BigUint};
use num_traits::One;

fn biguint(n: u64) -> BigUint {
    BigUint::from(n)
}

// p = 23, q = 11 | 22, generator 2 has order 11 (2^11 = 2048 = 1 mod 23).
fn group() -> SchnorrGroup {
    SchnorrGroup::new(biguint(23), biguint(11), biguint(2)).unwrap()
}

#[test]
fn group_validation() {
    assert!(matches!(
        SchnorrGroup::new(biguint(24), biguint(11), biguint(2)).unwrap_err(),
        CryptoError::Domain(_)
    ));
    assert!(SchnorrGroup::new(biguint(23), biguint(7), biguint(2)).is_err());
    // 5 is a primitive root mod 23: order 22, not 11.
    assert!(SchnorrGroup::new(biguint(23), biguint(11), biguint(5)).is_err());
    assert!(SchnorrGroup::new(biguint(23), biguint(11), biguint(1)).is_err());
}

#[test]
fn deterministic_vector() {
    // s = 7 gives v = 2^(11-7) mod 23 = 16; signing "hello" with r = 3
    // commits to x = 8 and yields (e, y) = (7, 8).
    let group = group();
    let pair = generate_key_pair(&group, Some(biguint(7))).unwrap();
    assert_eq!(pair.public, biguint(16));

    let sig = sign("hello", &pair.private, &group, Some(biguint(3))).unwrap();
    assert_eq!(sig.e, biguint(7));
    assert_eq!(sig.y, biguint(8));

    let verdict = verify(&sig, &pair.public, "hello", &group).unwrap();
    assert!(verdict.is_valid);
    assert_eq!(verdict.commitment, biguint(8));
}

#[test]
fn random_keys_round_trip() {
    let group = group();
    for message in ["", "a", "schnorr", "longer message with spaces"] {
        let pair = generate_key_pair(&group, None).unwrap();
        let sig = sign(message, &pair.private, &group, None).unwrap();
        let verdict = verify(&sig, &pair.public, message, &group).unwrap();
        assert!(verdict.is_valid, "message {:?}", message);
    }
}

#[test]
fn tampering_invalidates() {
    let group = group();
    let pair = generate_key_pair(&group, Some(biguint(7))).unwrap();
    let sig = sign("hello", &pair.private, &group, Some(biguint(3))).unwrap();

    // Message tampering.
    assert!(!verify(&sig, &pair.public, "hellp", &group).unwrap().is_valid);

    // Challenge tampering: e = 7 becomes 5. (In a group this small a few
    // altered challenges collide with their own recomputation; 5 does not.)
    let bad_e = SchnorrSignature { e: biguint(5), y: sig.y.clone() };
    assert!(!verify(&bad_e, &pair.public, "hello", &group).unwrap().is_valid);

    // Response tampering: y = 8 becomes 9.
    let bad_y = SchnorrSignature { e: sig.e.clone(), y: biguint(9) };
    assert!(!verify(&bad_y, &pair.public, "hello", &group).unwrap().is_valid);
}

#[test]
fn range_checks() {
    let group = group();
    let pair = generate_key_pair(&group, Some(biguint(7))).unwrap();
    let sig = sign("hello", &pair.private, &group, Some(biguint(3))).unwrap();

    let oversized = SchnorrSignature { e: sig.e.clone(), y: biguint(11) };
    assert!(matches!(
        verify(&oversized, &pair.public, "hello", &group).unwrap_err(),
        CryptoError::Range(_)
    ));
    assert!(matches!(
        verify(&sig, &biguint(0), "hello", &group).unwrap_err(),
        CryptoError::Range(_)
    ));
    assert!(matches!(
        verify(&sig, &biguint(23), "hello", &group).unwrap_err(),
        CryptoError::Range(_)
    ));

    assert!(generate_key_pair(&group, Some(biguint(11))).is_err());
    assert!(sign("m", &biguint(7), &group, Some(biguint(0))).is_err());
    assert!(sign("m", &biguint(7), &group, Some(biguint(11))).is_err());
}

// Reusing the ephemeral r across two messages leaks the private key:
// y1 - y2 = s * (e1 - e2) mod q, so s = (y1 - y2) / (e1 - e2) mod q.
// Inherent to the scheme, and the reason r must be fresh per signature.
#[test]
fn ephemeral_reuse_recovers_private_key() {
    let group = group();
    let s = biguint(7);
    let r = biguint(4);
    let sig1 = sign("alpha", &s, &group, Some(r.clone())).unwrap();
    let sig2 = sign("beta", &s, &group, Some(r)).unwrap();
    assert_ne!(sig1.e, sig2.e, "distinct challenges required for recovery");

    let q = BigInt::from(11);
    let dy = BigInt::from(sig1.y.clone()) - BigInt::from(sig2.y.clone());
    let de = mod_reduce(
        &(BigInt::from(sig1.e.clone()) - BigInt::from(sig2.e.clone())),
        &q,
    );
    let recovered = mod_reduce(&(dy * mod_inverse(&de, &q).unwrap()), &q);
    assert_eq!(recovered, BigInt::from(7));
}

#[test]
fn random_private_key_stays_below_q() {
    let group = group();
    for _ in 0..50 {
        let pair = generate_key_pair(&group, None).unwrap();
        assert!(pair.private >= BigUint::one() && pair.private < biguint(11));
    }
}
