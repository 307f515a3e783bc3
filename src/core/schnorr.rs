// src/core/schnorr.rs
// Schnorr signatures in challenge-response (e, y) form over a prime-order
// subgroup: q | p-1, generator of order exactly q, challenge bound to the
// message and commitment through SHA-256.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::core::bigint::{miller_rabin, mod_pow, random_in_range, MILLER_RABIN_ROUNDS};
use crate::core::error::{CryptoError, CryptoResult};
use crate::core::sha256::sha256;

/// Domain parameters: prime modulus `p`, prime subgroup order `q` dividing
/// `p-1`, and a generator of order exactly `q` modulo `p`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchnorrGroup {
    pub p: BigUint,
    pub q: BigUint,
    pub generator: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchnorrKeyPair {
    /// `s` in `[0, q)`; never transmitted.
    pub private: BigUint,
    /// `v = generator^(q-s) mod p`, so `generator^s * v == 1 (mod p)`.
    pub public: BigUint,
}

/// Challenge-response signature: `e = H(M || x) mod q`,
/// `y = (r + s*e) mod q`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchnorrSignature {
    pub e: BigUint,
    pub y: BigUint,
}

/// Verification verdict plus the recomputed commitment `x'` so the caller
/// can display it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verification {
    pub is_valid: bool,
    pub commitment: BigUint,
}

impl SchnorrGroup {
    pub fn new(p: BigUint, q: BigUint, generator: BigUint) -> CryptoResult<Self> {
        let group = SchnorrGroup { p, q, generator };
        group.validate()?;
        Ok(group)
    }

    /// Check the group laws: both moduli prime, `q | p-1`, generator of
    /// order exactly `q`. Since `q` is prime, an element's order divides `q`
    /// and is therefore 1 or `q`; order exactly `q` reduces to
    /// `generator != 1` and `generator^q == 1 (mod p)`.
    pub fn validate(&self) -> CryptoResult<()> {
        if !miller_rabin(&self.p, MILLER_RABIN_ROUNDS) {
            return Err(CryptoError::domain("p must be prime"));
        }
        if !miller_rabin(&self.q, MILLER_RABIN_ROUNDS) {
            return Err(CryptoError::domain("q must be prime"));
        }
        let p_minus_one = &self.p - BigUint::one();
        if !(&p_minus_one % &self.q).is_zero() {
            return Err(CryptoError::domain("q must divide p-1"));
        }
        if self.generator <= BigUint::one() || self.generator >= self.p {
            return Err(CryptoError::domain("generator must lie in (1, p)"));
        }
        if !mod_pow(&self.generator, &self.q, &self.p).is_one() {
            return Err(CryptoError::domain("generator must have order q modulo p"));
        }
        Ok(())
    }
}

// e = H(message || "|" || decimal(x)) mod q, digest read as a big-endian
// integer. The "|" separator matches the transcript format users see.
fn challenge(message: &str, commitment: &BigUint, q: &BigUint) -> BigUint {
    let input = format!("{}|{}", message, commitment);
    BigUint::from_bytes_be(&sha256(input.as_bytes())) % q
}

/// Generate a key pair. A fixed private key is accepted only for
/// deterministic tests; the default path draws `s` from `[1, q)` with OS
/// randomness.
pub fn generate_key_pair(
    group: &SchnorrGroup,
    fixed_private: Option<BigUint>,
) -> CryptoResult<SchnorrKeyPair> {
    group.validate()?;
    let private = match fixed_private {
        Some(s) => {
            if s >= group.q {
                return Err(CryptoError::range("private key must lie in [0, q)"));
            }
            s
        }
        None => random_in_range(&BigUint::one(), &group.q),
    };
    let public = mod_pow(&group.generator, &(&group.q - &private), &group.p);
    Ok(SchnorrKeyPair { private, public })
}

/// Sign `message`: ephemeral `r` in `[1, q)` (fixed only for tests),
/// commitment `x = generator^r mod p`, challenge `e`, response
/// `y = (r + private*e) mod q`.
pub fn sign(
    message: &str,
    private_key: &BigUint,
    group: &SchnorrGroup,
    fixed_r: Option<BigUint>,
) -> CryptoResult<SchnorrSignature> {
    group.validate()?;
    if *private_key >= group.q {
        return Err(CryptoError::range("private key must lie in [0, q)"));
    }
    let r = match fixed_r {
        Some(r) => {
            if r.is_zero() || r >= group.q {
                return Err(CryptoError::range("ephemeral value must lie in [1, q)"));
            }
            r
        }
        None => random_in_range(&BigUint::one(), &group.q),
    };
    let commitment = mod_pow(&group.generator, &r, &group.p);
    let e = challenge(message, &commitment, &group.q);
    let y = (&r + private_key * &e) % &group.q;
    Ok(SchnorrSignature { e, y })
}

/// Verify: recompute `x' = generator^y * public^e mod p` and check the
/// recomputed challenge matches `e`.
pub fn verify(
    signature: &SchnorrSignature,
    public_key: &BigUint,
    message: &str,
    group: &SchnorrGroup,
) -> CryptoResult<Verification> {
    group.validate()?;
    if signature.y >= group.q {
        return Err(CryptoError::range("response y must lie in [0, q)"));
    }
    if public_key.is_zero() || *public_key >= group.p {
        return Err(CryptoError::range("public key must lie in [1, p)"));
    }
    let commitment = (mod_pow(&group.generator, &signature.y, &group.p)
        * mod_pow(public_key, &signature.e, &group.p))
        % &group.p;
    let recomputed = challenge(message, &commitment, &group.q);
    Ok(Verification {
        is_valid: recomputed == signature.e,
        commitment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    // p = 23, q = 11 divides 22, and 2^11 = 2048 = 1 mod 23.
    fn group() -> SchnorrGroup {
        SchnorrGroup::new(big(23), big(11), big(2)).unwrap()
    }

    #[test]
    fn rejects_generator_of_wrong_order() {
        // 5 is a primitive root mod 23, so its order is 22, not 11.
        let err = SchnorrGroup::new(big(23), big(11), big(5)).unwrap_err();
        assert!(matches!(err, CryptoError::Domain(_)));
    }

    #[test]
    fn rejects_q_not_dividing_p_minus_one() {
        assert!(SchnorrGroup::new(big(23), big(7), big(2)).is_err());
    }

    #[test]
    fn public_key_inverts_private_exponent() {
        let group = group();
        let pair = generate_key_pair(&group, Some(big(7))).unwrap();
        let product =
            (mod_pow(&group.generator, &pair.private, &group.p) * &pair.public) % &group.p;
        assert!(product.is_one());
    }

    #[test]
    fn deterministic_sign_verify() {
        let group = group();
        let pair = generate_key_pair(&group, Some(big(7))).unwrap();
        let sig = sign("hello", &pair.private, &group, Some(big(3))).unwrap();
        let verdict = verify(&sig, &pair.public, "hello", &group).unwrap();
        assert!(verdict.is_valid);
        assert_eq!(verdict.commitment, mod_pow(&big(2), &big(3), &big(23)));
    }

    #[test]
    fn tampered_message_fails() {
        let group = group();
        let pair = generate_key_pair(&group, Some(big(7))).unwrap();
        let sig = sign("hello", &pair.private, &group, Some(big(3))).unwrap();
        let verdict = verify(&sig, &pair.public, "hell0", &group).unwrap();
        assert!(!verdict.is_valid);
    }
}
