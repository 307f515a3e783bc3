// src/core/diffie_hellman.rs
// Classic two-party Diffie-Hellman over a prime field, with a human-readable
// transcript of the exchange and SHA-256 key derivation into an AES-128 key.

use num_bigint::BigUint;
use num_traits::One;

use crate::core::bigint::{find_primitive_root, is_prime, mod_pow, random_in_range};
use crate::core::error::{CryptoError, CryptoResult};
use crate::core::sha256::sha256;

/// Public group: a prime modulus and a primitive root modulo it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DhParameters {
    pub p: BigUint,
    pub g: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DhKeyPair {
    pub private: BigUint,
    pub public: BigUint,
}

/// Both sides of a completed exchange plus the step-by-step transcript.
#[derive(Clone, Debug)]
pub struct DhExchange {
    pub pair_a: DhKeyPair,
    pub pair_b: DhKeyPair,
    pub shared_secret: BigUint,
    pub steps: Vec<String>,
}

/// Validate `p` and discover its smallest primitive root.
pub fn generate_parameters(p: &BigUint) -> CryptoResult<DhParameters> {
    if !is_prime(p) {
        return Err(CryptoError::domain("P must be prime"));
    }
    let g = find_primitive_root(p)?;
    Ok(DhParameters { p: p.clone(), g })
}

/// Validate a caller-supplied group: `p` prime and `g` a primitive root
/// (for every prime factor `f` of `p-1`, `g^((p-1)/f) != 1 (mod p)`).
pub fn parameters_with_generator(p: &BigUint, g: &BigUint) -> CryptoResult<DhParameters> {
    if !is_prime(p) {
        return Err(CryptoError::domain("P must be prime"));
    }
    let phi = p - BigUint::one();
    let is_root = *g > BigUint::one()
        && *g < *p
        && crate::core::bigint::prime_factors(&phi)
            .iter()
            .all(|f| !mod_pow(g, &(&phi / f), p).is_one());
    if !is_root {
        return Err(CryptoError::domain(format!(
            "{} is not a primitive root modulo {}",
            g, p
        )));
    }
    Ok(DhParameters { p: p.clone(), g: g.clone() })
}

/// Build a key pair. A missing private exponent is drawn from `[2, P-2]`
/// with OS randomness; a supplied one outside that interval is rejected.
pub fn generate_key_pair(
    params: &DhParameters,
    private: Option<BigUint>,
) -> CryptoResult<DhKeyPair> {
    let two = BigUint::from(2u32);
    let upper = &params.p - &two; // largest valid exponent, P-2
    let private = match private {
        Some(private) => {
            if private < two || private > upper {
                return Err(CryptoError::range(format!(
                    "private key must lie in [2, {}]",
                    upper
                )));
            }
            private
        }
        None => random_in_range(&two, &(&upper + BigUint::one())),
    };
    let public = mod_pow(&params.g, &private, &params.p);
    Ok(DhKeyPair { private, public })
}

/// `their_public ^ my_private mod P`.
pub fn compute_shared_secret(
    params: &DhParameters,
    my_private: &BigUint,
    their_public: &BigUint,
) -> BigUint {
    mod_pow(their_public, my_private, &params.p)
}

/// Derive an AES-128 key: SHA-256 over the secret's decimal representation,
/// truncated to the first 16 bytes.
pub fn derive_symmetric_key(secret: &BigUint) -> [u8; 16] {
    let digest = sha256(secret.to_string().as_bytes());
    let mut key = [0u8; 16];
    key.copy_from_slice(&digest[..16]);
    key
}

/// Run both sides of the exchange and assert the two secrets agree.
///
/// The equality is guaranteed by the math; recomputing it here surfaces
/// implementation bugs as [`CryptoError::Consistency`].
pub fn perform_exchange(
    params: &DhParameters,
    private_a: BigUint,
    private_b: BigUint,
) -> CryptoResult<DhExchange> {
    let pair_a = generate_key_pair(params, Some(private_a))?;
    let pair_b = generate_key_pair(params, Some(private_b))?;
    let secret_a = compute_shared_secret(params, &pair_a.private, &pair_b.public);
    let secret_b = compute_shared_secret(params, &pair_b.private, &pair_a.public);

    if secret_a != secret_b {
        return Err(CryptoError::Consistency);
    }

    let steps = vec![
        format!(
            "Step 1: Alice and Bob agree on public parameters P = {}, G = {}",
            params.p, params.g
        ),
        format!(
            "Step 2: Alice picks private key a = {}, Bob picks private key b = {}",
            pair_a.private, pair_b.private
        ),
        format!(
            "Step 3: Alice computes x = G^a mod P = {}, Bob computes y = G^b mod P = {}",
            pair_a.public, pair_b.public
        ),
        "Step 4: Alice and Bob exchange their public values".to_string(),
        format!(
            "Step 5: Alice receives y = {}, Bob receives x = {}",
            pair_b.public, pair_a.public
        ),
        format!(
            "Step 6: Alice computes k_A = y^a mod P = {}, Bob computes k_B = x^b mod P = {}",
            secret_a, secret_b
        ),
        format!("Step 7: shared secret established: {}", secret_a),
    ];

    Ok(DhExchange {
        pair_a,
        pair_b,
        shared_secret: secret_a,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn parameters_for_23() {
        let params = generate_parameters(&big(23)).unwrap();
        assert_eq!(params.g, big(5));
    }

    #[test]
    fn rejects_composite_modulus() {
        assert!(generate_parameters(&big(22)).is_err());
    }

    #[test]
    fn key_pair_range_check() {
        let params = generate_parameters(&big(23)).unwrap();
        assert!(generate_key_pair(&params, Some(big(1))).is_err());
        assert!(generate_key_pair(&params, Some(big(22))).is_err());
        assert!(generate_key_pair(&params, Some(big(21))).is_ok());
    }

    #[test]
    fn textbook_exchange() {
        // P = 23, G = 5, a = 6, b = 15: the classic worked example with
        // shared secret 2.
        let params = generate_parameters(&big(23)).unwrap();
        let exchange = perform_exchange(&params, big(6), big(15)).unwrap();
        assert_eq!(exchange.pair_a.public, big(8));
        assert_eq!(exchange.pair_b.public, big(19));
        assert_eq!(exchange.shared_secret, big(2));
        assert_eq!(exchange.steps.len(), 7);
    }

    #[test]
    fn random_private_stays_in_range() {
        let params = generate_parameters(&big(23)).unwrap();
        for _ in 0..50 {
            let pair = generate_key_pair(&params, None).unwrap();
            assert!(pair.private >= big(2) && pair.private <= big(21));
        }
    }
}
