pub mod aes;
pub mod dh;
pub mod hash;
pub mod numbers;
pub mod schnorr;

use anyhow::{anyhow, Context, Result};
use num_bigint::{BigInt, BigUint};

pub(crate) fn parse_biguint(value: &str, name: &str) -> Result<BigUint> {
    value
        .parse::<BigUint>()
        .with_context(|| format!("{} must be a non-negative decimal integer, got {:?}", name, value))
}

pub(crate) fn parse_bigint(value: &str, name: &str) -> Result<BigInt> {
    value
        .parse::<BigInt>()
        .with_context(|| format!("{} must be a decimal integer, got {:?}", name, value))
}

pub(crate) fn parse_hex_block(value: &str, name: &str) -> Result<[u8; 16]> {
    let bytes = hex::decode(value).with_context(|| format!("{} must be hex encoded", name))?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| anyhow!("{} must be 16 bytes (32 hex chars), got {} bytes", name, len))
}
