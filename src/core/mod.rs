//! Cryptographic primitive layer: every algorithm is written out from first
//! principles so callers can inspect each intermediate step.

pub mod aes128;
pub mod bigint;
pub mod diffie_hellman;
pub mod error;
pub mod schnorr;
pub mod sha256;
