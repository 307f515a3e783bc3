mod cli;
mod commands;
mod config;
mod core;

use clap::Parser;

use crate::cli::{AesCommand, Command, CryptolabCli, NumbersCommand, SchnorrCommand};
use crate::config::resolve_config_path;

fn main() -> anyhow::Result<()> {
    let args = CryptolabCli::parse();

    let cfg_path = resolve_config_path(&args.config);
    let cfg = config::load(cfg_path.as_deref())?;
    let json = args.json;

    match args.cmd {
        Command::Hash { message, hex } => commands::hash::run(&message, hex, json),

        Command::Aes { cmd } => match cmd {
            AesCommand::Encrypt {
                key,
                iv,
                mode,
                plaintext,
                hex,
                trace,
            } => commands::aes::encrypt(&key, &iv, mode, &plaintext, hex, trace, json),
            AesCommand::Decrypt {
                key,
                iv,
                mode,
                ciphertext,
                trace,
            } => commands::aes::decrypt(&key, &iv, mode, &ciphertext, trace, json),
        },

        Command::Dh {
            prime,
            generator,
            private_a,
            private_b,
        } => commands::dh::run(&prime, &generator, &private_a, &private_b, &cfg, json),

        Command::Schnorr { cmd } => match cmd {
            SchnorrCommand::Keygen {
                p,
                q,
                generator,
                private,
            } => commands::schnorr::keygen(&p, &q, &generator, &private, json),
            SchnorrCommand::Sign {
                p,
                q,
                generator,
                private,
                ephemeral,
                message,
            } => commands::schnorr::run_sign(&p, &q, &generator, &private, &ephemeral, &message, json),
            SchnorrCommand::Verify {
                p,
                q,
                generator,
                public,
                challenge,
                response,
                message,
            } => commands::schnorr::run_verify(
                &p, &q, &generator, &public, &challenge, &response, &message, json,
            ),
        },

        Command::Numbers { cmd } => match cmd {
            NumbersCommand::Gcd { a, b } => commands::numbers::gcd(&a, &b, json),
            NumbersCommand::Inverse { a, m } => commands::numbers::inverse(&a, &m, json),
            NumbersCommand::Modpow {
                base,
                exponent,
                modulus,
            } => commands::numbers::modpow(&base, &exponent, &modulus, json),
            NumbersCommand::IsPrime { n, rounds } => {
                commands::numbers::is_prime_cmd(&n, rounds, json)
            }
            NumbersCommand::PrimitiveRoot { p } => commands::numbers::primitive_root(&p, json),
        },
    }
}
