use anyhow::Result;
use colored::Colorize;
use num_bigint::BigUint;

use crate::commands::parse_biguint;
use crate::config::Config;
use crate::core::diffie_hellman::{
    generate_key_pair, generate_parameters, parameters_with_generator, perform_exchange,
    derive_symmetric_key, DhParameters,
};

fn resolve_parameters(
    prime: &Option<String>,
    generator: &Option<String>,
    config: &Config,
) -> Result<DhParameters> {
    let p = match prime {
        Some(p) => parse_biguint(p, "prime P")?,
        None => parse_biguint(&config.dh.prime, "configured prime")?,
    };
    let g = match (generator, prime) {
        (Some(g), _) => Some(parse_biguint(g, "generator G")?),
        // The configured generator only applies to the configured prime.
        (None, None) => match &config.dh.generator {
            Some(g) => Some(parse_biguint(g, "configured generator")?),
            None => None,
        },
        (None, Some(_)) => None,
    };

    Ok(match g {
        Some(g) => parameters_with_generator(&p, &g)?,
        None => generate_parameters(&p)?,
    })
}

fn resolve_private(
    value: &Option<String>,
    name: &str,
    params: &DhParameters,
) -> Result<BigUint> {
    match value {
        Some(v) => parse_biguint(v, name),
        None => Ok(generate_key_pair(params, None)?.private),
    }
}

pub fn run(
    prime: &Option<String>,
    generator: &Option<String>,
    private_a: &Option<String>,
    private_b: &Option<String>,
    config: &Config,
    json: bool,
) -> Result<()> {
    let params = resolve_parameters(prime, generator, config)?;
    let a = resolve_private(private_a, "private key A", &params)?;
    let b = resolve_private(private_b, "private key B", &params)?;

    let exchange = perform_exchange(&params, a, b)?;
    let aes_key = derive_symmetric_key(&exchange.shared_secret);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "p": params.p.to_string(),
                "g": params.g.to_string(),
                "public_a": exchange.pair_a.public.to_string(),
                "public_b": exchange.pair_b.public.to_string(),
                "shared_secret": exchange.shared_secret.to_string(),
                "aes_key": hex::encode(aes_key),
                "steps": exchange.steps,
            })
        );
        return Ok(());
    }

    for step in &exchange.steps {
        println!("{}", step);
    }
    println!(
        "{} {}",
        "shared secret".cyan().bold(),
        exchange.shared_secret
    );
    println!(
        "{} {}",
        "derived AES-128 key".cyan().bold(),
        hex::encode(aes_key)
    );
    Ok(())
}
