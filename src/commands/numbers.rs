use anyhow::Result;
use colored::Colorize;

use crate::commands::{parse_bigint, parse_biguint};
use crate::core::bigint::{
    extended_euclid, find_primitive_root, is_prime, miller_rabin, mod_inverse, mod_pow,
};

pub fn gcd(a: &str, b: &str, json: bool) -> Result<()> {
    let a = parse_bigint(a, "A")?;
    let b = parse_bigint(b, "B")?;
    let (g, x, y) = extended_euclid(&a, &b);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "gcd": g.to_string(),
                "x": x.to_string(),
                "y": y.to_string(),
            })
        );
    } else {
        println!("{} {}", "gcd".cyan().bold(), g);
        println!("Bezout: ({})*({}) + ({})*({}) = {}", a, x, b, y, g);
    }
    Ok(())
}

pub fn inverse(a: &str, m: &str, json: bool) -> Result<()> {
    let a = parse_bigint(a, "A")?;
    let m = parse_bigint(m, "M")?;
    let inv = mod_inverse(&a, &m)?;

    if json {
        println!("{}", serde_json::json!({ "inverse": inv.to_string() }));
    } else {
        println!("{} {}", "inverse".cyan().bold(), inv);
    }
    Ok(())
}

pub fn modpow(base: &str, exponent: &str, modulus: &str, json: bool) -> Result<()> {
    let base = parse_biguint(base, "BASE")?;
    let exponent = parse_biguint(exponent, "EXP")?;
    let modulus = parse_biguint(modulus, "MODULUS")?;
    let result = mod_pow(&base, &exponent, &modulus);

    if json {
        println!("{}", serde_json::json!({ "result": result.to_string() }));
    } else {
        println!("{} {}", "result".cyan().bold(), result);
    }
    Ok(())
}

pub fn is_prime_cmd(n: &str, rounds: u32, json: bool) -> Result<()> {
    let n = parse_biguint(n, "N")?;
    let probable = miller_rabin(&n, rounds);
    // Trial division is only interactive for small candidates.
    let exact = if n.bits() <= 44 { Some(is_prime(&n)) } else { None };

    if json {
        println!(
            "{}",
            serde_json::json!({
                "miller_rabin": probable,
                "rounds": rounds,
                "trial_division": exact,
            })
        );
        return Ok(());
    }

    let verdict = if probable { "probably prime".green() } else { "composite".red() };
    println!("{} {} ({} Miller-Rabin rounds)", "verdict".cyan().bold(), verdict.bold(), rounds);
    if let Some(exact) = exact {
        let word = if exact { "prime" } else { "composite" };
        println!("trial division agrees: {}", word);
    }
    Ok(())
}

pub fn primitive_root(p: &str, json: bool) -> Result<()> {
    let p = parse_biguint(p, "P")?;
    let root = find_primitive_root(&p)?;

    if json {
        println!("{}", serde_json::json!({ "root": root.to_string() }));
    } else {
        println!("{} {}", "primitive root".cyan().bold(), root);
    }
    Ok(())
}
