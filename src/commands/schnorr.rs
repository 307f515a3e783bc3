use anyhow::Result;
use colored::Colorize;

use crate::commands::parse_biguint;
use crate::core::schnorr::{
    generate_key_pair, sign, verify, SchnorrGroup, SchnorrSignature,
};

fn parse_group(p: &str, q: &str, generator: &str) -> Result<SchnorrGroup> {
    Ok(SchnorrGroup::new(
        parse_biguint(p, "prime p")?,
        parse_biguint(q, "order q")?,
        parse_biguint(generator, "generator")?,
    )?)
}

pub fn keygen(
    p: &str,
    q: &str,
    generator: &str,
    private: &Option<String>,
    json: bool,
) -> Result<()> {
    let group = parse_group(p, q, generator)?;
    let fixed = private
        .as_ref()
        .map(|s| parse_biguint(s, "private key"))
        .transpose()?;
    let pair = generate_key_pair(&group, fixed)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "private": pair.private.to_string(),
                "public": pair.public.to_string(),
            })
        );
    } else {
        println!("{} {}", "private s".cyan().bold(), pair.private);
        println!("{} {}", "public v ".cyan().bold(), pair.public);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn run_sign(
    p: &str,
    q: &str,
    generator: &str,
    private: &str,
    ephemeral: &Option<String>,
    message: &str,
    json: bool,
) -> Result<()> {
    let group = parse_group(p, q, generator)?;
    let private = parse_biguint(private, "private key")?;
    let fixed_r = ephemeral
        .as_ref()
        .map(|r| parse_biguint(r, "ephemeral r"))
        .transpose()?;
    let sig = sign(message, &private, &group, fixed_r)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "e": sig.e.to_string(),
                "y": sig.y.to_string(),
            })
        );
    } else {
        println!("{} {}", "challenge e".cyan().bold(), sig.e);
        println!("{} {}", "response y ".cyan().bold(), sig.y);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn run_verify(
    p: &str,
    q: &str,
    generator: &str,
    public: &str,
    challenge: &str,
    response: &str,
    message: &str,
    json: bool,
) -> Result<()> {
    let group = parse_group(p, q, generator)?;
    let public = parse_biguint(public, "public key")?;
    let signature = SchnorrSignature {
        e: parse_biguint(challenge, "challenge e")?,
        y: parse_biguint(response, "response y")?,
    };
    let verdict = verify(&signature, &public, message, &group)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "valid": verdict.is_valid,
                "commitment": verdict.commitment.to_string(),
            })
        );
        return Ok(());
    }

    if verdict.is_valid {
        println!("{}", "signature valid".green().bold());
    } else {
        println!("{}", "signature INVALID".red().bold());
    }
    println!(
        "{} {}",
        "recomputed commitment x'".cyan().bold(),
        verdict.commitment
    );
    Ok(())
}
