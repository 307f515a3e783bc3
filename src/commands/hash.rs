use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::sha256::sha256_hex;

pub fn run(message: &str, hex_input: bool, json: bool) -> Result<()> {
    let bytes = if hex_input {
        hex::decode(message).context("message must be hex encoded when --hex is set")?
    } else {
        message.as_bytes().to_vec()
    };
    let digest = sha256_hex(&bytes);

    if json {
        println!(
            "{}",
            serde_json::json!({ "length": bytes.len(), "digest": digest })
        );
    } else {
        println!("{} {}", "sha256".cyan().bold(), digest);
    }
    Ok(())
}
