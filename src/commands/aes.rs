use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::cli::ChainMode;
use crate::commands::parse_hex_block;
use crate::core::aes128::{self, AesOutput, Mode, RoundSnapshot};

fn resolve_mode(mode: ChainMode, iv: &Option<String>) -> Result<Mode> {
    match (mode, iv) {
        (ChainMode::Ecb, None) => Ok(Mode::Ecb),
        // An IV on the command line means the caller wants chaining.
        (_, Some(iv)) => Ok(Mode::Cbc { iv: parse_hex_block(iv, "IV")? }),
        (ChainMode::Cbc, None) => bail!("--mode cbc requires --iv"),
    }
}

fn print_trace(rounds: &[RoundSnapshot]) {
    for snapshot in rounds {
        println!("{}", format!("round {:>2}", snapshot.round).yellow().bold());
        println!("  start      {}", snapshot.start_of_round);
        if let Some(after) = &snapshot.after_sub_bytes {
            println!("  sub bytes  {}", after);
        }
        if let Some(after) = &snapshot.after_shift_rows {
            println!("  shift rows {}", after);
        }
        if let Some(after) = &snapshot.after_mix_columns {
            println!("  mix cols   {}", after);
        }
        println!("  round key  {}", snapshot.round_key);
    }
}

fn emit(label: &str, output: &AesOutput, trace: bool, json: bool) -> Result<()> {
    if json {
        let mut obj = serde_json::Map::new();
        obj.insert(
            label.to_string(),
            serde_json::Value::String(hex::encode(&output.bytes)),
        );
        obj.insert("rounds".to_string(), serde_json::to_value(&output.rounds)?);
        println!("{}", serde_json::Value::Object(obj));
        return Ok(());
    }
    println!("{} {}", label.cyan().bold(), hex::encode(&output.bytes));
    if trace {
        print_trace(&output.rounds);
    }
    Ok(())
}

pub fn encrypt(
    key: &str,
    iv: &Option<String>,
    mode: ChainMode,
    plaintext: &str,
    hex_input: bool,
    trace: bool,
    json: bool,
) -> Result<()> {
    let key = parse_hex_block(key, "key")?;
    let mode = resolve_mode(mode, iv)?;
    let plaintext = if hex_input {
        hex::decode(plaintext).context("plaintext must be hex encoded when --hex is set")?
    } else {
        plaintext.as_bytes().to_vec()
    };

    let output = aes128::encrypt(&plaintext, &key, mode)?;
    emit("ciphertext", &output, trace, json)
}

pub fn decrypt(
    key: &str,
    iv: &Option<String>,
    mode: ChainMode,
    ciphertext: &str,
    trace: bool,
    json: bool,
) -> Result<()> {
    let key = parse_hex_block(key, "key")?;
    let mode = resolve_mode(mode, iv)?;
    let ciphertext = hex::decode(ciphertext).context("ciphertext must be hex encoded")?;

    let output = aes128::decrypt(&ciphertext, &key, mode)?;
    emit("plaintext", &output, trace, json)?;
    if !json {
        if let Ok(text) = std::str::from_utf8(&output.bytes) {
            println!("{} {}", "as text".cyan().bold(), text);
        }
    }
    Ok(())
}
