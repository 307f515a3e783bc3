use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum ChainMode {
    /// Each block encrypted independently.
    #[default]
    Ecb,
    /// IV-seeded chaining: each block XORed with the previous ciphertext.
    Cbc,
}

#[derive(Debug, Parser)]
#[command(
    name = "cryptolab",
    about = "cryptolab — inspectable AES-128, SHA-256, Diffie-Hellman, and Schnorr, from first principles",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct CryptolabCli {
    /// Global: emit machine-readable JSON instead of formatted text
    #[arg(long = "json", action = ArgAction::SetTrue, global = true)]
    pub json: bool,

    /// Global: path to config (TOML); default: ~/.cryptolab/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// SHA-256 digest of a message
    ///
    /// Examples:
    ///   cryptolab hash "hello world"
    ///   cryptolab hash --hex deadbeef
    Hash {
        /// Message to hash (UTF-8 text unless --hex)
        #[arg(value_name = "MESSAGE")]
        message: String,

        /// Treat MESSAGE as hex-encoded bytes
        #[arg(long = "hex", action = ArgAction::SetTrue)]
        hex: bool,
    },

    /// AES-128 with per-round trace
    Aes {
        #[command(subcommand)]
        cmd: AesCommand,
    },

    /// Diffie-Hellman key exchange over a prime field
    ///
    /// Runs both parties, prints the transcript, the shared secret, and the
    /// derived AES-128 key. Omitted private keys are drawn at random.
    Dh {
        /// Prime modulus P (decimal); falls back to the configured group
        #[arg(long = "prime", value_name = "P")]
        prime: Option<String>,

        /// Generator G (decimal); discovered from P when omitted
        #[arg(long = "generator", value_name = "G")]
        generator: Option<String>,

        /// Alice's private exponent (decimal)
        #[arg(long = "private-a", value_name = "A")]
        private_a: Option<String>,

        /// Bob's private exponent (decimal)
        #[arg(long = "private-b", value_name = "B")]
        private_b: Option<String>,
    },

    /// Schnorr signatures in challenge-response (e, y) form
    Schnorr {
        #[command(subcommand)]
        cmd: SchnorrCommand,
    },

    /// Number-theory toolkit (extended Euclid, modular arithmetic, primality)
    Numbers {
        #[command(subcommand)]
        cmd: NumbersCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum AesCommand {
    /// Pad and encrypt (hex key, text or hex plaintext)
    Encrypt {
        /// 16-byte key, hex encoded
        #[arg(short = 'k', long = "key", value_name = "HEX")]
        key: String,

        /// 16-byte IV, hex encoded (selects CBC unless --mode overrides)
        #[arg(long = "iv", value_name = "HEX")]
        iv: Option<String>,

        /// Chaining mode
        #[arg(long = "mode", value_enum, default_value_t = ChainMode::Ecb)]
        mode: ChainMode,

        /// Plaintext (UTF-8 text unless --hex)
        #[arg(value_name = "PLAINTEXT")]
        plaintext: String,

        /// Treat PLAINTEXT as hex-encoded bytes
        #[arg(long = "hex", action = ArgAction::SetTrue)]
        hex: bool,

        /// Print the full round-by-round trace
        #[arg(long = "trace", action = ArgAction::SetTrue)]
        trace: bool,
    },

    /// Decrypt and unpad (hex key, hex ciphertext)
    Decrypt {
        /// 16-byte key, hex encoded
        #[arg(short = 'k', long = "key", value_name = "HEX")]
        key: String,

        /// 16-byte IV, hex encoded (selects CBC unless --mode overrides)
        #[arg(long = "iv", value_name = "HEX")]
        iv: Option<String>,

        /// Chaining mode
        #[arg(long = "mode", value_enum, default_value_t = ChainMode::Ecb)]
        mode: ChainMode,

        /// Ciphertext, hex encoded
        #[arg(value_name = "CIPHERTEXT")]
        ciphertext: String,

        /// Print the full round-by-round trace
        #[arg(long = "trace", action = ArgAction::SetTrue)]
        trace: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum SchnorrCommand {
    /// Generate a key pair over the group (p, q, generator)
    Keygen {
        #[arg(short = 'p', long = "prime", value_name = "P")]
        p: String,
        #[arg(short = 'q', long = "order", value_name = "Q")]
        q: String,
        #[arg(short = 'g', long = "generator", value_name = "GEN")]
        generator: String,
        /// Fixed private key (decimal) for reproducible runs
        #[arg(long = "private", value_name = "S")]
        private: Option<String>,
    },

    /// Sign a message
    Sign {
        #[arg(short = 'p', long = "prime", value_name = "P")]
        p: String,
        #[arg(short = 'q', long = "order", value_name = "Q")]
        q: String,
        #[arg(short = 'g', long = "generator", value_name = "GEN")]
        generator: String,
        /// Private key s (decimal)
        #[arg(short = 's', long = "private", value_name = "S")]
        private: String,
        /// Fixed ephemeral r (decimal) for reproducible runs
        #[arg(long = "ephemeral", value_name = "R")]
        ephemeral: Option<String>,
        #[arg(value_name = "MESSAGE")]
        message: String,
    },

    /// Verify a signature
    Verify {
        #[arg(short = 'p', long = "prime", value_name = "P")]
        p: String,
        #[arg(short = 'q', long = "order", value_name = "Q")]
        q: String,
        #[arg(short = 'g', long = "generator", value_name = "GEN")]
        generator: String,
        /// Public key v (decimal)
        #[arg(short = 'v', long = "public", value_name = "V")]
        public: String,
        /// Challenge e (decimal)
        #[arg(short = 'e', long = "challenge", value_name = "E")]
        challenge: String,
        /// Response y (decimal)
        #[arg(short = 'y', long = "response", value_name = "Y")]
        response: String,
        #[arg(value_name = "MESSAGE")]
        message: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum NumbersCommand {
    /// Extended Euclid: gcd plus Bezout coefficients
    Gcd {
        #[arg(value_name = "A")]
        a: String,
        #[arg(value_name = "B")]
        b: String,
    },

    /// Modular inverse of A modulo M
    Inverse {
        #[arg(value_name = "A")]
        a: String,
        #[arg(value_name = "M")]
        m: String,
    },

    /// Square-and-multiply BASE^EXP mod MODULUS
    Modpow {
        #[arg(value_name = "BASE")]
        base: String,
        #[arg(value_name = "EXP")]
        exponent: String,
        #[arg(value_name = "MODULUS")]
        modulus: String,
    },

    /// Primality: trial division and Miller-Rabin
    IsPrime {
        #[arg(value_name = "N")]
        n: String,

        /// Miller-Rabin witness rounds
        #[arg(long = "rounds", value_name = "K", default_value_t = 5)]
        rounds: u32,
    },

    /// Smallest primitive root modulo a prime
    PrimitiveRoot {
        #[arg(value_name = "P")]
        p: String,
    },
}
