//! zkhash CLI.
//!
//! Converts and validates zk-trie field hashes, printing one JSON report
//! per invocation on stdout.

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use zktrie_hash::field::{MODULUS_DECIMAL, MODULUS_HEX};
use zktrie_hash::{ErrorCode, Hash, HashResult, Report};

#[derive(Parser)]
#[command(name = "zkhash")]
#[command(about = "Inspect and convert zk-trie field hashes", long_about = None)]
#[command(version)]
struct Cli {
    /// Log conversion details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information
    Version,

    /// Parse a base-10 integer literal
    Decimal {
        /// Decimal digits, e.g. 1234567
        value: String,
    },

    /// Parse storage-order (little-endian) hex
    Hex {
        /// 64 hex chars, optional 0x prefix
        value: String,
    },

    /// Validate integer-order (big-endian) bytes given as hex
    Bytes {
        /// 64 hex chars, optional 0x prefix
        value: String,
    },

    /// Print the field modulus
    Modulus,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .init();
}

fn parse_field_bytes(value: &str) -> HashResult<Hash> {
    let value = value.strip_prefix("0x").unwrap_or(value);
    let bytes = hex::decode(value).map_err(|e| ErrorCode::E103_MalformedHex(e.to_string()))?;
    Hash::from_field_bytes(&bytes)
}

fn emit(report: Report) -> ExitCode {
    println!("{}", report.to_json());
    if report.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Version) => {
            println!("zkhash v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Some(Commands::Decimal { value }) => {
            tracing::debug!(%value, "parsing decimal");
            emit(Hash::from_decimal_str(&value).into())
        }
        Some(Commands::Hex { value }) => {
            tracing::debug!(%value, "parsing storage hex");
            emit(Hash::from_hex(&value).into())
        }
        Some(Commands::Bytes { value }) => {
            tracing::debug!(%value, "validating integer-order bytes");
            emit(parse_field_bytes(&value).into())
        }
        Some(Commands::Modulus) => {
            let out = serde_json::json!({
                "status": "ok",
                "decimal": MODULUS_DECIMAL,
                "hex": MODULUS_HEX,
            });
            println!("{}", out);
            ExitCode::SUCCESS
        }
        None => {
            println!("zkhash v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for usage information");
            ExitCode::SUCCESS
        }
    }
}
