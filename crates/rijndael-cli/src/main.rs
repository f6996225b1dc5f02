//! Command-line shell for the Rijndael/AES engine.

#![forbid(unsafe_code)]

use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rijndael_core::{
    blocks_from_hex, blocks_to_hex, decrypt_block_traced, decrypt_blocks, decrypt_cbc,
    encrypt_block_traced, encrypt_blocks, encrypt_cbc, expand_key, ExpandedKey, State, TraceEvent,
};

/// Rijndael/AES CLI.
#[derive(Parser)]
#[command(
    name = "rijndael",
    version,
    about = "AES-128/192/256 encryption and decryption over hex text"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt block-aligned hex plaintext.
    Encrypt(ModeArgs),
    /// Decrypt block-aligned hex ciphertext.
    Decrypt(ModeArgs),
}

#[derive(Args)]
struct ModeArgs {
    /// Input as hex digit pairs, a multiple of 32 digits.
    #[arg(long, value_name = "HEX")]
    input: String,
    /// Key as 32, 48, or 64 hex digits.
    #[arg(long, value_name = "HEX")]
    key: String,
    /// Chain blocks with ciphertext feedback.
    #[arg(long, default_value_t = false)]
    cbc: bool,
    /// Print the state after every transform stage.
    #[arg(long, default_value_t = false)]
    trace: bool,
    /// Also write the result to a timestamped file in the working directory.
    #[arg(long, default_value_t = false)]
    store: bool,
}

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    fn file_prefix(self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Encrypt(args) => run(Direction::Encrypt, &args),
        Commands::Decrypt(args) => run(Direction::Decrypt, &args),
    }
}

fn run(direction: Direction, args: &ModeArgs) -> Result<()> {
    let key_bytes = hex::decode(args.key.trim()).context("decode key hex")?;
    let key = expand_key(&key_bytes).context("expand key")?;
    let blocks = blocks_from_hex(args.input.trim()).context("parse input hex")?;

    let output = if args.trace {
        run_traced(direction, &blocks, &key, args.cbc)
    } else {
        match (direction, args.cbc) {
            (Direction::Encrypt, false) => encrypt_blocks(&blocks, &key),
            (Direction::Encrypt, true) => encrypt_cbc(&blocks, &key),
            (Direction::Decrypt, false) => decrypt_blocks(&blocks, &key),
            (Direction::Decrypt, true) => decrypt_cbc(&blocks, &key),
        }
    };

    let hex_out = blocks_to_hex(&output);
    println!("{hex_out}");

    if args.store {
        let path = output_filename(direction.file_prefix())?;
        fs::write(&path, &hex_out).with_context(|| format!("write {path}"))?;
    }
    Ok(())
}

/// Per-block traced run, printing every intermediate state. The chaining
/// steps match the untraced mode functions: feedback into the plaintext on
/// the way in, XOR with the received ciphertext on the way out.
fn run_traced(
    direction: Direction,
    blocks: &[State],
    key: &ExpandedKey,
    cbc: bool,
) -> Vec<State> {
    let mut out: Vec<State> = Vec::with_capacity(blocks.len());
    for (i, block) in blocks.iter().enumerate() {
        println!("block {i}");
        match direction {
            Direction::Encrypt => {
                let fed = match out.last() {
                    Some(prev) if cbc => block.xor(prev),
                    _ => *block,
                };
                let (ciphertext, events) = encrypt_block_traced(fed, key);
                print_events(&events);
                out.push(ciphertext);
            }
            Direction::Decrypt => {
                let (plain, events) = decrypt_block_traced(*block, key);
                print_events(&events);
                let plain = if cbc && i > 0 {
                    plain.xor(&blocks[i - 1])
                } else {
                    plain
                };
                out.push(plain);
            }
        }
    }
    out
}

fn print_events(events: &[TraceEvent]) {
    for event in events {
        println!(
            "  round {:>2} {:<14} {}",
            event.round,
            event.stage,
            hex::encode(event.state.to_bytes())
        );
    }
}

fn output_filename(prefix: &str) -> Result<String> {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the unix epoch")?
        .as_secs();
    Ok(format!("{prefix}{stamp}.txt"))
}
