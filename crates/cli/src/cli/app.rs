//! # CLI Application
//!
//! CLI definition and command dispatch using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands::{cmd_decrypt, cmd_encrypt};
use super::error::Result;
use super::setup_logging;

/// aes128gcm - AES-128-GCM file encryption
#[derive(Parser)]
#[command(
    name = "aes128gcm",
    version = env!("CARGO_PKG_VERSION"),
    about = "Encrypt and decrypt files with AES-128-GCM",
    long_about = None,
    after_help = "Examples:\n  \
        aes128gcm encrypt message.txt --key-file secret.key\n  \
        aes128gcm encrypt message.txt --pkcs7 --iv cafebabefacedbaddecaf888 -o message.enc\n  \
        aes128gcm decrypt message.enc --pkcs7 --iv cafebabefacedbaddecaf888\n  \
        aes128gcm decrypt message.hex --tag 4d5c2af327cd64a62cf35abd2ba6fab4 --key-file secret.key\n\n\
        A key file holds 32 hex characters. Without one the all-zero key is used.",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file; prints ciphertext hex, a blank line, then the tag
    #[command(visible_alias = "enc")]
    Encrypt {
        /// Plaintext file
        input: PathBuf,

        #[command(flatten)]
        opts: CipherOptions,
    },

    /// Verify and decrypt a hex-encoded ciphertext file
    #[command(visible_alias = "dec")]
    Decrypt {
        /// Ciphertext file: encrypt output, or bare ciphertext hex with --tag
        input: PathBuf,

        /// Authentication tag (32 hex characters); overrides the one in the file
        #[arg(short, long)]
        tag: Option<String>,

        #[command(flatten)]
        opts: CipherOptions,
    },
}

/// Options shared by both commands
#[derive(Args, Debug, Clone)]
pub struct CipherOptions {
    /// Key file containing 32 hex characters
    #[arg(short, long)]
    pub key_file: Option<PathBuf>,

    /// Initialization vector (24 hex characters)
    #[arg(long, default_value = "000000000000000000000000")]
    pub iv: String,

    /// Associated data (hex)
    #[arg(long, default_value = "")]
    pub aad: String,

    /// Apply PKCS#7 padding before encrypting / strip it after decrypting
    #[arg(long)]
    pub pkcs7: bool,

    /// Write output here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encrypt { input, opts } => {
            setup_logging(opts.verbose, opts.quiet);
            cmd_encrypt(&input, &opts)
        }
        Commands::Decrypt { input, tag, opts } => {
            setup_logging(opts.verbose, opts.quiet);
            cmd_decrypt(&input, tag.as_deref(), &opts)
        }
    }
}
