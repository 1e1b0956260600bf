//! # aes128gcm - AES-128-GCM file encryption

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::exit_with_error(e);
    }
}
