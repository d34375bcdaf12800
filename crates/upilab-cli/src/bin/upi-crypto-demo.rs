//! `upi-crypto-demo`: walk through SHA-256, HMAC, AES-GCM, and secure
//! random tokens as used in payment systems.

use std::io;

use clap::Parser;
use upilab_cli::{crypto_demo, logging::LogArgs};

/// Crypto concepts used in UPI payments. Educational only.
#[derive(Parser, Debug)]
#[command(name = "upi-crypto-demo", author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    log: LogArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.log.init();

    crypto_demo::run_all(&mut io::stdout().lock())
}
