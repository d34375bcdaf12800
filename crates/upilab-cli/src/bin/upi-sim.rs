//! `upi-sim`: simulate a UPI payment.
//!
//! With three positional arguments, runs one simulation and prints the
//! status and UTR. Extra positionals are ignored. With fewer, starts the
//! interactive lab.
//!
//! ```text
//! upi-sim alice@okaxis bob@ybl 500
//! upi-sim --amount-limit 2000 alice@okaxis bob@ybl 2500
//! upi-sim                      # interactive
//! ```

use std::io;

use clap::Parser;
use rust_decimal::Decimal;
use upilab_cli::{interactive::run_session, logging::LogArgs, one_shot::run_one_shot};
use upilab_sim::PaymentSimulator;
use upilab_types::{SimConfig, constants};

/// Simulated UPI payment flow. No real money. No real APIs.
#[derive(Parser, Debug)]
#[command(name = "upi-sim", author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Sender VPA (user@handle).
    sender: Option<String>,

    /// Receiver VPA (user@handle).
    receiver: Option<String>,

    /// Amount in rupees.
    amount: Option<String>,

    /// Ignored.
    #[arg(hide = true)]
    extra: Vec<String>,

    /// Per-transaction ceiling in rupees.
    #[arg(long, env = "UPI_LAB_AMOUNT_LIMIT", default_value_t = Decimal::from(constants::DEFAULT_AMOUNT_LIMIT))]
    amount_limit: Decimal,

    /// Print the one-shot result as JSON.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.log.init();

    let config = SimConfig::with_amount_limit(cli.amount_limit)?;
    let simulator = PaymentSimulator::with_config(config);
    tracing::debug!(amount_limit = %config.amount_limit, "simulator configured");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match (cli.sender, cli.receiver, cli.amount) {
        (Some(sender), Some(receiver), Some(amount_text)) => {
            if !cli.extra.is_empty() {
                tracing::debug!(ignored = cli.extra.len(), "extra arguments ignored");
            }
            run_one_shot(&simulator, &sender, &receiver, &amount_text, cli.json, &mut out)?;
        }
        (sender, receiver, _) => {
            if sender.is_some() || receiver.is_some() {
                tracing::warn!("fewer than three arguments given; starting interactive lab");
            }
            run_session(&simulator, io::stdin().lock(), &mut out)?;
        }
    }

    Ok(())
}
