//! Single simulation from command-line arguments.

use std::io::Write;

use upilab_sim::PaymentSimulator;
use upilab_types::TransactionRecord;

use crate::{
    amount_input::parse_amount,
    report::{USAGE, write_json, write_summary},
};

/// Run one simulation and print it, as text or as JSON.
///
/// Amount text that is not a number prints [`USAGE`] and returns
/// `Ok(None)`; nothing is simulated. Validation failures are ordinary
/// records, not errors.
///
/// # Errors
/// Only if writing to `out` fails.
pub fn run_one_shot<W: Write>(
    simulator: &PaymentSimulator,
    sender: &str,
    receiver: &str,
    amount_text: &str,
    json: bool,
    out: &mut W,
) -> anyhow::Result<Option<TransactionRecord>> {
    let Some(amount) = parse_amount(amount_text) else {
        tracing::debug!(input = amount_text, "amount argument is not a number");
        writeln!(out, "{USAGE}")?;
        return Ok(None);
    };

    let tx = simulator.simulate(sender, receiver, amount);
    if json {
        write_json(out, &tx)?;
    } else {
        write_summary(out, &tx)?;
    }
    Ok(Some(tx))
}
