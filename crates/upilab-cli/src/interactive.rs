//! Interactive payment lab.
//!
//! Prompts for sender, receiver, and amount until the user types `quit`,
//! `exit`, or `q` at the sender prompt, or input ends. Each round runs one
//! simulation and prints the result block.

use std::io::{self, BufRead, Write};

use upilab_sim::PaymentSimulator;

use crate::{amount_input::parse_amount_or_sentinel, report::write_result_block};

/// Sender-prompt inputs that end the session (case-insensitive).
pub const EXIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

const RULE_WIDTH: usize = 60;

/// Outcome of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Simulations run.
    pub attempts: usize,
    /// Simulations that succeeded.
    pub successes: usize,
}

fn is_exit_word(input: &str) -> bool {
    EXIT_WORDS.iter().any(|w| input.eq_ignore_ascii_case(w))
}

/// Print `label`, then read one trimmed line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "  {label:<13}: ")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "  UPI PAYMENT FLOW - SIMULATED LAB (Educational)")?;
    writeln!(out, "  No real money. No real APIs. Validation only.")?;
    writeln!(out, "{rule}")
}

/// Run the prompt loop until an exit word or end of input.
pub fn run_session<R: BufRead, W: Write>(
    simulator: &PaymentSimulator,
    mut input: R,
    mut out: W,
) -> io::Result<SessionSummary> {
    let mut summary = SessionSummary {
        attempts: 0,
        successes: 0,
    };
    write_banner(&mut out)?;

    loop {
        writeln!(out)?;
        writeln!(out, "Enter details (or 'quit' to exit):")?;

        let Some(sender) = prompt(&mut input, &mut out, "Sender VPA")? else {
            break;
        };
        if is_exit_word(&sender) {
            break;
        }
        let Some(receiver) = prompt(&mut input, &mut out, "Receiver VPA")? else {
            break;
        };
        let Some(amount_text) = prompt(&mut input, &mut out, "Amount (Rs)")? else {
            break;
        };

        let amount = parse_amount_or_sentinel(&amount_text);
        let tx = simulator.simulate(&sender, &receiver, amount);
        summary.attempts += 1;
        if tx.is_success() {
            summary.successes += 1;
        }
        write_result_block(&mut out, &tx)?;
    }

    writeln!(out)?;
    writeln!(out, "  Lab ended.")?;
    tracing::debug!(
        attempts = summary.attempts,
        successes = summary.successes,
        "interactive session finished"
    );
    Ok(summary)
}
