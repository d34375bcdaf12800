//! Console rendering of transaction records.

use std::io::{self, Write};

use upilab_types::TransactionRecord;

/// Usage line printed when the one-shot amount argument is not a number.
pub const USAGE: &str = "Usage: upi-sim sender@vpa receiver@vpa amount";

/// One-shot output: status and reference, one per line.
pub fn write_summary<W: Write>(out: &mut W, tx: &TransactionRecord) -> io::Result<()> {
    writeln!(out, "Status: {}", tx.status())?;
    writeln!(out, "UTR: {}", tx.reference_display())
}

/// Interactive output: a result block with status, reference, and time.
pub fn write_result_block<W: Write>(out: &mut W, tx: &TransactionRecord) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  --- Result ---")?;
    writeln!(out, "  Status  : {}", tx.status())?;
    writeln!(out, "  UTR     : {}", tx.reference_display())?;
    writeln!(out, "  Time    : {}", tx.timestamp_display())
}

/// Machine-readable output: the record as pretty JSON.
pub fn write_json<W: Write>(out: &mut W, tx: &TransactionRecord) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, tx)?;
    writeln!(out)?;
    Ok(())
}
