//! `upi-flowchart`: print UPI flow and architecture diagrams.

use std::io;

use clap::Parser;
use upilab_cli::{
    flowchart::{Diagram, write_diagrams},
    logging::LogArgs,
};

/// ASCII flowcharts of the UPI payment system.
#[derive(Parser, Debug)]
#[command(name = "upi-flowchart", author, version, about, long_about = None)]
struct Cli {
    /// Diagram to print.
    #[arg(value_enum, default_value = "all")]
    diagram: Diagram,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.log.init();

    write_diagrams(&mut io::stdout().lock(), cli.diagram)?;
    Ok(())
}
