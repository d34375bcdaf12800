//! # upilab-cli
//!
//! Console front-ends for the UPI lab. The binaries in `src/bin/` are thin:
//! everything that reads input or renders output lives here, generic over
//! `BufRead`/`Write` so it can be driven from tests.
//!
//! - [`logging`]: tracing subscriber setup shared by all binaries
//! - [`amount_input`]: text-to-amount boundary (usage error or sentinel)
//! - [`report`]: console rendering of transaction records
//! - [`one_shot`]: `upi-sim sender receiver amount`
//! - [`interactive`]: the prompt loop behind `upi-sim` with no arguments
//! - [`crypto_demo`]: the four primitive demonstrations
//! - [`flowchart`]: static ASCII diagrams

pub mod amount_input;
pub mod crypto_demo;
pub mod flowchart;
pub mod interactive;
pub mod logging;
pub mod one_shot;
pub mod report;
