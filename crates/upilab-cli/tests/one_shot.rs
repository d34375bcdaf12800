//! `upi-sim sender receiver amount`: output for each kind of outcome.

use rust_decimal::Decimal;
use upilab_cli::{one_shot::run_one_shot, report::USAGE};
use upilab_sim::PaymentSimulator;
use upilab_types::{Reference, SimConfig, TransactionRecord, ValidationError};

fn run(
    simulator: &PaymentSimulator,
    args: [&str; 3],
    json: bool,
) -> (Option<TransactionRecord>, String) {
    let mut out = Vec::new();
    let tx = run_one_shot(simulator, args[0], args[1], args[2], json, &mut out).unwrap();
    (tx, String::from_utf8(out).unwrap())
}

// ---------------------------------------------------------------------------
// Amount text
// ---------------------------------------------------------------------------

#[test]
fn garbage_amount_prints_usage_only() {
    for amount in ["abc", "Rs 500", "", "inf", "nan"] {
        let (tx, text) = run(&PaymentSimulator::new(), ["alice@bank", "bob@bank", amount], false);
        assert!(tx.is_none(), "{amount:?}");
        assert_eq!(text, format!("{USAGE}\n"));
    }
}

#[test]
fn usage_line_text() {
    assert_eq!(USAGE, "Usage: upi-sim sender@vpa receiver@vpa amount");
}

#[test]
fn garbage_amount_with_json_still_prints_usage() {
    let (tx, text) = run(&PaymentSimulator::new(), ["alice@bank", "bob@bank", "ten"], true);
    assert!(tx.is_none());
    assert_eq!(text, format!("{USAGE}\n"));
}

#[test]
fn oversized_amount_is_a_limit_failure_not_usage() {
    for amount in ["1e30", "1e29", "100000000000000000000000000000"] {
        let (tx, text) = run(&PaymentSimulator::new(), ["alice@bank", "bob@bank", amount], false);
        let tx = tx.expect("numeric text must be simulated");
        assert_eq!(tx.error(), Some(ValidationError::AmountExceedsLimit));
        assert_eq!(text, "Status: FAILED: amount exceeds limit\nUTR: N/A\n");
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

#[test]
fn success_prints_status_and_reference() {
    let (tx, text) = run(&PaymentSimulator::new(), ["alice@bank", "bob@bank", "500"], false);
    let tx = tx.unwrap();
    let reference = tx.reference().unwrap();
    assert!(Reference::is_well_formed(reference.as_str()));
    assert_eq!(text, format!("Status: SUCCESS (SIMULATED)\nUTR: {reference}\n"));
}

#[test]
fn validation_failure_prints_status_and_na() {
    let (tx, text) = run(&PaymentSimulator::new(), ["alice@bank", "b@x", "10"], false);
    assert!(!tx.unwrap().is_success());
    assert_eq!(
        text,
        "Status: FAILED: Receiver invalid — username too short\nUTR: N/A\n"
    );
}

#[test]
fn configured_limit_applies() {
    let sim = PaymentSimulator::with_config(
        SimConfig::with_amount_limit(Decimal::new(2_000, 0)).unwrap(),
    );
    let (_, text) = run(&sim, ["alice@bank", "bob@bank", "2500"], false);
    assert_eq!(text, "Status: FAILED: amount exceeds limit\nUTR: N/A\n");
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[test]
fn json_failure_record() {
    let (tx, text) = run(&PaymentSimulator::new(), ["al", "bob@bank", "500"], true);
    assert!(!tx.unwrap().is_success());
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["status"], "FAILED: Sender invalid — username too short");
    assert_eq!(value["reference"], "N/A");
    assert_eq!(value["sender"], "al");
}

#[test]
fn json_success_record() {
    let (tx, text) = run(&PaymentSimulator::new(), ["alice@bank", "bob@bank", "1e3"], true);
    let tx = tx.unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["status"], "SUCCESS (SIMULATED)");
    assert_eq!(value["reference"], tx.reference().unwrap().as_str());
}
