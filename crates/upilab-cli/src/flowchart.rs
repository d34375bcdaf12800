//! Static ASCII diagrams of the UPI payment system.

use std::io::{self, Write};

use clap::ValueEnum;

/// Which diagram(s) to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Diagram {
    /// Pay transaction flow: sender, PSP app, NPCI switch.
    Pay,
    /// System layers: user apps, PSPs, NPCI, banks.
    Architecture,
    /// Where encryption and signing happen in a payment.
    Encryption,
    /// Everything, in the order above.
    All,
}

impl Diagram {
    /// Diagram bodies selected by this variant.
    #[must_use]
    pub fn bodies(self) -> &'static [&'static str] {
        match self {
            Self::Pay => &[PAY_FLOW],
            Self::Architecture => &[ARCHITECTURE],
            Self::Encryption => &[ENCRYPTION_FLOW],
            Self::All => &[PAY_FLOW, ARCHITECTURE, ENCRYPTION_FLOW],
        }
    }
}

/// Print the selected diagram(s) under a common header.
pub fn write_diagrams<W: Write>(out: &mut W, diagram: Diagram) -> io::Result<()> {
    let rule = "=".repeat(72);
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "  UPI EDUCATIONAL FLOWCHARTS")?;
    writeln!(out, "{rule}")?;
    for body in diagram.bodies() {
        writeln!(out, "{body}")?;
    }
    Ok(())
}

pub const PAY_FLOW: &str = r"
+======================================================================+
|              UPI PAY TRANSACTION FLOW (Educational)                  |
+======================================================================+

  SENDER                    PSP APP                   NPCI SWITCH
  (User A)                (PhonePe/GPay)                (Central)
      |                         |                            |
      |  1. Enter VPA + Amount  |                            |
      |------------------------>|                            |
      |                         |                            |
      |  2. Enter MPIN          |  3. Validate & Sign        |
      |------------------------>|  (TLS + API Auth)          |
      |                         |--------------------------->|
      |                         |                            |
      |                         |  4. Route to Banks         |
      |                         |     (Issuer + Acquirer)    |
      |                         |<---------------------------|
      |                         |                            |
      |  5. UTR + Success       |  6. Debit/Credit           |
      |<------------------------|     Settlement             |
      |                         |                            |
      v                         v                            v

  RECEIVER (User B) receives a credit notification with the same UTR.

  UTR  = Unique Transaction Reference (tracking ID for the transaction)
  MPIN = Mobile PIN (never leaves the device in plain form)
";

pub const ARCHITECTURE: &str = r"
+======================================================================+
|                    UPI SYSTEM ARCHITECTURE                           |
+======================================================================+

    +---------------------------------------------------------------+
    |                     USER LAYER                                |
    |  +----------+  +----------+  +----------+  +----------+       |
    |  | PhonePe  |  | Google   |  |  Paytm   |  |  BHIM    |  ...  |
    |  |   App    |  |   Pay    |  |   App    |  |   App    |       |
    |  +----+-----+  +----+-----+  +----+-----+  +----+-----+       |
    +-------+-------------+-------------+-------------+-------------+
            |             |             |             |
            +-------------+------+------+-------------+
                                 |
    +----------------------------+----------------------------------+
    |                    PSP LAYER (TLS/API)                        |
    |               +------------v------------+                     |
    |               |   PSP Backend Servers   |                     |
    |               | (Yes Bank, ICICI, etc.) |                     |
    |               +------------+------------+                     |
    +----------------------------+----------------------------------+
                                 |
    +----------------------------+----------------------------------+
    |                    NPCI LAYER                                 |
    |               +------------v------------+                     |
    |               |    UPI Switch (NPCI)    |                     |
    |               |  - Routing              |                     |
    |               |  - Settlement           |                     |
    |               |  - Certification        |                     |
    |               +------------+------------+                     |
    +----------------------------+----------------------------------+
                                 |
    +----------------------------+----------------------------------+
    |                    BANK LAYER                                 |
    |   +----------+  +----------+  +----------+  +----------+      |
    |   |   SBI    |  |   HDFC   |  |  ICICI   |  |   Axis   | ...  |
    |   | (Issuer) |  |(Acquirer)|  |          |  |          |      |
    |   +----------+  +----------+  +----------+  +----------+      |
    +---------------------------------------------------------------+
";

pub const ENCRYPTION_FLOW: &str = r"
+======================================================================+
|              ENCRYPTION IN UPI PAYMENT FLOW                          |
+======================================================================+

  App                    Network                     Server
   |                         |                          |
   |  Plain: VPA, Amount     |                          |
   |  MPIN: local only       |                          |
   |  (never sent)           |                          |
   |                         |                          |
   |  +-----------------+    |    +-----------------+   |
   |  | TLS Encrypt     |    |    | TLS Decrypt     |   |
   |  | (AES + RSA)     |--->|--->| (AES + RSA)     |   |
   |  +-----------------+    |    +-----------------+   |
   |                         |                          |
   |  Certificate validation |  Mutual TLS              |
   |  (RSA signatures)       |  (both sides verify)     |
   |                         |                          |
   |  Request signing        |  HMAC-SHA256             |
   |  (integrity check)      |  (tamper detection)      |
   |                         |                          |
   |  Data at rest           |  AES-256-GCM             |
   |  (account numbers)      |  (authenticated)         |
   v                         v                          v
";
