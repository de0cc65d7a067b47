//! GPIO pin assignments for the Lumen controller board.
//!
//! Single source of truth — every driver references this module rather
//! than hard-coding pin numbers.

/// PIR motion sensor output (HC-SR501 class).  Input with pull-up;
/// rises on detected movement, interrupt armed on the positive edge.
pub const PIR_SENSE_GPIO: i32 = 4;

/// Lamp driver MOSFET gate.  Digital output, HIGH = lamp lit.
pub const LAMP_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// UART debug
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;
