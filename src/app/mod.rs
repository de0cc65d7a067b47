//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the Lumen controller: the
//! shared keep-on deadline and the per-tick actuation decision.  All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod deadline;
pub mod events;
pub mod ports;
pub mod service;
