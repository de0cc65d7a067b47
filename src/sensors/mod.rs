//! Sensor subsystem.
//!
//! One sensor: the PIR motion detector.  Its driver is ISR-fed — see
//! [`motion`] for the edge handler and the loop-side drain.

pub mod motion;
