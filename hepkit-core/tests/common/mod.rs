//! Common test utilities for integration tests
//!
//! - Deterministic random numbers and float assertions
//! - Measurement and event-record generators
//! - Physics scenarios (cut flows, decay chains)

#![allow(dead_code)]

pub mod generators;
pub mod harness;
pub mod scenarios;
