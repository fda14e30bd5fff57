//! Test module organization.
//!
//! This module organizes all integration tests for the RV32I datapath.


/// Register file tests.
mod arch_tests;



/// End-to-end datapath tests.
mod integration_tests;



/// Next-PC selection tests.
mod pc_tests;

/// Write-back multiplexer tests.
mod writeback_tests;
