//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `edge_cases.rs` - Pins, en passant timing, promotion and castling positions
//! - `play.rs` - Short games played through the rule engine
//! - `proptest.rs` - Property-based tests

mod play;
