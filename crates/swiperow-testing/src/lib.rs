//! Testing utilities and harness for swipeable rows

pub mod test_rule;

pub use test_rule::*;
