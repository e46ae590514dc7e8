//! Hash map used across the swipe row crates.
//!
//! Defaults to `rustc-hash`; enable `std-hash` to fall back to SipHash.

#[cfg(feature = "std-hash")]
pub mod map {
    pub use std::collections::HashMap;
}

#[cfg(not(feature = "std-hash"))]
pub mod map {
    pub use rustc_hash::FxHashMap as HashMap;
}
