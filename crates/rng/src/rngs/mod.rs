//! The pseudo-random number generators provided by this crate.

mod xoshiro256plusplus;
pub use xoshiro256plusplus::*;
