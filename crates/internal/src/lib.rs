//! Internal utilities for the rcrypt library
//!
//! Nothing in here is part of the public API; the items are shared between
//! the algorithm crates.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
