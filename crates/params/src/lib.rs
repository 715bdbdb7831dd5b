//! Constant values for rcrypt cryptographic operations
//!
//! This crate provides the sizes and limits shared by the algorithm
//! implementations and the public entry points.

#![no_std]

pub mod utils;
