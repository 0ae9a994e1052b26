//! Infrastructure Layer
//!
//! Contains implementations of the domain storage contract.

pub mod storage;
