//! # Models Module
//!
//! Data structures describing a coarse-grained polymer chain: its physical
//! parameters ([`chain`]) and a concrete arrangement of its beads in space
//! ([`configuration`]).

pub mod chain;
pub mod configuration;
