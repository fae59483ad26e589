//! # Core Module
//!
//! This module provides the fundamental building blocks for coarse-grained
//! polymer modeling in polymc, serving as the computational core of the
//! library.
//!
//! ## Overview
//!
//! The core module implements the essential data structures and pure functions
//! required for Monte Carlo sampling of semi-flexible chains. Everything here
//! is stateless: given the same inputs, every function returns the same
//! outputs, which keeps the sampling engine built on top of it easy to reason
//! about and to test.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different
//! aspects of chain modeling:
//!
//! - **Chain Representation** ([`models`]) - Data structures for chain
//!   parameters and bead configurations
//! - **Energy Calculations** ([`forcefield`]) - Elastic potentials and total
//!   energy evaluation
//! - **Geometric Utilities** ([`utils`]) - Rotation matrix constructors and
//!   per-chain shape descriptors
//!
//! ## Scientific Foundation
//!
//! The elastic model is the standard discretized worm-like chain: a harmonic
//! stretching penalty per bond plus a tangent-alignment bending penalty per
//! adjacent bond pair, both expressed in units of kT.

pub mod forcefield;
pub mod models;
pub mod utils;
