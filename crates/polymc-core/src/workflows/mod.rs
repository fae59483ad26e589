//! # Workflows Module
//!
//! This module provides the high-level entry points that orchestrate complete
//! sampling runs in polymc.
//!
//! ## Overview
//!
//! Workflows are the top-level API for users of polymc. They encapsulate an
//! entire run, from input validation through the Metropolis loop to the final
//! ensemble of configurations, handling progress reporting and logging along
//! the way.
//!
//! ## Architecture
//!
//! - **Sampling Workflow** ([`sample`]) - Complete equilibrium sampling of a
//!   chain: validation, burn-in, thinned collection, acceptance diagnostics.

pub mod sample;
