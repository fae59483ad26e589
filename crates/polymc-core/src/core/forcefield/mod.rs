//! # Forcefield Module
//!
//! The elastic energy model of the discretized chain.
//!
//! ## Overview
//!
//! Two terms make up the model: a harmonic stretching penalty for every bond
//! whose length deviates from its equilibrium value, and a tangent-alignment
//! bending penalty for every pair of adjacent bonds. The per-term potentials
//! live in [`potentials`] as pure functions; [`energy`] folds them over a
//! whole configuration.

pub mod energy;
pub mod potentials;
