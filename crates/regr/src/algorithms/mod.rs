//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the core regression algorithms: numeric attribute
//! extraction, pair filtering, and the ordinary least-squares solve over
//! accumulated sums. It depends on the primitives and math layers.

/// Numeric attribute extraction.
pub mod extract;

/// Lazy pair filtering over entity sequences.
pub mod filter;

/// Ordinary least-squares solving.
pub mod regression;
