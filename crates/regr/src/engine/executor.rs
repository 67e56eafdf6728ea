//! Execution engine for regression operations.
//!
//! ## Purpose
//!
//! This module provides the executor that orchestrates a regression run:
//! configuration validation, label selection, pair filtering, single-pass
//! accumulation, the least-squares solve, and result assembly.
//!
//! ## Design notes
//!
//! * Provides both an entity-based and a pair-based entry point.
//! * The computation is synchronous and single-pass; no state outlives the
//!   call and no resources are acquired, so abandoning a call needs no
//!   cleanup.
//! * With the `parallel` feature, accumulation can run over chunks whose
//!   partial sums are merged at the end; sum reduction is associative, so
//!   the result agrees with the sequential pass within floating tolerance.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * Entities are read-only input; the executor holds no references beyond
//!   the call.
//! * The pairs fed to the accumulator are exactly the entities for which
//!   both attributes resolve numerically.
//!
//! ## Non-goals
//!
//! * This module does not query entities from a store (caller's concern).
//! * This module does not retry: no failure here is transient.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

#[cfg(feature = "parallel")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::filter::filter_pairs;
use crate::algorithms::regression::{solve_ols, ConstantYPolicy, OlsEstimate};
use crate::engine::output::RegrResult;
use crate::engine::validator::Validator;
use crate::math::sums::PairSums;
use crate::primitives::entity::Entity;
use crate::primitives::errors::RegrError;
use crate::primitives::pair::Pair;

// ============================================================================
// Scalar Bound
// ============================================================================

/// Numeric scalar the executor can operate on.
///
/// With the `parallel` feature the scalar must also cross thread
/// boundaries; without it, any `Float` qualifies.
#[cfg(feature = "parallel")]
pub trait Scalar: Float + Send + Sync {}
#[cfg(feature = "parallel")]
impl<T: Float + Send + Sync> Scalar for T {}

/// Numeric scalar the executor can operate on.
#[cfg(not(feature = "parallel"))]
pub trait Scalar: Float {}
#[cfg(not(feature = "parallel"))]
impl<T: Float> Scalar for T {}

// ============================================================================
// Configuration
// ============================================================================

/// Resolved configuration for a regression run.
#[derive(Debug, Clone, PartialEq)]
pub struct RegrConfig {
    /// Name of the attribute supplying X values.
    pub x_attribute: String,

    /// Name of the attribute supplying Y values.
    pub y_attribute: String,

    /// Optional label selector; entities carrying other labels are skipped.
    /// Input pre-filtered by an external query layer passes through
    /// unchanged.
    pub label: Option<String>,

    /// Policy for constant-Y input (R² undefined while slope is not).
    pub constant_y: ConstantYPolicy,

    /// Accumulate chunked partial sums on multiple cores.
    #[cfg(feature = "parallel")]
    pub parallel: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Orchestrates validation, filtering, accumulation, and solving.
pub struct RegrExecutor;

impl RegrExecutor {
    /// Run a regression over an entity sequence.
    pub fn execute<'a, T, I>(config: &RegrConfig, entities: I) -> Result<RegrResult<T>, RegrError>
    where
        T: Scalar,
        I: IntoIterator<Item = &'a Entity>,
    {
        Validator::validate_config(config)?;

        let label = config.label.as_deref();
        let selected = entities
            .into_iter()
            .filter(move |entity| label.is_none_or(|want| entity.has_label(want)));

        let mut pairs = filter_pairs(selected, &config.x_attribute, &config.y_attribute);

        #[cfg(feature = "parallel")]
        if config.parallel {
            let collected: Vec<Pair<T>> = pairs.by_ref().collect();
            let excluded = pairs.excluded();
            let sums = parallel_sums(&collected);
            return Self::assemble(sums, excluded, config);
        }

        let mut sums = PairSums::new();
        for pair in pairs.by_ref() {
            sums.push(pair);
        }
        let excluded = pairs.excluded();
        Self::assemble(sums, excluded, config)
    }

    /// Run a regression over already-extracted (x, y) observations.
    pub fn execute_pairs<T, I>(config: &RegrConfig, pairs: I) -> Result<RegrResult<T>, RegrError>
    where
        T: Scalar,
        I: IntoIterator<Item = Pair<T>>,
    {
        Validator::validate_config(config)?;

        #[cfg(feature = "parallel")]
        if config.parallel {
            let collected: Vec<Pair<T>> = pairs.into_iter().collect();
            let sums = parallel_sums(&collected);
            return Self::assemble(sums, 0, config);
        }

        let sums = PairSums::from_pairs(pairs);
        Self::assemble(sums, 0, config)
    }

    /// Solve the accumulated sums and assemble the output record.
    fn assemble<T: Float>(
        sums: PairSums<T>,
        excluded: usize,
        config: &RegrConfig,
    ) -> Result<RegrResult<T>, RegrError> {
        let OlsEstimate {
            avg_x,
            avg_y,
            fit,
            r2,
            pairs,
        } = solve_ols(&sums, config.constant_y)?;

        Ok(RegrResult {
            avg_x,
            avg_y,
            slope: fit.slope,
            intercept: fit.intercept,
            r2,
            pairs_used: pairs,
            excluded,
        })
    }
}

// ============================================================================
// Parallel Accumulation
// ============================================================================

/// Accumulate partial sums over fixed-size chunks and merge them.
#[cfg(feature = "parallel")]
fn parallel_sums<T: Scalar>(pairs: &[Pair<T>]) -> PairSums<T> {
    use rayon::prelude::*;

    // Below this size the spawn overhead outweighs the work.
    const CHUNK: usize = 4096;

    if pairs.len() < CHUNK {
        return PairSums::from_pairs(pairs.iter().copied());
    }

    pairs
        .par_chunks(CHUNK)
        .map(|chunk| PairSums::from_pairs(chunk.iter().copied()))
        .reduce(PairSums::new, PairSums::merge)
}
