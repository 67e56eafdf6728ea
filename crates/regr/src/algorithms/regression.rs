//! Ordinary least-squares solving.
//!
//! ## Purpose
//!
//! This module derives the regression statistics from accumulated pair
//! sums: means of X and Y, slope, intercept, and the coefficient of
//! determination (R²), with explicit detection of underdetermined and
//! degenerate inputs.
//!
//! ## Design notes
//!
//! * **Corrected sums**: Slope and R² are computed from the corrected sums
//!   of squares and cross products (sums of deviations from the mean,
//!   obtained via the sum-of-products identity) in a single pass.
//! * **Typed failure**: n < 2 and zero-variance inputs surface as errors or
//!   an omitted R², never as NaN posing as a statistic.
//! * **Tolerance**: Degeneracy checks compare corrected sums against a
//!   relative epsilon guard; negative cancellation residue is clamped to
//!   zero first.
//!
//! ## Invariants
//!
//! * Every statistic in a returned estimate is finite.
//! * `r2` is `None` only under `ConstantYPolicy::SlopeOnly` with constant Y.
//!
//! ## Non-goals
//!
//! * This module does not accumulate sums (see the math layer).
//! * This module does not force the fit through the origin.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::sums::PairSums;
use crate::primitives::errors::RegrError;

// ============================================================================
// Constant-Y Policy
// ============================================================================

/// Policy for handling inputs whose Y values are all identical.
///
/// With constant Y and varying X, the slope (exactly zero) and intercept
/// (the mean of Y) remain well-defined, but R² is 0/0. The policy decouples
/// slope validity from R² validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConstantYPolicy {
    /// Fail the whole call with [`RegrError::ZeroYVariance`] (default).
    #[default]
    Fail,

    /// Report slope and intercept; omit R² from the result.
    SlopeOnly,
}

// ============================================================================
// Line Fit
// ============================================================================

/// Parameters of a fitted line y = slope·x + intercept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit<T> {
    /// Slope (beta_1).
    pub slope: T,

    /// Intercept (beta_0).
    pub intercept: T,
}

impl<T: Float> LineFit<T> {
    /// Predict the y-value for a given x using the fitted line.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }
}

// ============================================================================
// OLS Estimate
// ============================================================================

/// Full ordinary least-squares estimate derived from accumulated sums.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OlsEstimate<T> {
    /// Mean of the X values.
    pub avg_x: T,

    /// Mean of the Y values.
    pub avg_y: T,

    /// Fitted line parameters.
    pub fit: LineFit<T>,

    /// Coefficient of determination; `None` when omitted under
    /// [`ConstantYPolicy::SlopeOnly`].
    pub r2: Option<T>,

    /// Number of pairs the estimate was derived from.
    pub pairs: usize,
}

// ============================================================================
// Solver
// ============================================================================

/// Derive the OLS statistics from accumulated sums.
///
/// Implements the unweighted ordinary least-squares fit with the intercept
/// not forced through the origin:
///
/// ```text
/// sxx = Σx² − (Σx)²/n        corrected sum of squares for X
/// sxy = Σxy − Σx·Σy/n        corrected sum of cross products
/// syy = Σy² − (Σy)²/n        corrected sum of squares for Y
/// slope     = sxy / sxx
/// intercept = avg_y − slope·avg_x
/// r2        = sxy² / (sxx·syy)
/// ```
pub fn solve_ols<T: Float>(
    sums: &PairSums<T>,
    policy: ConstantYPolicy,
) -> Result<OlsEstimate<T>, RegrError> {
    let n = sums.n;

    // A single point determines no line; n == 0 and n == 1 both end here,
    // before any division can produce NaN.
    if n < 2 {
        return Err(RegrError::InsufficientData { got: n, min: 2 });
    }

    let n_t = T::from(n).unwrap_or(T::one());
    let avg_x = sums.sum_x / n_t;
    let avg_y = sums.sum_y / n_t;

    // Corrected sums via the sum-of-products identity. The subtractions can
    // leave a tiny negative residue from cancellation; clamp it to zero.
    let sxx = (sums.sum_xx - sums.sum_x * sums.sum_x / n_t).max(T::zero());
    let syy = (sums.sum_yy - sums.sum_y * sums.sum_y / n_t).max(T::zero());
    let sxy = sums.sum_xy - sums.sum_x * sums.sum_y / n_t;

    // Relative guard: identical inputs cancel exactly, near-identical inputs
    // cancel down to rounding noise proportional to the uncorrected sum.
    let tol_x = T::epsilon() * sums.sum_xx.abs();
    if sxx <= tol_x {
        return Err(RegrError::ZeroXVariance { pairs: n });
    }

    let slope = sxy / sxx;
    let intercept = avg_y - slope * avg_x;

    let tol_y = T::epsilon() * sums.sum_yy.abs();
    let r2 = if syy <= tol_y {
        match policy {
            ConstantYPolicy::Fail => return Err(RegrError::ZeroYVariance { pairs: n }),
            ConstantYPolicy::SlopeOnly => None,
        }
    } else {
        Some((sxy * sxy) / (sxx * syy))
    };

    Ok(OlsEstimate {
        avg_x,
        avg_y,
        fit: LineFit { slope, intercept },
        r2,
        pairs: n,
    })
}
