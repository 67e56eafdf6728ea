//! Output types and result structures for regression operations.
//!
//! ## Purpose
//!
//! This module defines the `RegrResult` record returned by a regression
//! run: the five least-squares statistics plus metadata about how many
//! pairs were used and how many entities were excluded by filtering.
//!
//! ## Design notes
//!
//! * **Optional outputs**: R² is an `Option`; it is omitted only when the
//!   caller opted into reporting a constant-Y fit without it.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * Every populated statistic is finite.
//! * `pairs_used` is at least 2.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization logic.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Result Structure
// ============================================================================

/// Regression output: the fitted statistics and filtering metadata.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegrResult<T> {
    /// Mean of the X values.
    pub avg_x: T,

    /// Mean of the Y values.
    pub avg_y: T,

    /// Slope of the fitted line.
    pub slope: T,

    /// Intercept of the fitted line.
    pub intercept: T,

    /// Coefficient of determination in [0, 1]; `None` when omitted under
    /// the slope-only constant-Y policy.
    pub r2: Option<T>,

    /// Number of pairs the fit was derived from.
    pub pairs_used: usize,

    /// Number of entities excluded for missing either attribute.
    pub excluded: usize,
}

impl<T: Float> RegrResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Check if R² was computed.
    pub fn has_r2(&self) -> bool {
        self.r2.is_some()
    }

    /// Predict the y-value for a given x using the fitted line.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for RegrResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Regression Summary:")?;
        writeln!(f, "  Pairs used: {}", self.pairs_used)?;
        writeln!(f, "  Excluded:   {}", self.excluded)?;
        writeln!(f)?;
        writeln!(f, "  Mean X:     {:>12.6}", self.avg_x)?;
        writeln!(f, "  Mean Y:     {:>12.6}", self.avg_y)?;
        writeln!(f, "  Slope:      {:>12.6}", self.slope)?;
        writeln!(f, "  Intercept:  {:>12.6}", self.intercept)?;
        match self.r2 {
            Some(r2) => writeln!(f, "  R^2:        {:>12.6}", r2)?,
            None => writeln!(f, "  R^2:        omitted (constant Y)")?,
        }
        Ok(())
    }
}
