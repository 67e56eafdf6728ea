//! Error types for regression operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while configuring and
//! running a regression, covering both builder misuse and the statistical
//! failure modes of ordinary least squares.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the number of
//!   pairs that survived filtering).
//! * **Typed degeneracy**: Undefined statistics are reported as distinct
//!   variants, never as NaN or infinity posing as a result.
//! * **No-std**: Implements `Display` always and `std::error::Error` when
//!   the `std` feature is enabled.
//!
//! ## Key concepts
//!
//! 1. **Configuration validation**: Missing, empty, or doubly-set builder
//!    parameters.
//! 2. **Insufficient data**: Fewer than two valid pairs determine no line.
//! 3. **Degenerate input**: Zero variance in X (slope undefined) or in Y
//!    (R² undefined).
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation or the detection itself.
//! * This module does not provide error recovery strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for regression operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegrError {
    /// A required builder parameter was never configured.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// An attribute name is the empty string.
    EmptyAttributeName {
        /// Which axis the name was configured for ("x" or "y").
        which: &'static str,
    },

    /// A label selector was configured but is the empty string.
    EmptyLabel,

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Fewer than two valid pairs survived filtering; no line is determined.
    InsufficientData {
        /// Number of valid pairs found.
        got: usize,
        /// Minimum required pairs.
        min: usize,
    },

    /// All X values are identical; slope and R² are undefined.
    ZeroXVariance {
        /// Number of pairs that were accumulated.
        pairs: usize,
    },

    /// All Y values are identical while X varies; R² is undefined.
    ///
    /// Raised only under [`ConstantYPolicy::Fail`]; see
    /// [`ConstantYPolicy::SlopeOnly`] for the partial-result alternative.
    ///
    /// [`ConstantYPolicy::Fail`]: crate::prelude::ConstantYPolicy::Fail
    /// [`ConstantYPolicy::SlopeOnly`]: crate::prelude::ConstantYPolicy::SlopeOnly
    ZeroYVariance {
        /// Number of pairs that were accumulated.
        pairs: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RegrError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MissingParameter { parameter } => {
                write!(f, "Required parameter '{parameter}' was not configured")
            }
            Self::EmptyAttributeName { which } => {
                write!(f, "Attribute name for {which} is empty")
            }
            Self::EmptyLabel => write!(f, "Label selector is empty"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::InsufficientData { got, min } => {
                write!(
                    f,
                    "Insufficient data: {got} valid pairs, need at least {min}"
                )
            }
            Self::ZeroXVariance { pairs } => {
                write!(
                    f,
                    "Zero variance in x across {pairs} pairs: slope is undefined"
                )
            }
            Self::ZeroYVariance { pairs } => {
                write!(
                    f,
                    "Zero variance in y across {pairs} pairs: r2 is undefined"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RegrError {}
