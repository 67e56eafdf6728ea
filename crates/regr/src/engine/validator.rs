//! Input validation for regression configuration.
//!
//! ## Purpose
//!
//! This module provides validation functions for the resolved regression
//! configuration: attribute names, the optional label selector, and builder
//! parameter hygiene.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not filter or transform entity data.
//! * This module does not detect statistical degeneracy (solver's concern).

// Internal dependencies
use crate::engine::executor::RegrConfig;
use crate::primitives::errors::RegrError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for regression configuration.
///
/// Provides static methods returning `Result<(), RegrError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate an attribute name for the given axis ("x" or "y").
    pub fn validate_attribute(name: &str, which: &'static str) -> Result<(), RegrError> {
        if name.is_empty() {
            return Err(RegrError::EmptyAttributeName { which });
        }
        Ok(())
    }

    /// Validate the optional label selector.
    pub fn validate_label(label: Option<&str>) -> Result<(), RegrError> {
        if let Some(label) = label {
            if label.is_empty() {
                return Err(RegrError::EmptyLabel);
            }
        }
        Ok(())
    }

    /// Validate a fully resolved configuration.
    pub fn validate_config(config: &RegrConfig) -> Result<(), RegrError> {
        Self::validate_attribute(&config.x_attribute, "x")?;
        Self::validate_attribute(&config.y_attribute, "y")?;
        Self::validate_label(config.label.as_deref())?;
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RegrError> {
        if let Some(parameter) = duplicate_param {
            return Err(RegrError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
