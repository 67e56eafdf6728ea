//! High-level API for entity regression.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder for configuring which attributes to regress and how to
//! treat degenerate input, producing a model that can be fitted against
//! entity collections or pre-extracted pair sequences.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder; only the two attribute names are
//!   required.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RegrBuilder`] via `Regr::new()`.
//! 2. Chain configuration methods (`.x_attribute()`, `.y_attribute()`, ...).
//! 3. Call `.build()` to validate and obtain a [`RegrModel`].
//! 4. Call `.fit(&entities)` or `.fit_pairs(..)` on the model.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::RegrExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::regression::{ConstantYPolicy, LineFit};
pub use crate::engine::executor::{RegrConfig, Scalar};
pub use crate::engine::output::RegrResult;
pub use crate::primitives::entity::{AttributeValue, Entity};
pub use crate::primitives::errors::RegrError;
pub use crate::primitives::pair::Pair;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an entity regression.
#[derive(Debug, Clone)]
pub struct RegrBuilder<T> {
    /// Name of the attribute supplying X values.
    pub x_attribute: Option<String>,

    /// Name of the attribute supplying Y values.
    pub y_attribute: Option<String>,

    /// Optional label selector.
    pub label: Option<String>,

    /// Policy for constant-Y input.
    pub constant_y: Option<ConstantYPolicy>,

    /// Parallel accumulation hint.
    #[cfg(feature = "parallel")]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: Float> Default for RegrBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RegrBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            x_attribute: None,
            y_attribute: None,
            label: None,
            constant_y: None,
            #[cfg(feature = "parallel")]
            parallel: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    /// Set the name of the attribute supplying X values.
    pub fn x_attribute(mut self, name: impl Into<String>) -> Self {
        if self.x_attribute.is_some() {
            self.duplicate_param = Some("x_attribute");
        }
        self.x_attribute = Some(name.into());
        self
    }

    /// Set the name of the attribute supplying Y values.
    pub fn y_attribute(mut self, name: impl Into<String>) -> Self {
        if self.y_attribute.is_some() {
            self.duplicate_param = Some("y_attribute");
        }
        self.y_attribute = Some(name.into());
        self
    }

    /// Restrict the fit to entities carrying the given label.
    ///
    /// Entity collections already filtered by an external query layer pass
    /// through unchanged.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        if self.label.is_some() {
            self.duplicate_param = Some("label");
        }
        self.label = Some(label.into());
        self
    }

    /// Set the policy for constant-Y input (R² undefined, slope not).
    pub fn on_constant_y(mut self, policy: ConstantYPolicy) -> Self {
        if self.constant_y.is_some() {
            self.duplicate_param = Some("on_constant_y");
        }
        self.constant_y = Some(policy);
        self
    }

    /// Accumulate chunked partial sums on multiple cores.
    #[cfg(feature = "parallel")]
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<RegrModel<T>, RegrError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let x_attribute = self.x_attribute.ok_or(RegrError::MissingParameter {
            parameter: "x_attribute",
        })?;
        let y_attribute = self.y_attribute.ok_or(RegrError::MissingParameter {
            parameter: "y_attribute",
        })?;

        let config = RegrConfig {
            x_attribute,
            y_attribute,
            label: self.label,
            constant_y: self.constant_y.unwrap_or_default(),
            #[cfg(feature = "parallel")]
            parallel: self.parallel.unwrap_or(false),
        };
        Validator::validate_config(&config)?;

        Ok(RegrModel {
            config,
            _marker: PhantomData,
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated regression configuration, ready to fit entity collections.
#[derive(Debug, Clone)]
pub struct RegrModel<T> {
    config: RegrConfig,
    _marker: PhantomData<T>,
}

impl<T: Scalar> RegrModel<T> {
    /// Fit the regression over an entity sequence.
    ///
    /// Entities missing either attribute are excluded; the count of
    /// exclusions is reported on the result.
    pub fn fit<'a, I>(&self, entities: I) -> Result<RegrResult<T>, RegrError>
    where
        I: IntoIterator<Item = &'a Entity>,
    {
        RegrExecutor::execute(&self.config, entities)
    }

    /// Fit the regression over already-extracted (x, y) observations.
    pub fn fit_pairs<I, P>(&self, pairs: I) -> Result<RegrResult<T>, RegrError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Pair<T>>,
    {
        RegrExecutor::execute_pairs(&self.config, pairs.into_iter().map(Into::into))
    }

    /// The resolved configuration backing this model.
    pub fn config(&self) -> &RegrConfig {
        &self.config
    }
}
