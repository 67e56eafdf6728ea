//! # regr — Ordinary Least-Squares Regression over Labeled Entities
//!
//! Simple linear regression for collections of labeled entities that expose
//! two numeric attributes: an independent variable X and a dependent
//! variable Y. Given the entities and the two attribute names, `regr`
//! computes the least-squares statistics over the subset of entities that
//! actually carry both attributes: mean of X, mean of Y, slope, intercept,
//! and the coefficient of determination (R²).
//!
//! ## What it handles for you
//!
//! * **Missing data**: entities missing either attribute, carrying a null,
//!   or carrying a non-numeric value are filtered out, not errored on.
//! * **Degenerate input**: fewer than two valid pairs, zero variance in X,
//!   and zero variance in Y are reported as typed errors instead of leaking
//!   NaN into the statistics.
//! * **Single-pass accumulation**: the six regression sums are collected in
//!   one pass; with the `parallel` feature, in merged parallel chunks.
//!
//! ## Quick Start
//!
//! ```rust
//! use regr::prelude::*;
//!
//! let entities = vec![
//!     Entity::new("SAMPLE").with("x_property", 1.0).with("y_property", 1.0),
//!     Entity::new("SAMPLE").with("x_property", 2.0).with("y_property", 3.0),
//!     Entity::new("SAMPLE").with("y_property", 10_000.0), // no x: excluded
//!     Entity::new("SAMPLE").with("x_property", 3.0).with("y_property", 6.0),
//! ];
//!
//! let model: RegrModel<f64> = Regr::new()
//!     .x_attribute("x_property")
//!     .y_attribute("y_property")
//!     .label("SAMPLE")
//!     .build()?;
//!
//! let result = model.fit(&entities)?;
//!
//! assert_eq!(result.pairs_used, 3);
//! assert_eq!(result.excluded, 1);
//! assert!((result.slope - 2.5).abs() < 1e-9);
//! assert!((result.avg_x - 2.0).abs() < 1e-9);
//! # Result::<(), RegrError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! `fit` returns a `Result<RegrResult<T>, RegrError>`.
//!
//! - **`Ok(RegrResult<T>)`**: the five statistics plus filtering metadata.
//! - **`Err(RegrError)`**: a configuration problem or a statistical failure
//!   mode (insufficient data, zero variance).
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use regr::prelude::*;
//! # let entities = vec![
//! #     Entity::new("S").with("x", 1.0).with("y", 2.0),
//! #     Entity::new("S").with("x", 2.0).with("y", 4.0),
//! # ];
//! let model: RegrModel<f64> = Regr::new().x_attribute("x").y_attribute("y").build()?;
//!
//! match model.fit(&entities) {
//!     Ok(result) => {
//!         assert!((result.slope - 2.0).abs() < 1e-9);
//!     }
//!     Err(e) => {
//!         // e is RegrError
//!         panic!("fit failed: {}", e);
//!     }
//! }
//! # Result::<(), RegrError>::Ok(())
//! ```
//!
//! A single point determines no line, and constant X determines no slope;
//! both surface as typed errors:
//!
//! ```rust
//! use regr::prelude::*;
//!
//! let model = Regr::new().x_attribute("x").y_attribute("y").build()?;
//!
//! let one_point = [Pair::new(5.0, 5.0)];
//! assert_eq!(
//!     model.fit_pairs(one_point),
//!     Err(RegrError::InsufficientData { got: 1, min: 2 })
//! );
//!
//! let constant_x = [(1.0, 1.0), (1.0, 2.0), (1.0, 3.0)];
//! assert_eq!(
//!     model.fit_pairs(constant_x),
//!     Err(RegrError::ZeroXVariance { pairs: 3 })
//! );
//! # Result::<(), RegrError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! regr = { version = "0.2", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and error types.
mod primitives;

// Layer 2: Math - single-pass accumulation arithmetic.
mod math;

// Layer 3: Algorithms - extraction, filtering, and OLS solving.
mod algorithms;

// Layer 4: Engine - validation, orchestration, and output.
mod engine;

// High-level fluent API for entity regression.
mod api;

// Standard regression prelude.
pub mod prelude {
    pub use crate::api::{
        AttributeValue, ConstantYPolicy,
        ConstantYPolicy::Fail,
        ConstantYPolicy::SlopeOnly,
        Entity, LineFit, Pair, RegrBuilder as Regr, RegrConfig, RegrError, RegrModel, RegrResult,
        Scalar,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
