//! Numeric attribute extraction.
//!
//! ## Purpose
//!
//! This module resolves a named attribute on an entity to a numeric value,
//! or to "absent". Absence is a normal, expected outcome of reading sparse
//! entity data, never an error.
//!
//! ## Key concepts
//!
//! * **Tagged dispatch**: Numeric vs. non-numeric is decided by matching the
//!   `AttributeValue` tag, not by coercion.
//! * **Absence**: A missing attribute, a `Null`, a text or boolean value, a
//!   non-finite float, and an integer that does not convert into the target
//!   type all extract to `None`.
//!
//! ## Invariants
//!
//! * Extraction is side-effect-free and never panics.
//! * Any value extraction returns is finite.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::entity::{AttributeValue, Entity};

/// Resolve a named attribute to a numeric value, if present and numeric.
///
/// Non-finite stored floats are treated as absent: admitting a NaN or an
/// infinity into the accumulation would poison every derived statistic.
#[inline]
pub fn numeric<T: Float>(entity: &Entity, attribute: &str) -> Option<T> {
    match entity.attribute(attribute)? {
        AttributeValue::Integer(value) => T::from(*value).filter(|v| v.is_finite()),
        AttributeValue::Float(value) => T::from(*value).filter(|v| v.is_finite()),
        AttributeValue::Text(_) | AttributeValue::Boolean(_) | AttributeValue::Null => None,
    }
}
