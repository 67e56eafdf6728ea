//! Lazy pair filtering over entity sequences.
//!
//! ## Purpose
//!
//! This module turns a sequence of entities plus two attribute names into
//! the lazy sequence of (x, y) pairs for entities that carry both
//! attributes. Entities missing either value are silently excluded and
//! counted.
//!
//! ## Design notes
//!
//! * **Lazy**: Pairs are produced on demand and consumed once by the
//!   accumulator; the parallel path may materialize them eagerly, which is
//!   statistically identical.
//! * **Counted exclusion**: The number of skipped entities is tracked so the
//!   result record can report it.
//! * **Borrowed items**: The filter accepts owned or borrowed entities via
//!   `Borrow<Entity>`; the attribute names are borrowed independently of
//!   the entity sequence.
//!
//! ## Invariants
//!
//! * The produced sequence is finite (bounded by the input size).
//! * After exhaustion, yielded + excluded equals the number of entities
//!   consumed.
//!
//! ## Non-goals
//!
//! * This module does not select entities by label (engine's concern).
//! * This module does not accumulate or derive statistics.

// External dependencies
use core::borrow::Borrow;
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::extract;
use crate::primitives::entity::Entity;
use crate::primitives::pair::Pair;

// ============================================================================
// Pair Filter
// ============================================================================

/// Lazy iterator over the (x, y) pairs of an entity sequence.
#[derive(Debug)]
pub struct Pairs<'a, T, I> {
    entities: I,
    x_attribute: &'a str,
    y_attribute: &'a str,
    excluded: usize,
    _marker: PhantomData<T>,
}

impl<'a, T, I> Pairs<'a, T, I> {
    /// Number of entities skipped so far for missing either attribute.
    ///
    /// Only meaningful once the iterator has been exhausted.
    pub fn excluded(&self) -> usize {
        self.excluded
    }
}

impl<'a, T, I> Iterator for Pairs<'a, T, I>
where
    T: Float,
    I: Iterator,
    I::Item: Borrow<Entity>,
{
    type Item = Pair<T>;

    fn next(&mut self) -> Option<Pair<T>> {
        for entity in self.entities.by_ref() {
            let entity = entity.borrow();
            let x = extract::numeric(entity, self.x_attribute);
            let y = extract::numeric(entity, self.y_attribute);
            match (x, y) {
                (Some(x), Some(y)) => return Some(Pair::new(x, y)),
                _ => self.excluded += 1,
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every remaining entity yields at most one pair.
        (0, self.entities.size_hint().1)
    }
}

/// Filter an entity sequence down to its (x, y) pairs.
pub fn filter_pairs<'a, T, I>(
    entities: I,
    x_attribute: &'a str,
    y_attribute: &'a str,
) -> Pairs<'a, T, I::IntoIter>
where
    T: Float,
    I: IntoIterator,
    I::Item: Borrow<Entity>,
{
    Pairs {
        entities: entities.into_iter(),
        x_attribute,
        y_attribute,
        excluded: 0,
        _marker: PhantomData,
    }
}
