//! JSON to model hydration.
//!
//! A [`Hydrator`] is a plain function that fills one concern of a target
//! entity from a JSON object: the scalar fields, the image list, the
//! embedded owner, a nested page of tracks. An [`AggregateHydrator`] runs
//! an ordered list of them over the same `(source, target)` pair, and the
//! [`compose`] module holds the fixed list used by each API operation.
//!
//! Entities that show up nested inside other payloads (as page items,
//! collection entries or references) implement [`Hydrate`], which names
//! the hydrators that build them in that position.

use serde_json::Value;

use crate::error::Result;

pub mod album;
pub mod artist;
pub mod collection;
pub mod compose;
pub mod image;
pub mod pagination;
pub mod playlist;
pub mod source;
pub mod track;
pub mod user;

/// Fill part of `T` from a JSON object.
pub type Hydrator<T> = fn(&Value, &mut T) -> Result<()>;

/// Entity that can be built from a JSON object on its own.
pub trait Hydrate: Default + Sized + 'static {
    /// Hydrators applied, in order, when this entity is nested in another payload.
    const HYDRATORS: &'static [Hydrator<Self>];

    /// Build a fresh entity from `source`.
    fn from_json(source: &Value) -> Result<Self> {
        apply(Self::HYDRATORS, source, Self::default())
    }
}

/// Entity that can appear in a non-paginated batch response.
pub trait Batched: Hydrate {
    /// Key of the array holding the batch, e.g. `"albums"`.
    const COLLECTION_KEY: &'static str;
}

fn apply<T>(hydrators: &[Hydrator<T>], source: &Value, mut target: T) -> Result<T> {
    source::expect_object(source)?;
    for hydrator in hydrators {
        hydrator(source, &mut target)?;
    }
    Ok(target)
}

/// Ordered composition of hydrators over a single target.
///
/// The first failing hydrator aborts the pass; the partially filled
/// target is dropped.
pub struct AggregateHydrator<T> {
    hydrators: Vec<Hydrator<T>>,
}

impl<T> AggregateHydrator<T> {
    pub fn new() -> Self {
        Self {
            hydrators: Vec::new(),
        }
    }

    /// Register a hydrator after those already added.
    pub fn add(&mut self, hydrator: Hydrator<T>) -> &mut Self {
        self.hydrators.push(hydrator);
        self
    }

    pub fn len(&self) -> usize {
        self.hydrators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hydrators.is_empty()
    }

    /// Run every hydrator, in registration order, against `target`.
    pub fn hydrate(&self, source: &Value, target: T) -> Result<T> {
        apply(&self.hydrators, source, target)
    }
}

impl<T: Default> AggregateHydrator<T> {
    /// Hydrate a fresh default target.
    pub fn hydrate_default(&self, source: &Value) -> Result<T> {
        self.hydrate(source, T::default())
    }
}

impl<T> Default for AggregateHydrator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<&[Hydrator<T>]> for AggregateHydrator<T> {
    fn from(hydrators: &[Hydrator<T>]) -> Self {
        Self {
            hydrators: hydrators.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpotifyError;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq)]
    struct Trace {
        steps: Vec<&'static str>,
    }

    fn first(_: &Value, target: &mut Trace) -> Result<()> {
        target.steps.push("first");
        Ok(())
    }

    fn second(_: &Value, target: &mut Trace) -> Result<()> {
        target.steps.push("second");
        Ok(())
    }

    fn fails(_: &Value, _: &mut Trace) -> Result<()> {
        Err(SpotifyError::mapping("boom"))
    }

    #[test]
    fn test_runs_in_registration_order() {
        let mut hydrators: AggregateHydrator<Trace> = AggregateHydrator::new();
        hydrators.add(second).add(first);

        let trace = hydrators.hydrate_default(&json!({})).unwrap();
        assert_eq!(trace.steps, vec!["second", "first"]);
    }

    #[test]
    fn test_first_error_aborts() {
        let mut hydrators: AggregateHydrator<Trace> = AggregateHydrator::new();
        hydrators.add(first).add(fails).add(second);

        let err = hydrators.hydrate_default(&json!({})).unwrap_err();
        assert!(matches!(err, SpotifyError::Mapping(ref m) if m == "boom"));
    }

    #[test]
    fn test_rejects_non_object_source() {
        let mut hydrators: AggregateHydrator<Trace> = AggregateHydrator::new();
        hydrators.add(first);

        assert!(hydrators.hydrate_default(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_from_slice() {
        let list: &[Hydrator<Trace>] = &[first, second];
        let hydrators = AggregateHydrator::from(list);
        assert_eq!(hydrators.len(), 2);
        assert!(!hydrators.is_empty());
    }

    #[test]
    fn test_hydrate_keeps_existing_target_state() {
        let mut hydrators: AggregateHydrator<Trace> = AggregateHydrator::new();
        hydrators.add(second);

        let seeded = Trace {
            steps: vec!["seed"],
        };
        let trace = hydrators.hydrate(&json!({}), seeded).unwrap();
        assert_eq!(trace.steps, vec!["seed", "second"]);
    }
}
