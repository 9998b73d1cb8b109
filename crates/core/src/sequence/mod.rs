use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Result, SortVizError};

/// Numeric element stored in a [`Sequence`].
pub type Value = i64;

/// Inclusive range random sequences are drawn from unless configured otherwise.
pub const DEFAULT_VALUE_RANGE: RangeInclusive<Value> = 10..=309;

/// Fixed-length container of values under sort.
///
/// The length only changes when the whole sequence is replaced between runs;
/// algorithms may permute and reassign values but never resize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence {
    values: Vec<Value>,
}

impl Sequence {
    /// Draws `size` values uniformly from `range`.
    pub fn random<R: Rng + ?Sized>(
        size: usize,
        range: RangeInclusive<Value>,
        rng: &mut R,
    ) -> Result<Self> {
        if size == 0 {
            return Err(SortVizError::InvalidSize { requested: size });
        }
        if range.is_empty() {
            return Err(SortVizError::InvalidConfig(format!(
                "value range {}..={} is empty",
                range.start(),
                range.end()
            )));
        }

        let values = (0..size).map(|_| rng.gen_range(range.clone())).collect();
        Ok(Self { values })
    }

    /// Fisher-Yates shuffle: walks from the last index down, swapping each
    /// slot with a uniformly chosen index in `[0, i]`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.values.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.values.swap(i, j);
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut [Value] {
        &mut self.values
    }

    pub fn get(&self, index: usize) -> Value {
        self.values[index]
    }

    pub fn set(&mut self, index: usize, value: Value) {
        self.values[index] = value;
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
    }

    pub fn max_value(&self) -> Option<Value> {
        self.values.iter().copied().max()
    }

    /// Position and value of the first negative element, if any.
    pub fn first_negative(&self) -> Option<(usize, Value)> {
        self.values
            .iter()
            .copied()
            .enumerate()
            .find(|(_, value)| *value < 0)
    }

    /// Position and value of the first element greater than `limit`, if any.
    pub fn first_above(&self, limit: Value) -> Option<(usize, Value)> {
        self.values
            .iter()
            .copied()
            .enumerate()
            .find(|(_, value)| *value > limit)
    }

    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|pair| pair[0] <= pair[1])
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl From<Vec<Value>> for Sequence {
    fn from(values: Vec<Value>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn random_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let sequence = Sequence::random(200, DEFAULT_VALUE_RANGE, &mut rng).unwrap();

        assert_eq!(sequence.len(), 200);
        assert!(sequence
            .values()
            .iter()
            .all(|value| DEFAULT_VALUE_RANGE.contains(value)));
    }

    #[test]
    fn rejects_zero_size() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = Sequence::random(0, DEFAULT_VALUE_RANGE, &mut rng).unwrap_err();
        assert!(matches!(err, SortVizError::InvalidSize { requested: 0 }));
    }

    #[test]
    fn shuffle_preserves_contents() {
        let identity: Vec<Value> = (0..64).collect();
        let mut rng = StdRng::seed_from_u64(99);
        let mut sequence = Sequence::from(identity.clone());
        sequence.shuffle(&mut rng);

        assert_ne!(sequence.values(), identity.as_slice());
        let mut values = sequence.into_values();
        values.sort_unstable();
        assert_eq!(values, identity);
    }

    #[test]
    fn shuffle_is_reproducible_from_seed() {
        let mut first = Sequence::from((0..32).collect::<Vec<Value>>());
        let mut second = first.clone();
        first.shuffle(&mut StdRng::seed_from_u64(3));
        second.shuffle(&mut StdRng::seed_from_u64(3));
        assert_eq!(first, second);
    }

    #[test]
    fn finds_first_negative() {
        let sequence = Sequence::from(vec![3, 0, -2, -7]);
        assert_eq!(sequence.first_negative(), Some((2, -2)));
        assert_eq!(Sequence::from(vec![1, 2]).first_negative(), None);
    }

    #[test]
    fn finds_first_value_above_limit() {
        let sequence = Sequence::from(vec![5, 12, 40]);
        assert_eq!(sequence.first_above(10), Some((1, 12)));
        assert_eq!(sequence.first_above(40), None);
        assert_eq!(sequence.max_value(), Some(40));
        assert_eq!(Sequence::default().max_value(), None);
    }
}
