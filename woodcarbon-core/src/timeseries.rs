//! Numeric aliases and the annual time axis shared by every component.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

pub type FloatValue = f64;

/// Whole years since the start of a run.
pub type Year = u32;

/// Annual time axis covering `[start, end)` in one-year steps.
///
/// The building model runs on an inclusive horizon (`0..=horizon`) while the
/// product pool model uses an exclusive one, so both constructors are provided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearAxis {
    start: Year,
    end: Year,
}

impl YearAxis {
    /// Years `0, 1, ..., horizon` (inclusive), saturating at `Year::MAX`
    pub fn inclusive(horizon: Year) -> Self {
        Self {
            start: 0,
            end: horizon.saturating_add(1),
        }
    }

    /// Years `0, 1, ..., horizon - 1`
    pub fn exclusive(horizon: Year) -> Self {
        Self {
            start: 0,
            end: horizon,
        }
    }

    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn iter(&self) -> impl Iterator<Item = Year> {
        self.start..self.end
    }

    /// Years that are multiples of `period` inside the axis, starting at 0.
    ///
    /// Returns an empty list when `period` is zero.
    pub fn multiples_of(&self, period: Year) -> Vec<Year> {
        if period == 0 {
            return Vec::new();
        }
        self.iter().filter(|year| year % period == 0).collect()
    }

    /// The axis as floating point values, ready for plotting
    pub fn values(&self) -> Array1<FloatValue> {
        self.iter().map(FloatValue::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn inclusive_axis_contains_horizon() {
        let axis = YearAxis::inclusive(4);
        assert_eq!(axis.len(), 5);
        assert_eq!(axis.iter().next(), Some(0));
        assert_eq!(axis.iter().last(), Some(4));
        assert_eq!(axis.values(), array![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn exclusive_axis_stops_before_horizon() {
        let axis = YearAxis::exclusive(3);
        assert_eq!(axis.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(YearAxis::exclusive(0).is_empty());
    }

    #[test]
    fn inclusive_axis_saturates_at_max_year() {
        let axis = YearAxis::inclusive(Year::MAX);
        assert!(!axis.is_empty());
        assert_eq!(axis.len(), Year::MAX as usize);
    }

    #[test]
    fn multiples_start_at_zero() {
        let axis = YearAxis::exclusive(200);
        assert_eq!(axis.multiples_of(80), vec![0, 80, 160]);
        assert!(axis.multiples_of(0).is_empty());
    }
}
