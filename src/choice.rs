//! Weighted choices.
//!
//! A [`Choice`] pairs a value with a strictly positive relative weight. The
//! weight only matters relative to the other choices in the same population.

use thiserror::Error;

/// Errors for building weighted choices.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChoiceError {
    /// Weight is not strictly positive (this includes NaN).
    #[error("weight must be > 0 (got {0})")]
    InvalidWeight(f64),
}

/// A value that will be picked with a relative weighting of `weight`.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice<T> {
    value: T,
    weight: f64,
}

impl<T> Choice<T> {
    /// Create a choice with the given relative weight.
    ///
    /// Fails unless `weight > 0.0`. NaN never compares greater than zero, so it is
    /// rejected too.
    pub fn new(value: T, weight: f64) -> Result<Self, ChoiceError> {
        if weight > 0.0 {
            Ok(Self { value, weight })
        } else {
            Err(ChoiceError::InvalidWeight(weight))
        }
    }

    /// A choice with weight `1.0`.
    pub fn uniform(value: T) -> Self {
        Self { value, weight: 1.0 }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Split back into `(value, weight)`.
    pub fn into_parts(self) -> (T, f64) {
        (self.value, self.weight)
    }
}

impl<T> TryFrom<(T, f64)> for Choice<T> {
    type Error = ChoiceError;

    fn try_from((value, weight): (T, f64)) -> Result<Self, Self::Error> {
        Self::new(value, weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_weights() {
        let err = Choice::new("a", 0.0).expect_err("zero weight rejected");
        assert_eq!(err, ChoiceError::InvalidWeight(0.0));
        let err = Choice::new("a", -2.5).expect_err("negative weight rejected");
        assert_eq!(err, ChoiceError::InvalidWeight(-2.5));
        let err = Choice::new("a", f64::NAN).expect_err("nan weight rejected");
        assert!(matches!(err, ChoiceError::InvalidWeight(w) if w.is_nan()));
    }

    #[test]
    fn accepts_positive_weights() {
        let c = Choice::new('x', 1e-12).expect("weight ok");
        assert_eq!(*c.value(), 'x');
        assert_eq!(c.weight(), 1e-12);

        let c = Choice::new('y', f64::INFINITY).expect("weight ok");
        assert!(c.weight().is_infinite());
    }

    #[test]
    fn uniform_has_unit_weight() {
        let c = Choice::uniform(7u8);
        assert_eq!(c.weight(), 1.0);
        assert_eq!(c, Choice::new(7u8, 1.0).expect("weight ok"));
    }

    #[test]
    fn try_from_pair() {
        let c = Choice::try_from(("b", 3.0)).expect("weight ok");
        assert_eq!(c.into_parts(), ("b", 3.0));
        assert!(Choice::try_from(("b", 0.0)).is_err());
    }

    #[test]
    fn error_message_names_weight() {
        let err = Choice::new((), -1.0).expect_err("negative weight rejected");
        assert_eq!(err.to_string(), "weight must be > 0 (got -1)");
    }
}
