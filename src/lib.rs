//! `random_choices`: weighted random selection.
//!
//! Pick values from a population of `(value, weight)` pairs, proportionally to
//! weight, either with replacement (independent draws) or without (each entry at
//! most once per call, optionally removed for good).
//!
//! Exposed modules:
//! - `choice`: the weighted [`Choice`] value and its validation error.
//! - `randomizer`: the [`Randomizer`] sampler.
//! - `source`: the [`UniformSource`] capability samplers draw from.
//! - `stats`: cached derived views (cumulative/normalized weights).
//!
//! ```
//! use random_choices::{Choice, Randomizer};
//!
//! let mut r = Randomizer::seeded(7).with_population(vec![
//!     Choice::new("common", 60.0)?,
//!     Choice::new("rare", 9.0)?,
//!     Choice::uniform("legendary"),
//! ]);
//! assert_eq!(r.sample_with_replacement(3).len(), 3);
//! assert_eq!(r.sample_without_replacement(5, false).len(), 3);
//! assert!(r.is_empty());
//! # Ok::<(), random_choices::ChoiceError>(())
//! ```

#![forbid(unsafe_code)]

pub mod choice;
pub mod randomizer;
pub mod source;
pub mod stats;

pub use choice::{Choice, ChoiceError};
pub use randomizer::Randomizer;
pub use source::{RngSource, UniformSource};
pub use stats::DerivedStats;
