#![no_std]
#![doc = include_str!("../README.md")]
//!
//! # Quick Start
//!
//! ```rust
//! use step_range::StepRange;
//!
//! // A range from 15 to 32 stepping by 3: 15, 18, 21, 24, 27, 30
//! let range = StepRange::with_step(15.0, 32.0, 3.0);
//!
//! assert_eq!(range.start(), 15.0);
//! assert_eq!(range.end(), 32.0);
//! assert_eq!(range.true_end(), 30.0);
//!
//! // Indexing and its inverse
//! assert_eq!(range.at(1.0), 18.0);
//! assert_eq!(range.index_of(18.0), 1.0);
//! assert_eq!(range.index_of(19.0), -1.0);
//!
//! // Iterate over the members
//! for value in &range {
//!     println!("{}", value);
//! }
//! ```
//!
//! # Combining Ranges
//!
//! ```rust
//! use step_range::{RangeError, StepRange};
//!
//! let a = StepRange::new(0.0, 10.0);
//! let b = StepRange::new(5.0, 15.0);
//!
//! assert_eq!(a.union(&b), Ok(StepRange::new(0.0, 15.0)));
//! assert_eq!(a.intersection(&b), Some(StepRange::new(5.0, 10.0)));
//! assert!(a.intersects(&b));
//!
//! let stepped = StepRange::with_step(0.0, 10.0, 2.0);
//! assert!(matches!(a.union(&stepped), Err(RangeError::StepMismatch { .. })));
//! ```
//!
//! # Clamping and Wrapping
//!
//! Both operations respect the step grid: values land on a member of the
//! range.
//!
//! ```rust
//! use step_range::StepRange;
//!
//! let range = StepRange::with_step(0.0, 10.0, 2.0);
//!
//! assert_eq!(range.clamp(5.0), 6.0);
//! assert_eq!(range.clamp(11.0), 10.0);
//!
//! assert_eq!(range.wrap(11.0), 0.0);
//! assert_eq!(range.wrap(-1.0), 10.0);
//! ```
//!
//! # Features
//!
//! - `std` (default): use the standard library's float math.
//! - `serde` (default): serialize a range as `{"start", "end", "step"}`.
//!
//! Without `std` the crate only needs `alloc`.

extern crate alloc;

mod error;
mod id;
mod iter;
mod step_range;
mod value;

pub use error::{RangeError, Result};
pub use id::RangeId;
pub use iter::Iter;
pub use step_range::{Probe, RangeParts, StepRange};
pub use value::RangeValue;

#[cfg(test)]
#[path = "tests/step_range_tests.rs"]
mod tests;
