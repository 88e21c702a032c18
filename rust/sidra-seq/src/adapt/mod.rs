//! Lazy sequence adaptors.
//!
//! Each adaptor wraps one or two input sequences and transforms items on
//! demand; no work happens until a terminal drives the pipeline. The
//! module provides:
//!
//! - [`map`]: per-item projection.
//! - [`filter`] / [`filter_by`]: predicate selection, optionally through
//!   a projection.
//! - [`zip`]: positional pairing of two sequences.
//! - [`enumerate`]: pairing items with a zero-based index.
//! - [`assert_sorted`]: caller-asserted sortedness marker.
//!
//! Adaptors propagate the capability tier of their inputs: `map`,
//! `enumerate` and `assert_sorted` keep the input tier, `zip` keeps the
//! weaker of its two inputs, and `filter` caps the result at
//! bidirectional since match positions cannot be computed in O(1).

pub mod enumerate;
pub mod filter;
pub mod map;
pub mod sorted;
pub mod zip;

pub use enumerate::{Enumerate, EnumerateStage, enumerate};
pub use filter::{Filter, FilterByStage, FilterStage, IdentityFn, filter, filter_by};
pub use map::{Map, MapStage, map};
pub use sorted::{AssertSorted, AssertSortedStage, assert_sorted};
pub use zip::{Zip, zip};
