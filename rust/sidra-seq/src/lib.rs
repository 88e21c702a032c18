//! Composable, lazy traversal of item sequences.
//!
//! This crate defines a capability-tiered cursor protocol for walking
//! sequences of values, together with lazy adaptors, consuming terminals
//! and a left-to-right pipeline operator. It offers:
//!
//! - **Tiered capabilities**: sequential, bidirectional and random-access
//!   traversal, with an orthogonal sortedness marker, all resolved at
//!   compile time per concrete sequence type
//! - **Fallback derivations**: a new sequence type implements three
//!   forward primitives and inherits working (if slower) versions of
//!   everything else, overriding them as its structure allows
//! - **Lazy composition**: adaptors wrap without traversing, terminals
//!   drive the whole pipeline in a single pass
//!
//! # Key Types
//!
//! - [`Sequence`] - The forward traversal protocol and its derived operations
//! - [`BidirectionalSequence`] / [`RandomAccessSequence`] - Capability extensions
//! - [`SequenceMut`] - The write-capable traversal flavor
//! - [`Stage`] / [`Pipe`] - Pipeline composition, also spelled `|`
//!
//! # Example
//!
//! ```
//! use sidra_seq::{filter, map, reduce, seq};
//!
//! let scores = vec![71u32, 48, 95, 62, 88];
//! let passing_total = seq(&scores)
//!     | filter(|s: &u32| *s >= 60)
//!     | map(|s: &u32| *s)
//!     | reduce(|acc, s| acc + s, 0u32);
//! assert_eq!(passing_total, 316);
//! ```

pub mod adapt;
pub mod bridge;
pub mod pipe;
pub mod sequence;
pub mod sequence_mut;
pub mod source;
pub mod terminal;

pub use adapt::{
    AssertSorted, Enumerate, Filter, Map, Zip, assert_sorted, enumerate, filter, filter_by, map,
    zip,
};
pub use bridge::{IterSeq, Items, from_iter};
pub use pipe::{Pipe, Stage};
pub use sequence::{BidirectionalSequence, RandomAccessSequence, Sequence};
pub use sequence_mut::SequenceMut;
pub use source::{AsSequence, Iota, SliceSeq, SliceSeqMut, iota, iota_from, iota_to, seq};
pub use terminal::{all, any, apply, copy, drain, fill, none, reduce, sink, unzip};
